//! gomod - Go 模块加载
//!
//! 读取 go.mod，发现磁盘上的包并扫描 import 声明

mod error;
mod loader;
mod modfile;
mod pattern;
mod scanner;
mod types;

pub use error::{LoadError, Result};
pub use loader::{GoModuleLoader, PackageLoader};
pub use modfile::ModFile;
pub use pattern::PackagePattern;
pub use scanner::{scan_source, SourceFile};
pub use types::{LoadedModule, PackageFact, ENTRY_POINT_PACKAGE};
