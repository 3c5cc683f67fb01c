use std::collections::BTreeSet;

/// Go 保留的程序入口包名
pub const ENTRY_POINT_PACKAGE: &str = "main";

/// 包事实 - 一个包及其源码中出现的全部 import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFact {
    /// 包导入路径: "example.com/app/internal/db"
    pub path: String,
    /// 是否为入口包 (package main)
    pub is_entry_point: bool,
    /// 原始 import 路径 (含外部依赖)
    pub imports: BTreeSet<String>,
}

impl PackageFact {
    /// 由声明的包名构建，`main` 即入口包
    pub fn new<I, S>(path: &str, name: &str, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.to_string(),
            is_entry_point: name == ENTRY_POINT_PACKAGE,
            imports: imports.into_iter().map(Into::into).collect(),
        }
    }
}

/// 加载结果
#[derive(Debug, Clone)]
pub struct LoadedModule {
    /// go.mod 中的 module 路径
    pub module_path: String,
    /// 按路径排序的包
    pub packages: Vec<PackageFact>,
}
