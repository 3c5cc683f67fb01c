//! depgraph - 包依赖图
//!
//! import 图构建、节点标签分配、Mermaid 生成

mod config;
mod diagram;
mod filter;
mod graph;
mod labels;
mod mermaid;

pub use config::{parse_ignore_list, ConfigError, GraphConfig};
pub use diagram::{Diagram, DiagramEdge, DiagramNode};
pub use filter::PathFilter;
pub use graph::{ImportGraph, ENTRY_POINT_MARKER};
pub use labels::Labels;
pub use mermaid::{Direction, MermaidGenerator};
