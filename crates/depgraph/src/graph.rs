use crate::filter::PathFilter;
use gomod::PackageFact;
use std::collections::{BTreeMap, BTreeSet};

/// 入口包节点后缀
pub const ENTRY_POINT_MARKER: &str = "/MAIN";

/// import 图: importer -> importees
///
/// 有序容器保证遍历顺序稳定，相同输入生成相同的图
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportGraph {
    imports: BTreeMap<String, BTreeSet<String>>,
}

impl ImportGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// 构建模块内部 import 图
    ///
    /// 被忽略的包不产生节点；被忽略或不含模块路径的 import 不产生边。
    /// 即使包没有任何内部 import，也会作为节点出现。
    pub fn build(packages: &[PackageFact], module_path: &str, filter: &PathFilter) -> Self {
        let mut graph = Self::new();

        for package in packages {
            if filter.is_excluded(&package.path) {
                tracing::debug!("Ignoring package {}", package.path);
                continue;
            }

            let mut importer = filter.strip(&package.path);
            if package.is_entry_point {
                importer.push_str(ENTRY_POINT_MARKER);
            }

            let importees = graph.imports.entry(importer).or_default();

            for import in &package.imports {
                if filter.is_excluded(import) {
                    tracing::debug!("Ignoring import {} of {}", import, package.path);
                    continue;
                }
                // 外部依赖
                if !import.contains(module_path) {
                    continue;
                }
                importees.insert(filter.strip(import));
            }
        }

        graph
    }

    /// 添加一条边 (用于测试)
    #[doc(hidden)]
    pub fn add_edge(&mut self, importer: &str, importee: &str) {
        self.imports
            .entry(importer.to_string())
            .or_default()
            .insert(importee.to_string());
    }

    /// 添加一个无边节点 (用于测试)
    #[doc(hidden)]
    pub fn add_node(&mut self, importer: &str) {
        self.imports.entry(importer.to_string()).or_default();
    }

    /// 作为 importer 出现的节点，按字典序
    pub fn importers(&self) -> impl Iterator<Item = &str> {
        self.imports.keys().map(String::as_str)
    }

    /// 某个 importer 的 importees (用于测试)
    #[doc(hidden)]
    pub fn importees(&self, importer: &str) -> Option<&BTreeSet<String>> {
        self.imports.get(importer)
    }

    /// 所有边 (importer, importee)，按字典序
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.imports.iter().flat_map(|(importer, importees)| {
            importees
                .iter()
                .map(move |importee| (importer.as_str(), importee.as_str()))
        })
    }

    /// 所有节点 (importer 和 importee)
    pub fn nodes(&self) -> BTreeSet<&str> {
        self.edges()
            .map(|(_, importee)| importee)
            .chain(self.importers())
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.imports.values().map(BTreeSet::len).sum()
    }

    #[doc(hidden)]
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }
}
