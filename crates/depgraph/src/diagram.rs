use crate::graph::ImportGraph;
use crate::labels::Labels;
use serde::Serialize;

/// 图中的一条边: 被依赖方 -> 依赖方
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramEdge {
    /// importee 标签
    pub from: String,
    /// importer 标签
    pub to: String,
}

/// 节点声明
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramNode {
    pub label: String,
    /// 节点 key (包路径)
    pub name: String,
}

/// 已分配标签的图
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagram {
    pub edges: Vec<DiagramEdge>,
    pub nodes: Vec<DiagramNode>,
}

impl Diagram {
    /// 为图中所有节点分配标签
    ///
    /// 按边的顺序分配 (先 importee 后 importer)，再补上没有边的 importer。
    /// 每个分配过标签的节点都会声明，边不会指向未声明的节点。
    pub fn from_graph(graph: &ImportGraph) -> Self {
        let mut labels = Labels::new();

        let edges = graph
            .edges()
            .map(|(importer, importee)| {
                let from = labels.label(importee).to_string();
                let to = labels.label(importer).to_string();
                DiagramEdge { from, to }
            })
            .collect();

        for importer in graph.importers() {
            labels.label(importer);
        }

        let nodes = labels
            .iter()
            .map(|(label, name)| DiagramNode {
                label: label.to_string(),
                name: name.to_string(),
            })
            .collect();

        Self { edges, nodes }
    }

    pub fn node(&self, name: &str) -> Option<&DiagramNode> {
        self.nodes.iter().find(|n| n.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_graph_labels_importee_first() {
        let mut graph = ImportGraph::new();
        graph.add_edge("app/a", "app/b");
        graph.add_node("app/b");

        let diagram = Diagram::from_graph(&graph);
        assert_eq!(
            diagram.edges,
            vec![DiagramEdge {
                from: "A".to_string(),
                to: "B".to_string()
            }]
        );
        assert_eq!(diagram.node("app/b").unwrap().label, "A");
        assert_eq!(diagram.node("app/a").unwrap().label, "B");
    }

    #[test]
    fn test_from_graph_declares_isolated_nodes() {
        let mut graph = ImportGraph::new();
        graph.add_edge("app/a", "app/b");
        graph.add_node("app/lonely");

        let diagram = Diagram::from_graph(&graph);
        assert_eq!(diagram.nodes.len(), 3);
        assert_eq!(diagram.node("app/lonely").unwrap().label, "C");
    }

    #[test]
    fn test_from_graph_declares_implicit_endpoints() {
        // importee 从未作为 importer 出现，仍需声明
        let mut graph = ImportGraph::new();
        graph.add_edge("app/a", "app/ghost");

        let diagram = Diagram::from_graph(&graph);
        let names: Vec<_> = diagram.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["app/ghost", "app/a"]);
    }

    #[test]
    fn test_from_graph_every_edge_label_declared() {
        let mut graph = ImportGraph::new();
        graph.add_edge("app/a", "app/b");
        graph.add_edge("app/a", "app/c");
        graph.add_edge("app/c", "app/b");
        graph.add_edge("app/d", "app/x");

        let diagram = Diagram::from_graph(&graph);
        for edge in &diagram.edges {
            assert!(diagram.nodes.iter().any(|n| n.label == edge.from));
            assert!(diagram.nodes.iter().any(|n| n.label == edge.to));
        }
        assert_eq!(diagram.nodes.len(), 5);
    }

    #[test]
    fn test_from_empty_graph() {
        let diagram = Diagram::from_graph(&ImportGraph::new());
        assert!(diagram.edges.is_empty());
        assert!(diagram.nodes.is_empty());
    }

    #[test]
    fn test_serializes_to_json() {
        let mut graph = ImportGraph::new();
        graph.add_edge("app/a", "app/b");

        let json = serde_json::to_value(Diagram::from_graph(&graph)).unwrap();
        assert_eq!(json["edges"][0]["from"], "A");
        assert_eq!(json["edges"][0]["to"], "B");
        assert_eq!(json["nodes"][1]["name"], "app/a");
    }
}
