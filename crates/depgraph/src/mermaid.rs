use crate::config::ConfigError;
use crate::diagram::Diagram;
use crate::graph::ImportGraph;
use std::fmt;
use std::str::FromStr;

/// flowchart 方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// 自下而上: 被依赖的包在下
    #[default]
    BottomTop,
    TopDown,
    LeftRight,
    RightLeft,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::BottomTop => "BT",
            Direction::TopDown => "TD",
            Direction::LeftRight => "LR",
            Direction::RightLeft => "RL",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BT" => Ok(Direction::BottomTop),
            "TD" | "TB" => Ok(Direction::TopDown),
            "LR" => Ok(Direction::LeftRight),
            "RL" => Ok(Direction::RightLeft),
            _ => Err(ConfigError::InvalidDirection(s.to_string())),
        }
    }
}

/// Mermaid 图生成器
pub struct MermaidGenerator {
    direction: Direction,
}

impl MermaidGenerator {
    pub fn new() -> Self {
        Self {
            direction: Direction::default(),
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// 生成包依赖图 Mermaid 代码
    pub fn generate(&self, graph: &ImportGraph) -> String {
        self.render(&Diagram::from_graph(graph))
    }

    /// 箭头从被依赖方指向依赖方
    pub fn render(&self, diagram: &Diagram) -> String {
        let mut lines = vec![format!("flowchart {}", self.direction)];

        for edge in &diagram.edges {
            lines.push(format!("\t{} --> {}", edge.from, edge.to));
        }

        for node in &diagram.nodes {
            lines.push(format!("\t{}[{}]", node.label, node.name));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl Default for MermaidGenerator {
    fn default() -> Self {
        Self::new()
    }
}
