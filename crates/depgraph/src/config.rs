//! 图配置

use crate::filter::PathFilter;
use crate::mermaid::Direction;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid direction: {0} (expected BT, TD, TB, LR or RL)")]
    InvalidDirection(String),
}

/// 图配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    /// Go 包模式
    pub pattern: String,
    /// 忽略规则 (子串匹配)
    pub ignore: Vec<String>,
    /// 从每个包路径中移除的前缀
    pub ignore_prefix: String,
    pub direction: Direction,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            pattern: "./...".to_string(),
            ignore: Vec::new(),
            ignore_prefix: String::new(),
            direction: Direction::default(),
        }
    }
}

impl GraphConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    #[doc(hidden)]
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = var("MODGRAPH_PATTERN") {
            if !v.trim().is_empty() {
                config.pattern = v;
            }
        }

        if let Some(v) = var("MODGRAPH_IGNORE") {
            config.ignore = parse_ignore_list(&v);
        }

        if let Some(v) = var("MODGRAPH_IGNORE_PREFIX") {
            config.ignore_prefix = v;
        }

        if let Some(v) = var("MODGRAPH_DIRECTION") {
            match v.parse() {
                Ok(direction) => config.direction = direction,
                Err(e) => tracing::warn!("Ignoring MODGRAPH_DIRECTION: {}", e),
            }
        }

        config
    }

    pub fn path_filter(&self) -> PathFilter {
        PathFilter::new()
            .with_ignore(self.ignore.iter().cloned())
            .with_strip_prefix(&self.ignore_prefix)
    }
}

/// 逗号分隔的忽略列表，丢弃空项
pub fn parse_ignore_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|rule| !rule.is_empty())
        .map(str::to_string)
        .collect()
}
