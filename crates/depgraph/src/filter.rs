/// 路径过滤: 忽略规则 + 前缀剥离
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathFilter {
    ignore: Vec<String>,
    strip_prefix: String,
}

impl PathFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 空规则会被丢弃
    pub fn with_ignore<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = rules
            .into_iter()
            .map(Into::into)
            .filter(|rule: &String| !rule.is_empty())
            .collect();
        self
    }

    pub fn with_strip_prefix(mut self, prefix: &str) -> Self {
        self.strip_prefix = prefix.to_string();
        self
    }

    /// 当前规则 (用于测试)
    #[doc(hidden)]
    pub fn ignore_rules(&self) -> &[String] {
        &self.ignore
    }

    /// 路径包含任一规则子串即被忽略
    pub fn is_excluded(&self, path: &str) -> bool {
        self.ignore.iter().any(|rule| path.contains(rule.as_str()))
    }

    /// 移除第一次出现的前缀 (不锚定开头)
    pub fn strip(&self, path: &str) -> String {
        if self.strip_prefix.is_empty() {
            return path.to_string();
        }
        path.replacen(&self.strip_prefix, "", 1)
    }
}
