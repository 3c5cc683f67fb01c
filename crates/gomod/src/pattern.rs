use crate::error::{LoadError, Result};
use regex::Regex;

/// Go 包模式 (`./...`, `./internal/...`, `example.com/app/cmd/...`)
#[derive(Debug, Clone)]
pub struct PackagePattern {
    pattern: String,
    regex: Regex,
}

impl PackagePattern {
    /// 相对模式 (以 `.` 开头) 按模块路径展开为导入路径模式
    pub fn new(pattern: &str, module_path: &str) -> Result<Self> {
        let absolute = Self::resolve(pattern, module_path);
        let regex = Regex::new(&Self::to_regex(&absolute)).map_err(|source| {
            LoadError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// 导入路径是否匹配
    pub fn matches(&self, import_path: &str) -> bool {
        self.regex.is_match(import_path)
    }

    #[doc(hidden)]
    pub fn resolve(pattern: &str, module_path: &str) -> String {
        let relative = if pattern == "." {
            Some("")
        } else {
            pattern.strip_prefix("./")
        };

        match relative {
            Some("") => module_path.to_string(),
            Some(rel) => format!("{}/{}", module_path, rel.trim_end_matches('/')),
            None => pattern.to_string(),
        }
    }

    /// `...` 匹配任意字符串，末尾的 `/...` 同时匹配前缀本身
    #[doc(hidden)]
    pub fn to_regex(pattern: &str) -> String {
        let mut re = regex::escape(pattern).replace(r"\.\.\.", ".*");
        if let Some(prefix) = re.strip_suffix("/.*") {
            re = format!("{}(/.*)?", prefix);
        }
        format!("^{}$", re)
    }
}
