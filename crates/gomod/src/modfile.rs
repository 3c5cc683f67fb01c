use crate::error::{LoadError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// go.mod 文件 (只关心 module 指令)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModFile {
    pub module_path: String,
}

impl ModFile {
    /// 从模块根目录读取 go.mod
    pub fn read(dir: &Path) -> Result<Self> {
        let path = dir.join("go.mod");
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(LoadError::MissingGoMod(dir.to_path_buf()));
            }
            Err(source) => return Err(LoadError::Read { path, source }),
        };

        Self::parse(&content).ok_or(LoadError::MissingModuleDirective(path))
    }

    /// 解析 go.mod 内容，找不到 module 指令时返回 None
    pub fn parse(content: &str) -> Option<Self> {
        content.lines().find_map(|line| {
            let line = match line.find("//") {
                Some(pos) => &line[..pos],
                None => line,
            };
            let rest = line.trim().strip_prefix("module")?;
            // "modulefoo" 不是 module 指令
            if !rest.starts_with(|c: char| c.is_whitespace() || c == '"' || c == '`') {
                return None;
            }
            let module_path = unquote(rest.trim())?;
            if module_path.is_empty() {
                return None;
            }
            Some(Self { module_path })
        })
    }
}

fn unquote(value: &str) -> Option<String> {
    for quote in ['"', '`'] {
        if let Some(inner) = value.strip_prefix(quote) {
            return inner.strip_suffix(quote).map(str::to_string);
        }
    }
    // 块形式 `module (` 不合法
    if value.starts_with('(') {
        return None;
    }
    value.split_whitespace().next().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_module() {
        let content = "module example.com/app\n\ngo 1.22\n\nrequire github.com/pkg/errors v0.9.1\n";
        let modfile = ModFile::parse(content).unwrap();
        assert_eq!(modfile.module_path, "example.com/app");
    }

    #[test]
    fn test_parse_quoted_module() {
        let modfile = ModFile::parse("module \"example.com/quoted\"\n").unwrap();
        assert_eq!(modfile.module_path, "example.com/quoted");

        let modfile = ModFile::parse("module `example.com/raw`\n").unwrap();
        assert_eq!(modfile.module_path, "example.com/raw");
    }

    #[test]
    fn test_parse_ignores_comments() {
        let content = "// module example.com/commented\nmodule example.com/real // trailing\n";
        let modfile = ModFile::parse(content).unwrap();
        assert_eq!(modfile.module_path, "example.com/real");
    }

    #[test]
    fn test_parse_missing_module() {
        assert!(ModFile::parse("go 1.22\n").is_none());
        assert!(ModFile::parse("modulefoo bar\n").is_none());
        assert!(ModFile::parse("module (\n").is_none());
        assert!(ModFile::parse("").is_none());
    }

    #[test]
    fn test_read_missing_go_mod() {
        let dir = tempfile::tempdir().unwrap();
        let err = ModFile::read(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::MissingGoMod(_)));
    }

    #[test]
    fn test_read_without_directive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("go.mod"), "go 1.22\n").unwrap();
        let err = ModFile::read(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::MissingModuleDirective(_)));
    }
}
