//! Go 源文件扫描 - 包声明与 import 声明

use regex::Regex;
use std::sync::LazyLock;

static PACKAGE_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*package\s+([\p{L}_][\p{L}\p{N}_]*)").expect("package clause regex")
});

/// 单个 import spec: 可选的别名 / `_` / `.`，后跟字符串字面量
static IMPORT_SPEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:[\p{L}_][\p{L}\p{N}_]*\s+|\.\s*)?(?:"((?:[^"\\\n]|\\.)*)"|`([^`]*)`)"#)
        .expect("import spec regex")
});

static STRING_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""((?:[^"\\\n]|\\.)*)"|`([^`]*)`"#).expect("string literal regex")
});

/// 扫描结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// 声明的包名
    pub package: String,
    /// import 路径，按出现顺序
    pub imports: Vec<String>,
    /// 包声明前的 `//go:build` 表达式
    pub build_constraint: Option<String>,
    /// 包声明前的旧式 `// +build` 行 (去掉前缀)
    pub plus_build: Vec<String>,
}

impl SourceFile {
    /// 带 `ignore` 标签约束的文件不属于任何包
    ///
    /// 除 `ignore` 外的标签一律视为满足；有 `//go:build` 时忽略 `// +build`
    pub fn is_ignored(&self) -> bool {
        if let Some(expr) = &self.build_constraint {
            return expr.split("||").all(|alternative| {
                alternative
                    .split("&&")
                    .any(|term| term.trim().trim_matches(|c: char| c == '(' || c == ')') == "ignore")
            });
        }
        // 空格分隔为或，逗号分隔为与，多行为与
        self.plus_build.iter().any(|line| {
            !line.is_empty()
                && line
                    .split_whitespace()
                    .all(|option| option.split(',').any(|term| term == "ignore"))
        })
    }
}

/// 扫描 Go 源码，没有包声明时返回 None
pub fn scan_source(src: &str) -> Option<SourceFile> {
    let build_constraint = build_constraint(src);
    let plus_build = plus_build_lines(src);
    let code = strip_comments(src);

    let clause = PACKAGE_CLAUSE.captures(&code)?;
    let package = clause[1].to_string();
    let mut rest = &code[clause.get(0)?.end()..];
    let mut imports = Vec::new();

    // import 声明只能紧跟在包声明之后
    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ';');
        let Some(after) = rest.strip_prefix("import") else {
            break;
        };
        if after.starts_with(|c: char| c.is_alphanumeric() || c == '_') {
            break;
        }
        let after = after.trim_start();

        if let Some(group) = after.strip_prefix('(') {
            let end = group.find(')').unwrap_or(group.len());
            collect_literals(&group[..end], &mut imports);
            rest = group.get(end + 1..).unwrap_or("");
        } else if let Some(spec) = IMPORT_SPEC.captures(after) {
            if let Some(path) = literal_value(&spec) {
                imports.push(path);
            }
            rest = &after[spec.get(0)?.end()..];
        } else {
            break;
        }
    }

    Some(SourceFile {
        package,
        imports,
        build_constraint,
        plus_build,
    })
}

fn collect_literals(group: &str, imports: &mut Vec<String>) {
    imports.extend(
        STRING_LITERAL
            .captures_iter(group)
            .filter_map(|caps| literal_value(&caps)),
    );
}

fn literal_value(caps: &regex::Captures<'_>) -> Option<String> {
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}

fn build_constraint(src: &str) -> Option<String> {
    src.lines()
        .map(str::trim)
        .take_while(|line| !line.starts_with("package"))
        .find_map(|line| line.strip_prefix("//go:build").map(|expr| expr.trim().to_string()))
}

fn plus_build_lines(src: &str) -> Vec<String> {
    src.lines()
        .map(str::trim)
        .take_while(|line| !line.starts_with("package"))
        .filter_map(|line| line.strip_prefix("//"))
        .filter_map(|line| line.trim_start().strip_prefix("+build"))
        .filter(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
        .map(|rest| rest.trim().to_string())
        .collect()
}

/// 移除注释，保留字符串/字符字面量和换行
fn strip_comments(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut chars = src.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '/' if chars.peek() == Some(&'/') => {
                while let Some(&nc) = chars.peek() {
                    if nc == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                let mut newline = false;
                for nc in chars.by_ref() {
                    if prev == '*' && nc == '/' {
                        break;
                    }
                    newline |= nc == '\n';
                    prev = nc;
                }
                out.push(if newline { '\n' } else { ' ' });
            }
            '"' | '\'' => {
                out.push(c);
                while let Some(nc) = chars.next() {
                    out.push(nc);
                    if nc == '\\' {
                        if let Some(escaped) = chars.next() {
                            out.push(escaped);
                        }
                    } else if nc == c || nc == '\n' {
                        break;
                    }
                }
            }
            '`' => {
                out.push(c);
                for nc in chars.by_ref() {
                    out.push(nc);
                    if nc == '`' {
                        break;
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out
}
