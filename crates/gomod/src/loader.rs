use crate::error::{LoadError, Result};
use crate::modfile::ModFile;
use crate::pattern::PackagePattern;
use crate::scanner::scan_source;
use crate::types::{LoadedModule, PackageFact};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// 包加载器 trait
pub trait PackageLoader {
    /// 加载模块路径和匹配的包
    fn load(&self) -> Result<LoadedModule>;
}

/// Go 模块加载器 - 直接读取磁盘上的源文件
pub struct GoModuleLoader {
    root: PathBuf,
    pattern: String,
}

impl GoModuleLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pattern: "./...".to_string(),
        }
    }

    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = pattern.to_string();
        self
    }

    /// 读取一个目录下的所有源文件，合并为一个包
    fn load_package(
        &self,
        dir: &Path,
        import_path: &str,
        files: &[PathBuf],
    ) -> Result<Option<PackageFact>> {
        let mut name: Option<String> = None;
        let mut imports = BTreeSet::new();

        for path in files {
            let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
                path: path.clone(),
                source,
            })?;
            let source = scan_source(&content)
                .ok_or_else(|| LoadError::MissingPackageClause(path.clone()))?;

            if source.is_ignored() {
                tracing::debug!("Skipping {} (build constraint: ignore)", path.display());
                continue;
            }

            match &name {
                Some(first) if *first != source.package => {
                    return Err(LoadError::MixedPackages {
                        dir: dir.to_path_buf(),
                        first: first.clone(),
                        second: source.package,
                    });
                }
                Some(_) => {}
                None => name = Some(source.package),
            }

            imports.extend(source.imports);
        }

        Ok(name.map(|name| PackageFact::new(import_path, &name, imports)))
    }
}

impl PackageLoader for GoModuleLoader {
    fn load(&self) -> Result<LoadedModule> {
        if !self.root.is_dir() {
            return Err(LoadError::NotADirectory(self.root.clone()));
        }

        let modfile = ModFile::read(&self.root)?;
        let pattern = PackagePattern::new(&self.pattern, &modfile.module_path)?;
        tracing::info!(
            "Loading module {} from {} (pattern {})",
            modfile.module_path,
            self.root.display(),
            pattern.as_str()
        );

        let mut dirs = BTreeMap::new();
        collect_go_files(&self.root, &mut dirs)?;

        let mut packages = Vec::new();
        for (dir, mut files) in dirs {
            let import_path = dir_import_path(&modfile.module_path, &self.root, &dir);
            if !pattern.matches(&import_path) {
                tracing::debug!("Pattern excludes {}", import_path);
                continue;
            }

            files.sort();
            if let Some(package) = self.load_package(&dir, &import_path, &files)? {
                tracing::debug!(
                    "Loaded {} ({} imports{})",
                    package.path,
                    package.imports.len(),
                    if package.is_entry_point { ", main" } else { "" }
                );
                packages.push(package);
            }
        }

        if packages.is_empty() {
            tracing::warn!("Pattern {} matched no packages", pattern.as_str());
        }
        packages.sort_by(|a, b| a.path.cmp(&b.path));
        tracing::info!("Loaded {} packages", packages.len());

        Ok(LoadedModule {
            module_path: modfile.module_path,
            packages,
        })
    }
}

/// 目录 -> 包的导入路径
fn dir_import_path(module_path: &str, root: &Path, dir: &Path) -> String {
    let relative = dir.strip_prefix(root).unwrap_or(dir);
    let segments: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect();

    if segments.is_empty() {
        module_path.to_string()
    } else {
        format!("{}/{}", module_path, segments.join("/"))
    }
}

/// 递归收集 .go 文件，按目录分组
fn collect_go_files(dir: &Path, files: &mut BTreeMap<PathBuf, Vec<PathBuf>>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();
        let file_type = entry.file_type()?;

        // 与 `./...` 一致，不跟随目录符号链接
        if file_type.is_symlink() && path.is_dir() {
            tracing::debug!("Skipping symlinked directory {}", path.display());
            continue;
        }

        if file_type.is_dir() {
            // 嵌套模块不属于当前模块
            if is_skipped_dir(&name) || path.join("go.mod").is_file() {
                continue;
            }
            collect_go_files(&path, files)?;
        } else if is_package_source(&name) {
            files.entry(dir.to_path_buf()).or_default().push(path);
        }
    }

    Ok(())
}

fn is_skipped_dir(name: &str) -> bool {
    name == "vendor" || name == "testdata" || name.starts_with('.') || name.starts_with('_')
}

fn is_package_source(name: &str) -> bool {
    name.ends_with(".go")
        && !name.ends_with("_test.go")
        && !name.starts_with('.')
        && !name.starts_with('_')
}
