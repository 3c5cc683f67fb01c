use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("go.mod not found in {}", .0.display())]
    MissingGoMod(PathBuf),
    #[error("no module directive in {}", .0.display())]
    MissingModuleDirective(PathBuf),
    #[error("no package clause in {}", .0.display())]
    MissingPackageClause(PathBuf),
    #[error("found packages {first} and {second} in {}", .dir.display())]
    MixedPackages {
        dir: PathBuf,
        first: String,
        second: String,
    },
    #[error("invalid package pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, LoadError>;
