use std::fmt;
use std::path::{Path, PathBuf};

/// Where a markdown document was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownSource {
    /// A document on the local filesystem.
    LocalFile(PathBuf),
    /// A document fetched over the network.
    Url(String),
}

impl MarkdownSource {
    /// Returns the path for local sources.
    pub fn local_path(&self) -> Option<&Path> {
        match self {
            Self::LocalFile(path) => Some(path),
            Self::Url(_) => None,
        }
    }
}

impl fmt::Display for MarkdownSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocalFile(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}
