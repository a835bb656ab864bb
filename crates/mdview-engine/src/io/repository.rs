use std::path::Path;

use crate::model::MarkdownSource;

use super::{IoError, read_path, write_path};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    File(#[from] IoError),
    #[error("Failed to load {url}: {reason}")]
    Network { url: String, reason: String },
    #[error("No URL fetcher configured for {0}")]
    UnsupportedSource(String),
}

/// Fetches remote markdown. Implemented by the host platform, which owns
/// the HTTP stack.
pub trait UrlFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, LoadError>;
}

/// Loads and persists raw markdown text.
pub trait MarkdownRepository {
    fn load(&self, source: &MarkdownSource) -> Result<String, LoadError>;
    fn save(&self, content: &str, path: &Path) -> Result<(), IoError>;
}

/// Filesystem-backed repository; URLs are delegated to an optional fetcher.
#[derive(Default)]
pub struct FsRepository {
    fetcher: Option<Box<dyn UrlFetcher>>,
}

impl FsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fetcher(fetcher: Box<dyn UrlFetcher>) -> Self {
        Self {
            fetcher: Some(fetcher),
        }
    }
}

impl MarkdownRepository for FsRepository {
    fn load(&self, source: &MarkdownSource) -> Result<String, LoadError> {
        match source {
            MarkdownSource::LocalFile(path) => Ok(read_path(path)?),
            MarkdownSource::Url(url) => {
                let fetcher = self
                    .fetcher
                    .as_ref()
                    .ok_or_else(|| LoadError::UnsupportedSource(url.clone()))?;
                log::info!("fetching {url}");
                fetcher.fetch(url)
            }
        }
    }

    fn save(&self, content: &str, path: &Path) -> Result<(), IoError> {
        write_path(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_documents_dir, create_test_file};

    struct StaticFetcher(&'static str);

    impl UrlFetcher for StaticFetcher {
        fn fetch(&self, url: &str) -> Result<String, LoadError> {
            if url.starts_with("https://") {
                Ok(self.0.to_string())
            } else {
                Err(LoadError::Network {
                    url: url.to_string(),
                    reason: "unsupported scheme".to_string(),
                })
            }
        }
    }

    #[test]
    fn loads_local_file() {
        let docs_dir = create_test_documents_dir();
        let path = create_test_file(&docs_dir, "doc.md", "# Hi");

        let repo = FsRepository::new();
        let content = repo.load(&MarkdownSource::LocalFile(path)).unwrap();
        assert_eq!(content, "# Hi");
    }

    #[test]
    fn missing_local_file_is_not_found() {
        let docs_dir = create_test_documents_dir();
        let repo = FsRepository::new();
        let result = repo.load(&MarkdownSource::LocalFile(docs_dir.path().join("missing.md")));
        assert!(matches!(result, Err(LoadError::File(IoError::NotFound(_)))));
    }

    #[test]
    fn url_without_fetcher_is_unsupported() {
        let repo = FsRepository::new();
        let result = repo.load(&MarkdownSource::Url("https://example.com/a.md".into()));
        assert!(matches!(result, Err(LoadError::UnsupportedSource(_))));
    }

    #[test]
    fn url_goes_through_fetcher() {
        let repo = FsRepository::with_fetcher(Box::new(StaticFetcher("remote")));
        let content = repo
            .load(&MarkdownSource::Url("https://example.com/a.md".into()))
            .unwrap();
        assert_eq!(content, "remote");

        let err = repo
            .load(&MarkdownSource::Url("ftp://example.com/a.md".into()))
            .unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn save_writes_file() {
        let docs_dir = create_test_documents_dir();
        let path = docs_dir.path().join("out").join("saved.md");
        FsRepository::new().save("content", &path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "content");
    }
}
