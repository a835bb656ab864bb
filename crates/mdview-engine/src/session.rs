//! An open document: its raw text, the blocks parsed from it, and where it
//! would be saved.

use std::path::{Path, PathBuf};

use crate::{
    io::{IoError, LoadError, MarkdownRepository, new_document_name},
    model::{Block, MarkdownSource},
    parsing::parse_document,
};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Save(#[from] IoError),
    #[error("Document has no local file to overwrite; save it to a new location instead")]
    NoLocalSource,
}

pub struct DocumentSession<R> {
    repo: R,
    content: String,
    blocks: Vec<Block>,
    /// Local file the document came from or was last saved to.
    source: Option<PathBuf>,
}

impl<R: MarkdownRepository> DocumentSession<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            content: String::new(),
            blocks: vec![],
            source: None,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn is_local(&self) -> bool {
        self.source.is_some()
    }

    /// Replaces the text (e.g. after an edit) and re-parses it.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.blocks = parse_document(&self.content);
    }

    /// Loads a document and makes it current.
    ///
    /// Only local files become the save target; a document fetched from a
    /// URL has to be saved somewhere new. On failure the current text stays
    /// but the save target is dropped.
    pub fn load(&mut self, source: MarkdownSource) -> Result<(), SessionError> {
        match self.repo.load(&source) {
            Ok(content) => {
                log::info!("loaded document from {source}");
                self.set_content(content);
                self.source = source.local_path().map(Path::to_path_buf);
                Ok(())
            }
            Err(e) => {
                log::warn!("failed to load {source}: {e}");
                self.source = None;
                Err(e.into())
            }
        }
    }

    /// Overwrites the local file the document came from.
    pub fn save(&self) -> Result<(), SessionError> {
        let path = self.source.as_deref().ok_or(SessionError::NoLocalSource)?;
        self.repo.save(&self.content, path)?;
        log::info!("saved document to {}", path.display());
        Ok(())
    }

    /// Saves to `path` and makes it the save target.
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<(), SessionError> {
        let path = path.into();
        self.repo.save(&self.content, &path)?;
        log::info!("saved document as {}", path.display());
        self.source = Some(path);
        Ok(())
    }

    /// Saves under a generated `new_markdown_document_<millis>.md` name in `dir`.
    pub fn save_new(&mut self, dir: &Path, timestamp_millis: u128) -> Result<PathBuf, SessionError> {
        let path = dir.join(new_document_name(timestamp_millis));
        self.save_as(path.clone())?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::FsRepository;
    use crate::tests::{create_test_documents_dir, create_test_file};
    use pretty_assertions::assert_eq;

    fn session() -> DocumentSession<FsRepository> {
        DocumentSession::new(FsRepository::new())
    }

    #[test]
    fn starts_empty() {
        let s = session();
        assert_eq!(s.content(), "");
        assert!(s.blocks().is_empty());
        assert!(!s.is_local());
    }

    #[test]
    fn set_content_reparses() {
        let mut s = session();
        s.set_content("# Title\nBody");
        assert_eq!(
            s.blocks(),
            &[Block::heading("Title", 1), Block::paragraph("Body")]
        );
    }

    #[test]
    fn load_local_file_sets_source() {
        let docs = create_test_documents_dir();
        let path = create_test_file(&docs, "a.md", "![img](pic.png)");

        let mut s = session();
        s.load(MarkdownSource::LocalFile(path.clone())).unwrap();

        assert_eq!(s.content(), "![img](pic.png)");
        assert_eq!(s.blocks(), &[Block::image("pic.png", "img")]);
        assert_eq!(s.source(), Some(path.as_path()));
    }

    #[test]
    fn failed_load_keeps_text_and_clears_source() {
        let docs = create_test_documents_dir();
        let path = create_test_file(&docs, "a.md", "kept");

        let mut s = session();
        s.load(MarkdownSource::LocalFile(path)).unwrap();
        let err = s
            .load(MarkdownSource::LocalFile(docs.path().join("missing.md")))
            .unwrap_err();

        assert!(matches!(err, SessionError::Load(LoadError::File(IoError::NotFound(_)))));
        assert_eq!(s.content(), "kept");
        assert!(!s.is_local());
    }

    #[test]
    fn save_without_source_fails() {
        let mut s = session();
        s.set_content("text");
        assert!(matches!(s.save(), Err(SessionError::NoLocalSource)));
    }

    #[test]
    fn save_overwrites_loaded_file() {
        let docs = create_test_documents_dir();
        let path = create_test_file(&docs, "a.md", "old");

        let mut s = session();
        s.load(MarkdownSource::LocalFile(path.clone())).unwrap();
        s.set_content("new");
        s.save().unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "new");
    }

    #[test]
    fn save_as_adopts_destination() {
        let docs = create_test_documents_dir();
        let dest = docs.path().join("copy.md");

        let mut s = session();
        s.set_content("# Copy");
        s.save_as(&dest).unwrap();

        assert_eq!(s.source(), Some(dest.as_path()));
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "# Copy");
    }

    #[test]
    fn save_new_generates_name() {
        let docs = create_test_documents_dir();

        let mut s = session();
        s.set_content("fresh");
        let path = s.save_new(docs.path(), 42).unwrap();

        assert_eq!(path, docs.path().join("new_markdown_document_42.md"));
        assert!(s.is_local());
        assert_eq!(std::fs::read_to_string(path).unwrap(), "fresh");
    }

    struct Remote;

    impl crate::io::UrlFetcher for Remote {
        fn fetch(&self, _url: &str) -> Result<String, LoadError> {
            Ok("# Remote".to_string())
        }
    }

    #[test]
    fn url_load_leaves_no_save_target() {
        let docs = create_test_documents_dir();
        let path = create_test_file(&docs, "a.md", "local");

        let mut s = DocumentSession::new(FsRepository::with_fetcher(Box::new(Remote)));
        s.load(MarkdownSource::LocalFile(path)).unwrap();
        assert!(s.is_local());

        s.load(MarkdownSource::Url("https://example.com/a.md".into()))
            .unwrap();
        assert_eq!(s.blocks(), &[Block::heading("Remote", 1)]);
        assert!(!s.is_local());
        assert!(matches!(s.save(), Err(SessionError::NoLocalSource)));
    }
}
