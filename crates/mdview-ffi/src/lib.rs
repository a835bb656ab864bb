//! UniFFI bindings for the mdview Android app
//!
//! Exposes block parsing, inline formatting and a document session so the
//! Kotlin UI can render markdown and save it back to storage. Remote
//! documents are fetched by the host through [`UrlFetcher`].

use mdview_engine::{
    Block, DocumentSession, FormattedText, FsRepository, LoadError, MarkdownSource, SessionError,
    Style,
};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Load error: {reason}")]
    Load { reason: String },
    #[error("Save error: {reason}")]
    Save { reason: String },
    #[error("Fetch error: {reason}")]
    Fetch { reason: String },
}

impl From<SessionError> for FfiError {
    fn from(e: SessionError) -> Self {
        let reason = e.to_string();
        match e {
            SessionError::Load(_) => FfiError::Load { reason },
            SessionError::Save(_) | SessionError::NoLocalSource => FfiError::Save { reason },
        }
    }
}

impl From<uniffi::UnexpectedUniFFICallbackError> for FfiError {
    fn from(e: uniffi::UnexpectedUniFFICallbackError) -> Self {
        FfiError::Fetch { reason: e.reason }
    }
}

// ============ Host callbacks ============

/// Downloads remote markdown. Implemented in Kotlin on top of the platform
/// HTTP client.
#[uniffi::export(with_foreign)]
pub trait UrlFetcher: Send + Sync {
    fn fetch(&self, url: String) -> Result<String, FfiError>;
}

/// Bridges a host fetcher into the engine's repository.
struct HostFetcher(Arc<dyn UrlFetcher>);

impl mdview_engine::UrlFetcher for HostFetcher {
    fn fetch(&self, url: &str) -> Result<String, LoadError> {
        self.0
            .fetch(url.to_string())
            .map_err(|e| LoadError::Network {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }
}

// ============ Document Session Handle ============

/// A handle to the document currently open in the viewer.
#[derive(uniffi::Object)]
pub struct DocumentSessionHandle {
    inner: Mutex<DocumentSession<FsRepository>>,
}

impl DocumentSessionHandle {
    fn with_repository(repo: FsRepository) -> Self {
        Self {
            inner: Mutex::new(DocumentSession::new(repo)),
        }
    }

    fn session(&self) -> std::sync::MutexGuard<'_, DocumentSession<FsRepository>> {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[uniffi::export]
impl DocumentSessionHandle {
    /// Session that can only open local files.
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self::with_repository(FsRepository::new())
    }

    /// Session that opens URLs through the given host fetcher.
    #[uniffi::constructor]
    pub fn with_fetcher(fetcher: Arc<dyn UrlFetcher>) -> Self {
        Self::with_repository(FsRepository::with_fetcher(Box::new(HostFetcher(fetcher))))
    }

    /// Replace the text after an edit; blocks are re-parsed immediately.
    pub fn set_content(&self, content: String) {
        self.session().set_content(content);
    }

    pub fn get_content(&self) -> String {
        self.session().content().to_string()
    }

    pub fn get_blocks(&self) -> Vec<BlockDto> {
        self.session()
            .blocks()
            .iter()
            .cloned()
            .map(BlockDto::from_engine)
            .collect()
    }

    pub fn load_file(&self, path: String) -> Result<(), FfiError> {
        Ok(self
            .session()
            .load(MarkdownSource::LocalFile(PathBuf::from(path)))?)
    }

    pub fn load_url(&self, url: String) -> Result<(), FfiError> {
        Ok(self.session().load(MarkdownSource::Url(url))?)
    }

    /// Overwrite the local file the document was loaded from.
    pub fn save(&self) -> Result<(), FfiError> {
        Ok(self.session().save()?)
    }

    pub fn save_as(&self, path: String) -> Result<(), FfiError> {
        Ok(self.session().save_as(path)?)
    }

    /// Save under a generated, timestamped name in `dir`; returns the new path.
    pub fn save_new(&self, dir: String) -> Result<String, FfiError> {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let path = self.session().save_new(&PathBuf::from(dir), millis)?;
        Ok(path.to_string_lossy().into_owned())
    }

    /// True when `save` has a local file to write to.
    pub fn is_local(&self) -> bool {
        self.session().is_local()
    }
}

impl Default for DocumentSessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

// ============ DTOs ============

/// A single renderable block. Text fields still carry inline markup; pass
/// them through [`format_inline`] before display.
#[derive(Debug, PartialEq, uniffi::Enum)]
pub enum BlockDto {
    Heading { text: String, level: u8 },
    Paragraph { text: String },
    Image { url: String, alt_text: String },
    Table { headers: Vec<String>, rows: Vec<Vec<String>> },
    EmptyLine,
}

impl BlockDto {
    fn from_engine(block: Block) -> Self {
        match block {
            Block::Heading { text, level } => BlockDto::Heading { text, level },
            Block::Paragraph { text } => BlockDto::Paragraph { text },
            Block::Image { url, alt_text } => BlockDto::Image { url, alt_text },
            Block::Table { headers, rows } => BlockDto::Table { headers, rows },
            Block::EmptyLine => BlockDto::EmptyLine,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum StyleDto {
    Strikethrough,
    Bold,
    Italic,
}

impl From<Style> for StyleDto {
    fn from(style: Style) -> Self {
        match style {
            Style::Strikethrough => StyleDto::Strikethrough,
            Style::Bold => StyleDto::Bold,
            Style::Italic => StyleDto::Italic,
        }
    }
}

/// A styled run; offsets are UTF-16 code units, the unit Android spans use.
#[derive(Debug, PartialEq, uniffi::Record)]
pub struct StyledRangeDto {
    pub start: u32,
    pub end: u32,
    pub style: StyleDto,
}

/// Display text with its markers removed, plus the styles to apply.
#[derive(Debug, PartialEq, uniffi::Record)]
pub struct FormattedTextDto {
    pub text: String,
    pub ranges: Vec<StyledRangeDto>,
}

impl FormattedTextDto {
    fn from_engine(formatted: FormattedText) -> Self {
        let utf16 = |byte: usize| formatted.text[..byte].encode_utf16().count() as u32;
        let ranges = formatted
            .ranges
            .iter()
            .map(|r| StyledRangeDto {
                start: utf16(r.start),
                end: utf16(r.end),
                style: r.style.into(),
            })
            .collect();
        Self {
            text: formatted.text.clone(),
            ranges,
        }
    }
}

// ============ Standalone Functions ============

/// Split markdown text into blocks.
#[uniffi::export]
pub fn parse_markdown(text: String) -> Vec<BlockDto> {
    mdview_engine::parse_document(&text)
        .into_iter()
        .map(BlockDto::from_engine)
        .collect()
}

/// Strip `~~`, `**` and `*` markers from a block's text and report where the
/// styles apply.
#[uniffi::export]
pub fn format_inline(text: String) -> FormattedTextDto {
    FormattedTextDto::from_engine(mdview_engine::format_inline(&text))
}

/// Route `log` output to logcat. Safe to call more than once.
#[uniffi::export]
pub fn init_logging() {
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Debug)
                .with_tag("MdView"),
        );
    }
    log::debug!("mdview-ffi logging initialised");
}
