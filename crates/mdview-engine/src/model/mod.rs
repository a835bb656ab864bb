pub mod block;
pub mod source;
pub mod style;

pub use block::Block;
pub use source::MarkdownSource;
pub use style::{FormattedText, Style, StyledRange};
