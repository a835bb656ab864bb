pub mod io;
pub mod model;
pub mod parsing;
pub mod session;


// Re-export key types for easier usage
pub use io::*;
pub use model::*;
pub use parsing::{format_inline, parse, parse_document};
pub use session::{DocumentSession, SessionError};
