pub mod heading;
pub mod image;
pub mod table;

pub use heading::Heading;
pub use image::Image;
pub use table::Table;
