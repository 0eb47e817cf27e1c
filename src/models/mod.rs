pub mod track;
pub mod view;

// Re-export commonly used types
pub use track::{Point, Track};
pub use view::{Center, MapView, ViewPoint};
