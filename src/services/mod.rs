pub mod map_template;

pub use map_template::{MapTemplate, TemplateError};
