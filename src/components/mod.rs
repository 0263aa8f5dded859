pub mod templates;

pub use templates::{Template, TemplateSet};
