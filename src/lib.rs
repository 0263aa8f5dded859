//! Plainwiki - a minimal personal wiki server
//!
//! Pages are plain-text files in a data directory, served through two HTML
//! templates. Viewing a page links every page title known at startup.

pub mod components;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod logger;
pub mod router;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use components::TemplateSet;
pub use config::Config;
pub use errors::WikiError;
pub use router::build_router;
pub use services::{LinkRewriter, PageStore, TitleIndex};
pub use types::{AppState, Page};
