use std::sync::Arc;

use crate::components::TemplateSet;
use crate::config::Config;
use crate::errors::WikiError;
use crate::services::{LinkRewriter, PageStore, TitleIndex};

/// A wiki page as loaded from or written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub body: Vec<u8>,
}

impl Page {
    pub fn new(title: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self { title: title.into(), body: body.into() }
    }

    /// A page with only its title set
    pub fn blank(title: impl Into<String>) -> Self {
        Self { title: title.into(), body: Vec::new() }
    }

    /// Body as text, replacing invalid UTF-8
    pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Application state shared across all handlers.
///
/// Built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub store: PageStore,
    pub index: Arc<TitleIndex>,
    pub linker: Arc<LinkRewriter>,
    pub templates: Arc<TemplateSet>,
}

impl AppState {
    /// Load templates and scan the data directory.
    ///
    /// Template failures are fatal; an unreadable data directory only
    /// leaves the title index empty.
    pub fn from_config(config: &Config) -> Result<Self, WikiError> {
        let templates = TemplateSet::load(&config.template_dir)?;
        let index = TitleIndex::scan(&config.data_dir);
        let linker = LinkRewriter::new(&index);
        Ok(Self {
            store: PageStore::new(config.data_dir.as_ref().clone()),
            index: Arc::new(index),
            linker: Arc::new(linker),
            templates: Arc::new(templates),
        })
    }
}
