use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, error, info};

use crate::errors::WikiError;
use crate::utils::escape_html;

/// Templates loaded at startup, by name
pub const TEMPLATE_NAMES: [&str; 2] = ["view", "edit"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Title,
    Body,
}

/// A parsed HTML template with `{{TITLE}}` and `{{BODY}}` placeholders
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template source; unknown or unclosed placeholders are errors
    pub fn parse(source: &str) -> Result<Self, WikiError> {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(start) = rest.find("{{") {
            if start > 0 {
                segments.push(Segment::Text(rest[..start].to_string()));
            }
            let after = &rest[start + 2..];
            let end = after
                .find("}}")
                .ok_or_else(|| WikiError::TemplateError("unclosed placeholder".to_string()))?;
            let segment = match after[..end].trim() {
                "TITLE" => Segment::Title,
                "BODY" => Segment::Body,
                other => {
                    let message = format!("unknown placeholder '{}'", other);
                    return Err(WikiError::TemplateError(message));
                }
            };
            segments.push(segment);
            rest = &after[end + 2..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Fill in the placeholders. The title is escaped here; `body_html`
    /// is inserted as given.
    pub fn render(&self, title: &str, body_html: &str) -> String {
        let title = escape_html(title);
        let mut html = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => html.push_str(text),
                Segment::Title => html.push_str(&title),
                Segment::Body => html.push_str(body_html),
            }
        }
        html
    }
}

/// The preloaded template set shared by all handlers
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    templates: HashMap<String, Template>,
}

impl TemplateSet {
    /// Read and parse `view.html` and `edit.html` from `dir`
    pub fn load(dir: &Path) -> Result<Self, WikiError> {
        let mut set = Self::default();
        for name in TEMPLATE_NAMES {
            let path = dir.join(format!("{}.html", name));
            debug!("Loading template '{}' from {:?}", name, path);
            let source = fs::read_to_string(&path).map_err(|e| {
                error!("Failed to read template {:?}: {}", path, e);
                WikiError::TemplateError(format!("{}: {}", path.display(), e))
            })?;
            let template = Template::parse(&source).map_err(|e| {
                error!("Failed to parse template {:?}: {}", path, e);
                match e {
                    WikiError::TemplateError(msg) => {
                        WikiError::TemplateError(format!("{}: {}", path.display(), msg))
                    }
                    other => other,
                }
            })?;
            set.insert(name, template);
        }
        info!("Loaded {} templates from {:?}", set.templates.len(), dir);
        Ok(set)
    }

    pub fn insert(&mut self, name: &str, template: Template) {
        self.templates.insert(name.to_string(), template);
    }

    /// Render the named template
    pub fn render(&self, name: &str, title: &str, body_html: &str) -> Result<String, WikiError> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| WikiError::TemplateError(format!("no template named '{}'", name)))?;
        Ok(template.render(title, body_html))
    }
}
