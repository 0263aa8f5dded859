use log::{debug, warn};
use regex::bytes::Regex;

use crate::services::TitleIndex;
use crate::utils::push_escaped;

/// Turns known page titles inside a body into links to their pages.
///
/// All titles are compiled into one alternation at startup, in index
/// order, and the body is scanned once. Matches are plain substrings:
/// `Go` inside `Gopher` is linked too.
#[derive(Debug)]
pub struct LinkRewriter {
    matcher: Option<Regex>,
}

impl LinkRewriter {
    pub fn new(index: &TitleIndex) -> Self {
        if index.is_empty() {
            return Self { matcher: None };
        }

        let pattern = index
            .titles()
            .iter()
            .map(|title| regex::escape(title))
            .collect::<Vec<_>>()
            .join("|");

        match Regex::new(&pattern) {
            Ok(matcher) => {
                debug!("Compiled link matcher for {} titles", index.len());
                Self { matcher: Some(matcher) }
            }
            Err(e) => {
                warn!("Failed to compile link matcher, links disabled: {}", e);
                Self { matcher: None }
            }
        }
    }

    /// Render `body` as HTML with every known title linked
    pub fn rewrite(&self, body: &[u8]) -> String {
        let mut out = String::with_capacity(body.len());
        let Some(matcher) = &self.matcher else {
            push_escaped(&mut out, &String::from_utf8_lossy(body));
            return out;
        };

        let mut last = 0;
        for m in matcher.find_iter(body) {
            push_escaped(&mut out, &String::from_utf8_lossy(&body[last..m.start()]));
            let title = String::from_utf8_lossy(m.as_bytes());
            out.push_str("<a href=\"/view/");
            push_escaped(&mut out, &title);
            out.push_str("\">");
            push_escaped(&mut out, &title);
            out.push_str("</a>");
            last = m.end();
        }
        push_escaped(&mut out, &String::from_utf8_lossy(&body[last..]));
        out
    }
}
