use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use crate::utils::strip_extension;

/// Snapshot of the page titles present in the data directory at startup.
///
/// Pages created afterwards are not picked up until restart.
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    titles: Vec<String>,
}

impl TitleIndex {
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { titles: titles.into_iter().map(Into::into).collect() }
    }

    /// List `data_dir` once, keeping directory order.
    ///
    /// A listing failure is logged and leaves the index empty.
    pub fn scan(data_dir: &Path) -> Self {
        let entries = match fs::read_dir(data_dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to list data directory {:?}: {}", data_dir, e);
                return Self::default();
            }
        };

        let mut titles = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => {
                    let name = entry.file_name().to_string_lossy().to_string();
                    let title = strip_extension(&name);
                    if title.is_empty() {
                        debug!("Skipping entry with empty title: {}", name);
                        continue;
                    }
                    debug!("Indexed title '{}' from {}", title, name);
                    titles.push(title.to_string());
                }
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                }
            }
        }

        info!("Indexed {} page titles from {:?}", titles.len(), data_dir);
        Self { titles }
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
