use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::errors::WikiError;
use crate::types::Page;

/// Extension of page files inside the data directory
pub const PAGE_EXTENSION: &str = "txt";

/// Service for reading and writing page files.
///
/// One file per page; no locking, concurrent saves to the same title race
/// and the last writer wins.
#[derive(Clone)]
pub struct PageStore {
    data_dir: Arc<PathBuf>,
}

impl PageStore {
    /// Create a new page store rooted at `data_dir`
    pub fn new(data_dir: PathBuf) -> Self {
        debug!("Creating PageStore with data directory: {:?}", data_dir);
        Self { data_dir: Arc::new(data_dir) }
    }

    /// Path of the file backing `title`
    pub fn path_for(&self, title: &str) -> PathBuf {
        self.data_dir.join(format!("{}.{}", title, PAGE_EXTENSION))
    }

    /// Load a page; any read failure is reported as `PageNotFound`
    pub async fn load(&self, title: &str) -> Result<Page, WikiError> {
        let path = self.path_for(title);
        debug!("Loading page '{}' from {:?}", title, path);

        let body = fs::read(&path).await.map_err(|source| {
            debug!("Failed to read {:?}: {}", path, source);
            WikiError::PageNotFound { title: title.to_string(), source }
        })?;

        info!("Loaded page '{}', {} bytes", title, body.len());
        Ok(Page::new(title, body))
    }

    /// Write a page, creating or truncating its file
    pub async fn save(&self, page: &Page) -> Result<(), WikiError> {
        let path = self.path_for(&page.title);
        debug!("Saving page '{}' to {:?}", page.title, path);

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let result = async {
            let mut file = options.open(&path).await?;
            file.write_all(&page.body).await?;
            file.flush().await
        }
        .await;

        if let Err(e) = result {
            warn!("Failed to save page '{}' to {:?}: {}", page.title, path, e);
            return Err(WikiError::Io(e));
        }

        info!("Saved page '{}', {} bytes", page.title, page.body.len());
        Ok(())
    }
}
