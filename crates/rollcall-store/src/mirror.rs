//! JSON file mirror of the template collection
//!
//! A single document holding the ordered array of all templates. It is
//! read once when the store opens and fully rewritten on every write to
//! the fallback collection.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::warn;

use crate::entities::NameListTemplate;
use crate::error::Result;

/// Handle to the mirror document on disk
pub struct FileMirror {
    path: PathBuf,
}

impl FileMirror {
    /// Open the mirror, creating an empty array document (and any missing
    /// parent directories) if absent, and load its contents.
    ///
    /// An unreadable or corrupt document is treated as empty; the mirror
    /// is a best-effort replica, not an authoritative log.
    pub async fn open(path: impl AsRef<Path>) -> Result<(Self, Vec<NameListTemplate>)> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let templates = if fs::try_exists(&path).await? {
            let content = fs::read_to_string(&path).await?;
            match serde_json::from_str(&content) {
                Ok(templates) => templates,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "mirror file is corrupt, starting empty");
                    Vec::new()
                }
            }
        } else {
            fs::write(&path, "[]").await?;
            Vec::new()
        };

        Ok((Self { path }, templates))
    }

    /// Fully rewrite the document with the given collection.
    pub async fn save(&self, templates: &[NameListTemplate]) -> Result<()> {
        let document = serde_json::to_string_pretty(templates)?;
        fs::write(&self.path, document).await?;
        Ok(())
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::TemplateInput;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_open_creates_empty_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("templates.json");

        let (_mirror, templates) = FileMirror::open(&path).await.unwrap();
        assert!(templates.is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_save_and_reload_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("templates.json");

        let template = NameListTemplate::new(TemplateInput {
            name: "team".to_string(),
            description: None,
            category: "default".to_string(),
            names: vec!["张三".to_string(), "Alice".to_string()],
        });

        let (mirror, _) = FileMirror::open(&path).await.unwrap();
        mirror.save(std::slice::from_ref(&template)).await.unwrap();

        let (_, reloaded) = FileMirror::open(&path).await.unwrap();
        assert_eq!(reloaded, vec![template]);
    }

    #[tokio::test]
    async fn test_corrupt_document_treated_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("templates.json");
        std::fs::write(&path, "not json").unwrap();

        let (_mirror, templates) = FileMirror::open(&path).await.unwrap();
        assert!(templates.is_empty());
    }
}
