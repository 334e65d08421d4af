//! Case document sources.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MinerError, Result};

/// Placeholder replaced by the document identifier in path templates.
pub const CASE_PLACEHOLDER: &str = "{case}";

/// Trait for loading raw document markup by identifier.
pub trait DocumentSource {
    /// Load the raw HTML of one document.
    fn load(&self, id: &str) -> Result<String>;
}

/// Loads documents from files named by a path template.
#[derive(Debug, Clone)]
pub struct TemplateSource {
    root: PathBuf,
    template: String,
}

impl TemplateSource {
    /// Create a source resolving `template` relative to `root`.
    pub fn new(root: impl Into<PathBuf>, template: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            template: template.into(),
        }
    }

    /// Source where each identifier is a file name directly under `root`.
    pub fn directory(root: impl Into<PathBuf>) -> Self {
        Self::new(root, CASE_PLACEHOLDER)
    }

    /// Path of the document with this identifier.
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(self.template.replace(CASE_PLACEHOLDER, id))
    }
}

impl DocumentSource for TemplateSource {
    fn load(&self, id: &str) -> Result<String> {
        let path = self.path_for(id);
        let bytes = fs::read(&path).map_err(|source| MinerError::Source {
            id: id.to_string(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// File names directly inside `dir`, sorted lexicographically.
///
/// Subdirectories are not descended into and are not listed.
pub fn list_documents(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    names.sort();
    Ok(names)
}
