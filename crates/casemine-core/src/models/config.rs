//! Configuration structures for the mining pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the casemine pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MinerConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Batch export configuration.
    pub export: ExportConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Selector for the heading that identifies a case document.
    pub heading_selector: String,

    /// Selector for table rows.
    pub row_selector: String,

    /// Selector for label/value elements inside a row.
    pub field_selector: String,

    /// Heading text markers (matched case-insensitively).
    pub heading_markers: Vec<String>,

    /// Elements whose text contains this marker are dropped (case-insensitive).
    pub noise_marker: String,

    /// Recognized feature labels, without the trailing colon.
    pub features: Vec<String>,

    /// Party-related labels that make up the business stream.
    pub internal_fields: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            heading_selector: "h5".to_string(),
            row_selector: "tr".to_string(),
            field_selector: "span".to_string(),
            heading_markers: vec!["CASE INFORMATION".to_string(), "DEFENDANT".to_string()],
            noise_marker: "(each".to_string(),
            features: [
                "Title",
                "Case Type",
                "Case Number",
                "Filing Date",
                "Case Status",
                "Party Type",
                "Business or Organization Name",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            internal_fields: vec![
                "Party Type".to_string(),
                "Business or Organization Name".to_string(),
            ],
        }
    }
}

/// Batch export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Document path template, relative to the input directory.
    /// `{case}` is replaced by the document identifier.
    pub document_template: String,

    /// Default CSV sink.
    pub output: PathBuf,

    /// Append-only log of case numbers that produced no records.
    pub empty_case_log: PathBuf,

    /// Optional glob applied to document file names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            document_template: "{case}".to_string(),
            output: PathBuf::from("cases.csv"),
            empty_case_log: PathBuf::from("no_case.txt"),
            pattern: None,
        }
    }
}

impl MinerConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: MinerConfig =
            serde_json::from_str(r#"{"export": {"output": "out.csv"}}"#).unwrap();

        assert_eq!(config.export.output, PathBuf::from("out.csv"));
        assert_eq!(config.export.empty_case_log, PathBuf::from("no_case.txt"));
        assert_eq!(config.extraction.heading_selector, "h5");
        assert!(config.extraction.features.contains(&"Case Number".to_string()));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = MinerConfig::default();
        config.export.pattern = Some("*.html".to_string());
        config.save(&path).unwrap();

        let loaded = MinerConfig::from_file(&path).unwrap();
        assert_eq!(loaded.export.pattern.as_deref(), Some("*.html"));
        assert_eq!(loaded.extraction.internal_fields, config.extraction.internal_fields);
    }
}
