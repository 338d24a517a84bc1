//! Application configuration management

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::document::DocumentKind;
use crate::formats::word::TextStyle;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Kinds to walk through, in order
    pub kinds: Vec<DocumentKind>,
    /// Word sample arguments
    pub word: WordSample,
    /// PDF sample arguments
    pub pdf: PdfSample,
    /// Excel sample arguments
    pub excel: ExcelSample,
}

/// Sample arguments for the Word cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WordSample {
    /// Document name
    pub name: String,
    /// Text to format
    pub text: String,
    /// Style to apply
    pub style: TextStyle,
}

/// Sample arguments for the PDF cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfSample {
    /// Document name
    pub name: String,
    /// Protection password
    pub password: String,
}

/// Sample arguments for the Excel cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcelSample {
    /// Document name
    pub name: String,
    /// Formula to add
    pub formula: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            kinds: DocumentKind::ALL.to_vec(),
            word: WordSample::default(),
            pdf: PdfSample::default(),
            excel: ExcelSample::default(),
        }
    }
}

impl Default for WordSample {
    fn default() -> Self {
        Self {
            name: "Sample Report".to_string(),
            text: "Important text".to_string(),
            style: TextStyle::Bold,
        }
    }
}

impl Default for PdfSample {
    fn default() -> Self {
        Self {
            name: "User Manual".to_string(),
            password: "secret123".to_string(),
        }
    }
}

impl Default for ExcelSample {
    fn default() -> Self {
        Self {
            name: "Financial Data".to_string(),
            formula: "=SUM(A1:A10)".to_string(),
        }
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "docfactory", "DocFactory")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::load_from(&path)
    }

    /// Load configuration from a file, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Sample document name for a kind
    pub fn sample_name(&self, kind: DocumentKind) -> &str {
        match kind {
            DocumentKind::Word => &self.word.name,
            DocumentKind::Pdf => &self.pdf.name,
            DocumentKind::Excel => &self.excel.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.kinds, DocumentKind::ALL.to_vec());
        assert_eq!(config.sample_name(DocumentKind::Word), "Sample Report");
        assert_eq!(config.pdf.password, "secret123");
        assert_eq!(config.excel.formula, "=SUM(A1:A10)");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "kinds": ["excel"], "word": { "style": "italic" } }"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.kinds, vec![DocumentKind::Excel]);
        assert_eq!(config.word.style, TextStyle::Italic);
        assert_eq!(config.word.name, "Sample Report");
        assert_eq!(config.sample_name(DocumentKind::Pdf), "User Manual");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "word": { "style": "glitter" } }"#).unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config"));
    }
}
