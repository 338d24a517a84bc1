//! Word document stand-in with text formatting

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::document::{DocumentInfo, DocumentKind, DocumentOps};
use crate::core::error::{require_non_blank, DocumentError, Result};

/// Character style applied by `add_formatting`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TextStyle {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

impl TextStyle {
    pub fn label(self) -> &'static str {
        match self {
            TextStyle::Bold => "Bold",
            TextStyle::Italic => "Italic",
            TextStyle::Underline => "Underline",
            TextStyle::Strikethrough => "Strikethrough",
        }
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TextStyle {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bold" => Ok(TextStyle::Bold),
            "italic" => Ok(TextStyle::Italic),
            "underline" => Ok(TextStyle::Underline),
            "strikethrough" => Ok(TextStyle::Strikethrough),
            _ => Err(DocumentError::invalid(
                "text style",
                format!("unknown style '{}'", s),
            )),
        }
    }
}

impl TryFrom<String> for TextStyle {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TextStyle> for String {
    fn from(style: TextStyle) -> Self {
        style.label().to_string()
    }
}

/// A span of text with a style applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRun {
    pub text: String,
    pub style: TextStyle,
}

/// A Word document
#[derive(Debug, Clone)]
pub struct WordDocument {
    info: DocumentInfo,
    formatting: Vec<FormattedRun>,
}

impl WordDocument {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            info: DocumentInfo::new(name)?,
            formatting: Vec::new(),
        })
    }

    /// Record a formatted run next to the body text
    pub fn add_formatting(&mut self, text: &str, style: TextStyle) -> Result<String> {
        require_non_blank("formatted text", text)?;
        self.formatting.push(FormattedRun {
            text: text.to_string(),
            style,
        });
        tracing::debug!("Applied {} formatting in {}", style, self.name());
        Ok(format!(
            "Adding formatting: '{}' in {} style to '{}'",
            text,
            style,
            self.name()
        ))
    }
}

impl DocumentOps for WordDocument {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Word
    }

    fn info(&self) -> &DocumentInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut DocumentInfo {
        &mut self.info
    }

    fn render_content(&self) -> String {
        format!(
            "Word document '{}' with headings and styled paragraphs",
            self.name()
        )
    }

    fn details(&self) -> Vec<String> {
        if self.formatting.is_empty() {
            return vec!["Formatting: none".to_string()];
        }
        let mut lines = vec![format!("Formatting: {} run(s)", self.formatting.len())];
        lines.extend(
            self.formatting
                .iter()
                .map(|run| format!("  [{}] {}", run.style, run.text)),
        );
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_parsing() {
        assert_eq!("Bold".parse::<TextStyle>().unwrap(), TextStyle::Bold);
        assert_eq!(" italic ".parse::<TextStyle>().unwrap(), TextStyle::Italic);
        assert!("Sparkly".parse::<TextStyle>().is_err());

        let style: TextStyle = serde_json::from_str("\"underline\"").unwrap();
        assert_eq!(style, TextStyle::Underline);
        assert!(serde_json::from_str::<TextStyle>("\"wavy\"").is_err());
    }

    #[test]
    fn test_add_formatting() {
        let mut doc = WordDocument::new("Sample Report").unwrap();
        doc.create_content();
        let content = doc.content().to_string();

        let message = doc.add_formatting("Important text", TextStyle::Bold).unwrap();
        assert!(message.contains("Bold"));
        assert!(message.contains("Important text"));

        assert_eq!(doc.content(), content);
        assert_eq!(doc.name(), "Sample Report");
        assert_eq!(doc.kind(), DocumentKind::Word);
        assert_eq!(
            doc.formatting,
            vec![FormattedRun {
                text: "Important text".to_string(),
                style: TextStyle::Bold,
            }]
        );
        assert!(doc.display_info().contains("[Bold] Important text"));
    }

    #[test]
    fn test_add_formatting_rejects_empty_text() {
        let mut doc = WordDocument::new("Sample Report").unwrap();
        assert!(doc.add_formatting("", TextStyle::Italic).is_err());
        assert!(doc.formatting.is_empty());
    }

    #[test]
    fn test_save_and_open_messages() {
        let doc = WordDocument::new("Sample Report").unwrap();
        assert!(doc.save().contains(".docx"));
        assert!(doc.open().contains("Microsoft Word"));
    }
}
