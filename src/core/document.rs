//! Shared document abstraction: the kind tag, common fields, and the capability set

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::error::{require_non_blank, Result};
use crate::formats::{excel::ExcelDocument, pdf::PdfDocument, word::WordDocument};

/// Format used when rendering creation timestamps
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Document variant tag, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Word,
    Pdf,
    Excel,
}

impl DocumentKind {
    /// Every kind, in demonstration order
    pub const ALL: [DocumentKind; 3] = [DocumentKind::Word, DocumentKind::Pdf, DocumentKind::Excel];

    /// Human readable tag
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Word => "Word",
            DocumentKind::Pdf => "PDF",
            DocumentKind::Excel => "Excel",
        }
    }

    /// File extension used when describing a save
    pub fn extension(self) -> &'static str {
        match self {
            DocumentKind::Word => ".docx",
            DocumentKind::Pdf => ".pdf",
            DocumentKind::Excel => ".xlsx",
        }
    }

    /// Application used when describing an open
    pub fn application(self) -> &'static str {
        match self {
            DocumentKind::Word => "Microsoft Word",
            DocumentKind::Pdf => "a PDF reader",
            DocumentKind::Excel => "Microsoft Excel",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields shared by every document variant
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    name: String,
    /// Empty until content has been created
    content: String,
    created_at: Option<DateTime<Local>>,
}

impl DocumentInfo {
    /// Create the shared fields for a new, empty document
    pub fn new(name: &str) -> Result<Self> {
        require_non_blank("document name", name)?;
        Ok(Self {
            name: name.to_string(),
            content: String::new(),
            created_at: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> Option<DateTime<Local>> {
        self.created_at
    }

    /// Replace the content, stamping the creation time on first use
    pub(crate) fn fill(&mut self, content: String) {
        self.content = content;
        self.created_at.get_or_insert_with(Local::now);
    }
}

/// Capability set shared by all documents.
///
/// Variants supply the kind, their shared fields and the body text. The
/// remaining operations have default implementations that describe the
/// action instead of performing any I/O, and return the message so callers
/// decide where it is printed.
pub trait DocumentOps {
    /// Variant tag
    fn kind(&self) -> DocumentKind;

    /// Shared fields
    fn info(&self) -> &DocumentInfo;

    /// Shared fields, mutably
    fn info_mut(&mut self) -> &mut DocumentInfo;

    /// Variant-specific body written by `create_content`
    fn render_content(&self) -> String;

    /// Extra lines appended to `display_info`
    fn details(&self) -> Vec<String> {
        Vec::new()
    }

    fn name(&self) -> &str {
        self.info().name()
    }

    fn content(&self) -> &str {
        self.info().content()
    }

    /// Populate the content. Calling it again rewrites the same text and
    /// keeps the original timestamp.
    fn create_content(&mut self) -> String {
        let content = self.render_content();
        self.info_mut().fill(content);
        tracing::debug!("Created content for {} document: {}", self.kind(), self.name());
        format!("Creating content: {}", self.content())
    }

    /// Describe saving the document
    fn save(&self) -> String {
        tracing::debug!("Saving {} document: {}", self.kind(), self.name());
        format!(
            "Saving {} document '{}' as {} file",
            self.kind(),
            self.name(),
            self.kind().extension()
        )
    }

    /// Describe opening the document
    fn open(&self) -> String {
        tracing::debug!("Opening {} document: {}", self.kind(), self.name());
        format!(
            "Opening {} document '{}' in {}",
            self.kind(),
            self.name(),
            self.kind().application()
        )
    }

    /// Multi-line summary of name, kind, content and creation time
    fn display_info(&self) -> String {
        let info = self.info();
        let content = if info.content().is_empty() {
            "(empty)"
        } else {
            info.content()
        };
        let created = info
            .created_at()
            .map(|at| at.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_else(|| "not created yet".to_string());

        let mut lines = vec![
            format!("Document: {}", info.name()),
            format!("Type: {}", self.kind()),
            format!("Content: {}", content),
            format!("Created: {}", created),
        ];
        lines.extend(self.details());
        lines.join("\n")
    }
}

/// A document of any kind, as returned by a factory.
///
/// Variant-only operations need the concrete type: narrow with a `match`
/// or one of the `as_*_mut` helpers.
#[derive(Debug, Clone)]
pub enum Document {
    Word(WordDocument),
    Pdf(PdfDocument),
    Excel(ExcelDocument),
}

impl Document {
    fn inner(&self) -> &dyn DocumentOps {
        match self {
            Document::Word(doc) => doc,
            Document::Pdf(doc) => doc,
            Document::Excel(doc) => doc,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn DocumentOps {
        match self {
            Document::Word(doc) => doc,
            Document::Pdf(doc) => doc,
            Document::Excel(doc) => doc,
        }
    }

    #[allow(dead_code)]
    pub fn as_word_mut(&mut self) -> Option<&mut WordDocument> {
        match self {
            Document::Word(doc) => Some(doc),
            _ => None,
        }
    }

    #[allow(dead_code)]
    pub fn as_pdf_mut(&mut self) -> Option<&mut PdfDocument> {
        match self {
            Document::Pdf(doc) => Some(doc),
            _ => None,
        }
    }

    #[allow(dead_code)]
    pub fn as_excel_mut(&mut self) -> Option<&mut ExcelDocument> {
        match self {
            Document::Excel(doc) => Some(doc),
            _ => None,
        }
    }
}

impl DocumentOps for Document {
    fn kind(&self) -> DocumentKind {
        self.inner().kind()
    }

    fn info(&self) -> &DocumentInfo {
        self.inner().info()
    }

    fn info_mut(&mut self) -> &mut DocumentInfo {
        self.inner_mut().info_mut()
    }

    fn render_content(&self) -> String {
        self.inner().render_content()
    }

    fn details(&self) -> Vec<String> {
        self.inner().details()
    }

    fn create_content(&mut self) -> String {
        self.inner_mut().create_content()
    }

    fn save(&self) -> String {
        self.inner().save()
    }

    fn open(&self) -> String {
        self.inner().open()
    }

    fn display_info(&self) -> String {
        self.inner().display_info()
    }
}

impl From<WordDocument> for Document {
    fn from(doc: WordDocument) -> Self {
        Document::Word(doc)
    }
}

impl From<PdfDocument> for Document {
    fn from(doc: PdfDocument) -> Self {
        Document::Pdf(doc)
    }
}

impl From<ExcelDocument> for Document {
    fn from(doc: ExcelDocument) -> Self {
        Document::Excel(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_rejects_blank_name() {
        assert!(DocumentInfo::new("").is_err());
        assert!(DocumentInfo::new(" \t").is_err());
        assert_eq!(DocumentInfo::new("Notes").unwrap().name(), "Notes");
    }

    #[test]
    fn test_content_empty_until_created() {
        let doc: Document = WordDocument::new("Draft").unwrap().into();
        assert!(doc.content().is_empty());
        assert!(doc.info().created_at().is_none());
        assert!(doc.display_info().contains("Content: (empty)"));
        assert!(doc.display_info().contains("Created: not created yet"));
    }

    #[test]
    fn test_create_content_is_idempotent() {
        let mut doc: Document = PdfDocument::new("Guide").unwrap().into();
        doc.create_content();
        let first_content = doc.content().to_string();
        let first_stamp = doc.info().created_at();

        doc.create_content();
        assert_eq!(doc.content(), first_content);
        assert_eq!(doc.info().created_at(), first_stamp);
        assert!(first_stamp.is_some());
    }

    #[test]
    fn test_display_info_contains_name_and_tag() {
        for kind in DocumentKind::ALL {
            let mut doc: Document = match kind {
                DocumentKind::Word => WordDocument::new("Quarterly Plan").unwrap().into(),
                DocumentKind::Pdf => PdfDocument::new("Quarterly Plan").unwrap().into(),
                DocumentKind::Excel => ExcelDocument::new("Quarterly Plan").unwrap().into(),
            };
            doc.create_content();
            let info = doc.display_info();
            assert!(info.contains("Quarterly Plan"));
            assert!(info.contains(&format!("Type: {}", kind.label())));
        }
    }

    #[test]
    fn test_narrowing() {
        let mut doc: Document = ExcelDocument::new("Budget").unwrap().into();
        assert!(doc.as_word_mut().is_none());
        assert!(doc.as_pdf_mut().is_none());
        assert!(doc.as_excel_mut().is_some());
    }

    #[test]
    fn test_kind_serde_names() {
        let json = serde_json::to_string(&DocumentKind::Pdf).unwrap();
        assert_eq!(json, "\"pdf\"");
        let kind: DocumentKind = serde_json::from_str("\"excel\"").unwrap();
        assert_eq!(kind, DocumentKind::Excel);
    }
}
