//! Document factories: one per kind, each bound to its variant's constructor

use crate::core::document::{Document, DocumentKind};
use crate::core::error::Result;
use crate::formats::{excel::ExcelDocument, pdf::PdfDocument, word::WordDocument};

/// Factory method trait that every document factory implements
pub trait DocumentFactory: Send + Sync {
    /// Kind of document this factory produces
    fn kind(&self) -> DocumentKind;

    /// Create a new, empty document. The name is passed through unchanged;
    /// a blank name is rejected.
    fn create_document(&self, name: &str) -> Result<Document>;
}

/// Creates Word documents
#[derive(Debug, Clone, Copy, Default)]
pub struct WordDocumentFactory;

/// Creates PDF documents
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfDocumentFactory;

/// Creates Excel documents
#[derive(Debug, Clone, Copy, Default)]
pub struct ExcelDocumentFactory;

impl DocumentFactory for WordDocumentFactory {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Word
    }

    fn create_document(&self, name: &str) -> Result<Document> {
        let doc = WordDocument::new(name)?;
        tracing::info!("Created {} document: {}", self.kind(), name);
        Ok(doc.into())
    }
}

impl DocumentFactory for PdfDocumentFactory {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Pdf
    }

    fn create_document(&self, name: &str) -> Result<Document> {
        let doc = PdfDocument::new(name)?;
        tracing::info!("Created {} document: {}", self.kind(), name);
        Ok(doc.into())
    }
}

impl DocumentFactory for ExcelDocumentFactory {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Excel
    }

    fn create_document(&self, name: &str) -> Result<Document> {
        let doc = ExcelDocument::new(name)?;
        tracing::info!("Created {} document: {}", self.kind(), name);
        Ok(doc.into())
    }
}

impl DocumentKind {
    /// The factory bound to this kind
    pub fn factory(self) -> &'static dyn DocumentFactory {
        match self {
            DocumentKind::Word => &WordDocumentFactory,
            DocumentKind::Pdf => &PdfDocumentFactory,
            DocumentKind::Excel => &ExcelDocumentFactory,
        }
    }
}
