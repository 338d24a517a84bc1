//! PDF document stand-in with password protection

use crate::core::document::{DocumentInfo, DocumentKind, DocumentOps};
use crate::core::error::{require_non_blank, Result};

/// A PDF document
#[derive(Debug, Clone)]
pub struct PdfDocument {
    info: DocumentInfo,
    password: Option<String>,
}

impl PdfDocument {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            info: DocumentInfo::new(name)?,
            password: None,
        })
    }

    /// Protect the document with a password, replacing any previous one
    pub fn add_security(&mut self, password: &str) -> Result<String> {
        require_non_blank("password", password)?;
        self.password = Some(password.to_string());
        tracing::debug!("Password protection set on {}", self.name());
        Ok(format!(
            "Adding security: password '{}' set on '{}'",
            password,
            self.name()
        ))
    }

    pub fn is_protected(&self) -> bool {
        self.password.is_some()
    }
}

impl DocumentOps for PdfDocument {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Pdf
    }

    fn info(&self) -> &DocumentInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut DocumentInfo {
        &mut self.info
    }

    fn render_content(&self) -> String {
        format!(
            "PDF document '{}' with fixed page layout and embedded fonts",
            self.name()
        )
    }

    fn open(&self) -> String {
        let mut message = format!(
            "Opening {} document '{}' in {}",
            self.kind(),
            self.name(),
            self.kind().application()
        );
        if self.is_protected() {
            message.push_str(" (password required)");
        }
        message
    }

    fn details(&self) -> Vec<String> {
        let protection = if self.is_protected() { "password" } else { "none" };
        vec![format!("Protection: {}", protection)]
    }
}
