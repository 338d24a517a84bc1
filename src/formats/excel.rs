//! Excel workbook stand-in with cell formulas

use crate::core::document::{DocumentInfo, DocumentKind, DocumentOps};
use crate::core::error::{require_non_blank, Result};

/// An Excel document
#[derive(Debug, Clone)]
pub struct ExcelDocument {
    info: DocumentInfo,
    formulas: Vec<String>,
}

impl ExcelDocument {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            info: DocumentInfo::new(name)?,
            formulas: Vec::new(),
        })
    }

    /// Record a formula; the text is kept verbatim
    pub fn add_formula(&mut self, formula: &str) -> Result<String> {
        require_non_blank("formula", formula)?;
        self.formulas.push(formula.to_string());
        tracing::debug!("Added formula to {}", self.name());
        Ok(format!("Adding formula: {} to '{}'", formula, self.name()))
    }
}

impl DocumentOps for ExcelDocument {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Excel
    }

    fn info(&self) -> &DocumentInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut DocumentInfo {
        &mut self.info
    }

    fn render_content(&self) -> String {
        format!(
            "Excel document '{}' with a worksheet of rows and columns",
            self.name()
        )
    }

    fn details(&self) -> Vec<String> {
        let mut lines = vec![format!("Formulas: {}", self.formulas.len())];
        lines.extend(self.formulas.iter().map(|formula| format!("  {}", formula)));
        lines
    }
}
