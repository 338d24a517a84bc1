//! Demonstration driver: one factory-create-use cycle per document kind

use std::io::Write;

use anyhow::{Context, Result};

use crate::core::config::AppConfig;
use crate::core::document::{Document, DocumentKind, DocumentOps};

/// Runs the demonstration cycles described by the configuration
pub struct DemoApp {
    config: AppConfig,
}

impl DemoApp {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Run every configured cycle, writing each message as a line
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        for (index, kind) in self.config.kinds.iter().copied().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "=== {} ===", kind.factory_name())?;
            for line in self.run_cycle(kind)? {
                writeln!(out, "{}", line)?;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Create one document through its factory and exercise it.
    ///
    /// Messages come back in order: content, save, open, the variant-only
    /// operation, then the info block.
    pub fn run_cycle(&self, kind: DocumentKind) -> Result<Vec<String>> {
        let name = self.config.sample_name(kind);
        let mut doc = kind
            .factory()
            .create_document(name)
            .with_context(|| format!("Failed to create {} document '{}'", kind, name))?;

        let mut lines = vec![doc.create_content(), doc.save(), doc.open()];
        lines.push(
            self.apply_variant_operation(&mut doc)
                .with_context(|| format!("Variant operation failed for '{}'", name))?,
        );
        lines.push(doc.display_info());

        tracing::info!("Finished {} cycle for: {}", kind, name);
        Ok(lines)
    }

    fn apply_variant_operation(&self, doc: &mut Document) -> Result<String> {
        let message = match doc {
            Document::Word(word) => {
                word.add_formatting(&self.config.word.text, self.config.word.style)?
            }
            Document::Pdf(pdf) => pdf.add_security(&self.config.pdf.password)?,
            Document::Excel(excel) => excel.add_formula(&self.config.excel.formula)?,
        };
        Ok(message)
    }
}

impl DocumentKind {
    /// Name of the factory type bound to this kind, for headings
    fn factory_name(self) -> &'static str {
        match self {
            DocumentKind::Word => "WordDocumentFactory",
            DocumentKind::Pdf => "PdfDocumentFactory",
            DocumentKind::Excel => "ExcelDocumentFactory",
        }
    }
}
