use std::path::Path;

use lopdf::Document;
use tracing::debug;

use super::TextBackend;
use crate::error::ExtractError;

/// Text via the `pdf-extract` crate.
pub struct PdfExtractBackend;

impl TextBackend for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        let bytes = std::fs::read(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        pdf_extract::extract_text_from_mem_by_pages(&bytes).map_err(|e| ExtractError::Backend {
            backend: self.name(),
            message: e.to_string(),
        })
    }
}

/// Text via `lopdf`, page by page. Pages that fail individually are skipped.
pub struct LopdfBackend;

impl TextBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        let doc = Document::load(path).map_err(|e| ExtractError::Backend {
            backend: self.name(),
            message: e.to_string(),
        })?;

        let mut pages = Vec::new();
        for page_num in doc.get_pages().keys() {
            match doc.extract_text(&[*page_num]) {
                Ok(text) => pages.push(text),
                Err(e) => debug!(page = page_num, error = %e, "lopdf page skipped"),
            }
        }
        Ok(pages)
    }
}

pub fn backend_by_name(name: &str) -> Option<Box<dyn TextBackend>> {
    match name {
        "pdf-extract" => Some(Box::new(PdfExtractBackend)),
        "lopdf" => Some(Box::new(LopdfBackend)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_backends() {
        assert_eq!(backend_by_name("pdf-extract").map(|b| b.name()), Some("pdf-extract"));
        assert_eq!(backend_by_name("lopdf").map(|b| b.name()), Some("lopdf"));
        assert!(backend_by_name("none").is_none());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = PdfExtractBackend
            .extract_pages(Path::new("does/not/exist.pdf"))
            .unwrap_err();
        assert!(matches!(err, ExtractError::Io { .. }));
        assert!(LopdfBackend.extract_pages(Path::new("does/not/exist.pdf")).is_err());
    }
}
