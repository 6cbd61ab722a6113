//! Turns resume files into [`ResumeDocument`]s.
//!
//! Backends are tried in configured order; the first one producing enough
//! text wins. If none does, previously cached extraction results are
//! consulted, and failing that the document carries a placeholder string.
//! Nothing here returns an error to the pipeline.

pub mod cache;
pub mod discover;
pub mod pdf;

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::ExtractError;
use crate::model::ResumeDocument;

/// A way of pulling per-page text out of a document.
pub trait TextBackend {
    fn name(&self) -> &'static str;
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ExtractError>;
}

pub struct TextSource {
    backends: Vec<Box<dyn TextBackend>>,
    cache_paths: Vec<PathBuf>,
    min_chars: usize,
}

impl TextSource {
    pub fn new(backends: Vec<Box<dyn TextBackend>>, cache_paths: Vec<PathBuf>, min_chars: usize) -> Self {
        Self {
            backends,
            cache_paths,
            min_chars,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let backends = settings
            .backends
            .iter()
            .filter_map(|name| {
                let backend = pdf::backend_by_name(name);
                if backend.is_none() && name != "none" {
                    warn!(backend = %name, "unknown text backend, skipping");
                }
                backend
            })
            .collect();
        Self::new(backends, settings.cache_paths(), settings.min_text_chars)
    }

    pub fn has_backends(&self) -> bool {
        !self.backends.is_empty()
    }

    /// Load one document. Always succeeds; failures become placeholder text.
    pub fn load(&self, path: &Path) -> ResumeDocument {
        let label = file_label(path);

        let err = match self.extract(path) {
            Ok((text, backend)) => {
                info!(file = %label, backend, chars = text.chars().count(), "extracted text");
                return ResumeDocument {
                    path: path.to_path_buf(),
                    label,
                    text,
                    backend: Some(backend),
                };
            }
            Err(e) => e,
        };
        warn!(file = %label, error = %err, "text extraction failed");

        if let Some(text) = cache::lookup(&self.cache_paths, &label) {
            info!(file = %label, "using cached extraction");
            return ResumeDocument {
                path: path.to_path_buf(),
                label,
                text,
                backend: None,
            };
        }

        let text = format!("Unable to extract text from: {}", label);
        ResumeDocument {
            path: path.to_path_buf(),
            label,
            text,
            backend: None,
        }
    }

    /// Try each backend in order. Returns the last failure when none succeeds.
    fn extract(&self, path: &Path) -> Result<(String, &'static str), ExtractError> {
        let mut last = ExtractError::Unavailable;
        for backend in &self.backends {
            debug!(backend = backend.name(), path = %path.display(), "trying backend");
            match backend.extract_pages(path) {
                Ok(pages) => {
                    let text = join_pages(&pages);
                    let chars = text.chars().count();
                    if chars > self.min_chars {
                        return Ok((text, backend.name()));
                    }
                    last = ExtractError::TooShort {
                        backend: backend.name(),
                        chars,
                    };
                }
                Err(e) => last = e,
            }
        }
        Err(last)
    }
}

/// Concatenate pages with `--- Page N ---` markers, trimmed.
pub fn join_pages(pages: &[String]) -> String {
    let mut text = String::new();
    for (i, page) in pages.iter().enumerate() {
        text.push_str(&format!("\n--- Page {} ---\n{}", i + 1, page));
    }
    text.trim().to_string()
}

pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBackend(&'static str, Result<Vec<String>, ()>);

    impl TextBackend for FixedBackend {
        fn name(&self) -> &'static str {
            self.0
        }

        fn extract_pages(&self, _path: &Path) -> Result<Vec<String>, ExtractError> {
            self.1.clone().map_err(|_| ExtractError::Backend {
                backend: self.0,
                message: "broken".into(),
            })
        }
    }

    fn long_page() -> String {
        "Jane Smith\nSenior Software Engineer\njane@example.com\n".repeat(3)
    }

    #[test]
    fn pages_are_marked_and_trimmed() {
        let text = join_pages(&["first".into(), "second".into()]);
        assert_eq!(text, "--- Page 1 ---\nfirst\n--- Page 2 ---\nsecond");
    }

    #[test]
    fn first_sufficient_backend_wins() {
        let source = TextSource::new(
            vec![
                Box::new(FixedBackend("short", Ok(vec!["tiny".into()]))),
                Box::new(FixedBackend("good", Ok(vec![long_page()]))),
            ],
            vec![],
            50,
        );
        let doc = source.load(Path::new("resume/jane_resume.pdf"));
        assert_eq!(doc.label, "jane_resume.pdf");
        assert_eq!(doc.backend, Some("good"));
        assert!(doc.text.starts_with("--- Page 1 ---"));
    }

    #[test]
    fn backend_error_degrades_to_placeholder() {
        let source = TextSource::new(vec![Box::new(FixedBackend("bad", Err(())))], vec![], 50);
        let doc = source.load(Path::new("cv.pdf"));
        assert_eq!(doc.text, "Unable to extract text from: cv.pdf");
        assert_eq!(doc.backend, None);
    }

    #[test]
    fn no_backends_degrades_to_placeholder() {
        let source = TextSource::new(vec![], vec![], 50);
        assert!(!source.has_backends());
        let doc = source.load(Path::new("cv.pdf"));
        assert_eq!(doc.text, "Unable to extract text from: cv.pdf");
    }

    #[test]
    fn cache_used_when_backends_fail() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("resume_analysis.json");
        std::fs::write(&cache, r#"{"cv.pdf": {"original_text": "cached resume text"}}"#).unwrap();

        let source = TextSource::new(vec![Box::new(FixedBackend("bad", Err(())))], vec![cache], 50);
        let doc = source.load(Path::new("cv.pdf"));
        assert_eq!(doc.text, "cached resume text");
        assert_eq!(doc.backend, None);
    }
}
