//! Previously cached extraction results: JSON objects keyed by original
//! file name, each entry carrying `original_text` or `text`.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::CacheError;

/// Find cached text for `label`. An entry keyed by exactly `label` is
/// preferred; otherwise the first `*.pdf` entry carrying text is used.
pub fn lookup(paths: &[PathBuf], label: &str) -> Option<String> {
    let caches: Vec<(PathBuf, Map<String, Value>)> = paths
        .iter()
        .filter(|p| p.exists())
        .filter_map(|p| match read_cache(p) {
            Ok(map) => Some((p.clone(), map)),
            Err(e) => {
                warn!(error = %e, "skipping cache file");
                None
            }
        })
        .collect();

    for (path, map) in &caches {
        if let Some(text) = map.get(label).and_then(entry_text) {
            debug!(cache = %path.display(), key = label, "exact cache hit");
            return Some(text.to_string());
        }
    }

    caches.iter().find_map(|(path, map)| {
        map.iter()
            .filter(|(key, _)| key.ends_with(".pdf"))
            .find_map(|(key, value)| {
                let text = entry_text(value)?;
                debug!(cache = %path.display(), key = %key, "using cached text from another file");
                Some(text.to_string())
            })
    })
}

fn read_cache(path: &Path) -> Result<Map<String, Value>, CacheError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CacheError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CacheError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn entry_text(value: &Value) -> Option<&str> {
    let obj = value.as_object()?;
    obj.get("original_text")
        .or_else(|| obj.get("text"))
        .and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn exact_label_preferred() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(
            dir.path(),
            "a.json",
            r#"{"other.pdf": {"text": "other text"}, "mine.pdf": {"text": "my text"}}"#,
        );
        assert_eq!(lookup(&[a], "mine.pdf").as_deref(), Some("my text"));
    }

    #[test]
    fn falls_back_to_first_pdf_entry_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(
            dir.path(),
            "a.json",
            r#"{"notes": {"text": "ignored"}, "z.pdf": {"original_text": "zed"}, "b.pdf": {"text": "bee"}}"#,
        );
        assert_eq!(lookup(&[a], "unknown.pdf").as_deref(), Some("zed"));
    }

    #[test]
    fn original_text_beats_text() {
        let value: Value = serde_json::from_str(r#"{"text": "t", "original_text": "o"}"#).unwrap();
        assert_eq!(entry_text(&value), Some("o"));
    }

    #[test]
    fn missing_and_malformed_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write(dir.path(), "bad.json", "{not json");
        let good = write(dir.path(), "good.json", r#"{"x.pdf": {"text": "ok"}}"#);
        let missing = dir.path().join("missing.json");
        assert_eq!(lookup(&[missing, bad, good], "x.pdf").as_deref(), Some("ok"));
    }

    #[test]
    fn nothing_usable() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.json", r#"{"x.pdf": "just a string", "y.pdf": {"pages": 2}}"#);
        assert_eq!(lookup(&[a], "x.pdf"), None);
    }
}
