use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// PDFs in `folder` whose lowercased file name contains one of `keywords`.
/// Sorted and deduplicated. A missing folder yields an empty list.
pub fn find_resume_files(folder: &Path, keywords: &[String]) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(folder = %folder.display(), error = %e, "resume folder not readable");
            return Vec::new();
        }
    };

    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_pdf(p))
        .filter(|p| {
            let name = p
                .file_name()
                .map(|n| n.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            keywords.iter().any(|kw| name.contains(kw.as_str()))
        })
        .collect();
    files.sort();
    files.dedup();

    info!(folder = %folder.display(), count = files.len(), "resume files found");
    files
}

fn is_pdf(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("pdf") | Some("PDF"))
}
