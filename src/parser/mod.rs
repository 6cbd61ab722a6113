pub mod builder;
pub mod extract;
pub mod lines;
pub mod sections;

use crate::defaults::Placeholders;
use crate::model::{ExperienceRecord, ResumeDocument};
use extract::Profile;

/// Per-document pass: text → lines → experience segment → records.
pub fn document_experience(doc: &ResumeDocument, placeholders: &Placeholders) -> Vec<ExperienceRecord> {
    extract::experience::extract(&doc.text, &doc.label, placeholders)
}

/// Whole-corpus pass over the combined text of every document.
pub fn combined_profile(text: &str, placeholders: &Placeholders) -> Profile {
    extract::extract_profile(text, placeholders)
}
