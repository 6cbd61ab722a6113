//! Cross-document merge of experience records.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::model::ExperienceRecord;

/// Collapse records sharing an identity (`"{company}_{title}"`, literal).
///
/// The first record seen under a key is kept; later ones contribute
/// achievements it lacks (in order), technologies, and provenance labels.
/// Output is in first-seen key order, renumbered from 1. Running the merge
/// again on its own output changes nothing.
pub fn merge_experiences(records: Vec<ExperienceRecord>) -> Vec<ExperienceRecord> {
    let input = records.len();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<ExperienceRecord> = Vec::new();

    for record in records {
        let key = record.identity();
        match index.get(&key).copied() {
            Some(i) => absorb(&mut merged[i], record),
            None => {
                index.insert(key, merged.len());
                merged.push(with_provenance(record));
            }
        }
    }

    for (i, record) in merged.iter_mut().enumerate() {
        record.id = i + 1;
    }
    debug!(input, merged = merged.len(), "experiences merged");
    merged
}

/// identity → provenance labels, for the output metadata.
pub fn extraction_sources(records: &[ExperienceRecord]) -> BTreeMap<String, Vec<String>> {
    records
        .iter()
        .map(|r| (r.identity(), r.sources.clone()))
        .collect()
}

fn with_provenance(mut record: ExperienceRecord) -> ExperienceRecord {
    let source = record.source.clone();
    push_unique(&mut record.sources, source);
    record
}

fn absorb(into: &mut ExperienceRecord, other: ExperienceRecord) {
    for achievement in other.achievements {
        if !into.achievements.contains(&achievement) {
            into.achievements.push(achievement);
        }
    }
    into.technologies.extend(other.technologies);
    for label in other.sources.into_iter().chain(std::iter::once(other.source)) {
        push_unique(&mut into.sources, label);
    }
}

fn push_unique(labels: &mut Vec<String>, label: String) {
    if !label.is_empty() && !labels.contains(&label) {
        labels.push(label);
    }
}
