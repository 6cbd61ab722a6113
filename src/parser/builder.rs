//! Turns a classified segment into records.
//!
//! Anchor lines (company, degree, project title) open a record and close
//! the previous one. Every other classified line is offered to the open
//! record. Lines seen before the first anchor are dropped.

use std::collections::BTreeSet;

use super::lines::{clean_bullet_point, LineKind, RuleSet};
use crate::tables::TECH_KEYWORDS;
use crate::utils::title_case;

pub trait Record {
    /// Fold a non-anchor line into the record.
    fn absorb(&mut self, kind: LineKind, line: &str);
}

enum Cursor<R> {
    Seeking,
    Open(R),
}

impl<R: Record> Cursor<R> {
    fn anchor(self, next: R, out: &mut Vec<R>) -> Self {
        self.close(out);
        Cursor::Open(next)
    }

    fn field(mut self, kind: LineKind, line: &str) -> Self {
        if let Cursor::Open(record) = &mut self {
            record.absorb(kind, line);
        }
        self
    }

    fn close(self, out: &mut Vec<R>) {
        if let Cursor::Open(record) = self {
            out.push(record);
        }
    }
}

/// Run the Seeking/Open state machine over `lines`. `open` builds a fresh
/// record from an anchor line.
pub fn build_records<R, F>(lines: &[&str], rules: &RuleSet, mut open: F) -> Vec<R>
where
    R: Record,
    F: FnMut(&str) -> R,
{
    let mut out = Vec::new();
    let mut cursor = Cursor::Seeking;
    for &line in lines {
        let Some(kind) = rules.classify(line) else {
            continue;
        };
        cursor = if kind.is_anchor() {
            cursor.anchor(open(line), &mut out)
        } else {
            cursor.field(kind, line)
        };
    }
    cursor.close(&mut out);
    out
}

/// Cleaned bullet text plus the technologies it mentions.
pub fn bullet_item(line: &str) -> Option<(String, BTreeSet<String>)> {
    let text = clean_bullet_point(line)?;
    let techs = technologies_in(&text);
    Some((text, techs))
}

/// Title-cased technology keywords found anywhere in `text`.
pub fn technologies_in(text: &str) -> BTreeSet<String> {
    let lower = text.to_lowercase();
    TECH_KEYWORDS
        .iter()
        .filter(|kw| lower.contains(*kw))
        .map(|kw| title_case(kw))
        .collect()
}

/// Fill a `String` field only while it is still empty.
pub fn set_once(field: &mut String, value: &str) {
    if field.is_empty() {
        *field = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Entry {
        head: String,
        title: String,
        notes: Vec<String>,
    }

    impl Record for Entry {
        fn absorb(&mut self, kind: LineKind, line: &str) {
            match kind {
                LineKind::Title => set_once(&mut self.title, line),
                LineKind::Bullet => self.notes.extend(bullet_item(line).map(|(t, _)| t)),
                _ => {}
            }
        }
    }

    fn build(lines: &[&str]) -> Vec<Entry> {
        build_records(lines, &RuleSet::experience(), |anchor| Entry {
            head: anchor.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn lines_before_first_anchor_are_dropped() {
        let out = build(&["Staff engineer, platform", "• Wrote a great many tests", "Acme Inc"]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].head, "Acme Inc");
        assert!(out[0].title.is_empty());
        assert!(out[0].notes.is_empty());
    }

    #[test]
    fn anchors_split_records() {
        let out = build(&[
            "Acme Inc",
            "Staff engineer, platform",
            "Platform engineer, infra",
            "• Wrote a great many tests",
            "Globex LLC",
            "• Ran the on-call rotation",
        ]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].title, "Staff engineer, platform");
        assert_eq!(out[0].notes, vec!["Wrote a great many tests"]);
        assert_eq!(out[1].head, "Globex LLC");
        assert_eq!(out[1].notes, vec!["Ran the on-call rotation"]);
    }

    #[test]
    fn empty_segment() {
        assert!(build(&[]).is_empty());
    }

    #[test]
    fn technology_tags() {
        let techs = technologies_in("Moved services to Docker on AWS with GitHub Actions");
        let techs: Vec<&str> = techs.iter().map(String::as_str).collect();
        assert_eq!(techs, vec!["Aws", "Docker", "Git", "Github Actions"]);
    }
}
