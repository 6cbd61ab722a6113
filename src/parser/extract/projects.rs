use tracing::debug;

use crate::defaults::Placeholders;
use crate::model::ProjectRecord;
use crate::parser::builder::{bullet_item, build_records, Record};
use crate::parser::lines::{LineKind, RuleSet};
use crate::parser::sections::{find_segment, PROJECTS};
use crate::utils::clean_lines;

impl Record for ProjectRecord {
    fn absorb(&mut self, kind: LineKind, line: &str) {
        match kind {
            LineKind::Bullet => {
                if let Some((text, techs)) = bullet_item(line) {
                    self.features.push(text);
                    self.technologies.extend(techs);
                }
            }
            LineKind::Text if self.description.is_empty() => self.description = line.to_string(),
            LineKind::Text => {
                self.long_description.push(' ');
                self.long_description.push_str(line);
            }
            _ => {}
        }
    }
}

pub fn extract(text: &str, placeholders: &Placeholders) -> Vec<ProjectRecord> {
    let lines = clean_lines(text);
    let records = find_segment(&lines, &PROJECTS)
        .map(|segment| {
            build_records(segment, &RuleSet::projects(), |title| ProjectRecord {
                title: title.to_string(),
                ..placeholders.project_seed.clone()
            })
        })
        .unwrap_or_default();

    if records.is_empty() {
        debug!("no projects found, using placeholder");
        return placeholders.projects.clone();
    }
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| ProjectRecord { id: i + 1, ..record })
        .collect()
}
