use tracing::{debug, warn};

use crate::defaults::Placeholders;
use crate::model::ExperienceRecord;
use crate::parser::builder::{bullet_item, build_records, set_once, technologies_in, Record};
use crate::parser::lines::{is_company_line, LineKind, RuleSet};
use crate::parser::sections::{find_segment, EXPERIENCE};
use crate::utils::clean_lines;

/// Text shorter than this yields no experience at all.
pub const MIN_TEXT_CHARS: usize = 100;

impl Record for ExperienceRecord {
    fn absorb(&mut self, kind: LineKind, line: &str) {
        match kind {
            LineKind::Title => set_once(&mut self.title, line),
            LineKind::Date => set_once(&mut self.period, line),
            LineKind::Location => set_once(&mut self.location, line),
            LineKind::Bullet => {
                if let Some((text, techs)) = bullet_item(line) {
                    self.achievements.push(text);
                    self.technologies.extend(techs);
                }
            }
            _ => {}
        }
    }
}

/// Experience records of one document, tagged with `source`.
pub fn extract(text: &str, source: &str, placeholders: &Placeholders) -> Vec<ExperienceRecord> {
    let chars = text.chars().count();
    if chars < MIN_TEXT_CHARS {
        warn!(file = source, chars, "text too short for experience extraction");
        return Vec::new();
    }

    let lines = clean_lines(text);
    let Some(segment) = find_segment(&lines, &EXPERIENCE) else {
        debug!(file = source, "no experience header, using fallback");
        return fallback(text, &lines, source, placeholders);
    };

    let mut records = build_records(segment, &RuleSet::experience(), |anchor| ExperienceRecord {
        company: anchor.to_string(),
        employment_type: placeholders.employment_type.clone(),
        source: source.to_string(),
        ..Default::default()
    });
    if records.is_empty() {
        debug!(file = source, lines = segment.len(), "experience section had no companies, using fallback");
        return fallback(text, &lines, source, placeholders);
    }
    for (i, record) in records.iter_mut().enumerate() {
        record.id = i + 1;
    }
    debug!(file = source, count = records.len(), "experience records");
    records
}

/// Company-like lines anywhere in the document become synthetic records.
/// With none, a single generic record stands in.
fn fallback(text: &str, lines: &[&str], source: &str, placeholders: &Placeholders) -> Vec<ExperienceRecord> {
    let technologies = technologies_in(text);
    let synthetic = &placeholders.synthetic_experience;

    let records: Vec<ExperienceRecord> = lines
        .iter()
        .filter(|l| is_company_line(l))
        .take(synthetic.limit)
        .enumerate()
        .map(|(i, company)| ExperienceRecord {
            id: i + 1,
            company: company.to_string(),
            title: synthetic.title.clone(),
            location: synthetic.location.clone(),
            period: synthetic.period.clone(),
            employment_type: placeholders.employment_type.clone(),
            achievements: synthetic.achievements.clone(),
            technologies: technologies.clone(),
            source: source.to_string(),
            sources: Vec::new(),
        })
        .collect();

    if !records.is_empty() {
        return records;
    }
    vec![ExperienceRecord {
        id: 1,
        technologies,
        source: source.to_string(),
        sources: Vec::new(),
        ..placeholders.experience.clone()
    }]
}
