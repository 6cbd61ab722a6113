use tracing::debug;

use crate::defaults::Placeholders;
use crate::model::EducationRecord;
use crate::parser::builder::{build_records, set_once, Record};
use crate::parser::lines::{LineKind, RuleSet};
use crate::parser::sections::{find_segment, EDUCATION};
use crate::utils::clean_lines;

impl Record for EducationRecord {
    fn absorb(&mut self, kind: LineKind, line: &str) {
        match kind {
            LineKind::Institution => set_once(&mut self.institution, line),
            LineKind::Date => set_once(&mut self.period, line),
            LineKind::Gpa => set_once(&mut self.gpa, line),
            _ => {}
        }
    }
}

pub fn extract(text: &str, placeholders: &Placeholders) -> Vec<EducationRecord> {
    let lines = clean_lines(text);
    let records = find_segment(&lines, &EDUCATION)
        .map(|segment| {
            build_records(segment, &RuleSet::education(), |degree| EducationRecord {
                degree: degree.to_string(),
                ..placeholders.education_seed.clone()
            })
        })
        .unwrap_or_default();

    if records.is_empty() {
        debug!("no education entries, using placeholder");
        return placeholders.education.clone();
    }
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| EducationRecord { id: i + 1, ..record })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_with_details() {
        let text = std::fs::read_to_string("tests/fixtures/jane_resume.txt").unwrap();
        let edu = extract(&text, &Placeholders::default());
        assert_eq!(edu.len(), 1);
        assert_eq!(edu[0].id, 1);
        assert_eq!(edu[0].degree, "Bachelor of Science in Computer Science");
        assert_eq!(edu[0].institution, "State University");
        assert_eq!(edu[0].period, "2012 - 2016");
        assert_eq!(edu[0].gpa, "GPA 3.8/4.0");
        assert_eq!(edu[0].status, "Completed");
        assert!(edu[0].field.is_empty());
    }

    #[test]
    fn two_degrees() {
        let text = "Education\nMaster of Science\nState University\nBachelor of Arts\nCity College\nSkills\nRust";
        let edu = extract(text, &Placeholders::default());
        let pairs: Vec<(&str, &str, usize)> = edu
            .iter()
            .map(|e| (e.degree.as_str(), e.institution.as_str(), e.id))
            .collect();
        assert_eq!(
            pairs,
            vec![("Master of Science", "State University", 1), ("Bachelor of Arts", "City College", 2)]
        );
    }

    #[test]
    fn missing_section_uses_placeholder() {
        let p = Placeholders::default();
        assert_eq!(extract("Jane Smith\nAcme Inc", &p), p.education);
        assert_eq!(extract("Education\nState University\nSkills", &p), p.education);
    }
}
