use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::defaults::Placeholders;
use crate::model::Certification;
use crate::tables::{CERT_ISSUERS, CERT_SKILLS, DEFAULT_CERT_ISSUER};
use crate::utils::title_case;

// Matched against lowercased text. `[\w\s]+` runs across line breaks.
static CERT_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"aws\s+certified\s+[\w\s]+",
        r"microsoft\s+certified\s+[\w\s]+",
        r"google\s+cloud\s+[\w\s]+",
        r"azure\s+[\w\s]+\s+certified",
        r"comptia\s+[\w\s]+",
        r"cisco\s+[\w\s]+",
        r"oracle\s+certified\s+[\w\s]+",
        r"certified\s+[\w\s]+\s+professional",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

const MIN_CERT_CHARS: usize = 10;

/// Certifications by pattern, grouped by pattern order. The same phrase may
/// be reported by more than one pattern.
pub fn extract(text: &str, placeholders: &Placeholders) -> Vec<Certification> {
    let lower = text.to_lowercase();
    let mut certs = Vec::new();
    for re in CERT_RES.iter() {
        for m in re.find_iter(&lower) {
            let phrase = m.as_str().trim();
            if phrase.chars().count() <= MIN_CERT_CHARS {
                continue;
            }
            let id = certs.len() + 1;
            certs.push(Certification {
                id,
                name: title_case(phrase),
                issuer: issuer_for(phrase).to_string(),
                credential_id: format!("CERT-{id}"),
                description: format!("Professional certification in {phrase}"),
                skills: skills_for(phrase),
                ..placeholders.certification_seed.clone()
            });
        }
    }

    if certs.is_empty() {
        debug!("no certifications found, using placeholder");
        return placeholders.certifications.clone();
    }
    certs
}

fn issuer_for(phrase: &str) -> &'static str {
    CERT_ISSUERS
        .iter()
        .find(|(keys, _)| keys.iter().any(|k| phrase.contains(k)))
        .map(|(_, issuer)| *issuer)
        .unwrap_or(DEFAULT_CERT_ISSUER)
}

fn skills_for(phrase: &str) -> Vec<String> {
    CERT_SKILLS
        .iter()
        .find(|(key, _)| phrase.contains(key))
        .map(|(_, skills)| skills.iter().map(|s| s.to_string()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aws_certification_from_fixture() {
        let text = std::fs::read_to_string("tests/fixtures/jane_resume.txt").unwrap();
        let certs = extract(&text, &Placeholders::default());
        assert_eq!(certs.len(), 1);
        let c = &certs[0];
        assert_eq!(c.name, "Aws Certified Developer Associate");
        assert_eq!(c.issuer, "Amazon Web Services");
        assert_eq!(c.credential_id, "CERT-1");
        assert_eq!(c.date, "Valid");
        assert_eq!(c.description, "Professional certification in aws certified developer associate");
        assert_eq!(c.skills, vec!["AWS", "Cloud Computing", "Architecture"]);
    }

    #[test]
    fn issuer_and_skills_lookup() {
        assert_eq!(issuer_for("comptia security plus"), "CompTIA");
        assert_eq!(issuer_for("azure solutions certified"), "Microsoft");
        assert_eq!(issuer_for("certified scrum professional"), DEFAULT_CERT_ISSUER);
        assert!(skills_for("cisco networking").is_empty());
    }

    #[test]
    fn ids_run_across_patterns() {
        let certs = extract("CompTIA Security Plus; Cisco CCNA Routing.", &Placeholders::default());
        let names: Vec<(usize, &str)> = certs.iter().map(|c| (c.id, c.name.as_str())).collect();
        assert_eq!(names, vec![(1, "Comptia Security Plus"), (2, "Cisco Ccna Routing")]);
    }

    #[test]
    fn none_found_uses_placeholder() {
        let p = Placeholders::default();
        assert_eq!(extract("nothing relevant", &p), p.certifications);
    }
}
