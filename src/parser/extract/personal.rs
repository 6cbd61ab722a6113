use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::defaults::Placeholders;
use crate::model::PersonalInfo;
use crate::tables::{BIO_END, BIO_START, HEADLINE_KEYWORDS};
use crate::utils::{clean_lines, contains_any, is_alphabetic_word};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").unwrap());
static PHONE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b",
        r"\(\d{3}\)\s*\d{3}[-.]?\d{4}\b",
        r"\+\d{1,3}[-.\s]?\d{3,4}[-.\s]?\d{3,4}[-.\s]?\d{3,4}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});
static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"linkedin\.com/in/[\w-]+")
        .case_insensitive(true)
        .build()
        .unwrap()
});
static GITHUB_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"github\.com/[\w-]+")
        .case_insensitive(true)
        .build()
        .unwrap()
});
static LOCATION_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"\b\w+,\s*\w{2}\b", r"\b\w+,\s*\w+\b"]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

const NAME_SCAN_LINES: usize = 5;
const TITLE_SCAN_LINES: usize = 10;

pub fn extract(text: &str, placeholders: &Placeholders) -> PersonalInfo {
    let lines = clean_lines(text);
    let mut info = PersonalInfo {
        name: find_name(&lines).unwrap_or_default(),
        title: find_headline(&lines).unwrap_or_default(),
        avatar: placeholders.avatar.clone(),
        resume_url: placeholders.resume_url.clone(),
        ..Default::default()
    };

    if let Some(m) = EMAIL_RE.find(text) {
        info.email = m.as_str().to_string();
        info.social.insert("email".into(), info.email.clone());
    }
    if let Some(m) = PHONE_RES.iter().find_map(|re| re.find(text)) {
        info.phone = m.as_str().to_string();
    }
    if let Some(m) = LINKEDIN_RE.find(text) {
        info.linkedin = format!("https://{}", m.as_str());
        info.social.insert("linkedin".into(), info.linkedin.clone());
    }
    if let Some(m) = GITHUB_RE.find(text) {
        info.github = format!("https://{}", m.as_str());
        info.social.insert("github".into(), info.github.clone());
    }
    if let Some(m) = LOCATION_RES.iter().find_map(|re| re.find(text)) {
        info.location = m.as_str().to_string();
    }

    let bio = find_bio(&lines);
    info.bio = if bio.is_empty() {
        placeholders.bio.clone()
    } else {
        bio
    };
    info
}

/// A short line of two to four purely alphabetic words near the top.
fn find_name(lines: &[&str]) -> Option<String> {
    lines.iter().take(NAME_SCAN_LINES).find_map(|line| {
        let len = line.chars().count();
        if len <= 5 || len >= 50 || !line.contains(' ') {
            return None;
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        ((2..=4).contains(&words.len()) && words.iter().all(|w| is_alphabetic_word(w)))
            .then(|| line.to_string())
    })
}

fn find_headline(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .take(TITLE_SCAN_LINES)
        .find(|line| contains_any(line, HEADLINE_KEYWORDS) && line.chars().count() < 100)
        .map(|line| line.to_string())
}

/// Lines following a summary-like header, up to the next major section.
/// A later line that itself looks like a summary header is skipped.
fn find_bio(lines: &[&str]) -> String {
    let mut found = false;
    let mut bio: Vec<&str> = Vec::new();
    for line in lines {
        if contains_any(line, BIO_START) {
            found = true;
            continue;
        }
        if !found {
            continue;
        }
        if contains_any(line, BIO_END) {
            break;
        }
        bio.push(line);
    }
    bio.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_mirrored_into_social() {
        let info = extract("Contact: john.doe@example.com", &Placeholders::default());
        assert_eq!(info.email, "john.doe@example.com");
        assert_eq!(info.social.get("email").map(String::as_str), Some("john.doe@example.com"));
    }

    #[test]
    fn header_fields_from_fixture() {
        let text = std::fs::read_to_string("tests/fixtures/jane_resume.txt").unwrap();
        let info = extract(&text, &Placeholders::default());
        assert_eq!(info.name, "Jane Smith");
        assert_eq!(info.title, "Senior Software Engineer");
        assert_eq!(info.email, "jane.smith@example.com");
        assert_eq!(info.phone, "(555) 123-4567");
        assert_eq!(info.location, "Boston, MA");
        assert_eq!(info.linkedin, "https://linkedin.com/in/janesmith");
        assert_eq!(info.github, "https://github.com/janesmith");
        assert_eq!(info.social.len(), 3);
        assert_eq!(
            info.bio,
            "Backend engineer focused on reliable distributed services and developer tooling."
        );
        assert_eq!(info.avatar, "/api/placeholder/200/200");
    }

    #[test]
    fn dashed_phone_preferred_over_parenthesized() {
        let info = extract("(555) 000-1111 or 617-555-0199", &Placeholders::default());
        assert_eq!(info.phone, "617-555-0199");
    }

    #[test]
    fn name_needs_alphabetic_words() {
        assert_eq!(find_name(&["Jane Smith"]), Some("Jane Smith".to_string()));
        assert_eq!(find_name(&["Jane Smith 2024"]), None);
        assert_eq!(find_name(&["Jane"]), None);
        assert_eq!(find_name(&["a", "b", "c", "d", "e", "Jane Smith"]), None);
    }

    #[test]
    fn missing_bio_uses_default() {
        let p = Placeholders::default();
        let info = extract("Jane Smith\nExperience\nAcme Inc", &p);
        assert_eq!(info.bio, p.bio);
        assert!(info.email.is_empty());
        assert!(info.social.is_empty());
    }

    #[test]
    fn bio_stops_at_next_section() {
        let lines = ["Jane", "Profile", "Builds things.", "Ships them.", "Skills", "Rust"];
        assert_eq!(find_bio(&lines), "Builds things. Ships them.");
    }
}
