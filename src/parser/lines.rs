use std::sync::LazyLock;

use regex::Regex;

use crate::tables::{
    BULLET_GLYPHS, COMPANY_INDICATORS, DEGREE_KEYWORDS, INSTITUTION_KEYWORDS, LOCATION_WORDS,
    NOT_COMPANY, PROJECT_INDICATORS, TITLE_KEYWORDS,
};
use crate::utils::{contains_any, is_all_caps, is_title_case};

static DATE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\d{4}\s*[-–]\s*\d{4}",
        r"\w+\s+\d{4}\s*[-–]\s*\w+\s+\d{4}",
        r"\d{1,2}/\d{4}\s*[-–]\s*\d{1,2}/\d{4}",
        r"(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)",
        r"present|current",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});
static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+,\s*\w{2}|\w+,\s*\w+").unwrap());
static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\d+\.").unwrap());
static BULLET_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\s•◦▪–\-*→\d.]+").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Cleaned bullet text at or below this many chars is dropped.
pub const MIN_BULLET_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Bullet,
    Company,
    Title,
    Date,
    Location,
    Degree,
    Institution,
    Gpa,
    ProjectTitle,
    Text,
}

impl LineKind {
    /// Anchor kinds open a new record.
    pub fn is_anchor(self) -> bool {
        matches!(self, LineKind::Company | LineKind::Degree | LineKind::ProjectTitle)
    }
}

pub struct LineRule {
    pub kind: LineKind,
    /// Lower wins.
    pub priority: u8,
    pub test: fn(&str) -> bool,
}

/// Ordered rule table. A line gets the kind of the first rule it satisfies.
pub struct RuleSet {
    rules: Vec<LineRule>,
}

impl RuleSet {
    pub fn new(mut rules: Vec<LineRule>) -> Self {
        rules.sort_by_key(|r| r.priority);
        Self { rules }
    }

    pub fn classify(&self, line: &str) -> Option<LineKind> {
        self.rules.iter().find(|r| (r.test)(line)).map(|r| r.kind)
    }

    pub fn experience() -> Self {
        Self::new(vec![
            rule(LineKind::Bullet, 0, is_bullet_point),
            rule(LineKind::Company, 1, is_company_line),
            rule(LineKind::Title, 2, is_title_line),
            rule(LineKind::Date, 3, is_date_line),
            rule(LineKind::Location, 4, is_location_line),
        ])
    }

    pub fn education() -> Self {
        Self::new(vec![
            rule(LineKind::Degree, 0, is_degree_line),
            rule(LineKind::Institution, 1, is_institution_line),
            rule(LineKind::Date, 2, is_date_line),
            rule(LineKind::Gpa, 3, is_gpa_line),
        ])
    }

    pub fn projects() -> Self {
        Self::new(vec![
            rule(LineKind::ProjectTitle, 0, is_project_title),
            rule(LineKind::Bullet, 1, is_bullet_point),
            rule(LineKind::Text, 2, |_| true),
        ])
    }
}

fn rule(kind: LineKind, priority: u8, test: fn(&str) -> bool) -> LineRule {
    LineRule { kind, priority, test }
}

// ── Classifiers ──

/// Company-likeness. All-caps lines and title-cased lines of 5–50 chars
/// also count, so job titles like "Staff Engineer" and dates like
/// "Jan 2020 - Present" are taken for companies.
pub fn is_company_line(line: &str) -> bool {
    if contains_any(line, NOT_COMPANY) {
        return false;
    }
    if contains_any(line, COMPANY_INDICATORS) {
        return true;
    }
    let len = line.chars().count();
    if is_all_caps(line) && len > 3 {
        return true;
    }
    is_title_case(line) && (5..=50).contains(&len)
}

pub fn is_title_line(line: &str) -> bool {
    contains_any(line, TITLE_KEYWORDS)
}

pub fn is_date_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    DATE_RES.iter().any(|re| re.is_match(&lower))
}

pub fn is_location_line(line: &str) -> bool {
    LOCATION_RE.is_match(line) || contains_any(line, LOCATION_WORDS)
}

pub fn is_bullet_point(line: &str) -> bool {
    BULLET_GLYPHS.iter().any(|g| line.starts_with(g)) || NUMBERED_RE.is_match(line)
}

pub fn is_institution_line(line: &str) -> bool {
    contains_any(line, INSTITUTION_KEYWORDS)
}

pub fn is_degree_line(line: &str) -> bool {
    contains_any(line, DEGREE_KEYWORDS)
}

pub fn is_gpa_line(line: &str) -> bool {
    contains_any(line, &["gpa"])
}

pub fn is_project_title(line: &str) -> bool {
    let len = line.chars().count();
    if !(10..=100).contains(&len) {
        return false;
    }
    contains_any(line, PROJECT_INDICATORS)
        || (is_title_case(line) && line.split_whitespace().count() <= 8)
}

/// Strip leading glyphs and numbering, collapse whitespace. `None` when
/// what remains is too short to be an achievement.
pub fn clean_bullet_point(line: &str) -> Option<String> {
    let stripped = BULLET_PREFIX_RE.replace(line, "");
    let cleaned = WHITESPACE_RE.replace_all(&stripped, " ").trim().to_string();
    if cleaned.chars().count() > MIN_BULLET_CHARS {
        Some(cleaned)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn senior_software_engineer_is_a_title() {
        assert!(is_title_line("Senior Software Engineer"));
    }

    #[test]
    fn company_indicators() {
        assert!(is_company_line("Acme Robotics Inc"));
        assert!(is_company_line("globex llc"));
        assert!(is_company_line("INITECH"));
        assert!(!is_company_line("IBM"));
    }

    #[test]
    fn section_words_block_company() {
        assert!(!is_company_line("Professional Experience"));
        assert!(!is_company_line("TECHNICAL SKILLS"));
        assert!(!is_company_line("Education Technologies Inc"));
    }

    #[test]
    fn title_case_false_positives_are_kept() {
        assert!(is_company_line("Staff Engineer"));
        assert!(is_company_line("Jan 2020 - Present"));
        assert!(!is_company_line("Boston, MA"));
        assert!(!is_company_line("Staff engineer, platform team"));
    }

    #[test]
    fn dates() {
        assert!(is_date_line("2019 - 2023"));
        assert!(is_date_line("2019–2023"));
        assert!(is_date_line("01/2020 - 12/2023"));
        assert!(is_date_line("Present"));
        assert!(is_date_line("Junior developer"));
        assert!(!is_date_line("2019"));
    }

    #[test]
    fn locations() {
        assert!(is_location_line("Boston, MA"));
        assert!(is_location_line("Lowell,USA"));
        assert!(is_location_line("Remote"));
        assert!(!is_location_line("Boston"));
    }

    #[test]
    fn bullets() {
        for line in ["• Did things", "◦ nested", "▪ square", "– dash", "- hyphen", "* star", "→ arrow", "12. numbered"] {
            assert!(is_bullet_point(line), "{line}");
        }
        assert!(!is_bullet_point("Plain line"));
        assert!(!is_bullet_point("2019 - 2023"));
    }

    #[test]
    fn bullet_cleaning() {
        assert_eq!(
            clean_bullet_point("•   Reduced   build times by half").as_deref(),
            Some("Reduced build times by half")
        );
        assert_eq!(
            clean_bullet_point("3. Shipped the new billing service").as_deref(),
            Some("Shipped the new billing service")
        );
        assert_eq!(clean_bullet_point("• Fixed bugs"), None);
        assert_eq!(clean_bullet_point("- tiny"), None);
    }

    #[test]
    fn education_lines() {
        assert!(is_degree_line("Master of Science"));
        assert!(is_institution_line("State University"));
        assert!(is_gpa_line("GPA 3.8/4.0"));
        assert!(!is_degree_line("State University"));
    }

    #[test]
    fn project_titles() {
        assert!(is_project_title("Inventory Dashboard"));
        assert!(is_project_title("Personal Finance Tracker"));
        assert!(!is_project_title("Short App"));
        assert!(!is_project_title("a plain sentence about nothing much"));
    }

    #[test]
    fn experience_priority_order() {
        let rules = RuleSet::experience();
        assert_eq!(rules.classify("• Led the Acme Inc migration, Boston"), Some(LineKind::Bullet));
        assert_eq!(rules.classify("Acme Robotics Inc"), Some(LineKind::Company));
        assert_eq!(rules.classify("Staff engineer, platform team"), Some(LineKind::Title));
        assert_eq!(rules.classify("2019 - 2023"), Some(LineKind::Date));
        assert_eq!(rules.classify("Boston, MA"), Some(LineKind::Location));
        assert_eq!(rules.classify("worked on things"), None);
    }

    #[test]
    fn priority_not_declaration_order() {
        let rules = RuleSet::new(vec![
            rule(LineKind::Location, 5, is_location_line),
            rule(LineKind::Title, 1, is_title_line),
        ]);
        assert_eq!(rules.classify("Engineer, Boston"), Some(LineKind::Title));
    }

    #[test]
    fn projects_fall_through_to_text() {
        let rules = RuleSet::projects();
        assert_eq!(rules.classify("just a description"), Some(LineKind::Text));
        assert_eq!(rules.classify("• Wrote the release notes by hand"), Some(LineKind::Bullet));
        assert_eq!(rules.classify("• Built an internal reporting tool"), Some(LineKind::ProjectTitle));
        assert!(LineKind::ProjectTitle.is_anchor());
        assert!(!LineKind::Text.is_anchor());
    }
}
