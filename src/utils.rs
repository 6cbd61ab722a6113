//! String predicates shared by the classifiers and extractors.

/// Title-cased in the strict sense used by the line rules: every run of
/// letters starts with an uppercase letter followed only by lowercase ones,
/// and at least one letter is present. Digits and punctuation split runs.
pub fn is_title_case(s: &str) -> bool {
    let mut cased = false;
    let mut prev_cased = false;
    for c in s.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
        } else {
            prev_cased = false;
        }
    }
    cased
}

/// At least one letter, and no lowercase letters.
pub fn is_all_caps(s: &str) -> bool {
    s.chars().any(|c| c.is_uppercase()) && !s.chars().any(|c| c.is_lowercase())
}

/// Uppercase the first letter of every letter run, lowercase the rest.
/// `"github actions"` → `"Github Actions"`, `"c++"` → `"C++"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if cased && prev_cased {
            out.extend(c.to_lowercase());
        } else if cased {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }
    out
}

pub fn is_alphabetic_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

/// Case-insensitive substring membership against a keyword list.
/// Keywords are expected to be lowercase already.
pub fn contains_any(line: &str, keywords: &[&str]) -> bool {
    let lower = line.to_lowercase();
    keywords.iter().any(|kw| lower.contains(kw))
}

/// Non-overlapping occurrence count of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Trimmed, non-empty lines of `raw`.
pub fn clean_lines(raw: &str) -> Vec<&str> {
    raw.split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}
