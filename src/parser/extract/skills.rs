use crate::model::{SkillBuckets, SkillEntry};
use crate::tables::{DEFAULT_LEVEL, LEVEL_CUES, SKILL_TABLE};
use crate::utils::count_occurrences;

/// Scan the whole text for every known skill keyword. Buckets keep table order.
pub fn extract(text: &str) -> SkillBuckets {
    let lower = text.to_lowercase();
    let level = estimate_level(&lower);
    let mut buckets = SkillBuckets::default();

    for (bucket, rows) in SKILL_TABLE {
        let Some(entries) = buckets.bucket_mut(bucket) else {
            continue;
        };
        for (keyword, name, category) in rows.iter() {
            if !lower.contains(keyword) {
                continue;
            }
            entries.push(SkillEntry {
                name: name.to_string(),
                level,
                years: estimate_years(count_occurrences(&lower, keyword)),
                category: category.to_string(),
            });
        }
    }
    buckets
}

/// Proficiency from cue words anywhere in the document, not near the skill.
pub fn estimate_level(lower: &str) -> u8 {
    LEVEL_CUES
        .iter()
        .find(|(cues, _)| cues.iter().any(|c| lower.contains(c)))
        .map(|(_, level)| *level)
        .unwrap_or(DEFAULT_LEVEL)
}

pub fn estimate_years(mentions: usize) -> u8 {
    match mentions {
        n if n >= 5 => 4,
        3 | 4 => 3,
        2 => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[SkillEntry]) -> Vec<&str> {
        entries.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn fixture_skills() {
        let text = std::fs::read_to_string("tests/fixtures/jane_resume.txt").unwrap();
        let skills = extract(&text);

        let python = skills.languages.iter().find(|s| s.name == "Python").unwrap();
        assert_eq!(python.level, 90);
        assert_eq!(python.years, 2);
        assert_eq!(python.category, "Programming");
        assert!(names(&skills.languages).contains(&"Go"));
        assert!(!names(&skills.languages).contains(&"Java"));

        assert_eq!(names(&skills.devops)[..2], ["Docker", "Kubernetes"]);
        assert!(names(&skills.cloud).contains(&"AWS"));
        assert!(names(&skills.databases).contains(&"PostgreSQL"));
        assert!(names(&skills.frontend).contains(&"React"));
    }

    #[test]
    fn level_cues_in_order() {
        assert_eq!(estimate_level("an expert and a beginner"), 90);
        assert_eq!(estimate_level("skilled in most things"), 80);
        assert_eq!(estimate_level("familiar with rust"), 70);
        assert_eq!(estimate_level("still learning rust"), 60);
        assert_eq!(estimate_level("rust"), DEFAULT_LEVEL);
    }

    #[test]
    fn years_from_mentions() {
        assert_eq!(estimate_years(0), 1);
        assert_eq!(estimate_years(1), 1);
        assert_eq!(estimate_years(2), 2);
        assert_eq!(estimate_years(4), 3);
        assert_eq!(estimate_years(9), 4);
    }

    #[test]
    fn empty_text_has_empty_buckets() {
        let skills = extract("");
        assert_eq!(skills.total(), 0);
        assert_eq!(skills.buckets().len(), 7);
    }
}
