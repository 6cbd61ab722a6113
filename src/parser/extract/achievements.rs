use crate::defaults::Placeholders;
use crate::model::Achievement;
use crate::tables::ACHIEVEMENT_KEYWORDS;
use crate::utils::{clean_lines, contains_any};

const MIN_ACHIEVEMENT_CHARS: usize = 15;

pub fn extract(text: &str, placeholders: &Placeholders) -> Vec<Achievement> {
    let found: Vec<Achievement> = clean_lines(text)
        .into_iter()
        .filter(|l| contains_any(l, ACHIEVEMENT_KEYWORDS) && l.chars().count() > MIN_ACHIEVEMENT_CHARS)
        .enumerate()
        .map(|(i, line)| Achievement {
            id: i + 1,
            title: line.to_string(),
            description: line.to_string(),
            ..placeholders.achievement_seed.clone()
        })
        .collect();

    if found.is_empty() {
        placeholders.achievements.clone()
    } else {
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lines_become_achievements() {
        let text = std::fs::read_to_string("tests/fixtures/jane_resume.txt").unwrap();
        let found = extract(&text, &Placeholders::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Received Employee of the Year award in 2021 for platform work");
        assert_eq!(found[0].description, found[0].title);
        assert_eq!(found[0].category, "Professional Achievement");
    }

    #[test]
    fn short_lines_ignored() {
        let p = Placeholders::default();
        assert_eq!(extract("Award\nHonors list", &p), p.achievements);
        let found = extract("Honorable mention, regional hackathon", &p);
        assert_eq!(found[0].id, 1);
    }
}
