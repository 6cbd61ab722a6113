pub mod achievements;
pub mod certifications;
pub mod education;
pub mod experience;
pub mod personal;
pub mod projects;
pub mod skills;

use crate::defaults::Placeholders;
use crate::model::{Achievement, Certification, EducationRecord, PersonalInfo, ProjectRecord, SkillBuckets};

/// Everything drawn from the combined text of all documents. Experience
/// is extracted per document and lives outside this struct.
pub struct Profile {
    pub personal_info: PersonalInfo,
    pub skills: SkillBuckets,
    pub education: Vec<EducationRecord>,
    pub projects: Vec<ProjectRecord>,
    pub certifications: Vec<Certification>,
    pub achievements: Vec<Achievement>,
}

pub fn extract_profile(text: &str, placeholders: &Placeholders) -> Profile {
    Profile {
        personal_info: personal::extract(text, placeholders),
        skills: skills::extract(text),
        education: education::extract(text, placeholders),
        projects: projects::extract(text, placeholders),
        certifications: certifications::extract(text, placeholders),
        achievements: achievements::extract(text, placeholders),
    }
}
