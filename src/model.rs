use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ── Inputs ──

/// One discovered resume file and the text pulled out of it.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub path: PathBuf,
    /// File name, used as the provenance label.
    pub label: String,
    pub text: String,
    /// Backend that produced `text`; `None` for cached or placeholder text.
    pub backend: Option<&'static str>,
}

// ── Extracted records ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceRecord {
    pub id: usize,
    pub company: String,
    pub title: String,
    pub location: String,
    pub period: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub achievements: Vec<String>,
    pub technologies: BTreeSet<String>,
    pub source: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

impl ExperienceRecord {
    /// Cross-document identity, literal concatenation.
    pub fn identity(&self) -> String {
        format!("{}_{}", self.company, self.title)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationRecord {
    pub id: usize,
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub location: String,
    pub period: String,
    pub status: String,
    pub description: String,
    pub gpa: String,
    pub coursework: Vec<String>,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub level: u8,
    pub years: u8,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillBuckets {
    pub languages: Vec<SkillEntry>,
    pub frontend: Vec<SkillEntry>,
    pub backend: Vec<SkillEntry>,
    pub devops: Vec<SkillEntry>,
    pub cloud: Vec<SkillEntry>,
    pub databases: Vec<SkillEntry>,
    pub tools: Vec<SkillEntry>,
}

impl SkillBuckets {
    pub fn bucket_mut(&mut self, name: &str) -> Option<&mut Vec<SkillEntry>> {
        match name {
            "languages" => Some(&mut self.languages),
            "frontend" => Some(&mut self.frontend),
            "backend" => Some(&mut self.backend),
            "devops" => Some(&mut self.devops),
            "cloud" => Some(&mut self.cloud),
            "databases" => Some(&mut self.databases),
            "tools" => Some(&mut self.tools),
            _ => None,
        }
    }

    pub fn buckets(&self) -> [(&'static str, &[SkillEntry]); 7] {
        [
            ("languages", &self.languages),
            ("frontend", &self.frontend),
            ("backend", &self.backend),
            ("devops", &self.devops),
            ("cloud", &self.cloud),
            ("databases", &self.databases),
            ("tools", &self.tools),
        ]
    }

    pub fn total(&self) -> usize {
        self.buckets().iter().map(|(_, b)| b.len()).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: usize,
    pub title: String,
    pub category: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    pub technologies: BTreeSet<String>,
    pub features: Vec<String>,
    pub github_url: String,
    pub live_url: Option<String>,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    pub id: usize,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: String,
    pub description: String,
    pub skills: Vec<String>,
    pub badge_url: String,
    pub verification_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    pub id: usize,
    pub title: String,
    pub organization: String,
    pub date: String,
    pub category: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(rename = "linkedIn")]
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub social: BTreeMap<String, String>,
    pub bio: String,
    pub avatar: String,
    #[serde(rename = "resumeUrl")]
    pub resume_url: String,
}

// ── Output document ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub generated_by: String,
    pub generation_date: String,
    pub extraction_method: String,
    pub pdf_files_processed: usize,
    pub pdf_files_list: Vec<String>,
    pub extraction_sources: BTreeMap<String, Vec<String>>,
    pub total_achievements_extracted: usize,
    pub total_sections: usize,
    pub data_quality: String,
    pub pdf_library_used: Option<String>,
    pub text_extracted_chars: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    #[serde(rename = "personalInfo")]
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceRecord>,
    pub projects: Vec<ProjectRecord>,
    pub skills: SkillBuckets,
    pub education: Vec<EducationRecord>,
    pub certifications: Vec<Certification>,
    pub achievements: Vec<Achievement>,
    pub metadata: Metadata,
}

impl Portfolio {
    pub fn total_achievements(&self) -> usize {
        self.experience.iter().map(|e| e.achievements.len()).sum()
    }
}
