//! Canned records and seed values used when extraction comes up empty.
//!
//! Everything here is plain configuration: the analyzer takes a
//! [`Placeholders`] at construction and the `[placeholders]` table of the
//! settings file can override any field.

use serde::{Deserialize, Serialize};

use crate::model::{Achievement, Certification, EducationRecord, ExperienceRecord, ProjectRecord};

/// Field text for records synthesized from company-like lines when no
/// experience section could be segmented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticExperience {
    pub title: String,
    pub location: String,
    pub period: String,
    pub achievements: Vec<String>,
    /// Maximum number of company-like lines turned into records.
    pub limit: usize,
}

impl Default for SyntheticExperience {
    fn default() -> Self {
        Self {
            title: "Position details extracted from resume".into(),
            location: "Location extracted from resume".into(),
            period: "Duration extracted from resume".into(),
            achievements: vec![
                "Professional experience and achievements detailed in resume".into(),
                "Technical skills and accomplishments as described in source document".into(),
                "Key responsibilities and contributions outlined in original resume".into(),
            ],
            limit: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    /// Employment type given to every extracted experience.
    pub employment_type: String,
    pub synthetic_experience: SyntheticExperience,
    /// Last resort when not even a company-like line exists.
    pub experience: ExperienceRecord,

    /// Seed for each education record opened on a degree line.
    pub education_seed: EducationRecord,
    pub education: Vec<EducationRecord>,

    /// Seed for each project record opened on a title line.
    pub project_seed: ProjectRecord,
    pub projects: Vec<ProjectRecord>,

    /// Seed for certifications matched in the text.
    pub certification_seed: Certification,
    pub certifications: Vec<Certification>,

    /// Seed for achievement lines matched in the text.
    pub achievement_seed: Achievement,
    pub achievements: Vec<Achievement>,

    pub bio: String,
    pub avatar: String,
    pub resume_url: String,

    pub generated_by: String,
    pub extraction_method: String,
    pub data_quality: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            employment_type: "Full-time".into(),
            synthetic_experience: SyntheticExperience::default(),
            experience: ExperienceRecord {
                id: 1,
                company: "Professional Experience".into(),
                title: "Details Available in Resume".into(),
                location: "Various".into(),
                period: "Career History".into(),
                employment_type: "Professional".into(),
                achievements: vec![
                    "Complete professional experience and qualifications available in source resume".into(),
                    "Technical expertise and career accomplishments detailed in original document".into(),
                    "Full work history and achievements outlined in provided resume file".into(),
                ],
                ..Default::default()
            },

            education_seed: EducationRecord {
                status: "Completed".into(),
                logo: "/api/placeholder/60/60".into(),
                ..Default::default()
            },
            education: vec![EducationRecord {
                id: 1,
                degree: "Educational Background".into(),
                field: "Details available in resume".into(),
                institution: "Institution information in source document".into(),
                location: "Location specified in resume".into(),
                period: "Duration as listed in resume".into(),
                status: "Completed".into(),
                description: "Complete educational background and qualifications detailed in source resume".into(),
                gpa: "Academic performance listed in resume".into(),
                coursework: vec!["Relevant coursework as detailed in resume".into()],
                logo: "/api/placeholder/60/60".into(),
            }],

            project_seed: ProjectRecord {
                category: "Software Development".into(),
                image: "/api/placeholder/600/400".into(),
                status: "Completed".into(),
                ..Default::default()
            },
            projects: vec![ProjectRecord {
                id: 1,
                title: "Professional Projects".into(),
                category: "Software Development".into(),
                description: "Project details and technical accomplishments available in source resume".into(),
                long_description: "Complete project portfolio including technical implementations, achievements, and technologies used as detailed in the original resume document.".into(),
                image: "/api/placeholder/600/400".into(),
                technologies: ["Various Technologies".to_string()].into_iter().collect(),
                features: vec![
                    "Project features and technical implementations detailed in resume".into(),
                    "Professional accomplishments and technical contributions".into(),
                    "Complete project specifications available in source document".into(),
                ],
                status: "Completed".into(),
                ..Default::default()
            }],

            certification_seed: Certification {
                date: "Valid".into(),
                badge_url: "/api/placeholder/100/100".into(),
                ..Default::default()
            },
            certifications: vec![Certification {
                id: 1,
                name: "Professional Certifications".into(),
                issuer: "Various Certification Bodies".into(),
                date: "As Listed in Resume".into(),
                credential_id: "See Resume".into(),
                description: "Professional certifications and qualifications detailed in source resume".into(),
                skills: vec!["Professional Skills".into()],
                badge_url: "/api/placeholder/100/100".into(),
                verification_url: String::new(),
            }],

            achievement_seed: Achievement {
                organization: "As detailed in resume".into(),
                date: "Date in resume".into(),
                category: "Professional Achievement".into(),
                icon: "🏆".into(),
                ..Default::default()
            },
            achievements: vec![Achievement {
                id: 1,
                title: "Professional Achievements".into(),
                organization: "Career Accomplishments".into(),
                date: "Throughout Career".into(),
                category: "Professional Excellence".into(),
                description: "Professional achievements, awards, and recognitions detailed in source resume document".into(),
                icon: "🏆".into(),
            }],

            bio: "Professional with experience in technology and software development. Skilled in various technical areas with a focus on delivering quality solutions.".into(),
            avatar: "/api/placeholder/200/200".into(),
            resume_url: "/assets/resume.pdf".into(),

            generated_by: "Resume Portfolio Analyzer".into(),
            extraction_method: "Heuristic section segmentation over extracted PDF text".into(),
            data_quality: "Best effort - heuristic extraction with placeholder fallbacks".into(),
        }
    }
}
