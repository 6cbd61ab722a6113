//! Consumer side: reads a generated portfolio, prints it, and derives a
//! site-builder configuration from it.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::Portfolio;
use crate::utils::title_case;

const SEO_KEYWORD_LIMIT: usize = 10;
const GENERIC_KEYWORDS: &[&str] = &["developer", "engineer", "portfolio", "professional"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    pub portfolio_config: BuilderConfig,
    pub seo_config: SeoConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    pub person_name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
    pub layout: String,
    pub sections_enabled: SectionsEnabled,
    /// chart, grid or list
    pub skills_display: String,
    /// cards, timeline or grid
    pub project_layout: String,
    /// light, dark or auto
    pub theme: String,
    pub animations: bool,
    pub responsive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionsEnabled {
    pub hero: bool,
    pub about: bool,
    pub skills: bool,
    pub experience: bool,
    pub projects: bool,
    pub education: bool,
    pub certifications: bool,
    pub achievements: bool,
    pub contact: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoConfig {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub og_image: String,
}

/// Suggested page structure for a portfolio site.
pub struct PortfolioTemplate {
    pub components: &'static [&'static str],
    /// page section → portfolio field
    pub data_mapping: &'static [(&'static str, &'static str)],
    pub stack_suggestions: &'static [(&'static str, &'static [&'static str])],
    pub customization_tips: &'static [&'static str],
}

impl PortfolioTemplate {
    pub const STANDARD: PortfolioTemplate = PortfolioTemplate {
        components: &[
            "Header with personal info",
            "Hero section with bio",
            "Skills visualization",
            "Experience timeline",
            "Projects showcase",
            "Education section",
            "Certifications display",
            "Achievements highlights",
            "Contact footer",
        ],
        data_mapping: &[
            ("header", "personalInfo"),
            ("hero", "personalInfo.bio"),
            ("skills", "skills"),
            ("experience", "experience"),
            ("projects", "projects"),
            ("education", "education"),
            ("certifications", "certifications"),
            ("achievements", "achievements"),
        ],
        stack_suggestions: &[
            ("frontend", &["React", "Vue.js", "Angular", "Next.js"]),
            ("styling", &["Tailwind CSS", "Bootstrap", "Material-UI", "Styled Components"]),
            ("backend", &["Node.js", "Python Flask", "Django", "Express.js"]),
            ("database", &["MongoDB", "PostgreSQL", "Firebase", "Supabase"]),
            ("deployment", &["Vercel", "Netlify", "AWS", "Digital Ocean"]),
        ],
        customization_tips: &[
            "Use the extracted name for page title and metadata",
            "Apply personal color scheme based on industry/preferences",
            "Highlight the most relevant skills for target audience",
            "Prioritize recent experience and significant achievements",
            "Include links to GitHub, LinkedIn from extracted social data",
            "Add resume download link using the PDF file path",
        ],
    };

    /// Components, data mapping, the first two stack options per category,
    /// and customization tips.
    pub fn render(&self) -> String {
        let mut out = String::from("Components to build:\n");
        for component in self.components {
            let _ = writeln!(out, "   + {component}");
        }
        out.push_str("\nData mapping:\n");
        for (section, field) in self.data_mapping {
            let _ = writeln!(out, "   {section} <- {field}");
        }
        out.push_str("\nSuggested tech stack:\n");
        for (category, options) in self.stack_suggestions {
            let _ = writeln!(out, "   {}: {}", title_case(category), options.iter().take(2).join(", "));
        }
        out.push_str("\nCustomization tips:\n");
        for (i, tip) in self.customization_tips.iter().enumerate() {
            let _ = writeln!(out, "   {}. {tip}", i + 1);
        }
        out
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Human-readable dump of a portfolio.
pub fn portfolio_summary(portfolio: &Portfolio) -> String {
    let mut out = String::new();
    let personal = &portfolio.personal_info;
    let _ = writeln!(out, "PERSONAL INFORMATION:");
    let _ = writeln!(out, "   Name: {}", or_default(&personal.name, "Not extracted"));
    let _ = writeln!(out, "   Email: {}", or_default(&personal.email, "Not extracted"));
    let _ = writeln!(out, "   Location: {}", or_default(&personal.location, "Not extracted"));
    let _ = writeln!(out, "   Phone: {}", or_default(&personal.phone, "Not extracted"));

    let _ = writeln!(out, "\nWORK EXPERIENCE ({} entries):", portfolio.experience.len());
    for exp in &portfolio.experience {
        let _ = writeln!(out, "   * {}", exp.company);
        let _ = writeln!(out, "     Title: {}", or_default(&exp.title, "Not specified"));
        let _ = writeln!(out, "     Achievements: {}", exp.achievements.len());
        let techs = exp.technologies.iter().join(", ");
        let _ = writeln!(out, "     Technologies: {}", or_default(&techs, "None"));
    }

    let skills = &portfolio.skills;
    let _ = writeln!(out, "\nTECHNICAL SKILLS ({} total):", skills.total());
    for (bucket, entries) in skills.buckets() {
        if entries.is_empty() {
            continue;
        }
        let _ = writeln!(out, "   {}: {} skills", title_case(bucket), entries.len());
        let _ = writeln!(out, "     Examples: {}", entries.iter().take(3).map(|s| &s.name).join(", "));
    }

    let _ = writeln!(out, "\nPROJECTS ({} entries):", portfolio.projects.len());
    for project in &portfolio.projects {
        let techs = project.technologies.iter().join(", ");
        let _ = writeln!(out, "   * {}", project.title);
        let _ = writeln!(out, "     Category: {}", project.category);
        let _ = writeln!(out, "     Technologies: {}", or_default(&techs, "None"));
    }

    let _ = writeln!(out, "\nEDUCATION ({} entries):", portfolio.education.len());
    for edu in &portfolio.education {
        let _ = writeln!(out, "   * {} in {}", edu.degree, edu.field);
        let _ = writeln!(out, "     Institution: {}", edu.institution);
        let _ = writeln!(out, "     Period: {}", or_default(&edu.period, "Not specified"));
    }

    let _ = writeln!(out, "\nCERTIFICATIONS ({} entries):", portfolio.certifications.len());
    for cert in &portfolio.certifications {
        let _ = writeln!(out, "   * {}", cert.name);
        let _ = writeln!(out, "     Issuer: {}", cert.issuer);
    }

    let _ = writeln!(out, "\nACHIEVEMENTS ({} entries):", portfolio.achievements.len());
    for achievement in &portfolio.achievements {
        let _ = writeln!(out, "   * {}", achievement.title);
        let _ = writeln!(out, "     Organization: {}", achievement.organization);
    }

    let meta = &portfolio.metadata;
    let _ = writeln!(out, "\nEXTRACTION METADATA:");
    let _ = writeln!(
        out,
        "   PDF Library Used: {}",
        meta.pdf_library_used.as_deref().unwrap_or("Unknown")
    );
    let _ = writeln!(out, "   Text Extracted: {} characters", meta.text_extracted_chars);
    let _ = writeln!(out, "   Files Processed: {}", meta.pdf_files_processed);
    let _ = writeln!(out, "   Data Quality: {}", meta.data_quality);
    out
}

pub fn build_config(portfolio: &Portfolio) -> PortfolioConfig {
    let name = portfolio.personal_info.name.as_str();
    PortfolioConfig {
        portfolio_config: BuilderConfig {
            person_name: or_default(name, "John Doe").to_string(),
            primary_color: "#3B82F6".into(),
            secondary_color: "#1E40AF".into(),
            font_family: "Inter".into(),
            layout: "modern".into(),
            sections_enabled: SectionsEnabled {
                hero: true,
                about: true,
                skills: true,
                experience: true,
                projects: true,
                education: true,
                certifications: !portfolio.certifications.is_empty(),
                achievements: !portfolio.achievements.is_empty(),
                contact: true,
            },
            skills_display: "chart".into(),
            project_layout: "cards".into(),
            theme: "light".into(),
            animations: true,
            responsive: true,
        },
        seo_config: SeoConfig {
            title: format!("{} - Professional Portfolio", or_default(name, "Portfolio")),
            description: format!(
                "Professional portfolio of {} showcasing skills, experience, and projects",
                or_default(name, "developer")
            ),
            keywords: seo_keywords(portfolio),
            og_image: "/api/placeholder/1200/630".into(),
        },
    }
}

/// Lowercased skill names, then project technologies, then generic terms.
/// First occurrence wins; at most ten.
pub fn seo_keywords(portfolio: &Portfolio) -> Vec<String> {
    let skills = portfolio
        .skills
        .buckets()
        .into_iter()
        .flat_map(|(_, entries)| entries.iter().map(|s| s.name.to_lowercase()));
    let techs = portfolio
        .projects
        .iter()
        .flat_map(|p| p.technologies.iter().map(|t| t.to_lowercase()));
    let generic = GENERIC_KEYWORDS.iter().map(|k| k.to_string());

    skills
        .chain(techs)
        .chain(generic)
        .unique()
        .take(SEO_KEYWORD_LIMIT)
        .collect()
}

pub fn write_config(config: &PortfolioConfig, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "portfolio config written");
    Ok(())
}
