//! Assembles the portfolio document from loaded resumes.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;
use tracing::{info, warn};

use crate::config::Settings;
use crate::defaults::Placeholders;
use crate::merge::{extraction_sources, merge_experiences};
use crate::model::{Metadata, Portfolio, ResumeDocument};
use crate::parser;
use crate::source::discover::find_resume_files;
use crate::source::TextSource;

/// Sections in the output document.
pub const TOTAL_SECTIONS: usize = 7;

pub struct Analyzer {
    settings: Settings,
    source: TextSource,
}

impl Analyzer {
    pub fn new(settings: Settings) -> Self {
        let source = TextSource::from_settings(&settings);
        Self { settings, source }
    }

    pub fn has_backends(&self) -> bool {
        self.source.has_backends()
    }

    pub fn discover(&self) -> Vec<PathBuf> {
        find_resume_files(&self.settings.resume_folder(), &self.settings.file_keywords)
    }

    /// Load every file in order, one at a time.
    pub fn load_documents(&self, files: &[PathBuf]) -> Vec<ResumeDocument> {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let mut docs = Vec::with_capacity(files.len());
        for path in files {
            let doc = self.source.load(path);
            pb.set_message(doc.label.clone());
            docs.push(doc);
            pb.inc(1);
        }
        pb.finish_and_clear();
        docs
    }

    pub fn generate(&self, docs: &[ResumeDocument]) -> Portfolio {
        generate_portfolio(docs, &self.settings.placeholders)
    }
}

/// Build the portfolio. Never fails; every empty list is replaced by its
/// placeholder. `pdf_library_used` is the first backend that produced text.
pub fn generate_portfolio(docs: &[ResumeDocument], placeholders: &Placeholders) -> Portfolio {
    let mut experiences = Vec::new();
    for doc in docs {
        let found = parser::document_experience(doc, placeholders);
        info!(file = %doc.label, experiences = found.len(), "document processed");
        experiences.extend(found);
    }
    let mut experience = merge_experiences(experiences);
    let sources = extraction_sources(&experience);
    if experience.is_empty() {
        warn!("no experience extracted, using placeholder");
        experience.push(placeholders.experience.clone());
    }

    let combined: String = docs.iter().map(|d| format!("\n{}\n", d.text)).collect();
    let profile = parser::combined_profile(&combined, placeholders);

    let mut portfolio = Portfolio {
        personal_info: profile.personal_info,
        experience,
        projects: profile.projects,
        skills: profile.skills,
        education: profile.education,
        certifications: profile.certifications,
        achievements: profile.achievements,
        metadata: Metadata {
            generated_by: placeholders.generated_by.clone(),
            generation_date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            extraction_method: placeholders.extraction_method.clone(),
            pdf_files_processed: docs.len(),
            pdf_files_list: docs.iter().map(|d| d.label.clone()).collect(),
            extraction_sources: sources,
            total_achievements_extracted: 0,
            total_sections: TOTAL_SECTIONS,
            data_quality: placeholders.data_quality.clone(),
            pdf_library_used: docs.iter().find_map(|d| d.backend).map(str::to_string),
            text_extracted_chars: combined.chars().count(),
        },
    };
    portfolio.metadata.total_achievements_extracted = portfolio.total_achievements();
    portfolio
}

/// Write pretty JSON, creating parent folders. Returns the written path.
pub fn save_portfolio(portfolio: &Portfolio, path: &Path) -> anyhow::Result<PathBuf> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(portfolio)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "portfolio saved");
    Ok(path.to_path_buf())
}

pub fn load_portfolio(path: &Path) -> anyhow::Result<Portfolio> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Plain-text run report.
pub fn summary_report(portfolio: &Portfolio) -> String {
    let meta = &portfolio.metadata;
    let info = &portfolio.personal_info;
    let skills = &portfolio.skills;
    let total_achievements = portfolio.total_achievements();
    let rule = "=".repeat(70);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "RESUME PORTFOLIO REPORT");
    let _ = writeln!(out, "{rule}\n");
    let _ = writeln!(out, "Extraction summary:");
    let _ = writeln!(out, "- PDF files processed: {}", meta.pdf_files_processed);
    let _ = writeln!(out, "- PDF files: {}", meta.pdf_files_list.iter().join(", "));
    let _ = writeln!(out, "- Experiences extracted: {}", portfolio.experience.len());
    let _ = writeln!(out, "- Total achievements: {total_achievements}");
    let _ = writeln!(out, "- Projects identified: {}", portfolio.projects.len());
    let _ = writeln!(out, "- Skill categories: {}", skills.buckets().len());
    let _ = writeln!(out, "- Education entries: {}", portfolio.education.len());
    let _ = writeln!(out, "- Certifications: {}", portfolio.certifications.len());
    let _ = writeln!(out, "- Achievements: {}", portfolio.achievements.len());

    let _ = writeln!(out, "\nProfile:");
    let _ = writeln!(out, "- Name: {}", info.name);
    let _ = writeln!(out, "- Title: {}", info.title);
    let _ = writeln!(out, "- Location: {}", info.location);
    let _ = writeln!(out, "- Email: {}", info.email);

    let _ = writeln!(out, "\nExperience:");
    for exp in &portfolio.experience {
        let _ = writeln!(
            out,
            "- {} at {} ({}) - {} achievements",
            exp.title,
            exp.company,
            exp.period,
            exp.achievements.len()
        );
        let sources = if exp.sources.is_empty() {
            "unknown".to_string()
        } else {
            exp.sources.iter().join(", ")
        };
        let _ = writeln!(out, "  Sources: {sources}");
    }

    let _ = writeln!(out, "\nProjects:");
    for p in &portfolio.projects {
        let _ = writeln!(out, "- {} ({})", p.title, p.category);
    }

    let _ = writeln!(out, "\nAchievements:");
    for a in &portfolio.achievements {
        let _ = writeln!(out, "- {} ({})", a.title, a.date);
    }

    let _ = writeln!(out, "\nCertifications:");
    for c in &portfolio.certifications {
        let _ = writeln!(out, "- {} by {}", c.name, c.issuer);
    }

    let _ = writeln!(out, "\nEducation:");
    for e in &portfolio.education {
        let _ = writeln!(out, "- {} in {} from {} ({})", e.degree, e.field, e.institution, e.period);
    }

    let _ = writeln!(out, "\nSkills:");
    let _ = writeln!(out, "- Total skills tracked: {}", skills.total());
    let _ = writeln!(out, "- Programming languages: {}", skills.languages.len());
    let _ = writeln!(out, "- DevOps & cloud: {} + {}", skills.devops.len(), skills.cloud.len());
    let _ = writeln!(out, "- Frontend & backend: {} + {}", skills.frontend.len(), skills.backend.len());
    let _ = writeln!(out, "- Tools & databases: {} + {}", skills.tools.len(), skills.databases.len());

    let _ = writeln!(
        out,
        "\nDone: {} achievements from {} PDFs.",
        total_achievements, meta.pdf_files_processed
    );
    let _ = writeln!(out, "{rule}");
    out
}
