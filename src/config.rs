use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::defaults::Placeholders;

/// Runtime settings. Layered: built-in defaults, then an optional
/// `portfolio.{toml,json,yaml}` in the working directory, then
/// `PORTFOLIO_*` environment variables (`__` separates nested keys).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub workspace: PathBuf,
    /// Folder under the workspace scanned for resume PDFs.
    pub resume_dir: String,
    /// A PDF is picked up only if its lowercased name contains one of these.
    pub file_keywords: Vec<String>,
    /// Text backends in the order they are tried. `none` disables extraction.
    pub backends: Vec<String>,
    /// Backend output at or below this many chars counts as a failed extraction.
    pub min_text_chars: usize,
    /// Previously cached extraction results, relative to the workspace.
    pub cache_files: Vec<String>,
    pub output_dir: String,
    pub output_file: String,
    pub config_output: String,
    pub placeholders: Placeholders,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            workspace: PathBuf::from("."),
            resume_dir: "resume".into(),
            file_keywords: ["resume", "cv", "sairam", "peruri"].map(String::from).to_vec(),
            backends: ["pdf-extract", "lopdf"].map(String::from).to_vec(),
            min_text_chars: 50,
            cache_files: [
                "resume_analysis_final.json",
                "resume_correctly_extracted.json",
                "resume_analysis.json",
            ]
            .map(String::from)
            .to_vec(),
            output_dir: "extract_resume".into(),
            output_file: "ultimate_multi_pdf_portfolio_data.json".into(),
            config_output: "portfolio_config.json".into(),
            placeholders: Placeholders::default(),
        }
    }
}

impl Settings {
    /// Load layered settings. Unreadable configuration is logged and the
    /// built-in defaults are used instead.
    pub fn load() -> Self {
        Self::from_sources(File::with_name("portfolio").required(false), environment())
    }

    fn from_sources<S>(file: S, env: Environment) -> Self
    where
        S: config::Source + Send + Sync + 'static,
    {
        let built = Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .and_then(|c| c.try_deserialize::<Settings>());

        match built {
            Ok(settings) => {
                debug!(workspace = %settings.workspace.display(), backends = ?settings.backends, "settings loaded");
                settings
            }
            Err(e) => {
                warn!(error = %e, "could not load settings, using defaults");
                Settings::default()
            }
        }
    }

    pub fn resume_folder(&self) -> PathBuf {
        self.workspace.join(&self.resume_dir)
    }

    pub fn output_path(&self) -> PathBuf {
        self.workspace.join(&self.output_dir).join(&self.output_file)
    }

    pub fn cache_paths(&self) -> Vec<PathBuf> {
        self.cache_files.iter().map(|f| self.workspace.join(f)).collect()
    }
}

/// `PORTFOLIO_*` variables. List keys take comma-separated values.
fn environment() -> Environment {
    Environment::with_prefix("PORTFOLIO")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("backends")
        .with_list_parse_key("file_keywords")
        .with_list_parse_key("cache_files")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths() {
        let s = Settings::default();
        assert_eq!(s.resume_folder(), PathBuf::from("./resume"));
        assert_eq!(
            s.output_path(),
            PathBuf::from("./extract_resume/ultimate_multi_pdf_portfolio_data.json")
        );
        assert_eq!(s.cache_paths().len(), 3);
    }

    #[test]
    fn file_source_overrides_defaults() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(
                "workspace = \"/tmp/ws\"\nbackends = [\"lopdf\"]\n[placeholders]\nbio = \"Hi\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.workspace, PathBuf::from("/tmp/ws"));
        assert_eq!(settings.backends, vec!["lopdf".to_string()]);
        assert_eq!(settings.placeholders.bio, "Hi");
        assert_eq!(settings.resume_dir, "resume");
    }

    #[test]
    fn list_and_scalar_env_vars_both_apply() {
        let vars: config::Map<String, String> = [
            ("PORTFOLIO_RESUME_DIR", "cvs"),
            ("PORTFOLIO_BACKENDS", "lopdf"),
            ("PORTFOLIO_FILE_KEYWORDS", "resume,cv"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let settings = Settings::from_sources(
            File::from_str("", config::FileFormat::Toml),
            environment().source(Some(vars)),
        );
        assert_eq!(settings.resume_dir, "cvs");
        assert_eq!(settings.backends, vec!["lopdf".to_string()]);
        assert_eq!(settings.file_keywords, vec!["resume".to_string(), "cv".to_string()]);
        assert_eq!(settings.output_file, "ultimate_multi_pdf_portfolio_data.json");
    }
}
