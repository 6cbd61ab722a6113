use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use resume_portfolio::config::Settings;
use resume_portfolio::portfolio::{self, Analyzer};

#[derive(Parser)]
#[command(name = "portfolio_analyzer", about = "Extract portfolio JSON from resume PDFs")]
struct Cli {
    /// Folder containing `resume/` (overrides settings)
    #[arg(short, long)]
    workspace: Option<PathBuf>,
    /// Output file (default: <workspace>/extract_resume/ultimate_multi_pdf_portfolio_data.json)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    resume_portfolio::init_tracing();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let mut settings = Settings::load();
    if let Some(workspace) = cli.workspace {
        settings.workspace = workspace;
    }
    let output = cli.output.unwrap_or_else(|| settings.output_path());
    let folder = settings.resume_folder();

    println!("Resume Portfolio Analyzer");
    println!("{}", "=".repeat(65));

    let analyzer = Analyzer::new(settings);
    if !analyzer.has_backends() {
        println!("No PDF text backend enabled.");
        println!("Available backends: pdf-extract, lopdf (set `backends` in portfolio.toml)");
        return Ok(());
    }

    let files = analyzer.discover();
    if files.is_empty() {
        println!("No resume PDFs found in {}", folder.display());
        return Ok(());
    }
    println!("Processing {} PDF files...", files.len());

    let docs = analyzer.load_documents(&files);
    let portfolio = analyzer.generate(&docs);
    let path = portfolio::save_portfolio(&portfolio, &output)?;

    println!("{}", portfolio::summary_report(&portfolio));
    println!("Portfolio data saved to {}", path.display());

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }
    Ok(())
}
