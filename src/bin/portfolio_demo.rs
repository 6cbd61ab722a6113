use std::path::PathBuf;

use clap::Parser;

use resume_portfolio::config::Settings;
use resume_portfolio::demo::{self, PortfolioTemplate};
use resume_portfolio::portfolio::load_portfolio;

#[derive(Parser)]
#[command(name = "portfolio_demo", about = "Summarize portfolio JSON and write a site config")]
struct Cli {
    /// Portfolio JSON produced by portfolio_analyzer
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Where to write the site-builder config
    #[arg(short, long)]
    config_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    resume_portfolio::init_tracing();

    let cli = Cli::parse();
    let settings = Settings::load();
    let input = cli.input.unwrap_or_else(|| settings.output_path());
    let config_out = cli
        .config_out
        .unwrap_or_else(|| settings.workspace.join(&settings.config_output));

    println!("Portfolio Generator Demo");
    println!("{}", "=".repeat(65));

    if !input.exists() {
        println!("No portfolio data found at {}. Run portfolio_analyzer first.", input.display());
        return Ok(());
    }
    let portfolio = load_portfolio(&input)?;

    print!("{}", demo::portfolio_summary(&portfolio));

    println!("\n{}", "=".repeat(65));
    println!("PORTFOLIO TEMPLATE");
    println!("{}", "=".repeat(65));
    print!("{}", PortfolioTemplate::STANDARD.render());

    let config = demo::build_config(&portfolio);
    demo::write_config(&config, &config_out)?;

    println!("\nFiles generated:");
    println!("   + {} - configuration for the portfolio builder", config_out.display());
    println!("   + {} - extracted portfolio data", input.display());
    Ok(())
}
