mod settings;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use bookmark_miner::{analyze, load_chrome_bookmarks, report, WEEKEND_FEASIBLE_THRESHOLD};
use settings::{OutputFormat, Settings};

#[derive(Parser)]
#[command(name = "bookmark_miner", about = "Mine weekend project ideas from Chrome bookmarks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a Chrome `Bookmarks` file and print the ranked report
    Analyze {
        /// Path to the exported Chrome `Bookmarks` JSON file
        file: PathBuf,
        /// Only keep weekend-buildable ideas (score >= 0.6)
        #[arg(long)]
        buildable: bool,
        /// Output format (default: markdown, or BOOKMARK_MINER_FORMAT)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Per-category idea counts
    Stats {
        /// Path to the exported Chrome `Bookmarks` JSON file
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load().context("Failed to load BOOKMARK_MINER_* settings")?;

    match cli.command {
        Commands::Analyze {
            file,
            buildable,
            format,
        } => {
            let records = load_chrome_bookmarks(&file)?;
            let mut report = analyze(&records);

            if buildable || settings.buildable_only {
                report = report.buildable_only();
                info!(
                    threshold = WEEKEND_FEASIBLE_THRESHOLD,
                    kept = report.total_ideas(),
                    "filtered to weekend-buildable ideas"
                );
            }

            let rendered = match format.unwrap_or(settings.format) {
                OutputFormat::Json => {
                    report::to_json(&report).context("Failed to serialize report")?
                }
                OutputFormat::Markdown => report::to_markdown(&report),
            };
            println!("{rendered}");
        }
        Commands::Stats { file } => {
            let records = load_chrome_bookmarks(&file)?;
            let report = analyze(&records);
            let counts = report.category_counts();
            if counts.is_empty() {
                println!("No project ideas found.");
                return Ok(());
            }

            println!("{:<10} | {:>5} | {:>7}", "Category", "Ideas", "Weekend");
            println!("{}", "-".repeat(28));
            for c in &counts {
                println!(
                    "{:<10} | {:>5} | {:>7}",
                    c.category.as_str(),
                    c.ideas,
                    c.weekend_feasible
                );
            }
            println!(
                "\n{} ideas from {} bookmarks | {} weekend-feasible",
                report.total_ideas(),
                records.len(),
                report.weekend_feasible()
            );
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        info!("Done in {:.1}s", elapsed.as_secs_f64());
    }
    Ok(())
}
