mod catalog;
mod classify;
mod extract;
mod fetch;
mod registry;
mod scrape;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

use crate::catalog::CatalogSummary;
use crate::fetch::HttpFetcher;

#[derive(Parser)]
#[command(name = "nsc_scraper", about = "NSC past-paper metadata scraper for education.gov.za")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape every exam period and write the JSON catalog
    Run {
        /// Catalog output path
        #[arg(short, long, default_value = catalog::DEFAULT_CATALOG_PATH)]
        output: PathBuf,
        /// Seconds to pause between period pages
        #[arg(long, default_value_t = scrape::DEFAULT_PAGE_DELAY.as_secs())]
        delay_secs: u64,
    },
    /// List the configured exam periods
    Periods,
    /// Classify a single filename and print the inferred metadata
    Classify {
        /// Display name or filename, e.g. "Mathematics P1 Nov 2023.pdf"
        name: String,
    },
    /// Summarize an existing catalog file
    Stats {
        /// Catalog to read
        #[arg(short, long, default_value = catalog::DEFAULT_CATALOG_PATH)]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { output, delay_secs } => {
            let periods = registry::exam_periods();
            let fetcher = HttpFetcher::new()?;
            let delay = std::time::Duration::from_secs(delay_secs);

            let (records, stats) = scrape::scrape_all(&fetcher, periods, delay).await;
            catalog::save_catalog(&records, &output)?;

            println!("\n{}", "=".repeat(60));
            println!("Scraping complete!");
            println!("Total papers: {}", records.len());
            println!("Periods: {} ok, {} failed of {}", stats.ok, stats.errors, stats.periods);
            println!("Saved to: {}", output.display());
            println!("{}", "=".repeat(60));

            CatalogSummary::of(&records).print();
            Ok(())
        }
        Commands::Periods => {
            let periods = registry::exam_periods();
            println!("{:<16} | {:>4} | {:<9} | URL", "Key", "Year", "Session");
            println!("{}", "-".repeat(100));
            for p in periods {
                println!("{:<16} | {:>4} | {:<9} | {}", p.key, p.year, p.period, p.url);
            }
            println!("\n{} periods configured", periods.len());
            Ok(())
        }
        Commands::Classify { name } => {
            let meta = classify::classify(&name);
            println!("filename:   {name}");
            println!("subject:    {}", meta.subject);
            println!("paper_type: {}", meta.paper_type.as_str());
            println!("language:   {}", meta.language.as_str());
            println!("grade:      {}", meta.grade);
            Ok(())
        }
        Commands::Stats { input } => {
            let records = catalog::load_catalog(&input)?;
            if records.is_empty() {
                println!("Catalog {} is empty.", input.display());
                return Ok(());
            }

            let mut by_subject: BTreeMap<&str, usize> = BTreeMap::new();
            let mut by_type: BTreeMap<&str, usize> = BTreeMap::new();
            for r in &records {
                *by_subject.entry(r.subject.as_str()).or_default() += 1;
                *by_type.entry(r.paper_type.as_str()).or_default() += 1;
            }

            println!("Catalog: {}", input.display());
            println!("Total papers: {}", records.len());

            println!("\n{:<36} | {:>5}", "Subject", "Count");
            println!("{}", "-".repeat(44));
            for (subject, count) in &by_subject {
                println!("{:<36} | {:>5}", subject, count);
            }

            println!("\n{:<10} | {:>5}", "Type", "Count");
            println!("{}", "-".repeat(18));
            for (paper_type, count) in &by_type {
                println!("{:<10} | {:>5}", paper_type, count);
            }

            CatalogSummary::of(&records).print();
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
