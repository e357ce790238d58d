use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};
use url::Url;

use crate::catalog::PaperRecord;
use crate::classify::classify;
use crate::extract::extract_pdf_links;
use crate::fetch::PageFetcher;
use crate::registry::ExamPeriod;

/// How long to wait between period pages. Politeness toward the
/// department's server, not a correctness requirement.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_secs(2);

/// Per-run fetch outcome counts.
pub struct RunStats {
    pub periods: usize,
    pub ok: usize,
    pub errors: usize,
}

/// Scrape one period page into records. The ordinal in each id restarts
/// at 0 for every period.
pub async fn scrape_period<F: PageFetcher>(
    fetcher: &F,
    period: &ExamPeriod,
) -> Result<Vec<PaperRecord>> {
    println!("Fetching: {}", period.url);
    let html = fetcher.fetch_page(period.url).await?;
    let page_url = Url::parse(period.url)?;

    let mut records = Vec::new();
    for link in extract_pdf_links(&html, &page_url) {
        let meta = classify(&link.name);
        println!("  Found: {}", link.name);
        records.push(PaperRecord {
            id: format!("{}_{}", period.key, records.len()),
            filename: link.name,
            url: link.url,
            year: period.year,
            period: period.period.to_string(),
            subject: meta.subject.to_string(),
            paper_type: meta.paper_type,
            language: meta.language,
            grade: meta.grade,
        });
    }

    Ok(records)
}

/// Scrape every period in registry order, strictly sequentially, pausing
/// `delay` between pages. A period whose fetch fails contributes zero
/// records and the run continues; catalog order is registry order, then
/// within-period document order.
pub async fn scrape_all<F: PageFetcher>(
    fetcher: &F,
    periods: &[ExamPeriod],
    delay: Duration,
) -> (Vec<PaperRecord>, RunStats) {
    let mut all = Vec::new();
    let mut stats = RunStats {
        periods: periods.len(),
        ok: 0,
        errors: 0,
    };

    for (i, period) in periods.iter().enumerate() {
        println!("\nScraping: {} {}", period.year, period.period);

        match scrape_period(fetcher, period).await {
            Ok(records) => {
                println!("Total papers found: {}", records.len());
                info!("Scraped {} ({} papers)", period.key, records.len());
                stats.ok += 1;
                all.extend(records);
            }
            Err(e) => {
                warn!("Skipping {}: {:#}", period.key, e);
                stats.errors += 1;
            }
        }

        if i + 1 < periods.len() {
            tokio::time::sleep(delay).await;
        }
    }

    (all, stats)
}

// ── Tests ──
