//! Crawl orchestration for the CLI.
//!
//! Targets are processed strictly sequentially. Per-target failures are
//! caught here and recorded rather than propagated, so one unreachable
//! target never discards the records gathered from the others.

use pilotscrape_core::{AppConfig, NormalizedReview, Target};
use pilotscrape_scraper::{normalize_review, CrawlOptions, ReviewSiteClient};

/// Result of a full crawl run: everything collected plus which targets
/// could not be crawled and why.
pub(crate) struct CrawlOutcome {
    pub reviews: Vec<NormalizedReview>,
    pub failures: Vec<TargetFailure>,
}

pub(crate) struct TargetFailure {
    pub slug: String,
    pub reason: String,
}

/// Narrow the loaded target list to the requested slug, if any.
///
/// # Errors
///
/// Returns an error when a filter is given but no listed target matches it,
/// or when the input file contains no targets at all.
pub(crate) fn select_targets(
    targets: Vec<Target>,
    filter: Option<&str>,
) -> anyhow::Result<Vec<Target>> {
    let selected = match filter {
        Some(slug) => {
            let target = targets
                .into_iter()
                .find(|t| t.slug == slug)
                .ok_or_else(|| anyhow::anyhow!("target '{slug}' not found in input file"))?;
            vec![target]
        }
        None => targets,
    };

    if selected.is_empty() {
        anyhow::bail!("input file contains no targets");
    }

    Ok(selected)
}

/// Crawl every target in order and normalize the merged collection.
///
/// Each target's records are accumulated by the pagination loop and handed
/// back by ownership; a failed target contributes nothing (its partial
/// records are dropped with the error) but does not stop the run.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be constructed.
/// Per-target fetch failures are captured in the outcome instead.
pub(crate) async fn run_crawl(
    config: &AppConfig,
    targets: &[Target],
) -> anyhow::Result<CrawlOutcome> {
    let client = ReviewSiteClient::new(
        config.request_timeout_secs,
        &config.user_agent,
        config.retry_attempts,
        config.retry_delay_secs,
    )
    .map_err(|e| anyhow::anyhow!("failed to build review site client: {e}"))?;

    let options = CrawlOptions {
        max_pages: config.max_pages,
        page_delay_secs: config.page_delay_secs,
        star_filter: config.star_filter.clone(),
    };

    let mut reviews: Vec<NormalizedReview> = Vec::new();
    let mut failures: Vec<TargetFailure> = Vec::new();

    for target in targets {
        tracing::info!(slug = %target.slug, "crawling target");

        match client
            .crawl_target(&config.base_url, &target.slug, &options)
            .await
        {
            Ok(raw) => {
                tracing::info!(slug = %target.slug, records = raw.len(), "target crawled");
                reviews.extend(raw.into_iter().map(normalize_review));
            }
            Err(e) => {
                tracing::error!(
                    slug = %target.slug,
                    error = %e,
                    "target crawl failed; continuing with remaining targets"
                );
                failures.push(TargetFailure {
                    slug: target.slug.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(CrawlOutcome { reviews, failures })
}
