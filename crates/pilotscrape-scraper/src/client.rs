use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;
use crate::extract::parse_review_page;
use crate::pagination::review_page_url;
use crate::retry::retry_fixed_delay;
use crate::types::RawReview;

/// Per-crawl pagination settings, taken from the application configuration.
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Pagination ceiling: pages visited per target at most, even when every
    /// page advertises a next one.
    pub max_pages: u32,
    /// Fixed sleep between successful page transitions.
    pub page_delay_secs: u64,
    /// Star-rating values appended to the review URL.
    pub star_filter: Vec<u8>,
}

/// HTTP client for public review listings.
///
/// Fetches one page of markup at a time with a browser-like `User-Agent`,
/// explicit request and connect timeouts, and fixed-delay retry. Any
/// transport failure or non-success status is retryable; the error that
/// survives the final attempt propagates to the caller.
pub struct ReviewSiteClient {
    client: Client,
    /// Total fetch attempts per page.
    retry_attempts: u32,
    /// Fixed sleep between failed attempts.
    retry_delay_secs: u64,
}

impl ReviewSiteClient {
    /// Creates a `ReviewSiteClient` with configured timeout, `User-Agent`,
    /// and retry policy.
    ///
    /// `retry_attempts` is the total number of tries per page; `3` means a
    /// first attempt plus up to two retries with `retry_delay_secs` between
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        retry_attempts: u32,
        retry_delay_secs: u64,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            retry_attempts,
            retry_delay_secs,
        })
    }

    /// Fetches the raw markup for one URL, with fixed-delay retry.
    ///
    /// Each failed attempt emits one diagnostic `tracing::warn`; when all
    /// attempts are exhausted a final `tracing::error` names the URL and
    /// attempt count and the last error is returned.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] — non-2xx status on the final attempt.
    /// - [`ScraperError::Http`] — transport failure on the final attempt.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        retry_fixed_delay(self.retry_attempts, self.retry_delay_secs, || {
            let url = url.to_owned();
            async move {
                let response = self.client.get(&url).send().await?;
                let status = response.status();

                if !status.is_success() {
                    return Err(ScraperError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                Ok(response.text().await?)
            }
        })
        .await
        .inspect_err(|error| {
            tracing::error!(
                url,
                attempts = self.retry_attempts,
                %error,
                "giving up on page after exhausting retries"
            );
        })
    }

    /// Crawls every review page for one target, accumulating assembled
    /// records in page-then-card order.
    ///
    /// Starts at the target's base review URL (page 1 has no page
    /// parameter), then keeps fetching while the current page exposes a
    /// next-page affordance and the page count is below
    /// `options.max_pages`. A fixed `options.page_delay_secs` sleep
    /// separates successful page transitions. When the ceiling truncates a
    /// crawl that still advertises more pages, a warning is emitted rather
    /// than failing or staying silent.
    ///
    /// # Errors
    ///
    /// Propagates the first [`ScraperError`] from [`Self::fetch_page`];
    /// records accumulated for this target so far are dropped with it.
    /// Callers wanting per-target isolation catch at the target boundary.
    pub async fn crawl_target(
        &self,
        base_url: &str,
        slug: &str,
        options: &CrawlOptions,
    ) -> Result<Vec<RawReview>, ScraperError> {
        let mut reviews: Vec<RawReview> = Vec::new();
        let mut page = 1u32;

        loop {
            let url = review_page_url(base_url, slug, page, &options.star_filter);
            tracing::info!(slug, page, "fetching review page");

            let body = self.fetch_page(&url).await?;
            let (cards, has_next) = parse_review_page(&body);
            tracing::info!(slug, page, cards = cards.len(), "extracted review cards");
            reviews.extend(cards);

            if !has_next {
                break;
            }
            if page >= options.max_pages {
                tracing::warn!(
                    slug,
                    max_pages = options.max_pages,
                    "page ceiling reached while more pages exist; truncating crawl"
                );
                break;
            }

            page += 1;
            if options.page_delay_secs > 0 {
                tokio::time::sleep(Duration::from_secs(options.page_delay_secs)).await;
            }
        }

        Ok(reviews)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
