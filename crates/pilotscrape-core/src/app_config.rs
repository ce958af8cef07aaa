/// Runtime configuration for a crawl run, sourced from `PILOTSCRAPE_*`
/// environment variables. See [`crate::config::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Origin the per-target review paths are appended to.
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Total fetch attempts per page before the error propagates.
    pub retry_attempts: u32,
    /// Fixed sleep between failed fetch attempts. No backoff, no jitter.
    pub retry_delay_secs: u64,
    /// Sleep between successful page transitions within one target.
    pub page_delay_secs: u64,
    /// Pagination ceiling: pages crawled per target regardless of how many
    /// more the site advertises.
    pub max_pages: u32,
    /// Star-rating values included in the review URL query string.
    pub star_filter: Vec<u8>,
}
