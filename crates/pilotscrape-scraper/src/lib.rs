pub mod client;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod pagination;
mod retry;
pub mod types;

pub use client::{CrawlOptions, ReviewSiteClient};
pub use error::ScraperError;
pub use normalize::normalize_review;
pub use types::RawReview;
