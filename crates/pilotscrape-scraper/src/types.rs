//! Raw review record as extracted from one review card, before numeric
//! normalization.
//!
//! ## Observed markup behavior
//!
//! Every field can be independently missing — review cards drop elements
//! wholesale when a reviewer left no title, no location, and so on. Absence
//! is the dominant "failure" mode and is modeled as `None`, never as an
//! error. Two fields need extra care:
//!
//! - The review body renders through two alternate layout variants; the
//!   extractor falls back to the secondary selector when the primary one
//!   yields nothing.
//! - The seller response is tri-state: a card with no reply block is
//!   meaningfully different from one whose reply block is present but empty.
//!   See [`SellerResponse`].

use pilotscrape_core::SellerResponse;

/// One review card's extracted fields, all still raw text.
///
/// `review_count` and `rating` carry the human-readable strings from the
/// page (`"61 reviews"`, `"Rated 1 out of 5 stars"`); parsing to numbers
/// happens in [`crate::normalize`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawReview {
    pub title: Option<String>,
    pub author_name: Option<String>,
    pub author_location: Option<String>,
    pub review_count: Option<String>,
    pub rating: Option<String>,
    pub body: Option<String>,
    pub seller_response: SellerResponse,
    pub experience_date: Option<String>,
}
