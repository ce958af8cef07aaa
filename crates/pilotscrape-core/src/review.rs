//! Shared review record types.
//!
//! [`NormalizedReview`] is the final row shape written to the output CSV.
//! The scraper crate assembles a raw (all-text) counterpart and converts it
//! here once numeric fields have been parsed.

use serde::{Serialize, Serializer};

/// CSV cell written for a structurally absent seller response.
///
/// Distinct from the empty string, which means the response element was
/// present but carried no text.
pub const NO_RESPONSE_MARKER: &str = "no response";

/// Tri-state seller response.
///
/// Review pages render a reply block only when the business has responded,
/// so "no block at all" carries meaning and must stay distinguishable from
/// "block present with empty text".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SellerResponse {
    /// The reply block was present; the text may be empty.
    Replied(String),
    /// No reply block in the review card.
    #[default]
    Absent,
}

impl SellerResponse {
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, SellerResponse::Absent)
    }
}

impl Serialize for SellerResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SellerResponse::Replied(text) => serializer.serialize_str(text),
            SellerResponse::Absent => serializer.serialize_str(NO_RESPONSE_MARKER),
        }
    }
}

/// One fully processed review record: eight slots, each independently
/// nullable. `None` serializes as an empty CSV cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedReview {
    pub title: Option<String>,
    pub author_name: Option<String>,
    pub author_location: Option<String>,
    pub review_count: Option<u64>,
    pub rating: Option<u8>,
    pub body: Option<String>,
    pub seller_response: SellerResponse,
    pub experience_date: Option<String>,
}
