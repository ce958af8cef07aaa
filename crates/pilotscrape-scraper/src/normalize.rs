//! Normalization from raw extracted text to [`pilotscrape_core::NormalizedReview`].
//!
//! The numeric parsers are total: unparseable input maps to `None`, never to
//! an error. Digit scanning is done by hand rather than with `regex` — the
//! patterns are trivial and this keeps the crate dependency-light.

use pilotscrape_core::NormalizedReview;

use crate::types::RawReview;

/// Parses a review count from text with digits embedded in surrounding
/// prose (`"61 reviews"` → `61`).
///
/// Every ASCII digit run in the input is concatenated before parsing, so
/// grouped renderings like `"1,234 reviews"` become `1234`. Text with no
/// digits (or a value too large for `u64`) yields `None`.
#[must_use]
pub fn parse_review_count(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Parses a star rating from a human-readable description
/// (`"Rated 1 out of 5 stars"` → `1`).
///
/// Only the first ASCII digit run counts; text with none yields `None`.
#[must_use]
pub fn parse_rating(raw: &str) -> Option<u8> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let run: String = raw[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    run.parse().ok()
}

/// Converts one raw record into its normalized form.
///
/// Total function: the review-count and rating fields are parsed to numbers
/// where possible and become `None` where not; every other field passes
/// through unchanged.
#[must_use]
pub fn normalize_review(raw: RawReview) -> NormalizedReview {
    NormalizedReview {
        title: raw.title,
        author_name: raw.author_name,
        author_location: raw.author_location,
        review_count: raw.review_count.as_deref().and_then(parse_review_count),
        rating: raw.rating.as_deref().and_then(parse_rating),
        body: raw.body,
        seller_response: raw.seller_response,
        experience_date: raw.experience_date,
    }
}

#[cfg(test)]
mod tests {
    use pilotscrape_core::SellerResponse;

    use super::*;

    // -----------------------------------------------------------------------
    // parse_review_count
    // -----------------------------------------------------------------------

    #[test]
    fn review_count_digits_in_prose() {
        assert_eq!(parse_review_count("61 reviews"), Some(61));
    }

    #[test]
    fn review_count_single_review() {
        assert_eq!(parse_review_count("1 review"), Some(1));
    }

    #[test]
    fn review_count_grouped_digits_concatenate() {
        assert_eq!(parse_review_count("1,234 reviews"), Some(1234));
    }

    #[test]
    fn review_count_no_digits_is_none_not_zero() {
        assert_eq!(parse_review_count("no reviews yet"), None);
    }

    #[test]
    fn review_count_empty_string() {
        assert_eq!(parse_review_count(""), None);
    }

    #[test]
    fn review_count_overflow_is_none() {
        assert_eq!(parse_review_count("99999999999999999999999"), None);
    }

    #[test]
    fn review_count_reparse_is_idempotent() {
        let first = parse_review_count("61 reviews").unwrap();
        assert_eq!(parse_review_count(&first.to_string()), Some(first));
    }

    // -----------------------------------------------------------------------
    // parse_rating
    // -----------------------------------------------------------------------

    #[test]
    fn rating_from_alt_description() {
        assert_eq!(parse_rating("Rated 1 out of 5 stars"), Some(1));
    }

    #[test]
    fn rating_takes_first_digit_run_only() {
        assert_eq!(parse_rating("Rated 3 out of 5 stars"), Some(3));
    }

    #[test]
    fn rating_no_digits_is_none() {
        assert_eq!(parse_rating("no rating given"), None);
    }

    #[test]
    fn rating_reparse_is_idempotent() {
        let first = parse_rating("Rated 2 out of 5 stars").unwrap();
        assert_eq!(parse_rating(&first.to_string()), Some(first));
    }

    // -----------------------------------------------------------------------
    // normalize_review
    // -----------------------------------------------------------------------

    fn raw_review() -> RawReview {
        RawReview {
            title: Some("Terrible support".to_owned()),
            author_name: Some("Jane Doe".to_owned()),
            author_location: Some("GB".to_owned()),
            review_count: Some("61 reviews".to_owned()),
            rating: Some("Rated 1 out of 5 stars".to_owned()),
            body: Some("Waited weeks for a refund.".to_owned()),
            seller_response: SellerResponse::Absent,
            experience_date: Some("January 05, 2024".to_owned()),
        }
    }

    #[test]
    fn normalize_parses_numeric_fields() {
        let normalized = normalize_review(raw_review());
        assert_eq!(normalized.review_count, Some(61));
        assert_eq!(normalized.rating, Some(1));
    }

    #[test]
    fn normalize_passes_text_fields_through() {
        let normalized = normalize_review(raw_review());
        assert_eq!(normalized.title.as_deref(), Some("Terrible support"));
        assert_eq!(normalized.body.as_deref(), Some("Waited weeks for a refund."));
        assert_eq!(normalized.experience_date.as_deref(), Some("January 05, 2024"));
        assert!(normalized.seller_response.is_absent());
    }

    #[test]
    fn normalize_unparseable_numerics_become_none() {
        let mut raw = raw_review();
        raw.review_count = Some("no reviews".to_owned());
        raw.rating = Some("unrated".to_owned());
        let normalized = normalize_review(raw);
        assert_eq!(normalized.review_count, None);
        assert_eq!(normalized.rating, None);
    }

    #[test]
    fn normalize_all_absent_record_stays_valid() {
        let normalized = normalize_review(RawReview::default());
        assert_eq!(normalized.review_count, None);
        assert_eq!(normalized.rating, None);
        assert!(normalized.title.is_none());
        assert!(normalized.seller_response.is_absent());
    }

    #[test]
    fn normalize_preserves_empty_seller_reply() {
        let raw = RawReview {
            seller_response: SellerResponse::Replied(String::new()),
            ..RawReview::default()
        };
        let normalized = normalize_review(raw);
        assert_eq!(normalized.seller_response, SellerResponse::Replied(String::new()));
    }
}
