//! Page-number pagination for review listings.
//!
//! The site paginates with an explicit `page` query parameter and renders a
//! "next page" anchor on every page except the last. The first page is the
//! bare review URL with no page parameter:
//!
//! ```text
//! https://host/review/SLUG?stars=1&stars=2&stars=3          (page 1)
//! https://host/review/SLUG?page=2&stars=1&stars=2&stars=3   (page 2+)
//! ```

use std::fmt::Write as _;
use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::extract::selector;

static NEXT_PAGE: LazyLock<Selector> =
    LazyLock::new(|| selector("a[data-pagination='next']"));

/// Builds the review-listing URL for one target and page number.
///
/// Page 1 carries no `page` parameter. Each star value in `star_filter`
/// becomes its own `stars=` parameter; an empty filter yields an
/// unconstrained URL.
#[must_use]
pub fn review_page_url(base_url: &str, slug: &str, page: u32, star_filter: &[u8]) -> String {
    let mut url = format!("{}/review/{slug}", base_url.trim_end_matches('/'));
    let mut separator = '?';

    if page > 1 {
        let _ = write!(url, "{separator}page={page}");
        separator = '&';
    }
    for star in star_filter {
        let _ = write!(url, "{separator}stars={star}");
        separator = '&';
    }

    url
}

/// Whether the page exposes a next-page affordance.
///
/// This inspects the current page only; it says nothing about whether the
/// crawl's page ceiling will allow the next fetch.
#[must_use]
pub fn has_next_page(document: &Html) -> bool {
    document.select(&NEXT_PAGE).next().is_some()
}
