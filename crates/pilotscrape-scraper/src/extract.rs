//! Field extraction from parsed review pages.
//!
//! Each extractor maps one sub-fragment of a review card to one optional
//! field. They are order-independent, pure over the card, and never fail:
//! a missing element is a normal outcome and yields `None` (or
//! [`SellerResponse::Absent`] for the tri-state reply field).
//!
//! Selectors target the stable `data-*` hooks the site renders where
//! possible; the card container, rating widget, and the body fallback only
//! exist as hashed CSS-module class names.

use std::sync::LazyLock;

use pilotscrape_core::SellerResponse;
use scraper::{ElementRef, Html, Selector};

use crate::pagination;
use crate::types::RawReview;

pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("selector literal is valid CSS")
}

static CARD: LazyLock<Selector> = LazyLock::new(|| selector("div.styles_reviewCardInner__EwDq2"));
static TITLE: LazyLock<Selector> =
    LazyLock::new(|| selector("h2[data-service-review-title-typography='true']"));
static AUTHOR: LazyLock<Selector> = LazyLock::new(|| selector("aside[aria-label^='Info for']"));
static LOCATION: LazyLock<Selector> =
    LazyLock::new(|| selector("div[data-consumer-country-typography='true'] span"));
static REVIEW_COUNT: LazyLock<Selector> =
    LazyLock::new(|| selector("span[data-consumer-reviews-count-typography='true']"));
static RATING: LazyLock<Selector> =
    LazyLock::new(|| selector("div.star-rating_starRating__4rrcf img"));
static BODY_PRIMARY: LazyLock<Selector> = LazyLock::new(|| {
    selector("div.styles_reviewContent__0Q2Tg p[data-service-review-text-typography='true']")
});
static BODY_FALLBACK: LazyLock<Selector> = LazyLock::new(|| {
    selector("p.typography_body-xl__5suLA.typography_appearance-default__AAY17.styles_text__Xkum5")
});
static SELLER_RESPONSE: LazyLock<Selector> = LazyLock::new(|| {
    selector("p.styles_message__shHhX[data-service-review-business-reply-text-typography='true']")
});
static EXPERIENCE_DATE: LazyLock<Selector> =
    LazyLock::new(|| selector("p[data-service-review-date-of-experience-typography='true']"));

/// Literal prefix the author element carries in its `aria-label` value.
const AUTHOR_LABEL_PREFIX: &str = "Info for ";
/// Literal label prepended to the experience date text.
const EXPERIENCE_DATE_LABEL: &str = "Date of experience:";

fn first_match<'a>(card: &ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    card.select(sel).next()
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

/// Review title text, or `None` when the card has no title element.
#[must_use]
pub fn review_title(card: &ElementRef<'_>) -> Option<String> {
    first_match(card, &TITLE).map(text_of)
}

/// Reviewer name, recovered from the `aria-label` attribute value (not the
/// text content) with the fixed `Info for ` prefix stripped.
#[must_use]
pub fn author_name(card: &ElementRef<'_>) -> Option<String> {
    let element = first_match(card, &AUTHOR)?;
    let label = element.value().attr("aria-label")?;
    Some(
        label
            .strip_prefix(AUTHOR_LABEL_PREFIX)
            .unwrap_or(label)
            .trim()
            .to_owned(),
    )
}

/// Reviewer country/location text.
#[must_use]
pub fn author_location(card: &ElementRef<'_>) -> Option<String> {
    first_match(card, &LOCATION).map(text_of)
}

/// Raw review-count text, digits still embedded in surrounding prose
/// (`"61 reviews"`).
#[must_use]
pub fn review_count(card: &ElementRef<'_>) -> Option<String> {
    first_match(card, &REVIEW_COUNT).map(text_of)
}

/// Raw star-rating description from the rating image's `alt` attribute
/// (`"Rated 1 out of 5 stars"`).
#[must_use]
pub fn rating(card: &ElementRef<'_>) -> Option<String> {
    let element = first_match(card, &RATING)?;
    element
        .value()
        .attr("alt")
        .map(|alt| alt.trim().to_owned())
}

/// Review body text with a two-tier selection: the primary content selector
/// first, then the fallback for the alternate layout variant the site uses
/// for some cards. Empty text counts as a miss at both tiers.
#[must_use]
pub fn review_body(card: &ElementRef<'_>) -> Option<String> {
    first_match(card, &BODY_PRIMARY)
        .map(text_of)
        .filter(|text| !text.is_empty())
        .or_else(|| {
            first_match(card, &BODY_FALLBACK)
                .map(text_of)
                .filter(|text| !text.is_empty())
        })
}

/// Seller reply tri-state: `Replied` with the block's text (possibly empty)
/// when the reply element exists, `Absent` otherwise.
#[must_use]
pub fn seller_response(card: &ElementRef<'_>) -> SellerResponse {
    match first_match(card, &SELLER_RESPONSE) {
        Some(element) => SellerResponse::Replied(text_of(element)),
        None => SellerResponse::Absent,
    }
}

/// Date-of-experience text with the fixed label stripped from the front.
#[must_use]
pub fn experience_date(card: &ElementRef<'_>) -> Option<String> {
    let text = text_of(first_match(card, &EXPERIENCE_DATE)?);
    Some(
        text.strip_prefix(EXPERIENCE_DATE_LABEL)
            .unwrap_or(&text)
            .trim()
            .to_owned(),
    )
}

/// Assembles one [`RawReview`] from a card by invoking every extractor.
///
/// There is no cross-field validation: a record with all fields empty is
/// valid and is still produced. Downstream decides whether to keep it.
#[must_use]
pub fn assemble(card: &ElementRef<'_>) -> RawReview {
    RawReview {
        title: review_title(card),
        author_name: author_name(card),
        author_location: author_location(card),
        review_count: review_count(card),
        rating: rating(card),
        body: review_body(card),
        seller_response: seller_response(card),
        experience_date: experience_date(card),
    }
}

/// Extracts and assembles every review card on a page, in document order.
#[must_use]
pub fn review_cards(document: &Html) -> Vec<RawReview> {
    document
        .select(&CARD)
        .map(|card| assemble(&card))
        .collect()
}

/// Parses one fetched page body into its assembled records plus the
/// next-page flag.
///
/// The DOM types are not `Send`, so the crawl loop calls this synchronous
/// helper and only ever holds owned records across await points.
#[must_use]
pub fn parse_review_page(html: &str) -> (Vec<RawReview>, bool) {
    let document = Html::parse_document(html);
    let reviews = review_cards(&document);
    let has_next = pagination::has_next_page(&document);
    tracing::debug!(cards = reviews.len(), has_next, "parsed review page");
    (reviews, has_next)
}
