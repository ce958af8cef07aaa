use std::path::Path;

use anyhow::Context;
use pilotscrape_core::NormalizedReview;

/// Write the normalized collection to `path` as CSV, one row per record.
///
/// Missing optional fields become empty cells; the seller-response
/// tri-state serializes as the reply text or the fixed absence marker.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a row fails to
/// serialize.
pub(crate) fn write_reviews(path: &Path, reviews: &[NormalizedReview]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;

    for review in reviews {
        writer
            .serialize(review)
            .with_context(|| format!("failed to write review record to {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush output file {}", path.display()))?;

    Ok(())
}
