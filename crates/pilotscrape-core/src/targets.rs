use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One entity whose reviews are crawled, identified by its review-site slug
/// (e.g. `www.example-shop.com`). Supplied externally; never derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Column name matches the input file produced by the upstream tooling.
    #[serde(rename = "c_site")]
    pub slug: String,
}

/// Load and validate the target list from a CSV file with a `c_site` column.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation (empty or duplicate slugs).
pub fn load_targets(path: &Path) -> Result<Vec<Target>, ConfigError> {
    let file = std::fs::File::open(path).map_err(|e| ConfigError::TargetsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_targets(file)
}

/// Parse and validate the target list from any reader.
///
/// Split out from [`load_targets`] so tests can feed in-memory CSV without
/// touching the filesystem.
///
/// # Errors
///
/// Returns `ConfigError` on malformed CSV, empty slugs, or duplicates.
pub fn parse_targets<R: Read>(reader: R) -> Result<Vec<Target>, ConfigError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let targets = csv_reader
        .deserialize::<Target>()
        .collect::<Result<Vec<_>, _>>()?;

    validate_targets(&targets)?;

    Ok(targets)
}

fn validate_targets(targets: &[Target]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for target in targets {
        if target.slug.trim().is_empty() {
            return Err(ConfigError::Validation(
                "target slug must be non-empty".to_string(),
            ));
        }

        if !seen.insert(target.slug.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate target slug: '{}'",
                target.slug
            )));
        }
    }

    Ok(())
}
