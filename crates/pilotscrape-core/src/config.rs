use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse or validate. Every
/// variable has a default, so a bare environment is valid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse or validate.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("PILOTSCRAPE_LOG_LEVEL", "info");
    let base_url = or_default("PILOTSCRAPE_BASE_URL", "https://www.trustpilot.com");
    let request_timeout_secs = parse_u64("PILOTSCRAPE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PILOTSCRAPE_USER_AGENT", "Mozilla/5.0");
    let retry_attempts = parse_u32("PILOTSCRAPE_RETRY_ATTEMPTS", "3")?;
    let retry_delay_secs = parse_u64("PILOTSCRAPE_RETRY_DELAY_SECS", "5")?;
    let page_delay_secs = parse_u64("PILOTSCRAPE_PAGE_DELAY_SECS", "2")?;
    let max_pages = parse_u32("PILOTSCRAPE_MAX_PAGES", "5")?;
    let star_filter = parse_star_filter(&or_default("PILOTSCRAPE_STAR_FILTER", "1,2,3"))?;

    if retry_attempts == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PILOTSCRAPE_RETRY_ATTEMPTS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if max_pages == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PILOTSCRAPE_MAX_PAGES".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        log_level,
        base_url,
        request_timeout_secs,
        user_agent,
        retry_attempts,
        retry_delay_secs,
        page_delay_secs,
        max_pages,
        star_filter,
    })
}

/// Parse a comma-separated star filter such as `"1,2,3"`.
///
/// Each value must be a rating from 1 to 5. An empty string yields an empty
/// filter, which means the review URL carries no star constraint at all.
fn parse_star_filter(raw: &str) -> Result<Vec<u8>, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: "PILOTSCRAPE_STAR_FILTER".to_string(),
        reason,
    };

    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut stars = Vec::new();
    for part in raw.split(',') {
        let value = part
            .trim()
            .parse::<u8>()
            .map_err(|e| invalid(format!("'{part}' is not a number: {e}")))?;
        if !(1..=5).contains(&value) {
            return Err(invalid(format!("star value {value} is out of range 1-5")));
        }
        stars.push(value);
    }
    Ok(stars)
}
