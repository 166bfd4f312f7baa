//! Configuration validation logic.

use crate::config::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_name(&config.target.name)?;
    validate_episode_range(config.target.start_episode, config.target.end_episode)?;
    validate_resolution(&config.target.resolution)?;

    Ok(())
}

/// Validate the anime name slug.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::MissingConfig("anime name (-n)".to_string()));
    }

    // Slug pattern: alphanumeric, hyphens, underscores. Anything else would
    // not survive as a URL path segment or a directory name anyway.
    let slug_pattern = Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();

    if !slug_pattern.is_match(name) {
        return Err(Error::ConfigValidation {
            field: "name".to_string(),
            message: format!(
                "'{}' contains invalid characters. Only alphanumeric, hyphens, and underscores allowed.",
                name
            ),
        });
    }

    Ok(())
}

/// Validate the episode range. Only an unset end episode (zero) is
/// rejected; `end < start` is allowed and crawls zero pages, and any start
/// value goes through unchecked.
pub fn validate_episode_range(_start: i64, end: i64) -> Result<()> {
    if end == 0 {
        return Err(Error::MissingConfig("end episode (--end)".to_string()));
    }

    Ok(())
}

/// Validate the resolution filter string.
pub fn validate_resolution(resolution: &str) -> Result<()> {
    if resolution.trim().is_empty() {
        return Err(Error::MissingConfig("resolution (--res)".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        assert!(validate_name("one-piece").is_ok());
        assert!(validate_name("Show_123").is_ok());
    }

    #[test]
    fn test_missing_name() {
        assert!(matches!(validate_name(""), Err(Error::MissingConfig(_))));
    }

    #[test]
    fn test_name_with_invalid_characters() {
        assert!(validate_name("some show").is_err());
        assert!(validate_name("../etc").is_err());
    }

    #[test]
    fn test_unset_end_episode_rejected() {
        assert!(matches!(
            validate_episode_range(1, 0),
            Err(Error::MissingConfig(_))
        ));
    }

    #[test]
    fn test_reversed_range_is_allowed() {
        // Crawls zero pages, but is not a configuration error.
        assert!(validate_episode_range(5, 2).is_ok());
    }

    #[test]
    fn test_single_episode_range() {
        assert!(validate_episode_range(7, 7).is_ok());
    }

    #[test]
    fn test_zero_or_negative_start_is_allowed() {
        // Some shows number specials as episode 0.
        assert!(validate_episode_range(0, 3).is_ok());
        assert!(validate_episode_range(-1, 3).is_ok());
    }

    #[test]
    fn test_blank_resolution_rejected() {
        assert!(validate_resolution("  ").is_err());
        assert!(validate_resolution("720").is_ok());
    }
}
