//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and bundle paths come from `[package.metadata.leptos]`.

use crate::core::locale::Locale;

/// Locale rendered into the page shell before the visitor picks one
pub const DEFAULT_LOCALE_VAR: &str = "JUNCTION_DEFAULT_LOCALE";

/// Set to `false` to serve responses uncompressed
pub const COMPRESSION_VAR: &str = "JUNCTION_COMPRESSION";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub default_locale: Locale,
    /// Brotli/gzip response compression
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Invalid values are logged and replaced by their defaults.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(DEFAULT_LOCALE_VAR).ok().as_deref(),
            std::env::var(COMPRESSION_VAR).ok().as_deref(),
        )
    }

    fn from_values(locale: Option<&str>, compression: Option<&str>) -> Self {
        let default_locale = match locale.map(str::parse::<Locale>) {
            None => Locale::default(),
            Some(Ok(locale)) => locale,
            Some(Err(e)) => {
                tracing::warn!("{}: {}, using '{}'", DEFAULT_LOCALE_VAR, e, Locale::default());
                Locale::default()
            }
        };

        let compression = match compression.map(str::trim) {
            None => true,
            Some(value) if value.eq_ignore_ascii_case("true") || value == "1" => true,
            Some(value) if value.eq_ignore_ascii_case("false") || value == "0" => false,
            Some(value) => {
                tracing::warn!("{}: expected true or false, got '{}'", COMPRESSION_VAR, value);
                true
            }
        };

        Self {
            default_locale,
            compression,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
            compression: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Parsing Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(Config::from_values(None, None), Config::default());
    }

    #[test]
    fn test_arabic_default_locale() {
        let config = Config::from_values(Some("ar"), None);
        assert_eq!(config.default_locale, Locale::Ar);
        assert!(config.compression);
    }

    #[test]
    fn test_invalid_locale_falls_back() {
        let config = Config::from_values(Some("de"), None);
        assert_eq!(config.default_locale, Locale::En);
    }

    #[test]
    fn test_compression_values() {
        assert!(!Config::from_values(None, Some("false")).compression);
        assert!(!Config::from_values(None, Some(" 0 ")).compression);
        assert!(Config::from_values(None, Some("TRUE")).compression);
        assert!(Config::from_values(None, Some("maybe")).compression);
    }
}
