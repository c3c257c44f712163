//! Storefront settings read from environment variables.
//!
//! Every setting has a default, so the storefront runs with no configuration at all.
//! Invalid values are logged and replaced by the default instead of aborting.

use crate::core::debounce::DEFAULT_SEARCH_DELAY;
use std::{fmt::Display, str::FromStr, time::Duration};
use tracing::warn;

/// Tunables for the storefront pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontSettings {
    /// Quiescence window for the search box
    pub search_debounce: Duration,
    /// How many featured products the landing page shows
    pub featured_limit: u64,
    /// Cards per row in the grid layout
    pub grid_columns: usize,
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self {
            search_debounce: DEFAULT_SEARCH_DELAY,
            featured_limit: 3,
            grid_columns: 3,
        }
    }
}

impl StorefrontSettings {
    /// Reads `STOREFRONT_SEARCH_DEBOUNCE_MS`, `STOREFRONT_FEATURED_LIMIT` and
    /// `STOREFRONT_GRID_COLUMNS`, falling back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let debounce_ms = parse_or(
            &lookup,
            "STOREFRONT_SEARCH_DEBOUNCE_MS",
            u64::try_from(defaults.search_debounce.as_millis()).unwrap_or(300),
        );

        Self {
            search_debounce: Duration::from_millis(debounce_ms),
            featured_limit: parse_or(&lookup, "STOREFRONT_FEATURED_LIMIT", defaults.featured_limit),
            grid_columns: parse_or(&lookup, "STOREFRONT_GRID_COLUMNS", defaults.grid_columns)
                .max(1),
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = StorefrontSettings::from_lookup(|_| None);
        assert_eq!(settings, StorefrontSettings::default());
        assert_eq!(settings.search_debounce, Duration::from_millis(300));
    }

    #[test]
    fn test_values_are_parsed() {
        let settings = StorefrontSettings::from_lookup(lookup_from(&[
            ("STOREFRONT_SEARCH_DEBOUNCE_MS", "150"),
            ("STOREFRONT_FEATURED_LIMIT", " 6 "),
            ("STOREFRONT_GRID_COLUMNS", "4"),
        ]));
        assert_eq!(settings.search_debounce, Duration::from_millis(150));
        assert_eq!(settings.featured_limit, 6);
        assert_eq!(settings.grid_columns, 4);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let settings = StorefrontSettings::from_lookup(lookup_from(&[
            ("STOREFRONT_SEARCH_DEBOUNCE_MS", "soon"),
            ("STOREFRONT_FEATURED_LIMIT", "-1"),
            ("STOREFRONT_GRID_COLUMNS", "0"),
        ]));
        assert_eq!(settings.search_debounce, Duration::from_millis(300));
        assert_eq!(settings.featured_limit, 3);
        assert_eq!(settings.grid_columns, 1);
    }
}
