//! Page configuration.
//!
//! Defaults match the shipped page. A host page may override any field with
//! `<script type="application/json" id="storefront-config">{...}</script>`.

use serde::Deserialize;
use thiserror::Error;

use crate::visibility::RevealOptions;

pub const CONFIG_ELEMENT_ID: &str = "storefront-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid storefront config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Delays for the timed interaction sequences, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SequenceTimings {
    /// "Adding..." phase length
    pub adding_ms: u32,
    /// "Added to Cart!" phase length
    pub added_ms: u32,
    /// Tick between inserting a notification off-screen and sliding it in
    pub notification_enter_ms: u32,
    /// Time from insertion until the notification starts sliding out
    pub notification_dwell_ms: u32,
    /// Exit transition length; the element is removed afterwards
    pub notification_exit_ms: u32,
    pub theme_fade_ms: u32,
}

impl Default for SequenceTimings {
    fn default() -> Self {
        Self {
            adding_ms: 1000,
            added_ms: 1500,
            notification_enter_ms: 100,
            notification_dwell_ms: 3000,
            notification_exit_ms: 300,
            theme_fade_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// localStorage key holding "light" or "dark"
    pub theme_storage_key: String,
    /// id of the element the product cards are rendered into
    pub container_id: String,
    pub timings: SequenceTimings,
    pub reveal: RevealOptions,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme".to_string(),
            container_id: "productsGrid".to_string(),
            timings: SequenceTimings::default(),
            reveal: RevealOptions::default(),
        }
    }
}

impl StorefrontConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read overrides from the host page, falling back to defaults.
    pub fn load() -> Self {
        let Some(raw) = read_config_element() else {
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                dioxus_logger::tracing::warn!("Ignoring storefront config, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

fn read_config_element() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_page() {
        let config = StorefrontConfig::default();
        assert_eq!(config.theme_storage_key, "theme");
        assert_eq!(config.container_id, "productsGrid");
        assert_eq!(config.timings.adding_ms, 1000);
        assert_eq!(config.timings.added_ms, 1500);
        assert_eq!(
            config.timings.notification_dwell_ms + config.timings.notification_exit_ms,
            3300
        );
        assert_eq!(config.reveal.threshold, 0.1);
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = StorefrontConfig::from_json(
            r#"{ "theme_storage_key": "shop-theme", "timings": { "adding_ms": 10 } }"#,
        )
        .expect("should parse");

        assert_eq!(config.theme_storage_key, "shop-theme");
        assert_eq!(config.timings.adding_ms, 10);
        assert_eq!(config.timings.added_ms, 1500);
        assert_eq!(config.container_id, "productsGrid");
        assert_eq!(config.reveal, RevealOptions::default());
    }

    #[test]
    fn malformed_json_errors() {
        let err = StorefrontConfig::from_json("{ not json").expect_err("must fail");
        assert!(err.to_string().contains("invalid storefront config"));
    }
}
