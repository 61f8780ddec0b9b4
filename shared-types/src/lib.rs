//! Shared storefront types
//!
//! These types are used by both:
//! - Dioxus components (WASM)
//! - External harnesses driving the page (via the generated TypeScript bindings)
//!
//! Serializable with serde for JSON fixtures and config overrides

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Catalog
// ============================================================================

/// A purchasable catalog entry. Immutable once the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../storefront/bindings/generated.ts")]
pub struct Product {
    /// Unique, positive, stable for the process lifetime
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Fixed-point price in cents (29999 == 299.99)
    pub price_cents: u64,
    pub features: Vec<String>,
    /// Icon font class list, e.g. "fas fa-headphones"
    pub icon: String,
}

// ============================================================================
// Theme
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../storefront/bindings/generated.ts")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Accepts only the two persisted spellings.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Interaction
// ============================================================================

/// Feedback phase of a single "add to cart" control
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../storefront/bindings/generated.ts")]
pub enum ButtonFeedbackState {
    #[default]
    Idle,
    Adding,
    Added,
}

/// Transient message shown after a completed feedback sequence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../storefront/bindings/generated.ts")]
pub struct Notification {
    pub id: String,
    pub message: String,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            message: message.into(),
        }
    }

    pub fn added_to_cart(product_name: &str) -> Self {
        Self::new(format!("{product_name} added to cart!"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_rs::Config;

    #[test]
    fn test_theme_parse_accepts_only_known_values() {
        assert_eq!(ThemePreference::parse("light"), Some(ThemePreference::Light));
        assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
        assert_eq!(ThemePreference::parse("Dark"), None);
        assert_eq!(ThemePreference::parse(""), None);
    }

    #[test]
    fn test_theme_toggle_is_an_involution() {
        let theme = ThemePreference::default();
        assert_eq!(theme, ThemePreference::Light);
        assert_eq!(theme.toggled(), ThemePreference::Dark);
        assert_eq!(theme.toggled().toggled(), theme);
    }

    #[test]
    fn test_theme_serialization() {
        let json = serde_json::to_string(&ThemePreference::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
    }

    #[test]
    fn test_notification_message_and_ids() {
        let first = Notification::added_to_cart("Wireless Pro Headphones");
        let second = Notification::added_to_cart("Wireless Pro Headphones");
        assert_eq!(first.message, "Wireless Pro Headphones added to cart!");
        assert_ne!(first.id, second.id);
        assert_eq!(first.id.len(), 36); // UUID length
    }

    #[test]
    fn test_product_deserializes_from_fixture() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Desk Lamp",
            "description": "Warm light",
            "price_cents": 4550,
            "features": ["Dimmable"],
            "icon": "fas fa-lightbulb"
        }))
        .unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.features, vec!["Dimmable".to_string()]);
    }

    #[test]
    fn export_types() {
        // The export_to attribute in each type's #[ts] macro specifies the output file
        let config = Config::default();
        Product::export(&config).unwrap();
        ThemePreference::export(&config).unwrap();
        ButtonFeedbackState::export(&config).unwrap();
        Notification::export(&config).unwrap();
    }
}
