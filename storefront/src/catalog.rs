//! Fixed product catalog, built once at startup.

use std::collections::HashSet;

use shared_types::Product;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate product id {0}")]
    DuplicateId(u32),
    #[error("product ids must be positive (got {0})")]
    InvalidId(u32),
}

/// Immutable, ordered product list with lookup by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id == 0 {
                return Err(CatalogError::InvalidId(product.id));
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// The catalog shipped with the page.
    pub fn builtin() -> Self {
        Self {
            products: builtin_products(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn product(
    id: u32,
    name: &str,
    description: &str,
    price_cents: u64,
    features: [&str; 4],
    icon: &str,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price_cents,
        features: features.iter().map(|f| f.to_string()).collect(),
        icon: icon.to_string(),
    }
}

fn builtin_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Wireless Pro Headphones",
            "Premium noise-cancelling headphones with exceptional sound quality and 30-hour battery life.",
            29999,
            [
                "Active Noise Cancellation",
                "30h Battery Life",
                "Touch Controls",
                "Voice Assistant",
            ],
            "fas fa-headphones",
        ),
        product(
            2,
            "Smart Fitness Watch",
            "Advanced fitness tracking with heart rate monitoring, GPS, and smartphone connectivity.",
            19999,
            [
                "Heart Rate Monitor",
                "GPS Tracking",
                "Water Resistant",
                "Sleep Analysis",
            ],
            "fas fa-watch",
        ),
        product(
            3,
            "Ultra HD Camera",
            "Professional 4K camera with advanced image stabilization and wireless streaming capabilities.",
            59999,
            [
                "4K Video Recording",
                "Image Stabilization",
                "WiFi Connectivity",
                "Night Mode",
            ],
            "fas fa-camera",
        ),
    ]
}
