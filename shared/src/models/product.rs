//! Product Model
//!
//! The backend serves products in heterogeneous shapes (`name` vs `title`,
//! sometimes missing price, single `image` vs `images` array). [`RawProduct`]
//! is the wire shape; [`RawProduct::normalize`] maps it into the canonical
//! [`Product`] before it reaches search or cart logic, so nothing downstream
//! branches on field presence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical product entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub brand: Option<String>,
    /// Non-negative; rendered with exactly two fractional digits
    pub price: f64,
    /// First entry is the primary image
    pub images: Vec<String>,
    /// 0-5 as reported by the backend; clamped only for star display
    pub rating: f64,
    pub rating_count: i64,
    pub is_new: bool,
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Primary image URI, if any
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Whole-star count for display; the only place rating is clamped
    pub fn star_rating(&self) -> u8 {
        self.rating.clamp(0.0, 5.0).round() as u8
    }

    /// Price rendered with two fractional digits
    pub fn display_price(&self) -> String {
        crate::money::format_money(crate::money::to_decimal(self.price))
    }

    /// Lower-cased concatenation of the text fields used for search matching
    pub fn searchable_text(&self) -> String {
        let mut text = String::new();
        for field in [
            Some(self.name.as_str()),
            Some(self.description.as_str()),
            Some(self.category.as_str()),
            self.brand.as_deref(),
        ]
        .into_iter()
        .flatten()
        {
            if !field.is_empty() {
                text.push_str(field);
                text.push(' ');
            }
        }
        text.to_lowercase()
    }
}

/// Product as the backend actually serializes it
///
/// Field names vary between endpoints; everything is optional here and
/// resolved in [`RawProduct::normalize`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, alias = "numReviews")]
    pub rating_count: Option<i64>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl RawProduct {
    /// Map a wire product into the canonical shape
    ///
    /// Returns `None` (and logs) when the record is unusable: missing id,
    /// missing both name and title, or a price that fails validation.
    pub fn normalize(self) -> Option<Product> {
        let id = match self.id {
            Some(id) if !id.is_empty() => id,
            _ => {
                tracing::warn!("Dropping product without id");
                return None;
            }
        };
        let name = match self.name.or(self.title) {
            Some(name) if !name.is_empty() => name,
            _ => {
                tracing::warn!(product_id = %id, "Dropping product without name or title");
                return None;
            }
        };
        let price = self.price.unwrap_or(0.0);
        if let Err(reason) = crate::money::validate_price(price) {
            tracing::warn!(product_id = %id, %reason, "Dropping product with invalid price");
            return None;
        }

        let mut images = self.images;
        if images.is_empty()
            && let Some(image) = self.image
            && !image.is_empty()
        {
            images.push(image);
        }

        Some(Product {
            id,
            name,
            category: self.category.unwrap_or_default(),
            brand: self.brand,
            price,
            images,
            rating: self.rating.unwrap_or(0.0),
            rating_count: self.rating_count.unwrap_or(0),
            is_new: self.is_new,
            description: self.description.unwrap_or_default(),
            created_at: self.created_at,
        })
    }
}

/// Product category (the backend returns bare category names)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub category: String,
}
