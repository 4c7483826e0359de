//! Order Model
//!
//! Orders are read-only from the client's perspective: created by the
//! backend during checkout and fetched afterwards for status display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Price/quantity snapshot of one ordered line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub title: String,
    pub price: f64,
    pub quantity: i32,
}

/// Shipping destination collected at checkout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    #[serde(default)]
    pub country: Option<String>,
}

/// Payment state as reported by the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
    #[serde(other)]
    Unknown,
}

/// A placed order, fetched post-checkout for display only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    pub total_amount: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
