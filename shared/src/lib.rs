//! Shared types for the storefront client
//!
//! Canonical domain models, wire-level request/response types for the
//! backend REST API, and decimal money arithmetic. These types are the
//! boundary between the heterogeneous backend JSON and the typed client.

pub mod api;
pub mod models;
pub mod money;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Cart, CartItem, Category, Order, Product, QuantityAction};
