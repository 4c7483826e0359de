//! Domain models
//!
//! Canonical shapes used by the client after wire normalization.

pub mod cart;
pub mod order;
pub mod product;

pub use cart::{Cart, CartItem, QuantityAction};
pub use order::{Order, OrderItem, PaymentStatus, ShippingAddress};
pub use product::{Category, Product, RawProduct};
