//! Cart Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money;

/// One line of a user's cart
///
/// Title/price/image are a denormalized snapshot taken at add-time; the
/// product itself may have changed since.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(alias = "_id")]
    pub id: String,
    pub product_id: String,
    pub user_id: String,
    /// Positive; the backend never returns less than 1
    pub quantity: i32,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
}

impl CartItem {
    /// Line total as a Decimal
    pub fn line_total(&self) -> Decimal {
        money::line_total(self.price, self.quantity)
    }
}

/// Quantity mutation direction, as the backend expects it on the wire
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuantityAction {
    Increase,
    Decrease,
}

/// Ordered cart for one user, with the client-side discount override
///
/// Totals are derived on demand and never stored, so they cannot desync
/// from the item list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub discount: Decimal,
    pub discount_applied: bool,
}

impl Cart {
    /// Σ price × quantity over all items
    pub fn subtotal(&self) -> Decimal {
        money::round_money(self.items.iter().map(CartItem::line_total).sum())
    }

    /// Subtotal minus the applied discount, floored at zero
    pub fn total(&self) -> Decimal {
        money::round_money((self.subtotal() - self.discount).max(Decimal::ZERO))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, cart_item_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == cart_item_id)
    }
}
