//! Cart store
//!
//! Server-authoritative view of one user's cart. Every mutation is "fire
//! and confirm": the request goes out, and local state is patched only
//! from an explicit-success response — never optimistically. A failed
//! call leaves the item list untouched so the UI can toast and retry
//! without drift, even with the same cart open in another tab.

use rust_decimal::Decimal;
use shared::api::{
    AckResponse, CartResponse, RemoveFromCartRequest, UpdateCartQuantityRequest, UserCartRequest,
};
use shared::models::{Cart, CartItem, QuantityAction};
use shared::money;

use crate::session::SessionContext;
use crate::{ClientError, ClientResult, HttpClient};

/// The one discount code recognized client-side
pub const DISCOUNT_CODE: &str = "SAVE10";
/// Fixed amount the code subtracts from the subtotal
pub const DISCOUNT_AMOUNT: f64 = 10.0;

/// Outcome of a cart fetch; an empty cart is not an error and must render
/// its own call-to-action, distinct from a transport failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartFetch {
    Loaded,
    Empty,
}

/// Server-synchronized cart for one user session
#[derive(Debug)]
pub struct CartStore {
    http: HttpClient,
    user_id: String,
    cart: Cart,
}

impl CartStore {
    /// Build a store bound to the session's user; errors when the session
    /// is anonymous
    pub fn new(http: HttpClient, session: &SessionContext) -> ClientResult<Self> {
        let user_id = session.require_user_id()?.to_string();
        Ok(Self {
            http,
            user_id,
            cart: Cart::default(),
        })
    }

    /// Fetch the current items from the backend
    ///
    /// Distinguishes a successfully-empty cart from a failed call; on
    /// failure the previous local state is kept as-is.
    pub async fn fetch(&mut self) -> ClientResult<CartFetch> {
        let request = UserCartRequest {
            user_id: self.user_id.clone(),
        };
        let response: CartResponse = self.http.post("/api/get-user/cart", &request).await?;
        if !response.success {
            return Err(ClientError::rejected(response.message));
        }
        self.cart.items = response.items;
        if self.cart.items.is_empty() {
            Ok(CartFetch::Empty)
        } else {
            Ok(CartFetch::Loaded)
        }
    }

    /// Ask the backend to change an item's quantity, then patch the item
    /// to the server-returned value
    ///
    /// Decreasing an item already at quantity 1 is a client-side no-op:
    /// dropping the last unit requires the explicit remove action. The
    /// call never touches local state unless the backend confirms.
    pub async fn update_quantity(
        &mut self,
        cart_item_id: &str,
        action: QuantityAction,
    ) -> ClientResult<()> {
        let item = self
            .cart
            .item(cart_item_id)
            .ok_or_else(|| ClientError::NotFound(format!("Cart item {} not found", cart_item_id)))?;

        if action == QuantityAction::Decrease && item.quantity <= 1 {
            return Ok(());
        }
        let product_id = item.product_id.clone();

        let request = UpdateCartQuantityRequest {
            user_id: self.user_id.clone(),
            product_id,
            action,
        };
        let response: shared::api::UpdateCartQuantityResponse =
            self.http.post("/api/update-cart-quantity", &request).await?;
        if !response.success {
            return Err(ClientError::rejected(response.message));
        }
        let updated_quantity = response.updated_quantity.ok_or_else(|| {
            ClientError::InvalidResponse("update-cart-quantity confirmed without a quantity".into())
        })?;
        money::validate_quantity(updated_quantity).map_err(ClientError::InvalidResponse)?;

        if let Some(item) = self.cart.items.iter_mut().find(|i| i.id == cart_item_id) {
            item.quantity = updated_quantity;
        }
        Ok(())
    }

    /// Remove an item; deleted locally only after the backend confirms
    pub async fn remove_item(&mut self, cart_item_id: &str) -> ClientResult<()> {
        let item = self
            .cart
            .item(cart_item_id)
            .ok_or_else(|| ClientError::NotFound(format!("Cart item {} not found", cart_item_id)))?;

        let request = RemoveFromCartRequest {
            user_id: self.user_id.clone(),
            product_id: item.product_id.clone(),
        };
        let response: AckResponse = self.http.post("/api/remove-from-cart", &request).await?;
        if !response.success {
            return Err(ClientError::rejected(response.message));
        }

        self.cart.items.retain(|i| i.id != cart_item_id);
        Ok(())
    }

    /// Apply a discount code, client-side only
    ///
    /// Recognizing the code sets a fixed discount and the applied flag;
    /// reapplying does not stack. Anything else errors with state
    /// unchanged.
    pub fn apply_discount_code(&mut self, code: &str) -> ClientResult<()> {
        if code != DISCOUNT_CODE {
            return Err(ClientError::Validation(format!(
                "Unrecognized discount code: {}",
                code
            )));
        }
        self.cart.discount = money::to_decimal(DISCOUNT_AMOUNT);
        self.cart.discount_applied = true;
        Ok(())
    }

    /// Σ price × quantity, derived on demand
    pub fn subtotal(&self) -> Decimal {
        self.cart.subtotal()
    }

    /// Subtotal minus any applied discount
    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    pub fn items(&self) -> &[CartItem] {
        self.cart.items.as_slice()
    }

    pub fn discount_applied(&self) -> bool {
        self.cart.discount_applied
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}
