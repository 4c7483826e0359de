//! Wire-level request/response types for the backend REST API
//!
//! One type per endpoint payload, exactly as the backend serializes it.
//! Envelopes are heterogeneous (`success` + payload here, bare payload
//! there); the client maps each into a typed outcome at the call site.

use serde::{Deserialize, Serialize};

use crate::models::{CartItem, Category, Order, QuantityAction, RawProduct, ShippingAddress};

// =============================================================================
// Catalog
// =============================================================================

/// `GET /api/product/get-all`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub success: bool,
    #[serde(default)]
    pub products: Vec<RawProduct>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /api/product/get-by-id`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductByIdRequest {
    pub product_id: String,
}

/// Response for `POST /api/product/get-by-id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub success: bool,
    #[serde(default)]
    pub product: Option<RawProduct>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /api/get/featured-products`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedProductsResponse {
    #[serde(default)]
    pub featured_products: Vec<RawProduct>,
}

/// `GET /api/product/get-categories`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// `PUT /api/product/:id/rate`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateProductRequest {
    pub user_id: String,
    pub new_rating: f64,
}

// =============================================================================
// Cart
// =============================================================================

/// `POST /api/get-user/cart`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCartRequest {
    pub user_id: String,
}

/// Response for `POST /api/get-user/cart`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartResponse {
    pub success: bool,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /api/update-cart-quantity`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartQuantityRequest {
    pub user_id: String,
    pub product_id: String,
    pub action: QuantityAction,
}

/// Response for `POST /api/update-cart-quantity`
///
/// `updated_quantity` is the authoritative post-mutation value; the client
/// patches local state to it and never increments locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartQuantityResponse {
    pub success: bool,
    #[serde(default)]
    pub updated_quantity: Option<i32>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /api/remove-from-cart`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartRequest {
    pub user_id: String,
    pub product_id: String,
}

/// Generic `{ success }` acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// Checkout
// =============================================================================

/// `GET /api/get-key`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentKeyResponse {
    pub key: String,
}

/// `POST /api/checkout`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub amount: f64,
}

/// Backend-created payment order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentOrder {
    pub id: String,
    pub amount: f64,
}

/// Response for `POST /api/checkout`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub order: PaymentOrder,
}

/// `POST /api/order/create-guest-order`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestOrderRequest {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub items: Vec<CartItem>,
    pub total_amount: f64,
    pub shipping_address: ShippingAddress,
}

/// Response for `POST /api/order/create-guest-order`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestOrderResponse {
    pub success: bool,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /api/order/status?orderId=...`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusResponse {
    #[serde(default)]
    pub order_details: Option<Order>,
}

// =============================================================================
// Auth (consumed opaquely)
// =============================================================================

/// `POST /api/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/signup`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Opaque auth outcome; only success/token/user id are consumed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub verified: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}
