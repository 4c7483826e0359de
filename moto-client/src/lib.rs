//! Storefront client SDK
//!
//! Client-side logic of a motorcycle-parts storefront over a remote
//! backend API: catalog fetching with wire normalization, debounced
//! in-memory product search, a server-authoritative cart store, and the
//! checkout handoff to an external payment widget. All business logic
//! (inventory, pricing, payment capture, persistence) lives behind the
//! backend; this crate owns the coordination and its failure modes.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod http;
pub mod orders;
pub mod search;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

pub use auth::AuthClient;
pub use cart::{CartFetch, CartStore, DISCOUNT_AMOUNT, DISCOUNT_CODE};
pub use catalog::CatalogClient;
pub use checkout::{
    CheckoutError, CheckoutOrchestrator, FieldErrors, GuestDetails, PaymentHandoff, PaymentWidget,
};
pub use orders::OrderClient;
pub use search::{Key, SearchAction, SearchController, SearchIndex, SearchState};
pub use session::{KeyValueStore, MemoryStore, SessionContext};

// Re-export shared types for convenience
pub use shared::models::{Cart, CartItem, Order, Product, QuantityAction};
