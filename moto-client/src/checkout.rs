//! Checkout orchestrator
//!
//! Sequences a single-product purchase: gateway key, backend payment
//! order, optional guest-order persistence, then the external payment
//! widget. An order always exists before the widget opens — any earlier
//! failure aborts the flow, so no payment-without-order state is
//! reachable.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::api::{
    CheckoutRequest, CheckoutResponse, GuestOrderRequest, GuestOrderResponse, PaymentKeyResponse,
};
use shared::models::{CartItem, Product, ShippingAddress};
use shared::money;

use crate::session::SessionContext;
use crate::{ClientError, ClientResult, HttpClient};

/// Everything the external payment widget needs to open pre-filled
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentHandoff {
    /// Gateway public key from the backend
    pub gateway_key: String,
    /// Backend-issued payment order id
    pub order_id: String,
    /// Amount the order was created for
    pub amount: Decimal,
    /// Purchaser name shown in the widget
    pub purchaser_name: Option<String>,
    pub purchaser_email: Option<String>,
    pub purchaser_phone: Option<String>,
}

/// Seam for the external payment popup; injected so the flow is testable
/// and the widget stays out of this crate
#[async_trait]
pub trait PaymentWidget: Send + Sync {
    async fn open(&self, handoff: &PaymentHandoff) -> Result<(), String>;
}

/// Contact/shipping details collected from an unauthenticated purchaser
#[derive(Debug, Clone, Default)]
pub struct GuestDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: ShippingAddress,
}

/// Field-level validation failures, one message per offending field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.errors.iter().map(|(field, _)| *field).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

impl GuestDetails {
    /// Validate the guest form; any violation blocks submission before a
    /// network call is made
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.full_name.trim().is_empty() {
            errors.push("fullName", "Full name is required");
        }
        if !is_basic_email(&self.email) {
            errors.push("email", "Enter a valid email address");
        }
        let digits: String = self.phone.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() != 10 {
            errors.push("phone", "Phone number must have exactly 10 digits");
        }
        if self.address.address_line1.trim().is_empty() {
            errors.push("addressLine1", "Address is required");
        }
        if self.address.city.trim().is_empty() {
            errors.push("city", "City is required");
        }
        if self.address.state.trim().is_empty() {
            errors.push("state", "State is required");
        }
        if self.address.postal_code.trim().is_empty() {
            errors.push("postalCode", "Postal code is required");
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Phone reduced to its digits, as sent to the backend
    pub fn normalized_phone(&self) -> String {
        self.phone.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

/// Basic `local@domain` shape: one '@', non-empty on both sides, a '.' in
/// the domain
fn is_basic_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Checkout failure, either a remote error or guest-form validation
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Guest details invalid: {0}")]
    GuestForm(FieldErrors),

    /// A checkout is already in flight for this orchestrator
    #[error("Checkout already in progress")]
    InFlight,

    /// The widget itself failed to open; the order exists and can be
    /// retried from the orders page
    #[error("Payment widget failed: {0}")]
    Widget(String),
}

/// Drives the checkout sequence against the backend
pub struct CheckoutOrchestrator {
    http: HttpClient,
    in_flight: AtomicBool,
}

/// Releases the in-flight flag when the purchase future completes or is
/// dropped mid-await, so an abandoned run cannot wedge the orchestrator
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl CheckoutOrchestrator {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Fetch the payment gateway public key
    pub async fn payment_key(&self) -> ClientResult<String> {
        let response: PaymentKeyResponse = self.http.get("/api/get-key").await?;
        Ok(response.key)
    }

    /// Ask the backend to create a payment order for the given amount
    pub async fn create_payment_order(&self, amount: Decimal) -> ClientResult<shared::api::PaymentOrder> {
        let request = CheckoutRequest {
            amount: money::to_f64(amount),
        };
        let response: CheckoutResponse = self.http.post("/api/checkout", &request).await?;
        Ok(response.order)
    }

    /// Run the full purchase flow for `quantity` units of `product`
    ///
    /// Unauthenticated purchasers must supply validated guest details; the
    /// guest order is persisted before the widget opens. Re-entry while a
    /// prior run is still awaiting the backend is refused (double-submit
    /// guard).
    pub async fn purchase(
        &self,
        product: &Product,
        quantity: i32,
        session: &SessionContext,
        guest: Option<&GuestDetails>,
        widget: &dyn PaymentWidget,
    ) -> Result<PaymentHandoff, CheckoutError> {
        money::validate_quantity(quantity)
            .map_err(|m| CheckoutError::Client(ClientError::Validation(m)))?;

        // Validate before any network call
        let guest = if session.is_authenticated() {
            None
        } else {
            let details = guest.ok_or_else(|| {
                CheckoutError::Client(ClientError::Validation(
                    "Guest details required for anonymous checkout".into(),
                ))
            })?;
            details.validate().map_err(CheckoutError::GuestForm)?;
            Some(details)
        };

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(CheckoutError::InFlight);
        }
        let _guard = InFlightGuard(&self.in_flight);
        self.run_purchase(product, quantity, guest, widget).await
    }

    async fn run_purchase(
        &self,
        product: &Product,
        quantity: i32,
        guest: Option<&GuestDetails>,
        widget: &dyn PaymentWidget,
    ) -> Result<PaymentHandoff, CheckoutError> {
        let amount = money::line_total(product.price, quantity);

        let gateway_key = self.payment_key().await?;
        let order = self.create_payment_order(amount).await?;

        if let Some(details) = guest {
            self.create_guest_order(product, quantity, amount, details)
                .await?;
        }

        let handoff = PaymentHandoff {
            gateway_key,
            order_id: order.id,
            amount,
            purchaser_name: guest.map(|g| g.full_name.clone()),
            purchaser_email: guest.map(|g| g.email.clone()),
            purchaser_phone: guest.map(|g| g.normalized_phone()),
        };

        widget
            .open(&handoff)
            .await
            .map_err(CheckoutError::Widget)?;

        Ok(handoff)
    }

    /// Persist a guest order record; must succeed before payment is
    /// attempted
    async fn create_guest_order(
        &self,
        product: &Product,
        quantity: i32,
        amount: Decimal,
        details: &GuestDetails,
    ) -> ClientResult<()> {
        let item = CartItem {
            id: String::new(),
            product_id: product.id.clone(),
            user_id: String::new(),
            quantity,
            title: product.name.clone(),
            price: product.price,
            image: product.primary_image().map(str::to_string),
        };
        let request = GuestOrderRequest {
            full_name: details.full_name.trim().to_string(),
            email: details.email.trim().to_string(),
            phone_number: details.normalized_phone(),
            address: details.address.address_line1.clone(),
            items: vec![item],
            total_amount: money::to_f64(amount),
            shipping_address: details.address.clone(),
        };
        let response: GuestOrderResponse = self
            .http
            .post("/api/order/create-guest-order", &request)
            .await?;
        if !response.success {
            return Err(ClientError::rejected(response.message));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_details() -> GuestDetails {
        GuestDetails {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            address: ShippingAddress {
                address_line1: "1 Main St".to_string(),
                address_line2: None,
                city: "Reno".to_string(),
                state: "NV".to_string(),
                postal_code: "89501".to_string(),
                country: None,
            },
        }
    }

    #[test]
    fn test_valid_details_pass() {
        assert!(valid_details().validate().is_ok());
    }

    #[test]
    fn test_empty_full_name_rejected() {
        let mut details = valid_details();
        details.full_name = "   ".to_string();
        let errors = details.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.field("fullName").is_some());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut details = valid_details();
        details.email = "abc".to_string();
        let errors = details.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.field("email").is_some());
    }

    #[test]
    fn test_short_phone_rejected() {
        let mut details = valid_details();
        details.phone = "12345".to_string();
        let errors = details.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.field("phone").is_some());
    }

    #[test]
    fn test_phone_strips_formatting() {
        let details = valid_details();
        assert_eq!(details.normalized_phone(), "5551234567");
        assert!(details.validate().is_ok());

        let mut long = valid_details();
        long.phone = "+1 555 123 4567".to_string();
        // 11 digits after stripping: rejected
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_each_missing_address_field_annotated() {
        for field in ["addressLine1", "city", "state", "postalCode"] {
            let mut details = valid_details();
            match field {
                "addressLine1" => details.address.address_line1.clear(),
                "city" => details.address.city.clear(),
                "state" => details.address.state.clear(),
                _ => details.address.postal_code.clear(),
            }
            let errors = details.validate().unwrap_err();
            assert_eq!(errors.len(), 1, "exactly one error for {field}");
            assert!(errors.field(field).is_some(), "{field} annotated");
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_basic_email("a@b.co"));
        assert!(is_basic_email(" a@b.co "));
        assert!(!is_basic_email("abc"));
        assert!(!is_basic_email("@b.co"));
        assert!(!is_basic_email("a@"));
        assert!(!is_basic_email("a@nodot"));
        assert!(!is_basic_email("a@.co"));
    }
}
