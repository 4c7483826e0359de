//! Order status client
//!
//! Read-only view of placed orders, fetched post-checkout for display.

use serde::Serialize;
use shared::api::OrderStatusResponse;
use shared::models::Order;

use crate::{ClientError, ClientResult, HttpClient};

/// Client for the order endpoints
#[derive(Debug, Clone)]
pub struct OrderClient {
    http: HttpClient,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderStatusQuery<'a> {
    order_id: &'a str,
}

impl OrderClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch one order's details for the status page
    pub async fn order_status(&self, order_id: &str) -> ClientResult<Order> {
        let response: OrderStatusResponse = self
            .http
            .get_query("/api/order/status", &OrderStatusQuery { order_id })
            .await?;
        response
            .order_details
            .ok_or_else(|| ClientError::NotFound(format!("Order {} not found", order_id)))
    }
}
