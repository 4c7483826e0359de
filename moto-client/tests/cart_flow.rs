//! Cart store against a live in-process backend: confirm-then-patch
//! semantics and derived totals.

mod support;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use moto_client::{CartFetch, CartStore, ClientError, QuantityAction};
use serde_json::{json, Value};
use shared::money::format_money;

fn wire_item(id: &str, price: f64, quantity: i32) -> Value {
    json!({
        "id": id,
        "productId": format!("product-{id}"),
        "userId": "u1",
        "quantity": quantity,
        "title": format!("Item {id}"),
        "price": price,
        "image": null
    })
}

/// Backend serving a fixed cart plus scripted mutation responses
fn cart_app(items: Vec<Value>, mutation_response: Value) -> Router {
    let mutation = Arc::new(mutation_response);
    Router::new()
        .route(
            "/api/get-user/cart",
            post(move |Json(body): Json<Value>| {
                let items = items.clone();
                async move {
                    assert_eq!(body["userId"], "u1");
                    Json(json!({"success": true, "items": items}))
                }
            }),
        )
        .route(
            "/api/update-cart-quantity",
            post({
                let mutation = Arc::clone(&mutation);
                move |Json(_): Json<Value>| async move { Json((*mutation).clone()) }
            }),
        )
        .route(
            "/api/remove-from-cart",
            post({
                let mutation = Arc::clone(&mutation);
                move |Json(_): Json<Value>| async move { Json((*mutation).clone()) }
            }),
        )
}

#[tokio::test]
async fn test_fetch_distinguishes_loaded_and_empty() {
    let base = support::serve(cart_app(vec![wire_item("a", 10.0, 1)], json!({}))).await;
    let mut store = CartStore::new(support::client(&base), &support::session()).unwrap();
    assert_eq!(store.fetch().await.unwrap(), CartFetch::Loaded);
    assert_eq!(store.items().len(), 1);

    let base = support::serve(cart_app(vec![], json!({}))).await;
    let mut store = CartStore::new(support::client(&base), &support::session()).unwrap();
    assert_eq!(store.fetch().await.unwrap(), CartFetch::Empty);
}

#[tokio::test]
async fn test_fetch_transport_failure_is_distinct_from_empty() {
    let mut store =
        CartStore::new(support::client("http://127.0.0.1:9"), &support::session()).unwrap();
    let err = store.fetch().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}

#[tokio::test]
async fn test_update_quantity_patches_to_server_value() {
    // The server reports 7 — e.g. another tab also incremented. The client
    // must take the authoritative value, not local + 1.
    let app = cart_app(
        vec![wire_item("a", 10.0, 2)],
        json!({"success": true, "updatedQuantity": 7}),
    );
    let base = support::serve(app).await;
    let mut store = CartStore::new(support::client(&base), &support::session()).unwrap();
    store.fetch().await.unwrap();

    store
        .update_quantity("a", QuantityAction::Increase)
        .await
        .unwrap();
    assert_eq!(store.items()[0].quantity, 7);
}

#[tokio::test]
async fn test_update_quantity_failure_leaves_items_unchanged() {
    let app = cart_app(
        vec![wire_item("a", 10.0, 2), wire_item("b", 5.0, 1)],
        json!({"success": false, "message": "Out of stock"}),
    );
    let base = support::serve(app).await;
    let mut store = CartStore::new(support::client(&base), &support::session()).unwrap();
    store.fetch().await.unwrap();
    let before = store.items().to_vec();

    let err = store
        .update_quantity("a", QuantityAction::Increase)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Rejected(message) if message == "Out of stock"));
    assert_eq!(store.items(), before.as_slice());
}

#[tokio::test]
async fn test_update_quantity_http_error_leaves_items_unchanged() {
    let items = vec![wire_item("a", 10.0, 2)];
    let app = Router::new()
        .route(
            "/api/get-user/cart",
            post({
                let items = items.clone();
                move |_: Json<Value>| {
                    let items = items.clone();
                    async move { Json(json!({"success": true, "items": items})) }
                }
            }),
        )
        .route(
            "/api/update-cart-quantity",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
    let base = support::serve(app).await;
    let mut store = CartStore::new(support::client(&base), &support::session()).unwrap();
    store.fetch().await.unwrap();
    let before = store.items().to_vec();

    let err = store
        .update_quantity("a", QuantityAction::Increase)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Internal(_)));
    assert_eq!(store.items(), before.as_slice());
}

#[tokio::test]
async fn test_confirmed_success_without_quantity_is_invalid_response() {
    let app = cart_app(vec![wire_item("a", 10.0, 2)], json!({"success": true}));
    let base = support::serve(app).await;
    let mut store = CartStore::new(support::client(&base), &support::session()).unwrap();
    store.fetch().await.unwrap();

    let err = store
        .update_quantity("a", QuantityAction::Increase)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
    assert_eq!(store.items()[0].quantity, 2);
}

#[tokio::test]
async fn test_remove_item_confirm_then_delete() {
    let app = cart_app(
        vec![wire_item("a", 10.0, 2), wire_item("b", 5.0, 1)],
        json!({"success": true}),
    );
    let base = support::serve(app).await;
    let mut store = CartStore::new(support::client(&base), &support::session()).unwrap();
    store.fetch().await.unwrap();

    store.remove_item("a").await.unwrap();
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].id, "b");
}

#[tokio::test]
async fn test_remove_item_failure_keeps_list() {
    let app = cart_app(
        vec![wire_item("a", 10.0, 2)],
        json!({"success": false, "message": "Nope"}),
    );
    let base = support::serve(app).await;
    let mut store = CartStore::new(support::client(&base), &support::session()).unwrap();
    store.fetch().await.unwrap();

    assert!(store.remove_item("a").await.is_err());
    assert_eq!(store.items().len(), 1);
}

#[tokio::test]
async fn test_cart_totals_end_to_end() {
    // Two items: 100.00 x2 and 50.00 x1 -> subtotal 250.00; SAVE10 -> 240.00
    let app = cart_app(
        vec![wire_item("a", 100.0, 2), wire_item("b", 50.0, 1)],
        json!({}),
    );
    let base = support::serve(app).await;
    let mut store = CartStore::new(support::client(&base), &support::session()).unwrap();
    store.fetch().await.unwrap();

    assert_eq!(format_money(store.subtotal()), "250.00");

    store.apply_discount_code("SAVE10").unwrap();
    assert_eq!(format_money(store.total()), "240.00");

    // Wrong code errors and changes nothing
    assert!(store.apply_discount_code("save10").is_err());
    assert_eq!(format_money(store.total()), "240.00");
}
