//! Shared helpers for integration tests: serve an axum router standing in
//! for the backend API on an ephemeral port.

use axum::Router;

/// Spawn `app` on 127.0.0.1:0 and return its base URL
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test backend");
    });
    format!("http://{}", addr)
}

/// A client pointed at the served base URL
pub fn client(base_url: &str) -> moto_client::HttpClient {
    moto_client::ClientConfig::new(base_url)
        .with_timeout(5)
        .build_http_client()
}

/// Session for the fixed test user
pub fn session() -> moto_client::SessionContext {
    moto_client::SessionContext {
        user_id: Some("u1".to_string()),
        token: Some("test-token".to_string()),
        is_admin: false,
        verified: true,
    }
}
