//! A stand-in for the transactions API that tests can point an
//! [ApiClient](crate::api::ApiClient) at.

use std::time::Duration;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Serve `app` on a random local port, returning its base URL.
pub(crate) async fn spawn_api(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind test listener");
    let address = listener
        .local_addr()
        .expect("Could not get test listener address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Test API server failed");
    });

    format!("http://{address}")
}

/// An API whose transactions resource responds with `body` after `delay`.
pub(crate) fn transactions_api(body: Value, delay: Duration) -> Router {
    Router::new().route(
        "/transactions",
        get(move || async move {
            tokio::time::sleep(delay).await;
            Json(body)
        }),
    )
}

/// A response with a single income transaction and matching balance.
pub(crate) fn salary_body() -> Value {
    json!({
        "transactions": [{
            "id": "1",
            "title": "Salary",
            "value": 1000,
            "type": "income",
            "category": { "title": "Job" },
            "created_at": "2021-01-01"
        }],
        "balance": { "income": "1000", "outcome": "0", "total": "1000" }
    })
}
