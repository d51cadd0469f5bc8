//! Stub HTTP services for client tests.

#![allow(dead_code)]

use axum::Router;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Requests seen by a stub, in arrival order.
pub type Seen = Arc<Mutex<Vec<Value>>>;

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A base URL nothing listens on.
pub async fn dead_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
