use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use wallet_sorter::nimble::NimbleClient;

/// Body returned by the balance endpoint for an address with no funds.
pub const NOT_FOUND_BODY: &str = r#"{"msg": "Error: address not found"}"#;

#[derive(Deserialize)]
struct AddressBody {
    address: String,
}

/// In-process stand-in for the Nimble network endpoints.
#[derive(Clone, Default)]
pub struct MockNimble {
    balances: Arc<HashMap<String, (StatusCode, String)>>,
    registered: Arc<HashSet<String>>,
    balance_calls: Arc<Mutex<Vec<String>>>,
    particle_calls: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockNimble {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn funded(self, address: &str) -> Self {
        self.balance_response(address, StatusCode::OK, r#"{"msg": "Balance: 1500 NIM"}"#)
    }

    pub fn balance_response(mut self, address: &str, status: StatusCode, body: &str) -> Self {
        Arc::make_mut(&mut self.balances).insert(address.into(), (status, body.into()));
        self
    }

    pub fn registered(mut self, address: &str) -> Self {
        Arc::make_mut(&mut self.registered).insert(address.into());
        self
    }

    pub fn balance_calls(&self) -> Vec<String> {
        self.balance_calls.lock().unwrap().clone()
    }

    pub fn particle_calls(&self) -> Vec<String> {
        self.particle_calls.lock().unwrap().clone()
    }

    /// Serve the mock on an ephemeral local port and return its base URL.
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/check_balance", post(check_balance))
            .route("/register_particle", post(register_particle))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock listener");
        let addr = listener.local_addr().expect("Mock listener has no address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock server crashed");
        });

        format!("http://{addr}")
    }

    /// Spawn the mock and build a client pointed at it.
    pub async fn client(&self) -> NimbleClient {
        let base_url = self.spawn().await;
        NimbleClient::with_base_url(reqwest::Client::new(), base_url)
    }
}

async fn check_balance(
    State(mock): State<MockNimble>,
    Json(body): Json<AddressBody>,
) -> (StatusCode, String) {
    mock.balance_calls.lock().unwrap().push(body.address.clone());

    mock.balances
        .get(&body.address)
        .cloned()
        .unwrap_or_else(|| (StatusCode::OK, NOT_FOUND_BODY.into()))
}

async fn register_particle(
    State(mock): State<MockNimble>,
    Json(body): Json<AddressBody>,
) -> (StatusCode, String) {
    mock.particle_calls.lock().unwrap().push(body.address.clone());

    if mock.registered.contains(&body.address) {
        (StatusCode::OK, r#"{"msg": "Task registered successfully"}"#.into())
    } else {
        (StatusCode::BAD_REQUEST, r#"{"detail": "address not eligible"}"#.into())
    }
}

/// Base URL of a local port with nothing listening on it.
#[allow(dead_code)]
pub async fn dead_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    format!("http://{addr}")
}

#[allow(dead_code)]
pub fn addresses(list: &[&str]) -> Vec<String> {
    list.iter().map(|a| a.to_string()).collect()
}
