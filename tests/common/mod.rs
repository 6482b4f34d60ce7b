#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use hotel_booking_api::auth::{generate_jwt, Claims};
use hotel_booking_api::config::AppConfig;
use hotel_booking_api::database::models::Hotel;
use hotel_booking_api::database::MemoryBookingStore;
use hotel_booking_api::server;
use hotel_booking_api::state::AppState;
use hotel_booking_api::types::Principal;
use serde_json::{json, Value};
use uuid::Uuid;

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub hotels: Vec<Hotel>,
    pub store: MemoryBookingStore,
    pub client: reqwest::Client,
    secret: String,
}

/// A response reduced to what the assertions need
pub struct Reply {
    pub status: reqwest::StatusCode,
    pub body: Value,
}

impl Reply {
    pub fn success(&self) -> bool {
        self.body.get("success").and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn message(&self) -> &str {
        self.body.get("message").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    pub fn id(&self) -> String {
        self.body["data"]["id"].as_str().unwrap_or_default().to_string()
    }
}

fn hotel(name: &str, province: &str) -> Hotel {
    Hotel {
        id: Uuid::new_v4(),
        name: name.to_string(),
        address: format!("1 {} Road", name),
        province: province.to_string(),
        tel: Some("02-123-4567".to_string()),
        description: Some(format!("{} test hotel", name)),
    }
}

impl TestServer {
    /// Boot the real router on a free port, backed by a fresh in-memory store with two hotels
    pub async fn spawn() -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut config = AppConfig::development();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = port;
        let secret = config.security.jwt_secret.clone();

        let hotels = vec![hotel("Riverside", "Bangkok"), hotel("Hillview", "Chiang Mai")];
        let store = MemoryBookingStore::with_hotels(hotels.clone()).await;
        let state = AppState::new(config, Arc::new(store.clone()));

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test listener")?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, server::app(state)).await;
        });

        Ok(Self {
            port,
            base_url,
            hotels,
            store,
            client: reqwest::Client::new(),
            secret,
        })
    }

    pub fn hotel_id(&self, index: usize) -> Uuid {
        self.hotels[index].id
    }

    pub fn token(&self, principal: &Principal) -> String {
        generate_jwt(&Claims::new(principal, 1).expect("claims"), &self.secret).expect("token")
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn reply(resp: reqwest::Response) -> Result<Reply> {
        let status = resp.status();
        let body = resp.json::<Value>().await.context("response was not JSON")?;
        Ok(Reply { status, body })
    }

    pub async fn get(&self, principal: &Principal, path: &str) -> Result<Reply> {
        let resp = self
            .client
            .get(self.url(path))
            .bearer_auth(self.token(principal))
            .send()
            .await?;
        Self::reply(resp).await
    }

    pub async fn put(&self, principal: &Principal, path: &str, body: Value) -> Result<Reply> {
        let resp = self
            .client
            .put(self.url(path))
            .bearer_auth(self.token(principal))
            .json(&body)
            .send()
            .await?;
        Self::reply(resp).await
    }

    pub async fn delete(&self, principal: &Principal, path: &str) -> Result<Reply> {
        let resp = self
            .client
            .delete(self.url(path))
            .bearer_auth(self.token(principal))
            .send()
            .await?;
        Self::reply(resp).await
    }

    pub async fn post(&self, principal: &Principal, path: &str, body: Value) -> Result<Reply> {
        let resp = self
            .client
            .post(self.url(path))
            .bearer_auth(self.token(principal))
            .json(&body)
            .send()
            .await?;
        Self::reply(resp).await
    }

    /// POST /api/v1/hotels/:hotelId/booking
    pub async fn book(&self, principal: &Principal, hotel_id: Uuid, check_in: &str, check_out: &str) -> Result<Reply> {
        self.post(
            principal,
            &format!("/api/v1/hotels/{}/booking", hotel_id),
            json!({ "checkInDate": check_in, "checkOutDate": check_out }),
        )
        .await
    }
}

pub fn user() -> Principal {
    Principal::user(Uuid::new_v4())
}

pub fn admin() -> Principal {
    Principal::admin(Uuid::new_v4())
}
