//! HTTP implementation of the backend API contract.
//!
//! Thin `reqwest` wrapper. Transport failures map to
//! `PickupError::Network`, error statuses and unreadable bodies to
//! `PickupError::Api`; application-level failures (`success: false` with a
//! 200) come back as ordinary envelopes for the store to interpret.

use std::time::Duration;

use async_trait::async_trait;
use pickup_core::api::{
    BackendApi, LoginRequest, LoginResponse, VerificationCodeRequest, VerificationCodeResponse,
};
use pickup_core::config::ClientConfig;
use pickup_core::error::{PickupError, Result};
use pickup_core::order::{OrdersEnvelope, PAGE_SIZE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

#[derive(Clone)]
pub struct HttpBackendApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpBackendApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PickupError::api(format!("backend error ({}): {}", status, body)));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| PickupError::api(format!("failed to parse response: {}", e)))
    }

    async fn get_orders(&self, path: &str, authorization: &str, page: u32) -> Result<OrdersEnvelope> {
        let url = self.url(path);
        debug!(%url, page, "fetching orders page");
        let response = self
            .client
            .get(&url)
            .header("Authorization", authorization)
            .query(&[("page", page.to_string()), ("limit", PAGE_SIZE.to_string())])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| PickupError::network(format!("request to {} failed: {}", url, e)))?;
        Self::parse(response).await
    }
}

#[async_trait]
impl BackendApi for HttpBackendApi {
    async fn send_verification_code(
        &self,
        request: &VerificationCodeRequest,
    ) -> Result<VerificationCodeResponse> {
        let url = self.url("/send_verification_code");
        let response = self
            .client
            .post(&url)
            .json(request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| PickupError::network(format!("request to {} failed: {}", url, e)))?;
        Self::parse(response).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let url = self.url("/login");
        let response = self
            .client
            .post(&url)
            .json(request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| PickupError::network(format!("request to {} failed: {}", url, e)))?;
        Self::parse(response).await
    }

    async fn pending_orders(&self, authorization: &str, page: u32) -> Result<OrdersEnvelope> {
        self.get_orders("/pending_orders", authorization, page).await
    }

    async fn completed_orders(&self, authorization: &str, page: u32) -> Result<OrdersEnvelope> {
        self.get_orders("/completed_orders", authorization, page).await
    }
}
