//! Dashboard REST API Client
//!
//! HTTP implementation of [`Gateway`] using reqwest.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use super::dto::*;
use super::error::{GatewayError, GatewayResult};
use super::Gateway;
use crate::session::SessionAccessor;
use crate::store::{Account, Bill, Card, Loan, Transaction, UserProfile};

/// Configuration for the HTTP gateway
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Server origin, e.g. "http://localhost:5000" (paths start with /api)
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
    pub user_agent: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            request_timeout_ms: 30_000,
            user_agent: format!("bankdash/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Gateway talking to the dashboard backend over HTTP
pub struct HttpGateway {
    client: Client,
    config: GatewayConfig,
    session: Arc<dyn SessionAccessor>,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig, session: Arc<dyn SessionAccessor>) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            config,
            session,
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn authorized(&self, request: RequestBuilder) -> GatewayResult<RequestBuilder> {
        let token = self
            .session
            .bearer_token()
            .ok_or(GatewayError::MissingCredential)?;
        Ok(request.bearer_auth(token))
    }

    /// Send a request and return the status and raw body
    async fn send(&self, request: RequestBuilder) -> GatewayResult<(u16, String)> {
        let response = self
            .authorized(request)?
            .send()
            .await
            .map_err(GatewayError::from_send)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(GatewayError::from_send)?;
        Ok((status, body))
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, field: &str) -> GatewayResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let (status, body) = self.send(self.client.get(&url)).await?;
        decode_envelope(status, &body, Some(field))
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> GatewayResult<Ack> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let (status, text) = self.send(self.client.post(&url).json(body)).await?;
        decode_envelope(status, &text, None)
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn fetch_accounts(&self) -> GatewayResult<Vec<Account>> {
        self.fetch("/api/accounts", "accounts").await
    }

    async fn fetch_cards(&self) -> GatewayResult<Vec<Card>> {
        self.fetch("/api/cards", "cards").await
    }

    async fn fetch_transactions(&self) -> GatewayResult<Vec<Transaction>> {
        self.fetch("/api/transactions", "transactions").await
    }

    async fn fetch_bills(&self) -> GatewayResult<Vec<Bill>> {
        self.fetch("/api/bills", "bills").await
    }

    async fn fetch_loans(&self) -> GatewayResult<Vec<Loan>> {
        self.fetch("/api/loans", "loans").await
    }

    async fn fetch_profile(&self) -> GatewayResult<UserProfile> {
        self.fetch("/api/user", "user").await
    }

    async fn transfer(&self, request: &TransferRequest) -> GatewayResult<Ack> {
        self.post("/api/transfer", request).await
    }

    async fn apply_loan(&self, request: &LoanApplicationRequest) -> GatewayResult<Ack> {
        self.post("/api/apply-loan", request).await
    }

    async fn pay_bill(&self, request: &PayBillRequest) -> GatewayResult<Ack> {
        self.post("/api/pay-bill", request).await
    }

    async fn deposit(&self, request: &DepositRequest) -> GatewayResult<Ack> {
        self.post("/api/deposit", request).await
    }

    async fn update_account(&self, request: &UpdateAccountRequest) -> GatewayResult<Ack> {
        self.post("/api/accounts/update", request).await
    }

    async fn freeze_account(&self, request: &FreezeAccountRequest) -> GatewayResult<Ack> {
        self.post("/api/account/freeze", request).await
    }

    async fn update_profile(&self, request: &UpdateProfileRequest) -> GatewayResult<Ack> {
        self.post("/api/profile/update", request).await
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> GatewayResult<Ack> {
        self.post("/api/profile/change-password", request).await
    }
}
