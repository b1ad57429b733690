use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::ClientError;
use crate::models::entry::{OcrDraft, TransactionEntry};
use crate::models::filter::AnalyticsFilter;

use super::traits::{FinanceApi, LoginRequest, LoginResponse};

/// Base path of the API gateway service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// HTTP implementation of [`FinanceApi`].
///
/// Thin by design: attaches the bearer header (except for login), maps
/// non-success statuses to `ClientError::Api` with the response body text,
/// and maps transport failures to `ClientError::Network`. Never retries,
/// never sets a per-request timeout — the client-wide default is the only
/// limit.
pub struct ApiGateway {
    client: Client,
    base_url: String,
}

impl ApiGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a non-success response into an `Api` error carrying the body
    /// text, or `fallback` when the body is empty/unreadable.
    async fn check(response: Response, fallback: &str) -> Result<Response, ClientError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::api(body, fallback))
    }
}

impl Default for ApiGateway {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl FinanceApi for ApiGateway {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let url = format!("{}/auth/login", self.base_url);
        let response = self.client.post(&url).json(request).send().await?;
        let response = Self::check(response, "Login failed").await?;
        let login: LoginResponse = response.json().await.map_err(|e| ClientError::Api {
            message: format!("Malformed login response: {e}"),
        })?;
        Ok(login)
    }

    async fn validate_token(&self, token: &str) -> Result<(), ClientError> {
        let url = format!("{}/auth/validate", self.base_url);
        let response = self.client.get(&url).bearer_auth(token).send().await?;
        Self::check(response, "Token validation failed").await?;
        Ok(())
    }

    async fn comprehensive_analytics(
        &self,
        token: &str,
        filter: &AnalyticsFilter,
    ) -> Result<Value, ClientError> {
        let url = format!("{}/analytics/comprehensive", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(&filter.to_query_pairs())
            .send()
            .await?;
        let response = Self::check(response, "Failed to load analytics data").await?;
        let payload: Value = response.json().await.map_err(|e| ClientError::Api {
            message: format!("Malformed analytics response: {e}"),
        })?;
        Ok(payload)
    }

    async fn create_entry(
        &self,
        token: &str,
        entry: &TransactionEntry,
    ) -> Result<(), ClientError> {
        let url = format!("{}/upsert/create", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(entry)
            .send()
            .await?;
        Self::check(response, "Failed to create entry").await?;
        Ok(())
    }

    async fn process_bill(
        &self,
        token: &str,
        user_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<OcrDraft, ClientError> {
        let url = format!("{}/bill/process/{user_id}", self.base_url);
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        let response = Self::check(response, "Failed to process bill").await?;
        let draft: OcrDraft = response.json().await.map_err(|e| ClientError::Api {
            message: format!("Malformed bill processing response: {e}"),
        })?;
        Ok(draft)
    }
}
