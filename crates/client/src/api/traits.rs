use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ClientError;
use crate::models::entry::{OcrDraft, TransactionEntry};
use crate::models::filter::AnalyticsFilter;

/// Credentials sent to the login endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: String,
}

/// What the auth service hands back on a successful login.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_id: String,
}

/// Trait abstraction over the remote finance API.
///
/// The HTTP gateway is the one real implementation; tests drive the app
/// through a mock. Analytics responses stay raw `Value` here on purpose —
/// the API emits more than one shape, and resolving them is the
/// normalizer's job, not the transport's.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait FinanceApi: Send + Sync {
    /// Exchange credentials for a token and user id.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError>;

    /// Confirm a stored token is still accepted. Invoked once at startup;
    /// failure means the session is torn down, never retried.
    async fn validate_token(&self, token: &str) -> Result<(), ClientError>;

    /// Aggregate stats, category breakdown, and timeline trends.
    async fn comprehensive_analytics(
        &self,
        token: &str,
        filter: &AnalyticsFilter,
    ) -> Result<Value, ClientError>;

    /// Create one transaction.
    async fn create_entry(
        &self,
        token: &str,
        entry: &TransactionEntry,
    ) -> Result<(), ClientError>;

    /// OCR-extract a transaction draft from an uploaded bill.
    async fn process_bill(
        &self,
        token: &str,
        user_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<OcrDraft, ClientError>;
}
