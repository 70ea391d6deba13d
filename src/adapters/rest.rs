use crate::domain::model::{
    GradingStatus, PaymentNotice, PaymentStatus, PersistedEntry, PriceQuote, Submission,
};
use crate::domain::ports::{ConfigProvider, PaymentNotifier, SubmissionStore};
use crate::utils::error::{GradingError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::json;

/// HTTP client for a Supabase-style backend: REST table access, RPCs and
/// edge functions behind one base URL, authenticated with an API key.
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.service_url(), config.api_key())
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    /// Provider errors are surfaced verbatim; retry policy stays with the
    /// caller.
    async fn check(&self, response: Response, context: &str) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(GradingError::ExternalError {
            message: format!("{} returned {}: {}", context, status, body),
        })
    }
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: String,
}

#[async_trait]
impl SubmissionStore for RestClient {
    async fn current_user(&self) -> Result<String> {
        let url = format!("{}/auth/v1/user", self.base_url);
        tracing::debug!("fetching current user from {}", url);
        let response = self.authed(self.client.get(&url)).send().await?;
        let response = self.check(response, "auth/v1/user").await?;
        Ok(response.json::<AuthUser>().await?.id)
    }

    async fn open_batch(&self) -> Result<String> {
        let url = format!("{}/rest/v1/rpc/get_or_create_current_batch", self.base_url);
        let response = self
            .authed(self.client.post(&url))
            .json(&json!({}))
            .send()
            .await?;
        let response = self
            .check(response, "rpc/get_or_create_current_batch")
            .await?;
        // The RPC returns the batch number as a bare JSON string.
        Ok(response.json::<String>().await?)
    }

    async fn insert_entry(
        &self,
        submission: &Submission,
        quote: &PriceQuote,
        batch_number: &str,
        consumer_id: &str,
    ) -> Result<PersistedEntry> {
        let url = format!("{}/rest/v1/grading_entries", self.base_url);
        let payload = json!({
            "consumer_id": consumer_id,
            "batch_number": batch_number,
            "status": GradingStatus::Pending,
            "payment_status": PaymentStatus::Unpaid,
            "price": quote.total,
            "service_level": submission.service_level,
            "grading_company": submission.grading_company,
            "cards": submission.cards,
        });

        let response = self
            .authed(self.client.post(&url))
            .header("Prefer", "return=representation")
            .json(&payload)
            .send()
            .await?;
        let response = self.check(response, "grading_entries insert").await?;

        // Row inserts come back as a one-element array.
        let mut rows: Vec<PersistedEntry> = response.json().await?;
        rows.pop().ok_or_else(|| GradingError::ExternalError {
            message: "grading_entries insert returned no rows".to_string(),
        })
    }
}

#[async_trait]
impl PaymentNotifier for RestClient {
    async fn send_payment_notice(&self, notice: &PaymentNotice) -> Result<()> {
        let url = format!("{}/functions/v1/send-payment-email", self.base_url);
        tracing::debug!("dispatching payment notice for entry {}", notice.entry_id);
        let response = self.authed(self.client.post(&url)).json(notice).send().await?;
        self.check(response, "send-payment-email").await?;
        Ok(())
    }
}
