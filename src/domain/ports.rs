use crate::domain::model::{PaymentNotice, PersistedEntry, PriceQuote, Submission};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote persistence and auth. Batch and entry numbers are assigned
/// server-side; the store is treated as opaque storage with its own
/// uniqueness guarantees.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn current_user(&self) -> Result<String>;

    /// Returns the open batch number, creating one if none is open.
    /// Idempotent per calling period.
    async fn open_batch(&self) -> Result<String>;

    async fn insert_entry(
        &self,
        submission: &Submission,
        quote: &PriceQuote,
        batch_number: &str,
        consumer_id: &str,
    ) -> Result<PersistedEntry>;
}

/// Transactional payment email dispatch. Fire-and-forget: a failure never
/// rolls back the entry it refers to.
#[async_trait]
pub trait PaymentNotifier: Send + Sync {
    async fn send_payment_notice(&self, notice: &PaymentNotice) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn service_url(&self) -> &str;
    fn api_key(&self) -> &str;
}
