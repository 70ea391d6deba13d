use crate::core::catalog::Catalog;
use crate::core::pricing::calculate_prices;
use crate::core::validate::validate;
use crate::domain::model::{
    BankAccount, BankDetails, PaymentNotice, PersistedEntry, Submission, SubmissionReceipt,
};
use crate::domain::ports::{PaymentNotifier, SubmissionStore};
use crate::utils::error::{GradingError, Result};
use chrono::{Datelike, NaiveDate, Utc, Weekday};

/// Adds `days` business days, skipping weekends. Turnaround promises are
/// quoted in business days.
pub fn add_business_days(start: NaiveDate, days: u32) -> NaiveDate {
    let mut date = start;
    let mut remaining = days;
    while remaining > 0 {
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            remaining -= 1;
        }
    }
    date
}

/// Orchestrates a submission: validate, price, then hand off to the store.
/// The store assigns batch and entry numbers; once the hand-off succeeds the
/// in-memory submission is done with.
pub struct SubmissionService<S: SubmissionStore, N: PaymentNotifier> {
    catalog: Catalog,
    store: S,
    notifier: N,
}

impl<S: SubmissionStore, N: PaymentNotifier> SubmissionService<S, N> {
    pub fn new(catalog: Catalog, store: S, notifier: N) -> Self {
        Self {
            catalog,
            store,
            notifier,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub async fn submit(&self, submission: &Submission) -> Result<SubmissionReceipt> {
        let report = validate(submission, &self.catalog);
        if !report.is_valid() {
            return Err(GradingError::ValidationFailed {
                errors: report.into_errors(),
            });
        }

        let quote = calculate_prices(
            &self.catalog,
            &submission.grading_company,
            submission.service_level,
            submission.cards.len(),
        )?;

        let consumer_id = self.store.current_user().await?;
        let batch_number = self.store.open_batch().await?;
        tracing::debug!("submitting entry to batch {}", batch_number);

        let entry = self
            .store
            .insert_entry(submission, &quote, &batch_number, &consumer_id)
            .await?;

        let level = self
            .catalog
            .service_level(&submission.grading_company, submission.service_level)?;
        let estimated_completion = add_business_days(Utc::now().date_naive(), level.days);

        tracing::info!(
            "entry {} accepted into batch {} ({} card(s), total {})",
            entry.entry_number,
            entry.batch_number,
            submission.cards.len(),
            quote.total
        );

        Ok(SubmissionReceipt {
            batch_number: entry.batch_number,
            entry_number: entry.entry_number,
            quote,
            estimated_completion,
        })
    }

    /// Dispatches the payment email for an accepted entry. The entry stands
    /// whether or not the notice goes out; a failure is reported to the
    /// operator as a retryable external error.
    pub async fn request_payment(
        &self,
        entry: &PersistedEntry,
        account: &BankAccount,
    ) -> Result<()> {
        let notice = PaymentNotice {
            user_id: entry.consumer_id.clone(),
            entry_id: entry.id.clone(),
            amount: entry.price,
            surcharge_amount: entry.surcharge_amount,
            bank_details: BankDetails::for_entry(account, &entry.entry_number),
        };

        if let Err(e) = self.notifier.send_payment_notice(&notice).await {
            tracing::warn!("payment notice for entry {} failed: {}", entry.entry_number, e);
            return Err(GradingError::ExternalError {
                message: e.to_string(),
            });
        }

        tracing::info!("payment notice sent for entry {}", entry.entry_number);
        Ok(())
    }
}
