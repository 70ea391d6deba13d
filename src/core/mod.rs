pub mod batch;
pub mod catalog;
pub mod pricing;
pub mod recommend;
pub mod submit;
pub mod validate;

pub use crate::domain::model::{CardRecord, PriceQuote, Submission};
pub use crate::domain::ports::{ConfigProvider, PaymentNotifier, SubmissionStore};
pub use crate::utils::error::Result;
pub use catalog::Catalog;
pub use submit::SubmissionService;
