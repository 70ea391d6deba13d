pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::GradingConfig;

pub use adapters::RestClient;
pub use core::{Catalog, SubmissionService};
pub use utils::error::{GradingError, Result};
