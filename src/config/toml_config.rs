use crate::domain::model::BankAccount;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{GradingError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration: backend connection plus the bank account quoted
/// in payment notices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingConfig {
    pub service: ServiceConfig,
    pub bank: BankAccount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub url: String,
    pub api_key: String,
}

impl GradingConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GradingError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GradingError::InvalidConfigValueError {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR_NAME}` placeholders so API keys can stay out of the
    /// config file. Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("service.url", &self.service.url)?;
        validate_non_empty_string("service.api_key", &self.service.api_key)?;
        validate_non_empty_string("bank.iban", &self.bank.iban)?;
        validate_non_empty_string("bank.bic", &self.bank.bic)?;
        validate_non_empty_string("bank.recipient", &self.bank.recipient)?;
        Ok(())
    }
}

impl ConfigProvider for GradingConfig {
    fn service_url(&self) -> &str {
        &self.service.url
    }

    fn api_key(&self) -> &str {
        &self.service.api_key
    }
}

impl Validate for GradingConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
