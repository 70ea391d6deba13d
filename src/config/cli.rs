use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_url, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "card-grading")]
#[command(about = "Validate, price and submit trading-card grading batches")]
pub struct CliConfig {
    #[arg(long, help = "Print the CSV batch template and exit")]
    pub template: bool,

    #[arg(long, help = "CSV file with the card batch")]
    pub input: Option<String>,

    #[arg(long, default_value = "PSA")]
    pub company: String,

    #[arg(long, default_value = "economy")]
    pub service_level: String,

    #[arg(long, help = "Hand the validated batch off to the backend")]
    pub submit: bool,

    #[arg(long, default_value = "http://localhost:54321")]
    pub service_url: String,

    #[arg(long, default_value = "")]
    pub api_key: String,

    #[arg(long, help = "TOML config file with service and bank settings")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn service_url(&self) -> &str {
        &self.service_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_file_extensions("input", std::slice::from_ref(input), &["csv"])?;
        }
        if self.submit && self.config.is_none() {
            validate_url("service_url", &self.service_url)?;
            validate_non_empty_string("api_key", &self.api_key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> CliConfig {
        CliConfig::parse_from(["card-grading", "--input", "cards.csv"])
    }

    #[test]
    fn test_defaults() {
        let config = base();
        assert_eq!(config.company, "PSA");
        assert_eq!(config.service_level, "economy");
        assert!(!config.submit);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_csv_input_is_rejected() {
        let config = CliConfig::parse_from(["card-grading", "--input", "cards.xlsx"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_submit_requires_api_key_unless_config_file_given() {
        let mut config = base();
        config.submit = true;
        assert!(config.validate().is_err());

        config.api_key = "anon-key".to_string();
        assert!(config.validate().is_ok());

        config.api_key = String::new();
        config.config = Some("grading.toml".to_string());
        assert!(config.validate().is_ok());
    }
}
