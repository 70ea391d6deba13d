use crate::domain::model::{GradingCompany, ServiceLevel, ServiceLevelKey};
use crate::utils::error::{GradingError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Read-only company/service-level data. The built-in catalog is compiled-in
/// configuration; tests can inject alternates through `new`.
#[derive(Debug, Clone)]
pub struct Catalog {
    companies: Vec<GradingCompany>,
}

impl Catalog {
    pub fn new(companies: Vec<GradingCompany>) -> Self {
        Self { companies }
    }

    pub fn companies(&self) -> &[GradingCompany] {
        &self.companies
    }

    pub fn company(&self, id: &str) -> Result<&GradingCompany> {
        self.companies
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| GradingError::UnknownCompany(id.to_string()))
    }

    /// Service levels in ascending-coverage order.
    pub fn service_levels(&self, company: &str) -> Result<&[ServiceLevel]> {
        Ok(&self.company(company)?.service_levels)
    }

    pub fn service_level(&self, company: &str, key: ServiceLevelKey) -> Result<&ServiceLevel> {
        self.service_levels(company)?
            .iter()
            .find(|l| l.key == key)
            .ok_or_else(|| GradingError::UnknownServiceLevel {
                company: company.to_string(),
                level: key.to_string(),
            })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            GradingCompany {
                id: "PSA".to_string(),
                name: "PSA".to_string(),
                description: "Professional Sports Authenticator - The industry standard in card grading"
                    .to_string(),
                service_levels: vec![
                    level(ServiceLevelKey::Economy, "Economy", dec!(50), 30, Some(dec!(499))),
                    level(ServiceLevelKey::Regular, "Regular", dec!(100), 15, Some(dec!(999))),
                    level(ServiceLevelKey::Express, "Express", dec!(150), 10, Some(dec!(2499))),
                    level(ServiceLevelKey::SuperExpress, "Super Express", dec!(300), 5, Some(dec!(4999))),
                    level(ServiceLevelKey::WalkThrough, "Walk-Through", dec!(600), 2, None),
                ],
            },
            GradingCompany {
                id: "TAG".to_string(),
                name: "TAG".to_string(),
                description: "Trading Art Gallery - Specialized in Japanese TCG grading".to_string(),
                service_levels: vec![
                    level(ServiceLevelKey::Economy, "Economy", dec!(35), 25, Some(dec!(299))),
                    level(ServiceLevelKey::Regular, "Regular", dec!(75), 12, Some(dec!(799))),
                    level(ServiceLevelKey::Express, "Express", dec!(125), 8, Some(dec!(1999))),
                    level(ServiceLevelKey::SuperExpress, "Super Express", dec!(250), 4, Some(dec!(3999))),
                    level(ServiceLevelKey::WalkThrough, "Walk-Through", dec!(500), 1, None),
                ],
            },
        ])
    }
}

fn level(
    key: ServiceLevelKey,
    name: &str,
    price: Decimal,
    days: u32,
    max_value: Option<Decimal>,
) -> ServiceLevel {
    ServiceLevel {
        key,
        name: name.to_string(),
        price,
        days,
        max_value,
    }
}
