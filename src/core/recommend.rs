use crate::core::catalog::Catalog;
use crate::domain::model::ServiceLevelKey;
use crate::utils::error::{GradingError, Result};
use rust_decimal::Decimal;

/// Cheapest service level whose value ceiling covers `declared_value`.
///
/// Levels are scanned in the catalog's declared order; the walk-through tier
/// is uncapped, so every positive value matches some level.
pub fn recommend_service_level(
    catalog: &Catalog,
    company: &str,
    declared_value: Decimal,
) -> Result<ServiceLevelKey> {
    if declared_value <= Decimal::ZERO {
        return Err(GradingError::InvalidArgument {
            message: "declared value must be positive".to_string(),
        });
    }

    for level in catalog.service_levels(company)? {
        match level.max_value {
            None => return Ok(level.key),
            Some(max) if declared_value <= max => return Ok(level.key),
            Some(_) => continue,
        }
    }

    // Unreachable on a well-formed catalog whose top tier is uncapped.
    Err(GradingError::InvalidState {
        message: format!("no service level of {} covers value {}", company, declared_value),
    })
}

/// Advisory check against the batch's currently selected level: returns the
/// level the card actually needs when its declared value exceeds the selected
/// level's ceiling. Never a hard rejection; level choice is a whole-batch
/// decision.
pub fn coverage_warning(
    catalog: &Catalog,
    company: &str,
    selected: ServiceLevelKey,
    declared_value: Decimal,
) -> Result<Option<ServiceLevelKey>> {
    let selected_level = catalog.service_level(company, selected)?;
    match selected_level.max_value {
        Some(max) if declared_value > max => {
            let recommended = recommend_service_level(catalog, company, declared_value)?;
            if recommended != selected {
                Ok(Some(recommended))
            } else {
                Ok(None)
            }
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{GradingCompany, ServiceLevel};
    use rust_decimal_macros::dec;

    #[test]
    fn test_psa_examples() {
        let catalog = Catalog::default();
        assert_eq!(
            recommend_service_level(&catalog, "PSA", dec!(500)).unwrap(),
            ServiceLevelKey::Regular
        );
        assert_eq!(
            recommend_service_level(&catalog, "PSA", dec!(5000)).unwrap(),
            ServiceLevelKey::WalkThrough
        );
    }

    #[test]
    fn test_boundary_values_stay_in_cheaper_tier() {
        let catalog = Catalog::default();
        assert_eq!(
            recommend_service_level(&catalog, "PSA", dec!(499)).unwrap(),
            ServiceLevelKey::Economy
        );
        assert_eq!(
            recommend_service_level(&catalog, "PSA", dec!(499.01)).unwrap(),
            ServiceLevelKey::Regular
        );
    }

    #[test]
    fn test_recommendation_cost_is_monotonic_in_value() {
        let catalog = Catalog::default();
        let values = [dec!(1), dec!(300), dec!(500), dec!(1500), dec!(3000), dec!(10000)];
        let mut last_price = Decimal::ZERO;
        for value in values {
            let key = recommend_service_level(&catalog, "TAG", value).unwrap();
            let price = catalog.service_level("TAG", key).unwrap().price;
            assert!(price >= last_price, "price dropped at value {}", value);
            last_price = price;
        }
    }

    #[test]
    fn test_non_positive_value_is_rejected() {
        let catalog = Catalog::default();
        assert!(matches!(
            recommend_service_level(&catalog, "PSA", Decimal::ZERO),
            Err(GradingError::InvalidArgument { .. })
        ));
        assert!(recommend_service_level(&catalog, "PSA", dec!(-10)).is_err());
    }

    #[test]
    fn test_malformed_catalog_without_uncapped_tier() {
        let catalog = Catalog::new(vec![GradingCompany {
            id: "X".to_string(),
            name: "X".to_string(),
            description: String::new(),
            service_levels: vec![ServiceLevel {
                key: ServiceLevelKey::Economy,
                name: "Economy".to_string(),
                price: dec!(10),
                days: 10,
                max_value: Some(dec!(100)),
            }],
        }]);
        assert!(matches!(
            recommend_service_level(&catalog, "X", dec!(500)),
            Err(GradingError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_coverage_warning_only_when_ceiling_exceeded() {
        let catalog = Catalog::default();

        // 500 fits economy's neighbour but not economy itself.
        assert_eq!(
            coverage_warning(&catalog, "PSA", ServiceLevelKey::Economy, dec!(500)).unwrap(),
            Some(ServiceLevelKey::Regular)
        );
        // Within the selected ceiling: no warning.
        assert_eq!(
            coverage_warning(&catalog, "PSA", ServiceLevelKey::Economy, dec!(400)).unwrap(),
            None
        );
        // Walk-through is uncapped: never warns.
        assert_eq!(
            coverage_warning(&catalog, "PSA", ServiceLevelKey::WalkThrough, dec!(99999)).unwrap(),
            None
        );
    }
}
