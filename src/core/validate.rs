use crate::core::catalog::Catalog;
use crate::domain::model::{CardRecord, Submission};
use chrono::{Datelike, Utc};
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::OnceLock;

/// Earliest accepted release year (first Pokemon TCG print run).
pub const MIN_YEAR: i32 = 1996;

fn year_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}$").unwrap())
}

/// One business-rule violation, scoped to the batch or to a single card
/// field so callers can render everything at once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ValidationError {
    EmptyBatch,
    UnknownCompany {
        company: String,
    },
    UnknownServiceLevel {
        company: String,
        level: String,
    },
    Field {
        card: usize,
        field: &'static str,
        message: String,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyBatch => write!(f, "At least one card is required"),
            ValidationError::UnknownCompany { company } => {
                write!(f, "Unknown grading company: {}", company)
            }
            ValidationError::UnknownServiceLevel { company, level } => {
                write!(f, "{} does not offer service level '{}'", company, level)
            }
            ValidationError::Field { card, field, message } => {
                write!(f, "Card #{}: {}: {}", card + 1, field, message)
            }
        }
    }
}

/// Outcome of validating a whole submission. Empty error set means valid.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

/// Checks a submission against structural and business rules. Collects every
/// violation instead of failing fast; pure, no side effects.
///
/// Duplicate cards across the batch are allowed: a customer may well submit
/// two copies of the same card.
pub fn validate(submission: &Submission, catalog: &Catalog) -> ValidationReport {
    let mut errors = Vec::new();

    if submission.cards.is_empty() {
        errors.push(ValidationError::EmptyBatch);
    }

    match catalog.company(&submission.grading_company) {
        Err(_) => errors.push(ValidationError::UnknownCompany {
            company: submission.grading_company.clone(),
        }),
        Ok(company) => {
            if !company
                .service_levels
                .iter()
                .any(|l| l.key == submission.service_level)
            {
                errors.push(ValidationError::UnknownServiceLevel {
                    company: company.id.clone(),
                    level: submission.service_level.to_string(),
                });
            }
        }
    }

    for (index, card) in submission.cards.iter().enumerate() {
        validate_card(index, card, &mut errors);
    }

    ValidationReport { errors }
}

fn validate_card(index: usize, card: &CardRecord, errors: &mut Vec<ValidationError>) {
    let mut field_error = |field: &'static str, message: String| {
        errors.push(ValidationError::Field {
            card: index,
            field,
            message,
        });
    };

    if card.card_name.trim().is_empty() {
        field_error("cardName", "Card name is required".to_string());
    }
    if card.card_number.trim().is_empty() {
        field_error("cardNumber", "Card number is required".to_string());
    }
    if card.set_name.trim().is_empty() {
        field_error("setName", "Set name is required".to_string());
    }

    let current_year = Utc::now().year();
    let year_text = card.year_of_release.trim();
    if !year_pattern().is_match(year_text) {
        field_error("yearOfRelease", "Must be a valid year".to_string());
    } else {
        // Four digits always fit an i32.
        let year: i32 = year_text.parse().unwrap();
        if !(MIN_YEAR..=current_year).contains(&year) {
            field_error(
                "yearOfRelease",
                format!("Year must be between {} and {}", MIN_YEAR, current_year),
            );
        }
    }

    if card.declared_value <= Decimal::ZERO {
        field_error("declaredValue", "Declared value must be positive".to_string());
    }
}
