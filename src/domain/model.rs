use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The turnaround tiers a grading company offers. Declaration order is the
/// ascending-coverage order the recommender iterates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceLevelKey {
    #[serde(rename = "economy")]
    Economy,
    #[serde(rename = "regular")]
    Regular,
    #[serde(rename = "express")]
    Express,
    #[serde(rename = "superExpress")]
    SuperExpress,
    #[serde(rename = "walkThrough")]
    WalkThrough,
}

impl ServiceLevelKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceLevelKey::Economy => "economy",
            ServiceLevelKey::Regular => "regular",
            ServiceLevelKey::Express => "express",
            ServiceLevelKey::SuperExpress => "superExpress",
            ServiceLevelKey::WalkThrough => "walkThrough",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "economy" => Some(ServiceLevelKey::Economy),
            "regular" => Some(ServiceLevelKey::Regular),
            "express" => Some(ServiceLevelKey::Express),
            "superExpress" => Some(ServiceLevelKey::SuperExpress),
            "walkThrough" => Some(ServiceLevelKey::WalkThrough),
            _ => None,
        }
    }
}

impl std::fmt::Display for ServiceLevelKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One priced turnaround tier. `max_value` is the ceiling on a card's declared
/// value; `None` means uncapped (the walk-through tier).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceLevel {
    pub key: ServiceLevelKey,
    pub name: String,
    pub price: Decimal,
    pub days: u32,
    pub max_value: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingCompany {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Kept in ascending-coverage order: price strictly increases, turnaround
    /// strictly decreases, and the last tier is uncapped.
    pub service_levels: Vec<ServiceLevel>,
}

/// Card languages accepted for grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    English,
    Japanese,
    Korean,
    #[serde(rename = "Chinese (Simplified)")]
    ChineseSimplified,
    #[serde(rename = "Chinese (Traditional)")]
    ChineseTraditional,
    German,
    French,
    Italian,
    Spanish,
    Portuguese,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::English,
        Language::Japanese,
        Language::Korean,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
        Language::German,
        Language::French,
        Language::Italian,
        Language::Spanish,
        Language::Portuguese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::ChineseSimplified => "Chinese (Simplified)",
            Language::ChineseTraditional => "Chinese (Traditional)",
            Language::German => "German",
            Language::French => "French",
            Language::Italian => "Italian",
            Language::Spanish => "Spanish",
            Language::Portuguese => "Portuguese",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.as_str() == value)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameType {
    #[default]
    Pokemon,
    #[serde(rename = "One Piece")]
    OnePiece,
}

impl GameType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::Pokemon => "Pokemon",
            GameType::OnePiece => "One Piece",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pokemon" => Some(GameType::Pokemon),
            "One Piece" => Some(GameType::OnePiece),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One physical card in a submission. `year_of_release` stays textual the way
/// it arrives from forms and CSV; the validator checks it against the
/// accepted range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub card_name: String,
    pub card_number: String,
    pub language: Language,
    pub set_name: String,
    pub year_of_release: String,
    pub game_type: GameType,
    pub declared_value: Decimal,
}

/// A batch of cards plus the whole-batch company/level choice, ready for
/// validation and hand-off to the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub grading_company: String,
    pub service_level: ServiceLevelKey,
    pub cards: Vec<CardRecord>,
}

/// Derived per-quote figures; never stored, recomputed on every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    pub price_per_card: Decimal,
    pub subtotal: Decimal,
    pub vat_amount: Decimal,
    pub total: Decimal,
}

/// Fulfilment pipeline stages an entry moves through after acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradingStatus {
    Pending,
    Received,
    #[serde(rename = "Arrived at USA Warehouse")]
    AtUsaWarehouse,
    #[serde(rename = "Arrived at Grader")]
    AtGrader,
    #[serde(rename = "Order Prep")]
    OrderPrep,
    #[serde(rename = "Research & ID")]
    ResearchAndId,
    Grading,
    Assembly,
    #[serde(rename = "On the way Back")]
    OnTheWayBack,
    #[serde(rename = "Back from Grading")]
    BackFromGrading,
    #[serde(rename = "On the Way Back to you")]
    ShippedToCustomer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Unpaid,
    Paid,
    #[serde(rename = "Surcharge Pending")]
    SurchargePending,
    #[serde(rename = "Surcharge Paid")]
    SurchargePaid,
}

/// The durable record the store hands back after an insert. Batch and entry
/// numbers are server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedEntry {
    pub id: String,
    pub entry_number: String,
    pub batch_number: String,
    pub consumer_id: String,
    pub status: GradingStatus,
    pub payment_status: PaymentStatus,
    pub price: Decimal,
    #[serde(default)]
    pub surcharge_amount: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PersistedEntry {
    /// Amount still owed: base price plus any surcharge while either is
    /// outstanding.
    pub fn outstanding_amount(&self) -> Decimal {
        match self.payment_status {
            PaymentStatus::Unpaid | PaymentStatus::SurchargePending => {
                self.price + self.surcharge_amount.unwrap_or_default()
            }
            PaymentStatus::Paid | PaymentStatus::SurchargePaid => Decimal::ZERO,
        }
    }
}

/// Account the customer transfers to; the per-entry reference is filled in
/// when a notice is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankAccount {
    pub iban: String,
    pub bic: String,
    pub recipient: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankDetails {
    pub iban: String,
    pub bic: String,
    pub recipient: String,
    pub reference: String,
}

impl BankDetails {
    pub fn for_entry(account: &BankAccount, reference: &str) -> Self {
        Self {
            iban: account.iban.clone(),
            bic: account.bic.clone(),
            recipient: account.recipient.clone(),
            reference: reference.to_string(),
        }
    }
}

/// Payload for the transactional payment email.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentNotice {
    pub user_id: String,
    pub entry_id: String,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surcharge_amount: Option<Decimal>,
    pub bank_details: BankDetails,
}

impl PaymentNotice {
    pub fn total_due(&self) -> Decimal {
        self.amount + self.surcharge_amount.unwrap_or_default()
    }
}

/// What the caller gets back once a submission has been accepted and stored.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub batch_number: String,
    pub entry_number: String,
    pub quote: PriceQuote,
    pub estimated_completion: NaiveDate,
}
