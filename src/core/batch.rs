use crate::domain::model::{CardRecord, GameType, Language};
use crate::utils::error::Result;
use chrono::{Datelike, Utc};
use csv::StringRecord;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

pub const TEMPLATE_HEADERS: [&str; 7] = [
    "cardName",
    "cardNumber",
    "language",
    "setName",
    "yearOfRelease",
    "gameType",
    "declaredValue",
];

/// CSV template customers fill in: the fixed header row plus one example row.
pub fn export_template() -> String {
    let lines = [
        TEMPLATE_HEADERS.join(","),
        "Charizard,4/102,English,Base Set,1999,Pokemon,500".to_string(),
    ];
    lines.join("\n")
}

/// Parses a card batch from CSV text with header-based column matching.
///
/// Parsing is deliberately lenient: missing or unparseable fields fall back
/// to defaults (English, Pokemon, the current year, declared value 0) and a
/// malformed row never aborts the import. All correctness enforcement lives
/// in the validator, which reports field-level errors afterwards.
pub fn import_batch(input: &str) -> Result<Vec<CardRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input.as_bytes());

    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim() == name);
    let columns: Vec<Option<usize>> = TEMPLATE_HEADERS.iter().map(|h| column(h)).collect();

    let mut cards = Vec::new();
    for (row, record) in reader.records().enumerate() {
        match record {
            Ok(record) => cards.push(row_to_card(&columns, &record)),
            Err(e) => {
                tracing::warn!("skipping unreadable CSV row {}: {}", row + 1, e);
            }
        }
    }

    tracing::debug!("imported {} card(s) from CSV", cards.len());
    Ok(cards)
}

pub fn import_batch_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CardRecord>> {
    let content = std::fs::read_to_string(path)?;
    import_batch(&content)
}

fn row_to_card(columns: &[Option<usize>], record: &StringRecord) -> CardRecord {
    let field = |slot: usize| -> &str {
        columns[slot]
            .and_then(|i| record.get(i))
            .unwrap_or("")
            .trim()
    };

    let year = field(4);
    let year_of_release = if year.is_empty() {
        Utc::now().year().to_string()
    } else {
        year.to_string()
    };

    CardRecord {
        card_name: field(0).to_string(),
        card_number: field(1).to_string(),
        language: Language::parse(field(2)).unwrap_or_default(),
        set_name: field(3).to_string(),
        year_of_release,
        game_type: GameType::parse(field(5)).unwrap_or_default(),
        declared_value: Decimal::from_str(field(6)).unwrap_or(Decimal::ZERO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::validate::{validate, ValidationError};
    use crate::domain::model::{ServiceLevelKey, Submission};
    use rust_decimal_macros::dec;

    #[test]
    fn test_template_round_trip() {
        let cards = import_batch(&export_template()).unwrap();
        assert_eq!(cards.len(), 1);

        let card = &cards[0];
        assert_eq!(card.card_name, "Charizard");
        assert_eq!(card.card_number, "4/102");
        assert_eq!(card.language, Language::English);
        assert_eq!(card.set_name, "Base Set");
        assert_eq!(card.year_of_release, "1999");
        assert_eq!(card.game_type, GameType::Pokemon);
        assert_eq!(card.declared_value, dec!(500));
    }

    #[test]
    fn test_missing_game_type_defaults_to_pokemon_and_validates() {
        let csv = "cardName,cardNumber,language,setName,yearOfRelease,declaredValue\n\
                   Pikachu,58/102,English,Base Set,1999,50";
        let cards = import_batch(csv).unwrap();
        assert_eq!(cards[0].game_type, GameType::Pokemon);

        let report = validate(
            &Submission {
                grading_company: "PSA".to_string(),
                service_level: ServiceLevelKey::Economy,
                cards,
            },
            &Catalog::default(),
        );
        assert!(report.is_valid());
    }

    #[test]
    fn test_unparsable_declared_value_defaults_to_zero_then_fails_validation() {
        let csv = "cardName,cardNumber,language,setName,yearOfRelease,gameType,declaredValue\n\
                   Luffy,OP01-003,Japanese,Romance Dawn,2022,One Piece,abc";
        let cards = import_batch(csv).unwrap();
        assert_eq!(cards[0].declared_value, Decimal::ZERO);
        assert_eq!(cards[0].game_type, GameType::OnePiece);

        let report = validate(
            &Submission {
                grading_company: "TAG".to_string(),
                service_level: ServiceLevelKey::Regular,
                cards,
            },
            &Catalog::default(),
        );
        assert!(report.errors().iter().any(|e| matches!(
            e,
            ValidationError::Field { field: "declaredValue", message, .. }
                if message.contains("must be positive")
        )));
    }

    #[test]
    fn test_missing_year_defaults_to_current_year() {
        let csv = "cardName,cardNumber,language,setName,yearOfRelease,gameType,declaredValue\n\
                   Mewtwo,10/102,English,Base Set,,Pokemon,75";
        let cards = import_batch(csv).unwrap();
        assert_eq!(cards[0].year_of_release, Utc::now().year().to_string());
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let csv = "cardName,cardNumber,language,setName,yearOfRelease,gameType,declaredValue\n\
                   Eevee,51/64,Elvish,Jungle,1999,Pokemon,40";
        let cards = import_batch(csv).unwrap();
        assert_eq!(cards[0].language, Language::English);
    }

    #[test]
    fn test_ragged_rows_do_not_abort_import() {
        let csv = "cardName,cardNumber,language,setName,yearOfRelease,gameType,declaredValue\n\
                   Charizard,4/102,English,Base Set,1999,Pokemon,500\n\
                   Blastoise,2/102\n\
                   Venusaur,15/102,English,Base Set,1999,Pokemon,300";
        let cards = import_batch(csv).unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[1].card_name, "Blastoise");
        assert_eq!(cards[1].set_name, "");
        assert_eq!(cards[1].declared_value, Decimal::ZERO);
    }

    #[test]
    fn test_reordered_columns_match_by_header() {
        let csv = "declaredValue,cardName,cardNumber,setName,yearOfRelease,gameType,language\n\
                   250,Umbreon,197/203,Evolving Skies,2021,Pokemon,Japanese";
        let cards = import_batch(csv).unwrap();
        assert_eq!(cards[0].card_name, "Umbreon");
        assert_eq!(cards[0].language, Language::Japanese);
        assert_eq!(cards[0].declared_value, dec!(250));
    }
}
