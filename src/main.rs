use card_grading::core::batch::{export_template, import_batch_from_path};
use card_grading::core::pricing::calculate_prices;
use card_grading::core::recommend::coverage_warning;
use card_grading::core::submit::{add_business_days, SubmissionService};
use card_grading::core::validate::validate;
use card_grading::domain::model::{ServiceLevelKey, Submission};
use card_grading::utils::{logger, validation::Validate};
use card_grading::{Catalog, CliConfig, GradingConfig, RestClient};
use chrono::Utc;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting card-grading CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if config.template {
        println!("{}", export_template());
        return Ok(());
    }

    let input = match &config.input {
        Some(path) => path,
        None => {
            eprintln!("❌ --input is required unless --template is given");
            std::process::exit(1);
        }
    };

    let service_level = ServiceLevelKey::parse(&config.service_level)
        .ok_or_else(|| anyhow::anyhow!("unknown service level '{}'", config.service_level))?;

    let catalog = Catalog::default();
    let cards = import_batch_from_path(input)?;
    tracing::info!("imported {} card(s) from {}", cards.len(), input);

    let submission = Submission {
        grading_company: config.company.clone(),
        service_level,
        cards,
    };

    let report = validate(&submission, &catalog);
    if !report.is_valid() {
        eprintln!(
            "❌ Submission has {} validation error(s):",
            report.errors().len()
        );
        for error in report.errors() {
            eprintln!("   - {}", error);
        }
        std::process::exit(1);
    }

    for (index, card) in submission.cards.iter().enumerate() {
        if let Some(recommended) = coverage_warning(
            &catalog,
            &submission.grading_company,
            submission.service_level,
            card.declared_value,
        )? {
            let name = &catalog
                .service_level(&submission.grading_company, recommended)?
                .name;
            println!(
                "⚠️  Card #{} ({}): declared value €{} requires {} service level or higher",
                index + 1,
                card.card_name,
                card.declared_value,
                name
            );
        }
    }

    let quote = calculate_prices(
        &catalog,
        &submission.grading_company,
        submission.service_level,
        submission.cards.len(),
    )?;
    let level = catalog.service_level(&submission.grading_company, submission.service_level)?;
    let estimated = add_business_days(Utc::now().date_naive(), level.days);

    println!("Company:              {}", submission.grading_company);
    println!("Service level:        {}", level.name);
    println!("Cards:                {}", submission.cards.len());
    println!("Price per card:       €{}", quote.price_per_card);
    println!("Subtotal:             €{}", quote.subtotal);
    println!("VAT (21%):            €{}", quote.vat_amount);
    println!("Total:                €{}", quote.total);
    println!("Estimated completion: {}", estimated.format("%B %-d, %Y"));

    if !config.submit {
        return Ok(());
    }

    let client = match &config.config {
        Some(path) => {
            let file_config = GradingConfig::from_file(path)?;
            file_config.validate()?;
            RestClient::from_config(&file_config)
        }
        None => RestClient::from_config(&config),
    };

    let service = SubmissionService::new(catalog, client.clone(), client);
    match service.submit(&submission).await {
        Ok(receipt) => {
            println!("✅ Submission accepted");
            println!("   Batch number: {}", receipt.batch_number);
            println!("   Entry number: {}", receipt.entry_number);
            println!("   Amount due:   €{}", receipt.quote.total);
        }
        Err(e) => {
            tracing::error!("submission failed: {}", e);
            eprintln!("❌ Submission failed: {}. Please try again.", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
