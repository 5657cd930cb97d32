// Footprint Report CLI
//
// Purpose: Calculate and explain the footprint for one survey JSON file
// Usage: cargo run --bin footprint_report -- survey.json [--json] [--model model.json]

use anyhow::Context;
use carbon_footprint_rust::explanation::{ExplanationGenerator, JsonFormatter, MarkdownFormatter};
use carbon_footprint_rust::validation::{check_result, unrecognized_labels, validate_survey};
use carbon_footprint_rust::{EmissionModel, FootprintCalculator, LifestyleSurvey};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Lifestyle survey JSON file
    survey: PathBuf,

    /// Print Markdown (default)
    #[arg(long, conflicts_with = "json")]
    markdown: bool,

    /// Print pretty JSON instead of Markdown
    #[arg(long)]
    json: bool,

    /// Emission model JSON override
    #[arg(long)]
    model: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carbon_footprint_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let contents = fs::read_to_string(&args.survey)
        .with_context(|| format!("Failed to read survey file: {:?}", args.survey))?;
    let survey: LifestyleSurvey = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse survey JSON: {:?}", args.survey))?;

    validate_survey(&survey)
        .map_err(|errors| {
            for error in errors.errors() {
                tracing::error!("{}", error);
            }
            errors
        })
        .context("Survey rejected")?;

    for field in unrecognized_labels(&survey) {
        tracing::warn!("Unrecognized label for {}, using fallback factors", field);
    }

    let model = match &args.model {
        Some(path) => EmissionModel::load(path)?,
        None => EmissionModel::STANDARD,
    };

    let report = FootprintCalculator::with_model(model).calculate_detailed(&survey);
    check_result(&report.result)
        .map_err(|errors| {
            for error in errors.errors() {
                tracing::error!("{}", error);
            }
            errors
        })
        .context("Footprint could not be represented")?;
    let explanation = ExplanationGenerator::generate(&report);

    if args.json && !args.markdown {
        println!("{}", JsonFormatter::format(&explanation)?);
    } else {
        print!("{}", MarkdownFormatter::format(&explanation));
    }

    Ok(())
}
