//! Command implementations

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::app::{AppContainer, DocsPlan, DocsTarget};
use crate::cli::args::{ConvertArgs, DocsArgs, ImpliedArgs};
use crate::config::AppConfig;
use crate::domain::model::{Odds, OddsFormat, OddsInput};
use crate::domain::probability::BookSummary;
use crate::domain::rules::{decimal_to_odds_many, odds_to_decimal_many};

/// One converted quote
#[derive(Debug, Serialize)]
pub struct ConversionRow {
    pub input: String,
    pub decimal: f64,
    pub output: Odds,
}

/// Result of the convert command
#[derive(Debug, Serialize)]
pub struct ConversionReport {
    pub from: OddsFormat,
    pub to: OddsFormat,
    pub results: Vec<ConversionRow>,
}

/// Execute the convert command
pub fn convert(args: ConvertArgs, config: &AppConfig) -> Result<()> {
    let (from, to) = config.resolve_formats(
        parse_format(args.from.as_deref())?,
        parse_format(args.to.as_deref())?,
    );
    info!("Converting {} quote(s) from {} to {}", args.odds.len(), from, to);

    let report = build_conversion_report(&args.odds, from, to)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize conversion report to JSON")?;
        println!("{}", json);
    } else {
        for row in &report.results {
            println!("{}", row.output);
        }
    }
    Ok(())
}

/// Convert raw command-line quotes
pub fn build_conversion_report(
    odds: &[String],
    from: OddsFormat,
    to: OddsFormat,
) -> Result<ConversionReport> {
    let inputs: Vec<OddsInput> = odds.iter().map(|o| OddsInput::from(o.as_str())).collect();
    let decimals = odds_to_decimal_many(&inputs, Some(from))
        .with_context(|| format!("Failed to read {} odds", from))?;
    let outputs = decimal_to_odds_many(&decimals, Some(to))
        .with_context(|| format!("Failed to express odds as {}", to))?;

    let results = odds
        .iter()
        .zip(decimals)
        .zip(outputs)
        .map(|((input, decimal), output)| ConversionRow {
            input: input.clone(),
            decimal,
            output,
        })
        .collect();

    Ok(ConversionReport { from, to, results })
}

/// Execute the implied command
pub fn implied(args: ImpliedArgs, config: &AppConfig) -> Result<()> {
    let (from, _) = config.resolve_formats(parse_format(args.from.as_deref())?, None);
    info!("Summarising a {}-way market in {} odds", args.odds.len(), from);

    let inputs: Vec<OddsInput> = args.odds.iter().map(|o| OddsInput::from(o.as_str())).collect();
    let decimals = odds_to_decimal_many(&inputs, Some(from))
        .with_context(|| format!("Failed to read {} odds", from))?;
    let summary = BookSummary::from_decimals(&decimals).context("Failed to summarise market")?;

    if args.json {
        let json = serde_json::to_string_pretty(&summary)
            .context("Failed to serialize market summary to JSON")?;
        println!("{}", json);
    } else {
        display_book_summary(&args.odds, &summary);
    }
    Ok(())
}

/// Execute a docs target
pub async fn docs(args: DocsArgs, config: &AppConfig, container: &dyn AppContainer) -> Result<()> {
    let mut docs_config = config.docs.clone();
    if let Some(source_dir) = args.source_dir {
        docs_config.source_dir = source_dir;
    }
    if let Some(build_dir) = args.build_dir {
        docs_config.build_dir = build_dir;
    }

    let target = DocsTarget::from(args.target);
    let plan = DocsPlan::for_target(target, &docs_config);

    if args.dry_run {
        for step in &plan.steps {
            println!("{}", step);
        }
        return Ok(());
    }

    let report = container
        .docs_interactor()
        .execute(&plan)
        .await
        .with_context(|| format!("{} failed", target))?;

    for removal in report.removals.iter().filter(|r| !r.existed) {
        info!("{} was already clean", removal.path.display());
    }
    info!("{} ran {} tool(s)", target, report.tools_run.len());
    Ok(())
}

fn parse_format(value: Option<&str>) -> Result<Option<OddsFormat>> {
    value
        .map(|text| text.parse::<OddsFormat>())
        .transpose()
        .context("Invalid odds format")
}

/// Display a market summary in human-readable format
fn display_book_summary(quotes: &[String], summary: &BookSummary) {
    let width = quotes.iter().map(|q| q.len()).max().unwrap_or(0);
    println!(
        "{:<width$}  {:>9}  {:>9}  {:>9}",
        "Odds",
        "Implied",
        "Fair",
        "Fair odds",
        width = width.max(4)
    );
    for (quote, leg) in quotes.iter().zip(&summary.legs) {
        println!(
            "{:<width$}  {:>8.2}%  {:>8.2}%  {:>9.3}",
            quote,
            leg.implied_probability * 100.0,
            leg.fair_probability * 100.0,
            leg.fair_decimal,
            width = width.max(4)
        );
    }
    println!("Overround: {:.2}%", summary.overround * 100.0);
}
