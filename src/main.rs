mod cli;
mod config;
mod corrector;
mod definer;
mod enrich;
mod error;
mod gemini;
mod record;
mod table;
mod ui;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use console::Style;

use cli::{Cli, Command};
use config::NldConfig;
use enrich::Enricher;
use gemini::GeminiClient;
use ui::BatchProgress;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{} {err:#}", Style::new().red().bold().apply_to("error:"));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = NldConfig::load()?;
    if let Some(model) = &cli.model {
        config.model = model.clone();
    }
    if let Some(temperature) = cli.temperature {
        config.temperature = temperature;
    }

    match cli.command {
        Command::Check { input } => {
            let path = input.unwrap_or(config.input_path);
            let records = table::load_term_records(&path)?;
            println!(
                "{} terms and labels loaded from '{}'",
                records.len(),
                path.display()
            );
            Ok(())
        }
        Command::Run {
            input,
            output,
            review,
        } => {
            if let Some(path) = input {
                config.input_path = path;
            }
            if let Some(path) = output {
                config.output_path = path;
            }
            if let Some(path) = review {
                config.review_path = path;
            }
            config.validate()?;

            let records = table::load_term_records(&config.input_path)?;
            println!(
                "{} terms and labels loaded from '{}'",
                records.len(),
                config.input_path.display()
            );
            if cli.verbose {
                println!(
                    "model: {}, temperature: {}, pace: {}ms",
                    config.model, config.temperature, config.pace_ms
                );
            }

            let client = GeminiClient::new(
                config.api_key.clone(),
                config.model.clone(),
                config.temperature,
            );
            let enricher = Enricher::new(&client, Duration::from_millis(config.pace_ms));
            let progress = BatchProgress::start(records.len());

            let outcome = enricher.run(&records, &progress).await;
            progress.finish();

            table::write_success_table(&config.output_path, &outcome.successes)?;
            let review_written = table::write_review_table(&config.review_path, &outcome.review)?;
            progress.summary(
                outcome.successes.len(),
                outcome.review.len(),
                &config.output_path,
                review_written.then_some(config.review_path.as_path()),
            );
            Ok(())
        }
    }
}
