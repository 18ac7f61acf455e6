// ABOUTME: Dosirak CLI - looks up one day's school meal plan and prints the report
// ABOUTME: Thin presentation collaborator around the date-in, markup-out pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dosirak Contributors
//!
//! Usage:
//! ```bash
//! # Today's meal plan
//! dosirak
//!
//! # A specific date
//! dosirak --date 2025-03-05
//!
//! # Debug logging
//! dosirak --date 2025-03-05 --verbose
//! ```

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::error;

use dosirak::config::ServiceConfig;
use dosirak::logging;
use dosirak::pipeline::run_query;
use dosirak::providers::{http_client, ReqwestTransport};

#[derive(Parser)]
#[command(
    name = "dosirak",
    about = "School meal lookup client",
    long_about = "Fetches one day's school meal plan from the NEIS API and prints an allergy-annotated HTML report."
)]
struct Cli {
    /// Query date (YYYY-MM-DD); defaults to today
    #[arg(long, value_parser = parse_cli_date)]
    date: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Validate the date argument before the pipeline is ever invoked
fn parse_cli_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{raw}': expected YYYY-MM-DD ({e})"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(if cli.verbose { "debug" } else { "info" })?;

    let config = ServiceConfig::from_env();
    http_client::initialize_shared_client(&config);

    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let transport = ReqwestTransport::new();

    match run_query(&transport, &config, date).await {
        Ok(markup) => {
            println!("{markup}");
            Ok(())
        }
        Err(err) => {
            error!("meal lookup failed: {err}");
            Err(err.into())
        }
    }
}
