//! ssllabs - query the Qualys SSL Labs assessment API
//!
//! Without flags prints the grade of the given host. `-d` prints the full
//! report, `-e` the cached endpoint data, `-I` the engine info.

use anyhow::Context;
use clap::Parser;
use console::style;
use ssllabs::cli::{Cli, OutputFormat};
use ssllabs::client::{grade_from_report, Client};
use ssllabs::output;
use ssllabs::utils::progress::AssessmentSpinner;
use ssllabs::{LabsError, NO_GRADE};
use std::future::Future;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = match cli.verbosity() {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let settings = cli.settings()?;
    let client = Client::with_config(settings.client_config())?;

    if cli.info {
        let info = client.info().await.context("fetching SSL Labs info")?;
        return match cli.format {
            OutputFormat::Json => output::print_json(&info),
            OutputFormat::Table => {
                output::print_info(&info);
                Ok(())
            }
        };
    }

    if cli.status_codes {
        let codes = client.get_status_codes().await.context("fetching status codes")?;
        return match cli.format {
            OutputFormat::Json => output::print_json(&codes),
            OutputFormat::Table => {
                output::print_status_codes(&codes);
                Ok(())
            }
        };
    }

    let host = cli
        .normalized_host()
        .context("You must give at least one site name!")?;

    if cli.endpoint {
        let endpoint = client
            .get_endpoint_data(&host, &[])
            .await
            .with_context(|| format!("impossible to get endpoint data for '{}'", host))?;
        return match cli.format {
            OutputFormat::Json => output::print_json(&endpoint),
            OutputFormat::Table => {
                output::print_endpoint(&host, &endpoint);
                Ok(())
            }
        };
    }

    let spinner = (cli.format == OutputFormat::Table).then(|| AssessmentSpinner::start(&host, cli.force));

    if cli.detailed {
        let report = if cli.force {
            until_interrupted(client.analyze(&host, true, &[])).await
        } else {
            until_interrupted(client.get_detailed_report(&host, &[])).await
        };
        if let Some(spinner) = &spinner {
            spinner.finish();
        }
        let report = report.with_context(|| format!("impossible to get report for '{}'", host))?;

        return match cli.format {
            OutputFormat::Json => output::print_json(&report),
            OutputFormat::Table => {
                output::print_report(&report, true);
                Ok(())
            }
        };
    }

    let grade = if cli.force {
        until_interrupted(client.analyze(&host, true, &[]))
            .await
            .and_then(|report| grade_from_report(&report))
    } else {
        until_interrupted(client.get_grade(&host, &[])).await
    };
    if let Some(spinner) = &spinner {
        spinner.finish();
    }

    print_grade_result(&host, grade, cli.format)
}

/// Drop `op` and report it cancelled when Ctrl-C arrives first
async fn until_interrupted<T>(op: impl Future<Output = Result<T, LabsError>>) -> Result<T, LabsError> {
    tokio::select! {
        res = op => res,
        _ = tokio::signal::ctrl_c() => Err(LabsError::Cancelled),
    }
}

fn print_grade_result(
    host: &str,
    grade: Result<String, LabsError>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match (format, grade) {
        (OutputFormat::Json, Ok(grade)) => output::print_json(&output::GradeOutput {
            host,
            grade: &grade,
            error: None,
        }),
        (OutputFormat::Json, Err(e)) => {
            output::print_json(&output::GradeOutput {
                host,
                grade: e.fallback_grade(),
                error: Some(e.to_string()),
            })?;
            Err(e).with_context(|| format!("impossible to get grade for '{}'", host))
        }
        (OutputFormat::Table, Ok(grade)) => {
            output::print_grade(host, &grade);
            Ok(())
        }
        (OutputFormat::Table, Err(e)) => {
            if matches!(e, LabsError::RemoteStatus { .. } | LabsError::NoEndpoint) {
                output::print_grade(host, NO_GRADE);
            }
            Err(e).with_context(|| format!("impossible to get grade for '{}'", host))
        }
    }
}
