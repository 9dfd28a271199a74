//! The persona command: prompt, run, report.

use std::io::{BufRead, IsTerminal, Write};

use anyhow::Result;
use console::style;
use dialoguer::Input;

use personagen_core::fetch::source::RecordSource;
use personagen_core::identity::extract_username;
use personagen_core::service::fs::FileSystem;
use personagen_core::service::persona::PersonaService;
use personagen_types::error::PersonaError;
use personagen_types::persona::PersonaReport;

use crate::cli::Cli;
use crate::cli::progress::CliProgress;
use crate::state::AppState;

const URL_PROMPT: &str = "Enter Reddit user profile URL";

/// Run one persona generation.
pub async fn run(state: &AppState, cli: &Cli) -> Result<()> {
    let input = match cli.url {
        Some(ref url) => url.clone(),
        None => read_profile_url()?,
    };

    execute(&state.persona_service, cli, &input, &mut std::io::stdout()).await
}

/// Resolve `input` to an account and run the pipeline for it.
///
/// Invalid URLs and accounts without content are reported and end the run
/// normally; generation and write failures are returned as errors.
async fn execute<S: RecordSource, F: FileSystem>(
    service: &PersonaService<S, F>,
    cli: &Cli,
    input: &str,
    out: &mut impl Write,
) -> Result<()> {
    let username = match extract_username(input.trim()) {
        Ok(username) => username,
        Err(err) => {
            tracing::debug!(error = %err, "rejected profile URL");
            writeln!(out, "Invalid Reddit URL.")?;
            return Ok(());
        }
    };

    writeln!(out, "Analyzing user: {}", style(&username).cyan())?;
    out.flush()?;

    let progress = CliProgress::new(cli.quiet);
    let outcome = service.run(&username, &progress).await;
    progress.clear();

    report_outcome(outcome, cli, out)
}

fn report_outcome(
    outcome: Result<PersonaReport, PersonaError>,
    cli: &Cli,
    out: &mut impl Write,
) -> Result<()> {
    match outcome {
        Ok(report) => {
            print_report(&report, cli.quiet, out)?;
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            }
            Ok(())
        }
        Err(PersonaError::NoContent(_)) => {
            writeln!(out, "No content found for this user.")?;
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Prompt for the profile URL.
///
/// Falls back to a plain line read when stdin is not a terminal.
fn read_profile_url() -> Result<String> {
    if std::io::stdin().is_terminal() {
        let url = Input::<String>::new()
            .with_prompt(URL_PROMPT)
            .allow_empty(true)
            .interact_text()?;
        return Ok(url);
    }

    print!("{URL_PROMPT}: ");
    std::io::stdout().flush()?;
    read_line(std::io::stdin().lock())
}

fn read_line(mut reader: impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn print_report(report: &PersonaReport, quiet: bool, out: &mut impl Write) -> Result<()> {
    if !quiet {
        for kind in &report.interrupted {
            writeln!(
                out,
                "  {} {}",
                style("i").blue().bold(),
                style(format!("{kind} listing ended early; persona uses partial data")).dim()
            )?;
        }
    }

    writeln!(out, "Persona saved to: {}", report.path.display())?;
    Ok(())
}
