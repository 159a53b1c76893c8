//! Validate command implementation
//!
//! Validates a request without synthesizing anything and reports the values
//! the engine would actually use.

use anyhow::Result;
use colored::Colorize;
use gamebgm_backend_music::resolve_preset;
use gamebgm_spec::BackendError;
use std::process::ExitCode;

use super::json_output::{print_json, JsonError, ValidateOutput};
use crate::input::RequestArgs;

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(args: &RequestArgs, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args)
    } else {
        run_human(args)
    }
}

fn run_human(args: &RequestArgs) -> Result<ExitCode> {
    let request = args.to_request()?;
    println!(
        "{} {}",
        "Validating:".cyan().bold(),
        args.request.as_deref().unwrap_or("<flags>")
    );

    match request.validate() {
        Ok(params) => {
            let preset = resolve_preset(&params);
            println!("{} {}", "Mood:".dimmed(), params.mood);
            println!("{} {}", "Tempo:".dimmed(), params.tempo_bpm);
            println!("{} {}", "Duration:".dimmed(), params.duration_seconds);
            println!("{} {}", "Seed:".dimmed(), params.seed);
            println!("{} {}", "Lead preset:".dimmed(), preset.lead_preset);
            if request.tempo != Some(params.tempo_bpm)
                || request.duration != Some(params.duration_seconds)
            {
                println!("  {} out-of-range values were clamped", "!".yellow());
            }
            println!("\n{} Request is valid", "SUCCESS".green().bold());
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("  {} [{}] {}", "x".red(), err.code().red(), err.message());
            println!("\n{} Request is invalid", "FAILED".red().bold());
            Ok(ExitCode::from(1))
        }
    }
}

fn run_json(args: &RequestArgs) -> Result<ExitCode> {
    let request = match args.to_request() {
        Ok(request) => request,
        Err(err) => {
            let code = err.code();
            let message = format!("{:#}", anyhow::Error::from(err));
            print_json(&ValidateOutput {
                success: false,
                errors: vec![JsonError::new(code, message)],
                params: None,
            })?;
            return Ok(ExitCode::from(1));
        }
    };

    let (output, code) = match request.validate() {
        Ok(params) => (
            ValidateOutput {
                success: true,
                errors: Vec::new(),
                params: Some(params),
            },
            ExitCode::SUCCESS,
        ),
        Err(err) => (
            ValidateOutput {
                success: false,
                errors: vec![JsonError::from_backend(&err)],
                params: None,
            },
            ExitCode::from(1),
        ),
    };
    print_json(&output)?;
    Ok(code)
}
