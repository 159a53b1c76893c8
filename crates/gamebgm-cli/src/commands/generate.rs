//! Generate command implementation
//!
//! Builds a request from a file and/or flags, runs the engine and writes the
//! WAV file (and optionally the metadata JSON).

use anyhow::{Context, Result};
use colored::Colorize;
use gamebgm_backend_music::{generate_request, GenerateResult};
use gamebgm_spec::{BackendError, GenerationRequest};
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use tracing::debug;

use super::json_output::{
    error_codes, print_json, GenerateOutput, GenerateSummary, JsonError,
};
use crate::input::{clock_seed, RequestArgs};

/// Run the generate command
///
/// # Arguments
/// * `args` - Request file and flag overrides
/// * `out` - Output WAV path
/// * `meta` - Optional metadata JSON path
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success, 1 rejected request or I/O failure
pub fn run(args: &RequestArgs, out: &str, meta: Option<&str>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args, out, meta)
    } else {
        run_human(args, out, meta)
    }
}

/// Fills in a wall-clock seed when the request has no usable one.
pub fn with_default_seed(mut request: GenerationRequest) -> GenerationRequest {
    if request.seed_u32().is_none() {
        let seed = clock_seed();
        debug!(seed, "no seed given, using clock seed");
        request.seed = Some(seed as f64);
    }
    request
}

/// Writes the WAV file and, if requested, the metadata file.
pub fn write_outputs(result: &GenerateResult, out: &Path, meta: Option<&Path>) -> Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(out, result.wav_bytes())
        .with_context(|| format!("Failed to write WAV file: {}", out.display()))?;

    if let Some(meta) = meta {
        let json = result
            .metadata
            .to_json_pretty()
            .context("Failed to serialize metadata")?;
        fs::write(meta, json)
            .with_context(|| format!("Failed to write metadata file: {}", meta.display()))?;
    }
    Ok(())
}

fn run_human(args: &RequestArgs, out: &str, meta: Option<&str>) -> Result<ExitCode> {
    let start = Instant::now();

    let request = with_default_seed(args.to_request()?);
    println!(
        "{} mood={} tempo={} duration={} seed={}",
        "Generating:".cyan().bold(),
        request.mood.as_deref().unwrap_or("?"),
        fmt_opt(request.tempo),
        fmt_opt(request.duration),
        request.seed_u32().unwrap_or_default()
    );

    let result = match generate_request(&request) {
        Ok(result) => result,
        Err(err) => {
            println!(
                "  {} [{}] {}",
                "x".red(),
                err.code().red(),
                err.message()
            );
            println!("\n{} Request rejected", "FAILED".red().bold());
            return Ok(ExitCode::from(1));
        }
    };

    write_outputs(&result, Path::new(out), meta.map(Path::new))?;

    let m = &result.metadata;
    println!(
        "{} {} ({}, {} chords, {} melody notes)",
        "Key:".dimmed(),
        m.key.name,
        m.synth_preset.lead_preset,
        m.chords.len(),
        m.melody.len()
    );
    if result.tempo_bpm_actual != request.tempo.unwrap_or_default()
        || result.duration_seconds_actual != request.duration.unwrap_or_default()
    {
        println!(
            "  {} clamped to tempo={} duration={}",
            "!".yellow(),
            result.tempo_bpm_actual,
            result.duration_seconds_actual
        );
    }
    println!("{} {}", "WAV:".dimmed(), out);
    if let Some(meta) = meta {
        println!("{} {}", "Metadata:".dimmed(), meta);
    }
    println!("{} {}", "PCM hash:".dimmed(), &result.pcm_hash()[..16]);

    println!(
        "\n{} Generated {} bytes ({}ms)",
        "SUCCESS".green().bold(),
        result.wav_bytes().len(),
        start.elapsed().as_millis()
    );
    Ok(ExitCode::SUCCESS)
}

fn run_json(args: &RequestArgs, out: &str, meta: Option<&str>) -> Result<ExitCode> {
    let request = match args.to_request() {
        Ok(request) => with_default_seed(request),
        Err(err) => {
            let code = err.code();
            let message = format!("{:#}", anyhow::Error::from(err));
            return fail(JsonError::new(code, message));
        }
    };

    let result = match generate_request(&request) {
        Ok(result) => result,
        Err(err) => return fail(JsonError::from_backend(&err)),
    };

    if let Err(err) = write_outputs(&result, Path::new(out), meta.map(Path::new)) {
        return fail(JsonError::new(error_codes::FILE_WRITE, format!("{:#}", err)));
    }

    let output = GenerateOutput {
        success: true,
        errors: Vec::new(),
        result: Some(GenerateSummary {
            wav_path: out.to_string(),
            metadata_path: meta.map(str::to_string),
            bytes: result.wav_bytes().len(),
            pcm_hash: result.pcm_hash().to_string(),
            duration_seconds: result.duration_seconds_actual,
            tempo_bpm: result.tempo_bpm_actual,
            metadata: result.metadata,
        }),
    };
    print_json(&output)?;
    Ok(ExitCode::SUCCESS)
}

fn fail(error: JsonError) -> Result<ExitCode> {
    print_json(&GenerateOutput {
        success: false,
        errors: vec![error],
        result: None,
    })?;
    Ok(ExitCode::from(1))
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "?".to_string(), |v| v.to_string())
}
