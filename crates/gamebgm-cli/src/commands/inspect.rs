//! Inspect command implementation
//!
//! Reads a WAV file and reports its format, length, peak and PCM hash. Useful
//! for checking that two runs with the same seed produced the same audio.

use anyhow::{Context, Result};
use colored::Colorize;
use gamebgm_backend_audio::wav::{compute_pcm_hash, decode_pcm16, extract_pcm_data, parse_header};
use std::fs;
use std::process::ExitCode;

use super::json_output::{error_codes, print_json, InspectOutput, JsonError, WavSummary};

/// Summarizes a WAV buffer. Returns `None` if the header or data chunk is
/// malformed.
pub fn summarize_wav(wav_data: &[u8]) -> Option<WavSummary> {
    let header = parse_header(wav_data)?;
    let pcm = decode_pcm16(extract_pcm_data(wav_data)?);
    let peak_sample = pcm.iter().map(|&s| (s as i32).abs()).max().unwrap_or(0);
    Some(WavSummary {
        sample_rate: header.format.sample_rate,
        channels: header.format.channels,
        bits_per_sample: header.format.bits_per_sample,
        num_samples: header.num_frames(),
        duration_seconds: header.duration_seconds(),
        peak_sample,
        pcm_hash: compute_pcm_hash(wav_data)?,
    })
}

/// Run the inspect command
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

fn run_human(input: &str) -> Result<ExitCode> {
    println!("{} {}", "Inspecting:".cyan().bold(), input);
    let data = fs::read(input).with_context(|| format!("Failed to read WAV file: {}", input))?;

    let Some(summary) = summarize_wav(&data) else {
        println!("\n{} Not a canonical WAV file", "FAILED".red().bold());
        return Ok(ExitCode::from(1));
    };

    println!(
        "{} {} Hz, {} ch, {}-bit",
        "Format:".dimmed(),
        summary.sample_rate,
        summary.channels,
        summary.bits_per_sample
    );
    println!(
        "{} {} samples ({:.3}s)",
        "Length:".dimmed(),
        summary.num_samples,
        summary.duration_seconds
    );
    println!("{} {}", "Peak:".dimmed(), summary.peak_sample);
    println!("{} {}", "PCM hash:".dimmed(), summary.pcm_hash);
    println!("\n{} WAV file is valid", "SUCCESS".green().bold());
    Ok(ExitCode::SUCCESS)
}

fn run_json(input: &str) -> Result<ExitCode> {
    let output = match fs::read(input) {
        Err(err) => InspectOutput {
            success: false,
            errors: vec![JsonError::new(
                error_codes::FILE_READ,
                format!("Failed to read WAV file: {}: {}", input, err),
            )],
            result: None,
        },
        Ok(data) => match summarize_wav(&data) {
            Some(summary) => InspectOutput {
                success: true,
                errors: Vec::new(),
                result: Some(summary),
            },
            None => InspectOutput {
                success: false,
                errors: vec![JsonError::new(
                    error_codes::INVALID_WAV,
                    format!("Not a canonical WAV file: {}", input),
                )],
                result: None,
            },
        },
    };
    print_json(&output)?;
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
