//! gamebgm CLI - Command-line interface for procedural game music
//!
//! This binary provides commands for generating WAV files from mood-driven
//! requests, validating requests and inspecting generated audio.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use cli_args::{Cli, Commands};
use gamebgm_cli::commands;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            request,
            out,
            meta,
            json,
        } => commands::generate::run(&request, &out, meta.as_deref(), json),
        Commands::Validate { request, json } => commands::validate::run(&request, json),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "gamebgm", "generate", "--mood", "tense", "--tempo", "160", "--duration", "20",
            "--seed", "7", "--style", "chiptune", "--style", "ambient", "--out", "track.wav",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                request,
                out,
                meta,
                json,
            } => {
                assert_eq!(request.mood.as_deref(), Some("tense"));
                assert_eq!(request.tempo, Some(160.0));
                assert_eq!(request.duration, Some(20.0));
                assert_eq!(request.seed, Some(7));
                assert_eq!(request.styles, vec!["chiptune", "ambient"]);
                assert_eq!(out, "track.wav");
                assert_eq!(meta, None);
                assert!(!json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_request_file() {
        let cli = Cli::try_parse_from([
            "gamebgm", "-v", "generate", "-r", "req.json", "-o", "out.wav", "--meta", "out.json",
            "--json",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Generate {
                request, meta, json, ..
            } => {
                assert_eq!(request.request.as_deref(), Some("req.json"));
                assert_eq!(meta.as_deref(), Some("out.json"));
                assert!(json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_generate_requires_out() {
        assert!(Cli::try_parse_from(["gamebgm", "generate", "--mood", "calm"]).is_err());
    }

    #[test]
    fn test_cli_parses_validate() {
        let cli = Cli::try_parse_from([
            "gamebgm", "validate", "--mood", "calm", "--tempo", "-5", "--duration", "1000",
        ])
        .unwrap();
        match cli.command {
            Commands::Validate { request, json } => {
                assert_eq!(request.tempo, Some(-5.0));
                assert_eq!(request.duration, Some(1000.0));
                assert!(!json);
            }
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_cli_parses_inspect() {
        let cli = Cli::try_parse_from(["gamebgm", "inspect", "-i", "track.wav", "--json"]).unwrap();
        match cli.command {
            Commands::Inspect { input, json } => {
                assert_eq!(input, "track.wav");
                assert!(json);
            }
            _ => panic!("expected inspect command"),
        }
    }
}
