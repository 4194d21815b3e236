//! notepack CLI - converts one instrument of a MIDI file into `DEFW` words
//! for an assembler-based sound driver.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use notepack_cli::{commands, error_code, logging};

mod cli_args;

use cli_args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = commands::convert::run(
        &cli.input,
        cli.instrument,
        cli.output.as_deref(),
        cli.annotate,
    );

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!("{:?}", e);
            match error_code(&e) {
                Some(code) => eprintln!("{}: {} {}", "error".red(), e, format!("[{}]", code).dimmed()),
                None => eprintln!("{}: {}", "error".red(), e),
            }
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parses_input_only() {
        let cli = Cli::try_parse_from(["notepack", "song.mid"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("song.mid"));
        assert_eq!(cli.instrument, 0);
        assert!(cli.output.is_none());
        assert!(!cli.annotate);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parses_all_options() {
        let cli = Cli::try_parse_from([
            "notepack",
            "song.mid",
            "-i",
            "2",
            "--output",
            "song.asm",
            "--annotate",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.instrument, 2);
        assert_eq!(cli.output, Some(PathBuf::from("song.asm")));
        assert!(cli.annotate);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_requires_input() {
        let err = Cli::try_parse_from(["notepack"]).err().unwrap();
        assert!(err.to_string().contains("<INPUT>"));
    }

    #[test]
    fn test_cli_rejects_negative_instrument() {
        assert!(Cli::try_parse_from(["notepack", "song.mid", "--instrument", "-1"]).is_err());
    }
}
