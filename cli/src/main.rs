//! # rawgen-cli
//!
//! Command-line front end for the rawgen generator.
//!
//! ## Installation
//!
//! ```bash
//! cargo install rawgen-cli
//! ```
//!
//! ## Usage
//!
//! - `rawgen <path>` - Regenerate every raw-importing `.rs` file under `path`
//! - `rawgen -v <path>` - Same, tracing each walk and classification decision
//!
//! Set `RUST_LOG` to override the log filter entirely.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use rawgen::{Config, Generator};
use std::path::PathBuf;
use std::process;
use tracing::debug;

mod telemetry;

#[derive(Parser, Debug)]
#[command(name = "rawgen")]
#[command(about = "Generate exported types and binary codecs for raw records", long_about = None)]
#[command(version)]
struct Cli {
    /// File or directory to regenerate
    path: PathBuf,

    /// Enable verbose trace output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    telemetry::init(cli.verbose)?;

    let generator = Generator::new(Config::default()).context("invalid generator config")?;
    debug!("regenerating under {}", cli.path.display());
    generator.run(&cli.path, |path, _| {
        println!("OK {}", path.display());
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_path_and_verbose() {
        let cli = Cli::try_parse_from(["rawgen", "-v", "src"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("src"));
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["rawgen", "src"]).unwrap();
        assert!(!cli.verbose);
    }

    #[test]
    fn test_path_is_required() {
        assert!(Cli::try_parse_from(["rawgen"]).is_err());
    }

    #[test]
    fn test_run_fails_on_missing_root() {
        let dir = std::env::temp_dir().join("rawgen-cli-missing-root");
        let arg = dir.to_string_lossy().to_string();
        let cli = Cli::try_parse_from(["rawgen", "-v", arg.as_str()]).unwrap();

        let err = run(cli).unwrap_err();
        assert!(err.to_string().starts_with("file not found: "), "{}", err);
    }

    #[test]
    fn test_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["rawgen", "a", "b"]).is_err());
        assert!(Cli::try_parse_from(["rawgen", "--config", "x", "src"]).is_err());
    }
}
