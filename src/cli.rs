//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ebstage - Elastic Beanstalk bundle stager
#[derive(Parser, Debug)]
#[command(
    name = "ebstage",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Stage and archive Elastic Beanstalk deployment bundles",
    long_about = "ebstage renders the configuration files an Elastic Beanstalk Node.js \
                  deployment needs, merges caller-supplied overrides, and compresses the \
                  staged bundle into a single archive ready for upload."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stage the bundle and produce the archive
    Prepare(PrepareArgs),

    /// Show version information
    #[command(hide = true)]
    Version,
}

#[derive(Parser, Debug)]
pub struct PrepareArgs {
    /// Path to the bundle configuration file
    #[arg(long, short = 'c', default_value = "ebstage.yaml", env = "EBSTAGE_CONFIG")]
    pub config: PathBuf,

    /// Stage only; skip the archiving stage
    #[arg(long)]
    pub no_archive: bool,

    /// Suppress step and progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_prepare_defaults() {
        let cli = Cli::parse_from(["ebstage", "prepare"]);
        match cli.command {
            Commands::Prepare(args) => {
                assert_eq!(args.config, PathBuf::from("ebstage.yaml"));
                assert!(!args.no_archive);
                assert!(!args.quiet);
            }
            _ => panic!("expected prepare command"),
        }
    }

    #[test]
    fn test_cli_parsing_prepare_with_config() {
        let cli = Cli::parse_from(["ebstage", "prepare", "--config", "deploy/app.yaml"]);
        match cli.command {
            Commands::Prepare(args) => {
                assert_eq!(args.config, PathBuf::from("deploy/app.yaml"));
            }
            _ => panic!("expected prepare command"),
        }
    }

    #[test]
    fn test_cli_parsing_quiet() {
        let cli = Cli::parse_from(["ebstage", "prepare", "--quiet"]);
        match cli.command {
            Commands::Prepare(args) => assert!(args.quiet),
            _ => panic!("expected prepare command"),
        }
    }

    #[test]
    fn test_cli_parsing_no_archive() {
        let cli = Cli::parse_from(["ebstage", "prepare", "--no-archive"]);
        match cli.command {
            Commands::Prepare(args) => assert!(args.no_archive),
            _ => panic!("expected prepare command"),
        }
    }
}
