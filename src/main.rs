//! ebstage - Elastic Beanstalk bundle stager
//!
//! Stages the file tree of a Node.js Elastic Beanstalk deployment bundle
//! (rendered configuration, startup script, health check, caller overrides)
//! and compresses it into a single archive ready for upload.

use clap::Parser;

mod archive;
mod cli;
mod commands;
mod common;
mod config;
mod error;
mod names;
mod runtime;
mod stage;
mod template;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Prepare(args) => commands::prepare::run(args),
        Commands::Version => commands::version::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
