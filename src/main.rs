mod agents;
mod cli;
mod config;
mod error;
mod utils;
mod workflow;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;
use workflow::RunOptions;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        unsafe {
            std::env::set_var(utils::VERBOSE_ENV, "1");
        }
    }

    let path = cli.path.as_deref();
    let config = cli.config.as_deref();

    let result = match &cli.command {
        Commands::Update {
            replacements,
            keep_going,
        } => workflow::execute_update(
            RunOptions {
                path,
                config,
                pairs: &replacements.pairs,
            },
            *keep_going,
        ),
        Commands::Check { replacements, json } => workflow::execute_check(
            RunOptions {
                path,
                config,
                pairs: &replacements.pairs,
            },
            *json,
        ),
        Commands::List => workflow::execute_list(RunOptions {
            path,
            config,
            pairs: &[],
        }),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
