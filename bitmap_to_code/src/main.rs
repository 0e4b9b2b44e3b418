/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

mod cli;

use std::process::ExitCode;

use anyhow::Context;
use bitmap_to_code::{CodeStyle, Error, StandardCodec, create_bitmaps, create_code};
use clap::{CommandFactory, Parser};
use tracing::info;
use tracing::level_filters::LevelFilter;

use crate::cli::{Cli, Command, parse_exit_code};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if err.print().is_err() {
                return ExitCode::FAILURE;
            }
            return ExitCode::from(parse_exit_code(err.kind()));
        }
    };

    let Some(command) = cli.command else {
        return match Cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    };

    let level = if cli.quiet {
        LevelFilter::WARN
    } else if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<Error>().map_or(1, Error::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    let codec = StandardCodec;

    match &command {
        Command::CreateBitmaps(args) => {
            let Some((code, output)) = args.paths() else {
                return show_help(command.name());
            };

            let report = create_bitmaps(&codec, &code, &output, args.replace)
                .with_context(|| format!("creating bitmaps from {}", code.display()))?;
            info!(
                "{} written, {} already existed, {} without data",
                report.written, report.skipped, report.empty
            );
        }
        Command::CreateCode(args) => {
            let Some((bitmap, output)) = args.paths() else {
                return show_help(command.name());
            };

            let style = CodeStyle::named(&args.name)?;
            let report = create_code(&codec, &bitmap, &output, args.replace, &style)
                .with_context(|| format!("creating code from {}", bitmap.display()))?;
            if report.skipped > 0 {
                info!("{} already exists, use --replace to overwrite", output.display());
            }
        }
    }

    Ok(())
}

fn show_help(subcommand: &str) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    if let Some(sub) = cmd.find_subcommand_mut(subcommand) {
        sub.print_help()?;
    }
    Ok(())
}
