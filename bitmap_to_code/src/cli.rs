/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, Args, Parser, Subcommand};

/// Exit code for arguments clap could not make sense of.
pub const USAGE: u8 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "bitmap_to_code",
    version,
    about = "Convert images to C byte arrays and back",
    disable_help_flag = true,
    disable_version_flag = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[arg(short = 'h', long, short_alias = '?', action = ArgAction::Help, help = "Print help")]
    help: Option<bool>,

    #[arg(short = 'v', long, action = ArgAction::Version, help = "Print version")]
    version: Option<bool>,

    /// Also log skipped files
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// `None` when only global flags were given.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Turn every byte-array source in a folder into a .bmp file
    #[command(name = "createBitmaps", alias = "create-bitmaps")]
    CreateBitmaps(CreateBitmaps),
    /// Turn one image into a byte-array source file
    #[command(name = "createCode", alias = "create-code")]
    CreateCode(CreateCode),
}

/// Exit code for a parse that stopped early. Help and version output is not a
/// failure.
pub fn parse_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => USAGE,
    }
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateBitmaps(_) => "createBitmaps",
            Command::CreateCode(_) => "createCode",
        }
    }
}

#[derive(Debug, Args)]
#[command(disable_help_flag = true)]
pub struct CreateBitmaps {
    #[arg(short = 'h', long, short_alias = '?', action = ArgAction::Help, help = "Print help")]
    help: Option<bool>,

    /// Folder holding the byte-array sources
    #[arg(value_name = "CODE")]
    code_arg: Option<PathBuf>,

    /// Folder the images are written to
    #[arg(value_name = "OUTPUT")]
    output_arg: Option<PathBuf>,

    /// Same as CODE
    #[arg(short = 'c', long = "code", value_name = "PATH")]
    code: Option<PathBuf>,

    /// Same as OUTPUT
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Overwrite images that already exist
    #[arg(short = 'r', long)]
    pub replace: bool,
}

impl CreateBitmaps {
    /// `(code, output)`, or `None` if either is ambiguous or missing.
    pub fn paths(&self) -> Option<(PathBuf, PathBuf)> {
        Some((
            resolve(&self.code_arg, &self.code)?,
            resolve(&self.output_arg, &self.output)?,
        ))
    }
}

#[derive(Debug, Args)]
#[command(disable_help_flag = true)]
pub struct CreateCode {
    #[arg(short = 'h', long, short_alias = '?', action = ArgAction::Help, help = "Print help")]
    help: Option<bool>,

    /// Image to convert
    #[arg(value_name = "BITMAP")]
    bitmap_arg: Option<PathBuf>,

    /// Source file to write
    #[arg(value_name = "OUTPUT")]
    output_arg: Option<PathBuf>,

    /// Same as BITMAP
    #[arg(short = 'b', long = "bitmap", value_name = "PATH")]
    bitmap: Option<PathBuf>,

    /// Same as OUTPUT
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Overwrite the source file if it already exists
    #[arg(short = 'r', long)]
    pub replace: bool,

    /// Identifier of the generated array
    #[arg(long, default_value = bitmap_to_code::code::DEFAULT_NAME)]
    pub name: String,
}

impl CreateCode {
    /// `(bitmap, output)`, or `None` if either is ambiguous or missing.
    pub fn paths(&self) -> Option<(PathBuf, PathBuf)> {
        Some((
            resolve(&self.bitmap_arg, &self.bitmap)?,
            resolve(&self.output_arg, &self.output)?,
        ))
    }
}

/// A path may come positionally or as an option. Exactly one of them has to
/// be given; both or neither leaves it unset.
fn resolve(positional: &Option<PathBuf>, option: &Option<PathBuf>) -> Option<PathBuf> {
    match (positional, option) {
        (Some(path), None) | (None, Some(path)) => Some(path.clone()),
        _ => None,
    }
}
