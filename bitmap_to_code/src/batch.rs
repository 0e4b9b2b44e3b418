/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::code::CodeStyle;
use crate::code::reader::read_code_file;
use crate::code::writer::write_code_file;
use crate::codec::ImageCodec;
use crate::error::{Error, Result};
use crate::utils::fs::is_blank;

/// What a run did with each of its inputs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub written: usize,
    /// Destination already existed and replacing was off.
    pub skipped: usize,
    /// Source had no byte literals in it.
    pub empty: usize,
}

/// Turns every code file directly inside `code_dir` into
/// `<output_dir>/<file name>.bmp`.
///
/// Files are visited in name order. The first failing file aborts the run;
/// outputs written before it are kept.
pub fn create_bitmaps<C: ImageCodec + ?Sized>(
    codec: &C,
    code_dir: &Path,
    output_dir: &Path,
    replace: bool,
) -> Result<Report> {
    require("code", code_dir)?;
    require("output", output_dir)?;

    if !code_dir.exists() {
        return Err(Error::NotFound(code_dir.to_path_buf()));
    }
    if !code_dir.is_dir() {
        return Err(Error::argument(format!(
            "code: {} is not a folder",
            code_dir.display()
        )));
    }

    let mut report = Report::default();

    for source in list_files(code_dir)? {
        let bytes = read_code_file(&source)?;
        if bytes.is_empty() {
            debug!("{}: no byte literals, skipping", source.display());
            report.empty += 1;
            continue;
        }

        let Some(name) = source.file_name() else {
            continue;
        };
        let mut name = name.to_os_string();
        name.push(".bmp");
        let target = output_dir.join(name);

        if target.exists() && !replace {
            debug!("{} exists, skipping", target.display());
            report.skipped += 1;
            continue;
        }

        codec.bytes_to_image_file(&bytes, &target)?;
        info!("wrote {} ({} bytes)", target.display(), bytes.len());
        report.written += 1;
    }

    Ok(report)
}

/// Writes the bytes of the image at `bitmap` as a byte-array source file.
pub fn create_code<C: ImageCodec + ?Sized>(
    codec: &C,
    bitmap: &Path,
    output: &Path,
    replace: bool,
    style: &CodeStyle,
) -> Result<Report> {
    require("bitmap", bitmap)?;
    require("output", output)?;

    if !bitmap.exists() {
        return Err(Error::NotFound(bitmap.to_path_buf()));
    }
    if bitmap.is_dir() {
        return Err(Error::argument(format!(
            "bitmap: {} is a folder",
            bitmap.display()
        )));
    }

    let bytes = codec.image_file_to_bytes(bitmap)?;

    if output.exists() && !replace {
        debug!("{} exists, skipping", output.display());
        return Ok(Report {
            skipped: 1,
            ..Default::default()
        });
    }

    write_code_file(output, &bytes, style)?;
    info!("wrote {} ({} bytes)", output.display(), bytes.len());

    Ok(Report {
        written: 1,
        ..Default::default()
    })
}

fn require(name: &str, path: &Path) -> Result<()> {
    if is_blank(path) {
        return Err(Error::argument(format!("{name} must not be blank")));
    }
    Ok(())
}

fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        } else {
            debug!("{} is not a file, ignoring", path.display());
        }
    }

    files.sort();
    Ok(files)
}
