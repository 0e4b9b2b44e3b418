/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::io::Write;
use std::path::Path;

use super::CodeStyle;
use crate::error::{Error, Result};
use crate::utils::fs::write_atomic;

/// Writes `bytes` as a `static const unsigned char` array.
///
/// Values are separated by `", "` and a line break follows every
/// `style.per_line`th value, counting from the start of the array.
pub fn write_code<W: Write>(out: &mut W, bytes: &[u8], style: &CodeStyle) -> Result<()> {
    if bytes.is_empty() {
        return Err(Error::EmptyBuffer);
    }

    let eol = style.line_ending;
    write!(
        out,
        "static const unsigned char {}[{}] = {{{eol}",
        style.name,
        bytes.len()
    )?;

    let per_line = style.per_line.get();
    for (i, byte) in bytes.iter().enumerate() {
        write!(out, "0x{byte:02X}")?;
        if i + 1 < bytes.len() {
            out.write_all(b", ")?;
        }
        if (i + 1) % per_line == 0 {
            out.write_all(eol.as_bytes())?;
        }
    }

    write!(out, "{eol}}};{eol}")?;
    Ok(())
}

/// Renders the whole array in memory and then swaps it into place.
pub fn write_code_file(path: &Path, bytes: &[u8], style: &CodeStyle) -> Result<()> {
    let mut text = Vec::with_capacity(bytes.len() * 6 + 64);
    write_code(&mut text, bytes, style)?;
    write_atomic(path, &text)?;
    Ok(())
}
