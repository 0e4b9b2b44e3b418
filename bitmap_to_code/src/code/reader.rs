/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Collects every byte literal from the lines of `reader` that start with `0x`.
/// Everything else (declaration, closing brace, comments) is ignored.
pub fn read_code<R: BufRead>(reader: R) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();

    for (idx, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        parse_line(&String::from_utf8_lossy(&line), idx + 1, &mut bytes)?;
    }

    Ok(bytes)
}

pub fn read_code_file(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    read_code(BufReader::new(file)).map_err(|e| e.in_file(path))
}

fn parse_line(line: &str, line_no: usize, out: &mut Vec<u8>) -> Result<()> {
    let line = line.trim_start_matches('\u{feff}').trim();
    if !line.starts_with("0x") {
        return Ok(());
    }

    for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let byte = parse_byte(token).ok_or_else(|| Error::Parse {
            path: None,
            line: line_no,
            token: token.to_string(),
        })?;
        out.push(byte);
    }

    Ok(())
}

fn parse_byte(token: &str) -> Option<u8> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    // from_str_radix also takes a sign
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    u8::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(src: &str) -> Result<Vec<u8>> {
        read_code(src.as_bytes())
    }

    #[test]
    fn skips_declaration_and_brace() {
        let src = "static const unsigned char myImage[2] = {\n0x01, 0x02\n};\n";
        assert_eq!(read(src).unwrap(), vec![1, 2]);
    }

    #[test]
    fn tolerates_trailing_commas_and_whitespace() {
        assert_eq!(read("   0x0A,  0x0B, \r\n").unwrap(), vec![10, 11]);
        assert_eq!(read("0x0A,,,0x0B,").unwrap(), vec![10, 11]);
    }

    #[test]
    fn keeps_order_across_lines() {
        let src = "0xFF, 0x00,\n// note\n0x7f,\n\t0x80";
        assert_eq!(read(src).unwrap(), vec![0xFF, 0x00, 0x7F, 0x80]);
    }

    #[test]
    fn nothing_to_extract() {
        assert!(read("").unwrap().is_empty());
        assert!(read("int x = 0x10;\n").unwrap().is_empty());
    }

    #[test]
    fn short_and_unprefixed_tokens() {
        assert_eq!(read("0x5, 7, 0XaB").unwrap(), vec![5, 7, 0xAB]);
    }

    #[test]
    fn rejects_bad_tokens() {
        for src in ["0x100", "0xGG", "0x", "0x01, +1", "0x01 0x02", "0x01, -0"] {
            assert!(matches!(read(src), Err(Error::Parse { .. })), "{src}");
        }
    }

    #[test]
    fn reports_line_number() {
        match read("static x[2] = {\n0x01,\n0x02, 0xQQ\n};") {
            Err(Error::Parse { line, token, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(token, "0xQQ");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn byte_order_mark_is_skipped() {
        assert_eq!(read("\u{feff}0x01, 0x02\n0x03").unwrap(), vec![1, 2, 3]);
        assert_eq!(read("\u{feff}  0x0A,").unwrap(), vec![10]);
    }

    #[test]
    fn binary_garbage_is_ignored() {
        let src: &[u8] = &[0xFF, 0xFE, b'\n', b'0', b'x', b'0', b'1'];
        assert_eq!(read_code(src).unwrap(), vec![1]);
    }

    #[test]
    fn missing_file() {
        let err = read_code_file(Path::new("/definitely/not/here.h")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
