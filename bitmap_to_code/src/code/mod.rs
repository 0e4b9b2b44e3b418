/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! The C byte-array source format:
//!
//! ```text
//! static const unsigned char myImage[3] = {
//! 0x42, 0x4D, 0x00
//! };
//! ```

pub mod reader;
pub mod writer;

use std::num::NonZeroUsize;

use crate::error::{Error, Result};

pub const DEFAULT_NAME: &str = "myImage";

pub const DEFAULT_PER_LINE: NonZeroUsize = NonZeroUsize::new(40).unwrap();

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// How the writer lays out an array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeStyle {
    pub name: String,
    pub per_line: NonZeroUsize,
    pub line_ending: &'static str,
}

impl CodeStyle {
    /// Default layout with a different array identifier.
    pub fn named(name: &str) -> Result<Self> {
        if !is_identifier(name) {
            return Err(Error::argument(format!(
                "`{name}` is not a valid C identifier"
            )));
        }

        Ok(CodeStyle {
            name: name.to_string(),
            ..Default::default()
        })
    }
}

impl Default for CodeStyle {
    fn default() -> Self {
        CodeStyle {
            name: DEFAULT_NAME.to_string(),
            per_line: DEFAULT_PER_LINE,
            line_ending: LINE_ENDING,
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert!(CodeStyle::named("splash_2").is_ok());
        assert!(CodeStyle::named("_x").is_ok());
        assert!(CodeStyle::named("").is_err());
        assert!(CodeStyle::named("2fast").is_err());
        assert!(CodeStyle::named("my-image").is_err());
    }

    #[test]
    fn default_layout() {
        let style = CodeStyle::default();
        assert_eq!(style.name, "myImage");
        assert_eq!(style.per_line.get(), 40);
    }
}
