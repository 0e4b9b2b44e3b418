/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the conversion pipelines can produce.
pub enum Error {
    /// A required argument was blank or otherwise unusable.
    Argument(String),
    /// A source file or folder does not exist.
    NotFound(PathBuf),
    /// A byte token in a code file is not a hex value in `0x00..=0xFF`.
    Parse {
        path: Option<PathBuf>,
        line: usize,
        token: String,
    },
    /// The code writer was handed nothing to write.
    EmptyBuffer,
    /// The image codec could not decode or encode the bytes.
    Image(image::ImageError),
    Io(io::Error),
}

impl Error {
    pub(crate) fn argument(msg: impl Into<String>) -> Self {
        Error::Argument(msg.into())
    }

    /// Attaches the file a parse error came from.
    pub(crate) fn in_file(self, file: &Path) -> Self {
        match self {
            Error::Parse { line, token, .. } => Error::Parse {
                path: Some(file.to_path_buf()),
                line,
                token,
            },
            other => other,
        }
    }

    /// Process exit code for this error. 2 is left to the argument parser.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Argument(_) => 3,
            Error::NotFound(_) => 4,
            Error::Parse { .. } => 5,
            Error::EmptyBuffer => 6,
            Error::Image(_) => 7,
            Error::Io(_) => 8,
        }
    }
}

impl From<io::Error> for Error {
    fn from(io_err: io::Error) -> Self {
        Error::Io(io_err)
    }
}

impl From<image::ImageError> for Error {
    fn from(img_err: image::ImageError) -> Self {
        Error::Image(img_err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Argument(msg) => write!(f, "invalid argument: {msg}"),
            Error::NotFound(path) => write!(f, "{} does not exist", path.display()),
            Error::Parse {
                path: Some(path),
                line,
                token,
            } => write!(
                f,
                "{}:{line}: `{token}` is not a byte value",
                path.display()
            ),
            Error::Parse {
                path: None,
                line,
                token,
            } => write!(f, "line {line}: `{token}` is not a byte value"),
            Error::EmptyBuffer => write!(f, "refusing to write an empty byte array"),
            Error::Image(img_err) => write!(f, "{img_err}"),
            Error::Io(io_err) => write!(f, "{io_err}"),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Image(img_err) => Some(img_err),
            Error::Io(io_err) => Some(io_err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_file_and_line() {
        let err = Error::Parse {
            path: None,
            line: 3,
            token: "0xZZ".into(),
        }
        .in_file(Path::new("logo.h"));

        assert_eq!(err.to_string(), "logo.h:3: `0xZZ` is not a byte value");
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            Error::argument("x").exit_code(),
            Error::NotFound(PathBuf::new()).exit_code(),
            Error::Parse {
                path: None,
                line: 1,
                token: String::new(),
            }
            .exit_code(),
            Error::EmptyBuffer.exit_code(),
            Error::from(image::load_from_memory(b"not an image").unwrap_err()).exit_code(),
            Error::Io(io::Error::other("x")).exit_code(),
        ];

        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, 0);
            assert_ne!(*a, 2);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
