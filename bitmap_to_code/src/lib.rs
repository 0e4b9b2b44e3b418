/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Converts images into `static const unsigned char` arrays for embedding in
//! firmware sources, and turns such arrays back into image files.

pub mod batch;
pub mod code;
pub mod codec;
pub mod error;
pub mod raw;
pub mod utils;

pub use batch::{Report, create_bitmaps, create_code};
pub use code::CodeStyle;
pub use code::reader::{read_code, read_code_file};
pub use code::writer::{write_code, write_code_file};
pub use codec::{ImageCodec, StandardCodec};
pub use error::{Error, Result};
pub use raw::{read_raw, read_raw_file};
