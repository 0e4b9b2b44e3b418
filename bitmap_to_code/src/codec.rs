/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::io::Cursor;
use std::path::Path;

use image::{ColorType, DynamicImage, ImageFormat};

use crate::error::Result;
use crate::raw::read_raw_file;
use crate::utils::fs::write_atomic;

/// The boundary to whatever actually understands image formats.
pub trait ImageCodec {
    /// Interprets `bytes` as an encoded image and saves it to `path`.
    fn bytes_to_image_file(&self, bytes: &[u8], path: &Path) -> Result<()>;

    /// The encoded bytes of the image at `path`, untouched.
    fn image_file_to_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        read_raw_file(path)
    }
}

/// [`ImageCodec`] backed by the `image` crate.
///
/// The input format is sniffed from the bytes. The output format follows
/// the extension of the destination and falls back to BMP. Images BMP cannot
/// hold as they are (16-bit, float) are narrowed to 8-bit RGBA first.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardCodec;

impl ImageCodec for StandardCodec {
    fn bytes_to_image_file(&self, bytes: &[u8], path: &Path) -> Result<()> {
        let img = image::load_from_memory(bytes)?;
        let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Bmp);
        let img = if format == ImageFormat::Bmp {
            fit_for_bmp(img)
        } else {
            img
        };

        let mut encoded = Cursor::new(Vec::new());
        img.write_to(&mut encoded, format)?;

        write_atomic(path, encoded.get_ref())?;
        Ok(())
    }
}

fn fit_for_bmp(img: DynamicImage) -> DynamicImage {
    match img.color() {
        ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => img,
        _ => DynamicImage::ImageRgba8(img.to_rgba8()),
    }
}
