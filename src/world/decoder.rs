//! Image decoding seam.
//!
//! The texture bank never parses files itself; it asks an [`ImageDecoder`]
//! for a raw RGB8 buffer. [`ImageFileDecoder`] is the stock implementation
//! backed by the `image` crate (PNG / JPEG).

use std::path::Path;

use crate::world::texture::TextureError;

/// Raw decoder output: `pixels.len() == width * height * 3`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

/// Turns an encoded file into RGB8 pixels.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage, TextureError>;
}

/// Decoder for every format the `image` crate was built with.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageFileDecoder;

impl ImageDecoder for ImageFileDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage, TextureError> {
        let img = image::open(path).map_err(|e| TextureError::Decode {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let rgb = img.to_rgb8();
        let (w, h) = rgb.dimensions();
        Ok(DecodedImage {
            width: w as usize,
            height: h as usize,
            pixels: rgb.into_raw(),
        })
    }
}
