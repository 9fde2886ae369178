// Format-agnostic repository of RGB textures decoded by an `ImageDecoder`.
// Models and lines refer to textures through `TextureId` only.

use std::collections::HashMap;
use std::path::Path;

use glam::Vec3;
use log::{info, warn};

use crate::world::decoder::ImageDecoder;

/// Runtime handle for a texture in this bank.
///
/// *Guaranteed* to remain stable for the lifetime of the bank.
pub type TextureId = u16;

/// `TextureId` of the zero-sized fallback.
/// Always = 0 because `TextureBank::new()` inserts it first.
pub const NO_TEXTURE: TextureId = 0;

/// Colour returned by every sample of a zero-sized texture.
pub const MISSING_COLOR: Vec3 = Vec3::new(1.0, 0.0, 1.0);

/// CPU-side storage: tightly packed **RGB8** in row-major order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Texture {
    pub name: String,
    pub w: usize,
    pub h: usize,
    pub pixels: Vec<u8>,
}

/// Things that can go wrong when using the bank or decoding an image.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextureError {
    /// Attempted to insert a second texture with an existing name.
    #[error("texture name `{0}` already present in bank")]
    Duplicate(String),

    /// Requested ID is outside `0 .. bank.len()`.
    #[error("texture id {0} out of range")]
    BadId(TextureId),

    /// The decoder could not produce pixels for this file.
    #[error("cannot decode `{path}`: {reason}")]
    Decode { path: String, reason: String },

    /// Decoder output does not hold `w * h * 3` bytes.
    #[error("pixel buffer holds {got} bytes, expected {expected}")]
    BadBuffer { expected: usize, got: usize },
}

impl Texture {
    /// Wrap an already decoded RGB8 buffer.
    pub fn from_rgb<S: Into<String>>(
        name: S,
        w: usize,
        h: usize,
        pixels: Vec<u8>,
    ) -> Result<Self, TextureError> {
        let expected = w * h * 3;
        if pixels.len() != expected {
            return Err(TextureError::BadBuffer {
                expected,
                got: pixels.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            w,
            h,
            pixels,
        })
    }

    /// Zero-sized texture; every sample is [`MISSING_COLOR`].
    pub fn empty<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Decode `path` once. Failure is logged and degrades to [`Texture::empty`].
    pub fn load<S: Into<String>>(name: S, path: &Path, decoder: &dyn ImageDecoder) -> Self {
        let name = name.into();
        let decoded = decoder
            .decode(path)
            .and_then(|img| Texture::from_rgb(name.clone(), img.width, img.height, img.pixels));
        match decoded {
            Ok(tex) => {
                info!("texture `{}` loaded ({}x{})", tex.name, tex.w, tex.h);
                tex
            }
            Err(e) => {
                warn!("texture `{name}` falls back to sentinel colour: {e}");
                Texture::empty(name)
            }
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Texel at integer coordinates with wrap-around (negative included),
    /// channels normalised to `0..=1`.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Vec3 {
        if self.is_empty() {
            return MISSING_COLOR;
        }
        let x = x.rem_euclid(self.w as i64) as usize;
        let y = y.rem_euclid(self.h as i64) as usize;
        let i = (y * self.w + x) * 3;
        Vec3::new(
            self.pixels[i] as f32,
            self.pixels[i + 1] as f32,
            self.pixels[i + 2] as f32,
        ) / 255.0
    }

    /// Bilinear sample at normalised `(u, v)`; both axes repeat, so any real
    /// coordinate is valid.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> Vec3 {
        if self.is_empty() {
            return MISSING_COLOR;
        }
        let u = u * self.w as f32;
        let v = v * self.h as f32;

        let fx = u.floor();
        let fy = v.floor();
        let (x, y) = (fx as i64, fy as i64);

        let ur = u - fx;
        let vr = v - fy;

        let top = self.get(x, y).lerp(self.get(x + 1, y), ur);
        let bot = self.get(x, y + 1).lerp(self.get(x + 1, y + 1), ur);
        top.lerp(bot, vr)
    }
}

/// Name-keyed cache of textures shared by every model in a scene.
///
/// * Stores exactly one copy of every name.
/// * ID **0** is always the zero-sized “MISSING” texture.
pub struct TextureBank {
    by_name: HashMap<String, TextureId>,
    data: Vec<Texture>,
}

impl Default for TextureBank {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureBank {
    pub fn new() -> Self {
        let mut by_name = HashMap::new();
        by_name.insert("MISSING".into(), NO_TEXTURE);
        Self {
            by_name,
            data: vec![Texture::empty("MISSING")],
        }
    }

    /// Number of textures stored (including the “missing” one).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` while only the sentinel is stored.
    pub fn is_empty(&self) -> bool {
        self.data.len() == 1
    }

    /// Obtain the id for a *loaded* texture by name.
    pub fn id(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    /// Borrow a texture by id, with bounds-checking.
    pub fn texture(&self, id: TextureId) -> Result<&Texture, TextureError> {
        self.data.get(id as usize).ok_or(TextureError::BadId(id))
    }

    /// Fallback-safe borrow: unknown ids resolve to the sentinel texture.
    #[inline]
    pub fn get_or_missing(&self, id: TextureId) -> &Texture {
        self.texture(id).unwrap_or(&self.data[NO_TEXTURE as usize])
    }

    /// Insert a texture under its own name.
    pub fn insert(&mut self, tex: Texture) -> Result<TextureId, TextureError> {
        if self.by_name.contains_key(&tex.name) {
            return Err(TextureError::Duplicate(tex.name));
        }
        let id = self.data.len() as TextureId;
        self.by_name.insert(tex.name.clone(), id);
        self.data.push(tex);
        Ok(id)
    }

    /// Decode `path` and insert it; a failed decode still yields a usable id.
    /// A name that is already stored is not decoded again.
    pub fn load<S: Into<String>>(
        &mut self,
        name: S,
        path: &Path,
        decoder: &dyn ImageDecoder,
    ) -> Result<TextureId, TextureError> {
        let name = name.into();
        if let Some(id) = self.id(&name) {
            return Ok(id);
        }
        self.insert(Texture::load(name, path, decoder))
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
