use glam::Vec3;

use crate::world::geometry::Model;
use crate::world::texture::{NO_TEXTURE, TextureBank, TextureId};

/// One world-space wall segment, derived from a [`Model`] every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub a: Vec3,
    pub b: Vec3,
    pub u0: f32,
    pub u1: f32,
    pub texture: TextureId,
}

impl Line {
    /// Texture U at segment parameter `t`.
    #[inline]
    pub fn uv(&self, t: f32) -> f32 {
        (1.0 - t) * self.u0 + self.u1 * t
    }

    /// Endpoints multiplied into world units.
    #[inline]
    pub fn scaled(&self, scale: f32) -> (Vec3, Vec3) {
        (self.a * scale, self.b * scale)
    }
}

/// Flat list of every model's segments.
///
/// Never cache it across frames: it is a pure function of model state and
/// must be rebuilt whenever models may have moved.
#[derive(Debug, Default)]
pub struct LineList {
    lines: Vec<Line>,
}

impl LineList {
    /// Clear and refill from `models`, keeping the allocation.
    pub fn rebuild(&mut self, models: &[Model]) {
        self.lines.clear();
        for m in models {
            let origin = m.placement.position;
            self.lines.extend(m.segments().map(|(va, vb)| Line {
                a: va.pos + origin,
                b: vb.pos + origin,
                u0: va.u,
                u1: vb.u,
                texture: m.texture,
            }));
        }
    }

    pub fn from_models(models: &[Model]) -> Self {
        let mut list = Self::default();
        list.rebuild(models);
        list
    }

    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Everything that gets drawn: the model arena, the textures they share
/// and the flats for ceiling / floor.
pub struct Scene {
    pub models: Vec<Model>,
    pub textures: TextureBank,
    pub ceiling: TextureId,
    pub floor: TextureId,
}

impl Scene {
    pub fn new(textures: TextureBank) -> Self {
        Self {
            models: Vec::new(),
            textures,
            ceiling: NO_TEXTURE,
            floor: NO_TEXTURE,
        }
    }

    pub fn add(&mut self, model: Model) {
        self.models.push(model);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
