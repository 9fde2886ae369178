use std::f32::consts::TAU;

use glam::Vec3;

use crate::config::GeometryConfig;
use crate::world::camera::Placement;
use crate::world::texture::TextureId;

/// Model-local corner plus its horizontal texture coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub pos: Vec3,
    pub u: f32,
}

/// Named, placed bundle of wall segments sharing one texture.
///
/// `indices` pair vertices two at a time; every pair is an independent
/// segment, so outlines need not be closed or connected. A trailing unpaired
/// index and pairs pointing past `vertices` are ignored by [`Model::segments`].
#[derive(Clone, Debug)]
pub struct Model {
    pub name: String,
    pub placement: Placement,
    pub texture: TextureId,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Model {
    pub fn new<S: Into<String>>(name: S, placement: Placement, texture: TextureId) -> Self {
        Self {
            name: name.into(),
            placement,
            texture,
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    #[inline]
    pub fn add_vertex(&mut self, pos: Vec3, u: f32) {
        self.vertices.push(Vertex { pos, u });
    }

    #[inline]
    pub fn add_index(&mut self, i: u32) {
        self.indices.push(i);
    }

    pub fn segment_count(&self) -> usize {
        self.indices.len() / 2
    }

    /// Vertex pairs in index order.
    pub fn segments(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.indices.chunks_exact(2).filter_map(|pair| {
            let a = self.vertices.get(pair[0] as usize)?;
            let b = self.vertices.get(pair[1] as usize)?;
            Some((*a, *b))
        })
    }

    /*─────────────────────────── generators ───────────────────────────*/

    /// Axis-aligned `w × h` outline with its corner at `(x, y)`.
    ///
    /// Four independent edges, each mapped from `u = 0` up to
    /// `texel_density × edge length`.
    pub fn rectangle<S: Into<String>>(
        name: S,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        texture: TextureId,
        cfg: &GeometryConfig,
    ) -> Self {
        let mut m = Self::new(name, Placement::at(x, y), texture);
        let uw = w * cfg.texel_density;
        let uh = h * cfg.texel_density;

        let corners = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(w, 0.0, 0.0),
            Vec3::new(w, h, 0.0),
            Vec3::new(0.0, h, 0.0),
        ];
        for (i, span) in [uw, uh, uw, uh].into_iter().enumerate() {
            m.add_vertex(corners[i], 0.0);
            m.add_vertex(corners[(i + 1) % 4], span);
        }
        for i in 0..m.vertices.len() as u32 {
            m.add_index(i);
        }
        m
    }

    /// Regular `polygon_sides`-gon outline of `radius` around `(cx, cy)`.
    ///
    /// U accumulates by `2π·radius / polygon_uv_divisor` per vertex. The
    /// closing edge pairs the first vertex with the last.
    pub fn polygon<S: Into<String>>(
        name: S,
        cx: f32,
        cy: f32,
        radius: f32,
        texture: TextureId,
        cfg: &GeometryConfig,
    ) -> Self {
        let mut m = Self::new(name, Placement::at(cx, cy), texture);
        let sides = cfg.polygon_sides.max(3);
        let step = TAU / sides as f32;
        let ustep = TAU * radius / cfg.polygon_uv_divisor;

        for i in 0..sides {
            let (s, c) = (i as f32 * step).sin_cos();
            m.add_vertex(Vec3::new(c * radius, s * radius, 0.0), i as f32 * ustep);
        }
        for i in 0..sides - 1 {
            m.add_index(i);
            m.add_index(i + 1);
        }
        m.add_index(0);
        m.add_index(sides - 1);
        m
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
