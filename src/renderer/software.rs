//! ---------------------------------------------------------------------------
//! Software (CPU) column raycaster
//!
//! * One ray per screen column against every world line; the nearest hit
//!   wins, no acceleration structure.
//! * Each row of that column is then classified as ceiling, wall band or
//!   floor and shaded with a bilinear texture sample and linear depth fog.
//! * The line list is rebuilt from the scene's models at the start of every
//!   frame and is only valid until the next call to `render`.
//! ---------------------------------------------------------------------------

use glam::Vec3;

use crate::{
    config::RenderConfig,
    math::{RayHit, ray_seg},
    renderer::Surface,
    world::{Line, LineList, Scene, Texture, Viewer},
};

/// Nearest intersection of one column's ray; valid for the frame it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitInfo {
    /// Index into the frame's line list.
    pub line: usize,
    pub position: Vec3,
    /// Segment normal, not normalised.
    pub normal: Vec3,
    /// Ray parameter (multiples of the ray direction).
    pub distance: f32,
    /// Position along the segment in `[0, 1]`.
    pub u: f32,
    /// Segment length in texture units (`|b - a| / scale · 2`).
    pub length: f32,
}

/// Cast `origin + t·dir` against every line (endpoints scaled by `scale`)
/// and keep the closest hit. Equal distances resolve to the earliest line.
pub fn cast(origin: Vec3, dir: Vec3, lines: &[Line], scale: f32) -> Option<HitInfo> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| {
            let (a, b) = line.scaled(scale);
            ray_seg(origin, dir, a, b).map(|hit: RayHit| HitInfo {
                line: i,
                position: hit.position,
                normal: hit.normal,
                distance: hit.distance,
                u: hit.u,
                length: (b - a).length() / scale * 2.0,
            })
        })
        .min_by(|x, y| x.distance.total_cmp(&y.distance))
}

/*───────────────────────────────────────────────────────────────────────*/
/*                              Renderer                                */
/*───────────────────────────────────────────────────────────────────────*/

pub struct ColumnRenderer {
    cfg: RenderConfig,
    lines: LineList,
    /* accepted hit per column, kept for the minimap */
    hits: Vec<Option<HitInfo>>,
}

impl ColumnRenderer {
    pub fn new(cfg: RenderConfig) -> Self {
        Self {
            cfg,
            lines: LineList::default(),
            hits: Vec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &RenderConfig {
        &self.cfg
    }

    /// Lines of the last rendered frame.
    #[inline]
    pub fn lines(&self) -> &LineList {
        &self.lines
    }

    /// Accepted hit per column of the last rendered frame.
    #[inline]
    pub fn hits(&self) -> &[Option<HitInfo>] {
        &self.hits
    }

    /// Draw one complete frame of `scene` as seen by `viewer`.
    pub fn render<S: Surface + ?Sized>(&mut self, scene: &Scene, viewer: &Viewer, surface: &mut S) {
        self.lines.rebuild(&scene.models);

        let (w, h) = (surface.width(), surface.height());
        let [r, g, b] = self.cfg.clear_color;
        surface.clear(Vec3::new(r, g, b));

        self.hits.clear();
        self.hits.resize(w, None);
        if w == 0 || h == 0 {
            return;
        }

        let origin = viewer.position();
        let forward = viewer.forward();
        let plane = viewer.plane();
        let view = View {
            origin,
            half_fov_tan: viewer.half_fov_tan(),
            height: h,
            ceiling: scene.textures.get_or_missing(scene.ceiling),
            floor: scene.textures.get_or_missing(scene.floor),
        };

        for x in 0..w {
            let xf = (x as f32 / w as f32) * 2.0 - 1.0;
            let dir = forward + plane * xf;

            let Some(hit) = cast(origin, dir, self.lines.lines(), self.cfg.world_scale) else {
                continue;
            };
            if hit.distance >= self.cfg.max_depth {
                continue;
            }

            let line = &self.lines.lines()[hit.line];
            let wall = scene.textures.get_or_missing(line.texture);
            if self.draw_column(surface, x as i32, &hit, line, wall, &view) {
                self.hits[x] = Some(hit);
            }
        }
    }

    /// Shade every row of column `x`. Returns `false` when the hit is
    /// degenerate (viewer standing on the wall) and the column stays clear.
    fn draw_column<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x: i32,
        hit: &HitInfo,
        line: &Line,
        wall: &Texture,
        view: &View,
    ) -> bool {
        let max_depth = self.cfg.max_depth;
        let hf = view.height as f32;
        let h2 = (view.height / 2) as f32;

        let d = hit.distance * view.half_fov_tan;
        if !(d > 0.0) {
            return false;
        }

        /* vertical band of the wall in this column */
        let ceil = h2 - hf / d;
        let floor = hf - ceil;
        let wh = floor - ceil;

        let fog = (1.0 - d / max_depth).max(0.0);
        let u = line.uv(hit.u);

        for y in 0..view.height {
            let yf = y as f32;

            let color = if yf <= ceil {
                let dist = hf / ((hf - yf) - h2);
                let we = dist / d;
                let cfog = ((h2 - yf) / max_depth).min(1.0);
                let (fu, fv) = self.plane_uv(view.origin, hit.position, we);
                view.ceiling.sample(fu, fv) * cfog
            } else if yf <= floor {
                let v = (yf - ceil) / wh;
                wall.sample(u, v) * fog
            } else {
                let dist = hf / (yf - h2);
                let we = dist / d;
                let cfog = ((yf - h2) / max_depth).min(1.0);
                let (fu, fv) = self.plane_uv(view.origin, hit.position, we);
                let mut c = view.floor.sample(fu, fv) * cfog;

                /* fade the wall base into the floor */
                let vf = (yf - floor) / wh;
                if vf < 1.0 {
                    c += wall.sample(u, 1.0 - vf) * ((1.0 - vf) * we * fog * cfog);
                }
                c
            };

            surface.put(x, y as i32, color);
        }
        true
    }

    /// Floor / ceiling texture coordinates: the point `we` of the way from
    /// the viewer to the wall hit, divided down to texture space.
    #[inline]
    fn plane_uv(&self, origin: Vec3, hit: Vec3, we: f32) -> (f32, f32) {
        let p = origin.lerp(hit, we) / self.cfg.plane_uv_divisor;
        (p.x, p.y)
    }
}

/// Per-frame constants shared by every column.
struct View<'a> {
    origin: Vec3,
    half_fov_tan: f32,
    height: usize,
    ceiling: &'a Texture,
    floor: &'a Texture,
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::GeometryConfig,
        renderer::{FrameBuffer, unpack_rgb},
        world::{Model, Placement, TextureBank},
    };
    use std::f32::consts::FRAC_PI_2;

    /* tiny helpers ---------------------------------------------------*/
    fn solid(name: &str, rgb: [u8; 3]) -> Texture {
        Texture::from_rgb(name, 1, 1, rgb.to_vec()).unwrap()
    }

    fn wall_model(x: f32, half: f32, tex: u16) -> Model {
        let mut m = Model::new("wall", Placement::default(), tex);
        m.add_vertex(Vec3::new(x, -half, 0.0), 0.0);
        m.add_vertex(Vec3::new(x, half, 0.0), 1.0);
        m.add_index(0);
        m.add_index(1);
        m
    }

    /// Red wall, blue ceiling, green floor.
    fn rgb_scene(models: Vec<Model>) -> Scene {
        let mut bank = TextureBank::new();
        let wall = bank.insert(solid("WALL", [255, 0, 0])).unwrap();
        let ceil = bank.insert(solid("CEIL", [0, 0, 255])).unwrap();
        let floor = bank.insert(solid("FLOOR", [0, 255, 0])).unwrap();
        assert_eq!(wall, 1);
        let mut scene = Scene::new(bank);
        scene.ceiling = ceil;
        scene.floor = floor;
        scene.models = models;
        scene
    }

    fn viewer_at_origin() -> Viewer {
        Viewer::new(Placement::default(), FRAC_PI_2)
    }

    fn line(ax: f32, ay: f32, bx: f32, by: f32) -> Line {
        Line {
            a: Vec3::new(ax, ay, 0.0),
            b: Vec3::new(bx, by, 0.0),
            u0: 0.0,
            u1: 1.0,
            texture: 0,
        }
    }

    /* cast ------------------------------------------------------------*/

    #[test]
    fn cast_picks_nearest_of_parallel_walls() {
        let lines = [line(5.0, -1.0, 5.0, 1.0), line(2.0, -1.0, 2.0, 1.0)];
        let hit = cast(Vec3::ZERO, Vec3::X, &lines, 1.0).unwrap();
        assert_eq!(hit.line, 1);
        assert!((hit.distance - 2.0).abs() < 1e-5);
    }

    #[test]
    fn cast_ties_resolve_to_first_line() {
        let lines = [line(3.0, -1.0, 3.0, 1.0), line(3.0, 1.0, 3.0, -1.0)];
        let hit = cast(Vec3::ZERO, Vec3::X, &lines, 1.0).unwrap();
        assert_eq!(hit.line, 0);
    }

    #[test]
    fn cast_scales_lines_into_world_units() {
        let lines = [line(1.0, -1.0, 1.0, 1.0)];
        let hit = cast(Vec3::ZERO, Vec3::X, &lines, 8.0).unwrap();
        assert!((hit.distance - 8.0).abs() < 1e-5);
        assert!((hit.position - Vec3::new(8.0, 0.0, 0.0)).length() < 1e-5);
        assert!((hit.length - 4.0).abs() < 1e-5, "2 model units · 2");
        assert!((hit.u - 0.5).abs() < 1e-5);
    }

    #[test]
    fn cast_misses_empty_scene() {
        assert!(cast(Vec3::ZERO, Vec3::X, &[], 8.0).is_none());
    }

    #[test]
    fn room_center_hits_near_wall_first() {
        let cfg = GeometryConfig::default();
        let room = Model::rectangle("room", 0.0, 0.0, 6.0, 6.0, 1, &cfg);
        let lines = LineList::from_models(&[room]);
        // Standing off-centre at (16, 24): east wall is 32 away, west wall is behind.
        let hit = cast(Vec3::new(16.0, 24.0, 0.0), Vec3::X, lines.lines(), 8.0).unwrap();
        assert!((hit.position.x - 48.0).abs() < 1e-4);
        assert!((hit.distance - 32.0).abs() < 1e-4);
        let back = cast(Vec3::new(16.0, 24.0, 0.0), -Vec3::X, lines.lines(), 8.0).unwrap();
        assert!((back.distance - 16.0).abs() < 1e-4);
    }

    /* render ----------------------------------------------------------*/

    #[test]
    fn column_rows_are_ceiling_wall_floor() {
        // 20×10 view, wall 8 world units ahead: ceiling ≤ 3.75 < wall ≤ 6.25 < floor.
        let scene = rgb_scene(vec![wall_model(1.0, 10.0, 1)]);
        let mut fb = FrameBuffer::new(20, 10);
        let mut r = ColumnRenderer::new(RenderConfig::default());
        r.render(&scene, &viewer_at_origin(), &mut fb);

        let at = |y| unpack_rgb(fb.pixel(10, y).unwrap());

        let top = at(0);
        assert!(top.z > 0.0 && top.x == 0.0 && top.y == 0.0, "ceiling is blue");

        let mid = at(5);
        assert!(mid.x > 0.8 && mid.y == 0.0 && mid.z == 0.0, "wall is fogged red");

        let bottom = at(9);
        assert!(bottom.y > 0.0 && bottom.x == 0.0, "floor far from the seam is pure green");

        let seam = at(7);
        assert!(seam.y > 0.0 && seam.x > 0.0, "wall base bleeds into the floor");

        assert!(r.hits()[10].is_some());
        assert_eq!(r.lines().len(), 1);
    }

    #[test]
    fn wall_fog_matches_depth() {
        let scene = rgb_scene(vec![wall_model(1.0, 10.0, 1)]);
        let mut fb = FrameBuffer::new(20, 10);
        let mut r = ColumnRenderer::new(RenderConfig::default());
        r.render(&scene, &viewer_at_origin(), &mut fb);

        // d = 8 · tan(45°) = 8, fog = 1 - 8/60 → 221 of 255
        let px = fb.pixel(10, 5).unwrap();
        let red = (px >> 16) as i32;
        assert!((red - 221).abs() <= 1, "red = {red}");
        assert_eq!(px & 0xFFFF, 0);
    }

    /// Byte channels of pixel `(x, y)`.
    fn rgb_at(fb: &FrameBuffer, x: usize, y: usize) -> [i32; 3] {
        let px = fb.pixel(x, y).unwrap();
        [(px >> 16) as i32 & 0xFF, (px >> 8) as i32 & 0xFF, px as i32 & 0xFF]
    }

    fn assert_rgb(fb: &FrameBuffer, y: usize, want: [i32; 3]) {
        let got = rgb_at(fb, 10, y);
        for c in 0..3 {
            assert!((got[c] - want[c]).abs() <= 1, "row {y}: got {got:?}, want {want:?}");
        }
    }

    #[test]
    fn column_pixels_follow_the_projection() {
        // Wall: red 250 over 50 in column 0, black column 1; U runs 0..2.
        // Ceiling (blue) and floor (green): 4×1 ramps 10, 90, 170, 250.
        let tex = |name: &str, w, h, px: Vec<u8>| Texture::from_rgb(name, w, h, px).unwrap();
        let mut bank = TextureBank::new();
        let wall = bank
            .insert(tex("WALL", 2, 2, vec![250, 0, 0, 0, 0, 0, 50, 0, 0, 0, 0, 0]))
            .unwrap();
        let ceil = bank
            .insert(tex("CEIL", 4, 1, vec![0, 0, 10, 0, 0, 90, 0, 0, 170, 0, 0, 250]))
            .unwrap();
        let floor = bank
            .insert(tex("FLOOR", 4, 1, vec![0, 10, 0, 0, 90, 0, 0, 170, 0, 0, 250, 0]))
            .unwrap();

        let mut m = Model::new("wall", Placement::default(), wall);
        m.add_vertex(Vec3::new(1.0, -10.0, 0.0), 0.0);
        m.add_vertex(Vec3::new(1.0, 10.0, 0.0), 2.0);
        m.add_index(0);
        m.add_index(1);

        let mut scene = Scene::new(bank);
        scene.ceiling = ceil;
        scene.floor = floor;
        scene.add(m);

        let cfg = RenderConfig {
            max_depth: 16.0,
            ..RenderConfig::default()
        };
        let mut fb = FrameBuffer::new(20, 10);
        let mut r = ColumnRenderer::new(cfg);
        r.render(&scene, &viewer_at_origin(), &mut fb);

        // Centre column: hit (8, 0), d = 8, ceil = 3.75, floor = 6.25,
        // wh = 2.5, wall fog 0.5, wall U = 1.0 (texel column 0).

        // y = 1: we = 2.5/8, plane u = 1.25 → texel 1 (90), cfog 4/16.
        assert_rgb(&fb, 1, [0, 0, 22]);
        // y = 2: we = (10/3)/8, plane u = 5/3 → 170..250 at 2/3, cfog 3/16.
        assert_rgb(&fb, 2, [0, 0, 41]);

        // y = 4: v = 0.1 → 250..50 at 0.2 = 210, fogged.
        assert_rgb(&fb, 4, [105, 0, 0]);
        // y = 5: v = 0.5 → bottom texel 50, fogged.
        assert_rgb(&fb, 5, [25, 0, 0]);

        // y = 7: floor at plane u = 2.5 → 170 · 2/16; seam vf = 0.3 adds
        // wall(1.0, 0.7) = 130 · 0.7 · 0.625 · 0.5 · 0.125.
        assert_rgb(&fb, 7, [3, 21, 0]);

        // y = 9: vf = 1.1, no seam; plane u = 1.25 → 90 · 4/16.
        assert_rgb(&fb, 9, [0, 22, 0]);
        assert_eq!(rgb_at(&fb, 10, 9)[0], 0);
    }

    #[test]
    fn columns_without_hit_keep_clear_color() {
        // Short wall only covers the middle of the view.
        let scene = rgb_scene(vec![wall_model(1.0, 0.5, 1)]);
        let mut fb = FrameBuffer::new(20, 10);
        let mut cfg = RenderConfig::default();
        cfg.clear_color = [1.0, 1.0, 1.0];
        let mut r = ColumnRenderer::new(cfg);
        r.render(&scene, &viewer_at_origin(), &mut fb);

        for y in 0..10 {
            assert_eq!(fb.pixel(0, y), Some(0x00FF_FFFF));
        }
        assert_ne!(fb.pixel(10, 5), Some(0x00FF_FFFF));
        assert!(r.hits()[0].is_none());
        assert!(r.hits()[10].is_some());
    }

    #[test]
    fn hits_beyond_max_depth_are_discarded() {
        // 9 model units · 8 = 72 > 60
        let scene = rgb_scene(vec![wall_model(9.0, 100.0, 1)]);
        let mut fb = FrameBuffer::new(8, 6);
        let mut r = ColumnRenderer::new(RenderConfig::default());
        r.render(&scene, &viewer_at_origin(), &mut fb);
        assert_eq!(fb.count(0), 8 * 6);
        assert!(r.hits().iter().all(Option::is_none));
    }

    #[test]
    fn missing_textures_render_sentinel() {
        let mut scene = Scene::new(TextureBank::new());
        scene.models.push(wall_model(1.0, 10.0, 42));
        let mut fb = FrameBuffer::new(20, 10);
        let mut r = ColumnRenderer::new(RenderConfig::default());
        r.render(&scene, &viewer_at_origin(), &mut fb);
        let mid = unpack_rgb(fb.pixel(10, 5).unwrap());
        assert!(mid.x > 0.0 && mid.y == 0.0 && mid.z > 0.0, "magenta");
    }

    #[test]
    fn standing_on_a_wall_leaves_column_clear() {
        let scene = rgb_scene(vec![wall_model(0.0, 10.0, 1)]);
        let mut fb = FrameBuffer::new(4, 4);
        let mut r = ColumnRenderer::new(RenderConfig::default());
        r.render(&scene, &viewer_at_origin(), &mut fb);
        assert_eq!(fb.count(0), 16);
    }
}
