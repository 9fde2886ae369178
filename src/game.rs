//! The demo: a textured block room with a ring of pillars.

use std::path::Path;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::config::{Config, GeometryConfig};
use crate::platform::{Flow, Game};
use crate::renderer::{ColumnRenderer, Surface, draw_hud, draw_minimap};
use crate::sim::{Button, InputState, update_viewer};
use crate::world::{
    ImageDecoder, LineList, Model, Placement, Scene, TextureBank, TextureError, Viewer,
};

const PILLARS: u32 = 12;
const PILLAR_RADIUS: f32 = 0.15;
const RING_CENTER: (f32, f32) = (1.5, 1.5);
const RING_RADIUS: f32 = 1.0;
const STATS_EVERY: Duration = Duration::from_secs(3);

/// Load the four demo textures from `assets` and lay out the room.
pub fn demo_scene(
    assets: &Path,
    decoder: &dyn ImageDecoder,
    cfg: &GeometryConfig,
) -> Result<Scene, TextureError> {
    let mut bank = TextureBank::new();
    let wall = bank.load("bricks", &assets.join("bricks.png"), decoder)?;
    let pillar = bank.load("pillar", &assets.join("pillar.png"), decoder)?;
    let ceiling = bank.load("ceiling", &assets.join("ceiling.png"), decoder)?;
    let floor = bank.load("floor", &assets.join("floor.png"), decoder)?;

    let mut scene = Scene::new(bank);
    scene.ceiling = ceiling;
    scene.floor = floor;

    scene.add(Model::rectangle("room", 0.0, 0.0, 6.0, 6.0, wall, cfg));

    let step = std::f32::consts::TAU / PILLARS as f32;
    for i in 0..PILLARS {
        let (s, c) = (i as f32 * step).sin_cos();
        scene.add(Model::polygon(
            format!("pillar{i}"),
            c * RING_RADIUS + RING_CENTER.0,
            s * RING_RADIUS + RING_CENTER.1,
            PILLAR_RADIUS,
            pillar,
            cfg,
        ));
    }

    info!(
        "scene: {} models, {} textures",
        scene.models.len(),
        scene.textures.len()
    );
    Ok(scene)
}

/// Frames-per-second over a rolling window.
struct FpsCounter {
    frames: u32,
    since: Instant,
    fps: f32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            frames: 0,
            since: Instant::now(),
            fps: 0.0,
        }
    }

    fn tick(&mut self) {
        self.frames += 1;
        let elapsed = self.since.elapsed();
        if elapsed >= STATS_EVERY {
            self.fps = self.frames as f32 / elapsed.as_secs_f32();
            debug!("avg render: {:.2} ms  ({:.1} FPS)", 1000.0 / self.fps, self.fps);
            self.frames = 0;
            self.since = Instant::now();
        }
    }
}

pub struct RaycastGame {
    cfg: Config,
    scene: Scene,
    viewer: Viewer,
    renderer: ColumnRenderer,
    /* rebuilt each update for collision */
    lines: LineList,
    show_map: bool,
    fps: FpsCounter,
}

impl RaycastGame {
    pub fn new(cfg: Config, scene: Scene) -> Self {
        let [x, y] = cfg.viewer.start;
        let viewer = Viewer::new(Placement::at(x, y), cfg.viewer.fov_deg.to_radians());
        Self {
            renderer: ColumnRenderer::new(cfg.render.clone()),
            cfg,
            scene,
            viewer,
            lines: LineList::default(),
            show_map: false,
            fps: FpsCounter::new(),
        }
    }

    #[inline]
    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    #[inline]
    pub fn map_visible(&self) -> bool {
        self.show_map
    }
}

impl Game for RaycastGame {
    fn on_setup(&mut self, surface: &mut dyn Surface) {
        let vc = &self.cfg.viewer;
        self.viewer = Viewer::new(
            Placement::at(vc.start[0], vc.start[1]),
            vc.fov_deg.to_radians(),
        );
        self.viewer
            .set_fov(self.viewer.fov(), vc.fov_min_deg.to_radians(), vc.fov_max_deg.to_radians());
        info!(
            "setup: {}x{} view, viewer at ({}, {})",
            surface.width(),
            surface.height(),
            vc.start[0],
            vc.start[1]
        );
    }

    fn on_update(&mut self, input: &InputState, dt: f32) -> Flow {
        if input.is_pressed(Button::Quit) {
            return Flow::Quit;
        }
        if input.is_pressed(Button::ToggleMap) {
            self.show_map = !self.show_map;
        }

        self.lines.rebuild(&self.scene.models);
        update_viewer(
            &mut self.viewer,
            input,
            dt,
            self.lines.lines(),
            self.cfg.render.world_scale,
            &self.cfg.viewer,
        );
        Flow::Continue
    }

    fn on_draw(&mut self, surface: &mut dyn Surface) {
        self.renderer.render(&self.scene, &self.viewer, surface);

        if self.show_map {
            draw_minimap(
                surface,
                self.renderer.lines().lines(),
                self.cfg.render.world_scale,
                &self.viewer,
                self.renderer.hits(),
            );
            draw_hud(surface, self.fps.fps, &self.viewer);
        }
        self.fps.tick();
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
