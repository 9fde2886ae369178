use std::time::Instant;

use log::{debug, info};
use minifb::{Key, KeyRepeat, ScaleMode, Window, WindowOptions};

use crate::config::{WindowConfig, logical_size};
use crate::platform::{Flow, Game};
use crate::renderer::{FrameBuffer, Surface};
use crate::sim::{Button, DT, InputState, SIM_FPS, TicClock};

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("window error: {0}")]
    Window(#[from] minifb::Error),
}

/// Physical key → game action.
const KEYMAP: [(Key, Button); 12] = [
    (Key::Left, Button::TurnLeft),
    (Key::A, Button::TurnLeft),
    (Key::Right, Button::TurnRight),
    (Key::D, Button::TurnRight),
    (Key::Up, Button::Forward),
    (Key::W, Button::Forward),
    (Key::Down, Button::Back),
    (Key::S, Button::Back),
    (Key::Z, Button::ZoomIn),
    (Key::X, Button::ZoomOut),
    (Key::M, Button::ToggleMap),
    (Key::Escape, Button::Quit),
];

fn button_for(key: Key) -> Option<Button> {
    KEYMAP.iter().find(|(k, _)| *k == key).map(|&(_, b)| b)
}

/// minifb window presenting a downscaled [`FrameBuffer`].
pub struct Canvas {
    window: Window,
    fb: FrameBuffer,
    input: InputState,
    clock: TicClock,
    downscale: usize,
}

impl Canvas {
    pub fn new(cfg: &WindowConfig) -> Result<Self, PlatformError> {
        let (w, h) = cfg.logical_size();
        info!("window {}x{}, framebuffer {w}x{h}", cfg.width, cfg.height);

        let mut window = Window::new(
            &cfg.title,
            cfg.width,
            cfg.height,
            WindowOptions {
                resize: true,
                scale_mode: ScaleMode::Stretch,
                ..WindowOptions::default()
            },
        )?;
        window.set_target_fps(SIM_FPS as usize);

        Ok(Self {
            window,
            fb: FrameBuffer::new(w, h),
            input: InputState::new(),
            clock: TicClock::new(),
            downscale: cfg.downscale,
        })
    }

    /// Run `game` until the window closes or an update returns [`Flow::Quit`].
    pub fn run<G: Game>(&mut self, game: &mut G) -> Result<(), PlatformError> {
        game.on_setup(&mut self.fb);

        let mut last = Instant::now();
        while self.window.is_open() {
            self.poll_keys();

            let now = Instant::now();
            let tics = self.clock.pump(now - last);
            last = now;
            if tics > 1 {
                debug!("catching up {tics} tics, {:?} carried", self.clock.backlog());
            }

            for _ in 0..tics {
                if game.on_update(&self.input, DT) == Flow::Quit {
                    info!("quit requested");
                    return Ok(());
                }
            }

            if tics > 0 {
                self.fit_to_window();
                game.on_draw(&mut self.fb);
                self.window
                    .update_with_buffer(self.fb.as_slice(), self.fb.width(), self.fb.height())?;
                // Edges were seen by at least one update.
                self.input.begin_frame();
            } else {
                self.window.update();
            }
        }
        info!("window closed");
        Ok(())
    }

    /// Follow window resizes with a matching logical framebuffer.
    fn fit_to_window(&mut self) {
        let (ww, wh) = self.window.get_size();
        let (w, h) = logical_size(ww, wh, self.downscale);
        if (w, h) != (self.fb.width(), self.fb.height()) {
            info!("window resized to {ww}x{wh}, framebuffer {w}x{h}");
            self.fb.resize(w, h);
        }
    }

    /// Fold the window's key edges into the input snapshot.
    fn poll_keys(&mut self) {
        for key in self.window.get_keys_pressed(KeyRepeat::No) {
            if let Some(b) = button_for(key) {
                self.input.press(b);
            }
        }
        for key in self.window.get_keys_released() {
            if let Some(b) = button_for(key) {
                self.input.release(b);
            }
        }
    }
}
