//! Window, keyboard and the fixed-step driver loop.
//!
//! Game code only sees the [`Game`] trait, an [`InputState`] and a
//! [`Surface`]; everything minifb-specific stays in [`window`].

mod window;

pub use window::{Canvas, PlatformError};

use crate::renderer::Surface;
use crate::sim::InputState;

/// What an update step wants the driver to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Callbacks driven by [`Canvas::run`].
///
/// `on_setup` runs once; afterwards every real frame runs `on_update` zero
/// or more times with a fixed `dt`, followed by one `on_draw` when at least
/// one update happened.
pub trait Game {
    fn on_setup(&mut self, surface: &mut dyn Surface);

    fn on_update(&mut self, input: &InputState, dt: f32) -> Flow;

    fn on_draw(&mut self, surface: &mut dyn Surface);
}
