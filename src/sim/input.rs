use std::collections::HashMap;

use bitflags::bitflags;

bitflags! {
    /// Per-frame state of one button.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct KeyState: u8 {
        /// Down right now.
        const HELD     = 0x01;
        /// Went down during this frame.
        const PRESSED  = 0x02;
        /// Went up during this frame.
        const RELEASED = 0x04;
    }
}

/// Platform-neutral actions the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    TurnLeft,
    TurnRight,
    Forward,
    Back,
    ZoomIn,
    ZoomOut,
    ToggleMap,
    Quit,
}

/// Explicit keyboard snapshot handed to every update step.
///
/// The platform calls [`InputState::begin_frame`] once per real frame,
/// then feeds key edges through `press` / `release`.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    keys: HashMap<Button, KeyState>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget last frame's edges; held keys stay held.
    pub fn begin_frame(&mut self) {
        for state in self.keys.values_mut() {
            state.remove(KeyState::PRESSED | KeyState::RELEASED);
        }
    }

    pub fn press(&mut self, button: Button) {
        let state = self.keys.entry(button).or_default();
        state.insert(KeyState::PRESSED | KeyState::HELD);
    }

    pub fn release(&mut self, button: Button) {
        let state = self.keys.entry(button).or_default();
        state.insert(KeyState::RELEASED);
        state.remove(KeyState::HELD);
    }

    #[inline]
    pub fn state(&self, button: Button) -> KeyState {
        self.keys.get(&button).copied().unwrap_or_default()
    }

    #[inline]
    pub fn is_held(&self, button: Button) -> bool {
        self.state(button).contains(KeyState::HELD)
    }

    #[inline]
    pub fn is_pressed(&self, button: Button) -> bool {
        self.state(button).contains(KeyState::PRESSED)
    }

    #[inline]
    pub fn is_released(&self, button: Button) -> bool {
        self.state(button).contains(KeyState::RELEASED)
    }
}
