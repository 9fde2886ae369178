//! Textured 2.5D raycaster over free-standing line segments.
//!
//! ```bash
//! cargo run --release -- --assets assets
//! ```

pub mod config;
pub mod game;
pub mod math;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod world;
