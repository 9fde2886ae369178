//! Tunables with defaults, optionally overridden from a TOML file.
//!
//! Every table and every field may be omitted:
//!
//! ```toml
//! [render]
//! max_depth = 80.0
//!
//! [viewer]
//! fov_deg = 75.0
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Failure to read or parse the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config `{path}`: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub viewer: ViewerConfig,
    pub geometry: GeometryConfig,
    pub window: WindowConfig,
}

/// Column renderer constants.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Hits farther than this (ray units) leave the column clear.
    pub max_depth: f32,
    /// Model units → world units for every consumer of world lines.
    pub world_scale: f32,
    /// World → texture divisor for floor and ceiling lookups.
    pub plane_uv_divisor: f32,
    /// Background for columns without an accepted hit.
    pub clear_color: [f32; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 60.0,
            world_scale: 8.0,
            plane_uv_divisor: 2.0,
            clear_color: [0.0, 0.0, 0.0],
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    pub start: [f32; 2],
    pub fov_deg: f32,
    pub fov_min_deg: f32,
    pub fov_max_deg: f32,
    /// radians / second
    pub turn_speed: f32,
    /// world units / second
    pub move_speed: f32,
    /// FoV change in degrees / second
    pub zoom_speed: f32,
    /// Collision radius in world units.
    pub radius: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            start: [8.0, 8.0],
            fov_deg: 60.0,
            fov_min_deg: 30.0,
            fov_max_deg: 110.0,
            turn_speed: 1.8,
            move_speed: 4.0,
            zoom_speed: 30.0,
            radius: 1.5,
        }
    }
}

/// Texture mapping constants of the shape generators.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeometryConfig {
    /// U units per model unit of rectangle edge.
    pub texel_density: f32,
    /// Vertex count of generated polygons.
    pub polygon_sides: u32,
    /// U advances by `circumference / polygon_uv_divisor` per polygon vertex.
    pub polygon_uv_divisor: f32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            texel_density: 2.0,
            polygon_sides: 12,
            polygon_uv_divisor: 6.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: usize,
    pub height: usize,
    /// Window pixels per framebuffer pixel, clamped to `1..=6`.
    pub downscale: usize,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            downscale: 2,
            title: "linecast".into(),
        }
    }
}

impl WindowConfig {
    /// Logical framebuffer size after downscaling.
    pub fn logical_size(&self) -> (usize, usize) {
        logical_size(self.width, self.height, self.downscale)
    }
}

/// Window pixels → framebuffer pixels; `downscale` is clamped to `1..=6`.
pub fn logical_size(width: usize, height: usize, downscale: usize) -> (usize, usize) {
    let ds = downscale.clamp(1, 6);
    ((width / ds).max(1), (height / ds).max(1))
}

impl Config {
    pub fn from_toml(text: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let origin = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: origin.clone(),
            source,
        })?;
        Self::from_toml(&text, &origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg = Config::from_toml("", "inline").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.render.max_depth, 60.0);
        assert_eq!(cfg.geometry.polygon_sides, 12);
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let cfg = Config::from_toml(
            "[render]\nmax_depth = 80.0\n[viewer]\nfov_deg = 75.0\n",
            "inline",
        )
        .unwrap();
        assert_eq!(cfg.render.max_depth, 80.0);
        assert_eq!(cfg.render.world_scale, 8.0);
        assert_eq!(cfg.viewer.fov_deg, 75.0);
        assert_eq!(cfg.viewer.turn_speed, 1.8);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let err = Config::from_toml("[render\nmax_depth = ", "broken.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linecast.toml");
        fs::write(&path, "[window]\ndownscale = 3\n").unwrap();
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.window.downscale, 3);
        assert_eq!(cfg.window.logical_size(), (213, 160));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::load(Path::new("/no/such/linecast.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn downscale_is_clamped() {
        let mut w = WindowConfig::default();
        w.downscale = 0;
        assert_eq!(w.logical_size(), (640, 480));
        w.downscale = 50;
        assert_eq!(w.logical_size(), (106, 80));
    }

    #[test]
    fn resized_window_maps_to_framebuffer() {
        assert_eq!(logical_size(1280, 720, 2), (640, 360));
        assert_eq!(logical_size(1, 3, 2), (1, 1));
        assert_eq!(logical_size(300, 200, 9), (50, 33));
    }
}
