pub mod camera;
pub mod decoder;
pub mod geometry;
pub mod scene;
pub mod texture;

pub use camera::{Placement, Viewer};
pub use decoder::{DecodedImage, ImageDecoder, ImageFileDecoder};
pub use geometry::{Model, Vertex};
pub use scene::{Line, LineList, Scene};
pub use texture::{MISSING_COLOR, NO_TEXTURE, Texture, TextureBank, TextureError, TextureId};
