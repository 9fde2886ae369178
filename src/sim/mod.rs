mod collision;
mod input;
mod player;
mod tic;

pub use collision::{MoveResult, collides, try_move};
pub use input::{Button, InputState, KeyState};
pub use player::{look_point, update_viewer};
pub use tic::{DT, SIM_FPS, TicClock};
