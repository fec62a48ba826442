pub mod input;
pub mod physics;
pub mod state;

pub use input::{poll_input_local_2p, poll_input_player_left, InputAction};
pub use physics::{step, PhysicsEvents};
pub use state::{Ball, GameSnapshot, GameState, Paddle, Player};
