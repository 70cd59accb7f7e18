//! Game state machine
//!
//! Turns input events into board edits, submissions and state changes.

mod engine;
mod input;
mod snapshot;
mod state;

pub use engine::Game;
pub use input::InputEvent;
pub use snapshot::Snapshot;
pub use state::{GameConfig, GameState, GuessError, Settings, Step};
