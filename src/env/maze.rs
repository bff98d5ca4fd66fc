//! Grid-maze environment
//!
//! A deterministic discrete maze: procedurally generated walls, an agent,
//! and a reward cell that moves to a fresh open cell every time it is
//! collected. Episodes end after a fixed number of steps.

pub mod environment;
pub mod layout;
pub mod types;

pub use environment::{MazeEnv, DEFAULT_MAX_STEPS, OBSERVATION_LEN};
pub use layout::MazeLayout;
pub use types::{Cell, GridView, MazeAction, Position};
