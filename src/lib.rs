//! # Maze RL
//!
//! Grid-maze reinforcement learning in Rust, with PyTorch's proven neural
//! network capabilities (via tch-rs) driving a shared-trunk actor-critic.
//!
//! The crate has two cores: a deterministic grid-maze environment with a
//! wandering reward cell, and an A2C trainer that batches transitions and
//! takes one optimizer step per batch. A thin episodic driver ties them
//! together and logs rewards to the console and an optional CSV file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use maze_rl::env::maze::MazeEnv;
//! use maze_rl::policy::MlpPolicy;
//! use maze_rl::train::{train, A2CConfig, A2CTrainer, TrainOptions};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut env = MazeEnv::new(11);
//! let policy = MlpPolicy::new(9, 4, 128);
//! let mut trainer = A2CTrainer::new(A2CConfig::default(), policy)?;
//! let history = train(&mut env, &mut trainer, &TrainOptions::new().episodes(1000))?;
//! println!("final average: {:.2}", history.trailing_average());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Environment traits and the grid-maze implementation
pub mod env;

/// Neural network policy
pub mod policy;

/// Transition batching
pub mod buffer;

/// A2C algorithm and training loop
pub mod train;

/// Text rendering of the maze grid
pub mod render;

/// Reward history and CSV logging helpers
pub mod utils;

/// Current version of maze-rl
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
