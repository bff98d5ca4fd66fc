//! Training algorithms
//!
//! This module implements the A2C training algorithm and the episodic
//! training loop driver.

pub mod a2c;
pub mod runner;

pub use a2c::{A2CConfig, A2CTrainer, UpdateStats};
pub use runner::{train, TrainOptions};
