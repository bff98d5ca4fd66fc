//! Policy and neural network wrappers
//!
//! This module provides the shared-trunk actor-critic network used by the
//! A2C trainer, built on tch-rs.

pub mod mlp;

pub use mlp::{Activation, MlpConfig, MlpPolicy};
