//! Experience buffers
//!
//! This module provides the small fixed-capacity transition batch the A2C
//! trainer consumes.

pub mod transition;

pub use transition::TransitionBatch;
