//! Advantage Actor-Critic (A2C)
//!
//! A synchronous actor-critic update over small transition batches. One
//! network with a shared trunk produces action logits and a state-value
//! estimate; each update takes a single gradient step on
//!
//! ```text
//! loss = policy_loss + vf_coef * value_loss - ent_coef * entropy
//! ```
//!
//! where the policy gradient is weighted by the detached TD(0) error and
//! the critic is regressed against the same (non-detached) error.

pub mod config;
pub mod loss;
pub mod stats;
pub mod trainer;

pub use config::A2CConfig;
pub use loss::{entropy_bonus, policy_gradient_loss, td_delta, value_loss};
pub use stats::UpdateStats;
pub use trainer::A2CTrainer;
