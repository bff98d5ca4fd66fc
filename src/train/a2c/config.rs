//! A2C configuration and hyperparameters
//!
//! This module defines the configuration parameters for A2C training
//! and provides validation and builder pattern methods.

use anyhow::{anyhow, Result};

/// A2C configuration parameters
///
/// Defaults match a small discrete-action gridworld: a modest learning
/// rate, near-undiscounted returns, and a light entropy bonus.
#[derive(Debug, Clone)]
pub struct A2CConfig {
    /// Learning rate for the shared actor-critic parameters
    pub learning_rate: f64,

    /// Discount factor (gamma)
    pub gamma: f64,

    /// Value function loss coefficient
    pub vf_coef: f64,

    /// Entropy bonus coefficient
    pub ent_coef: f64,

    /// Transitions accumulated before an update (episode end also triggers)
    pub batch_size: usize,
}

impl Default for A2CConfig {
    fn default() -> Self {
        Self {
            learning_rate: 5e-4,
            gamma: 0.99,
            vf_coef: 0.5,
            ent_coef: 0.01,
            batch_size: 32,
        }
    }
}

impl A2CConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.learning_rate <= 0.0 {
            return Err(anyhow!("learning_rate must be positive"));
        }
        if !(0.0..=1.0).contains(&self.gamma) {
            return Err(anyhow!("gamma must be in [0, 1]"));
        }
        if self.vf_coef < 0.0 {
            return Err(anyhow!("vf_coef must be non-negative"));
        }
        if self.ent_coef < 0.0 {
            return Err(anyhow!("ent_coef must be non-negative"));
        }
        if self.batch_size == 0 {
            return Err(anyhow!("batch_size must be positive"));
        }
        Ok(())
    }

    /// Set learning rate
    pub fn learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    /// Set discount factor
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set value function loss coefficient
    pub fn vf_coef(mut self, coef: f64) -> Self {
        self.vf_coef = coef;
        self
    }

    /// Set entropy bonus coefficient
    pub fn ent_coef(mut self, coef: f64) -> Self {
        self.ent_coef = coef;
        self
    }

    /// Set update batch size
    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }
}
