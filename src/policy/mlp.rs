//! Multi-Layer Perceptron (MLP) actor-critic for discrete actions
//!
//! A feedforward network with a shared trunk feeding two heads: action
//! logits for the policy and a scalar state-value estimate for the critic.
//! Sharing the trunk is what makes the A2C update a single optimizer step
//! over one parameter set.
//!
//! # Architecture
//!
//! ```text
//! Input (observations)
//!         |
//!    [Dense(128)]
//!         |
//!       ReLU
//!      /     \
//!  Policy   Value
//!   Head     Head
//!     |        |
//! [Dense(n)] [Dense(1)]
//!     |        |
//!  Logits    Value
//! ```
//!
//! Hidden width, depth, and activation are tunables, not contracts.

use anyhow::Result;
use tch::{
    nn::{self, Init, Module, OptimizerConfig},
    Device, Kind, Tensor,
};

/// Configuration for the MLP architecture
#[derive(Debug, Clone)]
pub struct MlpConfig {
    /// Number of shared trunk layers (1 or 2)
    pub num_layers: usize,
    /// Width of each trunk layer
    pub hidden_dim: i64,
    /// Use orthogonal weight initialization for the trunk
    pub use_orthogonal_init: bool,
    /// Trunk activation function
    pub activation: Activation,
    /// Compute device; an explicit field rather than process-wide state
    pub device: Device,
}

/// Trunk activation functions
#[derive(Debug, Clone, Copy)]
pub enum Activation {
    ReLU,
    Tanh,
}

impl Default for MlpConfig {
    fn default() -> Self {
        Self {
            num_layers: 1,
            hidden_dim: 128,
            use_orthogonal_init: true,
            activation: Activation::ReLU,
            device: Device::cuda_if_available(),
        }
    }
}

impl MlpConfig {
    /// Pin the policy to a specific device
    pub fn device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    /// Set the trunk width
    pub fn hidden_dim(mut self, dim: i64) -> Self {
        self.hidden_dim = dim;
        self
    }
}

/// Shared-trunk actor-critic network
pub struct MlpPolicy {
    vs: nn::VarStore,
    shared: nn::Sequential,
    policy_head: nn::Linear,
    value_head: nn::Linear,
    device: Device,
    action_dim: i64,
}

impl MlpPolicy {
    /// Create a policy with the default single-layer trunk
    ///
    /// # Arguments
    ///
    /// * `obs_dim` - Observation dimensionality
    /// * `action_dim` - Number of discrete actions
    /// * `hidden_dim` - Trunk width
    pub fn new(obs_dim: i64, action_dim: i64, hidden_dim: i64) -> Self {
        let config = MlpConfig { hidden_dim, ..Default::default() };
        Self::with_config(obs_dim, action_dim, config)
    }

    /// Create a policy with a custom configuration
    pub fn with_config(obs_dim: i64, action_dim: i64, config: MlpConfig) -> Self {
        let device = config.device;
        tracing::info!("MlpPolicy using device: {:?}", device);
        let vs = nn::VarStore::new(device);
        let root = vs.root();

        let hidden_init = if config.use_orthogonal_init {
            Init::Orthogonal { gain: 2.0_f64.sqrt() }
        } else {
            Init::Randn { mean: 0.0, stdev: 0.01 }
        };
        let trunk_config = nn::LinearConfig { ws_init: hidden_init, ..Default::default() };

        let mut shared = nn::seq();
        shared = shared
            .add(nn::linear(&root / "shared" / "fc1", obs_dim, config.hidden_dim, trunk_config))
            .add_fn(move |x| match config.activation {
                Activation::ReLU => x.relu(),
                Activation::Tanh => x.tanh(),
            });

        if config.num_layers >= 2 {
            shared = shared
                .add(nn::linear(
                    &root / "shared" / "fc2",
                    config.hidden_dim,
                    config.hidden_dim,
                    trunk_config,
                ))
                .add_fn(move |x| match config.activation {
                    Activation::ReLU => x.relu(),
                    Activation::Tanh => x.tanh(),
                });
        }

        let output_init = if config.use_orthogonal_init {
            Init::Orthogonal { gain: 0.01 }
        } else {
            Init::Randn { mean: 0.0, stdev: 0.01 }
        };
        let head_config = nn::LinearConfig { ws_init: output_init, ..Default::default() };

        let policy_head = nn::linear(&root / "policy", config.hidden_dim, action_dim, head_config);
        let value_head = nn::linear(&root / "value", config.hidden_dim, 1, head_config);

        Self { vs, shared, policy_head, value_head, device, action_dim }
    }

    /// Forward pass: action logits and state values
    ///
    /// `obs` is `[batch, obs_dim]`; returns logits `[batch, action_dim]`
    /// and values `[batch]`.
    pub fn forward(&self, obs: &Tensor) -> (Tensor, Tensor) {
        let features = self.shared.forward(obs);
        let logits = self.policy_head.forward(&features);
        let values = self.value_head.forward(&features).squeeze_dim(-1);
        (logits, values)
    }

    /// Action probabilities for a single observation
    ///
    /// Softmax over the logits, computed without building a gradient graph.
    /// The caller owns the random draw, which keeps all sampling on one
    /// seedable generator.
    pub fn action_probabilities(&self, obs: &[f32]) -> Result<Vec<f32>> {
        let obs_tensor = Tensor::from_slice(obs)
            .reshape([1, obs.len() as i64])
            .to_device(self.device);
        let probs = tch::no_grad(|| {
            let (logits, _) = self.forward(&obs_tensor);
            logits.softmax(-1, Kind::Float).squeeze_dim(0)
        });
        Ok(Vec::try_from(&probs)?)
    }

    /// Number of discrete actions
    pub fn action_dim(&self) -> i64 {
        self.action_dim
    }

    /// Device this policy lives on (CPU or CUDA)
    pub fn device(&self) -> Device {
        self.device
    }

    /// Reference to the variable store
    pub fn var_store(&self) -> &nn::VarStore {
        &self.vs
    }

    /// Mutable reference to the variable store
    pub fn var_store_mut(&mut self) -> &mut nn::VarStore {
        &mut self.vs
    }

    /// Create an Adam optimizer over all parameters
    pub fn optimizer(&self, learning_rate: f64) -> Result<nn::Optimizer> {
        Ok(nn::Adam::default().build(&self.vs, learning_rate)?)
    }

    /// Save model parameters to a file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        self.vs.save(path)?;
        Ok(())
    }

    /// Load model parameters from a file
    pub fn load<P: AsRef<std::path::Path>>(&mut self, path: P) -> Result<()> {
        self.vs.load(path)?;
        Ok(())
    }
}
