//! Transition batch storage
//!
//! Holds the transitions collected since the last update as parallel
//! columns, ready to be turned into tensors. The driver pushes one
//! transition per environment step and clears the batch after every
//! update, so the batch never outlives a single update interval.

/// Fixed-capacity batch of `(obs, action, reward, next_obs, done)` columns
///
/// Observations are stored flattened (`len * obs_dim`) so tensor creation
/// is a single reshape. Done flags are stored as `f32` because they feed
/// straight into the TD-target mask.
#[derive(Debug, Clone)]
pub struct TransitionBatch {
    capacity: usize,
    obs_dim: usize,
    observations: Vec<f32>,
    actions: Vec<i64>,
    rewards: Vec<f32>,
    next_observations: Vec<f32>,
    dones: Vec<f32>,
}

impl TransitionBatch {
    /// Create an empty batch
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of transitions that triggers an update
    /// * `obs_dim` - Observation dimensionality
    pub fn new(capacity: usize, obs_dim: usize) -> Self {
        Self {
            capacity,
            obs_dim,
            observations: Vec::with_capacity(capacity * obs_dim),
            actions: Vec::with_capacity(capacity),
            rewards: Vec::with_capacity(capacity),
            next_observations: Vec::with_capacity(capacity * obs_dim),
            dones: Vec::with_capacity(capacity),
        }
    }

    /// Append one transition
    pub fn push(
        &mut self,
        observation: &[f32],
        action: i64,
        reward: f32,
        next_observation: &[f32],
        done: bool,
    ) {
        debug_assert_eq!(observation.len(), self.obs_dim, "observation dim mismatch");
        debug_assert_eq!(next_observation.len(), self.obs_dim, "next observation dim mismatch");
        debug_assert!(self.len() < self.capacity, "batch already full");

        self.observations.extend_from_slice(observation);
        self.actions.push(action);
        self.rewards.push(reward);
        self.next_observations.extend_from_slice(next_observation);
        self.dones.push(if done { 1.0 } else { 0.0 });
    }

    /// Number of transitions held
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the batch holds no transitions
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Whether the batch has reached its update trigger size
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    /// Drop all transitions, keeping the allocation
    pub fn clear(&mut self) {
        self.observations.clear();
        self.actions.clear();
        self.rewards.clear();
        self.next_observations.clear();
        self.dones.clear();
    }

    /// Update trigger size
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Observation dimensionality
    pub fn obs_dim(&self) -> usize {
        self.obs_dim
    }

    /// Flattened observations, `len * obs_dim`
    pub fn observations(&self) -> &[f32] {
        &self.observations
    }

    /// Action indices
    pub fn actions(&self) -> &[i64] {
        &self.actions
    }

    /// Rewards
    pub fn rewards(&self) -> &[f32] {
        &self.rewards
    }

    /// Flattened next observations, `len * obs_dim`
    pub fn next_observations(&self) -> &[f32] {
        &self.next_observations
    }

    /// Done flags as 0.0/1.0
    pub fn dones(&self) -> &[f32] {
        &self.dones
    }

    /// Bootstrap mask: `1 - done` per transition
    ///
    /// Multiplying the next-state value by this zeroes the bootstrap term
    /// on episode boundaries.
    pub fn continue_mask(&self) -> Vec<f32> {
        self.dones.iter().map(|&done| 1.0 - done).collect()
    }
}
