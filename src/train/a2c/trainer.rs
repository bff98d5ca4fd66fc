//! A2C trainer implementation
//!
//! This module contains the main `A2CTrainer` struct: action sampling
//! from the current policy and the batched update step.

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tch::{nn, Kind, Tensor};

use super::config::A2CConfig;
use super::loss::{entropy_bonus, policy_gradient_loss, td_delta, value_loss};
use super::stats::UpdateStats;
use crate::buffer::TransitionBatch;
use crate::policy::MlpPolicy;

/// A2C trainer
///
/// Owns the shared actor-critic policy, its optimizer, and the RNG that
/// drives action sampling. Parameters are mutated only by the optimizer
/// step inside [`A2CTrainer::update`].
pub struct A2CTrainer {
    config: A2CConfig,
    policy: MlpPolicy,
    optimizer: nn::Optimizer,
    rng: StdRng,
    total_steps: usize,
    total_episodes: usize,
}

impl A2CTrainer {
    /// Create a trainer with an entropy-seeded sampling RNG
    pub fn new(config: A2CConfig, policy: MlpPolicy) -> Result<Self> {
        Self::with_rng(config, policy, StdRng::from_entropy())
    }

    /// Create a trainer with a fixed sampling seed, for reproducible runs
    pub fn with_seed(config: A2CConfig, policy: MlpPolicy, seed: u64) -> Result<Self> {
        Self::with_rng(config, policy, StdRng::seed_from_u64(seed))
    }

    /// Create a trainer with an explicit sampling RNG
    pub fn with_rng(config: A2CConfig, policy: MlpPolicy, rng: StdRng) -> Result<Self> {
        config.validate()?;
        let optimizer = policy.optimizer(config.learning_rate)?;

        Ok(Self {
            config,
            policy,
            optimizer,
            rng,
            total_steps: 0,
            total_episodes: 0,
        })
    }

    /// Get reference to the policy
    pub fn policy(&self) -> &MlpPolicy {
        &self.policy
    }

    /// Get mutable reference to the policy
    pub fn policy_mut(&mut self) -> &mut MlpPolicy {
        &mut self.policy
    }

    /// Get the configuration
    pub fn config(&self) -> &A2CConfig {
        &self.config
    }

    /// Total environment steps recorded
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Total episodes recorded
    pub fn total_episodes(&self) -> usize {
        self.total_episodes
    }

    /// Increment the step counter
    pub fn increment_steps(&mut self, steps: usize) {
        self.total_steps += steps;
    }

    /// Increment the episode counter
    pub fn increment_episodes(&mut self, episodes: usize) {
        self.total_episodes += episodes;
    }

    /// Sample an action index from the current policy
    ///
    /// Softmax over the policy logits, then one categorical draw from the
    /// trainer's RNG. Stochastic by construction; there is no separate
    /// exploration schedule.
    pub fn select_action(&mut self, observation: &[f32]) -> Result<i64> {
        let probs = self.policy.action_probabilities(observation)?;
        let draw: f32 = self.rng.gen();

        let mut cumulative = 0.0;
        for (index, &p) in probs.iter().enumerate() {
            cumulative += p;
            if draw < cumulative {
                return Ok(index as i64);
            }
        }
        // Rounding can leave the cumulative sum a hair under 1.0.
        Ok(probs.len() as i64 - 1)
    }

    /// One A2C gradient step over a batch of transitions
    ///
    /// Computes the TD(0) error, detaches it as the policy-gradient
    /// advantage, regresses the critic on the same (non-detached) error,
    /// adds the entropy bonus, and takes a single optimizer step.
    pub fn update(&mut self, batch: &TransitionBatch) -> Result<UpdateStats> {
        if batch.is_empty() {
            return Err(anyhow!("update requires at least one transition"));
        }

        let device = self.policy.device();
        let n = batch.len() as i64;
        let obs_dim = batch.obs_dim() as i64;

        let observations = Tensor::from_slice(batch.observations())
            .reshape([n, obs_dim])
            .to_device(device);
        let next_observations = Tensor::from_slice(batch.next_observations())
            .reshape([n, obs_dim])
            .to_device(device);
        let actions = Tensor::from_slice(batch.actions()).to_device(device);
        let rewards = Tensor::from_slice(batch.rewards()).to_device(device);
        let continues = Tensor::from_slice(&batch.continue_mask()).to_device(device);

        let (logits, values) = self.policy.forward(&observations);
        let (_, next_values) = self.policy.forward(&next_observations);

        let delta = td_delta(&rewards, &next_values, &continues, &values, self.config.gamma);
        // The critic's own error must not flow back through the term it
        // weights; only the log-prob path trains the actor.
        let advantages = delta.detach();

        let log_probs = logits.log_softmax(-1, Kind::Float);
        let action_log_probs = log_probs
            .gather(-1, &actions.unsqueeze(-1), false)
            .squeeze_dim(-1);

        let policy_loss = policy_gradient_loss(&action_log_probs, &advantages);
        let value_loss = value_loss(&delta);
        let entropy = entropy_bonus(&log_probs);

        let policy_loss_val = f64::try_from(&policy_loss).unwrap_or(0.0);
        let value_loss_val = f64::try_from(&value_loss).unwrap_or(0.0);
        let entropy_val = f64::try_from(&entropy).unwrap_or(0.0);

        let loss =
            &policy_loss + self.config.vf_coef * &value_loss - self.config.ent_coef * &entropy;
        let total_loss_val = f64::try_from(&loss).unwrap_or(0.0);

        self.optimizer.zero_grad();
        loss.backward();
        self.optimizer.step();

        Ok(UpdateStats {
            policy_loss: policy_loss_val,
            value_loss: value_loss_val,
            entropy: entropy_val,
            total_loss: total_loss_val,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::MlpConfig;
    use tch::Device;

    fn cpu_policy() -> MlpPolicy {
        let config = MlpConfig::default().device(Device::Cpu);
        MlpPolicy::with_config(9, 4, config)
    }

    fn cpu_trainer(config: A2CConfig) -> A2CTrainer {
        A2CTrainer::with_seed(config, cpu_policy(), 11).unwrap()
    }

    /// Zero every parameter so logits are uniform and values are zero.
    fn zero_weights(policy: &MlpPolicy) {
        tch::no_grad(|| {
            for (_, mut tensor) in policy.var_store().variables() {
                let _ = tensor.fill_(0.0);
            }
        });
    }

    /// Set the value-head bias so the critic predicts a constant.
    fn set_constant_value(policy: &MlpPolicy, value: f64) {
        tch::no_grad(|| {
            let variables = policy.var_store().variables();
            let mut bias = variables.get("value.bias").unwrap().shallow_clone();
            let _ = bias.fill_(value);
        });
    }

    fn one_transition_batch(reward: f32, done: bool) -> TransitionBatch {
        let mut batch = TransitionBatch::new(32, 9);
        batch.push(&[0.0; 9], 1, reward, &[0.0; 9], done);
        batch
    }

    #[test]
    fn test_update_rejects_empty_batch() {
        let mut trainer = cpu_trainer(A2CConfig::default());
        let batch = TransitionBatch::new(32, 9);
        assert!(trainer.update(&batch).is_err());
    }

    #[test]
    fn test_select_action_in_range() {
        let mut trainer = cpu_trainer(A2CConfig::default());
        for _ in 0..50 {
            let action = trainer.select_action(&[0.0; 9]).unwrap();
            assert!((0..4).contains(&action));
        }
    }

    #[test]
    fn test_update_on_single_done_transition_with_zero_weights() {
        let mut trainer = cpu_trainer(A2CConfig::default());
        zero_weights(trainer.policy());

        let reward = 10.0;
        let stats = trainer.update(&one_transition_batch(reward, true)).unwrap();

        // Uniform logits over 4 actions, zero value estimate:
        //   delta     = reward
        //   policy    = -log(1/4) * reward
        //   value     = reward^2
        //   entropy   = ln 4
        let log_quarter = (0.25_f64).ln();
        let expected_policy = -log_quarter * reward as f64;
        let expected_value = (reward as f64).powi(2);
        let expected_entropy = 4.0_f64.ln();
        let expected_total = expected_policy + 0.5 * expected_value - 0.01 * expected_entropy;

        assert!((stats.policy_loss - expected_policy).abs() < 1e-3, "{:?}", stats);
        assert!((stats.value_loss - expected_value).abs() < 1e-3, "{:?}", stats);
        assert!((stats.entropy - expected_entropy).abs() < 1e-4, "{:?}", stats);
        assert!((stats.total_loss - expected_total).abs() < 1e-3, "{:?}", stats);
    }

    #[test]
    fn test_done_mask_zeroes_bootstrap() {
        let config = A2CConfig::default().gamma(0.99);
        let critic_value = 0.5;
        let reward = 1.0_f64;

        // Terminal transition: delta = reward - value.
        let mut trainer = cpu_trainer(config.clone());
        zero_weights(trainer.policy());
        set_constant_value(trainer.policy(), critic_value);
        let stats = trainer.update(&one_transition_batch(reward as f32, true)).unwrap();
        let expected_delta = reward - critic_value;
        assert!((stats.value_loss - expected_delta.powi(2)).abs() < 1e-4, "{:?}", stats);

        // Live transition: delta = reward + gamma * value - value.
        let mut trainer = cpu_trainer(config);
        zero_weights(trainer.policy());
        set_constant_value(trainer.policy(), critic_value);
        let stats = trainer.update(&one_transition_batch(reward as f32, false)).unwrap();
        let expected_delta = reward + 0.99 * critic_value - critic_value;
        assert!((stats.value_loss - expected_delta.powi(2)).abs() < 1e-4, "{:?}", stats);
    }

    #[test]
    fn test_update_shifts_policy_toward_advantaged_action() {
        let config = A2CConfig::default().learning_rate(0.05).ent_coef(0.0);
        let mut trainer = cpu_trainer(config);

        let observation = [0.0_f32; 9];
        let before = trainer.policy().action_probabilities(&observation).unwrap();

        // Repeatedly reward action 2 from the same state.
        for _ in 0..10 {
            let mut batch = TransitionBatch::new(32, 9);
            batch.push(&observation, 2, 10.0, &observation, true);
            trainer.update(&batch).unwrap();
        }

        let after = trainer.policy().action_probabilities(&observation).unwrap();
        assert!(
            after[2] > before[2],
            "P(action=2) should increase: {:.4} -> {:.4}",
            before[2],
            after[2]
        );
    }

    #[test]
    fn test_counters() {
        let mut trainer = cpu_trainer(A2CConfig::default());
        trainer.increment_steps(32);
        trainer.increment_episodes(1);
        assert_eq!(trainer.total_steps(), 32);
        assert_eq!(trainer.total_episodes(), 1);
    }
}
