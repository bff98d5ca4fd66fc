//! Loss computation functions for A2C
//!
//! This module contains the core loss terms: the TD(0) error, the
//! advantage-weighted policy gradient loss, the critic regression loss,
//! and the entropy bonus.

use tch::{Kind, Tensor};

/// One-step TD error per transition
///
/// `delta_i = reward_i + gamma * next_value_i * continue_i - value_i`,
/// where `continues` is `1 - done` so episode boundaries drop the
/// bootstrap term. The result keeps its gradient graph: detach it for the
/// advantage, reuse it as-is for the critic loss.
pub fn td_delta(
    rewards: &Tensor,
    next_values: &Tensor,
    continues: &Tensor,
    values: &Tensor,
    gamma: f64,
) -> Tensor {
    rewards + gamma * next_values * continues - values
}

/// Advantage-weighted policy gradient loss
///
/// Negative mean of `log_prob(action) * advantage`. The advantage must
/// already be detached; the critic's error signal must not flow back
/// through the weighting term.
pub fn policy_gradient_loss(action_log_probs: &Tensor, advantages: &Tensor) -> Tensor {
    -(action_log_probs * advantages).mean(Kind::Float)
}

/// Critic regression loss: mean squared TD error
pub fn value_loss(delta: &Tensor) -> Tensor {
    delta.square().mean(Kind::Float)
}

/// Mean entropy of the categorical action distributions
///
/// `H = -sum p * log p` per row, averaged over the batch. Added to the
/// objective (subtracted from the loss) to discourage premature
/// deterministic policies.
pub fn entropy_bonus(log_probs: &Tensor) -> Tensor {
    let probs = log_probs.exp();
    -(probs * log_probs)
        .sum_dim_intlist([-1].as_slice(), false, Kind::Float)
        .mean(Kind::Float)
}
