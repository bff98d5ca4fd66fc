//! Per-update training statistics

/// Scalar losses from a single A2C update
///
/// `total_loss` is the value the optimizer actually stepped on:
/// `policy_loss + vf_coef * value_loss - ent_coef * entropy`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateStats {
    /// Advantage-weighted policy gradient loss
    pub policy_loss: f64,

    /// Mean squared TD error
    pub value_loss: f64,

    /// Mean entropy of the action distributions
    pub entropy: f64,

    /// Weighted sum the gradient step minimized
    pub total_loss: f64,
}

impl std::fmt::Display for UpdateStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "loss={:.4} policy={:.4} value={:.4} entropy={:.4}",
            self.total_loss, self.policy_loss, self.value_loss, self.entropy
        )
    }
}
