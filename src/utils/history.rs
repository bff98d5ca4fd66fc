//! Per-episode reward bookkeeping
//!
//! Append-only record of episode totals with a trailing moving average
//! over the most recent window.

/// Append-only reward history with a trailing average
#[derive(Debug, Clone)]
pub struct RewardHistory {
    rewards: Vec<f32>,
    window: usize,
}

impl RewardHistory {
    /// Create an empty history averaging over the last `window` episodes
    pub fn new(window: usize) -> Self {
        debug_assert!(window > 0, "window must be positive");
        Self { rewards: Vec::new(), window }
    }

    /// Record one episode total
    pub fn push(&mut self, reward: f32) {
        self.rewards.push(reward);
    }

    /// Number of episodes recorded
    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    /// Whether no episodes have been recorded
    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    /// All recorded episode totals, in order
    pub fn rewards(&self) -> &[f32] {
        &self.rewards
    }

    /// Mean of the last `min(window, len)` episode totals
    ///
    /// Zero when the history is empty.
    pub fn trailing_average(&self) -> f32 {
        if self.rewards.is_empty() {
            return 0.0;
        }
        let start = self.rewards.len().saturating_sub(self.window);
        let tail = &self.rewards[start..];
        tail.iter().sum::<f32>() / tail.len() as f32
    }
}
