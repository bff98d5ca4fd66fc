//! Episodic training loop
//!
//! Thin driver tying the maze environment to the A2C trainer: sample,
//! step, accumulate transitions, update when the batch fills or the
//! episode ends, and log per-episode rewards to the console and an
//! optional CSV file.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::buffer::TransitionBatch;
use crate::env::maze::{MazeAction, MazeEnv, OBSERVATION_LEN};
use crate::env::Environment;
use crate::train::a2c::A2CTrainer;
use crate::utils::csv::EpisodeCsv;
use crate::utils::history::RewardHistory;

/// Window for the trailing reward average
pub const REWARD_WINDOW: usize = 100;

/// Options for a training run
#[derive(Debug, Clone)]
pub struct TrainOptions {
    /// Number of episodes to run
    pub episodes: usize,

    /// Where to write the per-episode CSV log, if anywhere
    pub csv_path: Option<PathBuf>,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self { episodes: 10_000, csv_path: None }
    }
}

impl TrainOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the episode count
    pub fn episodes(mut self, episodes: usize) -> Self {
        self.episodes = episodes;
        self
    }

    /// Set the CSV output path
    pub fn csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = Some(path.into());
        self
    }
}

/// Run the episodic training loop
///
/// Per episode: reset, then sample/step until the environment reports
/// done, updating the trainer every time the batch reaches its capacity
/// or the episode ends — whichever comes first — and clearing it after
/// each update. Returns the full per-episode reward history.
pub fn train(
    env: &mut MazeEnv,
    trainer: &mut A2CTrainer,
    options: &TrainOptions,
) -> Result<RewardHistory> {
    let mut history = RewardHistory::new(REWARD_WINDOW);
    let mut csv = match &options.csv_path {
        Some(path) => Some(EpisodeCsv::create(path)?),
        None => None,
    };

    let batch_size = trainer.config().batch_size;
    let mut batch = TransitionBatch::new(batch_size, OBSERVATION_LEN);

    for episode in 0..options.episodes {
        let mut observation = env.reset()?;
        let mut total_reward = 0.0_f32;
        let mut done = false;

        while !done {
            let action_index = trainer.select_action(&observation)?;
            let action = MazeAction::from_index(action_index)
                .ok_or_else(|| anyhow!("sampled action index {} out of range", action_index))?;

            let result = env.step(action)?;
            done = result.done();

            batch.push(&observation, action_index, result.reward, &result.observation, done);
            observation = result.observation;
            total_reward += result.reward;
            trainer.increment_steps(1);

            if batch.is_full() || done {
                let stats = trainer.update(&batch)?;
                tracing::debug!(episode, steps = env.steps(), %stats, "a2c update");
                batch.clear();
            }
        }

        trainer.increment_episodes(1);
        history.push(total_reward);
        let average = history.trailing_average();

        println!(
            "Episode {}, Reward: {:.2}, Average Reward (last 100): {:.2}",
            episode, total_reward, average
        );
        if let Some(csv) = csv.as_mut() {
            csv.append(episode, total_reward, average)?;
        }
    }

    if let Some(csv) = csv.as_mut() {
        csv.flush()?;
    }

    Ok(history)
}
