//! Train A2C on the grid maze
//!
//! End-to-end training driver: builds the maze and the actor-critic,
//! runs the episodic training loop, then replays one rendered episode
//! with the learned policy.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin train_maze
//! ```

use anyhow::{anyhow, Result};
use maze_rl::env::maze::{MazeAction, MazeEnv, OBSERVATION_LEN};
use maze_rl::env::Environment;
use maze_rl::policy::MlpPolicy;
use maze_rl::render::{AnsiRenderer, Renderer};
use maze_rl::train::{train, A2CConfig, A2CTrainer, TrainOptions};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    tracing::info!("Starting maze A2C training");

    // Hyperparameters
    const MAZE_SIZE: usize = 11;
    const EPISODES: usize = 10_000;
    const LEARNING_RATE: f64 = 5e-4;
    const HIDDEN_DIM: i64 = 128;
    const CSV_PATH: &str = "maze_rewards.csv";

    let mut env = MazeEnv::new(MAZE_SIZE);

    tracing::info!("Environment: {}x{} maze", MAZE_SIZE, MAZE_SIZE);
    tracing::info!("  Observation dim: {}", OBSERVATION_LEN);
    tracing::info!("  Action dim: {}", MazeAction::COUNT);
    tracing::info!("  Max steps per episode: {}", env.max_steps());

    let policy = MlpPolicy::new(OBSERVATION_LEN as i64, MazeAction::COUNT as i64, HIDDEN_DIM);

    let config = A2CConfig::new()
        .learning_rate(LEARNING_RATE)
        .gamma(0.99)
        .vf_coef(0.5)
        .ent_coef(0.01)
        .batch_size(32);
    let mut trainer = A2CTrainer::new(config, policy)?;

    let options = TrainOptions::new().episodes(EPISODES).csv_path(CSV_PATH);

    tracing::info!("Training for {} episodes...", EPISODES);
    let history = train(&mut env, &mut trainer, &options)?;

    tracing::info!("Training complete");
    tracing::info!("Total steps: {}", trainer.total_steps());
    tracing::info!("Final average reward: {:.2}", history.trailing_average());
    tracing::info!("Reward log written to {}", CSV_PATH);

    // Replay one episode with rendering to show the learned behavior.
    let renderer = AnsiRenderer::new();
    let mut observation = env.reset()?;
    let mut total_reward = 0.0_f32;

    loop {
        println!("{}", renderer.render(&env.view()));

        let action_index = trainer.select_action(&observation)?;
        let action = MazeAction::from_index(action_index)
            .ok_or_else(|| anyhow!("sampled action index {} out of range", action_index))?;
        let result = env.step(action)?;

        total_reward += result.reward;
        let done = result.done();
        observation = result.observation;
        if done {
            break;
        }
    }

    println!("Test episode finished. Total reward: {:.2}", total_reward);

    Ok(())
}
