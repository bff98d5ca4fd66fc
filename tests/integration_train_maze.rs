//! End-to-end training integration test
//!
//! Runs the full driver (environment + trainer + logging) on a small maze
//! and checks that seeded runs are exactly reproducible and structurally
//! sound.

use maze_rl::env::maze::{MazeAction, MazeEnv};
use maze_rl::env::Environment;
use maze_rl::policy::{MlpConfig, MlpPolicy};
use maze_rl::train::{train, A2CConfig, A2CTrainer, TrainOptions};
use tch::Device;

fn seeded_trainer(policy_seed: i64, sampling_seed: u64) -> A2CTrainer {
    tch::manual_seed(policy_seed);
    let policy = MlpPolicy::with_config(9, 4, MlpConfig::default().device(Device::Cpu));
    A2CTrainer::with_seed(A2CConfig::default(), policy, sampling_seed).unwrap()
}

fn run_training(env_seed: u64) -> Vec<f32> {
    let mut env = MazeEnv::with_seed(5, 60, env_seed);
    let mut trainer = seeded_trainer(0, 99);
    let options = TrainOptions::new().episodes(3);

    let history = train(&mut env, &mut trainer, &options).unwrap();
    history.rewards().to_vec()
}

#[test]
fn test_seeded_training_is_reproducible() {
    let first = run_training(42);
    let second = run_training(42);

    assert_eq!(first.len(), 3);
    assert_eq!(first, second, "identical seeds must give identical reward sequences");
}

#[test]
fn test_training_rewards_are_structurally_valid() {
    let mut env = MazeEnv::with_seed(11, 200, 7);
    let mut trainer = seeded_trainer(3, 31);

    let mut observation = env.reset().unwrap();
    let mut step_rewards = Vec::new();
    loop {
        let index = trainer.select_action(&observation).unwrap();
        let action = MazeAction::from_index(index).unwrap();
        let result = env.step(action).unwrap();
        step_rewards.push(result.reward);
        let done = result.done();
        observation = result.observation;
        if done {
            break;
        }
    }

    // Done fires exactly at the step limit, never before.
    assert_eq!(step_rewards.len(), 200);
    for reward in step_rewards {
        assert!(
            reward == 10.0 || reward == -0.1 || reward == 0.0,
            "unexpected step reward {}",
            reward
        );
    }
}

#[test]
fn test_training_writes_csv_log() {
    let csv_path = std::env::temp_dir().join("maze_rl_integration_rewards.csv");
    let _ = std::fs::remove_file(&csv_path);

    let mut env = MazeEnv::with_seed(5, 40, 5);
    let mut trainer = seeded_trainer(1, 13);
    let options = TrainOptions::new().episodes(2).csv_path(&csv_path);

    let history = train(&mut env, &mut trainer, &options).unwrap();
    assert_eq!(history.len(), 2);

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3, "header plus one row per episode");
    assert_eq!(lines[0], "Episode,Reward,Average Reward (Last 100)");
    assert!(lines[1].starts_with("0,"));
    assert!(lines[2].starts_with("1,"));

    std::fs::remove_file(&csv_path).ok();
}
