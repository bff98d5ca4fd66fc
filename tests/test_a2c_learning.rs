//! Unit test to verify A2C can learn from synthetic data
//!
//! This test creates transitions where the optimal action is obvious:
//! - When obs=[1,0], action=0 earns a high reward
//! - When obs=[0,1], action=1 earns a high reward
//!
//! If the update is working correctly, after a few batches:
//! - P(action=0 | obs=[1,0]) should increase
//! - P(action=1 | obs=[0,1]) should increase

use maze_rl::buffer::TransitionBatch;
use maze_rl::policy::{MlpConfig, MlpPolicy};
use maze_rl::train::{A2CConfig, A2CTrainer};
use tch::Device;

const OBS_A: [f32; 2] = [1.0, 0.0];
const OBS_B: [f32; 2] = [0.0, 1.0];

#[test]
fn test_a2c_learns_from_synthetic_data() {
    tch::manual_seed(0);
    let policy = MlpPolicy::with_config(2, 2, MlpConfig::default().device(Device::Cpu));

    // High learning rate, no entropy pressure: focus purely on advantage.
    let config = A2CConfig::new().learning_rate(0.05).ent_coef(0.0);
    let mut trainer = A2CTrainer::with_seed(config, policy, 17).unwrap();

    let before_a = trainer.policy().action_probabilities(&OBS_A).unwrap();
    let before_b = trainer.policy().action_probabilities(&OBS_B).unwrap();

    println!("BEFORE training:");
    println!("  P(action=0 | obs=A) = {:.4}", before_a[0]);
    println!("  P(action=1 | obs=B) = {:.4}", before_b[1]);

    for _ in 0..30 {
        let mut batch = TransitionBatch::new(8, 2);
        for _ in 0..4 {
            batch.push(&OBS_A, 0, 10.0, &OBS_A, true);
            batch.push(&OBS_B, 1, 10.0, &OBS_B, true);
        }
        trainer.update(&batch).unwrap();
    }

    let after_a = trainer.policy().action_probabilities(&OBS_A).unwrap();
    let after_b = trainer.policy().action_probabilities(&OBS_B).unwrap();

    println!("AFTER training:");
    println!("  P(action=0 | obs=A) = {:.4}", after_a[0]);
    println!("  P(action=1 | obs=B) = {:.4}", after_b[1]);

    let delta_a = after_a[0] - before_a[0];
    let delta_b = after_b[1] - before_b[1];

    assert!(
        delta_a > 0.1,
        "A2C failed to learn: P(action=0 | obs=A) only increased by {:.4}",
        delta_a
    );
    assert!(
        delta_b > 0.1,
        "A2C failed to learn: P(action=1 | obs=B) only increased by {:.4}",
        delta_b
    );
}

#[test]
fn test_critic_tracks_terminal_reward() {
    tch::manual_seed(1);
    let policy = MlpPolicy::with_config(2, 2, MlpConfig::default().device(Device::Cpu));
    let config = A2CConfig::new().learning_rate(0.01).ent_coef(0.0);
    let mut trainer = A2CTrainer::with_seed(config, policy, 23).unwrap();

    // Every transition from OBS_A is terminal with reward 5, so the value
    // loss should shrink as the critic converges toward 5.
    let run_update = |trainer: &mut A2CTrainer| {
        let mut batch = TransitionBatch::new(8, 2);
        for _ in 0..8 {
            batch.push(&OBS_A, 0, 5.0, &OBS_A, true);
        }
        trainer.update(&batch).unwrap()
    };

    let first = run_update(&mut trainer);
    for _ in 0..60 {
        run_update(&mut trainer);
    }
    let last = run_update(&mut trainer);

    assert!(
        last.value_loss < first.value_loss,
        "value loss should decrease: {:.4} -> {:.4}",
        first.value_loss,
        last.value_loss
    );
}
