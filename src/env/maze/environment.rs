//! Maze environment implementation
//!
//! This module implements the `MazeEnv` struct and the `Environment` trait
//! for the single-agent grid maze.
//!
//! # Dynamics
//!
//! Each step the agent tries to move one cell; moving into a wall (or
//! against the grid edge) leaves it in place and costs a small penalty.
//! Landing on the reward cell pays +10 and moves the reward to a fresh open
//! cell. Episodes are truncated after a fixed number of steps regardless of
//! how many rewards were collected.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::layout::MazeLayout;
use super::types::{Cell, GridView, MazeAction, Position};
use crate::env::{Environment, SpaceInfo, SpaceType, StepInfo, StepResult};

/// Flattened length of the 3x3 neighborhood observation
pub const OBSERVATION_LEN: usize = 9;

/// Default per-episode step limit
pub const DEFAULT_MAX_STEPS: usize = 200;

/// Reward for collecting the reward cell
const PICKUP_REWARD: f32 = 10.0;

/// Penalty for bumping into a wall
const WALL_PENALTY: f32 = -0.1;

/// Single-agent grid-maze environment
#[derive(Debug)]
pub struct MazeEnv {
    layout: MazeLayout,
    open_positions: Vec<Position>,
    agent_position: Position,
    reward_position: Position,
    steps: usize,
    max_steps: usize,
    rng: StdRng,
}

impl MazeEnv {
    /// Create a maze with the default step limit and an entropy-seeded RNG
    pub fn new(size: usize) -> Self {
        Self::with_rng(size, DEFAULT_MAX_STEPS, StdRng::from_entropy())
    }

    /// Create a maze with a fixed seed, for reproducible runs
    pub fn with_seed(size: usize, max_steps: usize, seed: u64) -> Self {
        Self::with_rng(size, max_steps, StdRng::seed_from_u64(seed))
    }

    /// Create a maze with an explicit random source
    ///
    /// The RNG is the only source of randomness the environment uses: it
    /// drives the initial placement and every reward respawn.
    pub fn with_rng(size: usize, max_steps: usize, rng: StdRng) -> Self {
        let layout = MazeLayout::generate(size);
        let open_positions = layout.open_positions();
        let center = layout.center();

        let mut env = Self {
            layout,
            open_positions,
            agent_position: center,
            reward_position: center,
            steps: 0,
            max_steps,
            rng,
        };
        env.reset_state();
        env
    }

    /// Grid side length
    pub fn size(&self) -> usize {
        self.layout.size()
    }

    /// Per-episode step limit
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Steps taken in the current episode
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Current agent position
    pub fn agent_position(&self) -> Position {
        self.agent_position
    }

    /// Current reward position
    pub fn reward_position(&self) -> Position {
        self.reward_position
    }

    /// The immutable wall layout
    pub fn layout(&self) -> &MazeLayout {
        &self.layout
    }

    /// Flattened 3x3 neighborhood centered on the agent
    ///
    /// Out-of-bounds neighbors read as walls, so an agent near the border
    /// perceives the boundary the same way it perceives interior walls.
    /// Pure: never mutates state.
    pub fn observation(&self) -> Vec<f32> {
        let size = self.layout.size() as isize;
        let row = self.agent_position.row as isize;
        let col = self.agent_position.col as isize;

        let mut observation = Vec::with_capacity(OBSERVATION_LEN);
        for dr in -1..=1 {
            for dc in -1..=1 {
                let (r, c) = (row + dr, col + dc);
                let cell = if r < 0 || c < 0 || r >= size || c >= size {
                    Cell::Wall
                } else {
                    self.layout.cell(Position::new(r as usize, c as usize))
                };
                observation.push(cell.value());
            }
        }
        observation
    }

    /// Snapshot of the grid for rendering
    pub fn view(&self) -> GridView {
        GridView {
            size: self.layout.size(),
            cells: self.layout.cells().to_vec(),
            agent: self.agent_position,
            reward: self.reward_position,
            steps: self.steps,
        }
    }

    fn reset_state(&mut self) {
        self.steps = 0;
        self.agent_position = self.random_open_position();
        self.reward_position = self.random_open_position();
    }

    /// Uniform draw over the open cells
    fn random_open_position(&mut self) -> Position {
        let index = self.rng.gen_range(0..self.open_positions.len());
        self.open_positions[index]
    }
}

impl Environment for MazeEnv {
    type Observation = Vec<f32>;
    type Action = MazeAction;

    fn reset(&mut self) -> Result<Self::Observation> {
        self.reset_state();
        Ok(self.observation())
    }

    fn step(&mut self, action: Self::Action) -> Result<StepResult<Self::Observation>> {
        self.steps += 1;

        let candidate = action.apply(self.agent_position, self.layout.size());
        let blocked = !self.layout.is_open(candidate);
        if !blocked {
            self.agent_position = candidate;
        }

        // Pickup is checked first; it cannot coincide with a bump because
        // the reward cell is always open.
        let reward = if self.agent_position == self.reward_position {
            self.reward_position = self.random_open_position();
            PICKUP_REWARD
        } else if blocked {
            WALL_PENALTY
        } else {
            0.0
        };

        let truncated = self.steps >= self.max_steps;

        Ok(StepResult {
            observation: self.observation(),
            reward,
            terminated: false,
            truncated,
            info: StepInfo::default(),
        })
    }

    fn observation_space(&self) -> SpaceInfo {
        SpaceInfo { shape: vec![OBSERVATION_LEN], dtype: SpaceType::Continuous }
    }

    fn action_space(&self) -> SpaceInfo {
        SpaceInfo { shape: vec![], dtype: SpaceType::Discrete(MazeAction::COUNT) }
    }
}
