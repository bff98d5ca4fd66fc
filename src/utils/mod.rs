//! Utility functions and helpers

pub mod csv;
pub mod history;

pub use csv::EpisodeCsv;
pub use history::RewardHistory;
