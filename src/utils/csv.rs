//! CSV reward log
//!
//! One row per episode mirroring the console output: episode index,
//! episode total, and the trailing average.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;

/// Buffered CSV writer for per-episode rewards
#[derive(Debug)]
pub struct EpisodeCsv {
    writer: BufWriter<File>,
}

impl EpisodeCsv {
    /// Create the file and write the header row
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "Episode,Reward,Average Reward (Last 100)")?;
        Ok(Self { writer })
    }

    /// Append one episode row
    pub fn append(&mut self, episode: usize, reward: f32, average: f32) -> Result<()> {
        writeln!(self.writer, "{},{},{}", episode, reward, average)?;
        Ok(())
    }

    /// Flush buffered rows to disk
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
