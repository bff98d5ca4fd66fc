//! Maze rendering
//!
//! Rendering is a capability over an immutable [`GridView`] snapshot, so
//! a renderer can never perturb the environment it draws.

use crate::env::maze::GridView;

/// Turn a grid snapshot into displayable text
pub trait Renderer {
    /// Render the view; must not carry any environment state
    fn render(&self, view: &GridView) -> String;
}

pub mod ansi;

pub use ansi::AnsiRenderer;
