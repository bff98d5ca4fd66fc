//! ANSI terminal renderer
//!
//! Box-drawn grid with color-coded cells: walls on a blue background,
//! open floor on cyan, the agent marked `A` on red, and the reward marked
//! `R` on green.

use super::Renderer;
use crate::env::maze::{Cell, GridView};

const BLUE: &str = "\x1b[44m";
const RED: &str = "\x1b[41m";
const GREEN: &str = "\x1b[42m";
const CYAN: &str = "\x1b[46m";
const WHITE: &str = "\x1b[37m";
const RESET: &str = "\x1b[0m";

/// Color terminal renderer for the maze grid
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiRenderer;

impl AnsiRenderer {
    /// Create a renderer
    pub fn new() -> Self {
        Self
    }

    fn rule(size: usize, out: &mut String) {
        out.push_str(WHITE);
        out.push('+');
        for _ in 0..size {
            out.push_str("---+");
        }
        out.push_str(RESET);
        out.push('\n');
    }
}

impl Renderer for AnsiRenderer {
    fn render(&self, view: &GridView) -> String {
        let mut out = String::new();
        Self::rule(view.size, &mut out);

        for row in 0..view.size {
            out.push_str(WHITE);
            out.push('|');
            for col in 0..view.size {
                let here = (row, col);
                // The reward marker wins when both occupy the same cell.
                if here == (view.reward.row, view.reward.col) {
                    out.push_str(GREEN);
                    out.push_str(" R ");
                } else if here == (view.agent.row, view.agent.col) {
                    out.push_str(RED);
                    out.push_str(" A ");
                } else if view.cell(row, col) == Cell::Wall {
                    out.push_str(BLUE);
                    out.push_str("   ");
                } else {
                    out.push_str(CYAN);
                    out.push_str("   ");
                }
                out.push_str(RESET);
                out.push_str(WHITE);
                out.push('|');
            }
            out.push_str(RESET);
            out.push('\n');
            Self::rule(view.size, &mut out);
        }

        out
    }
}
