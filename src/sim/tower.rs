//! The sushi tower
//!
//! Pieces are stored bottom-up. The base piece the tower stands on is kept
//! separately and never moves; index 0 of `pieces` is the lowest piece the
//! player can cut.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::piece::{Orientation, Piece, new_piece};
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    base: Piece,
    pieces: Vec<Piece>,
}

impl Default for Tower {
    fn default() -> Self {
        Self::new()
    }
}

impl Tower {
    /// Empty tower standing on the base piece
    pub fn new() -> Self {
        Self {
            base: new_piece(Orientation::Empty, BASE_POSITION, BASE_STACK_ORDER),
            pieces: Vec::new(),
        }
    }

    pub fn base(&self) -> &Piece {
        &self.base
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Lowest cuttable piece
    pub fn bottom(&self) -> Option<&Piece> {
        self.pieces.first()
    }

    /// Topmost piece, falling back to the base piece
    pub fn top(&self) -> &Piece {
        self.pieces.last().unwrap_or(&self.base)
    }

    /// Stack a new piece one step above the current top
    pub fn append_piece(&mut self, orientation: Orientation) {
        let top = self.top();
        let position = top.position + glam::DVec2::new(0.0, PIECE_STEP);
        let piece = new_piece(orientation, position, top.stack_order + 1);
        self.pieces.push(piece);
    }

    /// Stack `count` random pieces, never placing two loaded pieces back to back
    pub fn generate_random_run<R: Rng>(&mut self, count: usize, rng: &mut R) {
        for _ in 0..count {
            let orientation = if !self.top().orientation.is_empty() {
                Orientation::Empty
            } else {
                Orientation::from_roll(rng.random_range(0..100))
            };
            self.append_piece(orientation);
        }
    }

    /// Move every piece halfway toward its resting height
    pub fn settle_tick(&mut self) {
        for (n, piece) in self.pieces.iter_mut().enumerate() {
            let rest_y = rest_y(n);
            piece.position.y -= (piece.position.y - rest_y) * SETTLE_FACTOR;
        }
    }

    /// Remove and return the lowest piece
    pub fn cut_bottom(&mut self) -> Option<Piece> {
        if self.pieces.is_empty() {
            return None;
        }
        Some(self.pieces.remove(0))
    }
}

/// Resting y for the piece at index `n`
pub fn rest_y(n: usize) -> f64 {
    n as f64 * PIECE_STEP + REST_LINE_Y
}
