//! Sushi pieces and the sides they can be loaded on

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Which side of a piece the chopsticks stick out on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Left,
    Right,
    /// No chopsticks, safe from either side
    Empty,
}

impl Orientation {
    /// Map a roll in `[0, 100)` to an orientation (45% left, 45% right, 10% empty)
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            0..45 => Orientation::Left,
            45..90 => Orientation::Right,
            _ => Orientation::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Orientation::Empty
    }

    /// Whether a character standing on `side` gets hit by this piece
    pub fn blocks(self, side: Side) -> bool {
        match self {
            Orientation::Left => side == Side::Left,
            Orientation::Right => side == Side::Right,
            Orientation::Empty => false,
        }
    }
}

/// Where the cat stands when striking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A placed sushi piece
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub orientation: Orientation,
    pub position: DVec2,
    /// Draw order; higher renders on top
    pub stack_order: i32,
}

/// Build a fresh piece
pub fn new_piece(orientation: Orientation, position: DVec2, stack_order: i32) -> Piece {
    Piece {
        orientation,
        position,
        stack_order,
    }
}
