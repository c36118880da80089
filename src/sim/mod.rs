//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, health drains per tick
//! - Seeded RNG only
//! - No rendering, storage or platform dependencies

pub mod piece;
pub mod state;
pub mod tick;
pub mod tower;

pub use piece::{Orientation, Piece, Side, new_piece};
pub use state::{GameEvent, GamePhase, TowerManager};
pub use tick::{IdleMode, TickInput, safe_side, tick};
pub use tower::{Tower, rest_y};
