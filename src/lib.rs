//! Sushi Neko - a vertical sushi-stacking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tower, pieces, game state, tick)
//! - `persistence`: Key-value store port with memory and file backends
//! - `highscores`: Single persisted high score
//! - `settings`: Data-driven tunables
//! - `session`: Fixed timestep driver wiring the sim to persistence
//! - `oracle`: The "shake for an answer" utility

pub mod highscores;
pub mod oracle;
pub mod persistence;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::HIGH_SCORE_KEY;
pub use oracle::Oracle;
pub use persistence::{FileStore, KeyValueStore, MemoryStore};
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::DVec2;

    /// Vertical distance between stacked pieces
    pub const PIECE_STEP: f64 = 55.0;
    /// Resting y of the lowest active piece
    pub const REST_LINE_Y: f64 = 215.0;
    /// Fraction of the remaining gap closed per settle tick
    pub const SETTLE_FACTOR: f64 = 0.5;

    /// The permanent base piece the tower stands on
    pub const BASE_POSITION: DVec2 = DVec2::new(160.0, REST_LINE_Y - PIECE_STEP);
    pub const BASE_STACK_ORDER: i32 = 1;

    /// Health lost per playing tick
    pub const HEALTH_DECAY: f64 = 0.01;
    /// Health regained per successful cut
    pub const HEALTH_PER_CUT: f64 = 0.1;
    pub const MAX_HEALTH: f64 = 1.0;

    /// Random pieces stacked above the seed pieces (just past the top of the screen)
    pub const LOOKAHEAD_PIECES: usize = 10;

    /// Simulation rate, one tick per rendered frame
    pub const TICK_HZ: f64 = 60.0;
    /// Fixed simulation timestep
    pub const SIM_DT: f64 = 1.0 / TICK_HZ;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta fed into the accumulator
    pub const MAX_FRAME_DT: f64 = 0.1;
}
