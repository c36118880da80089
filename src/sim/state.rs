//! Game state and the tower manager
//!
//! One `TowerManager` owns everything about a play session: the tower,
//! the phase, health and score. Restarting from the menu resets it in place.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::piece::{Orientation, Side};
use super::tower::Tower;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Menu shown, nothing played yet
    Title,
    /// Tower built, waiting for the first cut
    Ready,
    /// Health is draining
    Playing,
    /// Run ended, menu shown again
    GameOver,
}

impl GamePhase {
    /// Whether the menu overlay is visible in this phase
    pub fn shows_menu(self) -> bool {
        matches!(self, GamePhase::Title | GamePhase::GameOver)
    }
}

/// Things that happened during a tick, for the layer above to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh session entered `Ready`
    Started,
    /// The lowest piece was cut
    PieceCut { orientation: Orientation },
    /// The run ended with this score
    GameOver { score: u32 },
}

/// Tunables copied out of `Settings` at construction
#[derive(Debug, Clone, Copy)]
struct Tuning {
    lookahead_pieces: usize,
    health_decay: f64,
    health_per_cut: f64,
}

impl From<&Settings> for Tuning {
    fn from(settings: &Settings) -> Self {
        Self {
            lookahead_pieces: settings.lookahead_pieces,
            health_decay: settings.health_decay,
            health_per_cut: settings.health_per_cut,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TowerManager {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    tuning: Tuning,
    tower: Tower,
    phase: GamePhase,
    health: f64,
    score: u32,
    /// Which side the cat is standing on
    character: Side,
    /// Simulation ticks this session
    pub time_ticks: u64,
    /// Wall time fed in through `advance_simulation` this session
    pub elapsed: f64,
    events: Vec<GameEvent>,
}

impl TowerManager {
    /// Create a manager on the title screen with the given seed
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let tuning = Tuning::from(settings);
        let tower = build_tower(&mut rng, tuning.lookahead_pieces);

        Self {
            seed,
            rng,
            tuning,
            tower,
            phase: GamePhase::Title,
            health: MAX_HEALTH,
            score: 0,
            character: Side::default(),
            time_ticks: 0,
            elapsed: 0.0,
            events: Vec::new(),
        }
    }

    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    /// Set health, clamped to the top of the bar
    pub fn set_health(&mut self, health: f64) {
        self.health = health.min(MAX_HEALTH);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn character(&self) -> Side {
        self.character
    }

    /// Stack one piece on top of the tower
    pub fn append_piece(&mut self, orientation: Orientation) {
        self.tower.append_piece(orientation);
    }

    /// Stack `count` random pieces on top of the tower
    pub fn generate_random_run(&mut self, count: usize) {
        self.tower.generate_random_run(count, &mut self.rng);
    }

    /// Relax the tower toward its resting line
    pub fn settle_tick(&mut self) {
        self.tower.settle_tick();
    }

    /// Advance one frame. `dt` is only accumulated; health drains per tick.
    pub fn advance_simulation(&mut self, dt: f64) {
        self.settle_tick();
        self.time_ticks += 1;
        self.elapsed += dt;

        if self.phase != GamePhase::Playing {
            return;
        }

        self.set_health(self.health - self.tuning.health_decay);
        if self.health < 0.0 {
            log::info!("Out of health after {:.1}s", self.elapsed);
            self.game_over();
        }
    }

    /// Menu button / tap. Starts a fresh session from the title or game over screen.
    pub fn activate(&mut self) {
        if !self.phase.shows_menu() {
            return;
        }

        self.reset();
        self.phase = GamePhase::Ready;
        self.events.push(GameEvent::Started);
        log::info!("Session ready (seed {})", self.seed);
    }

    /// Cut from `side`. Hitting a piece loaded on that side ends the run.
    pub fn strike(&mut self, side: Side) {
        if !matches!(self.phase, GamePhase::Ready | GamePhase::Playing) {
            return;
        }

        self.character = side;
        if self.phase == GamePhase::Ready {
            self.phase = GamePhase::Playing;
            log::info!("Playing");
        }

        let Some(bottom) = self.tower.bottom() else {
            return;
        };
        if bottom.orientation.blocks(side) {
            log::info!("Hit by chopsticks on the {:?} side", side);
            self.game_over();
            return;
        }

        if let Some(cut) = self.tower.cut_bottom() {
            self.events.push(GameEvent::PieceCut {
                orientation: cut.orientation,
            });
            log::debug!("Cut {:?} piece from the {:?}", cut.orientation, side);
        }
        self.generate_random_run(1);
        self.set_health(self.health + self.tuning.health_per_cut);
        self.score += 1;
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!("Game over, score {}", self.score);
    }

    /// Fresh session state with a newly rolled tower
    fn reset(&mut self) {
        self.tower = build_tower(&mut self.rng, self.tuning.lookahead_pieces);
        self.health = MAX_HEALTH;
        self.score = 0;
        self.character = Side::default();
        self.time_ticks = 0;
        self.elapsed = 0.0;
    }
}

/// Two hand-placed pieces, then random ones up past the top of the screen
fn build_tower(rng: &mut Pcg32, lookahead: usize) -> Tower {
    let mut tower = Tower::new();
    tower.append_piece(Orientation::Empty);
    tower.append_piece(Orientation::Right);
    tower.generate_random_run(lookahead, rng);
    tower
}
