//! Play session driver
//!
//! Runs the simulation on a fixed timestep and handles what the sim leaves
//! to its collaborators: menu visibility and the persisted high score.

use crate::consts::*;
use crate::highscores;
use crate::persistence::KeyValueStore;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, IdleMode, Side, TickInput, TowerManager, tick};

/// A running game wired to a store
#[derive(Debug)]
pub struct Session<S: KeyValueStore> {
    state: TowerManager,
    store: S,
    input: TickInput,
    sim_dt: f64,
    accumulator: f64,
    /// Stored best, as last shown on the menu
    high_score: u32,
    /// Whether the last finished run set a new best
    new_record: bool,
    games_played: u32,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(seed: u64, settings: &Settings, store: S) -> Self {
        let high_score = highscores::best(&store);
        log::info!("Session created with seed {} (high score {})", seed, high_score);

        Self {
            state: TowerManager::new(seed, settings),
            store,
            input: TickInput::default(),
            sim_dt: settings.sim_dt(),
            accumulator: 0.0,
            high_score,
            new_record: false,
            games_played: 0,
        }
    }

    pub fn state(&self) -> &TowerManager {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn new_record(&self) -> bool {
        self.new_record
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn menu_visible(&self) -> bool {
        self.state.phase().shows_menu()
    }

    /// Play button / tap, applied on the next tick
    pub fn press(&mut self) {
        self.input.activate = true;
    }

    /// Cut from `side` on the next tick
    pub fn strike(&mut self, side: Side) {
        self.input.strike = Some(side);
    }

    pub fn set_idle(&mut self, idle: Option<IdleMode>) {
        self.input.idle = idle;
    }

    /// Feed one rendered frame's worth of time. Returns the ticks run.
    pub fn update(&mut self, frame_dt: f64) -> u32 {
        if !frame_dt.is_finite() {
            log::warn!("Ignoring frame delta {}", frame_dt);
            return 0;
        }
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.sim_dt && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= self.sim_dt;
            substeps += 1;
        }
        substeps
    }

    /// Run exactly one simulation tick
    pub fn step(&mut self) {
        let before = self.state.phase();
        tick(&mut self.state, &self.input, self.sim_dt);

        // Clear one-shot inputs after processing
        self.input.activate = false;
        self.input.strike = None;

        let events: Vec<GameEvent> = self.state.drain_events().collect();
        for event in events {
            self.handle_event(event);
        }

        let after = self.state.phase();
        if before != after && after.shows_menu() {
            // Menu is (re)displayed, show the current best
            self.high_score = highscores::best(&self.store);
        }
    }

    fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Started => {
                self.new_record = false;
            }
            GameEvent::PieceCut { .. } => {}
            GameEvent::GameOver { score } => {
                self.games_played += 1;
                self.new_record = highscores::record(&mut self.store, score);
                log::info!(
                    "Game {} over: score {}, best {}",
                    self.games_played,
                    score,
                    highscores::best(&self.store)
                );
            }
        }
    }

    /// Whether the session is waiting on the game over menu
    pub fn is_over(&self) -> bool {
        self.state.phase() == GamePhase::GameOver
    }

    /// Start a game from the menu and tick until it ends.
    /// Returns the ticks played, or `None` if `max_ticks` ran out first
    /// (the run is then still in progress).
    pub fn run_game(&mut self, max_ticks: u64) -> Option<u64> {
        if self.menu_visible() {
            self.press();
        }

        let mut ticks = 0;
        while ticks < max_ticks {
            self.step();
            ticks += 1;
            if self.is_over() {
                return Some(ticks);
            }
        }
        None
    }
}
