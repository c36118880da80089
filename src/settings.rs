//! Game settings and tunables
//!
//! Loaded from a JSON file next to the store. Missing fields take their
//! defaults so older files keep working.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Environment variable pointing at the settings file
pub const SETTINGS_PATH_ENV: &str = "SUSHI_NEKO_SETTINGS";
/// Settings file used when the environment variable is unset
pub const DEFAULT_SETTINGS_PATH: &str = "sushi_neko_settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed run seed; a random one is drawn when absent
    pub seed: Option<u64>,

    // === Tower ===
    /// Random pieces stacked on top of the two seed pieces at session start
    pub lookahead_pieces: usize,

    // === Health ===
    /// Health lost per playing tick
    pub health_decay: f64,
    /// Health regained per successful cut
    pub health_per_cut: f64,

    // === Timing ===
    /// Simulation ticks per second
    pub tick_hz: f64,

    // === Demo ===
    /// Ticks between autoplayer strikes
    pub demo_strike_interval: u32,
    /// Sessions played by the headless demo before exiting
    pub demo_sessions: u32,
    /// Per-session tick cap for the headless demo
    pub demo_max_ticks: u64,

    /// Key-value store holding the high score
    pub store_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,

            lookahead_pieces: LOOKAHEAD_PIECES,

            health_decay: HEALTH_DECAY,
            health_per_cut: HEALTH_PER_CUT,

            tick_hz: TICK_HZ,

            demo_strike_interval: 12,
            demo_sessions: 3,
            demo_max_ticks: 60 * 60 * 10,

            store_path: PathBuf::from("sushi_neko_store.json"),
        }
    }
}

impl Settings {
    /// Fixed timestep derived from `tick_hz`, falling back to 60 Hz for bad values
    pub fn sim_dt(&self) -> f64 {
        if self.tick_hz.is_finite() && self.tick_hz > 0.0 {
            1.0 / self.tick_hz
        } else {
            SIM_DT
        }
    }

    /// Path from the environment, or the default file name
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH))
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings {}: {}", path.display(), e),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Could not read settings {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => match fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Could not save settings {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }
}
