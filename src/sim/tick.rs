//! Per-frame simulation tick
//!
//! Applies one frame of input to the tower manager, then advances it.

use super::piece::{Orientation, Side};
use super::state::{GamePhase, TowerManager};

/// Autoplayer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleMode {
    /// Ticks between strikes (0 behaves like 1)
    pub strike_interval: u32,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Menu button / tap
    pub activate: bool,
    /// Cut from this side
    pub strike: Option<Side>,
    /// Idle/demo mode - the cat plays itself
    pub idle: Option<IdleMode>,
}

/// Advance the game by one frame
pub fn tick(state: &mut TowerManager, input: &TickInput, dt: f64) {
    let mut input = input.clone();
    if let Some(idle) = input.idle {
        match state.phase() {
            GamePhase::Title => input.activate = true,
            GamePhase::Ready | GamePhase::Playing => {
                let interval = u64::from(idle.strike_interval.max(1));
                if input.strike.is_none() && state.time_ticks % interval == 0 {
                    input.strike = Some(safe_side(state));
                }
            }
            GamePhase::GameOver => {}
        }
    }

    if input.activate {
        state.activate();
    }
    if let Some(side) = input.strike {
        state.strike(side);
    }

    state.advance_simulation(dt);
}

/// Side the lowest piece leaves open; stays put under an empty piece
pub fn safe_side(state: &TowerManager) -> Side {
    match state.tower().bottom().map(|p| p.orientation) {
        Some(Orientation::Left) => Side::Right,
        Some(Orientation::Right) => Side::Left,
        Some(Orientation::Empty) | None => state.character(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::settings::Settings;

    fn idle(strike_interval: u32) -> TickInput {
        TickInput {
            idle: Some(IdleMode { strike_interval }),
            ..Default::default()
        }
    }

    #[test]
    fn test_tick_title_to_ready_to_playing() {
        let mut state = TowerManager::new(12345, &Settings::default());
        assert_eq!(state.phase(), GamePhase::Title);

        // Tick without input - should stay on the title screen
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase(), GamePhase::Title);

        let input = TickInput {
            activate: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.phase(), GamePhase::Ready);

        // The seeded tower opens with an empty piece, safe from either side
        let input = TickInput {
            strike: Some(Side::Left),
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn test_idle_never_hits_chopsticks() {
        let mut state = TowerManager::new(99999, &Settings::default());
        let input = idle(1);

        for _ in 0..500 {
            tick(&mut state, &input, SIM_DT);
        }

        // Striking every tick refills faster than health drains
        assert_eq!(state.phase(), GamePhase::Playing);
        assert!(state.score() >= 400);
    }

    #[test]
    fn test_slow_idle_runs_out_of_health() {
        let mut state = TowerManager::new(4242, &Settings::default());
        let input = idle(20);

        for _ in 0..10_000 {
            tick(&mut state, &input, SIM_DT);
            if state.phase() == GamePhase::GameOver {
                break;
            }
        }

        assert_eq!(state.phase(), GamePhase::GameOver);
        assert!(state.health() < 0.0);
        assert!(state.score() > 0);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = TowerManager::new(777, &Settings::default());
        let mut state2 = TowerManager::new(777, &Settings::default());

        let input = idle(3);
        for _ in 0..300 {
            tick(&mut state1, &input, SIM_DT);
            tick(&mut state2, &input, SIM_DT);
        }

        assert_eq!(state1.score(), state2.score());
        assert_eq!(state1.phase(), state2.phase());
        assert_eq!(state1.tower().pieces(), state2.tower().pieces());
    }

    #[test]
    fn test_safe_side() {
        let mut state = TowerManager::new(1, &Settings::default());
        state.activate();
        // Seeded tower starts Empty, Right
        assert_eq!(safe_side(&state), Side::Left);
        state.strike(Side::Left);
        assert_eq!(state.tower().bottom().unwrap().orientation, Orientation::Right);
        assert_eq!(safe_side(&state), Side::Left);
    }
}
