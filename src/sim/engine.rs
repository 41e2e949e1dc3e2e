//! Command surface for hosts
//!
//! [`Engine`] bundles the state with its tuning and gap source so a page only
//! has to forward commands and poll [`Engine::snapshot`].

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Collision;
use super::spawn::GapSource;
use super::state::{GameEvent, GamePhase, GameState, Snapshot};
use super::tick::tick;
use crate::tuning::Tuning;

/// Discrete commands a host can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Activate,
    Reset,
}

/// One game session driven by an external frame clock
#[derive(Debug, Clone)]
pub struct Engine<S = Pcg32> {
    state: GameState,
    tuning: Tuning,
    source: S,
}

impl Engine<Pcg32> {
    /// Engine with seeded gap placement
    pub fn with_seed(tuning: Tuning, seed: u64) -> Self {
        Self::new(tuning, Pcg32::seed_from_u64(seed))
    }
}

impl<S: GapSource> Engine<S> {
    pub fn new(tuning: Tuning, source: S) -> Self {
        Self {
            state: GameState::new(&tuning),
            tuning,
            source,
        }
    }

    pub fn start(&mut self) {
        self.state.start(&self.tuning, &mut self.source);
    }

    pub fn activate(&mut self) {
        self.state.activate(&self.tuning);
    }

    pub fn tick(&mut self) -> Option<Collision> {
        tick(&mut self.state, &self.tuning, &mut self.source)
    }

    pub fn reset(&mut self) {
        self.state.reset(&self.tuning);
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::Activate => self.activate(),
            Command::Reset => self.reset(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}
