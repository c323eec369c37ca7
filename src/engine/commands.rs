use log::debug;
use rand::Rng;

use crate::engine::executor::{deal_from_stock, execute_move};
use crate::engine::history::History;
use crate::game::setup::initialize_game_with_seed;
use crate::game::types::{GameSettings, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCommand {
    Move {
        from: usize,
        card_index: usize,
        to: usize,
    },
    Deal,
    Undo,
    Redo,
    NewGame {
        settings: GameSettings,
        seed: Option<u64>,
    },
    UpdateSettings {
        settings: GameSettings,
    },
}

/// Session coordinator: owns the current snapshot plus its history and routes
/// every gameplay action through one transition function. The rules stay in
/// the pure engine functions; this layer only sequences snapshots.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    history: History,
    seed: u64,
}

impl GameSession {
    pub fn new(settings: GameSettings) -> Self {
        let mut rng = rand::thread_rng();
        Self::new_with_seed(settings, rng.gen())
    }

    pub fn new_with_seed(settings: GameSettings, seed: u64) -> Self {
        Self {
            state: initialize_game_with_seed(settings, seed),
            history: History::new(),
            seed,
        }
    }

    /// Resumes from a restored snapshot (e.g. a decoded save).
    pub fn from_state(state: GameState, seed: u64) -> Self {
        Self {
            state,
            history: History::new(),
            seed,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Applies a command against the current snapshot. Returns whether the
    /// snapshot changed; rejected gameplay actions are no-ops.
    pub fn apply(&mut self, command: EngineCommand, now_ms: u64) -> bool {
        match command {
            EngineCommand::Move {
                from,
                card_index,
                to,
            } => match execute_move(&self.state, from, card_index, to, now_ms) {
                Some(next) => {
                    self.commit(next);
                    true
                }
                None => {
                    debug!("rejected move {from}:{card_index} -> {to}");
                    false
                }
            },
            EngineCommand::Deal => match deal_from_stock(&self.state, now_ms) {
                Some(next) => {
                    self.commit(next);
                    true
                }
                None => {
                    debug!("rejected deal");
                    false
                }
            },
            EngineCommand::Undo => match self.history.undo(self.state.clone()) {
                Some(restored) => {
                    self.state = restored;
                    true
                }
                None => false,
            },
            EngineCommand::Redo => match self.history.redo(self.state.clone()) {
                Some(restored) => {
                    self.state = restored;
                    true
                }
                None => false,
            },
            EngineCommand::NewGame { settings, seed } => {
                let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
                debug!("new game, seed {seed}");
                self.seed = seed;
                self.state = initialize_game_with_seed(settings, seed);
                self.history.clear();
                true
            }
            // Settings patches touch only the current snapshot and are not
            // undoable.
            EngineCommand::UpdateSettings { settings } => {
                self.state.settings = settings;
                true
            }
        }
    }

    fn commit(&mut self, next: GameState) {
        let replaced = std::mem::replace(&mut self.state, next);
        self.history.record(replaced);
    }
}
