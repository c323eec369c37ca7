use crate::game::types::GameState;

/// Linear undo/redo over materialized snapshots. Recording a new snapshot
/// discards the redo branch. Restores are pure pointer moves with no rule
/// validation; any previously reached state is restorable.
#[derive(Debug, Clone, Default)]
pub struct History {
    past: Vec<GameState>,
    future: Vec<GameState>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the state that `current` is replacing.
    pub fn record(&mut self, replaced: GameState) {
        self.past.push(replaced);
        self.future.clear();
    }

    pub fn undo(&mut self, current: GameState) -> Option<GameState> {
        let restored = self.past.pop()?;
        self.future.push(current);
        Some(restored)
    }

    pub fn redo(&mut self, current: GameState) -> Option<GameState> {
        let restored = self.future.pop()?;
        self.past.push(current);
        Some(restored)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    pub fn depth(&self) -> usize {
        self.past.len()
    }
}
