use crate::game::types::{GameState, DECK_SIZE, RUNS_TO_WIN, RUN_LENGTH};

/// Lossless structural form of a snapshot, for the host's persistence layer.
pub fn encode_session(state: &GameState) -> String {
    serde_json::to_string(state).unwrap_or_default()
}

/// Decodes a persisted snapshot. Structurally broken or semantically
/// inconsistent data is a corrupt save: `None`, never a panic.
pub fn decode_session(raw: &str) -> Option<GameState> {
    let state: GameState = serde_json::from_str(raw).ok()?;
    if !is_plausible(&state) {
        return None;
    }
    Some(state)
}

fn is_plausible(state: &GameState) -> bool {
    if state.total_cards() != DECK_SIZE {
        return false;
    }
    if state.completed.len() > RUNS_TO_WIN {
        return false;
    }
    if state
        .completed
        .iter()
        .any(|run| run.cards.len() != RUN_LENGTH)
    {
        return false;
    }
    if state.is_won != (state.completed.len() == RUNS_TO_WIN) {
        return false;
    }
    let mut all_cards = state
        .tableau
        .iter()
        .flatten()
        .chain(state.stock.iter())
        .chain(state.completed.iter().flat_map(|run| run.cards.iter()));
    all_cards.all(|card| (1..=13).contains(&card.rank))
        && state.stock.iter().all(|card| !card.face_up)
}
