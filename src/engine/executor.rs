use crate::game::moves::{can_move_to_column, get_valid_sequence, has_complete_sequence};
use crate::game::types::{CompletedRun, GameState, COLUMN_COUNT, RUNS_TO_WIN};

/// Moves the run starting at `card_index` from `from` onto `to`. Rejected
/// operations return `None` with no side effects; callers probe legality by
/// attempting the move (drag-hover highlighting does exactly that).
pub fn execute_move(
    state: &GameState,
    from: usize,
    card_index: usize,
    to: usize,
    now_ms: u64,
) -> Option<GameState> {
    if from == to || from >= COLUMN_COUNT || to >= COLUMN_COUNT {
        return None;
    }
    let moving = get_valid_sequence(&state.tableau[from], card_index)?;
    if !can_move_to_column(moving, &state.tableau[to]) {
        return None;
    }

    let mut next = state.clone();
    let detached = next.tableau[from].split_off(card_index);
    next.tableau[to].extend(detached);
    flip_top_if_needed(&mut next, from);
    next.moves += 1;
    if next.start_time_ms.is_none() {
        next.start_time_ms = Some(now_ms);
    }
    Some(check_and_remove_complete_sequences(&next))
}

/// Deals one face-up card from the stock front onto each column. Standard
/// Spider rule: no deal while any column is empty.
pub fn deal_from_stock(state: &GameState, now_ms: u64) -> Option<GameState> {
    if state.stock.len() < COLUMN_COUNT {
        return None;
    }
    if state.tableau.iter().any(Vec::is_empty) {
        return None;
    }

    let mut next = state.clone();
    let dealt: Vec<_> = next.stock.drain(..COLUMN_COUNT).collect();
    for (col, card) in dealt.into_iter().enumerate() {
        next.tableau[col].push(card.faced_up());
    }
    next.moves += 1;
    if next.start_time_ms.is_none() {
        next.start_time_ms = Some(now_ms);
    }
    Some(check_and_remove_complete_sequences(&next))
}

/// Sweeps every column for a completed K..A run, splicing found runs into the
/// completed piles and flipping the card the splice exposes. One pass
/// suffices: at most one completable run per column can exist between calls.
/// Idempotent when nothing completes.
pub fn check_and_remove_complete_sequences(state: &GameState) -> GameState {
    let mut next = state.clone();
    for col in 0..COLUMN_COUNT {
        let Some(found) = has_complete_sequence(&next.tableau[col]) else {
            continue;
        };
        let removed: Vec<_> = next.tableau[col]
            .drain(found.start..found.start + found.cards.len())
            .collect();
        let suit = removed[0].suit;
        next.completed.push(CompletedRun {
            suit,
            cards: removed,
        });
        flip_top_if_needed(&mut next, col);
    }
    next.is_won = next.completed.len() >= RUNS_TO_WIN;
    next
}

fn flip_top_if_needed(state: &mut GameState, col: usize) {
    if let Some(card) = state.tableau[col].last_mut() {
        card.face_up = true;
    }
}
