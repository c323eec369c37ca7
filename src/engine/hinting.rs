use crate::game::moves::{can_move_to_column, get_valid_sequence};
use crate::game::types::{GameState, COLUMN_COUNT};

const SUIT_MATCH_BONUS: i32 = 100;
const KING_TO_EMPTY_BONUS: i32 = 50;
const NON_KING_TO_EMPTY_SCORE: i32 = 1;

/// Picks the best destination for the run at `(from, card_index)`. Same-suit
/// seams score highest (they work toward a completable run), then fuller
/// columns; empty columns are reserved for Kings unless nothing else fits.
/// Ties resolve to the lowest column index.
pub fn find_best_move(state: &GameState, from: usize, card_index: usize) -> Option<usize> {
    let column = state.column(from)?;
    let moving = get_valid_sequence(column, card_index)?;
    let lead = *moving.first()?;

    let mut best: Option<(usize, i32)> = None;
    for dst in 0..COLUMN_COUNT {
        if dst == from {
            continue;
        }
        let target = &state.tableau[dst];
        if !can_move_to_column(moving, target) {
            continue;
        }
        let score = match target.last() {
            Some(top) => {
                let suit_bonus = if top.suit == lead.suit {
                    SUIT_MATCH_BONUS
                } else {
                    0
                };
                suit_bonus + target.len() as i32
            }
            None if lead.rank == 13 => KING_TO_EMPTY_BONUS,
            None => NON_KING_TO_EMPTY_SCORE,
        };
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((dst, score));
        }
    }
    best.map(|(dst, _)| dst)
}

/// Conservative stuck check: the game is stuck only when no deal and no
/// tableau move is immediately available. It does not prove unwinnability.
pub fn is_game_stuck(state: &GameState) -> bool {
    let can_deal = !state.stock.is_empty() && state.tableau.iter().all(|pile| !pile.is_empty());
    if can_deal {
        return false;
    }

    for src in 0..COLUMN_COUNT {
        let column = &state.tableau[src];
        for start in 0..column.len() {
            if !column[start].face_up {
                continue;
            }
            let Some(moving) = get_valid_sequence(column, start) else {
                continue;
            };
            for dst in 0..COLUMN_COUNT {
                if dst != src && can_move_to_column(moving, &state.tableau[dst]) {
                    return false;
                }
            }
        }
    }
    true
}
