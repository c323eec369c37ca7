use super::types::{Card, RUN_LENGTH};

/// A run is valid when every adjacent pair is face-up, same suit, and
/// descending by exactly one rank. Empty runs are trivially valid; a lone
/// card only needs to be face-up.
pub fn is_valid_sequence(cards: &[Card]) -> bool {
    match cards {
        [] => true,
        [only] => only.face_up,
        _ => cards.windows(2).all(|pair| {
            let a = pair[0];
            let b = pair[1];
            a.face_up && b.face_up && a.suit == b.suit && a.rank == b.rank + 1
        }),
    }
}

/// The suffix of `column` from `start` through the top, iff it is movable as
/// a unit.
pub fn get_valid_sequence(column: &[Card], start: usize) -> Option<&[Card]> {
    if start >= column.len() {
        return None;
    }
    let suffix = &column[start..];
    if is_valid_sequence(suffix) {
        Some(suffix)
    } else {
        None
    }
}

/// Destination legality. An empty column accepts any run (relaxed house rule,
/// not the standard Kings-only rule). A non-empty column requires its top
/// card to rank exactly one above the moving run's lead card; suits may
/// differ across the seam.
pub fn can_move_to_column(moving: &[Card], target: &[Card]) -> bool {
    let Some(lead) = moving.first() else {
        return false;
    };
    if !lead.face_up {
        return false;
    }
    match target.last() {
        None => true,
        Some(top) => top.face_up && top.rank == lead.rank + 1,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteRun {
    pub start: usize,
    pub cards: Vec<Card>,
}

/// Finds a 13-card contiguous face-up same-suit K..A window anywhere in the
/// column, preferring the deepest starting index. Move semantics guarantee at
/// most one such window exists at a time.
pub fn has_complete_sequence(column: &[Card]) -> Option<CompleteRun> {
    if column.len() < RUN_LENGTH {
        return None;
    }
    for start in 0..=column.len() - RUN_LENGTH {
        let window = &column[start..start + RUN_LENGTH];
        if window[0].rank == 13 && window[RUN_LENGTH - 1].rank == 1 && is_valid_sequence(window) {
            return Some(CompleteRun {
                start,
                cards: window.to_vec(),
            });
        }
    }
    None
}
