use crate::game::types::Card;

pub const IDEAL_FACE_DOWN_PEEK: f32 = 10.0;
pub const IDEAL_FACE_UP_PEEK: f32 = 28.0;
pub const MIN_FACE_DOWN_PEEK: f32 = 4.0;
pub const MIN_FACE_UP_PEEK: f32 = 12.0;
pub const ABSOLUTE_MIN_PEEK: f32 = 2.0;

/// Per-column stacking offsets. The topmost card always renders at full
/// height; every other card contributes its face-up or face-down peek.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackOffsets {
    pub face_down: f32,
    pub face_up: f32,
    /// False only in the degenerate zero-budget case, where the host should
    /// fall back to scrolling.
    pub fits: bool,
}

impl StackOffsets {
    pub const IDEAL: StackOffsets = StackOffsets {
        face_down: IDEAL_FACE_DOWN_PEEK,
        face_up: IDEAL_FACE_UP_PEEK,
        fits: true,
    };
}

/// Continuous degradation of card peeks under vertical pressure: ideal peeks
/// while they fit, linear interpolation toward the minimums as the column
/// grows, then proportional scaling below the minimums so the stack never
/// overflows its budget.
pub fn calculate_smart_overlap(
    column: &[Card],
    card_height: f32,
    max_stack_height: f32,
) -> StackOffsets {
    if column.len() <= 1 {
        return StackOffsets::IDEAL;
    }

    let stacked = &column[..column.len() - 1];
    let face_down = stacked.iter().filter(|card| !card.face_up).count() as f32;
    let face_up = stacked.len() as f32 - face_down;

    let available = max_stack_height - card_height;
    if available <= 0.0 {
        return StackOffsets {
            face_down: ABSOLUTE_MIN_PEEK,
            face_up: ABSOLUTE_MIN_PEEK,
            fits: false,
        };
    }

    let ideal_total = face_down * IDEAL_FACE_DOWN_PEEK + face_up * IDEAL_FACE_UP_PEEK;
    if ideal_total <= available {
        return StackOffsets::IDEAL;
    }

    let min_total = face_down * MIN_FACE_DOWN_PEEK + face_up * MIN_FACE_UP_PEEK;
    if min_total >= available {
        // Even the minimums overflow: scale both peeks so the stack fits the
        // budget exactly, accepting sub-minimum touch targets.
        let scale = available / min_total;
        return StackOffsets {
            face_down: MIN_FACE_DOWN_PEEK * scale,
            face_up: MIN_FACE_UP_PEEK * scale,
            fits: true,
        };
    }

    let t = (available - min_total) / (ideal_total - min_total);
    StackOffsets {
        face_down: MIN_FACE_DOWN_PEEK + t * (IDEAL_FACE_DOWN_PEEK - MIN_FACE_DOWN_PEEK),
        face_up: MIN_FACE_UP_PEEK + t * (IDEAL_FACE_UP_PEEK - MIN_FACE_UP_PEEK),
        fits: true,
    }
}

/// Ideal peeks regardless of budget, for a temporarily magnified column.
pub fn calculate_expanded_offsets(_column: &[Card]) -> StackOffsets {
    StackOffsets::IDEAL
}

/// Total rendered height of a column under the given offsets.
pub fn calculate_stack_height(column: &[Card], card_height: f32, offsets: &StackOffsets) -> f32 {
    if column.is_empty() {
        return 0.0;
    }
    let stacked = &column[..column.len() - 1];
    let peeks: f32 = stacked
        .iter()
        .map(|card| {
            if card.face_up {
                offsets.face_up
            } else {
                offsets.face_down
            }
        })
        .sum();
    peeks + card_height
}

/// Cumulative y offset of the card at `index` within its column.
pub fn get_card_stack_offset(column: &[Card], index: usize, offsets: &StackOffsets) -> f32 {
    column
        .iter()
        .take(index)
        .map(|card| {
            if card.face_up {
                offsets.face_up
            } else {
                offsets.face_down
            }
        })
        .sum()
}
