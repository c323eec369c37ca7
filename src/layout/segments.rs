use crate::game::moves::is_valid_sequence;
use crate::game::types::Card;

/// Runs shorter than this render card-by-card; at this length and above they
/// collapse into a single glyph.
pub const MIN_COMPRESSED_RUN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// A face-down card, or a face-up card outside any compressible run.
    Singleton,
    /// A maximal same-suit descending face-up run, rendered as one compact
    /// glyph showing its top and bottom ranks.
    Run,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Index of the segment's first card within the column.
    pub start: usize,
    pub cards: Vec<Card>,
}

impl Segment {
    /// Index of the segment's last card within the column.
    pub fn end(&self) -> usize {
        self.start + self.cards.len() - 1
    }

    pub fn first_card(&self) -> Card {
        self.cards[0]
    }

    pub fn last_card(&self) -> Card {
        self.cards[self.cards.len() - 1]
    }

    /// Resolves a click at proportional position `t` (0.0 = segment top edge,
    /// 1.0 = bottom edge) to the physical card index inside the compressed
    /// band.
    pub fn card_index_at(&self, t: f32) -> usize {
        let slot = (t.clamp(0.0, 1.0) * self.cards.len() as f32) as usize;
        self.start + slot.min(self.cards.len() - 1)
    }
}

/// Partitions a column into alternating singleton and run segments for
/// compressed rendering. Every card lands in exactly one segment, in column
/// order, so arbitrarily deep columns fit a fixed band count.
pub fn calculate_segment_layout(column: &[Card]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut index = 0;

    while index < column.len() {
        let card = column[index];
        if !card.face_up {
            segments.push(Segment {
                kind: SegmentKind::Singleton,
                start: index,
                cards: vec![card],
            });
            index += 1;
            continue;
        }

        let run_len = maximal_run_length(&column[index..]);
        if run_len >= MIN_COMPRESSED_RUN {
            segments.push(Segment {
                kind: SegmentKind::Run,
                start: index,
                cards: column[index..index + run_len].to_vec(),
            });
            index += run_len;
        } else {
            segments.push(Segment {
                kind: SegmentKind::Singleton,
                start: index,
                cards: vec![card],
            });
            index += 1;
        }
    }

    segments
}

fn maximal_run_length(cards: &[Card]) -> usize {
    let mut len = 1;
    while len < cards.len() && is_valid_sequence(&cards[..len + 1]) {
        len += 1;
    }
    len
}
