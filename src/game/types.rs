use serde::{Deserialize, Serialize};

use super::rank_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }

    pub fn short(self) -> &'static str {
        match self {
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Spades => "S",
        }
    }
}

/// Stable per-card identity, assigned at deck construction and preserved
/// across snapshots. Presentation layers use it as an animation key; rules
/// logic never compares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: u8,
    pub face_up: bool,
}

impl Card {
    pub fn label(&self) -> String {
        format!("{}{}", rank_label(self.rank), self.suit.short())
    }

    pub fn color_red(&self) -> bool {
        self.suit.is_red()
    }

    pub fn faced_up(self) -> Self {
        Self {
            face_up: true,
            ..self
        }
    }

    pub fn faced_down(self) -> Self {
        Self {
            face_up: false,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuitMode {
    One,
    Two,
    Four,
}

impl SuitMode {
    pub fn suit_count(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
        }
    }

    pub fn from_suit_count(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    /// Suits that appear in the deck for this mode.
    pub fn suits(self) -> &'static [Suit] {
        match self {
            Self::One => &[Suit::Spades],
            Self::Two => &[Suit::Spades, Suit::Hearts],
            Self::Four => &Suit::ALL,
        }
    }

    /// How many times the suit subset repeats to reach 104 cards.
    pub fn deck_repeats(self) -> usize {
        match self {
            Self::One => 8,
            Self::Two => 4,
            Self::Four => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSettings {
    pub suit_mode: SuitMode,
    pub sound: bool,
    pub haptics: bool,
    pub immersive: bool,
    pub animations: bool,
    pub auto_complete: bool,
    pub show_timer: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            suit_mode: SuitMode::One,
            sound: true,
            haptics: true,
            immersive: true,
            animations: true,
            auto_complete: true,
            show_timer: true,
        }
    }
}

/// A fully assembled K-to-A same-suit run removed from the tableau.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedRun {
    pub suit: Suit,
    pub cards: Vec<Card>,
}

pub const COLUMN_COUNT: usize = 10;
pub const DECK_SIZE: usize = 104;
pub const RUN_LENGTH: usize = 13;
pub const RUNS_TO_WIN: usize = 8;

/// Immutable game snapshot. Engine functions never mutate a `GameState` in
/// place; each transition clones and returns a new value (or `None` for a
/// rejected operation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub tableau: [Vec<Card>; COLUMN_COUNT],
    pub stock: Vec<Card>,
    pub completed: Vec<CompletedRun>,
    pub moves: u32,
    pub start_time_ms: Option<u64>,
    pub is_won: bool,
    pub settings: GameSettings,
}

impl GameState {
    pub fn column(&self, col: usize) -> Option<&[Card]> {
        self.tableau.get(col).map(Vec::as_slice)
    }

    pub fn card_at(&self, col: usize, index: usize) -> Option<Card> {
        self.tableau
            .get(col)
            .and_then(|pile| pile.get(index))
            .copied()
    }

    pub fn total_cards(&self) -> usize {
        let tableau: usize = self.tableau.iter().map(Vec::len).sum();
        let completed: usize = self.completed.iter().map(|run| run.cards.len()).sum();
        tableau + completed + self.stock.len()
    }
}
