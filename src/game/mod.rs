pub mod deck;
pub mod moves;
pub mod setup;
pub mod types;


pub use types::{Card, CardId, CompletedRun, GameSettings, GameState, Suit, SuitMode};

pub fn rank_label(rank: u8) -> &'static str {
    match rank {
        1 => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        11 => "J",
        12 => "Q",
        13 => "K",
        _ => "?",
    }
}
