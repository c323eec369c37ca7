use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{Card, CardId, SuitMode, DECK_SIZE};

/// Explicit id source threaded through deck construction. No process-global
/// counter; callers that need stable ids across games keep the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdGenerator {
    next: u32,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(next: u32) -> Self {
        Self { next }
    }

    pub fn next_id(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next += 1;
        id
    }
}

/// Builds the 104-card Spider deck for the given suit mode. The suit subset
/// repeats until 8 complete 13-rank runs exist: 8 repeats of one suit, 4 of
/// two, 2 of all four. Every card starts face-down with a fresh id.
pub fn create_deck(suit_mode: SuitMode, ids: &mut IdGenerator) -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for _ in 0..suit_mode.deck_repeats() {
        for &suit in suit_mode.suits() {
            for rank in 1..=13 {
                deck.push(Card {
                    id: ids.next_id(),
                    suit,
                    rank,
                    face_up: false,
                });
            }
        }
    }
    debug_assert_eq!(deck.len(), DECK_SIZE);
    deck
}

pub fn shuffle_deck(deck: &mut [Card], rng: &mut impl Rng) {
    deck.shuffle(rng);
}
