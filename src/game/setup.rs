use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::deck::{create_deck, shuffle_deck, IdGenerator};
use super::types::{GameSettings, GameState, COLUMN_COUNT};

/// Initial deal shape: columns 0..=3 take 6 cards, 4..=9 take 5 (54 total),
/// only the last card per column face-up. The remaining 50 cards form the
/// stock, consumed from the front on each deal.
pub fn initialize_game(settings: GameSettings) -> GameState {
    let mut rng = rand::thread_rng();
    initialize_game_with_seed(settings, rng.gen())
}

pub fn initialize_game_with_seed(settings: GameSettings, seed: u64) -> GameState {
    let mut ids = IdGenerator::new();
    let mut deck = create_deck(settings.suit_mode, &mut ids);
    let mut rng = StdRng::seed_from_u64(seed);
    shuffle_deck(&mut deck, &mut rng);

    let mut tableau: [Vec<_>; COLUMN_COUNT] = std::array::from_fn(|_| Vec::new());
    let mut draw = deck.into_iter();
    for (col, pile) in tableau.iter_mut().enumerate() {
        let col_size = if col < 4 { 6 } else { 5 };
        for row in 0..col_size {
            let mut card = draw.next().expect("initial deal consumes 54 cards");
            card.face_up = row == col_size - 1;
            pile.push(card);
        }
    }

    let stock: Vec<_> = draw
        .map(|mut card| {
            card.face_up = false;
            card
        })
        .collect();

    GameState {
        tableau,
        stock,
        completed: Vec::new(),
        moves: 0,
        start_time_ms: None,
        is_won: false,
        settings,
    }
}
