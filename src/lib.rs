pub mod engine;
pub mod game;
pub mod layout;

pub use engine::commands::{EngineCommand, GameSession};
pub use engine::executor::{check_and_remove_complete_sequences, deal_from_stock, execute_move};
pub use engine::hinting::{find_best_move, is_game_stuck};
pub use engine::history::History;
pub use engine::session::{decode_session, encode_session};
pub use game::deck::{create_deck, shuffle_deck, IdGenerator};
pub use game::moves::{
    can_move_to_column, get_valid_sequence, has_complete_sequence, is_valid_sequence, CompleteRun,
};
pub use game::setup::{initialize_game, initialize_game_with_seed};
pub use game::{Card, CardId, CompletedRun, GameSettings, GameState, Suit, SuitMode};
pub use layout::metrics::{calculate_layout, LayoutResult, Orientation, SafeAreaInsets, Viewport};
pub use layout::overlap::{
    calculate_expanded_offsets, calculate_smart_overlap, calculate_stack_height,
    get_card_stack_offset, StackOffsets,
};
pub use layout::segments::{calculate_segment_layout, Segment, SegmentKind};
