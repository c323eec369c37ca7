use super::metrics::{
    calculate_layout, Orientation, SafeAreaInsets, Viewport, CARD_ASPECT, MAX_CARD_WIDTH,
    MIN_CARD_WIDTH,
};
use super::overlap::{
    calculate_expanded_offsets, calculate_smart_overlap, calculate_stack_height,
    get_card_stack_offset, StackOffsets, IDEAL_FACE_DOWN_PEEK, IDEAL_FACE_UP_PEEK,
};
use super::segments::{calculate_segment_layout, SegmentKind};
use crate::game::types::{Card, CardId, Suit};

fn card(suit: Suit, rank: u8, face_up: bool) -> Card {
    Card {
        id: CardId(0),
        suit,
        rank,
        face_up,
    }
}

fn run(suit: Suit, top_rank: u8, len: u8) -> Vec<Card> {
    (0..len)
        .map(|i| card(suit, top_rank - i, true))
        .collect()
}

/// Mixed-depth column: `down` face-down cards under `up` face-up spades
/// descending from king.
fn column(down: usize, up: usize) -> Vec<Card> {
    let mut cards = vec![card(Suit::Hearts, 5, false); down];
    cards.extend(run(Suit::Spades, 13, up.min(13) as u8));
    for extra in 13..up {
        cards.push(card(Suit::Clubs, (extra % 13 + 1) as u8, true));
    }
    cards
}

#[test]
fn orientation_needs_width_over_height_and_600px() {
    assert_eq!(
        calculate_layout(Viewport::new(800.0, 600.0)).orientation,
        Orientation::Landscape
    );
    assert_eq!(
        calculate_layout(Viewport::new(500.0, 400.0)).orientation,
        Orientation::Portrait
    );
    assert_eq!(
        calculate_layout(Viewport::new(400.0, 800.0)).orientation,
        Orientation::Portrait
    );
}

#[test]
fn portrait_splits_columns_three_three_four() {
    let layout = calculate_layout(Viewport::new(390.0, 844.0));
    assert_eq!(layout.rows.len(), 3);
    assert_eq!(layout.rows[0], vec![0, 1, 2]);
    assert_eq!(layout.rows[1], vec![3, 4, 5]);
    assert_eq!(layout.rows[2], vec![6, 7, 8, 9]);
    assert_eq!(layout.row_of_column(7), Some(2));
}

#[test]
fn portrait_row_budgets_favor_the_four_column_row() {
    let layout = calculate_layout(Viewport::new(390.0, 1000.0));
    assert_eq!(layout.row_heights.len(), 3);
    assert!((layout.row_heights[0] - 280.0).abs() < 0.5);
    assert!((layout.row_heights[1] - 280.0).abs() < 0.5);
    assert!((layout.row_heights[2] - 440.0).abs() < 0.5);
    let total: f32 = layout.row_heights.iter().sum();
    assert!(total <= 1000.0 + 0.5);
}

#[test]
fn landscape_fits_ten_columns_in_one_row() {
    let layout = calculate_layout(Viewport::new(1200.0, 700.0));
    assert_eq!(layout.rows.len(), 1);
    assert_eq!(layout.rows[0].len(), 10);
    assert_eq!(layout.row_heights, vec![700.0]);

    // Ten cards plus eleven gaps never exceed the viewport width.
    let used = 10.0 * layout.card_width + 11.0 * layout.column_gap;
    assert!(used <= 1200.0 || layout.card_width == MIN_CARD_WIDTH);
}

#[test]
fn card_width_is_clamped_and_aspect_fixed() {
    let tiny = calculate_layout(Viewport::new(10.0, 2000.0));
    assert_eq!(tiny.card_width, MIN_CARD_WIDTH);

    let huge = calculate_layout(Viewport::new(4000.0, 3000.0));
    assert_eq!(huge.card_width, MAX_CARD_WIDTH);

    for layout in [tiny, huge] {
        assert!((layout.card_height - layout.card_width * CARD_ASPECT).abs() < f32::EPSILON);
    }
}

#[test]
fn insets_shrink_the_usable_area() {
    let mut viewport = Viewport::new(800.0, 500.0);
    viewport.insets = SafeAreaInsets {
        top: 40.0,
        bottom: 20.0,
        left: 0.0,
        right: 0.0,
    };
    let layout = calculate_layout(viewport);
    assert_eq!(layout.row_heights, vec![440.0]);
}

#[test]
fn short_columns_keep_ideal_peeks() {
    let offsets = calculate_smart_overlap(&column(0, 1), 100.0, 300.0);
    assert_eq!(offsets, StackOffsets::IDEAL);

    let offsets = calculate_smart_overlap(&column(2, 3), 100.0, 500.0);
    assert_eq!(offsets.face_down, IDEAL_FACE_DOWN_PEEK);
    assert_eq!(offsets.face_up, IDEAL_FACE_UP_PEEK);
    assert!(offsets.fits);
}

#[test]
fn stack_height_never_exceeds_budget() {
    let card_height = 90.0;
    for len in 0..=40 {
        for budget in [120.0, 200.0, 320.0, 600.0] {
            let pile = column(len / 2, len - len / 2);
            let offsets = calculate_smart_overlap(&pile, card_height, budget);
            if !offsets.fits {
                continue;
            }
            let height = calculate_stack_height(&pile, card_height, &offsets);
            assert!(
                height <= budget + 0.01,
                "len {len} budget {budget}: {height}"
            );
        }
    }
}

#[test]
fn degradation_is_monotonic_in_budget() {
    let pile = column(8, 12);
    let card_height = 90.0;
    let mut previous: Option<StackOffsets> = None;
    let mut budget = 800.0;
    while budget >= 100.0 {
        let offsets = calculate_smart_overlap(&pile, card_height, budget);
        if let Some(last) = previous {
            assert!(offsets.face_up <= last.face_up + 0.001);
            assert!(offsets.face_down <= last.face_down + 0.001);
        }
        previous = Some(offsets);
        budget -= 10.0;
    }
}

#[test]
fn offsets_never_exceed_ideal() {
    for len in 2..=40 {
        let pile = column(len / 3, len - len / 3);
        let offsets = calculate_smart_overlap(&pile, 90.0, 400.0);
        assert!(offsets.face_down <= IDEAL_FACE_DOWN_PEEK);
        assert!(offsets.face_up <= IDEAL_FACE_UP_PEEK);
    }
}

#[test]
fn zero_budget_degenerates_to_minimum_peeks() {
    let offsets = calculate_smart_overlap(&column(4, 6), 90.0, 50.0);
    assert!(!offsets.fits);
    assert_eq!(offsets.face_down, 2.0);
    assert_eq!(offsets.face_up, 2.0);

    let negative = calculate_smart_overlap(&column(4, 6), 90.0, -10.0);
    assert!(!negative.fits);
}

#[test]
fn expanded_offsets_ignore_the_budget() {
    let offsets = calculate_expanded_offsets(&column(10, 20));
    assert_eq!(offsets, StackOffsets::IDEAL);
}

#[test]
fn stack_height_counts_peeks_plus_one_full_card() {
    let pile = column(2, 3);
    let offsets = StackOffsets::IDEAL;
    // Two face-down peeks, two face-up peeks, topmost card full height.
    let expected = 2.0 * IDEAL_FACE_DOWN_PEEK + 2.0 * IDEAL_FACE_UP_PEEK + 100.0;
    assert_eq!(calculate_stack_height(&pile, 100.0, &offsets), expected);
    assert_eq!(calculate_stack_height(&[], 100.0, &offsets), 0.0);
}

#[test]
fn card_stack_offset_is_cumulative() {
    let pile = column(2, 2);
    let offsets = StackOffsets::IDEAL;
    assert_eq!(get_card_stack_offset(&pile, 0, &offsets), 0.0);
    assert_eq!(
        get_card_stack_offset(&pile, 2, &offsets),
        2.0 * IDEAL_FACE_DOWN_PEEK
    );
    assert_eq!(
        get_card_stack_offset(&pile, 3, &offsets),
        2.0 * IDEAL_FACE_DOWN_PEEK + IDEAL_FACE_UP_PEEK
    );
}

#[test]
fn segments_split_face_down_singletons_and_long_runs() {
    let mut pile = vec![
        card(Suit::Hearts, 4, false),
        card(Suit::Hearts, 9, false),
    ];
    pile.extend(run(Suit::Spades, 13, 5)); // K..9 compressible
    pile.push(card(Suit::Clubs, 8, true)); // breaks suit, lone card

    let segments = calculate_segment_layout(&pile);
    assert_eq!(segments.len(), 4);
    assert_eq!(segments[0].kind, SegmentKind::Singleton);
    assert_eq!(segments[1].kind, SegmentKind::Singleton);
    assert_eq!(segments[2].kind, SegmentKind::Run);
    assert_eq!(segments[2].start, 2);
    assert_eq!(segments[2].end(), 6);
    assert_eq!(segments[2].first_card().rank, 13);
    assert_eq!(segments[2].last_card().rank, 9);
    assert_eq!(segments[3].kind, SegmentKind::Singleton);
    assert_eq!(segments[3].start, 7);
}

#[test]
fn runs_shorter_than_three_stay_uncompressed() {
    let pile = run(Suit::Spades, 9, 2);
    let segments = calculate_segment_layout(&pile);
    assert_eq!(segments.len(), 2);
    assert!(segments.iter().all(|s| s.kind == SegmentKind::Singleton));
}

#[test]
fn segments_cover_the_column_exactly_once_in_order() {
    let pile = column(6, 18);
    let segments = calculate_segment_layout(&pile);

    let mut next = 0;
    for segment in &segments {
        assert_eq!(segment.start, next);
        next = segment.end() + 1;
    }
    assert_eq!(next, pile.len());
}

#[test]
fn run_segment_resolves_proportional_clicks() {
    let pile = run(Suit::Spades, 13, 13);
    let segments = calculate_segment_layout(&pile);
    assert_eq!(segments.len(), 1);
    let segment = &segments[0];

    assert_eq!(segment.card_index_at(0.0), 0);
    assert_eq!(segment.card_index_at(0.5), 6);
    assert_eq!(segment.card_index_at(1.0), 12);
    // Out-of-band positions clamp to the segment.
    assert_eq!(segment.card_index_at(-1.0), 0);
    assert_eq!(segment.card_index_at(2.0), 12);
}

#[test]
fn empty_column_yields_no_segments() {
    assert!(calculate_segment_layout(&[]).is_empty());
}
