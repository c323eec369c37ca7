use crate::game::types::COLUMN_COUNT;

pub const CARD_ASPECT: f32 = 1.38;
pub const COLUMN_GAP: f32 = 4.0;
pub const MIN_CARD_WIDTH: f32 = 50.0;
pub const MAX_CARD_WIDTH: f32 = 90.0;
pub const LANDSCAPE_MIN_WIDTH: f32 = 600.0;

/// Portrait splits the 10 columns across three rows; the bottom row carries
/// four columns and gets the largest height share.
pub const PORTRAIT_ROWS: [&[usize]; 3] = [&[0, 1, 2], &[3, 4, 5], &[6, 7, 8, 9]];
pub const PORTRAIT_ROW_WEIGHTS: [f32; 3] = [0.28, 0.28, 0.44];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SafeAreaInsets {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub insets: SafeAreaInsets,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            insets: SafeAreaInsets::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub orientation: Orientation,
    pub card_width: f32,
    pub card_height: f32,
    pub column_gap: f32,
    /// Column indices per row, in render order.
    pub rows: Vec<Vec<usize>>,
    /// Vertical pixel budget per row, same order as `rows`.
    pub row_heights: Vec<f32>,
}

impl LayoutResult {
    pub fn row_of_column(&self, col: usize) -> Option<usize> {
        self.rows.iter().position(|row| row.contains(&col))
    }
}

/// Sizes cards and row budgets so the full tableau fits the measured viewport
/// without scrolling. Total for any input: degenerate viewports clamp to the
/// minimum card size instead of failing.
pub fn calculate_layout(viewport: Viewport) -> LayoutResult {
    let insets = viewport.insets;
    let usable_width = (viewport.width - insets.left - insets.right).max(0.0);
    let usable_height = (viewport.height - insets.top - insets.bottom).max(0.0);

    let landscape = viewport.width > viewport.height && viewport.width > LANDSCAPE_MIN_WIDTH;
    if landscape {
        // One row of ten columns, edge gaps included.
        let slots = (usable_width - COLUMN_GAP * (COLUMN_COUNT as f32 + 1.0)).max(0.0);
        let card_width = (slots / COLUMN_COUNT as f32).clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH);
        return LayoutResult {
            orientation: Orientation::Landscape,
            card_width,
            card_height: card_width * CARD_ASPECT,
            column_gap: COLUMN_GAP,
            rows: vec![(0..COLUMN_COUNT).collect()],
            row_heights: vec![usable_height],
        };
    }

    // The widest portrait row has four columns; size the cards to it so every
    // row fits.
    let widest = PORTRAIT_ROWS
        .iter()
        .map(|row| row.len())
        .max()
        .unwrap_or(4) as f32;
    let slots = (usable_width - COLUMN_GAP * (widest + 1.0)).max(0.0);
    let card_width = (slots / widest).clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH);

    LayoutResult {
        orientation: Orientation::Portrait,
        card_width,
        card_height: card_width * CARD_ASPECT,
        column_gap: COLUMN_GAP,
        rows: PORTRAIT_ROWS.iter().map(|row| row.to_vec()).collect(),
        row_heights: PORTRAIT_ROW_WEIGHTS
            .iter()
            .map(|weight| usable_height * weight)
            .collect(),
    }
}
