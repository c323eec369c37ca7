pub mod metrics;
pub mod overlap;
pub mod segments;

#[cfg(test)]
mod tests;

pub use metrics::{calculate_layout, LayoutResult, Orientation, SafeAreaInsets, Viewport};
pub use overlap::{
    calculate_expanded_offsets, calculate_smart_overlap, calculate_stack_height,
    get_card_stack_offset, StackOffsets,
};
pub use segments::{calculate_segment_layout, Segment, SegmentKind};
