//! Deterministic gap filling between placed anchors.
//!
//! After beam search commits the anchor fixtures, the leftover stretches of
//! wall are packed with counter-height cabinets, widest first, and any
//! remainder too narrow for a cabinet becomes a filler panel cut to size.
use crate::fixture::{FixtureKind, WishItem};
use crate::solve::volume::Volume;

/// Gaps narrower than this stay empty; remainders become panels.
pub const MIN_CABINET_WIDTH_CM: u32 = 30;
/// Cabinet widths tried widest first when packing a gap.
pub const FILLER_WIDTH_LADDER: [u32; 3] = [60, 45, 30];
pub const DISHWASHER_WIDTH_CM: u32 = 60;

/// Packs the gaps around `anchors` with filler cabinets.
///
/// A dishwasher in the wishlist claims the first full-width slot and is
/// never duplicated, even across separate gaps. Without anchors there is
/// no run to fill against and the result is empty.
pub fn fill_gaps(anchors: &[Volume], fillers: &[WishItem], span_cm: u32) -> Vec<Volume> {
    let mut placed: Vec<&Volume> = anchors.iter().collect();
    placed.sort_by_key(|v| v.x);
    if placed.is_empty() {
        return Vec::new();
    }

    let mut dishwasher_left = fillers
        .iter()
        .any(|item| item.kind == FixtureKind::Dishwasher);
    let mut result = Vec::new();

    let first_x = placed[0].x;
    if first_x > MIN_CABINET_WIDTH_CM as i32 {
        fill_range(0, first_x, &mut dishwasher_left, &mut result);
    }
    for pair in placed.windows(2) {
        let gap_start = pair[0].end();
        let gap_end = pair[1].x;
        if gap_end - gap_start >= MIN_CABINET_WIDTH_CM as i32 {
            fill_range(gap_start, gap_end, &mut dishwasher_left, &mut result);
        }
    }
    let last_end = placed[placed.len() - 1].end();
    if span_cm as i32 - last_end > MIN_CABINET_WIDTH_CM as i32 {
        fill_range(last_end, span_cm as i32, &mut dishwasher_left, &mut result);
    }

    result
}

fn fill_range(start: i32, end: i32, dishwasher_left: &mut bool, out: &mut Vec<Volume>) {
    let mut x = start;
    while end - x >= MIN_CABINET_WIDTH_CM as i32 {
        let remaining = (end - x) as u32;
        let width = FILLER_WIDTH_LADDER
            .iter()
            .copied()
            .find(|w| *w <= remaining)
            .unwrap_or(MIN_CABINET_WIDTH_CM);
        let kind = if *dishwasher_left && width == DISHWASHER_WIDTH_CM {
            *dishwasher_left = false;
            FixtureKind::Dishwasher
        } else {
            FixtureKind::DrawerCabinet
        };
        out.push(Volume::new(x, width, kind));
        x += width as i32;
    }

    let remainder = end - x;
    if remainder > 0 {
        out.push(Volume::new(x, remainder as u32, FixtureKind::FillerPanel));
    }
}
