//! Hard/soft collision tracking for placement validation.
//!
//! The hard lane blocks placement outright and is never cleared within one
//! solve. The soft lane accumulates clearance penalties (door swings, utility
//! zones) that discourage but do not forbid nearby placements.

/// Soft penalty added over a marked utility zone.
pub const UTILITY_ZONE_PENALTY: f32 = 0.3;

/// Clearance a door or drawer needs beyond its physical footprint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwingClearance {
    /// How far the clearance zone extends past each end, in cm.
    pub reach_cm: u32,
    /// Soft penalty added over the clearance zone.
    pub penalty: f32,
}

impl Default for SwingClearance {
    fn default() -> Self {
        Self {
            reach_cm: 45,
            penalty: 0.5,
        }
    }
}

/// Dual-lane collision mask over a wall span.
#[derive(Clone, Debug)]
pub struct CollisionMask {
    hard: Vec<bool>,
    soft: Vec<f32>,
}

impl CollisionMask {
    /// Creates an empty mask over the given span.
    pub fn new(span_cm: u32) -> Self {
        Self {
            hard: vec![false; span_cm as usize],
            soft: vec![0.0; span_cm as usize],
        }
    }

    /// Span of the mask in cm.
    pub fn span_cm(&self) -> u32 {
        self.hard.len() as u32
    }

    /// Hard-blocks `[start_cm, end_cm)`, clamped to the span. With a swing
    /// clearance, additionally adds its penalty to the soft lane over the
    /// clamped footprint widened by `reach_cm` on both sides.
    pub fn mark_occupied(
        &mut self,
        start_cm: i32,
        end_cm: i32,
        swing: Option<SwingClearance>,
    ) -> &mut Self {
        let (start, end) = self.clamp_range(start_cm, end_cm);
        for cell in &mut self.hard[start..end] {
            *cell = true;
        }

        if let Some(swing) = swing {
            let reach = swing.reach_cm as i32;
            let (swing_start, swing_end) =
                self.clamp_range(start as i32 - reach, end as i32 + reach);
            for cell in &mut self.soft[swing_start..swing_end] {
                *cell += swing.penalty;
            }
        }

        self
    }

    /// Adds a flat soft penalty around a utility point. Placement near the
    /// point stays legal, sitting exactly on it just scores worse.
    pub fn mark_utility_zone(&mut self, center_cm: i32, radius_cm: u32) -> &mut Self {
        let radius = radius_cm as i32;
        let (start, end) = self.clamp_range(center_cm - radius, center_cm + radius);
        for cell in &mut self.soft[start..end] {
            *cell += UTILITY_ZONE_PENALTY;
        }
        self
    }

    /// Whether `[start_cm, start_cm + width_cm)` lies inside the span and
    /// touches no hard-blocked cell. Out-of-bounds footprints are invalid,
    /// never clamped.
    pub fn is_valid_placement(&self, start_cm: i32, width_cm: u32) -> bool {
        let end = start_cm + width_cm as i32;
        if start_cm < 0 || end > self.hard.len() as i32 {
            return false;
        }
        !self.hard[start_cm as usize..end as usize].iter().any(|b| *b)
    }

    /// Sum of soft penalties under the footprint, clamped to the span.
    pub fn penalty(&self, start_cm: i32, width_cm: u32) -> f32 {
        let (start, end) = self.clamp_range(start_cm, start_cm + width_cm as i32);
        self.soft[start..end].iter().sum()
    }

    /// The hard lane, for [crate::field::scalar::ScalarField::apply_mask].
    pub fn blocking(&self) -> &[bool] {
        &self.hard
    }

    /// The soft lane.
    pub fn soft(&self) -> &[f32] {
        &self.soft
    }

    fn clamp_range(&self, start_cm: i32, end_cm: i32) -> (usize, usize) {
        let span = self.hard.len() as i32;
        let start = start_cm.clamp(0, span) as usize;
        let end = end_cm.clamp(0, span) as usize;
        (start, end.max(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_occupied_blocks_exactly_the_footprint() {
        let mut mask = CollisionMask::new(400);
        mask.mark_occupied(100, 160, None);
        assert!(!mask.blocking()[99]);
        assert!(mask.blocking()[100]);
        assert!(mask.blocking()[159]);
        assert!(!mask.blocking()[160]);
    }

    #[test]
    fn swing_reaches_past_the_footprint_without_hard_blocking() {
        let mut mask = CollisionMask::new(400);
        mask.mark_occupied(
            100,
            160,
            Some(SwingClearance {
                reach_cm: 30,
                penalty: 0.5,
            }),
        );
        assert!(mask.soft()[80] > 0.0);
        assert!(mask.soft()[180] > 0.0);
        assert!(!mask.blocking()[80]);
        assert_eq!(mask.soft()[69], 0.0);
        assert_eq!(mask.soft()[190], 0.0);
    }

    #[test]
    fn mark_occupied_clamps_to_span() {
        let mut mask = CollisionMask::new(200);
        mask.mark_occupied(-20, 30, Some(SwingClearance::default()));
        mask.mark_occupied(180, 260, None);
        assert!(mask.blocking()[0]);
        assert!(mask.blocking()[29]);
        assert!(!mask.blocking()[30]);
        assert!(mask.blocking()[199]);
    }

    #[test]
    fn validity_requires_bounds_and_free_cells() {
        let mut mask = CollisionMask::new(300);
        mask.mark_occupied(100, 160, None);

        assert!(mask.is_valid_placement(0, 100));
        assert!(mask.is_valid_placement(160, 60));
        assert!(!mask.is_valid_placement(90, 20));
        assert!(!mask.is_valid_placement(159, 10));
        assert!(!mask.is_valid_placement(-5, 10));
        assert!(!mask.is_valid_placement(290, 20));
    }

    #[test]
    fn soft_penalties_accumulate() {
        let mut mask = CollisionMask::new(200);
        mask.mark_occupied(50, 60, Some(SwingClearance::default()));
        mask.mark_occupied(70, 80, Some(SwingClearance::default()));
        assert!((mask.soft()[55] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn utility_zone_penalizes_without_blocking() {
        let mut mask = CollisionMask::new(300);
        mask.mark_utility_zone(100, 40);
        assert!(mask.is_valid_placement(80, 40));
        assert!((mask.penalty(90, 20) - 20.0 * UTILITY_ZONE_PENALTY).abs() < 1e-4);
        assert_eq!(mask.penalty(200, 20), 0.0);
    }

    #[test]
    fn penalty_clamps_out_of_bounds_footprints() {
        let mut mask = CollisionMask::new(100);
        mask.mark_utility_zone(95, 10);
        assert!(mask.penalty(90, 30) > 0.0);
        assert_eq!(mask.penalty(500, 10), 0.0);
    }
}
