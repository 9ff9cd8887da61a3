//! Scalar desirability field over a wall span.
//!
//! One cell per centimeter; higher values mark better placements. Fields are
//! built fresh per solve, composed additively, and scanned with a sliding
//! window to score item footprints.
use std::ops::{Add, AddAssign, Mul};

/// A 1D field of placement scores, one cell per cm.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScalarField {
    pub data: Vec<f32>,
}

impl ScalarField {
    /// Creates a zero-filled field over the given span.
    pub fn zeros(span_cm: u32) -> Self {
        Self::filled(span_cm, 0.0)
    }

    /// Creates a field filled with the given value.
    pub fn filled(span_cm: u32, value: f32) -> Self {
        Self {
            data: vec![value; span_cm as usize],
        }
    }

    /// Creates a field containing a single Gaussian bump.
    pub fn gaussian_bump(span_cm: u32, center_cm: i32, sigma_cm: f32, amplitude: f32) -> Self {
        let mut field = Self::zeros(span_cm);
        field.add_gaussian(center_cm, sigma_cm, amplitude);
        field
    }

    /// Span of the field in cm.
    pub fn span_cm(&self) -> u32 {
        self.data.len() as u32
    }

    /// Value at the given cell, or `0.0` if out of bounds.
    pub fn get(&self, x: i32) -> f32 {
        if x < 0 || x as usize >= self.data.len() {
            return 0.0;
        }
        self.data[x as usize]
    }

    /// Sum of all cells.
    pub fn total(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Adds a Gaussian bell curve in place. Positive amplitudes attract,
    /// negative ones repel. A non-positive sigma adds nothing.
    pub fn add_gaussian(&mut self, center_cm: i32, sigma_cm: f32, amplitude: f32) -> &mut Self {
        if sigma_cm <= 0.0 {
            return self;
        }
        for (i, value) in self.data.iter_mut().enumerate() {
            let d = (i as f32 - center_cm as f32) / sigma_cm;
            *value += amplitude * (-0.5 * d * d).exp();
        }
        self
    }

    /// Adds a flat value over `[start_cm, end_cm)`, clamped to the span.
    pub fn apply_penalty_range(&mut self, start_cm: i32, end_cm: i32, value: f32) -> &mut Self {
        let span = self.data.len() as i32;
        let start = start_cm.max(0);
        let end = end_cm.min(span);
        for i in start..end {
            self.data[i as usize] += value;
        }
        self
    }

    /// Replaces every blocked cell with `penalty`. Unlike the additive
    /// operations this overwrites, so blocked cells score identically no
    /// matter what accumulated there before.
    pub fn apply_mask(&mut self, blocked: &[bool], penalty: f32) -> &mut Self {
        debug_assert_eq!(blocked.len(), self.data.len(), "mask length must match span");
        for (value, blocked) in self.data.iter_mut().zip(blocked) {
            if *blocked {
                *value = penalty;
            }
        }
        self
    }

    /// Adds `values[i] * factor` to every cell.
    pub fn add_scaled(&mut self, values: &[f32], factor: f32) -> &mut Self {
        debug_assert_eq!(values.len(), self.data.len(), "value length must match span");
        for (value, v) in self.data.iter_mut().zip(values) {
            *value += v * factor;
        }
        self
    }

    /// Sliding-window sums for every start position of a width-`item_width_cm`
    /// footprint. Empty when the width is zero or exceeds the span.
    pub fn window_scores(&self, item_width_cm: u32) -> Vec<f32> {
        let width = item_width_cm as usize;
        if width == 0 || width > self.data.len() {
            return Vec::new();
        }
        // Summed per window so equal windows compare bit-equal.
        self.data.windows(width).map(|w| w.iter().sum()).collect()
    }

    /// Best start position for an item of the given width; equal scores
    /// resolve to the lowest position. Items at least as wide as the span
    /// place at `0`.
    pub fn find_best_position(&self, item_width_cm: u32) -> i32 {
        if item_width_cm >= self.span_cm() {
            return 0;
        }
        let scores = self.window_scores(item_width_cm);
        let mut best = 0usize;
        let mut best_score = f32::NEG_INFINITY;
        for (i, score) in scores.iter().enumerate() {
            if *score > best_score {
                best = i;
                best_score = *score;
            }
        }
        best as i32
    }

    /// Up to `k` start positions ordered by score descending, then lowest
    /// position. Items at least as wide as the span yield the single pair
    /// `(0, total)`.
    pub fn find_top_k_positions(&self, item_width_cm: u32, k: usize) -> Vec<(i32, f32)> {
        if item_width_cm >= self.span_cm() {
            return vec![(0, self.total())];
        }
        let scores = self.window_scores(item_width_cm);
        let mut ranked: Vec<(i32, f32)> = scores
            .into_iter()
            .enumerate()
            .map(|(i, score)| (i as i32, score))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(k);
        ranked
    }
}

impl Add for &ScalarField {
    type Output = ScalarField;

    fn add(self, rhs: &ScalarField) -> ScalarField {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl Add for ScalarField {
    type Output = ScalarField;

    fn add(mut self, rhs: ScalarField) -> ScalarField {
        self += &rhs;
        self
    }
}

impl AddAssign<&ScalarField> for ScalarField {
    fn add_assign(&mut self, rhs: &ScalarField) {
        self.add_scaled(&rhs.data, 1.0);
    }
}

impl Mul<f32> for &ScalarField {
    type Output = ScalarField;

    fn mul(self, factor: f32) -> ScalarField {
        let mut out = self.clone();
        for value in &mut out.data {
            *value *= factor;
        }
        out
    }
}

impl Mul<f32> for ScalarField {
    type Output = ScalarField;

    fn mul(mut self, factor: f32) -> ScalarField {
        for value in &mut self.data {
            *value *= factor;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_sets_every_cell() {
        let field = ScalarField::filled(5, 2.5);
        assert_eq!(field.span_cm(), 5);
        assert!(field.data.iter().all(|v| *v == 2.5));
    }

    #[test]
    fn gaussian_peaks_at_center_and_is_symmetric() {
        let field = ScalarField::gaussian_bump(200, 100, 50.0, 100.0);
        assert!((field.get(100) - 100.0).abs() < 1e-4);
        assert!((field.get(60) - field.get(140)).abs() < 1e-4);
    }

    #[test]
    fn gaussian_falls_to_sixty_percent_at_one_sigma() {
        let field = ScalarField::gaussian_bump(200, 100, 50.0, 100.0);
        let expected = 100.0 * (-0.5f32).exp();
        assert!((field.get(150) - expected).abs() < 1e-3);
    }

    #[test]
    fn add_gaussian_with_zero_sigma_is_a_no_op() {
        let mut field = ScalarField::zeros(50);
        field.add_gaussian(25, 0.0, 100.0);
        assert!(field.data.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn penalty_range_clamps_to_span() {
        let mut field = ScalarField::zeros(100);
        field
            .apply_penalty_range(-50, 30, 5.0)
            .apply_penalty_range(80, 200, 2.0);
        assert_eq!(field.get(0), 5.0);
        assert_eq!(field.get(29), 5.0);
        assert_eq!(field.get(30), 0.0);
        assert_eq!(field.get(79), 0.0);
        assert_eq!(field.get(99), 2.0);
    }

    #[test]
    fn apply_mask_replaces_instead_of_adding() {
        let mut field = ScalarField::filled(10, 7.0);
        let mut blocked = vec![false; 10];
        blocked[3] = true;
        field.apply_mask(&blocked, -10_000.0);
        assert_eq!(field.get(3), -10_000.0);
        assert_eq!(field.get(4), 7.0);
    }

    #[test]
    fn window_scores_match_brute_force() {
        let mut field = ScalarField::zeros(20);
        for (i, value) in field.data.iter_mut().enumerate() {
            *value = i as f32;
        }
        let scores = field.window_scores(5);
        assert_eq!(scores.len(), 16);
        for (pos, score) in scores.iter().enumerate() {
            let expected: f32 = field.data[pos..pos + 5].iter().sum();
            assert_eq!(*score, expected);
        }
    }

    #[test]
    fn best_position_finds_high_band() {
        let mut field = ScalarField::zeros(100);
        field.apply_penalty_range(40, 50, 10.0);
        assert_eq!(field.find_best_position(10), 40);
    }

    #[test]
    fn best_position_prefers_lowest_on_ties() {
        let field = ScalarField::filled(50, 1.0);
        assert_eq!(field.find_best_position(10), 0);
    }

    #[test]
    fn top_k_orders_by_score_then_position() {
        let mut field = ScalarField::zeros(30);
        field.apply_penalty_range(20, 25, 4.0);
        let top = field.find_top_k_positions(5, 3);
        assert_eq!(top[0].0, 20);
        assert!(top[0].1 >= top[1].1);
        assert!(top[1].1 >= top[2].1);

        let flat = ScalarField::filled(30, 1.0);
        let ties = flat.find_top_k_positions(5, 3);
        assert_eq!(
            ties.iter().map(|(p, _)| *p).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn top_k_returns_all_when_fewer_positions_exist() {
        let field = ScalarField::zeros(12);
        let top = field.find_top_k_positions(10, 5);
        assert_eq!(top.len(), 3);
    }

    #[test]
    fn oversized_items_degrade_to_position_zero() {
        let field = ScalarField::filled(10, 2.0);
        assert_eq!(field.find_best_position(10), 0);
        assert_eq!(field.find_best_position(25), 0);
        assert_eq!(field.find_top_k_positions(25, 3), vec![(0, 20.0)]);
    }

    #[test]
    fn operators_compose_fields() {
        let a = ScalarField::filled(4, 1.0);
        let b = ScalarField::filled(4, 2.0);
        let sum = &a + &b;
        assert!(sum.data.iter().all(|v| *v == 3.0));

        let scaled = &b * 0.5;
        assert!(scaled.data.iter().all(|v| *v == 1.0));

        let mut acc = ScalarField::zeros(4);
        acc += &a;
        acc += &b;
        assert!(acc.data.iter().all(|v| *v == 3.0));
    }

    #[test]
    fn get_returns_zero_outside_bounds() {
        let field = ScalarField::filled(10, 1.0);
        assert_eq!(field.get(-1), 0.0);
        assert_eq!(field.get(10), 0.0);
    }
}
