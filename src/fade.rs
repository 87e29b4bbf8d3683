//! Falloff math shared by every field shape.

/// Range and fade parameters controlling how a field's strength falls off
/// with distance.
///
/// The multiplier is 0 inside `min_range`, ramps up to 1 over the inner fade
/// band, holds at 1 on the plateau, ramps back down over the outer fade band,
/// and is 0 beyond `max_range + max_fade`:
///
/// ```text
/// 1 |        ________________
///   |       /                \
///   |      /                  \
/// 0 |_____/                    \_____
///      min  min+minFade  max-maxFade  max+maxFade
/// ```
///
/// Construction clamps the parameters so `min_range <= max_range` and each
/// fade width fits in `[0, max_range - min_range]`. A zero fade width is an
/// instantaneous (step) edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Falloff {
    min_range: f32,
    min_fade: f32,
    max_range: f32,
    max_fade: f32,
}

impl Falloff {
    /// Create a falloff, clamping parameters into a consistent state.
    pub fn new(min_range: f32, min_fade: f32, max_range: f32, max_fade: f32) -> Self {
        // NaN parameters collapse to 0 so the clamp bounds stay ordered.
        let max_range = nan_to_zero(max_range).max(0.0);
        let min_range = nan_to_zero(min_range).clamp(0.0, max_range);
        let band = max_range - min_range;
        Falloff {
            min_range,
            min_fade: nan_to_zero(min_fade).clamp(0.0, band),
            max_range,
            max_fade: nan_to_zero(max_fade).clamp(0.0, band),
        }
    }

    /// A falloff with no inner dead zone and instantaneous edges.
    pub fn sharp(max_range: f32) -> Self {
        Falloff::new(0.0, 0.0, max_range, 0.0)
    }

    pub fn min_range(&self) -> f32 { self.min_range }
    pub fn min_fade(&self) -> f32 { self.min_fade }
    pub fn max_range(&self) -> f32 { self.max_range }
    pub fn max_fade(&self) -> f32 { self.max_fade }

    /// Replace the ranges, re-clamping as in [`Falloff::new`].
    pub fn set_ranges(&mut self, min_range: f32, max_range: f32) {
        *self = Falloff::new(min_range, self.min_fade, max_range, self.max_fade);
    }

    /// Replace the fade widths, re-clamping as in [`Falloff::new`].
    pub fn set_fades(&mut self, min_fade: f32, max_fade: f32) {
        *self = Falloff::new(self.min_range, min_fade, self.max_range, max_fade);
    }

    /// Strength multiplier in [0, 1] at the given distance.
    ///
    /// A zero fade width divides 0/0 exactly at its range boundary; that NaN
    /// factor is ignored and the other factor used alone, which together with
    /// the ±inf clamping on either side yields a clean step edge.
    pub fn multiplier(&self, distance: f32) -> f32 {
        let upper = clamp01(-(distance - self.max_range) / self.max_fade);
        let lower = clamp01((distance - self.min_range) / self.min_fade);

        match (upper.is_nan(), lower.is_nan()) {
            (true, true) => 1.0,
            (true, false) => lower,
            (false, true) => upper,
            (false, false) => upper * lower,
        }
    }
}

impl Default for Falloff {
    fn default() -> Self {
        Falloff::new(1.0, 1.0, 5.0, 1.0)
    }
}

fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

fn nan_to_zero(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plateau_is_one() {
        let fade = Falloff::new(1.0, 1.0, 5.0, 1.0);
        assert_eq!(fade.multiplier(2.0), 1.0);
        assert_eq!(fade.multiplier(3.0), 1.0);
        assert_eq!(fade.multiplier(4.0), 1.0);
    }

    #[test]
    fn zero_outside_influence() {
        let fade = Falloff::new(1.0, 1.0, 5.0, 1.0);
        assert_eq!(fade.multiplier(0.5), 0.0);
        assert_eq!(fade.multiplier(6.0), 0.0);
        assert_eq!(fade.multiplier(100.0), 0.0);
    }

    #[test]
    fn outer_band_ramps_linearly() {
        // The outer band sits inside max_range: full strength at
        // max_range - max_fade, zero at max_range.
        let fade = Falloff::new(0.0, 0.0, 4.0, 2.0);
        assert_eq!(fade.multiplier(2.0), 1.0);
        assert!((fade.multiplier(3.0) - 0.5).abs() < 1e-6);
        assert_eq!(fade.multiplier(4.0), 0.0);
    }

    #[test]
    fn inner_band_ramps_linearly() {
        // The inner band sits outside min_range: zero at min_range, full
        // strength at min_range + min_fade.
        let fade = Falloff::new(2.0, 2.0, 10.0, 0.0);
        assert_eq!(fade.multiplier(2.0), 0.0);
        assert!((fade.multiplier(3.0) - 0.5).abs() < 1e-6);
        assert_eq!(fade.multiplier(4.0), 1.0);
    }

    #[test]
    fn monotonic_across_outer_band() {
        let fade = Falloff::new(0.0, 0.0, 5.0, 2.0);
        let mut last = fade.multiplier(0.0);
        for i in 1..=60 {
            let m = fade.multiplier(i as f32 * 0.1);
            assert!(m <= last, "multiplier increased at distance {}", i as f32 * 0.1);
            last = m;
        }
    }

    #[test]
    fn zero_max_fade_is_step() {
        let fade = Falloff::new(0.0, 0.0, 5.0, 0.0);
        assert_eq!(fade.multiplier(4.999), 1.0);
        assert_eq!(fade.multiplier(5.0), 1.0);
        assert_eq!(fade.multiplier(5.001), 0.0);
    }

    #[test]
    fn zero_min_fade_is_step() {
        let fade = Falloff::new(2.0, 0.0, 5.0, 0.0);
        assert_eq!(fade.multiplier(1.999), 0.0);
        assert_eq!(fade.multiplier(2.001), 1.0);
    }

    #[test]
    fn clamps_inverted_ranges() {
        let fade = Falloff::new(10.0, 0.0, 5.0, 0.0);
        assert_eq!(fade.min_range(), 5.0);
        assert_eq!(fade.max_range(), 5.0);
    }

    #[test]
    fn clamps_oversized_fades() {
        let fade = Falloff::new(2.0, 100.0, 5.0, -3.0);
        assert_eq!(fade.min_fade(), 3.0);
        assert_eq!(fade.max_fade(), 0.0);
    }
}
