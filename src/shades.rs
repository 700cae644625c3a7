//! Lazy shade sequence produced by [`Color::shades_by_percentage`].

use std::iter::FusedIterator;

use crate::color::Color;
use crate::constants::SHADE_FACTOR_LIMIT;

/// Iterator over a color scaled by a growing factor.
///
/// Yields `base.multiply(factor)` (keeping the base alpha) for
/// `factor = start, start + step, ...` while the factor is below 2.0, with
/// `step = 1 / (count / 2)`. A NaN or infinite factor ends the sequence.
#[derive(Debug, Clone)]
pub struct PercentageShades {
    base: Color,
    factor: f64,
    step: f64,
}

impl PercentageShades {
    pub(crate) fn new(base: Color, count: u32, start_step: f64) -> Self {
        Self {
            base,
            factor: start_step,
            step: 1.0 / (f64::from(count) / 2.0),
        }
    }
}

impl Iterator for PercentageShades {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        if !self.factor.is_finite() || self.factor >= SHADE_FACTOR_LIMIT {
            return None;
        }
        let alpha = f64::from(self.base.rgba255().a);
        let shade = self.base.multiply(self.factor, Some(alpha), false);
        self.factor += self.step;
        Some(shade)
    }
}

impl FusedIterator for PercentageShades {}

#[cfg(test)]
mod tests {
    use crate::constants::{DEFAULT_SHADE_COUNT, DEFAULT_SHADE_START};
    use crate::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_arguments_give_ten_shades() {
        let color = Color::from_rgb255(100.0, 100.0, 100.0);
        let shades: Vec<_> = color
            .shades_by_percentage(DEFAULT_SHADE_COUNT, DEFAULT_SHADE_START)
            .collect();
        assert_eq!(shades.len(), 10);
        assert_eq!(shades[0], Color::from_rgb255(1.0, 1.0, 1.0));
        assert_eq!(shades[1], Color::from_rgb255(21.0, 21.0, 21.0));
    }

    #[test]
    fn keeps_base_alpha_and_caps_channels() {
        let color = Color::from_rgba255(200.0, 0.0, 50.0, 33.0);
        let last = color.shades_by_percentage(10, 0.01).last().unwrap();
        // 1.81 * 200 overflows and is capped.
        assert_eq!(last.rgba255().r, 255);
        assert_eq!(last.rgba255().a, 33);
    }

    #[test]
    fn is_lazy_and_fused() {
        let color = Color::from_rgb255(10.0, 10.0, 10.0);
        let mut shades = color.shades_by_percentage(2, 0.5);
        // step 1.0: factors 0.5 and 1.5
        assert_eq!(shades.next(), Some(Color::from_rgb255(5.0, 5.0, 5.0)));
        assert_eq!(shades.next(), Some(Color::from_rgb255(15.0, 15.0, 15.0)));
        assert_eq!(shades.next(), None);
        assert_eq!(shades.next(), None);
    }

    #[test]
    fn start_at_or_past_limit_is_empty() {
        let color = Color::from_rgb255(10.0, 10.0, 10.0);
        assert_eq!(color.shades_by_percentage(10, 2.0).count(), 0);
        assert_eq!(color.shades_by_percentage(10, f64::NAN).count(), 0);
    }

    #[test]
    fn zero_count_yields_one_shade() {
        let color = Color::from_rgb255(10.0, 10.0, 10.0);
        assert_eq!(color.shades_by_percentage(0, 1.0).count(), 1);
    }
}
