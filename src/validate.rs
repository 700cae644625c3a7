//! Domain checks backing the strict constructors.

use crate::constants::{CHANNEL_MAX, HUE_MAX};
use crate::error::InvalidColorInput;

/// Check a finite value lies in `min..=max`.
pub(crate) fn channel(
    name: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, InvalidColorInput> {
    if !value.is_finite() {
        tracing::debug!(channel = name, "Rejecting non-finite channel");
        return Err(InvalidColorInput::NotANumber { channel: name });
    }
    if value < min || value > max {
        tracing::debug!(channel = name, value, "Rejecting out-of-range channel");
        return Err(InvalidColorInput::OutOfRange {
            channel: name,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// 0–255 channel.
pub(crate) fn channel255(name: &'static str, value: f64) -> Result<f64, InvalidColorInput> {
    channel(name, value, 0.0, f64::from(CHANNEL_MAX))
}

/// 0.0–1.0 channel.
pub(crate) fn unit(name: &'static str, value: f64) -> Result<f64, InvalidColorInput> {
    channel(name, value, 0.0, 1.0)
}

/// Hue angle, `0 <= h < 360`.
pub(crate) fn hue(value: f64) -> Result<f64, InvalidColorInput> {
    channel("hue", value, 0.0, HUE_MAX)?;
    if value >= HUE_MAX {
        tracing::debug!(value, "Rejecting hue at full turn");
        return Err(InvalidColorInput::OutOfRange {
            channel: "hue",
            value,
            min: 0.0,
            max: HUE_MAX,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn channel_bounds_are_inclusive() {
        assert_eq!(channel255("red", 0.0), Ok(0.0));
        assert_eq!(channel255("red", 255.0), Ok(255.0));
        assert_eq!(unit("alpha", 1.0), Ok(1.0));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            channel255("green", 256.0),
            Err(InvalidColorInput::OutOfRange {
                channel: "green",
                value: 256.0,
                min: 0.0,
                max: 255.0,
            })
        );
        assert!(unit("saturation", -0.1).is_err());
    }

    #[test]
    fn rejects_nan_and_infinity() {
        assert_eq!(
            unit("value", f64::NAN),
            Err(InvalidColorInput::NotANumber { channel: "value" })
        );
        assert!(channel255("blue", f64::INFINITY).is_err());
    }

    #[test]
    fn hue_excludes_full_turn() {
        assert_eq!(hue(359.9), Ok(359.9));
        assert!(hue(360.0).is_err());
        assert!(hue(-1.0).is_err());
    }
}
