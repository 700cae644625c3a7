//! Thresholds and default arguments for color operations.

/// Fully opaque alpha on the 0–255 scale
pub const OPAQUE: i32 = 255;

/// Fully opaque alpha on the 0.0–1.0 scale
pub const OPAQUE_1: f64 = 1.0;

/// Largest channel value on the 0–255 scale
pub const CHANNEL_MAX: i32 = 255;

/// Colors whose RGB average falls below this are dark
pub const DARK_THRESHOLD: f64 = 127.0;

/// Default percentage for `lighter` / `darker`
pub const DEFAULT_LIGHTNESS_STEP: f64 = 0.1;

/// Default number of steps for `shades` and `shades_by_percentage`
pub const DEFAULT_SHADE_COUNT: u32 = 10;

/// Default first factor for `shades_by_percentage`
pub const DEFAULT_SHADE_START: f64 = 0.01;

/// `shades_by_percentage` stops once the factor reaches this
pub const SHADE_FACTOR_LIMIT: f64 = 2.0;

/// Hue is an angle in `[0, HUE_MAX)`
pub const HUE_MAX: f64 = 360.0;

/// Digit count of a normalized `RRGGBBAA` hex string
pub const HEX_DIGITS: usize = 8;
