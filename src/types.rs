//! Plain color records, one per representation.
//!
//! Integer records (`Rgb`, `Rgba`) hold 0–255 channels as `i32` so that
//! arithmetic run with `allow_negative`/`allow_overflow` can carry values
//! outside that range. Fractional records hold 0.0–1.0 channels. The
//! cylindrical records keep their alpha on the 0–255 scale.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGB with 0–255 integer channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

/// RGBA with 0–255 integer channels. Alpha 0 is transparent, 255 opaque.
///
/// This is the canonical representation stored by [`crate::Color`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub a: i32,
}

/// RGB with 0.0–1.0 channels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb1 {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// RGBA with 0.0–1.0 channels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba1 {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Hue (0–360 degrees), saturation and value (0.0–1.0).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// [`Hsv`] plus a 0–255 alpha.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsva {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: i32,
}

/// Hue (0–360 degrees), saturation and lightness (0.0–1.0).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// [`Hsl`] plus a 0–255 alpha.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: i32,
}

impl Rgba {
    pub fn new(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self { r, g, b, a }
    }
}

impl Rgba1 {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn records_serialize_by_field() {
        let json = serde_json::to_string(&Rgba::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json, r#"{"r":1,"g":2,"b":3,"a":4}"#);

        let hsla: Hsla = serde_json::from_str(r#"{"h":90.0,"s":0.5,"l":0.25,"a":255}"#).unwrap();
        assert_eq!(hsla, Hsla { h: 90.0, s: 0.5, l: 0.25, a: 255 });
    }
}
