//! # rgba-color
//!
//! A color value type with conversions between RGB/RGBA (0–255 and 0.0–1.0),
//! packed integers, hex strings, HSV/HSVA and HSL/HSLA.
//!
//! [`Color`] stores one canonical RGBA record and derives the others on first
//! use. The conversions themselves live in [`math`] as plain functions over
//! the records in [`types`], usable without a `Color`.
//!
//! ## Usage
//!
//! ```rust
//! use rgba_color::Color;
//!
//! let color = Color::from_hex("#3b82f6");
//! assert_eq!(color.rgb255().b, 246);
//! assert!(color.is_light());
//!
//! let lighter = color.lighter(0.1);
//! let ramp = color.shades(10);
//! assert_eq!(ramp.len(), 11);
//! # let _ = lighter;
//! ```
//!
//! Constructors never fail. Use the `try_from_*` constructors or
//! `str::parse` to reject malformed input with an [`InvalidColorInput`].

mod color;
pub mod constants;
mod error;
pub mod math;
mod shades;
pub mod types;
mod validate;

pub use color::Color;
pub use error::InvalidColorInput;
pub use shades::PercentageShades;
pub use types::{Hsl, Hsla, Hsv, Hsva, Rgb, Rgb1, Rgba, Rgba1};
