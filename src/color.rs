//! Color type — the public color value for rgba-color.
//!
//! Stores one RGBA record on the 0–255 scale. Every other representation is
//! derived on first access and cached for the lifetime of the value. Values
//! never change after construction, so a cache can never go stale.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

use crate::constants::{CHANNEL_MAX, DARK_THRESHOLD, OPAQUE, OPAQUE_1};
use crate::error::InvalidColorInput;
use crate::math::{self, round_channel};
use crate::shades::PercentageShades;
use crate::types::{Hsl, Hsla, Hsv, Hsva, Rgb, Rgb1, Rgba, Rgba1};
use crate::validate;

/// Write-once slots for the derived representations.
#[derive(Clone, Default)]
struct Derived {
    rgba1: OnceLock<Rgba1>,
    rgb255: OnceLock<Rgb>,
    rgb1: OnceLock<Rgb1>,
    int_value: OnceLock<u32>,
    hsva: OnceLock<Hsva>,
    hsv: OnceLock<Hsv>,
    hsla: OnceLock<Hsla>,
    hsl: OnceLock<Hsl>,
    hex: OnceLock<String>,
}

/// An immutable color value.
///
/// Build one with a `from_*` constructor, read any representation through
/// its getter, and derive new colors with the arithmetic methods. Nothing
/// mutates an existing `Color`.
///
/// ```
/// use rgba_color::Color;
///
/// let red = Color::from_rgb255(255.0, 0.0, 0.0);
/// assert_eq!(red.hex(), "ff0000ff");
/// assert_eq!(red.int_value(), 4_278_190_335);
/// assert_eq!(red.hsv().h, 0.0);
/// ```
#[derive(Clone)]
pub struct Color {
    rgba255: Rgba,
    derived: Derived,
}

impl Color {
    fn new(rgba255: Rgba) -> Self {
        Self {
            rgba255,
            derived: Derived::default(),
        }
    }

    // ─── Constructors ────────────────────────────────────────────────────

    /// Create from 0–255 RGBA values. Fractions round to the nearest integer.
    pub fn from_rgba255(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::new(Rgba {
            r: round_channel(r),
            g: round_channel(g),
            b: round_channel(b),
            a: round_channel(a),
        })
    }

    /// Create from 0.0–1.0 RGBA values.
    pub fn from_rgba1(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::new(math::rgba1_to_rgba255(Rgba1 { r, g, b, a }))
    }

    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb255(r: f64, g: f64, b: f64) -> Self {
        Self::from_rgba255(r, g, b, f64::from(OPAQUE))
    }

    /// Create from 0.0–1.0 RGB values with full opacity.
    pub fn from_rgb1(r: f64, g: f64, b: f64) -> Self {
        Self::from_rgba1(r, g, b, OPAQUE_1)
    }

    /// Create from a packed `R<<24 | G<<16 | B<<8 | A` integer.
    pub fn from_int(value: u32) -> Self {
        Self::new(math::int_to_rgba255(value))
    }

    /// Create from hue (0–360), saturation and value (0.0–1.0) and a 0–255 alpha.
    pub fn from_hsva(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self::new(math::hsva_to_rgba255(Hsva {
            h,
            s,
            v,
            a: round_channel(a),
        }))
    }

    /// Create from hue (0–360), saturation and value (0.0–1.0).
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        Self::from_hsva(h, s, v, f64::from(OPAQUE))
    }

    /// Create from hue (0–360), saturation and lightness (0.0–1.0) and a 0–255 alpha.
    pub fn from_hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self::new(math::hsla_to_rgba255(Hsla {
            h,
            s,
            l,
            a: round_channel(a),
        }))
    }

    /// Create from hue (0–360), saturation and lightness (0.0–1.0).
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        Self::from_hsla(h, s, l, f64::from(OPAQUE))
    }

    /// Parse a hex string (with or without `#`; 3, 4, 6 or 8 digits).
    ///
    /// Never fails. Malformed input yields whatever [`math::hex_to_rgba255`]
    /// reads from it; use [`Color::try_from_hex`] to reject it instead.
    pub fn from_hex(hex: &str) -> Self {
        Self::new(math::hex_to_rgba255(hex))
    }

    // ─── Strict constructors ─────────────────────────────────────────────

    /// Like [`Color::from_rgba255`], rejecting channels outside 0–255.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorInput`] for a non-finite or out-of-range channel.
    pub fn try_from_rgba255(r: f64, g: f64, b: f64, a: f64) -> Result<Self, InvalidColorInput> {
        Ok(Self::from_rgba255(
            validate::channel255("red", r)?,
            validate::channel255("green", g)?,
            validate::channel255("blue", b)?,
            validate::channel255("alpha", a)?,
        ))
    }

    /// Like [`Color::from_rgb255`], rejecting channels outside 0–255.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorInput`] for a non-finite or out-of-range channel.
    pub fn try_from_rgb255(r: f64, g: f64, b: f64) -> Result<Self, InvalidColorInput> {
        Self::try_from_rgba255(r, g, b, f64::from(OPAQUE))
    }

    /// Like [`Color::from_rgba1`], rejecting channels outside 0.0–1.0.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorInput`] for a non-finite or out-of-range channel.
    pub fn try_from_rgba1(r: f64, g: f64, b: f64, a: f64) -> Result<Self, InvalidColorInput> {
        Ok(Self::from_rgba1(
            validate::unit("red", r)?,
            validate::unit("green", g)?,
            validate::unit("blue", b)?,
            validate::unit("alpha", a)?,
        ))
    }

    /// Like [`Color::from_rgb1`], rejecting channels outside 0.0–1.0.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorInput`] for a non-finite or out-of-range channel.
    pub fn try_from_rgb1(r: f64, g: f64, b: f64) -> Result<Self, InvalidColorInput> {
        Self::try_from_rgba1(r, g, b, OPAQUE_1)
    }

    /// Like [`Color::from_hsva`], rejecting hue outside `[0, 360)`,
    /// saturation or value outside 0.0–1.0 and alpha outside 0–255.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorInput`] for the first offending channel.
    pub fn try_from_hsva(h: f64, s: f64, v: f64, a: f64) -> Result<Self, InvalidColorInput> {
        Ok(Self::from_hsva(
            validate::hue(h)?,
            validate::unit("saturation", s)?,
            validate::unit("value", v)?,
            validate::channel255("alpha", a)?,
        ))
    }

    /// Like [`Color::from_hsv`] with the checks of [`Color::try_from_hsva`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorInput`] for the first offending channel.
    pub fn try_from_hsv(h: f64, s: f64, v: f64) -> Result<Self, InvalidColorInput> {
        Self::try_from_hsva(h, s, v, f64::from(OPAQUE))
    }

    /// Like [`Color::from_hsla`], rejecting hue outside `[0, 360)`,
    /// saturation or lightness outside 0.0–1.0 and alpha outside 0–255.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorInput`] for the first offending channel.
    pub fn try_from_hsla(h: f64, s: f64, l: f64, a: f64) -> Result<Self, InvalidColorInput> {
        Ok(Self::from_hsla(
            validate::hue(h)?,
            validate::unit("saturation", s)?,
            validate::unit("lightness", l)?,
            validate::channel255("alpha", a)?,
        ))
    }

    /// Like [`Color::from_hsl`] with the checks of [`Color::try_from_hsla`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorInput`] for the first offending channel.
    pub fn try_from_hsl(h: f64, s: f64, l: f64) -> Result<Self, InvalidColorInput> {
        Self::try_from_hsla(h, s, l, f64::from(OPAQUE))
    }

    /// Like [`Color::from_hex`], rejecting bad lengths and non-hex digits.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// See [`math::try_hex_to_rgba255`].
    pub fn try_from_hex(hex: &str) -> Result<Self, InvalidColorInput> {
        math::try_hex_to_rgba255(hex.trim()).map(Self::new)
    }

    // ─── Representations ─────────────────────────────────────────────────

    /// The canonical 0–255 RGBA record.
    pub fn rgba255(&self) -> Rgba {
        self.rgba255
    }

    /// RGBA on the 0.0–1.0 scale.
    pub fn rgba1(&self) -> Rgba1 {
        *self
            .derived
            .rgba1
            .get_or_init(|| math::rgba255_to_rgba1(self.rgba255))
    }

    /// RGB on the 0–255 scale, alpha dropped.
    pub fn rgb255(&self) -> Rgb {
        *self
            .derived
            .rgb255
            .get_or_init(|| math::rgba255_to_rgb255(self.rgba255))
    }

    /// RGB on the 0.0–1.0 scale, alpha dropped.
    pub fn rgb1(&self) -> Rgb1 {
        *self
            .derived
            .rgb1
            .get_or_init(|| math::rgba1_to_rgb1(self.rgba1()))
    }

    /// Packed `R<<24 | G<<16 | B<<8 | A`.
    pub fn int_value(&self) -> u32 {
        *self
            .derived
            .int_value
            .get_or_init(|| math::rgba255_to_int(self.rgba255))
    }

    /// Hue in degrees, saturation and value 0.0–1.0, alpha 0–255.
    pub fn hsva(&self) -> Hsva {
        *self
            .derived
            .hsva
            .get_or_init(|| math::rgba255_to_hsva(self.rgba255))
    }

    /// [`Color::hsva`] without alpha.
    pub fn hsv(&self) -> Hsv {
        *self
            .derived
            .hsv
            .get_or_init(|| math::hsva_to_hsv(self.hsva()))
    }

    /// Hue in degrees, saturation and lightness 0.0–1.0, alpha 0–255.
    pub fn hsla(&self) -> Hsla {
        *self
            .derived
            .hsla
            .get_or_init(|| math::rgba255_to_hsla(self.rgba255))
    }

    /// [`Color::hsla`] without alpha.
    pub fn hsl(&self) -> Hsl {
        *self
            .derived
            .hsl
            .get_or_init(|| math::hsla_to_hsl(self.hsla()))
    }

    /// Lowercase `rrggbbaa`, no `#` prefix.
    pub fn hex(&self) -> &str {
        self.derived
            .hex
            .get_or_init(|| math::rgba255_to_hex(self.rgba255))
    }

    // ─── Aggregates ──────────────────────────────────────────────────────

    /// r + g + b on the 0–255 scale.
    pub fn rgb255_sum(&self) -> i64 {
        i64::from(self.rgba255.r) + i64::from(self.rgba255.g) + i64::from(self.rgba255.b)
    }

    /// r + g + b + a on the 0–255 scale.
    pub fn rgba255_sum(&self) -> i64 {
        self.rgb255_sum() + i64::from(self.rgba255.a)
    }

    /// Mean of r, g, b on the 0–255 scale.
    pub fn rgb255_avg(&self) -> f64 {
        self.rgb255_sum() as f64 / 3.0
    }

    /// Mean of r, g, b, a on the 0–255 scale.
    pub fn rgba255_avg(&self) -> f64 {
        self.rgba255_sum() as f64 / 4.0
    }

    /// r + g + b on the 0.0–1.0 scale.
    pub fn rgb1_sum(&self) -> f64 {
        let rgba1 = self.rgba1();
        rgba1.r + rgba1.g + rgba1.b
    }

    /// r + g + b + a on the 0.0–1.0 scale.
    pub fn rgba1_sum(&self) -> f64 {
        self.rgb1_sum() + self.rgba1().a
    }

    /// Mean of r, g, b on the 0.0–1.0 scale.
    pub fn rgb1_avg(&self) -> f64 {
        self.rgb1_sum() / 3.0
    }

    /// Mean of r, g, b, a on the 0.0–1.0 scale.
    pub fn rgba1_avg(&self) -> f64 {
        self.rgba1_sum() / 4.0
    }

    /// Whether the RGB average is below [`DARK_THRESHOLD`].
    pub fn is_dark(&self) -> bool {
        self.rgb255_avg() < DARK_THRESHOLD
    }

    /// Complement of [`Color::is_dark`].
    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }

    /// 255 minus each of r, g, b. Alpha is kept.
    ///
    /// Channels far outside 0–255 saturate at the `i32` bounds.
    pub fn inverted(&self) -> Color {
        let Rgba { r, g, b, a } = self.rgba255;
        let max = f64::from(CHANNEL_MAX);
        Color::from_rgba255(
            max - f64::from(r),
            max - f64::from(g),
            max - f64::from(b),
            f64::from(a),
        )
    }

    // ─── Arithmetic ──────────────────────────────────────────────────────
    //
    // Alpha overrides are 0–255 and rounded like any other channel.

    /// Both alphas when they match, opaque otherwise.
    fn shared_alpha(&self, other: &Color) -> f64 {
        if self.rgba255.a == other.rgba255.a {
            f64::from(self.rgba255.a)
        } else {
            f64::from(OPAQUE)
        }
    }

    /// Per-channel `self - other` as floats, so extreme channels can't overflow.
    fn difference(&self, other: &Color) -> (f64, f64, f64) {
        let (lhs, rhs) = (self.rgba255, other.rgba255);
        (
            f64::from(lhs.r) - f64::from(rhs.r),
            f64::from(lhs.g) - f64::from(rhs.g),
            f64::from(lhs.b) - f64::from(rhs.b),
        )
    }

    /// Per-channel `self - other`.
    ///
    /// Alpha is `alpha` if given, else the shared alpha of both colors, else
    /// 255. Negative results (alpha included) become 0 unless `allow_negative`.
    pub fn subtract(&self, other: &Color, alpha: Option<f64>, allow_negative: bool) -> Color {
        let floor = |x: f64| if x < 0.0 && !allow_negative { 0.0 } else { x };
        let (r, g, b) = self.difference(other);
        let a = alpha.unwrap_or_else(|| self.shared_alpha(other));
        Color::from_rgba255(floor(r), floor(g), floor(b), floor(a))
    }

    /// Per-channel `|self - other|`. Alpha follows [`Color::subtract`].
    pub fn diff(&self, other: &Color, alpha: Option<f64>) -> Color {
        let (r, g, b) = self.difference(other);
        let a = alpha.unwrap_or_else(|| self.shared_alpha(other));
        Color::from_rgba255(r.abs(), g.abs(), b.abs(), a)
    }

    /// Per-channel `self - other`, capped at 255 unless `allow_overflow`.
    ///
    /// Despite the name this subtracts: it computes the same difference as
    /// [`Color::subtract`] and only differs in clamping the top instead of
    /// the bottom. The behavior is kept for compatibility and is very likely
    /// unintended. Alpha defaults to 255.
    pub fn add(&self, other: &Color, alpha: Option<f64>, allow_overflow: bool) -> Color {
        let cap = |x: f64| {
            let max = f64::from(CHANNEL_MAX);
            if x > max && !allow_overflow {
                max
            } else {
                x
            }
        };
        let (r, g, b) = self.difference(other);
        let a = alpha.unwrap_or(f64::from(OPAQUE));
        Color::from_rgba255(cap(r), cap(g), cap(b), cap(a))
    }

    /// Per-channel `(self - other) / 2`.
    ///
    /// Halves the difference rather than averaging the sum; kept for
    /// compatibility, very likely unintended. Alpha defaults to the mean of
    /// both alphas.
    pub fn mix(&self, other: &Color, alpha: Option<f64>) -> Color {
        let (r, g, b) = self.difference(other);
        let a = alpha.unwrap_or_else(|| {
            (f64::from(self.rgba255.a) + f64::from(other.rgba255.a)) / 2.0
        });
        Color::from_rgba255(r / 2.0, g / 2.0, b / 2.0, a)
    }

    /// Scale r, g, b by `factor`, capped at 255 unless `allow_overflow`.
    /// Alpha defaults to this color's alpha.
    pub fn multiply(&self, factor: f64, alpha: Option<f64>, allow_overflow: bool) -> Color {
        let scale = |c: i32| {
            let x = f64::from(c) * factor;
            let max = f64::from(CHANNEL_MAX);
            if x > max && !allow_overflow {
                max
            } else {
                x
            }
        };
        let Rgba { r, g, b, a } = self.rgba255;
        Color::from_rgba255(
            scale(r),
            scale(g),
            scale(b),
            alpha.unwrap_or(f64::from(a)),
        )
    }

    /// `multiply(1 / divisor, alpha, false)`.
    pub fn divide(&self, divisor: f64, alpha: Option<f64>) -> Color {
        self.multiply(1.0 / divisor, alpha, false)
    }

    /// Scale r, g, b by `1 + pct`. See [`crate::constants::DEFAULT_LIGHTNESS_STEP`].
    pub fn lighter(&self, pct: f64) -> Color {
        self.multiply(1.0 + pct, None, false)
    }

    /// Scale r, g, b by `1 - pct`.
    pub fn darker(&self, pct: f64) -> Color {
        self.lighter(-pct)
    }

    // ─── Palettes ────────────────────────────────────────────────────────

    /// Shades from dark to light with this color in between.
    ///
    /// The 0–255 range is cut into `count` steps; where this color's RGB
    /// average falls decides how many shades precede and follow it. One of
    /// the two counts is then reduced by one: the darker count when it is
    /// strictly larger, the lighter count otherwise. Darker shades come from
    /// [`Color::subtract`] and lighter ones from [`Color::add`] against a gray
    /// of `step * n`, both keeping this color's alpha. Because `add`
    /// subtracts, the "lighter" half can hold negative channels. A fully
    /// transparent color gives fully transparent shades.
    pub fn shades(&self, count: u32) -> Vec<Color> {
        let count = f64::from(count);
        let step = f64::from(CHANNEL_MAX) / count;
        let mut darker = self.rgb255_avg() / step;
        let mut lighter = count - darker;

        if darker > lighter {
            darker -= 1.0;
        } else {
            lighter -= 1.0;
        }

        let alpha = Some(f64::from(self.rgba255.a));
        let gray = |n: f64| Color::from_rgb255(step * n, step * n, step * n);
        let mut colors = Vec::new();

        while darker > 0.0 {
            colors.push(self.subtract(&gray(darker), alpha, false));
            darker -= 1.0;
        }

        colors.push(self.clone());

        while lighter > 0.0 {
            colors.push(self.add(&gray(lighter), alpha, false));
            lighter -= 1.0;
        }

        colors
    }

    /// Lazily scale this color by a growing factor.
    ///
    /// The factor starts at `start_step` and grows by `2 / count` per item;
    /// iteration ends once it reaches 2.0.
    pub fn shades_by_percentage(&self, count: u32, start_step: f64) -> PercentageShades {
        PercentageShades::new(self.clone(), count, start_step)
    }
}

// ─── Trait impls ─────────────────────────────────────────────────────────────

/// Opaque black.
impl Default for Color {
    fn default() -> Self {
        Self::new(Rgba::new(0, 0, 0, OPAQUE))
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgba255 == other.rgba255
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rgba255.hash(state);
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgba { r, g, b, a } = self.rgba255;
        f.debug_struct("Color")
            .field("r", &r)
            .field("g", &g)
            .field("b", &b)
            .field("a", &a)
            .finish()
    }
}

/// `#rrggbbaa`
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

impl FromStr for Color {
    type Err = InvalidColorInput;

    /// Strict hex parsing, see [`Color::try_from_hex`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_hex(s)
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Self::new(rgba)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::new(math::rgb255_to_rgba255(rgb, None))
    }
}

impl From<Rgba1> for Color {
    fn from(rgba: Rgba1) -> Self {
        Self::new(math::rgba1_to_rgba255(rgba))
    }
}

impl From<Rgb1> for Color {
    fn from(rgb: Rgb1) -> Self {
        Self::from(math::rgb1_to_rgba1(rgb, None))
    }
}

impl From<Hsva> for Color {
    fn from(hsva: Hsva) -> Self {
        Self::new(math::hsva_to_rgba255(hsva))
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Self {
        Self::from(math::hsv_to_hsva(hsv, None))
    }
}

impl From<Hsla> for Color {
    fn from(hsla: Hsla) -> Self {
        Self::new(math::hsla_to_rgba255(hsla))
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::from(math::hsl_to_hsla(hsl, None))
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_int(value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Color::try_from_hex(&s).map_err(serde::de::Error::custom)
    }
}
