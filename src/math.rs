//! Color math — pure conversions between the record types.
//!
//! Nothing here keeps state or fails. Input outside a record's domain gives a
//! deterministic but meaningless result; see [`try_hex_to_rgba255`] for the
//! one validating entry point.

use std::iter;

use crate::constants::{HEX_DIGITS, OPAQUE, OPAQUE_1};
use crate::error::InvalidColorInput;
use crate::types::{Hsl, Hsla, Hsv, Hsva, Rgb, Rgb1, Rgba, Rgba1};

/// Round to the nearest integer, halves toward positive infinity.
///
/// NaN and infinities saturate through the float-to-int cast (NaN → 0).
#[inline]
pub(crate) fn round_channel(x: f64) -> i32 {
    (x + 0.5).floor() as i32
}

/// Low byte of a channel.
#[inline]
fn byte(c: i32) -> u32 {
    (c & 0xff) as u32
}

// ─── RGBA255 ↔ Hex ───────────────────────────────────────────────────────────

/// Format as 8 lowercase hex digits, `rrggbbaa`, without a `#` prefix.
///
/// Channels outside 0–255 are written as their low byte.
pub fn rgba255_to_hex(rgba: Rgba) -> String {
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        byte(rgba.r),
        byte(rgba.g),
        byte(rgba.b),
        byte(rgba.a)
    )
}

/// Expand a hex string to at least 8 lowercase digits.
///
/// Strips a leading `#`. 3 and 4 digit forms double every digit, 6 digit
/// forms get `ff` alpha appended. Other lengths below 8 are right-padded with
/// `0`; longer strings are left as they are.
pub fn normalize_hex(hex: &str) -> String {
    let digits = hex.strip_prefix('#').unwrap_or(hex).to_ascii_lowercase();
    match digits.chars().count() {
        len @ (3 | 4) => {
            let mut out = String::with_capacity(HEX_DIGITS);
            for c in digits.chars() {
                out.push(c);
                out.push(c);
            }
            if len == 3 {
                out.push_str("ff");
            }
            out
        }
        6 => digits + "ff",
        len if len >= HEX_DIGITS => digits,
        len => {
            tracing::trace!(len, "Padding hex string of irregular length");
            digits.chars().chain(iter::repeat('0')).take(HEX_DIGITS).collect()
        }
    }
}

/// Parse a hex color, normalizing short forms first.
///
/// Parsing stops at the first non-hex character and the digits read so far
/// form the packed value, so `"ff00zz"` reads as `0xff00`. Only the low 32
/// bits are kept: past 8 digits, the last 8 read decide the color.
pub fn hex_to_rgba255(hex: &str) -> Rgba {
    let normalized = normalize_hex(hex);
    let valid = normalized
        .chars()
        .take_while(char::is_ascii_hexdigit)
        .count();
    if valid < normalized.len() {
        tracing::trace!(hex, valid, "Hex string has non-hex digits");
    }
    // The prefix is ASCII, so its char count is its byte length.
    let low = valid.saturating_sub(HEX_DIGITS);
    let value = u32::from_str_radix(&normalized[low..valid], 16).unwrap_or(0);
    int_to_rgba255(value)
}

/// Strict variant of [`hex_to_rgba255`].
///
/// # Errors
///
/// Returns [`InvalidColorInput::HexLength`] unless the string has 3, 4, 6 or
/// 8 digits after an optional `#`, and [`InvalidColorInput::HexDigit`] for
/// the first non-hex character.
pub fn try_hex_to_rgba255(hex: &str) -> Result<Rgba, InvalidColorInput> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let len = digits.chars().count();
    if !matches!(len, 3 | 4 | 6 | HEX_DIGITS) {
        tracing::debug!(hex, len, "Rejecting hex string length");
        return Err(InvalidColorInput::HexLength { len });
    }
    if let Some((position, digit)) = digits
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        tracing::debug!(hex, position, "Rejecting hex digit");
        return Err(InvalidColorInput::HexDigit { digit, position });
    }
    Ok(hex_to_rgba255(digits))
}

// ─── RGBA255 ↔ Int ───────────────────────────────────────────────────────────

/// Pack as `R<<24 | G<<16 | B<<8 | A`.
pub fn rgba255_to_int(rgba: Rgba) -> u32 {
    (byte(rgba.r) << 24) | (byte(rgba.g) << 16) | (byte(rgba.b) << 8) | byte(rgba.a)
}

/// Unpack `R<<24 | G<<16 | B<<8 | A`.
pub fn int_to_rgba255(value: u32) -> Rgba {
    Rgba {
        r: ((value >> 24) & 0xff) as i32,
        g: ((value >> 16) & 0xff) as i32,
        b: ((value >> 8) & 0xff) as i32,
        a: (value & 0xff) as i32,
    }
}

// ─── RGBA255 ↔ RGBA1 ─────────────────────────────────────────────────────────

pub fn rgba255_to_rgba1(rgba: Rgba) -> Rgba1 {
    Rgba1 {
        r: f64::from(rgba.r) / 255.0,
        g: f64::from(rgba.g) / 255.0,
        b: f64::from(rgba.b) / 255.0,
        a: f64::from(rgba.a) / 255.0,
    }
}

pub fn rgba1_to_rgba255(rgba: Rgba1) -> Rgba {
    Rgba {
        r: round_channel(rgba.r * 255.0),
        g: round_channel(rgba.g * 255.0),
        b: round_channel(rgba.b * 255.0),
        a: round_channel(rgba.a * 255.0),
    }
}

// ─── RGBA255 ↔ HSVA / HSLA ───────────────────────────────────────────────────

/// Hue in degrees, `[0, 360)`. Zero when `chroma` is zero.
fn hue_degrees(rgb: Rgba1, max: f64, chroma: f64) -> f64 {
    if chroma == 0.0 {
        return 0.0;
    }
    let sector = if max == rgb.r {
        (rgb.g - rgb.b) / chroma
    } else if max == rgb.g {
        2.0 + (rgb.b - rgb.r) / chroma
    } else {
        4.0 + (rgb.r - rgb.g) / chroma
    };
    60.0 * if sector < 0.0 { sector + 6.0 } else { sector }
}

/// RGBA255 → HSVA. Hue and saturation are 0 for grays.
pub fn rgba255_to_hsva(rgba: Rgba) -> Hsva {
    let rgb = rgba255_to_rgba1(rgba);
    let v = rgb.r.max(rgb.g).max(rgb.b);
    let chroma = v - rgb.r.min(rgb.g).min(rgb.b);

    Hsva {
        h: hue_degrees(rgb, v, chroma),
        s: if v == 0.0 { 0.0 } else { chroma / v },
        v,
        a: round_channel(rgb.a * 255.0),
    }
}

/// HSVA → RGBA255.
pub fn hsva_to_rgba255(hsva: Hsva) -> Rgba {
    let f = |n: f64| {
        let k = (n + hsva.h / 60.0) % 6.0;
        hsva.v - hsva.v * hsva.s * k.min(4.0 - k).min(1.0).max(0.0)
    };

    rgba1_to_rgba255(Rgba1 {
        r: f(5.0),
        g: f(3.0),
        b: f(1.0),
        a: f64::from(hsva.a) / 255.0,
    })
}

/// RGBA255 → HSLA. Alpha passes through unscaled.
pub fn rgba255_to_hsla(rgba: Rgba) -> Hsla {
    let rgb = rgba255_to_rgba1(rgba);
    let max = rgb.r.max(rgb.g).max(rgb.b);
    let chroma = max - rgb.r.min(rgb.g).min(rgb.b);
    let denom = 1.0 - (max + max - chroma - 1.0).abs();

    Hsla {
        h: hue_degrees(rgb, max, chroma),
        s: if denom == 0.0 { 0.0 } else { chroma / denom },
        l: (max + max - chroma) / 2.0,
        a: rgba.a,
    }
}

/// HSLA → RGBA255.
pub fn hsla_to_rgba255(hsla: Hsla) -> Rgba {
    let a = hsla.s * hsla.l.min(1.0 - hsla.l);
    let f = |n: f64| {
        let k = (n + hsla.h / 30.0) % 12.0;
        hsla.l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };

    rgba1_to_rgba255(Rgba1 {
        r: f(0.0),
        g: f(8.0),
        b: f(4.0),
        a: f64::from(hsla.a) / 255.0,
    })
}

// ─── Alpha projection / injection ────────────────────────────────────────────

pub fn rgba255_to_rgb255(rgba: Rgba) -> Rgb {
    Rgb {
        r: rgba.r,
        g: rgba.g,
        b: rgba.b,
    }
}

/// Attach alpha, opaque when `None`.
pub fn rgb255_to_rgba255(rgb: Rgb, a: Option<i32>) -> Rgba {
    Rgba {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
        a: a.unwrap_or(OPAQUE),
    }
}

pub fn rgba1_to_rgb1(rgba: Rgba1) -> Rgb1 {
    Rgb1 {
        r: rgba.r,
        g: rgba.g,
        b: rgba.b,
    }
}

/// Attach alpha, `1.0` when `None`.
pub fn rgb1_to_rgba1(rgb: Rgb1, a: Option<f64>) -> Rgba1 {
    Rgba1 {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
        a: a.unwrap_or(OPAQUE_1),
    }
}

pub fn hsva_to_hsv(hsva: Hsva) -> Hsv {
    Hsv {
        h: hsva.h,
        s: hsva.s,
        v: hsva.v,
    }
}

/// Attach a 0–255 alpha, opaque when `None`.
pub fn hsv_to_hsva(hsv: Hsv, a: Option<i32>) -> Hsva {
    Hsva {
        h: hsv.h,
        s: hsv.s,
        v: hsv.v,
        a: a.unwrap_or(OPAQUE),
    }
}

pub fn hsla_to_hsl(hsla: Hsla) -> Hsl {
    Hsl {
        h: hsla.h,
        s: hsla.s,
        l: hsla.l,
    }
}

/// Attach a 0–255 alpha, opaque when `None`.
pub fn hsl_to_hsla(hsl: Hsl, a: Option<i32>) -> Hsla {
    Hsla {
        h: hsl.h,
        s: hsl.s,
        l: hsl.l,
        a: a.unwrap_or(OPAQUE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn round_channel_rounds_halves_up() {
        assert_eq!(round_channel(127.5), 128);
        assert_eq!(round_channel(0.49), 0);
        assert_eq!(round_channel(-0.5), 0);
        assert_eq!(round_channel(-1.5), -1);
        assert_eq!(round_channel(f64::NAN), 0);
    }

    // ── Hex ──────────────────────────────────────────────────────────────

    #[test]
    fn hex_is_zero_padded_lowercase() {
        assert_eq!(rgba255_to_hex(Rgba::new(255, 0, 170, 255)), "ff00aaff");
        assert_eq!(rgba255_to_hex(Rgba::new(1, 2, 3, 4)), "01020304");
    }

    #[test]
    fn normalize_expands_short_forms() {
        assert_eq!(normalize_hex("#F0A"), "ff00aaff");
        assert_eq!(normalize_hex("f0a8"), "ff00aa88");
        assert_eq!(normalize_hex("123456"), "123456ff");
        assert_eq!(normalize_hex("#12345678"), "12345678");
    }

    #[test]
    fn normalize_pads_irregular_lengths() {
        assert_eq!(normalize_hex("12345"), "12345000");
        assert_eq!(normalize_hex(""), "00000000");
    }

    #[test]
    fn long_hex_keeps_low_32_bits() {
        assert_eq!(normalize_hex("#123456789A"), "123456789a");
        assert_eq!(hex_to_rgba255("123456789a"), Rgba::new(0x34, 0x56, 0x78, 0x9a));
        assert_eq!(hex_to_rgba255("123456789azz"), Rgba::new(0x34, 0x56, 0x78, 0x9a));
        assert_eq!(hex_to_rgba255("12zz56789a"), Rgba::new(0, 0, 0, 0x12));
    }

    #[test]
    fn short_and_long_hex_agree() {
        let expected = Rgba::new(255, 0, 170, 255);
        assert_eq!(hex_to_rgba255("f0a"), expected);
        assert_eq!(hex_to_rgba255("ff00aaff"), expected);
        assert_eq!(hex_to_rgba255("#FF00AA"), expected);
    }

    #[test]
    fn hex_stops_at_first_bad_digit() {
        assert_eq!(hex_to_rgba255("ff00zzff"), Rgba::new(0, 0, 255, 0));
        assert_eq!(hex_to_rgba255("zz"), Rgba::new(0, 0, 0, 0));
    }

    #[test]
    fn strict_hex_reports_problems() {
        assert_eq!(
            try_hex_to_rgba255("#12345"),
            Err(InvalidColorInput::HexLength { len: 5 })
        );
        assert_eq!(
            try_hex_to_rgba255("#12g"),
            Err(InvalidColorInput::HexDigit {
                digit: 'g',
                position: 2
            })
        );
        assert_eq!(try_hex_to_rgba255("#0f08"), Ok(Rgba::new(0, 255, 0, 136)));
    }

    // ── Int ──────────────────────────────────────────────────────────────

    #[test]
    fn int_packing() {
        assert_eq!(rgba255_to_int(Rgba::new(255, 0, 0, 255)), 4_278_190_335);
        assert_eq!(int_to_rgba255(0x1122_3344), Rgba::new(0x11, 0x22, 0x33, 0x44));
        assert_eq!(rgba255_to_int(Rgba::new(0, 0, 0, 0)), 0);
        assert_eq!(rgba255_to_int(Rgba::new(255, 255, 255, 255)), u32::MAX);
    }

    // ── Scale ────────────────────────────────────────────────────────────

    #[test]
    fn scale_roundtrip() {
        let rgba = Rgba::new(12, 128, 254, 77);
        let unit = rgba255_to_rgba1(rgba);
        assert!(approx_eq(unit.g, 128.0 / 255.0));
        assert_eq!(rgba1_to_rgba255(unit), rgba);
    }

    #[test]
    fn unit_scale_rounds() {
        assert_eq!(
            rgba1_to_rgba255(Rgba1::new(0.5, 0.0, 1.0, 1.0)),
            Rgba::new(128, 0, 255, 255)
        );
    }

    // ── HSV ──────────────────────────────────────────────────────────────

    #[test]
    fn primary_hues() {
        let red = rgba255_to_hsva(Rgba::new(255, 0, 0, 255));
        assert_eq!(red, Hsva { h: 0.0, s: 1.0, v: 1.0, a: 255 });
        assert!(approx_eq(rgba255_to_hsva(Rgba::new(0, 255, 0, 255)).h, 120.0));
        assert!(approx_eq(rgba255_to_hsva(Rgba::new(0, 0, 255, 255)).h, 240.0));
        assert!(approx_eq(rgba255_to_hsva(Rgba::new(255, 0, 255, 255)).h, 300.0));
    }

    #[test]
    fn gray_has_zero_hue_and_saturation() {
        let gray = rgba255_to_hsva(Rgba::new(128, 128, 128, 255));
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert!(approx_eq(gray.v, 128.0 / 255.0));

        let black = rgba255_to_hsva(Rgba::new(0, 0, 0, 10));
        assert_eq!(black, Hsva { h: 0.0, s: 0.0, v: 0.0, a: 10 });
    }

    #[test]
    fn hsva_to_rgba() {
        let green = Hsva { h: 120.0, s: 1.0, v: 1.0, a: 255 };
        assert_eq!(hsva_to_rgba255(green), Rgba::new(0, 255, 0, 255));
        let faded = Hsva { h: 0.0, s: 0.0, v: 1.0, a: 51 };
        assert_eq!(hsva_to_rgba255(faded), Rgba::new(255, 255, 255, 51));
    }

    // ── HSL ──────────────────────────────────────────────────────────────

    #[test]
    fn hsla_of_red_and_white() {
        let red = rgba255_to_hsla(Rgba::new(255, 0, 0, 200));
        assert_eq!(red, Hsla { h: 0.0, s: 1.0, l: 0.5, a: 200 });

        let white = rgba255_to_hsla(Rgba::new(255, 255, 255, 255));
        assert_eq!(white, Hsla { h: 0.0, s: 0.0, l: 1.0, a: 255 });
    }

    #[test]
    fn hsla_to_rgba() {
        let red = Hsla { h: 0.0, s: 1.0, l: 0.5, a: 255 };
        assert_eq!(hsla_to_rgba255(red), Rgba::new(255, 0, 0, 255));
        let navy = Hsla { h: 240.0, s: 1.0, l: 0.25, a: 255 };
        assert_eq!(hsla_to_rgba255(navy), Rgba::new(0, 0, 128, 255));
    }

    // ── Projection ───────────────────────────────────────────────────────

    #[test]
    fn alpha_defaults() {
        let rgb = Rgb { r: 1, g: 2, b: 3 };
        assert_eq!(rgb255_to_rgba255(rgb, None), Rgba::new(1, 2, 3, 255));
        assert_eq!(rgb255_to_rgba255(rgb, Some(9)), Rgba::new(1, 2, 3, 9));
        assert_eq!(rgba255_to_rgb255(Rgba::new(1, 2, 3, 9)), rgb);

        let rgb1 = Rgb1 { r: 0.1, g: 0.2, b: 0.3 };
        assert_eq!(rgb1_to_rgba1(rgb1, None).a, 1.0);
        assert_eq!(rgba1_to_rgb1(rgb1_to_rgba1(rgb1, Some(0.5))), rgb1);

        let hsv = Hsv { h: 10.0, s: 0.5, v: 0.5 };
        assert_eq!(hsv_to_hsva(hsv, None).a, 255);
        assert_eq!(hsva_to_hsv(hsv_to_hsva(hsv, Some(3))), hsv);

        let hsl = Hsl { h: 10.0, s: 0.5, l: 0.5 };
        assert_eq!(hsl_to_hsla(hsl, None).a, 255);
        assert_eq!(hsla_to_hsl(hsl_to_hsla(hsl, Some(3))), hsl);
    }
}
