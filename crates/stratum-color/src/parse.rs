//! Classification of raw color values into [`CanonicalColor`].
//!
//! Recognized shapes, tried in order:
//!
//! 1. `#rgb`, each digit doubled (`#3af` → `0x33 0xaa 0xff`)
//! 2. `#rrggbb` / `#rrggbbaa`, alpha byte divided by 255
//! 3. `rgb(r,g,b)` / `rgba(r,g,b,a)`, whitespace-insensitive
//! 4. `[r, g, b]`
//! 5. `[r, g, b, a]`

use crate::color::CanonicalColor;
use crate::error::UnsupportedFormat;
use crate::raw::{render_channels, RawColor};

/// Parses a raw color into its canonical form.
///
/// Tuple alpha is passed through without a range check; only rgb channels are
/// bounded to `0..=255`.
pub fn extract(raw: impl Into<RawColor>) -> Result<CanonicalColor, UnsupportedFormat> {
    match raw.into() {
        RawColor::Text(s) => parse_text(&s),
        RawColor::Rgb([r, g, b]) => {
            let [r, g, b] = channel_bytes(&[r, g, b], [r, g, b])?;
            Ok(CanonicalColor::rgb(r, g, b))
        }
        RawColor::Rgba(c @ [r, g, b, a]) => {
            let [r, g, b] = channel_bytes(&c, [r, g, b])?;
            Ok(CanonicalColor::rgba(r, g, b, a))
        }
    }
}

fn parse_text(s: &str) -> Result<CanonicalColor, UnsupportedFormat> {
    if let Some(digits) = s.strip_prefix('#') {
        return parse_hex(digits).ok_or_else(|| UnsupportedFormat::new(s));
    }

    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    parse_functional(&compact).ok_or_else(|| UnsupportedFormat::new(s))
}

// ── hex ───────────────────────────────────────────────────────────────────

fn parse_hex(digits: &str) -> Option<CanonicalColor> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    // All bytes are ASCII from here on, so byte slicing stays on char boundaries.
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

    match digits.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok().map(|n| n * 17);
            Some(CanonicalColor::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        6 => Some(CanonicalColor::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(CanonicalColor::rgba(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            byte(6)? as f64 / 255.0,
        )),
        _ => None,
    }
}

// ── rgb() / rgba() ────────────────────────────────────────────────────────

/// Expects whitespace already stripped. Either keyword accepts an optional alpha.
fn parse_functional(s: &str) -> Option<CanonicalColor> {
    let body = s
        .strip_prefix("rgba(")
        .or_else(|| s.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let parts: Vec<&str> = body.split(',').collect();
    let (rgb, alpha) = match parts.as_slice() {
        [r, g, b] => ([*r, *g, *b], None),
        [r, g, b, a] => ([*r, *g, *b], Some(*a)),
        _ => return None,
    };

    let r = parse_channel(rgb[0])?;
    let g = parse_channel(rgb[1])?;
    let b = parse_channel(rgb[2])?;
    let a = match alpha {
        Some(a) => parse_alpha(a)?,
        None => 1.0,
    };
    Some(CanonicalColor::rgba(r, g, b, a))
}

/// A run of decimal digits no greater than 255.
fn parse_channel(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let trimmed = s.trim_start_matches('0');
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse::<u8>().ok()
}

/// `1`, `0`, or `0.` followed by any number of digits.
fn parse_alpha(s: &str) -> Option<f64> {
    match s {
        "1" => Some(1.0),
        "0" => Some(0.0),
        _ => {
            let frac = s.strip_prefix("0.")?;
            if !frac.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            if frac.is_empty() {
                return Some(0.0);
            }
            s.parse::<f64>().ok()
        }
    }
}

// ── numeric tuples ────────────────────────────────────────────────────────

/// Bounds-checks the rgb channels of a tuple, reporting the whole tuple on failure.
fn channel_bytes(tuple: &[f64], rgb: [f64; 3]) -> Result<[u8; 3], UnsupportedFormat> {
    let in_range = |v: f64| v.is_finite() && (0.0..=255.0).contains(&v);
    if !rgb.iter().all(|&v| in_range(v)) {
        return Err(UnsupportedFormat::new(render_channels(tuple)));
    }
    Ok(rgb.map(|v| v.round() as u8))
}
