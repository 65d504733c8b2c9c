use std::fmt;
use std::str::FromStr;

use crate::error::UnsupportedFormat;
use crate::parse::extract;

/// Straight-alpha color with sRGB byte channels and a unit-range alpha.
///
/// This is the representation parsing produces and chain reduction returns.
/// Alpha is nominally in `[0, 1]`; four-channel tuples pass their alpha
/// through unchecked.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanonicalColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl CanonicalColor {
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// `true` when alpha is exactly 1: nothing beneath this color shows through.
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 1.0
    }

    /// Converts to unit-range channels for blend arithmetic.
    #[inline]
    pub fn normalize(self) -> NormalizedColor {
        NormalizedColor {
            r: self.r as f64 / 255.0,
            g: self.g as f64 / 255.0,
            b: self.b as f64 / 255.0,
            a: self.a,
        }
    }

    /// `#rrggbbaa`, with alpha rounded to the nearest byte.
    pub fn to_hex(self) -> String {
        let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, a)
    }

    #[inline]
    pub fn to_array(self) -> [f64; 4] {
        [self.r as f64, self.g as f64, self.b as f64, self.a]
    }
}

impl fmt::Display for CanonicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for CanonicalColor {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        extract(s)
    }
}

/// Color with every channel in `[0, 1]`, straight alpha.
///
/// Only used while compositing; convert back with [`denormalize`](Self::denormalize).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct NormalizedColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl NormalizedColor {
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Scales rgb back to bytes, rounding to nearest. Alpha is kept as-is.
    ///
    /// Out-of-range channels saturate at `0` / `255`.
    #[inline]
    pub fn denormalize(self) -> CanonicalColor {
        fn to_byte(c: f64) -> u8 {
            (c * 255.0).round().clamp(0.0, 255.0) as u8
        }

        CanonicalColor {
            r: to_byte(self.r),
            g: to_byte(self.g),
            b: to_byte(self.b),
            a: self.a,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl From<CanonicalColor> for NormalizedColor {
    #[inline]
    fn from(c: CanonicalColor) -> Self {
        c.normalize()
    }
}

impl From<NormalizedColor> for CanonicalColor {
    #[inline]
    fn from(c: NormalizedColor) -> Self {
        c.denormalize()
    }
}
