use std::fmt;

use crate::color::CanonicalColor;
use crate::error::UnsupportedFormat;

/// A color as supplied by a caller, before classification.
///
/// Text covers hex (`#rgb`, `#rrggbb`, `#rrggbbaa`) and functional
/// (`rgb(..)`, `rgba(..)`) notation. Numeric tuples carry channels as `f64`
/// so values from loosely-typed sources can be validated by the parser rather
/// than truncated at the call site.
#[derive(Debug, Clone, PartialEq)]
pub enum RawColor {
    Text(String),
    /// `[r, g, b]`, alpha defaults to 1.
    Rgb([f64; 3]),
    /// `[r, g, b, a]`, alpha taken as given.
    Rgba([f64; 4]),
}

impl RawColor {
    #[inline]
    pub fn text(s: impl Into<String>) -> Self {
        RawColor::Text(s.into())
    }

    #[inline]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        RawColor::Rgb([r, g, b])
    }

    #[inline]
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        RawColor::Rgba([r, g, b, a])
    }

    /// Builds a tuple color from an untyped channel list.
    ///
    /// Only the length is checked here; channel ranges are checked by
    /// [`extract`](crate::extract).
    pub fn from_channels(channels: &[f64]) -> Result<Self, UnsupportedFormat> {
        match *channels {
            [r, g, b] => Ok(RawColor::Rgb([r, g, b])),
            [r, g, b, a] => Ok(RawColor::Rgba([r, g, b, a])),
            _ => Err(UnsupportedFormat::new(render_channels(channels))),
        }
    }
}

/// `[a, b, c]`, the rendering carried by tuple parse errors.
pub(crate) fn render_channels(channels: &[f64]) -> String {
    let parts: Vec<String> = channels.iter().map(|c| c.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

impl fmt::Display for RawColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawColor::Text(s) => f.write_str(s),
            RawColor::Rgb(c) => f.write_str(&render_channels(c)),
            RawColor::Rgba(c) => f.write_str(&render_channels(c)),
        }
    }
}

impl From<&str> for RawColor {
    #[inline]
    fn from(s: &str) -> Self {
        RawColor::Text(s.to_string())
    }
}

impl From<String> for RawColor {
    #[inline]
    fn from(s: String) -> Self {
        RawColor::Text(s)
    }
}

impl From<[f64; 3]> for RawColor {
    #[inline]
    fn from(c: [f64; 3]) -> Self {
        RawColor::Rgb(c)
    }
}

impl From<[f64; 4]> for RawColor {
    #[inline]
    fn from(c: [f64; 4]) -> Self {
        RawColor::Rgba(c)
    }
}

impl From<CanonicalColor> for RawColor {
    #[inline]
    fn from(c: CanonicalColor) -> Self {
        RawColor::Rgba(c.to_array())
    }
}

impl From<&RawColor> for RawColor {
    #[inline]
    fn from(c: &RawColor) -> Self {
        c.clone()
    }
}
