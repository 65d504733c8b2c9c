//! Source-over compositing of two [`NormalizedColor`]s.

use crate::color::NormalizedColor;

/// How the rgb channels of both operands relate to their alpha.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum AlphaMode {
    /// rgb is independent of alpha.
    #[default]
    Straight,
    /// rgb is already multiplied by alpha.
    Premultiplied,
}

/// Layers `source` over `destination`.
///
/// Channels are assumed to be in `[0, 1]`; nothing is clamped or validated.
pub fn blend(source: NormalizedColor, destination: NormalizedColor, mode: AlphaMode) -> NormalizedColor {
    match mode {
        AlphaMode::Straight => over_straight(source, destination),
        AlphaMode::Premultiplied => over_premultiplied(source, destination),
    }
}

impl NormalizedColor {
    /// Straight-alpha `self` over `destination`.
    #[inline]
    pub fn over(self, destination: NormalizedColor) -> NormalizedColor {
        blend(self, destination, AlphaMode::Straight)
    }
}

/// Zero (or NaN) alpha reads as fully opaque.
#[inline]
fn or_opaque(a: f64) -> f64 {
    if a == 0.0 || a.is_nan() { 1.0 } else { a }
}

/// Missing alpha on either side is coerced to 1, so a zero-alpha source
/// still covers the destination completely.
fn over_premultiplied(src: NormalizedColor, dst: NormalizedColor) -> NormalizedColor {
    let sa = or_opaque(src.a);
    let da = or_opaque(dst.a);
    let rem = 1.0 - sa;
    NormalizedColor {
        r: src.r + dst.r * rem,
        g: src.g + dst.g * rem,
        b: src.b + dst.b * rem,
        a: sa + da * rem,
    }
}

// Branch order matters: the alpha ranges overlap at 0 and 1.
fn over_straight(src: NormalizedColor, dst: NormalizedColor) -> NormalizedColor {
    let (sa, da) = (src.a, dst.a);

    // Opaque source hides everything.
    if sa == 1.0 {
        return NormalizedColor::new(src.r, src.g, src.b, 1.0);
    }

    // Invisible source.
    if sa == 0.0 {
        return NormalizedColor::new(dst.r, dst.g, dst.b, or_opaque(da));
    }

    // Invisible backdrop.
    if da == 0.0 {
        return NormalizedColor::new(src.r, src.g, src.b, or_opaque(sa));
    }

    if da == 1.0 {
        let rem = 1.0 - sa;
        return NormalizedColor::new(
            src.r * sa + dst.r * rem,
            src.g * sa + dst.g * rem,
            src.b * sa + dst.b * rem,
            1.0,
        );
    }

    let rem = da * (1.0 - sa);
    let out_a = sa + rem;
    NormalizedColor::new(
        (src.r * sa + dst.r * rem) / out_a,
        (src.g * sa + dst.g * rem) / out_a,
        (src.b * sa + dst.b * rem) / out_a,
        out_a,
    )
}
