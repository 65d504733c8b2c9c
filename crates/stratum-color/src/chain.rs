use crate::color::CanonicalColor;
use crate::composite::{blend, AlphaMode};
use crate::error::UnsupportedFormat;
use crate::parse::extract;
use crate::raw::RawColor;

/// Flattens a front-to-back stack of colors into one.
///
/// `foreground` is the topmost layer; `background[0]` sits directly beneath
/// it, and so on. Each step composites the running result over the next layer
/// in straight-alpha mode and rounds rgb back to bytes.
///
/// Stops as soon as the running result is opaque: layers beneath it are
/// never parsed, so a malformed color hidden behind an opaque one is not an
/// error.
///
/// ```
/// use stratum_color::{blend_colors, CanonicalColor, RawColor};
///
/// let out = blend_colors("rgba(255, 255, 255, 0.5)", &[RawColor::from("#000")]).unwrap();
/// assert_eq!(out, CanonicalColor::rgb(128, 128, 128));
/// ```
pub fn blend_colors(
    foreground: impl Into<RawColor>,
    background: &[RawColor],
) -> Result<CanonicalColor, UnsupportedFormat> {
    let mut front = extract(foreground)?;

    for (depth, layer) in background.iter().enumerate() {
        if front.is_opaque() {
            log::trace!("opaque at depth {depth}; {} layer(s) occluded", background.len() - depth);
            break;
        }

        let back = extract(layer)?;
        let blended = blend(front.normalize(), back.normalize(), AlphaMode::Straight).denormalize();
        log::trace!("{front} over {back} -> {blended}");
        front = blended;
    }

    Ok(front)
}
