//! Color parsing and alpha compositing for flattening UI layer stacks.
//!
//! Takes colors in the notations UI code tends to carry around (hex strings,
//! `rgb()`/`rgba()`, numeric tuples), and folds a front-to-back stack of
//! them into a single color using source-over compositing.
//!
//! Everything here is a pure function of its inputs, so results are safe to
//! memoize on input equality.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`raw`] | `RawColor`, the caller-facing input union |
//! | [`color`] | `CanonicalColor` (byte rgb), `NormalizedColor` (unit rgb) |
//! | [`parse`] | `extract` |
//! | [`composite`] | `blend`, `AlphaMode` |
//! | [`chain`] | `blend_colors` |
//! | [`error`] | `UnsupportedFormat` |
//!
//! # Quick start
//!
//! ```rust
//! use stratum_color::{blend_colors, extract, CanonicalColor, RawColor};
//!
//! assert_eq!(extract("#3af").unwrap(), CanonicalColor::rgb(0x33, 0xaa, 0xff));
//!
//! // Semi-transparent text over a translucent panel over an opaque window.
//! let text = blend_colors(
//!     "rgba(255, 255, 255, 0.6)",
//!     &[RawColor::from("#00000080"), RawColor::rgb(30.0, 41.0, 59.0)],
//! )
//! .unwrap();
//! assert!(text.is_opaque());
//! ```

pub mod chain;
pub mod color;
pub mod composite;
pub mod error;
pub mod parse;
pub mod raw;

pub use chain::blend_colors;
pub use color::{CanonicalColor, NormalizedColor};
pub use composite::{blend, AlphaMode};
pub use error::UnsupportedFormat;
pub use parse::extract;
pub use raw::RawColor;
