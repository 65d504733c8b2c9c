//! Memoization for [`stratum_color::blend_colors`].
//!
//! Stacks are keyed structurally: every layer is canonicalized first, then the
//! ordered list of canonical values is hashed. Two calls that describe the same
//! colors in different notations share one entry.

mod cache;
mod key;

pub use cache::{BlendCache, CacheConfig, CacheStats};
pub use key::{LayerKey, StackKey};
