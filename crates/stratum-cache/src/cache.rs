use std::num::NonZeroUsize;

use lru::LruCache;
use stratum_color::{blend_colors, CanonicalColor, RawColor, UnsupportedFormat};

use crate::key::StackKey;

/// Cache sizing.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of stored stacks. `0` disables storage entirely.
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { capacity: 256 }
    }
}

/// Hit/miss counters since construction or the last [`BlendCache::clear`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Memoizes [`blend_colors`] on the canonical value of every layer.
///
/// Eviction is least-recently-used. Failed blends are never stored, so a
/// malformed stack reports its error on every call.
#[derive(Debug)]
pub struct BlendCache {
    /// `None` when configured with zero capacity.
    entries: Option<LruCache<StackKey, CanonicalColor>>,
    stats: CacheStats,
}

impl Default for BlendCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl BlendCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: NonZeroUsize::new(config.capacity).map(LruCache::new),
            stats: CacheStats::default(),
        }
    }

    /// Same contract as [`blend_colors`], served from the cache when an
    /// equal stack was blended before.
    pub fn get_or_blend(
        &mut self,
        foreground: impl Into<RawColor>,
        background: &[RawColor],
    ) -> Result<CanonicalColor, UnsupportedFormat> {
        let foreground = foreground.into();
        let key = StackKey::new(&foreground, background);

        if let Some(color) = self.entries.as_mut().and_then(|lru| lru.get(&key).copied()) {
            self.stats.hits += 1;
            log::trace!("blend cache hit ({} layers)", key.depth());
            return Ok(color);
        }

        self.stats.misses += 1;
        log::trace!("blend cache miss ({} layers)", key.depth());
        let color = blend_colors(foreground, background)?;

        if let Some(lru) = self.entries.as_mut() {
            // The key was just missed, so anything handed back is an eviction.
            if let Some((evicted, _)) = lru.push(key, color) {
                self.stats.evictions += 1;
                log::debug!("blend cache full ({}); evicted {}-layer stack", lru.cap(), evicted.depth());
            }
        }
        Ok(color)
    }

    #[inline]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, |lru| lru.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.as_ref().map_or(0, |lru| lru.cap().get())
    }

    /// Drops every entry and resets the counters.
    pub fn clear(&mut self) {
        if let Some(lru) = self.entries.as_mut() {
            lru.clear();
        }
        self.stats = CacheStats::default();
    }
}
