//! Flow layout caching for memoization.

use ascend_core::Size;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use crate::flow::{FlowAlign, FlowLayout, FlowResult};

/// Cache key covering every input of a flow layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlowKey {
    /// Hash of the measured item sizes
    pub content_hash: u64,
    /// Number of items
    pub item_count: usize,
    /// Bit pattern of the available width
    pub width_bits: u32,
    /// Hash of the layout parameters
    pub params_hash: u64,
}

impl FlowKey {
    /// Build a key from the inputs of [`FlowLayout::compute`].
    #[must_use]
    pub fn new(sizes: &[Size], available_width: f32, layout: &FlowLayout) -> Self {
        let mut hasher = DefaultHasher::new();
        for size in sizes {
            size.width.to_bits().hash(&mut hasher);
            size.height.to_bits().hash(&mut hasher);
        }
        let content_hash = hasher.finish();

        let mut hasher = DefaultHasher::new();
        layout.spacing.to_bits().hash(&mut hasher);
        layout.line_spacing.map(f32::to_bits).hash(&mut hasher);
        match layout.align {
            FlowAlign::Leading => 0u8,
            FlowAlign::Center => 1,
            FlowAlign::Trailing => 2,
        }
        .hash(&mut hasher);

        Self {
            content_hash,
            item_count: sizes.len(),
            width_bits: available_width.to_bits(),
            params_hash: hasher.finish(),
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    result: FlowResult,
    last_used_frame: u64,
}

/// Memo cache for flow layout results.
///
/// Entries not used during the last two frames are evicted by
/// [`FlowCache::advance_frame`].
#[derive(Debug, Default)]
pub struct FlowCache {
    entries: HashMap<FlowKey, CacheEntry>,
    current_frame: u64,
    hits: usize,
    misses: usize,
}

impl FlowCache {
    /// Create a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached result.
    pub fn get(&mut self, key: &FlowKey) -> Option<&FlowResult> {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.last_used_frame = self.current_frame;
            self.hits += 1;
            Some(&entry.result)
        } else {
            self.misses += 1;
            None
        }
    }

    /// Insert a computed result.
    pub fn insert(&mut self, key: FlowKey, result: FlowResult) {
        self.entries.insert(
            key,
            CacheEntry {
                result,
                last_used_frame: self.current_frame,
            },
        );
    }

    /// Return the cached result for these inputs, computing it on a miss.
    pub fn get_or_compute(
        &mut self,
        layout: &FlowLayout,
        sizes: &[Size],
        available_width: f32,
    ) -> &FlowResult {
        let key = FlowKey::new(sizes, available_width, layout);
        let frame = self.current_frame;

        if self.entries.contains_key(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
        }

        let entry = self.entries.entry(key).or_insert_with(|| CacheEntry {
            result: layout.compute(sizes, available_width),
            last_used_frame: frame,
        });
        entry.last_used_frame = frame;
        &entry.result
    }

    /// Clear the entire cache.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Get the number of cache hits.
    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }

    /// Get the number of cache misses.
    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }

    /// Advance to the next frame and evict stale entries.
    pub fn advance_frame(&mut self) {
        self.current_frame += 1;

        // Evict entries not used in the last 2 frames
        let threshold = self.current_frame.saturating_sub(2);
        self.entries
            .retain(|_, entry| entry.last_used_frame >= threshold);
    }

    /// Get the number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pills() -> Vec<Size> {
        vec![
            Size::new(120.0, 41.0),
            Size::new(90.0, 41.0),
            Size::new(150.0, 41.0),
        ]
    }

    #[test]
    fn test_cache_new() {
        let cache = FlowCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_key_changes_with_width() {
        let layout = FlowLayout::new().spacing(12.0);
        let a = FlowKey::new(&pills(), 300.0, &layout);
        let b = FlowKey::new(&pills(), 301.0, &layout);
        assert_ne!(a, b);
        assert_eq!(a, FlowKey::new(&pills(), 300.0, &layout));
    }

    #[test]
    fn test_key_changes_with_params() {
        let sizes = pills();
        let a = FlowKey::new(&sizes, 300.0, &FlowLayout::new().spacing(12.0));
        let b = FlowKey::new(&sizes, 300.0, &FlowLayout::new().spacing(8.0));
        let c = FlowKey::new(
            &sizes,
            300.0,
            &FlowLayout::new().spacing(12.0).align(FlowAlign::Center),
        );
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_key_changes_with_items() {
        let layout = FlowLayout::new();
        let mut sizes = pills();
        let a = FlowKey::new(&sizes, 300.0, &layout);
        sizes[1].width += 1.0;
        assert_ne!(a, FlowKey::new(&sizes, 300.0, &layout));
    }

    #[test]
    fn test_cache_insert_get() {
        let mut cache = FlowCache::new();
        let layout = FlowLayout::new().spacing(12.0);
        let key = FlowKey::new(&pills(), 300.0, &layout);
        let result = layout.compute(&pills(), 300.0);

        cache.insert(key, result.clone());
        assert_eq!(cache.get(&key), Some(&result));
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn test_cache_miss() {
        let mut cache = FlowCache::new();
        let key = FlowKey::new(&pills(), 300.0, &FlowLayout::new());
        assert!(cache.get(&key).is_none());
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_get_or_compute_hits_on_repeat() {
        let mut cache = FlowCache::new();
        let layout = FlowLayout::new().spacing(12.0);

        let first = cache.get_or_compute(&layout, &pills(), 300.0).clone();
        let second = cache.get_or_compute(&layout, &pills(), 300.0).clone();

        assert_eq!(first, second);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_or_compute_recomputes_on_resize() {
        let mut cache = FlowCache::new();
        let layout = FlowLayout::new().spacing(12.0);

        let wide = cache.get_or_compute(&layout, &pills(), 400.0).row_count();
        let narrow = cache.get_or_compute(&layout, &pills(), 160.0).row_count();

        assert_eq!(wide, 1);
        assert_eq!(narrow, 3);
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn test_cache_clear() {
        let mut cache = FlowCache::new();
        cache.get_or_compute(&FlowLayout::new(), &pills(), 300.0);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.misses(), 0);
    }

    #[test]
    fn test_advance_frame_evicts_stale_entries() {
        let mut cache = FlowCache::new();
        let layout = FlowLayout::new();
        let key = FlowKey::new(&pills(), 300.0, &layout);
        cache.insert(key, layout.compute(&pills(), 300.0));

        cache.advance_frame();
        cache.advance_frame();
        assert_eq!(cache.len(), 1);

        cache.advance_frame();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_advance_frame_keeps_used_entries() {
        let mut cache = FlowCache::new();
        let layout = FlowLayout::new();
        for _ in 0..5 {
            cache.get_or_compute(&layout, &pills(), 300.0);
            cache.advance_frame();
        }
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 4);
    }
}
