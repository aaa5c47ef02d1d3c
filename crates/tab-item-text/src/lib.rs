//! Text measurement for `tab-item`.
//!
//! The `cosmic` feature provides a [`ContentMeasurer`] backed by `cosmic-text`, using the
//! fonts installed on the system. Wrapping and the line limit requested by the title label
//! are applied by laying the text out in a `cosmic-text` buffer and folding the resulting
//! runs into a bounding size.

#![deny(warnings)]

use tab_item::{ContentMeasurer, IntrinsicSize, MeasureTextRequest};

/// Fold laid-out lines `(width, height)` into a bounding size, keeping at most `max_lines`.
pub fn fold_runs(
    runs: impl IntoIterator<Item = (f32, f32)>,
    max_lines: Option<usize>,
) -> IntrinsicSize {
    runs.into_iter()
        .take(max_lines.unwrap_or(usize::MAX))
        .fold(IntrinsicSize::zero(), |size, (width, height)| {
            IntrinsicSize::new(size.width.max(width), size.height + height)
        })
}

/// A convenient concrete measurer selection.
///
/// Currently only cosmic-text is supported.
pub enum Engine {
    #[cfg(feature = "cosmic")]
    Cosmic(cosmic::CosmicMeasurer),
}

impl Engine {
    /// Create a measurer using the system fonts.
    #[cfg(feature = "cosmic")]
    pub fn new_default() -> Self {
        Self::Cosmic(cosmic::CosmicMeasurer::new_default())
    }
}

impl ContentMeasurer for Engine {
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize {
        match self {
            #[cfg(feature = "cosmic")]
            Self::Cosmic(engine) => engine.measure_text(request),
        }
    }
}

#[cfg(feature = "cosmic")]
pub mod cosmic {
    //! `cosmic-text` implementation of text measurement.

    use std::num::NonZeroUsize;

    use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Wrap};
    use lru::LruCache;
    use tab_item::{ContentMeasurer, IntrinsicSize, MeasureTextRequest};

    use super::fold_runs;

    /// Line height as a multiple of the font size
    const LINE_HEIGHT_FACTOR: f32 = 1.2;

    /// Measurements kept per measurer before the least recently used is evicted
    pub const DEFAULT_CACHE_CAPACITY: usize = 512;

    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct CacheKey {
        text: String,
        family: Option<String>,
        font_size_bits: u32,
        max_width_bits: Option<u32>,
        max_lines: Option<usize>,
    }

    impl CacheKey {
        fn new(request: &MeasureTextRequest<'_>) -> Self {
            Self {
                text: request.text.to_owned(),
                family: request.family.map(str::to_owned),
                font_size_bits: request.font_size.to_bits(),
                max_width_bits: request.max_width.map(f32::to_bits),
                max_lines: request.max_lines,
            }
        }
    }

    /// Bounded map from request to measured size
    struct MeasureCache {
        entries: LruCache<CacheKey, IntrinsicSize>,
    }

    impl MeasureCache {
        /// A zero capacity is raised to one entry
        fn new(capacity: usize) -> Self {
            let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
            Self {
                entries: LruCache::new(capacity),
            }
        }

        fn get_or_measure(
            &mut self,
            key: CacheKey,
            measure: impl FnOnce() -> IntrinsicSize,
        ) -> IntrinsicSize {
            if let Some(size) = self.entries.get(&key) {
                return *size;
            }

            let size = measure();
            if self.entries.len() >= self.entries.cap().get() {
                log::trace!(
                    "text measure cache full ({} entries), evicting oldest",
                    self.entries.len()
                );
            }
            self.entries.put(key, size);
            size
        }

        fn len(&self) -> usize {
            self.entries.len()
        }

        fn clear(&mut self) {
            self.entries.clear();
        }
    }

    /// Concrete measurer backed by `cosmic-text`.
    ///
    /// Recent results are cached per request, so repeated layout passes do not reshape text.
    pub struct CosmicMeasurer {
        font_system: FontSystem,
        cache: MeasureCache,
    }

    impl CosmicMeasurer {
        /// Create the measurer and load the system fonts.
        pub fn new_default() -> Self {
            let font_system = FontSystem::new();
            log::debug!(
                "text measurer loaded {} font faces",
                font_system.db().faces().count()
            );
            Self::with_font_system(font_system)
        }

        /// Use a caller-configured `FontSystem` (custom fonts, locale).
        pub fn with_font_system(font_system: FontSystem) -> Self {
            Self {
                font_system,
                cache: MeasureCache::new(DEFAULT_CACHE_CAPACITY),
            }
        }

        /// Keep at most `capacity` measurements (at least one). Drops cached results.
        pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
            self.cache = MeasureCache::new(capacity);
            self
        }

        /// Number of cached measurements
        pub fn cached_len(&self) -> usize {
            self.cache.len()
        }

        /// Access the underlying `FontSystem` if callers want to customize further.
        ///
        /// Clears the measurement cache, since loaded fonts may change results.
        pub fn font_system_mut(&mut self) -> &mut FontSystem {
            self.cache.clear();
            &mut self.font_system
        }
    }

    fn shape(font_system: &mut FontSystem, request: &MeasureTextRequest<'_>) -> IntrinsicSize {
        let metrics = Metrics::new(request.font_size, request.font_size * LINE_HEIGHT_FACTOR);
        let mut buffer = Buffer::new(font_system, metrics);

        match request.max_width {
            Some(width) => {
                buffer.set_wrap(font_system, Wrap::WordOrGlyph);
                buffer.set_size(font_system, Some(width.max(0.0)), None);
            }
            None => {
                buffer.set_wrap(font_system, Wrap::None);
                buffer.set_size(font_system, None, None);
            }
        }

        let attrs = match request.family {
            Some(name) => Attrs::new().family(Family::Name(name)),
            None => Attrs::new().family(Family::SansSerif),
        };
        buffer.set_text(font_system, request.text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(font_system, false);

        fold_runs(
            buffer.layout_runs().map(|run| (run.line_w, run.line_height)),
            request.max_lines,
        )
    }

    impl ContentMeasurer for CosmicMeasurer {
        fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize {
            if request.text.is_empty() {
                return IntrinsicSize::zero();
            }

            let font_system = &mut self.font_system;
            self.cache
                .get_or_measure(CacheKey::new(&request), || shape(font_system, &request))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use cosmic_text::fontdb;
        use tab_item::testing::FixedAdvanceMeasurer;
        use tab_item::{IconImage, ItemView};

        /// Routes the fixed-advance measurer through the same cache the cosmic measurer uses
        struct CachedFixedAdvance {
            cache: MeasureCache,
            inner: FixedAdvanceMeasurer,
            misses: usize,
        }

        impl ContentMeasurer for CachedFixedAdvance {
            fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize {
                let inner = &mut self.inner;
                let misses = &mut self.misses;
                self.cache.get_or_measure(CacheKey::new(&request), || {
                    *misses += 1;
                    inner.measure_text(request.clone())
                })
            }
        }

        fn fontless_measurer() -> CosmicMeasurer {
            CosmicMeasurer::with_font_system(FontSystem::new_with_locale_and_db(
                "en-US".to_string(),
                fontdb::Database::new(),
            ))
        }

        #[test]
        fn test_cache_key_distinguishes_wrap_width() {
            let narrow = MeasureTextRequest::new("Home", 14.0).with_max_width(58.0);
            let wide = MeasureTextRequest::new("Home", 14.0).with_max_width(58.5);

            assert_eq!(CacheKey::new(&narrow), CacheKey::new(&narrow.clone()));
            assert_ne!(CacheKey::new(&narrow), CacheKey::new(&wide));
            assert_ne!(
                CacheKey::new(&narrow),
                CacheKey::new(&narrow.clone().with_family(Some("Inter")))
            );
        }

        #[test]
        fn test_cache_hit_skips_measuring() {
            let mut cache = MeasureCache::new(4);
            let key = CacheKey::new(&MeasureTextRequest::new("Home", 14.0));

            let first = cache.get_or_measure(key.clone(), || IntrinsicSize::new(32.0, 17.0));
            let second = cache.get_or_measure(key, || unreachable!("cached"));

            assert_eq!(first, second);
            assert_eq!(cache.len(), 1);
        }

        #[test]
        fn test_zero_capacity_keeps_one_entry() {
            let mut cache = MeasureCache::new(0);
            for width in [10.0, 20.0, 30.0] {
                let request = MeasureTextRequest::new("Home", 14.0).with_max_width(width);
                cache.get_or_measure(CacheKey::new(&request), IntrinsicSize::zero);
            }
            assert_eq!(cache.len(), 1);
        }

        #[test]
        fn test_repeated_resizes_stay_within_capacity() {
            let mut measurer = CachedFixedAdvance {
                cache: MeasureCache::new(64),
                inner: FixedAdvanceMeasurer::default(),
                misses: 0,
            };
            let mut item = ItemView::new()
                .with_title("Recently played")
                .with_icon(IconImage::new("clock", 24.0, 24.0));

            for step in 0..2000 {
                item.set_bounds(IntrinsicSize::new(90.0 + step as f32 * 0.1, 72.0));
                item.layout_subviews(&mut measurer);
            }

            assert!(measurer.misses > 64);
            assert_eq!(measurer.cache.len(), 64);
        }

        #[test]
        fn test_font_system_access_clears_cache() {
            let mut measurer = fontless_measurer().with_cache_capacity(8);
            let key = CacheKey::new(&MeasureTextRequest::new("Home", 14.0));
            measurer
                .cache
                .get_or_measure(key, || IntrinsicSize::new(32.0, 17.0));
            assert_eq!(measurer.cached_len(), 1);

            measurer.font_system_mut();
            assert_eq!(measurer.cached_len(), 0);
        }

        #[test]
        fn test_empty_text_is_not_cached() {
            let mut measurer = fontless_measurer();
            let size = measurer.measure_text(MeasureTextRequest::new("", 14.0));

            assert_eq!(size, IntrinsicSize::zero());
            assert_eq!(measurer.cached_len(), 0);
        }
    }
}
