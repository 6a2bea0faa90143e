//! Per-theme resolution caches
//!
//! Every [`Theme`](crate::Theme) owns one [`ResolutionCache`] per category.
//! Entries are shared through `Arc`, so a hit hands back the very instance
//! stored by the first miss. Nothing is evicted except by an explicit clear of
//! that category.

use crate::tokens::{Font, SizeAdjustment};
use crate::specifiers::{NavigationBarSpecifier, TextLabelSpecifier, ViewSpecifier};
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use swatch_core::Color;

/// Category of resolved values, one cache each
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum CacheCategory {
    Color,
    Font,
    ViewSpecifier,
    NavigationBarSpecifier,
    TextLabelSpecifier,
}

impl CacheCategory {
    pub const ALL: [CacheCategory; 5] = [
        CacheCategory::Color,
        CacheCategory::Font,
        CacheCategory::ViewSpecifier,
        CacheCategory::NavigationBarSpecifier,
        CacheCategory::TextLabelSpecifier,
    ];
}

/// Variant discriminator stored next to the lookup key.
///
/// Magnitudes are kept in hundredths, so adjustments that print the same with
/// two decimals share an entry.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum CacheVariant {
    Absolute(i64),
    Proportional(i64),
}

impl From<SizeAdjustment> for CacheVariant {
    fn from(adjustment: SizeAdjustment) -> Self {
        let hundredths = |amount: f32| (amount as f64 * 100.0).round() as i64;
        match adjustment {
            SizeAdjustment::Absolute(points) => CacheVariant::Absolute(hundredths(points)),
            SizeAdjustment::Proportional(percent) => {
                CacheVariant::Proportional(hundredths(percent))
            }
        }
    }
}

/// Lookup key plus optional variant
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct CacheKey {
    key: String,
    variant: Option<CacheVariant>,
}

impl CacheKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            variant: None,
        }
    }

    pub fn with_adjustment(key: impl Into<String>, adjustment: SizeAdjustment) -> Self {
        Self {
            key: key.into(),
            variant: Some(adjustment.into()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn variant(&self) -> Option<CacheVariant> {
        self.variant
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant {
            None => f.write_str(&self.key),
            Some(CacheVariant::Absolute(h)) => write!(f, "{}_{:.2}", self.key, h as f64 / 100.0),
            Some(CacheVariant::Proportional(h)) => {
                write!(f, "{}_{:.2}%", self.key, h as f64 / 100.0)
            }
        }
    }
}

/// Memoized values of one category
pub struct ResolutionCache<T> {
    category: CacheCategory,
    entries: RwLock<FxHashMap<CacheKey, Arc<T>>>,
}

impl<T> ResolutionCache<T> {
    pub fn new(category: CacheCategory) -> Self {
        Self {
            category,
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    pub fn category(&self) -> CacheCategory {
        self.category
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<T>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Store a value unless another caller stored one first; returns the
    /// instance that ends up in the cache.
    pub fn insert(&self, key: CacheKey, value: T) -> Arc<T> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.entry(key).or_insert_with(|| Arc::new(value)).clone()
    }

    /// Return the cached value, computing and storing it on a miss.
    ///
    /// The computation runs without holding the lock.
    pub fn get_or_insert_with(&self, key: CacheKey, compute: impl FnOnce() -> T) -> Arc<T> {
        if let Some(hit) = self.get(&key) {
            tracing::trace!(category = ?self.category, %key, "cache hit");
            return hit;
        }
        tracing::trace!(category = ?self.category, %key, "cache miss");
        let value = compute();
        self.insert(key, value)
    }

    /// Like [`get_or_insert_with`](Self::get_or_insert_with), but a `None`
    /// result is returned without being stored.
    pub fn get_or_try_insert_with(
        &self,
        key: CacheKey,
        compute: impl FnOnce() -> Option<T>,
    ) -> Option<Arc<T>> {
        if let Some(hit) = self.get(&key) {
            tracing::trace!(category = ?self.category, %key, "cache hit");
            return Some(hit);
        }
        tracing::trace!(category = ?self.category, %key, "cache miss");
        let value = compute()?;
        Some(self.insert(key, value))
    }

    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        tracing::debug!(category = ?self.category, evicted = entries.len(), "cache cleared");
        entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> fmt::Debug for ResolutionCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionCache")
            .field("category", &self.category)
            .field("len", &self.len())
            .finish()
    }
}

/// The full set of caches owned by a theme
#[derive(Debug)]
pub(crate) struct ThemeCaches {
    pub(crate) colors: ResolutionCache<Color>,
    pub(crate) fonts: ResolutionCache<Font>,
    pub(crate) view_specifiers: ResolutionCache<ViewSpecifier>,
    pub(crate) navigation_bar_specifiers: ResolutionCache<NavigationBarSpecifier>,
    pub(crate) text_label_specifiers: ResolutionCache<TextLabelSpecifier>,
}

impl ThemeCaches {
    pub(crate) fn new() -> Self {
        Self {
            colors: ResolutionCache::new(CacheCategory::Color),
            fonts: ResolutionCache::new(CacheCategory::Font),
            view_specifiers: ResolutionCache::new(CacheCategory::ViewSpecifier),
            navigation_bar_specifiers: ResolutionCache::new(
                CacheCategory::NavigationBarSpecifier,
            ),
            text_label_specifiers: ResolutionCache::new(CacheCategory::TextLabelSpecifier),
        }
    }

    pub(crate) fn clear(&self, category: CacheCategory) {
        match category {
            CacheCategory::Color => self.colors.clear(),
            CacheCategory::Font => self.fonts.clear(),
            CacheCategory::ViewSpecifier => self.view_specifiers.clear(),
            CacheCategory::NavigationBarSpecifier => self.navigation_bar_specifiers.clear(),
            CacheCategory::TextLabelSpecifier => self.text_label_specifiers.clear(),
        }
    }

    pub(crate) fn len(&self, category: CacheCategory) -> usize {
        match category {
            CacheCategory::Color => self.colors.len(),
            CacheCategory::Font => self.fonts.len(),
            CacheCategory::ViewSpecifier => self.view_specifiers.len(),
            CacheCategory::NavigationBarSpecifier => self.navigation_bar_specifiers.len(),
            CacheCategory::TextLabelSpecifier => self.text_label_specifiers.len(),
        }
    }
}
