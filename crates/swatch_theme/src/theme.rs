//! Theme definition
//!
//! A [`Theme`] is a named style dictionary with an optional parent to fall back
//! on. Parents are held weakly: a theme never keeps its parent alive, and one
//! parent may back any number of children. Whoever builds the themes (usually a
//! [`ThemeLoader`](crate::ThemeLoader)) owns them.

use crate::cache::{CacheCategory, ThemeCaches};
use crate::value::{Map, Value};
use crate::error::{Result, ThemeError};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

/// Default bound on chained key-path indirections
pub const DEFAULT_MAX_INDIRECTION_DEPTH: usize = 16;

/// A named, inheritable style dictionary
pub struct Theme {
    name: String,
    dictionary: Map,
    parent: Option<Weak<Theme>>,
    optional_key_path: Option<String>,
    max_indirection_depth: usize,
    caches: ThemeCaches,
    /// Live ancestors seen by the last cache access
    live_ancestors: AtomicUsize,
}

impl Theme {
    pub fn new(name: impl Into<String>, dictionary: Map) -> Self {
        Self {
            name: name.into(),
            dictionary,
            parent: None,
            optional_key_path: None,
            max_indirection_depth: DEFAULT_MAX_INDIRECTION_DEPTH,
            caches: ThemeCaches::new(),
            live_ancestors: AtomicUsize::new(0),
        }
    }

    /// Build a theme from a raw value, which must be a mapping
    pub fn from_value(name: impl Into<String>, value: Value) -> Result<Self> {
        let name = name.into();
        match value {
            Value::Map(dictionary) => Ok(Self::new(name, dictionary)),
            _ => Err(ThemeError::NotAMapping { name }),
        }
    }

    /// Fall back on `parent` for keys this theme does not define
    pub fn with_parent(mut self, parent: &Arc<Theme>) -> Self {
        self.parent = Some(Arc::downgrade(parent));
        self
    }

    /// Override resolved dictionaries with same-named keys found at `path`
    pub fn with_optional_key_path(mut self, path: impl Into<String>) -> Self {
        self.optional_key_path = Some(path.into());
        self
    }

    pub fn with_max_indirection_depth(mut self, depth: usize) -> Self {
        self.max_indirection_depth = depth;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The theme's own dictionary, without anything inherited
    pub fn raw_dictionary(&self) -> &Map {
        &self.dictionary
    }

    /// The parent theme, if one was set and is still alive
    pub fn parent(&self) -> Option<Arc<Theme>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    pub fn optional_key_path(&self) -> Option<&str> {
        self.optional_key_path.as_deref()
    }

    pub fn max_indirection_depth(&self) -> usize {
        self.max_indirection_depth
    }

    // ========== Mutation ==========
    //
    // Every resolved value depends on the dictionary, the parent, and the
    // override path, so changing any of them drops all cached entries.

    /// Replace the raw dictionary
    pub fn set_dictionary(&mut self, dictionary: Map) {
        tracing::debug!(theme = %self.name, "replacing theme dictionary");
        self.dictionary = dictionary;
        self.invalidate();
    }

    pub fn set_parent(&mut self, parent: Option<&Arc<Theme>>) {
        self.parent = parent.map(Arc::downgrade);
        self.invalidate();
    }

    pub fn set_optional_key_path(&mut self, path: Option<String>) {
        self.optional_key_path = path;
        self.invalidate();
    }

    fn invalidate(&self) {
        for category in CacheCategory::ALL {
            self.caches.clear(category);
        }
    }

    // ========== Cache Management ==========

    /// Caches, emptied first if an ancestor was dropped since the last access.
    ///
    /// Entries may hold values inherited from any live ancestor, and the
    /// number of reachable ancestors only shrinks while the links are shared.
    pub(crate) fn caches(&self) -> &ThemeCaches {
        let live = self.count_live_ancestors();
        let seen = self.live_ancestors.swap(live, Ordering::AcqRel);
        if seen != live {
            if seen > live {
                tracing::debug!(theme = %self.name, live, "ancestor dropped, clearing caches");
            }
            self.invalidate();
        }
        &self.caches
    }

    fn count_live_ancestors(&self) -> usize {
        let mut count = 0;
        let mut next = self.parent();
        while let Some(parent) = next {
            count += 1;
            next = parent.parent();
        }
        count
    }

    /// Drop every cached entry of one category
    pub fn clear_cache(&self, category: CacheCategory) {
        self.caches.clear(category);
    }

    pub fn clear_color_cache(&self) {
        self.clear_cache(CacheCategory::Color);
    }

    pub fn clear_font_cache(&self) {
        self.clear_cache(CacheCategory::Font);
    }

    pub fn clear_view_specifier_cache(&self) {
        self.clear_cache(CacheCategory::ViewSpecifier);
    }

    pub fn clear_navigation_bar_specifier_cache(&self) {
        self.clear_cache(CacheCategory::NavigationBarSpecifier);
    }

    pub fn clear_text_label_specifier_cache(&self) {
        self.clear_cache(CacheCategory::TextLabelSpecifier);
    }

    /// Number of entries currently cached in a category
    pub fn cached_len(&self, category: CacheCategory) -> usize {
        self.caches().len(category)
    }
}

impl PartialEq for Theme {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Theme {}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme")
            .field("name", &self.name)
            .field("parent", &self.parent().map(|p| p.name.clone()))
            .field("optional_key_path", &self.optional_key_path)
            .field("keys", &self.dictionary.len())
            .finish()
    }
}
