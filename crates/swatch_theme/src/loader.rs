//! Building themes from a theme document
//!
//! A document maps theme names to theme dictionaries:
//!
//! ```toml
//! [Default.button]
//! color = { hex = "1E66F5" }
//!
//! [Compact]
//! parentTheme = "Default"
//! button = { color = { hex = "DD7878" } }
//! ```
//!
//! The configured default theme is the parent of every other theme, unless a
//! theme names its own parent with a top-level `parentTheme` string. The
//! loader owns every theme; children only refer to their parents weakly, so
//! the loader must outlive any lookups.

use crate::error::{Result, ThemeError};
use crate::theme::{Theme, DEFAULT_MAX_INDIRECTION_DEPTH};
use crate::value::{Map, Value};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use std::sync::Arc;

/// Top-level key naming a theme's parent
pub const PARENT_THEME_KEY: &str = "parentTheme";

/// How a [`ThemeLoader`] links and configures themes
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Theme every other theme falls back on
    pub default_theme: String,
    /// Override path applied to every loaded theme
    pub optional_key_path: Option<String>,
    /// Bound on chained key-path indirections
    pub max_indirection_depth: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            default_theme: "Default".to_string(),
            optional_key_path: None,
            max_indirection_depth: DEFAULT_MAX_INDIRECTION_DEPTH,
        }
    }
}

/// Owner of every theme defined by one document
#[derive(Debug)]
pub struct ThemeLoader {
    config: LoaderConfig,
    themes: FxHashMap<String, Arc<Theme>>,
}

impl ThemeLoader {
    pub fn from_toml_str(document: &str, config: LoaderConfig) -> Result<Self> {
        let document: Value = toml::from_str(document)?;
        Self::from_document(document, config)
    }

    pub fn from_json_str(document: &str, config: LoaderConfig) -> Result<Self> {
        let document: Value = serde_json::from_str(document)?;
        Self::from_document(document, config)
    }

    /// Build every theme of an already-parsed document
    pub fn from_document(document: Value, config: LoaderConfig) -> Result<Self> {
        let Value::Map(document) = document else {
            return Err(ThemeError::NotAMapping {
                name: "<document>".to_string(),
            });
        };

        let mut pending = FxHashMap::default();
        for (name, value) in document {
            let Value::Map(mut dictionary) = value else {
                return Err(ThemeError::NotAMapping { name });
            };
            let parent = take_parent_name(&name, &mut dictionary, &config);
            pending.insert(name, (dictionary, parent));
        }

        for (name, (_, parent)) in &pending {
            if let Some(ParentLink::Explicit(parent)) = parent {
                if !pending.contains_key(parent) {
                    return Err(ThemeError::UnknownParent {
                        theme: name.clone(),
                        parent: parent.clone(),
                    });
                }
            }
        }

        let mut builder = Builder {
            config: &config,
            pending,
            built: FxHashMap::default(),
            in_progress: FxHashSet::default(),
        };
        let mut names: Vec<String> = builder.pending.keys().cloned().collect();
        names.sort();
        for name in &names {
            builder.build(name)?;
        }
        let themes = builder.built;

        tracing::debug!(themes = themes.len(), default = %config.default_theme, "loaded theme document");
        Ok(Self { config, themes })
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn theme_named(&self, name: &str) -> Option<&Arc<Theme>> {
        self.themes.get(name)
    }

    /// Like [`theme_named`](Self::theme_named), as an error when missing
    pub fn require(&self, name: &str) -> Result<&Arc<Theme>> {
        self.theme_named(name)
            .ok_or_else(|| ThemeError::UnknownTheme(name.to_string()))
    }

    pub fn default_theme(&self) -> Option<&Arc<Theme>> {
        self.theme_named(&self.config.default_theme)
    }

    /// Theme names, sorted
    pub fn theme_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn themes(&self) -> impl Iterator<Item = &Arc<Theme>> {
        self.themes.values()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

/// Where a theme's parent name came from
#[derive(Clone, Debug, PartialEq, Eq)]
enum ParentLink {
    /// Named by `parentTheme`; must exist
    Explicit(String),
    /// The configured default theme; may be absent from the document
    Default(String),
}

impl ParentLink {
    fn name(&self) -> &str {
        match self {
            ParentLink::Explicit(name) | ParentLink::Default(name) => name,
        }
    }
}

/// Remove `parentTheme` from a dictionary and decide the parent link
fn take_parent_name(name: &str, dictionary: &mut Map, config: &LoaderConfig) -> Option<ParentLink> {
    match dictionary.remove(PARENT_THEME_KEY) {
        Some(Value::String(parent)) if !parent.is_empty() => {
            return Some(ParentLink::Explicit(parent))
        }
        Some(other) => {
            tracing::warn!(theme = name, kind = other.kind(), "ignoring non-string parentTheme");
        }
        None => {}
    }
    (name != config.default_theme).then(|| ParentLink::Default(config.default_theme.clone()))
}

struct Builder<'a> {
    config: &'a LoaderConfig,
    pending: FxHashMap<String, (Map, Option<ParentLink>)>,
    built: FxHashMap<String, Arc<Theme>>,
    in_progress: FxHashSet<String>,
}

impl Builder<'_> {
    /// Build `name` after its parent chain
    fn build(&mut self, name: &str) -> Result<Arc<Theme>> {
        if let Some(theme) = self.built.get(name) {
            return Ok(theme.clone());
        }
        if !self.in_progress.insert(name.to_string()) {
            return Err(ThemeError::ParentCycle {
                theme: name.to_string(),
            });
        }

        let link = self.pending.get(name).and_then(|(_, parent)| parent.clone());
        let parent = match link {
            Some(link) if self.pending.contains_key(link.name()) => Some(self.build(link.name())?),
            Some(link) => {
                tracing::warn!(theme = name, parent = link.name(), "default theme not defined, theme has no parent");
                None
            }
            None => None,
        };

        let dictionary = self
            .pending
            .get_mut(name)
            .map(|(dictionary, _)| std::mem::take(dictionary))
            .unwrap_or_default();
        let mut theme =
            Theme::new(name, dictionary).with_max_indirection_depth(self.config.max_indirection_depth);
        if let Some(parent) = &parent {
            theme = theme.with_parent(parent);
        }
        if let Some(path) = &self.config.optional_key_path {
            theme = theme.with_optional_key_path(path.clone());
        }

        tracing::trace!(theme = name, parent = ?parent.as_ref().map(|p| p.name().to_string()), "built theme");
        let theme = Arc::new(theme);
        self.in_progress.remove(name);
        self.built.insert(name.to_string(), theme.clone());
        Ok(theme)
    }
}
