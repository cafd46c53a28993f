use alloc::string::String;
use alloc::sync::Arc;

use crate::{Content, Error, ItemKey, ReconcileStrategy, RenderError, RenderMode, SelectionSet};

/// Renders one item into surface content. Also used as the `update` hook signature.
pub type RenderFn<T> = Arc<dyn Fn(&T, usize) -> Result<Content, RenderError> + Send + Sync>;

/// Derives a stable identity from an item.
pub type KeyFn<T> = Arc<dyn Fn(&T) -> ItemKey + Send + Sync>;

/// Fired after every selection change with the new selection.
pub type SelectionChangeCallback = Arc<dyn Fn(&SelectionSet) + Send + Sync>;

/// Plain-data engine configuration.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Fixed extent of every item (row height for vertical lists). Must be positive.
    pub item_extent: u32,
    /// Extra items materialized on each side of the visible window.
    pub overscan: usize,
    /// Registers click listeners that toggle selection.
    pub enable_selection: bool,
    /// Registers pointer enter/leave listeners that toggle the hovered state.
    pub enable_hover: bool,
    pub strategy: ReconcileStrategy,
    pub render_mode: RenderMode,
    /// Under [`RenderMode::Auto`], displays with at most this many items are rendered in full.
    pub render_all_threshold: usize,
    /// Text shown instead of the list while the display collection is empty.
    pub empty_message: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            item_extent: 40,
            overscan: 5,
            enable_selection: false,
            enable_hover: false,
            strategy: ReconcileStrategy::Keyed,
            render_mode: RenderMode::Auto,
            render_all_threshold: 50,
            empty_message: String::from("No items to display"),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.item_extent == 0 {
            return Err(Error::InvalidItemExtent(self.item_extent));
        }
        Ok(())
    }

    /// Whether `count` items are windowed under this configuration.
    pub fn windows(&self, count: usize) -> bool {
        match self.render_mode {
            RenderMode::Virtual => true,
            RenderMode::All => false,
            RenderMode::Auto => count > self.render_all_threshold,
        }
    }
}

/// Configuration for [`crate::VirtualList`]: plain data plus the optional hooks.
///
/// Hooks are stored in `Arc`s so options stay cheap to clone.
pub struct EngineOptions<T> {
    pub config: EngineConfig,
    /// Item identity. Without it, items are keyed by their display index.
    pub key_fn: Option<KeyFn<T>>,
    /// Refreshes the content of a reused node after a data change. Defaults to the render
    /// function.
    pub update: Option<RenderFn<T>>,
    pub on_selection_change: Option<SelectionChangeCallback>,
}

impl<T> Default for EngineOptions<T> {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            key_fn: None,
            update: None,
            on_selection_change: None,
        }
    }
}

impl<T> Clone for EngineOptions<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            key_fn: self.key_fn.clone(),
            update: self.update.clone(),
            on_selection_change: self.on_selection_change.clone(),
        }
    }
}

impl<T> EngineOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_item_extent(mut self, item_extent: u32) -> Self {
        self.config.item_extent = item_extent;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.config.overscan = overscan;
        self
    }

    pub fn with_selection(mut self, enabled: bool) -> Self {
        self.config.enable_selection = enabled;
        self
    }

    pub fn with_hover(mut self, enabled: bool) -> Self {
        self.config.enable_hover = enabled;
        self
    }

    pub fn with_strategy(mut self, strategy: ReconcileStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn with_render_mode(mut self, render_mode: RenderMode) -> Self {
        self.config.render_mode = render_mode;
        self
    }

    pub fn with_render_all_threshold(mut self, threshold: usize) -> Self {
        self.config.render_all_threshold = threshold;
        self
    }

    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.config.empty_message = message.into();
        self
    }

    pub fn with_key_fn(mut self, key_fn: impl Fn(&T) -> ItemKey + Send + Sync + 'static) -> Self {
        self.key_fn = Some(Arc::new(key_fn));
        self
    }

    pub fn with_update(
        mut self,
        update: impl Fn(&T, usize) -> Result<Content, RenderError> + Send + Sync + 'static,
    ) -> Self {
        self.update = Some(Arc::new(update));
        self
    }

    pub fn with_on_selection_change(
        mut self,
        on_change: impl Fn(&SelectionSet) + Send + Sync + 'static,
    ) -> Self {
        self.on_selection_change = Some(Arc::new(on_change));
        self
    }
}

impl<T> core::fmt::Debug for EngineOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EngineOptions")
            .field("config", &self.config)
            .field("key_fn", &self.key_fn.is_some())
            .field("update", &self.update.is_some())
            .field("on_selection_change", &self.on_selection_change.is_some())
            .finish()
    }
}
