//! Named filter chains
//!
//! A filter is a `T -> T` transform registered under a hook name. Applying a
//! hook runs its filters in priority order, ties broken by registration
//! order, each receiving the previous output.

use std::collections::HashMap;
use std::fmt;

use crate::markup::MarkupConfig;
use crate::settings::Settings;

use super::render::{render_block_button, RenderedBlock};
use super::{add_icon_attributes, editor_classes, BlockType, IconAttributes};

/// Hook run when a block type is registered
pub const REGISTER_BLOCK_TYPE: &str = "blocks.registerBlockType";
/// Hook run when the editor canvas renders a block wrapper
pub const BLOCK_LIST_BLOCK: &str = "editor.BlockListBlock";
/// Hook run on the delivered markup of each block
pub const RENDER_BLOCK: &str = "render_block";

/// Priority used when a caller has no preference
pub const DEFAULT_PRIORITY: i32 = 10;

type Callback<T> = Box<dyn Fn(T) -> T + Send + Sync>;

struct Registered<T> {
    namespace: String,
    priority: i32,
    callback: Callback<T>,
}

/// Filters over values of type `T`, grouped by hook name
pub struct Filters<T> {
    hooks: HashMap<String, Vec<Registered<T>>>,
}

impl<T> Default for Filters<T> {
    fn default() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }
}

impl<T> fmt::Debug for Filters<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (hook, filters) in &self.hooks {
            let namespaces: Vec<_> = filters.iter().map(|r| r.namespace.as_str()).collect();
            map.entry(hook, &namespaces);
        }
        map.finish()
    }
}

impl<T> Filters<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` on `hook`
    pub fn add_filter(
        &mut self,
        hook: &str,
        namespace: impl Into<String>,
        priority: i32,
        callback: impl Fn(T) -> T + Send + Sync + 'static,
    ) {
        let filters = self.hooks.entry(hook.to_string()).or_default();
        // Insert after every filter of equal or lower priority.
        let at = filters.partition_point(|r| r.priority <= priority);
        filters.insert(
            at,
            Registered {
                namespace: namespace.into(),
                priority,
                callback: Box::new(callback),
            },
        );
    }

    /// Remove every filter registered on `hook` under `namespace`
    ///
    /// Returns whether anything was removed.
    pub fn remove_filter(&mut self, hook: &str, namespace: &str) -> bool {
        let Some(filters) = self.hooks.get_mut(hook) else {
            return false;
        };
        let before = filters.len();
        filters.retain(|r| r.namespace != namespace);
        before != filters.len()
    }

    /// Whether `hook` has at least one filter
    pub fn has_filter(&self, hook: &str) -> bool {
        self.hooks.get(hook).is_some_and(|f| !f.is_empty())
    }

    /// Run every filter of `hook` over `value`
    pub fn apply_filters(&self, hook: &str, value: T) -> T {
        match self.hooks.get(hook) {
            Some(filters) => filters.iter().fold(value, |acc, r| (r.callback)(acc)),
            None => value,
        }
    }
}

/// A block wrapper as rendered in the editor canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorBlock {
    pub name: String,
    pub class_name: String,
    pub attributes: IconAttributes,
}

/// The filter sets a host feeds through this crate
#[derive(Debug, Default)]
pub struct Hooks {
    pub block_types: Filters<BlockType>,
    pub editor_blocks: Filters<EditorBlock>,
    pub rendered_blocks: Filters<RenderedBlock>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Register the button icon filters on every hook
pub fn register_defaults(hooks: &mut Hooks, settings: &Settings) {
    let button = settings.block_name.clone();
    hooks.block_types.add_filter(
        REGISTER_BLOCK_TYPE,
        "button-icons/add-attributes",
        DEFAULT_PRIORITY,
        move |block_type| add_icon_attributes(block_type, &button),
    );

    let button = settings.block_name.clone();
    let markup: MarkupConfig = settings.markup.clone();
    hooks.editor_blocks.add_filter(
        BLOCK_LIST_BLOCK,
        "button-icons/add-classes",
        DEFAULT_PRIORITY,
        move |mut block: EditorBlock| {
            if block.name == button {
                block.class_name = editor_classes(&block.class_name, &block.attributes, &markup);
            }
            block
        },
    );

    let settings = settings.clone();
    hooks.rendered_blocks.add_filter(
        RENDER_BLOCK,
        "button-icons/render-icon",
        DEFAULT_PRIORITY,
        move |mut rendered: RenderedBlock| {
            rendered.content = render_block_button(&rendered.content, &rendered.block, &settings);
            rendered
        },
    );
}
