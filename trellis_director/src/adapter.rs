// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kind-keyed adapters: one strategy object per model kind.
//!
//! An adapter pairs a model kind with the behavior its rows share: binding
//! at dequeue time, sizing, and responses to row events. Registration is
//! keyed by a caller-defined kind tag — a plain value type the caller
//! controls — rather than by runtime type names, which are fragile under
//! renaming and collide across modules.
//!
//! Every event method has a default implementation, so an adapter overrides
//! only what it cares about; the named constants below are the default
//! policies an absent handler falls back to.

use alloc::boxed::Box;
use core::fmt;
use core::hash::Hash;
use hashbrown::HashMap;

use crate::IndexPath;

/// A model type that names which adapter handles it.
pub trait Kinded {
    /// Caller-defined kind tag; typically a small enum.
    type Kind: Eq + Hash + Clone;

    /// Returns the kind of this particular model value.
    fn kind(&self) -> Self::Kind;
}

/// What the widget should do with the selection after a row was selected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Leave the row selected.
    Keep,
    /// Deselect without animating.
    Deselect,
    /// Deselect with animation.
    DeselectAnimated,
}

/// Default outcome when no adapter handles selection.
pub const KEEP_SELECTION: SelectionOutcome = SelectionOutcome::Keep;
/// Default edit permission when no adapter overrides it.
pub const DEFAULT_CAN_EDIT: bool = false;
/// Default reorder permission when no adapter overrides it.
pub const DEFAULT_CAN_MOVE: bool = false;

/// The model value and location an event refers to.
#[derive(Debug)]
pub struct RowContext<'a, T> {
    /// The model value at the event's path.
    pub item: &'a T,
    /// Where the event happened.
    pub path: IndexPath,
}

/// Per-kind row behavior.
///
/// [`bind`](Self::bind) is the only required method; it runs when the widget
/// dequeues a row for this model and is where the host pushes model content
/// into its view. Everything else defaults to the named policy constants.
pub trait RowAdapter<T> {
    /// Binds a freshly dequeued row to its model value.
    fn bind(&mut self, ctx: RowContext<'_, T>);

    /// Preferred extent of the row, or `None` for the host's default sizing.
    fn size(&mut self, ctx: RowContext<'_, T>) -> Option<f64> {
        let _ = ctx;
        None
    }

    /// Called when the row is selected.
    fn on_select(&mut self, ctx: RowContext<'_, T>) -> SelectionOutcome {
        let _ = ctx;
        KEEP_SELECTION
    }

    /// Whether the row may enter edit mode.
    fn can_edit(&mut self, ctx: RowContext<'_, T>) -> bool {
        let _ = ctx;
        DEFAULT_CAN_EDIT
    }

    /// Whether the row may be interactively reordered.
    fn can_move(&mut self, ctx: RowContext<'_, T>) -> bool {
        let _ = ctx;
        DEFAULT_CAN_MOVE
    }

    /// Called just before the row becomes visible.
    fn will_display(&mut self, ctx: RowContext<'_, T>) {
        let _ = ctx;
    }

    /// Called after the row left the visible region.
    fn end_display(&mut self, ctx: RowContext<'_, T>) {
        let _ = ctx;
    }
}

/// Registry mapping kind tags to their adapters.
pub struct AdapterRegistry<K, T> {
    adapters: HashMap<K, Box<dyn RowAdapter<T>>>,
}

impl<K: Eq + Hash, T> AdapterRegistry<K, T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            adapters: HashMap::new(),
        }
    }

    /// Registers `adapter` for `kind`, replacing any previous registration.
    pub fn register(&mut self, kind: K, adapter: impl RowAdapter<T> + 'static) {
        self.adapters.insert(kind, Box::new(adapter));
    }

    /// Returns the adapter registered for `kind`, if any.
    pub fn get_mut(&mut self, kind: &K) -> Option<&mut (dyn RowAdapter<T> + 'static)> {
        self.adapters.get_mut(kind).map(|boxed| &mut **boxed)
    }

    /// Returns `true` if an adapter is registered for `kind`.
    #[must_use]
    pub fn contains(&self, kind: &K) -> bool {
        self.adapters.contains_key(kind)
    }

    /// Number of registered adapters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Returns `true` if no adapters are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl<K: Eq + Hash, T> Default for AdapterRegistry<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, T> fmt::Debug for AdapterRegistry<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("kinds", &self.adapters.keys())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Model(&'static str);

    impl Kinded for Model {
        type Kind = &'static str;

        fn kind(&self) -> &'static str {
            self.0
        }
    }

    struct CountingAdapter {
        binds: u32,
    }

    impl RowAdapter<Model> for CountingAdapter {
        fn bind(&mut self, _ctx: RowContext<'_, Model>) {
            self.binds += 1;
        }

        fn can_edit(&mut self, _ctx: RowContext<'_, Model>) -> bool {
            true
        }
    }

    #[test]
    fn register_and_dispatch() {
        let mut registry: AdapterRegistry<&'static str, Model> = AdapterRegistry::new();
        registry.register("text", CountingAdapter { binds: 0 });
        assert!(registry.contains(&"text"));
        assert!(!registry.contains(&"image"));

        let model = Model("text");
        let adapter = registry.get_mut(&"text").unwrap();
        adapter.bind(RowContext {
            item: &model,
            path: IndexPath::new(0, 0),
        });
        assert!(adapter.can_edit(RowContext {
            item: &model,
            path: IndexPath::new(0, 0),
        }));
    }

    #[test]
    fn unoverridden_events_use_named_defaults() {
        let mut registry: AdapterRegistry<&'static str, Model> = AdapterRegistry::new();
        registry.register("text", CountingAdapter { binds: 0 });
        let model = Model("text");
        let adapter = registry.get_mut(&"text").unwrap();
        let ctx = RowContext {
            item: &model,
            path: IndexPath::new(0, 0),
        };
        assert_eq!(adapter.on_select(ctx), KEEP_SELECTION);
        assert_eq!(
            adapter.can_move(RowContext {
                item: &model,
                path: IndexPath::new(0, 0),
            }),
            DEFAULT_CAN_MOVE
        );
        assert_eq!(
            adapter.size(RowContext {
                item: &model,
                path: IndexPath::new(0, 0),
            }),
            None
        );
    }
}
