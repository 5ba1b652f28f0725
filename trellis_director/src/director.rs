// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The director: owner of the live structure and driver of reloads.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use trellis_diff::Diffable;
use trellis_sections::{Section, diff_structure};

use crate::adapter::{AdapterRegistry, KEEP_SELECTION, Kinded, RowAdapter, RowContext};
use crate::{
    Batch, BatchSink, Completion, DirectorError, IndexPath, ReloadAnimations, SelectionOutcome,
};

/// Completion callback fired when a reload's batch has fully applied.
pub type OnComplete = Box<dyn FnOnce()>;

/// Where the engine is in one reload cycle.
///
/// Diffing is synchronous, so `DiffComputing` is only ever observed by code
/// running inside the mutation closure; it exists to make reentrant reloads
/// a deterministic error instead of undefined behavior.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ReloadState {
    Idle,
    DiffComputing,
    BatchInFlight,
}

/// Owns the live section structure, the adapter registry, and the reload
/// state machine.
///
/// The director is a plain owned value: a host widget wrapper holds it as a
/// named field and forwards data-source callbacks to it. It never talks to
/// the widget directly — all visual output flows through a [`BatchSink`]
/// passed into the reload entry points.
///
/// ## Ownership and threading
///
/// The director exclusively owns its section list; callers mutate it only
/// inside the closure passed to [`reload`](Self::reload), which runs before
/// diffing. Everything here is single-threaded and synchronous: reloads must
/// originate on the host's UI thread, and the completion callback fires
/// there too, either synchronously (the sink applied at once) or from
/// [`batch_finished`](Self::batch_finished). Callers must not assume which.
///
/// ## Overlapping reloads
///
/// At most one batch is ever outstanding. A reload requested while one is in
/// flight returns [`DirectorError::BatchInFlight`] without mutating
/// anything; retry after the host's `batch_finished` signal.
pub struct Director<T: Kinded> {
    sections: Vec<Section<T>>,
    adapters: AdapterRegistry<T::Kind, T>,
    animations: ReloadAnimations,
    state: ReloadState,
    loaded: bool,
    on_complete: Option<OnComplete>,
}

impl<T: Kinded> Director<T> {
    /// Creates an empty director with the default animation policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            adapters: AdapterRegistry::new(),
            animations: ReloadAnimations::AUTOMATIC,
            state: ReloadState::Idle,
            loaded: false,
            on_complete: None,
        }
    }

    /// Sets the animation policy attached to future batches.
    pub fn set_animations(&mut self, animations: ReloadAnimations) {
        self.animations = animations;
    }

    /// The current animation policy.
    #[must_use]
    pub const fn animations(&self) -> ReloadAnimations {
        self.animations
    }

    /// Registers `adapter` for models of `kind`, replacing any previous one.
    pub fn register_adapter(&mut self, kind: T::Kind, adapter: impl RowAdapter<T> + 'static) {
        self.adapters.register(kind, adapter);
    }

    // Structure access and mutation. Mutators follow the no-panic policy:
    // invalid indices append (insertions), return `None` (removals and
    // lookups), or do nothing (reorderings).

    /// The live section list.
    #[must_use]
    pub fn sections(&self) -> &[Section<T>] {
        &self.sections
    }

    /// Number of sections.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Replaces the entire section list.
    pub fn set_sections(&mut self, sections: impl IntoIterator<Item = Section<T>>) {
        self.sections = sections.into_iter().collect();
    }

    /// Appends a section.
    pub fn add_section(&mut self, section: Section<T>) {
        self.sections.push(section);
    }

    /// Inserts a section at `index`; an invalid index appends instead.
    pub fn insert_section(&mut self, section: Section<T>, index: usize) {
        if index < self.sections.len() {
            self.sections.insert(index, section);
        } else {
            self.sections.push(section);
        }
    }

    /// Returns the section at `index`, or `None` if out of range.
    #[must_use]
    pub fn section(&self, index: usize) -> Option<&Section<T>> {
        self.sections.get(index)
    }

    /// Mutable access to the section at `index`.
    pub fn section_mut(&mut self, index: usize) -> Option<&mut Section<T>> {
        self.sections.get_mut(index)
    }

    /// The first section, if any.
    #[must_use]
    pub fn first_section(&self) -> Option<&Section<T>> {
        self.sections.first()
    }

    /// The last section, if any.
    #[must_use]
    pub fn last_section(&self) -> Option<&Section<T>> {
        self.sections.last()
    }

    /// Removes and returns the section at `index`, or `None` if out of range.
    pub fn remove_section(&mut self, index: usize) -> Option<Section<T>> {
        if index < self.sections.len() {
            Some(self.sections.remove(index))
        } else {
            None
        }
    }

    /// Removes the sections at the given indices, returning how many were
    /// removed. Out-of-range and duplicate indices are ignored.
    pub fn remove_sections(&mut self, indices: impl IntoIterator<Item = usize>) -> usize {
        let mut indices: Vec<usize> = indices
            .into_iter()
            .filter(|&index| index < self.sections.len())
            .collect();
        indices.sort_unstable();
        indices.dedup();
        // Descending order keeps the remaining indices valid.
        for &index in indices.iter().rev() {
            drop(self.sections.remove(index));
        }
        indices.len()
    }

    /// Removes all sections, returning how many were removed.
    pub fn remove_all_sections(&mut self) -> usize {
        let count = self.sections.len();
        self.sections.clear();
        count
    }

    /// Removes the section at `from` and reinserts it at `to`.
    ///
    /// Does nothing if either index is out of range.
    pub fn move_section(&mut self, from: usize, to: usize) {
        if from < self.sections.len() && to < self.sections.len() {
            let section = self.sections.remove(from);
            self.sections.insert(to, section);
        }
    }

    /// Swaps two sections; does nothing if either index is out of range.
    pub fn swap_sections(&mut self, a: usize, b: usize) {
        if a < self.sections.len() && b < self.sections.len() {
            self.sections.swap(a, b);
        }
    }

    /// Returns the item at `path`, or `None` if the path is out of range.
    ///
    /// Collapsed sections report no items, matching what the widget shows.
    #[must_use]
    pub fn item_at(&self, path: IndexPath) -> Option<&T> {
        self.sections
            .get(path.section)
            .and_then(|section| section.items().get(path.item))
    }

    // Event dispatch. Each helper resolves the adapter through the item's
    // kind and falls back to the named default policy when no adapter is
    // registered; an out-of-range path is a no-op.

    /// Binds a freshly dequeued row to its model.
    ///
    /// An out-of-range path is a no-op; a missing adapter is an error
    /// because the host has nothing to show without a binding.
    pub fn bind_row(&mut self, path: IndexPath) -> Result<(), DirectorError> {
        let Some(item) = self
            .sections
            .get(path.section)
            .and_then(|section| section.items().get(path.item))
        else {
            return Ok(());
        };
        let Some(adapter) = self.adapters.get_mut(&item.kind()) else {
            return Err(DirectorError::MissingAdapter);
        };
        adapter.bind(RowContext { item, path });
        Ok(())
    }

    /// Preferred extent of the row at `path`; `None` means host default.
    pub fn row_size(&mut self, path: IndexPath) -> Option<f64> {
        let item = self
            .sections
            .get(path.section)
            .and_then(|section| section.items().get(path.item))?;
        let adapter = self.adapters.get_mut(&item.kind())?;
        adapter.size(RowContext { item, path })
    }

    /// Dispatches a selection event, returning what to do with the selection.
    pub fn select(&mut self, path: IndexPath) -> SelectionOutcome {
        let Some(item) = self
            .sections
            .get(path.section)
            .and_then(|section| section.items().get(path.item))
        else {
            return KEEP_SELECTION;
        };
        match self.adapters.get_mut(&item.kind()) {
            Some(adapter) => adapter.on_select(RowContext { item, path }),
            None => KEEP_SELECTION,
        }
    }

    /// Whether the row at `path` may enter edit mode.
    pub fn can_edit_row(&mut self, path: IndexPath) -> bool {
        let Some(item) = self
            .sections
            .get(path.section)
            .and_then(|section| section.items().get(path.item))
        else {
            return crate::DEFAULT_CAN_EDIT;
        };
        match self.adapters.get_mut(&item.kind()) {
            Some(adapter) => adapter.can_edit(RowContext { item, path }),
            None => crate::DEFAULT_CAN_EDIT,
        }
    }

    /// Whether the row at `path` may be interactively reordered.
    pub fn can_move_row(&mut self, path: IndexPath) -> bool {
        let Some(item) = self
            .sections
            .get(path.section)
            .and_then(|section| section.items().get(path.item))
        else {
            return crate::DEFAULT_CAN_MOVE;
        };
        match self.adapters.get_mut(&item.kind()) {
            Some(adapter) => adapter.can_move(RowContext { item, path }),
            None => crate::DEFAULT_CAN_MOVE,
        }
    }

    /// Notifies the row at `path` that it is about to become visible.
    pub fn will_display_row(&mut self, path: IndexPath) {
        if let Some(item) = self
            .sections
            .get(path.section)
            .and_then(|section| section.items().get(path.item))
            && let Some(adapter) = self.adapters.get_mut(&item.kind())
        {
            adapter.will_display(RowContext { item, path });
        }
    }

    /// Notifies the row at `path` that it left the visible region.
    pub fn end_display_row(&mut self, path: IndexPath) {
        if let Some(item) = self
            .sections
            .get(path.section)
            .and_then(|section| section.items().get(path.item))
            && let Some(adapter) = self.adapters.get_mut(&item.kind())
        {
            adapter.end_display(RowContext { item, path });
        }
    }

    /// Host signal that the sink finished applying a pending batch.
    ///
    /// Fires the stored completion callback on the transition back to idle.
    /// Calling this while no batch is pending is a no-op.
    pub fn batch_finished(&mut self) {
        if self.state == ReloadState::BatchInFlight {
            self.state = ReloadState::Idle;
            if let Some(done) = self.on_complete.take() {
                done();
            }
        }
    }

    fn finish_submission(&mut self, completion: Completion, on_complete: Option<OnComplete>) {
        match completion {
            Completion::Done => {
                self.state = ReloadState::Idle;
                if let Some(done) = on_complete {
                    done();
                }
            }
            Completion::Pending => {
                self.state = ReloadState::BatchInFlight;
                self.on_complete = on_complete;
            }
        }
    }
}

impl<T: Kinded + Diffable + Clone> Director<T> {
    /// Mutates the structure and reloads the widget with an animated diff.
    ///
    /// Snapshots the current sections, runs `mutate`, diffs old against new
    /// at section and item granularity, translates the result into one
    /// atomic batch, and submits it to `sink`. `on_complete` fires once the
    /// batch has fully applied — synchronously if the sink reports
    /// [`Completion::Done`], otherwise from
    /// [`batch_finished`](Self::batch_finished).
    ///
    /// The first reload after construction has nothing meaningful to diff
    /// against: it runs `mutate` and asks the sink for a full unanimated
    /// reload instead. A reload that changes nothing submits no batch but
    /// still fires `on_complete`.
    ///
    /// ## Errors
    ///
    /// [`DirectorError::BatchInFlight`] if a previous batch has not finished
    /// (including reentrant calls from inside `mutate`); nothing is mutated.
    pub fn reload<S: BatchSink>(
        &mut self,
        sink: &mut S,
        mutate: impl FnOnce(&mut Self),
        on_complete: Option<OnComplete>,
    ) -> Result<(), DirectorError> {
        if self.state != ReloadState::Idle {
            return Err(DirectorError::BatchInFlight);
        }
        self.state = ReloadState::DiffComputing;

        if !self.loaded {
            mutate(self);
            self.loaded = true;
            let completion = sink.reload_all();
            self.finish_submission(completion, on_complete);
            return Ok(());
        }

        let old = self.sections.clone();
        mutate(self);
        let changes = diff_structure(&old, &self.sections);
        if changes.is_empty() {
            self.state = ReloadState::Idle;
            if let Some(done) = on_complete {
                done();
            }
            return Ok(());
        }

        let batch = Batch::from_changes(&changes, self.animations);
        let completion = sink.perform_batch(&batch);
        self.finish_submission(completion, on_complete);
        Ok(())
    }

    /// Reloads all content without diffing or animating.
    ///
    /// The structural analogue of a plain "reload everything" call; useful
    /// when the caller replaced the data wholesale and an animated diff
    /// would be noise.
    ///
    /// ## Errors
    ///
    /// [`DirectorError::BatchInFlight`] if a previous batch has not finished.
    pub fn reload_data<S: BatchSink>(
        &mut self,
        sink: &mut S,
        on_complete: Option<OnComplete>,
    ) -> Result<(), DirectorError> {
        if self.state != ReloadState::Idle {
            return Err(DirectorError::BatchInFlight);
        }
        self.loaded = true;
        let completion = sink.reload_all();
        self.finish_submission(completion, on_complete);
        Ok(())
    }
}

impl<T: Kinded> Default for Director<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Kinded> fmt::Debug for Director<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Director")
            .field("sections", &self.sections.len())
            .field("state", &self.state)
            .field("loaded", &self.loaded)
            .finish_non_exhaustive()
    }
}
