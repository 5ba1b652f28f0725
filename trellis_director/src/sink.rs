// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contract between the director and the hosting widget.

use crate::Batch;

/// How the sink finished (or will finish) applying a request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The widget applied the request synchronously; it is already visible.
    Done,
    /// The widget is animating the request and will signal the host when it
    /// ends; the host must then call
    /// [`Director::batch_finished`](crate::Director::batch_finished).
    Pending,
}

/// The widget-side receiver of reload output.
///
/// Implementations wrap a concrete list/grid widget. The director never
/// talks to the widget directly; this trait is the entire boundary, so the
/// engine stays renderer-agnostic the same way the rest of the data layer
/// does.
///
/// Both methods run on the host's UI thread; the only asynchronous boundary
/// is a [`Completion::Pending`] return followed later by the host's
/// `batch_finished` call.
pub trait BatchSink {
    /// Applies one atomic batch of mutation commands, animating per the
    /// batch's [`ReloadAnimations`](crate::ReloadAnimations).
    ///
    /// All commands belong to a single visual transaction: the widget must
    /// resolve pre-batch and post-batch indices against the same before and
    /// after states no matter the order it processes them in.
    fn perform_batch(&mut self, batch: &Batch) -> Completion;

    /// Replaces all visible content from the current data source state,
    /// without animating. Used for first-time loads and explicit full
    /// reloads, where there is no old state worth diffing against.
    fn reload_all(&mut self) -> Completion;
}
