// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a list/grid widget from a sectioned data model.
//!
//! The director owns the sections, diffs every mutation against the previous
//! state, and hands the hosting widget one atomic [`Batch`] of mutation
//! commands per reload. The widget side of the contract is the [`BatchSink`]
//! trait; per-model-kind row behavior lives in [`RowAdapter`] implementations
//! registered with the director.
//!
//! Like [`trellis_diff`] and [`trellis_sections`] underneath it, this crate
//! knows nothing about any particular UI toolkit. A host wraps its widget in
//! a `BatchSink`, forwards data-source callbacks to the director's event
//! helpers, and calls [`Director::batch_finished`] when an animated batch
//! completes.
//!
//! # Example
//!
//! ```
//! use trellis_diff::Diffable;
//! use trellis_director::{
//!     Batch, BatchSink, Completion, Director, Kinded, RowAdapter, RowContext,
//! };
//! use trellis_sections::Section;
//!
//! #[derive(Clone)]
//! struct Message {
//!     id: u64,
//!     body: String,
//! }
//!
//! impl Diffable for Message {
//!     type Key = u64;
//!     fn diff_key(&self) -> u64 {
//!         self.id
//!     }
//!     fn content_eq(&self, other: &Self) -> bool {
//!         self.body == other.body
//!     }
//! }
//!
//! impl Kinded for Message {
//!     type Kind = ();
//!     fn kind(&self) {}
//! }
//!
//! struct MessageRow;
//!
//! impl RowAdapter<Message> for MessageRow {
//!     fn bind(&mut self, ctx: RowContext<'_, Message>) {
//!         // Push `ctx.item` into the widget's row at `ctx.path`.
//!         let _ = &ctx.item.body;
//!     }
//! }
//!
//! struct CountingSink {
//!     batches: usize,
//! }
//!
//! impl BatchSink for CountingSink {
//!     fn perform_batch(&mut self, _batch: &Batch) -> Completion {
//!         self.batches += 1;
//!         Completion::Done
//!     }
//!     fn reload_all(&mut self) -> Completion {
//!         Completion::Done
//!     }
//! }
//!
//! let mut director: Director<Message> = Director::new();
//! director.register_adapter((), MessageRow);
//! let mut sink = CountingSink { batches: 0 };
//!
//! // The first reload is a plain full load; nothing to diff against yet.
//! director
//!     .reload(
//!         &mut sink,
//!         |d| {
//!             d.add_section(Section::new(
//!                 "inbox",
//!                 [Message { id: 1, body: "hi".into() }],
//!             ));
//!         },
//!         None,
//!     )
//!     .unwrap();
//! assert_eq!(sink.batches, 0);
//!
//! // Later reloads diff and submit one atomic batch.
//! director
//!     .reload(
//!         &mut sink,
//!         |d| {
//!             if let Some(inbox) = d.section_mut(0) {
//!                 inbox.push(Message { id: 2, body: "hello again".into() });
//!             }
//!         },
//!         None,
//!     )
//!     .unwrap();
//! assert_eq!(sink.batches, 1);
//! ```

#![no_std]

extern crate alloc;

mod adapter;
mod animation;
mod command;
mod director;
mod error;
mod path;
mod sink;

pub use adapter::{
    AdapterRegistry, DEFAULT_CAN_EDIT, DEFAULT_CAN_MOVE, KEEP_SELECTION, Kinded, RowAdapter,
    RowContext, SelectionOutcome,
};
pub use animation::{Animation, ReloadAnimations};
pub use command::{Batch, BatchCommand};
pub use director::{Director, OnComplete};
pub use error::DirectorError;
pub use path::IndexPath;
pub use sink::{BatchSink, Completion};
