// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recoverable director errors.

use core::fmt;

/// The recoverable failures the director can report.
///
/// Caller-contract slips around indices are deliberately *not* here: an
/// out-of-range index in a structure mutator is a documented no-op, never an
/// error or a panic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DirectorError {
    /// A reload was requested while a previous batch was still in flight.
    ///
    /// The request performed no mutation; retry after the host's
    /// `batch_finished` signal.
    BatchInFlight,
    /// No adapter is registered for the model kind at the requested path.
    MissingAdapter,
}

impl fmt::Display for DirectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BatchInFlight => f.write_str("a reload batch is already in flight"),
            Self::MissingAdapter => f.write_str("no adapter registered for the model's kind"),
        }
    }
}

impl core::error::Error for DirectorError {}
