// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation hints attached to a reload batch.

/// Renderer-agnostic animation hint for one kind of mutation command.
///
/// The hosting widget maps these onto whatever animation vocabulary it has;
/// [`Automatic`](Self::Automatic) delegates the choice entirely.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Animation {
    /// Let the widget pick a suitable animation.
    #[default]
    Automatic,
    /// Cross-fade the affected rows/sections.
    Fade,
    /// Apply the mutation without animating.
    None,
}

/// Animation policy for one reload batch, per operation kind.
///
/// The default policy animates everything automatically; it is declared once
/// as [`ReloadAnimations::AUTOMATIC`] rather than defaulted at each dispatch
/// site, so hosts can see (and replace) the fallback in one place.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReloadAnimations {
    /// Animation for section deletions.
    pub delete_section: Animation,
    /// Animation for section insertions.
    pub insert_section: Animation,
    /// Animation for section reloads.
    pub reload_section: Animation,
    /// Animation for item deletions.
    pub delete_item: Animation,
    /// Animation for item insertions.
    pub insert_item: Animation,
    /// Animation for item reloads.
    pub reload_item: Animation,
}

impl ReloadAnimations {
    /// The default policy: every operation kind animates automatically.
    pub const AUTOMATIC: Self = Self {
        delete_section: Animation::Automatic,
        insert_section: Animation::Automatic,
        reload_section: Animation::Automatic,
        delete_item: Animation::Automatic,
        insert_item: Animation::Automatic,
        reload_item: Animation::Automatic,
    };

    /// A policy that disables animation for every operation kind.
    pub const NONE: Self = Self {
        delete_section: Animation::None,
        insert_section: Animation::None,
        reload_section: Animation::None,
        delete_item: Animation::None,
        insert_item: Animation::None,
        reload_item: Animation::None,
    };
}

impl Default for ReloadAnimations {
    fn default() -> Self {
        Self::AUTOMATIC
    }
}
