// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-level index addressing into a sectioned structure.

/// Address of one item: a section index plus an item index within it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexPath {
    /// Index of the section.
    pub section: usize,
    /// Index of the item within the section.
    pub item: usize,
}

impl IndexPath {
    /// Creates an index path.
    #[must_use]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_section_then_item() {
        assert!(IndexPath::new(0, 9) < IndexPath::new(1, 0));
        assert!(IndexPath::new(1, 0) < IndexPath::new(1, 1));
    }
}
