// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A keyed, ordered group of items with optional accessories.

use alloc::string::String;
use alloc::vec::Vec;

use trellis_diff::Diffable;

/// One section of a list/grid: a stable key, an ordered item list, and
/// optional header/footer descriptors.
///
/// The key identifies the section across mutations; it is what the
/// section-level diff matches on. Headers, footers, the index title, and the
/// collapse flag are the section's *own* content — changing any of them
/// flags a section update, while item changes are reported separately at
/// item level.
///
/// A collapsed section retains its items but reports none of them, so
/// collapsing animates the rows out on the next reload and expanding brings
/// them back.
///
/// All index-taking mutators follow the same policy: an invalid index is
/// never a panic. Insertions fall back to appending, removals and lookups
/// return `None`, reorderings do nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section<T> {
    key: String,
    items: Vec<T>,
    /// Header descriptor, typically a title. `None` means no header.
    pub header: Option<String>,
    /// Footer descriptor. `None` means no footer.
    pub footer: Option<String>,
    /// Short title for the host's section index bar, if it has one.
    pub index_title: Option<String>,
    collapsed: bool,
}

impl<T> Section<T> {
    /// Creates a section with the given key and initial items.
    #[must_use]
    pub fn new(key: impl Into<String>, items: impl IntoIterator<Item = T>) -> Self {
        Self {
            key: key.into(),
            items: items.into_iter().collect(),
            header: None,
            footer: None,
            index_title: None,
            collapsed: false,
        }
    }

    /// Creates a section with header and footer titles.
    #[must_use]
    pub fn with_titles(
        key: impl Into<String>,
        header: Option<String>,
        footer: Option<String>,
        items: impl IntoIterator<Item = T>,
    ) -> Self {
        let mut section = Self::new(key, items);
        section.header = header;
        section.footer = footer;
        section
    }

    /// The section's stable key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The visible items: empty while the section is collapsed.
    #[must_use]
    pub fn items(&self) -> &[T] {
        if self.collapsed { &[] } else { &self.items }
    }

    /// Number of visible items.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.collapsed { 0 } else { self.items.len() }
    }

    /// Returns `true` if there are no visible items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the section is collapsed.
    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Collapses or expands the section. Items are retained either way.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    /// Replaces the entire item list.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = T>) {
        self.items = items.into_iter().collect();
    }

    /// Returns the item at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The first item, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// The last item, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Appends an item.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Inserts an item at `index`; an invalid index appends instead.
    pub fn insert(&mut self, item: T, index: usize) {
        if index < self.items.len() {
            self.items.insert(index, item);
        } else {
            self.items.push(item);
        }
    }

    /// Inserts items starting at `index`; an invalid index appends instead.
    pub fn insert_all(&mut self, items: impl IntoIterator<Item = T>, index: usize) {
        if index < self.items.len() {
            // Preserve the incoming order while splicing.
            for (offset, item) in items.into_iter().enumerate() {
                self.items.insert(index + offset, item);
            }
        } else {
            self.items.extend(items);
        }
    }

    /// Replaces the item at `index`, returning the old one.
    ///
    /// Returns `None` (and changes nothing) if `index` is out of range.
    pub fn replace(&mut self, item: T, index: usize) -> Option<T> {
        let slot = self.items.get_mut(index)?;
        Some(core::mem::replace(slot, item))
    }

    /// Removes and returns the item at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Removes all items, returning how many were removed.
    pub fn remove_all(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        count
    }

    /// Removes the item at `from` and reinserts it at `to`.
    ///
    /// Does nothing if either index is out of range.
    pub fn move_item(&mut self, from: usize, to: usize) {
        if from < self.items.len() && to < self.items.len() {
            let item = self.items.remove(from);
            self.items.insert(to, item);
        }
    }

    /// Swaps the items at two indices; does nothing if either is out of range.
    pub fn swap_items(&mut self, a: usize, b: usize) {
        if a < self.items.len() && b < self.items.len() {
            self.items.swap(a, b);
        }
    }
}

impl<T: Diffable> Diffable for Section<T> {
    type Key = String;

    fn diff_key(&self) -> String {
        self.key.clone()
    }

    /// Compares the section's own attributes only; item changes are handled
    /// at item level.
    fn content_eq(&self, other: &Self) -> bool {
        self.header == other.header
            && self.footer == other.footer
            && self.index_title == other.index_title
            && self.collapsed == other.collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct It(u32);

    impl Diffable for It {
        type Key = u32;

        fn diff_key(&self) -> u32 {
            self.0
        }

        fn content_eq(&self, other: &Self) -> bool {
            self == other
        }
    }

    fn section() -> Section<It> {
        let mut s = Section::new("s", [It(10), It(20), It(30)]);
        s.header = Some("Header".to_string());
        s
    }

    #[test]
    fn invalid_insert_appends() {
        let mut s = section();
        s.insert(It(40), 99);
        assert_eq!(s.items(), [It(10), It(20), It(30), It(40)]);
        s.insert(It(5), 1);
        assert_eq!(s.items(), [It(10), It(5), It(20), It(30), It(40)]);
    }

    #[test]
    fn insert_all_preserves_order() {
        let mut s = section();
        s.insert_all([It(1), It(2)], 1);
        assert_eq!(s.items(), [It(10), It(1), It(2), It(20), It(30)]);
        s.insert_all([It(7), It(8)], 99);
        assert_eq!(
            s.items(),
            [It(10), It(1), It(2), It(20), It(30), It(7), It(8)]
        );
    }

    #[test]
    fn invalid_remove_is_none() {
        let mut s = section();
        assert_eq!(s.remove(7), None);
        assert_eq!(s.remove(1), Some(It(20)));
        assert_eq!(s.items(), [It(10), It(30)]);
    }

    #[test]
    fn replace_returns_old_item() {
        let mut s = section();
        assert_eq!(s.replace(It(99), 0), Some(It(10)));
        assert_eq!(s.replace(It(5), 9), None);
        assert_eq!(s.items(), [It(99), It(20), It(30)]);
    }

    #[test]
    fn move_item_reinserts_at_destination() {
        let mut s = section();
        s.move_item(0, 2);
        assert_eq!(s.items(), [It(20), It(30), It(10)]);
        s.move_item(0, 9); // out of range: no-op
        assert_eq!(s.items(), [It(20), It(30), It(10)]);
    }

    #[test]
    fn collapse_hides_but_retains_items() {
        let mut s = section();
        s.set_collapsed(true);
        assert!(s.is_empty());
        assert!(s.items().is_empty());
        s.set_collapsed(false);
        assert_eq!(s.items(), [It(10), It(20), It(30)]);
    }

    #[test]
    fn content_eq_ignores_items() {
        let a = section();
        let mut b = section();
        b.set_items([It(1), It(2), It(3)]);
        assert!(a.content_eq(&b));
        b.footer = Some("f".to_string());
        assert!(!a.content_eq(&b));
    }
}
