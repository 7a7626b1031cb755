//! Variable-size list virtualization.
//!
//! Items are laid out back to back along one axis. Given a scroll offset and
//! a viewport length, only the items intersecting the viewport (plus an
//! overscan margin on each side) are materialized for rendering.

use serde::{Deserialize, Serialize};

pub const DEFAULT_OVERSCAN: usize = 5;

/// A materialized item within the rendered window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualItem {
    pub index: usize,
    pub start: u32,
    pub size: u32,
    pub end: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Virtualizer {
    /// `starts[i]` is the offset of item `i`; `starts[len]` is the total size.
    starts: Vec<u32>,
    overscan: usize,
}

impl Virtualizer {
    pub fn new<I>(sizes: I, overscan: usize) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut starts = vec![0];
        let mut offset = 0u32;
        for size in sizes {
            offset = offset.saturating_add(size);
            starts.push(offset);
        }
        Self { starts, overscan }
    }

    pub fn len(&self) -> usize {
        self.starts.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    pub fn total_size(&self) -> u32 {
        self.starts.last().copied().unwrap_or(0)
    }

    /// `(start, end)` of the item at `index`, end exclusive.
    pub fn item_range(&self, index: usize) -> Option<(u32, u32)> {
        if index >= self.len() {
            return None;
        }
        Some((self.starts[index], self.starts[index + 1]))
    }

    pub fn item(&self, index: usize) -> Option<VirtualItem> {
        self.item_range(index).map(|(start, end)| VirtualItem {
            index,
            start,
            size: end - start,
            end,
        })
    }

    /// Index of the item covering `offset`.
    pub fn index_at(&self, offset: u32) -> Option<usize> {
        if offset >= self.total_size() {
            return None;
        }
        // First item whose end lies beyond the offset
        let ends = &self.starts[1..];
        Some(ends.partition_point(|&end| end <= offset))
    }

    /// Inclusive range of items intersecting `[offset, offset + viewport_len)`.
    pub fn visible_range(&self, offset: u32, viewport_len: u32) -> Option<(usize, usize)> {
        if viewport_len == 0 {
            return None;
        }
        let first = self.index_at(offset)?;
        let bottom = offset.saturating_add(viewport_len);
        let last = self.starts[1..]
            .partition_point(|&end| end < bottom)
            .min(self.len() - 1);
        Some((first, last))
    }

    /// Items to render for the given scroll position, including overscan.
    pub fn virtual_items(&self, offset: u32, viewport_len: u32) -> Vec<VirtualItem> {
        let Some((first, last)) = self.visible_range(offset, viewport_len) else {
            return vec![];
        };
        let first = first.saturating_sub(self.overscan);
        let last = (last + self.overscan).min(self.len() - 1);
        (first..=last).filter_map(|index| self.item(index)).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn layout(sizes: &[u32], overscan: usize) -> Virtualizer {
        Virtualizer::new(sizes.iter().copied(), overscan)
    }

    #[test]
    fn test_empty() {
        let v = layout(&[], 5);
        assert!(v.is_empty());
        assert_eq!(v.total_size(), 0);
        assert_eq!(v.index_at(0), None);
        assert!(v.virtual_items(0, 10).is_empty());
    }

    #[test]
    fn test_total_size_and_ranges() {
        let v = layout(&[3, 10, 4], 0);
        assert_eq!(v.len(), 3);
        assert_eq!(v.total_size(), 17);
        assert_eq!(v.item_range(0), Some((0, 3)));
        assert_eq!(v.item_range(1), Some((3, 13)));
        assert_eq!(v.item_range(2), Some((13, 17)));
        assert_eq!(v.item_range(3), None);
    }

    #[test]
    fn test_index_at_boundaries() {
        let v = layout(&[3, 10, 4], 0);
        assert_eq!(v.index_at(0), Some(0));
        assert_eq!(v.index_at(2), Some(0));
        assert_eq!(v.index_at(3), Some(1));
        assert_eq!(v.index_at(12), Some(1));
        assert_eq!(v.index_at(13), Some(2));
        assert_eq!(v.index_at(16), Some(2));
        assert_eq!(v.index_at(17), None);
    }

    #[test]
    fn test_visible_range_without_overscan() {
        let v = layout(&[3, 10, 4, 4], 0);
        assert_eq!(v.visible_range(0, 3), Some((0, 0)));
        assert_eq!(v.visible_range(0, 4), Some((0, 1)));
        assert_eq!(v.visible_range(5, 5), Some((1, 1)));
        assert_eq!(v.visible_range(12, 2), Some((1, 2)));
        assert_eq!(v.visible_range(15, 100), Some((2, 3)));
        assert_eq!(v.visible_range(0, 0), None);
        assert_eq!(v.visible_range(21, 5), None);
    }

    #[test]
    fn test_virtual_items_apply_overscan() {
        let v = layout(&[1; 100], 5);
        let items = v.virtual_items(50, 10);
        assert_eq!(items.first().map(|i| i.index), Some(45));
        assert_eq!(items.last().map(|i| i.index), Some(64));
        assert_eq!(items.len(), 20);
    }

    #[test]
    fn test_virtual_items_overscan_clamped_at_edges() {
        let v = layout(&[1; 8], 5);
        let items = v.virtual_items(0, 3);
        assert_eq!(items.first().map(|i| i.index), Some(0));
        assert_eq!(items.last().map(|i| i.index), Some(7));
    }

    #[test]
    fn test_virtual_item_geometry() {
        let v = layout(&[3, 10], 0);
        assert_eq!(
            v.virtual_items(0, 5),
            vec![
                VirtualItem {
                    index: 0,
                    start: 0,
                    size: 3,
                    end: 3
                },
                VirtualItem {
                    index: 1,
                    start: 3,
                    size: 10,
                    end: 13
                },
            ]
        );
    }
}
