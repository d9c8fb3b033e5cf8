//! Tile-indexed lookup from screen regions to the widgets that paint there.
//!
//! Rebuilt after every layout pass or scroll, the map lets the compositor
//! avoid walking the entire tree to find which widgets are visible on a
//! given line. Each tile holds a bucket of widget ids in paint order;
//! queries union the buckets touched by a region and deduplicate while
//! preserving that order.

use crate::canvas::Region;
use std::collections::HashMap;

/// Opaque id a caller assigns to each widget it registers. The map doesn't
/// care what it means, only that it can be compared and deduplicated.
pub type WidgetId = u64;

const DEFAULT_TILE_WIDTH: i32 = 100;
const DEFAULT_TILE_HEIGHT: i32 = 20;

/// One entry registered with the map: a widget's absolute region and its
/// position in paint order (lower paints first, i.e. further back).
#[derive(Debug, Clone, Copy)]
struct Entry {
    id: WidgetId,
    region: Region,
    paint_order: usize,
}

/// Tile-bucketed spatial index over a laid-out widget tree.
#[derive(Debug, Default)]
pub struct SpatialMap {
    tile_width: i32,
    tile_height: i32,
    tiles: HashMap<(i32, i32), Vec<usize>>,
    entries: Vec<Entry>,
}

impl SpatialMap {
    pub fn new() -> Self {
        Self::with_tile_size(DEFAULT_TILE_WIDTH, DEFAULT_TILE_HEIGHT)
    }

    pub fn with_tile_size(tile_width: i32, tile_height: i32) -> Self {
        Self {
            tile_width: tile_width.max(1),
            tile_height: tile_height.max(1),
            tiles: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Drops all entries. Call before rebuilding after a layout change or
    /// scroll; the map has no way to detect staleness on its own.
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.entries.clear();
    }

    /// Registers a widget's absolute region. Callers must insert in paint
    /// order (back to front); that order is what queries preserve.
    pub fn insert(&mut self, id: WidgetId, region: Region) {
        if region.is_empty() {
            return;
        }
        let paint_order = self.entries.len();
        let entry_index = self.entries.len();
        self.entries.push(Entry { id, region, paint_order });

        for ty in self.tiles_for(region) {
            self.tiles.entry(ty).or_default().push(entry_index);
        }
    }

    /// Rebuilds the map from scratch given `(id, region)` pairs already in
    /// paint order.
    pub fn rebuild(&mut self, widgets: impl IntoIterator<Item = (WidgetId, Region)>) {
        self.clear();
        for (id, region) in widgets {
            self.insert(id, region);
        }
    }

    fn tiles_for(&self, region: Region) -> impl Iterator<Item = (i32, i32)> + '_ {
        let x0 = region.x.div_euclid(self.tile_width);
        let y0 = region.y.div_euclid(self.tile_height);
        let x1 = (region.x + region.width - 1).div_euclid(self.tile_width);
        let y1 = (region.y + region.height - 1).div_euclid(self.tile_height);
        (y0..=y1).flat_map(move |ty| (x0..=x1).map(move |tx| (tx, ty)))
    }

    /// Returns the widget ids whose registered region may intersect
    /// `region`, deduplicated and in paint order. Candidates are tile-level
    /// hits only; callers still need `Region::intersection` for an exact
    /// answer.
    pub fn widgets_in(&self, region: Region) -> Vec<WidgetId> {
        if region.is_empty() {
            return Vec::new();
        }
        let mut hit: Vec<usize> = Vec::new();
        let mut seen = std::collections::HashSet::new();
        for ty in self.tiles_for(region) {
            if let Some(bucket) = self.tiles.get(&ty) {
                for &idx in bucket {
                    if seen.insert(idx) {
                        hit.push(idx);
                    }
                }
            }
        }
        hit.sort_by_key(|&idx| self.entries[idx].paint_order);
        hit.into_iter().map(|idx| self.entries[idx].id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_returns_nothing() {
        let map = SpatialMap::new();
        assert!(map.widgets_in(Region::new(0, 0, 10, 10)).is_empty());
    }

    #[test]
    fn single_widget_found_by_overlapping_query() {
        let mut map = SpatialMap::new();
        map.insert(1, Region::new(5, 5, 10, 10));
        assert_eq!(map.widgets_in(Region::new(0, 0, 20, 20)), vec![1]);
        assert!(map.widgets_in(Region::new(100, 100, 5, 5)).is_empty());
    }

    #[test]
    fn results_preserve_paint_order() {
        let mut map = SpatialMap::new();
        map.insert(1, Region::new(0, 0, 50, 50));
        map.insert(2, Region::new(10, 10, 5, 5));
        map.insert(3, Region::new(20, 20, 5, 5));
        assert_eq!(map.widgets_in(Region::new(0, 0, 50, 50)), vec![1, 2, 3]);
    }

    #[test]
    fn query_deduplicates_widgets_spanning_multiple_tiles() {
        let mut map = SpatialMap::with_tile_size(4, 4);
        // Spans many tiles under a small tile size.
        map.insert(1, Region::new(0, 0, 20, 20));
        let hits = map.widgets_in(Region::new(0, 0, 20, 20));
        assert_eq!(hits, vec![1]);
    }

    #[test]
    fn rebuild_replaces_previous_contents() {
        let mut map = SpatialMap::new();
        map.insert(1, Region::new(0, 0, 10, 10));
        map.rebuild([(2, Region::new(0, 0, 10, 10))]);
        assert_eq!(map.widgets_in(Region::new(0, 0, 10, 10)), vec![2]);
    }

    #[test]
    fn empty_region_is_never_inserted_or_matched() {
        let mut map = SpatialMap::new();
        map.insert(1, Region::new(0, 0, 0, 0));
        assert!(map.widgets_in(Region::new(0, 0, 100, 100)).is_empty());
    }
}
