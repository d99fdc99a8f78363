/**
 * A depth-bounded region quadtree.
 *
 * Each node covers a fixed region and splits it into four quadrants. An item
 * lives at the shallowest node where no single quadrant contains it, or at the
 * depth limit. Children are created on the first insertion that needs them
 * and are only dropped by `clear` and `resize`.
 */
use tracing::{debug, trace};

use crate::{QuadTreeConfig, Rect, SpatialIndex};

#[derive(Debug, Clone)]
pub struct QuadTree<T> {
    depth: usize,
    config: QuadTreeConfig,
    region: Rect,
    // TL, TR, BL, BR; children[i] covers child_regions[i]
    child_regions: [Rect; 4],
    children: [Option<Box<QuadTree<T>>>; 4],
    items: Vec<(Rect, T)>,
    // items kept here only because the depth limit stopped them descending
    depth_limited: usize,
}

/// A snapshot of how a tree has been populated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Allocated nodes, the root included.
    pub nodes: usize,
    pub items: usize,
    /// Depth of the deepest allocated node.
    pub max_node_depth: usize,
    /// Items that fit inside a quadrant but hit the depth limit.
    pub depth_limited: usize,
}

impl<T> Default for QuadTree<T> {
    fn default() -> Self {
        QuadTree::new(Rect::default())
    }
}

impl<T: Clone> SpatialIndex<T> for QuadTree<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn area(&self) -> Rect {
        self.area()
    }

    fn insert(&mut self, item: T, rect: Rect) {
        self.insert(item, rect)
    }

    fn search(&self, query: &Rect) -> Vec<T> {
        self.search(query)
    }

    fn clear(&mut self) {
        self.clear()
    }
}

impl<T> QuadTree<T> {
    pub fn new(region: Rect) -> Self {
        Self::with_config(region, QuadTreeConfig::default())
    }

    pub fn with_config(region: Rect, config: QuadTreeConfig) -> Self {
        Self::new_node(region, 0, config)
    }

    fn new_node(region: Rect, depth: usize, config: QuadTreeConfig) -> Self {
        QuadTree {
            depth,
            config,
            region,
            child_regions: region.quadrants(),
            children: [None, None, None, None],
            items: Vec::new(),
            depth_limited: 0,
        }
    }

    /// Drop every stored item and re-partition over `region`.
    ///
    /// This is a full reset: nothing inserted before survives.
    pub fn resize(&mut self, region: Rect) {
        self.clear();
        self.region = region;
        self.child_regions = region.quadrants();
        if self.depth == 0 {
            debug!(?region, "quadtree resized");
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.depth_limited = 0;
        for slot in self.children.iter_mut() {
            if let Some(child) = slot {
                child.clear();
            }
            *slot = None;
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
            + self
                .children
                .iter()
                .flatten()
                .map(|child| child.len())
                .sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.children.iter().flatten().all(|c| c.is_empty())
    }

    pub fn area(&self) -> Rect {
        self.region
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn config(&self) -> QuadTreeConfig {
        self.config
    }

    pub fn insert(&mut self, item: T, rect: Rect) {
        let mut blocked = false;
        for i in 0..4 {
            if !self.child_regions[i].contains(rect) {
                continue;
            }
            if self.depth + 1 < self.config.max_depth {
                let (region, depth, config) = (self.child_regions[i], self.depth + 1, self.config);
                self.children[i]
                    .get_or_insert_with(|| Box::new(QuadTree::new_node(region, depth, config)))
                    .insert(item, rect);
                return;
            }
            blocked = true;
        }

        if blocked {
            trace!(depth = self.depth, ?rect, "depth limit reached");
            self.depth_limited += 1;
        }
        self.items.push((rect, item));
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            nodes: 1,
            items: self.items.len(),
            max_node_depth: self.depth,
            depth_limited: self.depth_limited,
        };
        for child in self.children.iter().flatten() {
            let child_stats = child.stats();
            stats.nodes += child_stats.nodes;
            stats.items += child_stats.items;
            stats.max_node_depth = stats.max_node_depth.max(child_stats.max_node_depth);
            stats.depth_limited += child_stats.depth_limited;
        }
        stats
    }
}

impl<T: Clone> QuadTree<T> {
    /// Every item whose rectangle overlaps `query`.
    ///
    /// When `query` contains a whole child region, everything stored under
    /// that child is returned without testing each item. For items of zero
    /// or negative size lying on `query`'s minimum edge this reports items
    /// that `Rect::overlaps` alone would reject.
    pub fn search(&self, query: &Rect) -> Vec<T> {
        let mut results = Vec::new();
        self.search_into(query, &mut results);
        results
    }

    /// Like `search`, but appends to `results` so a buffer can be reused
    /// across queries.
    pub fn search_into(&self, query: &Rect, results: &mut Vec<T>) {
        results.extend(
            self.items
                .iter()
                .filter(|(rect, _)| query.overlaps(rect))
                .map(|(_, item)| item.clone()),
        );

        for (region, child) in self.child_regions.iter().zip(self.children.iter()) {
            let child = match child {
                Some(child) => child,
                None => continue,
            };
            if query.contains(region) {
                // Everything under the child lies inside its region, so it all overlaps.
                child.items_into(results);
            } else if query.overlaps(region) {
                child.search_into(query, results);
            }
        }
    }

    /// Every item in this subtree.
    pub fn items(&self) -> Vec<T> {
        let mut results = Vec::new();
        self.items_into(&mut results);
        results
    }

    pub fn items_into(&self, results: &mut Vec<T>) {
        results.extend(self.items.iter().map(|(_, item)| item.clone()));
        for child in self.children.iter().flatten() {
            child.items_into(results);
        }
    }
}

/// Path of child indices from the root to the node holding `item`.
#[cfg(test)]
pub(crate) fn find_path<T: PartialEq>(tree: &QuadTree<T>, item: &T) -> Option<Vec<usize>> {
    if tree.items.iter().any(|(_, i)| i == item) {
        return Some(Vec::new());
    }
    for (idx, child) in tree.children.iter().enumerate() {
        if let Some(child) = child {
            if let Some(mut path) = find_path(child, item) {
                path.insert(0, idx);
                return Some(path);
            }
        }
    }
    None
}
