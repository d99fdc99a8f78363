use crate::{Rect, SpatialIndex};

/// A flat list of items, searched by testing every one of them.
///
/// This is the baseline a quadtree has to beat, and the oracle its results
/// are checked against.
#[derive(Debug, Clone)]
pub struct LinearIndex<T> {
    region: Rect,
    items: Vec<(Rect, T)>,
}

impl<T> Default for LinearIndex<T> {
    fn default() -> Self {
        LinearIndex::new(Rect::default())
    }
}

impl<T> LinearIndex<T> {
    pub fn new(region: Rect) -> Self {
        LinearIndex {
            region,
            items: Vec::new(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Rect, T)> {
        self.items.iter()
    }
}

impl<T: Clone> SpatialIndex<T> for LinearIndex<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn area(&self) -> Rect {
        self.region
    }

    fn insert(&mut self, item: T, rect: Rect) {
        self.items.push((rect, item));
    }

    fn search(&self, query: &Rect) -> Vec<T> {
        self.items
            .iter()
            .filter(|(rect, _)| query.overlaps(rect))
            .map(|(_, item)| item.clone())
            .collect()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
