use crate::Rect;

/// The range-query contract shared by the quadtree and the linear scan it is
/// measured against.
pub trait SpatialIndex<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The region the index was built over.
    fn area(&self) -> Rect;

    fn insert(&mut self, item: T, rect: Rect);

    /// Every stored item whose rectangle overlaps `query`, in no particular order.
    ///
    /// Implementations may skip the per-item test for whole regions inside
    /// `query`; see `QuadTree::search` for how that treats zero-size items.
    fn search(&self, query: &Rect) -> Vec<T>;

    fn clear(&mut self);
}
