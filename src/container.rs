use std::ops::{Index, IndexMut};
use std::slice;

use tracing::debug;

use crate::{HasEnvelope, QuadTree, QuadTreeConfig, Rect, TreeStats};

/// A stable handle to an item stored in an `IndexedContainer`.
///
/// Keys are slot positions in append-only storage tagged with the
/// container's epoch, so a key stays valid for as long as the container is
/// not cleared and never resolves to an item inserted after a `clear`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemKey {
    epoch: u64,
    slot: usize,
}

impl ItemKey {
    /// Position of the item in insertion order.
    pub fn index(self) -> usize {
        self.slot
    }
}

#[derive(Debug, Clone)]
struct Slot<T> {
    rect: Rect,
    item: T,
}

/// Owns its items in insertion order and keeps a quadtree of keys into them.
#[derive(Debug, Clone)]
pub struct IndexedContainer<T> {
    storage: Vec<Slot<T>>,
    index: QuadTree<ItemKey>,
    // bumped by `clear`
    epoch: u64,
}

impl<T> Default for IndexedContainer<T> {
    fn default() -> Self {
        IndexedContainer::new(Rect::default())
    }
}

impl<T> IndexedContainer<T> {
    pub fn new(region: Rect) -> Self {
        Self::with_config(region, QuadTreeConfig::default())
    }

    pub fn with_config(region: Rect, config: QuadTreeConfig) -> Self {
        IndexedContainer {
            storage: Vec::new(),
            index: QuadTree::with_config(region, config),
            epoch: 0,
        }
    }

    /// Re-partition over `region` and index every stored item again.
    ///
    /// Items and their keys are kept; each item goes back into the tree with
    /// the rectangle it was first inserted with.
    pub fn resize(&mut self, region: Rect) {
        self.index.resize(region);
        let epoch = self.epoch;
        for (i, slot) in self.storage.iter().enumerate() {
            self.index.insert(ItemKey { epoch, slot: i }, slot.rect);
        }
        debug!(?region, reindexed = self.storage.len(), "container resized");
    }

    /// Drop every item. Keys issued before are no longer valid.
    pub fn clear(&mut self) {
        debug!(dropped = self.storage.len(), "container cleared");
        self.index.clear();
        self.storage.clear();
        self.epoch += 1;
    }

    pub fn insert(&mut self, item: T, rect: Rect) -> ItemKey {
        let key = ItemKey {
            epoch: self.epoch,
            slot: self.storage.len(),
        };
        self.storage.push(Slot { rect, item });
        self.index.insert(key, rect);
        key
    }

    /// Insert an item under its own envelope.
    pub fn push(&mut self, item: T) -> ItemKey
    where
        T: HasEnvelope,
    {
        let rect = item.envelope();
        self.insert(item, rect)
    }

    /// Keys of every item whose rectangle overlaps `query`.
    pub fn search(&self, query: &Rect) -> Vec<ItemKey> {
        self.index.search(query)
    }

    pub fn search_into(&self, query: &Rect, results: &mut Vec<ItemKey>) {
        self.index.search_into(query, results)
    }

    pub fn search_items(&self, query: &Rect) -> Vec<&T> {
        self.search(query)
            .into_iter()
            .map(|key| &self.storage[key.slot].item)
            .collect()
    }

    fn slot(&self, key: ItemKey) -> Option<&Slot<T>> {
        if key.epoch != self.epoch {
            return None;
        }
        self.storage.get(key.slot)
    }

    pub fn get(&self, key: ItemKey) -> Option<&T> {
        self.slot(key).map(|slot| &slot.item)
    }

    /// Items may be changed in place; their indexed rectangle stays as inserted.
    pub fn get_mut(&mut self, key: ItemKey) -> Option<&mut T> {
        if key.epoch != self.epoch {
            return None;
        }
        self.storage.get_mut(key.slot).map(|slot| &mut slot.item)
    }

    pub fn rect_of(&self, key: ItemKey) -> Option<Rect> {
        self.slot(key).map(|slot| slot.rect)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn area(&self) -> Rect {
        self.index.area()
    }

    pub fn stats(&self) -> TreeStats {
        self.index.stats()
    }

    /// Items in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.storage.iter(),
        }
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.storage.iter_mut().map(|slot| &mut slot.item)
    }
}

impl<T> Index<ItemKey> for IndexedContainer<T> {
    type Output = T;

    /// Panics if `key` was issued before the last `clear`.
    fn index(&self, key: ItemKey) -> &T {
        match self.get(key) {
            Some(item) => item,
            None => panic!("stale or out of range key {:?}", key),
        }
    }
}

impl<T> IndexMut<ItemKey> for IndexedContainer<T> {
    fn index_mut(&mut self, key: ItemKey) -> &mut T {
        match self.get_mut(key) {
            Some(item) => item,
            None => panic!("stale or out of range key {:?}", key),
        }
    }
}

impl<T> Extend<(T, Rect)> for IndexedContainer<T> {
    fn extend<I: IntoIterator<Item = (T, Rect)>>(&mut self, iter: I) {
        for (item, rect) in iter {
            self.insert(item, rect);
        }
    }
}

impl<'a, T> IntoIterator for &'a IndexedContainer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Slot<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|slot| &slot.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back().map(|slot| &slot.item)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
