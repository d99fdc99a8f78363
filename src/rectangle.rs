use crate::Coordinate;

/// An axis-aligned rectangle given by its minimum corner and its size.
///
/// The rectangle is half-open: it includes its minimum edges and excludes its
/// maximum edges when asked whether it contains a point or another rectangle.
/// `overlaps` keeps its own inclusive/exclusive mix, see its docs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub pos: Coordinate,
    pub size: Coordinate,
}

impl Default for Rect {
    fn default() -> Self {
        Rect::new((0., 0.).into(), (100., 100.).into())
    }
}

pub trait HasEnvelope {
    fn envelope(&self) -> Rect;
}

impl HasEnvelope for Coordinate {
    fn envelope(&self) -> Rect {
        Rect::new(*self, Coordinate::default())
    }
}

impl HasEnvelope for Rect {
    fn envelope(&self) -> Rect {
        *self
    }
}

impl<T: HasEnvelope> HasEnvelope for &T {
    fn envelope(&self) -> Rect {
        (*self).envelope()
    }
}

impl Rect {
    pub fn new(pos: Coordinate, size: Coordinate) -> Self {
        Rect { pos, size }
    }

    /// Build the rectangle spanned by two opposite corners, in any order.
    pub fn from_corners(p1: Coordinate, p2: Coordinate) -> Self {
        let min = Coordinate::new(p1.x.min(p2.x), p1.y.min(p2.y));
        let max = Coordinate::new(p1.x.max(p2.x), p1.y.max(p2.y));
        Rect::new(min, max - min)
    }

    /// The bounding rectangle of `items`, or `None` if there are none.
    pub fn of<T: HasEnvelope>(items: &[T]) -> Option<Self> {
        let mut iter = items.iter().map(|i| i.envelope());
        let first = iter.next()?;
        Some(iter.fold(first, |s, r| s.merge(r)))
    }

    pub fn max(&self) -> Coordinate {
        self.pos + self.size
    }

    pub fn center(&self) -> Coordinate {
        self.pos + self.size / 2.
    }

    /// The four quadrants in top-left, top-right, bottom-left, bottom-right order.
    pub fn quadrants(&self) -> [Rect; 4] {
        let half = self.size / 2.;
        [
            Rect::new(self.pos, half),
            Rect::new(Coordinate::new(self.pos.x + half.x, self.pos.y), half),
            Rect::new(Coordinate::new(self.pos.x, self.pos.y + half.y), half),
            Rect::new(self.pos + half, half),
        ]
    }

    pub fn contains_point(&self, p: Coordinate) -> bool {
        !(p.x < self.pos.x
            || p.y < self.pos.y
            || p.x >= self.pos.x + self.size.x
            || p.y >= self.pos.y + self.size.y)
    }

    /// True if `item` lies fully inside, touching at most the minimum edges.
    pub fn contains<T: HasEnvelope>(&self, item: T) -> bool {
        let other = item.envelope();
        other.pos.x >= self.pos.x
            && other.pos.x + other.size.x < self.pos.x + self.size.x
            && other.pos.y >= self.pos.y
            && other.pos.y + other.size.y < self.pos.y + self.size.y
    }

    /// Strict on our minimum edge against the other's maximum edge, inclusive
    /// on our maximum edge against the other's minimum edge.
    pub fn overlaps<T: HasEnvelope>(&self, item: T) -> bool {
        let other = item.envelope();
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x >= other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y >= other.pos.y
    }

    pub fn merge<T: HasEnvelope>(&self, item: T) -> Self {
        let rect = item.envelope();
        let (max, other_max) = (self.max(), rect.max());
        Rect::from_corners(
            Coordinate::new(self.pos.x.min(rect.pos.x), self.pos.y.min(rect.pos.y)),
            Coordinate::new(max.x.max(other_max.x), max.y.max(other_max.y)),
        )
    }
}
