/// Default limit on how many quadrant splits a tree may make below its root.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Tunable parameters shared by every node of a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QuadTreeConfig {
    /// Items are pushed into a child only while `depth + 1 < max_depth`.
    /// A value of 0 or 1 keeps every item at the root.
    pub max_depth: usize,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        QuadTreeConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl QuadTreeConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
