/// Default nesting bound for [`dump`](crate::dump). Deep enough for real
/// logging payloads, small enough that traversal depth stays trivially
/// bounded on pathological input.
pub const DEFAULT_MAX_DEPTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Containers nested at this depth or deeper are replaced by the
    /// bounded-depth marker instead of being descended into. The check runs
    /// before each descent, so this also bounds native recursion depth.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
