/// An internal slot index paired with the external index it resolved to.
///
/// The collection memoizes the last pair it produced so that ascending
/// lookups can resume scanning from it instead of from slot 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexMap {
    internal: usize,
    external: usize,
}

impl IndexMap {
    #[inline(always)]
    pub fn new(internal: usize, external: usize) -> Self {
        debug_assert!(external <= internal, "external index can never exceed internal index");
        Self { internal, external }
    }

    #[inline(always)]
    pub fn internal(&self) -> usize {
        self.internal
    }

    #[inline(always)]
    pub fn external(&self) -> usize {
        self.external
    }

    /// Whether a scan for `external` may resume from this pair
    #[inline(always)]
    pub fn precedes(&self, external: usize) -> bool {
        self.external <= external
    }
}
