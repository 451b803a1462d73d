use crate::error::{InvalidArgument, Result};
use crate::identifiers::identity::Identity;
use crate::sparse::bounded_slot_collection::BoundedSlotCollection;

/// What `add` does when every slot is occupied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OverflowPolicy {
    /// Replace the item at the insertion cursor, the least recently replaced slot.
    #[default]
    Overwrite,
    /// Refuse the item with an `InvalidState` error.
    Reject,
}

impl OverflowPolicy {
    #[inline(always)]
    pub fn from_reject_when_full(reject_when_full: bool) -> Self {
        if reject_when_full {
            OverflowPolicy::Reject
        } else {
            OverflowPolicy::Overwrite
        }
    }

    #[inline(always)]
    pub fn rejects_when_full(&self) -> bool {
        matches!(self, OverflowPolicy::Reject)
    }
}

/// Construction parameters for a [`BoundedSlotCollection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionConfig {
    /// Number of slots. Fixed for the lifetime of the collection.
    pub capacity: usize,

    pub overflow: OverflowPolicy,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            capacity: 16,
            overflow: OverflowPolicy::default(),
        }
    }
}

impl CollectionConfig {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn reject_when_full(self, reject: bool) -> Self {
        self.overflow(OverflowPolicy::from_reject_when_full(reject))
    }

    pub fn validate(self) -> Result<Self> {
        if self.capacity == 0 {
            return Err(InvalidArgument::ZeroCapacity.into());
        }
        Ok(self)
    }

    /// Validates the config and creates an empty collection from it.
    pub fn build<T: Identity>(&self) -> Result<BoundedSlotCollection<T>> {
        BoundedSlotCollection::new(self.capacity, self.overflow)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::error::{CollectionError, ErrorKind};

    #[test]
    fn default_overwrites() {
        let config = CollectionConfig::default();
        assert_eq!(config.capacity, 16);
        assert_eq!(config.overflow, OverflowPolicy::Overwrite);
        assert!(!config.overflow.rejects_when_full());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = CollectionConfig::new(0).validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = CollectionConfig::new(0).build::<Rc<u8>>().unwrap_err();
        assert_eq!(err, CollectionError::from(InvalidArgument::ZeroCapacity));
    }

    #[test]
    fn build_applies_settings() -> crate::error::Result<()> {
        let bsc = CollectionConfig::default().capacity(3).reject_when_full(true).build::<Rc<u8>>()?;
        assert_eq!(bsc.capacity(), 3);
        assert_eq!(bsc.overflow_policy(), OverflowPolicy::Reject);
        assert!(bsc.is_empty());
        Ok(())
    }
}
