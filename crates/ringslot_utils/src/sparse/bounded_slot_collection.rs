use std::cell::Cell;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::config::OverflowPolicy;
use crate::error::{CollectionError, InvalidArgument, InvalidState, Operation, Result};
use crate::identifiers::identity::Identity;
use crate::identifiers::index_map::IndexMap;
use super::iter::{IntoIter, Iter};
use super::sparse_collection::SparseCollection;

/// Fixed-capacity collection that stores items sparsely in a ring of slots
/// and exposes them through a dense, zero-based external index.
///
/// External indices enumerate the occupied slots in ascending internal
/// order, so they say nothing about insertion recency. When the collection is
/// full and the policy is [`OverflowPolicy::Overwrite`], `add` replaces the
/// slot under the insertion cursor, which is the slot least recently written
/// by `add`.
///
/// Not thread-safe: lookups update an internal cache through a [`Cell`].
#[derive(Clone)]
pub struct BoundedSlotCollection<T> {
    slots: Box<[Option<T>]>,

    // Where the next free-slot scan starts. Advances by one on every add.
    insertion_cursor: usize,

    overflow: OverflowPolicy,

    count: usize,

    // Last external -> internal resolution. Cleared whenever `count` may change.
    index_cache: Cell<Option<IndexMap>>,
}

impl<T> BoundedSlotCollection<T> {
    /// Creates an empty collection with `capacity` slots
    pub fn new(capacity: usize, overflow: OverflowPolicy) -> Result<Self> {
        if capacity == 0 {
            return Err(InvalidArgument::ZeroCapacity.into());
        }

        Ok(Self {
            slots: (0..capacity).map(|_| None).collect(),
            insertion_cursor: 0,
            overflow,
            count: 0,
            index_cache: Cell::new(None),
        })
    }

    pub fn with_reject_when_full(capacity: usize, reject_when_full: bool) -> Result<Self> {
        Self::new(capacity, OverflowPolicy::from_reject_when_full(reject_when_full))
    }

    /// Number of occupied slots
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    #[inline(always)]
    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Adds an item to the collection.
    ///
    /// The item lands in the first empty slot found scanning circularly from
    /// the insertion cursor, so it is not necessarily appended at the end.
    /// If there is no empty slot, the item under the cursor is dropped and
    /// replaced. The cursor advances by one whichever slot was used.
    ///
    /// # Errors
    ///
    /// * `InvalidState` if the collection is full and the policy is `Reject`
    /// * `InvalidArgument` if `item` is `None`
    pub fn add(&mut self, item: impl Into<Option<T>>) -> Result<()> {
        if self.is_full() && self.overflow.rejects_when_full() {
            tracing::debug!(capacity = self.capacity(), "add rejected: collection is full");
            return Err(InvalidState::Full {
                capacity: self.capacity(),
            }
            .into());
        }

        let item = present(item.into())?;

        let capacity = self.capacity();
        let target = (0..capacity)
            .map(|offset| (self.insertion_cursor + offset) % capacity)
            .find(|&idx| self.slots[idx].is_none())
            .unwrap_or(self.insertion_cursor);

        if self.slots[target].replace(item).is_some() {
            tracing::trace!(slot = target, "overwrote oldest item");
        } else {
            self.count += 1;
        }

        self.invalidate_cache();
        self.insertion_cursor = (self.insertion_cursor + 1) % capacity;
        Ok(())
    }

    /// Returns the item at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let internal = self.external_to_internal(index)?;
        self.slots[internal].as_ref().ok_or(self.out_of_range(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let internal = self.external_to_internal(index)?;
        let err = self.out_of_range(index);
        self.slots[internal].as_mut().ok_or(err)
    }

    /// Replaces the item at `index` and returns the one it displaced.
    ///
    /// Occupancy does not change, so external indices stay valid.
    pub fn set(&mut self, index: usize, item: impl Into<Option<T>>) -> Result<T> {
        let item = present(item.into())?;
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, item))
    }

    /// Removes and returns the item at `index`.
    ///
    /// Every item after it shifts down by one external index.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let internal = self.external_to_internal(index)?;
        let item = self.slots[internal].take().ok_or(self.out_of_range(index))?;
        self.count -= 1;
        self.invalidate_cache();
        Ok(item)
    }

    /// Positional insertion is not offered: external indices follow slot
    /// occupancy, and there is no way to open a gap at a given position
    /// without relocating other items.
    pub fn insert_at(&mut self, _index: usize, _item: impl Into<Option<T>>) -> Result<()> {
        Err(CollectionError::NotSupported {
            operation: Operation::InsertAt,
        })
    }

    /// Empties every slot.
    ///
    /// The insertion cursor is left where it is, so overwrite order carries on
    /// from the same position once the collection fills up again.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.count = 0;
        self.invalidate_cache();
    }

    /// Iterates over the items in external index order
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots, self.count)
    }

    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.slots.iter_mut().flatten()
    }

    /// Copies the items out in external index order
    pub fn to_vec(&self) -> Vec<T>
    where T: Clone {
        self.iter().cloned().collect()
    }

    /// Resolves an external index to the internal slot holding it.
    ///
    /// Scans resume from the cached pair when it does not lie past the
    /// target; otherwise they start from slot 0.
    pub(crate) fn external_to_internal(&self, external: usize) -> Result<usize> {
        if external >= self.count {
            return Err(self.out_of_range(external));
        }

        if self.is_full() {
            return Ok(external);
        }

        let (start, mut seen) = match self.index_cache.get() {
            Some(cached) if cached.precedes(external) => (cached.internal(), cached.external()),
            Some(cached) => {
                tracing::trace!(cached = cached.external(), external, "index cache past target, full scan");
                (0, 0)
            }
            None => (0, 0),
        };

        // `seen` counts occupied slots strictly before `internal`
        for internal in start..self.slots.len() {
            if self.slots[internal].is_none() {
                continue;
            }
            if seen == external {
                self.index_cache.set(Some(IndexMap::new(internal, external)));
                return Ok(internal);
            }
            seen += 1;
        }

        Err(self.out_of_range(external))
    }

    /// Position of an occupied slot among all occupied slots
    pub(crate) fn internal_to_external(&self, internal: usize) -> usize {
        if self.is_full() {
            return internal;
        }

        self.slots[..=internal]
            .iter()
            .filter(|slot| slot.is_some())
            .count()
            .saturating_sub(1)
    }

    #[inline(always)]
    fn invalidate_cache(&self) {
        self.index_cache.set(None);
    }

    #[inline(always)]
    fn out_of_range(&self, index: usize) -> CollectionError {
        CollectionError::OutOfRange {
            index,
            count: self.count,
        }
    }
}

impl<T: Identity> BoundedSlotCollection<T> {
    /// Whether this exact item (by identity) is stored.
    pub fn contains<'a>(&self, item: impl Into<Option<&'a T>>) -> Result<bool>
    where T: 'a {
        let item = present(item.into())?;
        Ok(self.position(item).is_some())
    }

    /// Removes the item if it is stored. Returns `false` when it is not.
    pub fn remove<'a>(&mut self, item: impl Into<Option<&'a T>>) -> Result<bool>
    where T: 'a {
        let item = present(item.into())?;

        let Some(internal) = self.position(item) else {
            return Ok(false);
        };

        self.slots[internal] = None;
        self.count -= 1;
        self.invalidate_cache();
        Ok(true)
    }

    /// External index of the item, or `None` when it is not stored.
    pub fn index_of<'a>(&self, item: impl Into<Option<&'a T>>) -> Result<Option<usize>>
    where T: 'a {
        let item = present(item.into())?;
        Ok(self.position(item).map(|internal| self.internal_to_external(internal)))
    }

    fn position(&self, item: &T) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|stored| stored.same_identity(item)))
    }
}

#[inline(always)]
fn present<V>(item: Option<V>) -> Result<V> {
    item.ok_or(CollectionError::InvalidArgument(InvalidArgument::EmptyItem))
}

impl<T> Index<usize> for BoundedSlotCollection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T> IndexMut<usize> for BoundedSlotCollection<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T> SparseCollection<usize, T> for BoundedSlotCollection<T> {
    fn len(&self) -> usize {
        self.count
    }

    fn sparse_len(&self) -> usize {
        self.slots.len()
    }
}

impl<'a, T> IntoIterator for &'a BoundedSlotCollection<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for BoundedSlotCollection<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.slots, self.count)
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedSlotCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
