use std::iter::FusedIterator;

/// Borrowing iterator over the occupied slots of a
/// [`BoundedSlotCollection`](super::bounded_slot_collection::BoundedSlotCollection),
/// in ascending internal index order.
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    cursor: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    #[inline(always)]
    pub(crate) fn new(slots: &'a [Option<T>], count: usize) -> Self {
        Self {
            slots,
            cursor: 0,
            remaining: count,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.slots.get(self.cursor) {
            self.cursor += 1;
            if let Some(item) = slot {
                self.remaining = self.remaining.saturating_sub(1);
                return Some(item);
            }
        }
        self.remaining = 0;
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator returned by `BoundedSlotCollection::into_iter`
pub struct IntoIter<T> {
    inner: std::iter::Flatten<std::vec::IntoIter<Option<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(slots: Box<[Option<T>]>, count: usize) -> Self {
        Self {
            inner: slots.into_vec().into_iter().flatten(),
            remaining: count,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next();
        if item.is_some() {
            self.remaining = self.remaining.saturating_sub(1);
        }
        item
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_empty_slots() {
        let slots = [None, Some(1), None, None, Some(2), Some(3), None];
        let iter = Iter::new(&slots, 3);
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn exact_size_tracks_progress() {
        let slots = [Some('a'), None, Some('b')];
        let mut iter = Iter::new(&slots, 2);
        assert_eq!(iter.next(), Some(&'a'));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&'b'));
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn clone_restarts_from_same_position() {
        let slots = [Some(1), Some(2), None, Some(3)];
        let mut iter = Iter::new(&slots, 3);
        iter.next();
        let rest: Vec<_> = iter.clone().collect();
        assert_eq!(rest, vec![&2, &3]);
        assert_eq!(iter.collect::<Vec<_>>(), rest);
    }

    #[test]
    fn empty_storage_yields_nothing() {
        let slots: [Option<u8>; 4] = [None; 4];
        assert_eq!(Iter::new(&slots, 0).next(), None);
    }

    #[test]
    fn into_iter_moves_items_out() {
        let slots: Box<[Option<String>]> = vec![None, Some("x".to_string()), Some("y".to_string())].into_boxed_slice();
        let iter = IntoIter::new(slots, 2);
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.collect::<Vec<_>>(), vec!["x".to_string(), "y".to_string()]);
    }
}
