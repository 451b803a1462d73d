use std::rc::Rc;
use std::sync::Arc;

/// Identity comparison for items stored in a bounded slot collection.
///
/// Two items are the same item only if they are the same allocation;
/// equal-by-value items at different addresses stay distinct.
pub trait Identity {
    fn same_identity(&self, other: &Self) -> bool;
}

impl<U: ?Sized> Identity for Rc<U> {
    #[inline(always)]
    fn same_identity(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<U: ?Sized> Identity for Arc<U> {
    #[inline(always)]
    fn same_identity(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<U: ?Sized> Identity for &U {
    #[inline(always)]
    fn same_identity(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}
