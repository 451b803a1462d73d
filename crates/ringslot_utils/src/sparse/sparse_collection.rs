use std::ops::{Index, IndexMut};

pub trait SparseCollection<K, V>: Index<K, Output = V> + IndexMut<K, Output = V> {
    /// Returns the number of elements in the collection
    fn len(&self) -> usize;

    /// Returns the total capacity of the sparse array
    fn sparse_len(&self) -> usize;

    /// Returns the fraction of the sparse array currently occupied
    fn occupancy(&self) -> f64 {
        if self.sparse_len() == 0 {
            return 0.0;
        }
        self.len() as f64 / self.sparse_len() as f64
    }
}
