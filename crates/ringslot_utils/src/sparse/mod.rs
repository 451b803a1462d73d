pub mod bounded_slot_collection;
pub mod iter;
pub mod sparse_collection;
