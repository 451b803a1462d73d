pub mod identity;
pub mod index_map;
