//! Small utility library built around [`BoundedSlotCollection`], a
//! fixed-capacity ring of slots that overwrites its oldest slot when full and
//! exposes the occupied slots through a dense external index.
//!
//! Also carries an [`Angle`] value type and a few numeric helpers in [`math`].

pub mod config;
pub mod error;
pub mod identifiers;
pub mod math;
pub mod sparse;

pub use config::{CollectionConfig, OverflowPolicy};
pub use error::{CollectionError, ErrorKind, Result};
pub use identifiers::identity::Identity;
pub use math::angle::Angle;
pub use sparse::bounded_slot_collection::BoundedSlotCollection;
pub use sparse::sparse_collection::SparseCollection;
