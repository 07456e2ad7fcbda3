//! Generic container types
//!
//! This module provides the crate's two containers:
//!
//! - **`GrowVec<T>`** - growable contiguous vector with doubling growth and
//!   comparator-driven lower-bound binary search
//! - **`SortedStrMap<V>`** - ordered string-keyed map composing two `GrowVec`s
//!   with a slot indirection between sorted entries and stable value storage

mod grow_vec;
mod sorted_map;

pub use grow_vec::GrowVec;
pub use sorted_map::{SortedStrMap, SortedStrMapIter};
