//! # Veckit: Growable Vectors, Sorted Flat Maps, and Text Utilities
//!
//! This crate provides a small generic-container toolkit: a growable,
//! type-parametric array and an ordered, string-keyed map built on top of it
//! via binary search, plus a handful of text-processing helpers that consume
//! the containers.
//!
//! ## Key Features
//!
//! - **`GrowVec<T>`**: contiguous growable vector with doubling growth,
//!   positional insert, and comparator-driven lower-bound binary search
//! - **`SortedStrMap<V>`**: sorted flat map from owned string keys to values,
//!   with stable value slots decoupled from sorted rank
//! - **`StrBuilder`**: append-only fragment concatenator
//! - **Template substitution**: `$identifier` expansion over a binding list
//! - **Shell capture**: subprocess stdout collection in bounded chunks
//! - **Regex rewrite**: backreference-aware replacement with distinct
//!   compile and arity errors
//! - **Explicit failure model**: allocation failure and out-of-range access
//!   are reported, never silent; containers stay valid after any error
//!
//! ## Quick Start
//!
//! ```rust
//! use veckit::{GrowVec, SortedStrMap, StrBuilder, expand_symbols};
//!
//! // Growable vector with explicit allocation results
//! let mut vec = GrowVec::new();
//! vec.push(42)?;
//! vec.sorted_insert(7)?;
//! assert_eq!(vec.as_slice(), &[7, 42]);
//!
//! // Ordered string-keyed map: sorted ranks, stable value slots
//! let mut map = SortedStrMap::new();
//! map.insert("b", 2)?;
//! map.insert("a", 1)?;
//! assert_eq!(map.key_at(0)?, "a");
//! assert_eq!(*map.get_by_rank(1)?, 2);
//!
//! // Fragment-based string building
//! let mut b = StrBuilder::new();
//! b.push_str("sorted: ")?;
//! b.push_str("a, b")?;
//! assert_eq!(b.into_string(), "sorted: a, b");
//!
//! // Template substitution
//! let out = expand_symbols("run $cmd", &[("cmd", "make")])?;
//! assert_eq!(out, "run make");
//! # Ok::<(), veckit::VeckitError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod containers;
pub mod error;
pub mod string;
pub mod system;

// Re-export core types
pub use containers::{GrowVec, SortedStrMap, SortedStrMapIter};
pub use error::{Result, VeckitError};
pub use string::{expand_symbols, rewrite_all, StrBuilder};
pub use system::capture_stdout;
