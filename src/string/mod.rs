//! String building and text-processing utilities
//!
//! - **`StrBuilder`** - append-only fragment concatenator backed by `GrowVec`
//! - **`expand_symbols`** - `$identifier` template substitution over a
//!   binding list
//! - **`rewrite_all`** - regex replacement honoring numbered backreferences

mod builder;
mod rewrite;
mod template;

pub use builder::StrBuilder;
pub use rewrite::rewrite_all;
pub use template::expand_symbols;
