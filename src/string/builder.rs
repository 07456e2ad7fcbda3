//! StrBuilder: append-only fragment concatenator
//!
//! Fragments are owned copies stored in a [`GrowVec`]; nothing is joined
//! until the caller materializes the result, and the total length is summed
//! on demand rather than cached.

use crate::containers::GrowVec;
use crate::error::Result;

/// Append-only ordered sequence of owned string fragments
///
/// # Examples
///
/// ```rust
/// use veckit::StrBuilder;
///
/// let mut b = StrBuilder::new();
/// b.push_str("hello")?;
/// b.push_str(", ")?;
/// b.push_str("world")?;
/// assert_eq!(b.len(), 12);
/// assert_eq!(b.into_string(), "hello, world");
/// # Ok::<(), veckit::VeckitError>(())
/// ```
#[derive(Debug, Default)]
pub struct StrBuilder {
    fragments: GrowVec<Box<str>>,
}

impl StrBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            fragments: GrowVec::new(),
        }
    }

    /// Create a builder seeded with one fragment
    pub fn from_fragment(s: &str) -> Result<Self> {
        let mut builder = Self::new();
        builder.push_str(s)?;
        Ok(builder)
    }

    /// Append an owned copy of `s` as a new fragment
    pub fn push_str(&mut self, s: &str) -> Result<()> {
        self.fragments.push(s.into())
    }

    /// Total length in bytes, summed over fragments
    pub fn len(&self) -> usize {
        self.fragments.iter().map(|f| f.len()).sum()
    }

    /// Check whether the concatenation would be empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of fragments appended so far
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Concatenate the fragments without consuming the builder
    pub fn build(&self) -> String {
        let mut out = String::with_capacity(self.len());
        for fragment in self.fragments.iter() {
            out.push_str(fragment);
        }
        out
    }

    /// Concatenate the fragments, consuming the builder
    pub fn into_string(self) -> String {
        self.build()
    }
}
