//! `$identifier` template substitution
//!
//! A left-to-right scanner with two modes: literal text, and symbol
//! consumption after a `$` trigger. Symbols follow the identifier grammar
//! `[A-Za-z_][A-Za-z0-9_]*` and are resolved against a list of
//! `(symbol, replacement)` pairs by linear lookup, first match wins.
//! Unresolved tokens pass through verbatim, trigger included.

use crate::error::Result;
use crate::string::StrBuilder;

const TRIGGER: u8 = b'$';

#[inline]
fn is_ident_head(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
fn is_ident_tail(b: u8) -> bool {
    is_ident_head(b) || b.is_ascii_digit()
}

fn lookup<'a>(bindings: &[(&'a str, &'a str)], symbol: &str) -> Option<&'a str> {
    bindings
        .iter()
        .find(|(name, _)| *name == symbol)
        .map(|(_, replacement)| *replacement)
}

/// Expand `$identifier` tokens in `src` against a binding list
///
/// Literal spans between tokens are buffered through a [`StrBuilder`] and the
/// trailing span after the last token is kept. A `$` not followed by an
/// identifier head is ordinary text. The byte that terminates a symbol is
/// rescanned, so adjacent tokens like `"$a$b"` both expand.
///
/// # Examples
///
/// ```rust
/// use veckit::expand_symbols;
///
/// let bindings = [("count", "2"), ("b4", "file.txt")];
/// let out = expand_symbols("echo -n $count >> $b4", &bindings)?;
/// assert_eq!(out, "echo -n 2 >> file.txt");
/// # Ok::<(), veckit::VeckitError>(())
/// ```
pub fn expand_symbols(src: &str, bindings: &[(&str, &str)]) -> Result<String> {
    let bytes = src.as_bytes();
    let mut out = StrBuilder::new();
    let mut lit_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == TRIGGER && i + 1 < bytes.len() && is_ident_head(bytes[i + 1]) {
            out.push_str(&src[lit_start..i])?;

            let sym_start = i + 1;
            let mut j = sym_start + 1;
            while j < bytes.len() && is_ident_tail(bytes[j]) {
                j += 1;
            }

            let symbol = &src[sym_start..j];
            match lookup(bindings, symbol) {
                Some(replacement) => out.push_str(replacement)?,
                // unmatched token passes through verbatim, `$` included
                None => out.push_str(&src[i..j])?,
            }

            lit_start = j;
            i = j;
        } else {
            i += 1;
        }
    }

    out.push_str(&src[lit_start..])?;
    Ok(out.into_string())
}
