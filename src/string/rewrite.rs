//! Regex rewriting with numbered backreferences
//!
//! Replaces non-overlapping matches left to right. The replacement template
//! may reference capture groups as `\1`..`\9`, and the number of
//! backreference occurrences must equal the pattern's capture-group count,
//! checked up front before any text is touched. Replaced text is never
//! rescanned: the search resumes after each substitution.

use crate::error::{Result, VeckitError};
use regex::Regex;

/// One piece of a parsed replacement template
enum Segment<'a> {
    Literal(&'a str),
    Group(usize),
}

/// Split a template into literal spans and `\1`..`\9` backreferences
///
/// `\\` produces a literal backslash; a backslash before anything else (or at
/// the end) stays literal text. Returns the segments and the backreference
/// occurrence count.
fn parse_template(template: &str) -> (Vec<Segment<'_>>, usize) {
    let bytes = template.as_bytes();
    let mut segments = Vec::new();
    let mut refs = 0;
    let mut lit_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 1 < bytes.len() {
            let next = bytes[i + 1];
            if (b'1'..=b'9').contains(&next) {
                if lit_start < i {
                    segments.push(Segment::Literal(&template[lit_start..i]));
                }
                segments.push(Segment::Group((next - b'0') as usize));
                refs += 1;
                i += 2;
                lit_start = i;
                continue;
            }
            if next == b'\\' {
                if lit_start < i {
                    segments.push(Segment::Literal(&template[lit_start..i]));
                }
                segments.push(Segment::Literal(&template[i..i + 1]));
                i += 2;
                lit_start = i;
                continue;
            }
        }
        i += 1;
    }

    if lit_start < bytes.len() {
        segments.push(Segment::Literal(&template[lit_start..]));
    }

    (segments, refs)
}

/// Replace every match of `pattern` in `text` using a backreference template
///
/// Returns the rewritten text and the number of replacements performed.
/// Fails with [`VeckitError::Pattern`] when the pattern does not compile and
/// with [`VeckitError::CaptureMismatch`] when the template's backreference
/// count differs from the pattern's capture-group count; the two failures are
/// distinguishable by variant.
///
/// # Examples
///
/// ```rust
/// use veckit::rewrite_all;
///
/// let (out, n) = rewrite_all("a-1 b-2", r"([a-z])-([0-9])", r"\2:\1")?;
/// assert_eq!(out, "1:a 2:b");
/// assert_eq!(n, 2);
/// # Ok::<(), veckit::VeckitError>(())
/// ```
pub fn rewrite_all(text: &str, pattern: &str, replacement: &str) -> Result<(String, usize)> {
    let re = Regex::new(pattern).map_err(|e| VeckitError::pattern(e.to_string()))?;
    let groups = re.captures_len() - 1;

    let (segments, refs) = parse_template(replacement);
    if refs != groups {
        return Err(VeckitError::capture_mismatch(groups, refs));
    }

    let mut out = String::with_capacity(text.len());
    let mut count = 0;
    let mut rest = text;

    while let Some(caps) = re.captures(rest) {
        let m = caps.get(0).expect("whole-match group always present");
        out.push_str(&rest[..m.start()]);

        for segment in &segments {
            match segment {
                Segment::Literal(s) => out.push_str(s),
                Segment::Group(k) => {
                    // a group that did not participate contributes nothing
                    if let Some(g) = caps.get(*k) {
                        out.push_str(g.as_str());
                    }
                }
            }
        }
        count += 1;

        if m.end() > m.start() {
            rest = &rest[m.end()..];
        } else {
            // empty match: carry one character over to guarantee progress
            match rest[m.end()..].chars().next() {
                Some(c) => {
                    out.push(c);
                    rest = &rest[m.end() + c.len_utf8()..];
                }
                None => {
                    rest = "";
                    break;
                }
            }
        }
    }

    out.push_str(rest);
    Ok((out, count))
}
