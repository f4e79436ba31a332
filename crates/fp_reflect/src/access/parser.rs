use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use crate::access::PathStep;

// -----------------------------------------------------------------------------
// Simple dialect

/// Splits a simple path on `.`, skipping empty segments.
///
/// ```
/// use fp_reflect::parse_path;
///
/// assert_eq!(parse_path("address.city"), ["address", "city"]);
/// assert_eq!(parse_path(".a..b."), ["a", "b"]);
/// assert!(parse_path("").is_empty());
/// ```
pub fn parse_path(path: &str) -> Vec<String> {
    segments(path).map(String::from).collect()
}

/// The simple dialect as field steps borrowing from `path`.
pub(crate) fn simple_steps(path: &str) -> Vec<PathStep<'_>> {
    segments(path).map(PathStep::from).collect()
}

#[inline]
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('.').filter(|segment| !segment.is_empty())
}

// -----------------------------------------------------------------------------
// Enhanced dialect

/// Parses a path with field names and `[n]` indices, such as `lists[1].items[0].name`.
///
/// The parser never fails. Malformed pieces are dropped:
///
/// - an index that is not a non-negative integer (`[abc]`, `[-1]`, `[]`);
/// - an index left open at the end of the input (`items[3`);
/// - a `]` with no matching `[`.
///
/// An index is read like `strtoull`: leading whitespace and digits, anything
/// after the digits ignored, so `[ 2x]` is index 2.
///
/// ```
/// use fp_reflect::{parse_path_enhanced, PathStep};
///
/// let steps = parse_path_enhanced("items[2].value");
/// assert_eq!(steps, [
///     PathStep::Field("items".into()),
///     PathStep::Index(2),
///     PathStep::Field("value".into()),
/// ]);
///
/// assert_eq!(parse_path_enhanced("items[abc]"), [PathStep::Field("items".into())]);
/// ```
pub fn parse_path_enhanced(path: &str) -> Vec<PathStep<'_>> {
    let mut steps = Vec::new();
    let mut field = PendingField::Empty;
    // Start of the index text while inside brackets.
    let mut index_start: Option<usize> = None;

    for (at, ch) in path.char_indices() {
        match ch {
            '[' => {
                field.flush(path, &mut steps);
                index_start = Some(at + 1);
            }
            ']' => {
                if let Some(start) = index_start.take()
                    && let Some(index) = parse_index(&path[start..at])
                {
                    steps.push(PathStep::Index(index));
                }
            }
            _ if index_start.is_some() => {}
            '.' => field.flush(path, &mut steps),
            _ => field.push(path, at, ch),
        }
    }

    field.flush(path, &mut steps);
    steps
}

/// Reads an index the way `strtoull` does, rejecting negative and
/// overflowing values.
fn parse_index(text: &str) -> Option<usize> {
    let text = text.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);
    let end = text
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());
    if end == 0 {
        return None;
    }
    text[..end].parse().ok()
}

/// The field name being scanned. Borrows from the path unless a dropped
/// character splits it.
enum PendingField {
    Empty,
    Span(usize, usize),
    Owned(String),
}

impl PendingField {
    fn push(&mut self, path: &str, at: usize, ch: char) {
        let next = at + ch.len_utf8();
        match self {
            Self::Empty => *self = Self::Span(at, next),
            Self::Span(_, end) if *end == at => *end = next,
            Self::Span(start, end) => {
                let mut owned = String::from(&path[*start..*end]);
                owned.push(ch);
                *self = Self::Owned(owned);
            }
            Self::Owned(owned) => owned.push(ch),
        }
    }

    fn flush<'a>(&mut self, path: &'a str, steps: &mut Vec<PathStep<'a>>) {
        match core::mem::replace(self, Self::Empty) {
            Self::Empty => {}
            Self::Span(start, end) => steps.push(PathStep::Field(Cow::Borrowed(&path[start..end]))),
            Self::Owned(owned) => steps.push(PathStep::Field(Cow::Owned(owned))),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    fn field(name: &str) -> PathStep<'_> {
        PathStep::Field(Cow::Borrowed(name))
    }

    #[test]
    fn simple_paths() {
        assert_eq!(parse_path("name"), ["name"]);
        assert_eq!(parse_path("a.b.c"), ["a", "b", "c"]);
        assert_eq!(parse_path("items[0].name"), ["items[0]", "name"]);
        assert!(parse_path("...").is_empty());
    }

    #[test]
    fn nested_indices() {
        assert_eq!(
            parse_path_enhanced("lists[1].items[0].name"),
            vec![field("lists"), PathStep::Index(1), field("items"), PathStep::Index(0), field("name")]
        );
        assert_eq!(
            parse_path_enhanced("grid[1][2]"),
            vec![field("grid"), PathStep::Index(1), PathStep::Index(2)]
        );
        assert_eq!(parse_path_enhanced("[3]"), vec![PathStep::Index(3)]);
    }

    #[test]
    fn malformed_pieces_are_dropped() {
        assert_eq!(parse_path_enhanced("items[abc]"), vec![field("items")]);
        assert_eq!(parse_path_enhanced("items[-1]"), vec![field("items")]);
        assert_eq!(parse_path_enhanced("items[]"), vec![field("items")]);
        assert_eq!(parse_path_enhanced("items[3"), vec![field("items")]);
        assert_eq!(parse_path_enhanced("items[99999999999999999999999]"), vec![field("items")]);
        assert!(parse_path_enhanced("").is_empty());
        assert!(parse_path_enhanced("..").is_empty());
    }

    #[test]
    fn index_prefixes() {
        assert_eq!(parse_path_enhanced("a[ 2x]"), vec![field("a"), PathStep::Index(2)]);
        assert_eq!(parse_path_enhanced("a[+4]"), vec![field("a"), PathStep::Index(4)]);
        // A dot inside brackets belongs to the index text.
        assert_eq!(parse_path_enhanced("a[1.5]"), vec![field("a"), PathStep::Index(1)]);
        // A second `[` restarts the index text.
        assert_eq!(parse_path_enhanced("a[x[7]"), vec![field("a"), PathStep::Index(7)]);
    }

    #[test]
    fn stray_bracket_joins_field() {
        let steps = parse_path_enhanced("ab]cd.e");
        assert_eq!(steps, vec![field("abcd"), field("e")]);
        assert!(matches!(steps[0], PathStep::Field(Cow::Owned(_))));
        assert!(matches!(steps[1], PathStep::Field(Cow::Borrowed(_))));
    }

    #[test]
    fn simple_steps_borrow() {
        let steps: Vec<_> = simple_steps("address.zip_code");
        assert_eq!(steps, vec![field("address"), field("zip_code")]);
    }
}
