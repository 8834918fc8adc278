//! Range endpoint classification.

use braces_syntax::SyntaxKind::{self, CHAR_RANGE, INTEGER_RANGE};
use braces_syntax::{ParseFlags, RangeData};

struct Bounds {
    kind: SyntaxKind,
    start: i64,
    end: i64,
    width: usize,
}

/// Builds the payload for `{start..end..step}` or returns `None` if the
/// endpoints do not form a range.
pub(crate) fn build(
    start: &[u8],
    end: &[u8],
    step: i64,
    flags: ParseFlags,
) -> Option<(SyntaxKind, RangeData)> {
    let any_char = flags.contains(ParseFlags::ANY_CHAR_RANGE);

    let bounds = single_bytes(start, end, any_char)
        .or_else(|| integers(start, end))
        .or_else(|| if any_char { chars(start, end) } else { None })?;

    let data = RangeData::new(bounds.start, bounds.end, step, bounds.width)?;
    Some((bounds.kind, data))
}

/// Plain optionally signed decimal integer.
pub(crate) fn parse_int(text: &[u8]) -> Option<i64> {
    std::str::from_utf8(text).ok()?.parse().ok()
}

fn single_bytes(start: &[u8], end: &[u8], any_char: bool) -> Option<Bounds> {
    let (&[s], &[e]) = (start, end) else {
        return None;
    };

    if s.is_ascii_digit() && e.is_ascii_digit() {
        return Some(Bounds {
            kind: INTEGER_RANGE,
            start: i64::from(s - b'0'),
            end: i64::from(e - b'0'),
            width: 0,
        });
    }

    let same_case = (s.is_ascii_uppercase() && e.is_ascii_uppercase())
        || (s.is_ascii_lowercase() && e.is_ascii_lowercase());
    if !same_case && !(any_char && s.is_ascii() && e.is_ascii()) {
        return None;
    }

    Some(Bounds { kind: CHAR_RANGE, start: i64::from(s), end: i64::from(e), width: 0 })
}

fn integers(start: &[u8], end: &[u8]) -> Option<Bounds> {
    let (first, last) = (parse_int(start)?, parse_int(end)?);
    let width = [start, end]
        .into_iter()
        .filter(|text| is_zero_padded(text))
        .map(<[u8]>::len)
        .max()
        .unwrap_or(0);

    Some(Bounds { kind: INTEGER_RANGE, start: first, end: last, width })
}

fn is_zero_padded(text: &[u8]) -> bool {
    matches!(text, [b'0', _, ..] | [b'-', b'0', ..])
}

fn chars(start: &[u8], end: &[u8]) -> Option<Bounds> {
    let (first, last) = (single_char(start)?, single_char(end)?);
    Some(Bounds { kind: CHAR_RANGE, start: first.into(), end: last.into(), width: 0 })
}

fn single_char(text: &[u8]) -> Option<u32> {
    let mut chars = std::str::from_utf8(text).ok()?.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch.into()),
        _ => None,
    }
}
