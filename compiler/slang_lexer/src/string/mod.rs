//! String literal scanning, interpolation splitting and escape cooking.
//!
//! A literal may contain `\( expr )` interpolations. Interpolated code may
//! itself contain parentheses and nested string literals, so the scanner
//! tracks paren depth and recurses into inner strings.

use std::ops::Range;

/// Length of the escaped character starting at `rest`, plus its backslash.
#[inline]
fn escape_len(rest: &str) -> usize {
    1 + rest.chars().next().map_or(0, char::len_utf8)
}

/// Scan the rest of a string literal after its opening quote.
///
/// Returns the byte length up to and including the closing quote, or `None`
/// when the input ends first.
pub(crate) fn scan_string_tail(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => return Some(i + 1),
            b'\\' if bytes.get(i + 1) == Some(&b'(') => {
                i += 2;
                i += scan_interpolation(&rest[i..])?;
            }
            b'\\' => i += escape_len(&rest[i + 1..]),
            _ => i += 1,
        }
    }
    None
}

/// Scan interpolated code after `\(`; returns the length including the
/// closing `)`.
fn scan_interpolation(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'(' => depth += 1,
            b')' if depth == 0 => return Some(i + 1),
            b')' => depth -= 1,
            b'"' => {
                i += 1 + scan_string_tail(&rest[i + 1..])?;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// A complete string literal split at its interpolations.
///
/// `texts.len() == codes.len() + 1`: the literal alternates cooked text and
/// code, starting and ending with (possibly empty) text. Ranges and offsets
/// are relative to the opening quote.
#[derive(Debug, PartialEq)]
pub(crate) struct SplitLiteral<'a> {
    pub texts: Vec<(String, Range<usize>)>,
    pub codes: Vec<(&'a str, usize)>,
}

impl SplitLiteral<'_> {
    pub fn is_plain(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Split a scanned literal (quotes included).
pub(crate) fn split_literal(literal: &str) -> SplitLiteral<'_> {
    let body_end = literal.len().saturating_sub(1).max(1);
    let bytes = literal.as_bytes();
    let mut texts = Vec::new();
    let mut codes = Vec::new();

    // `text_start` is where the current text run begins; `span_start`
    // additionally covers the `)` that closed the previous interpolation.
    let mut text_start = 1;
    let mut span_start = 0;
    let mut i = 1;
    while i < body_end {
        match bytes[i] {
            b'\\' if bytes.get(i + 1) == Some(&b'(') => {
                let code_start = i + 2;
                let code_len = scan_interpolation(&literal[code_start..])
                    .unwrap_or(body_end - code_start + 1);
                texts.push((cook_escapes(&literal[text_start..i]), span_start..code_start));
                let code_end = (code_start + code_len - 1).min(body_end);
                codes.push((&literal[code_start..code_end], code_start));
                span_start = code_end;
                i = (code_end + 1).min(body_end);
                text_start = i;
            }
            b'\\' => i += escape_len(&literal[i + 1..]),
            _ => i += 1,
        }
    }
    let tail_end = body_end.min(literal.len());
    texts.push((
        cook_escapes(&literal[text_start.min(tail_end)..tail_end]),
        span_start..literal.len(),
    ));
    SplitLiteral { texts, codes }
}

/// Resolve escapes in literal text.
///
/// Known escapes: `\n` `\t` `\r` `\0` `\\` `\"`. Unknown escapes keep their
/// backslash.
pub(crate) fn cook_escapes(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_owned();
    }

    let mut cooked = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            cooked.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => cooked.push('\n'),
            Some('t') => cooked.push('\t'),
            Some('r') => cooked.push('\r'),
            Some('0') => cooked.push('\0'),
            Some('\\') => cooked.push('\\'),
            Some('"') => cooked.push('"'),
            Some(other) => {
                cooked.push('\\');
                cooked.push(other);
            }
            None => cooked.push('\\'),
        }
    }
    cooked
}
