//! String collation used for title and filename ordering.
//!
//! Two orders:
//! - `locale_cmp`: case-insensitive first, lowercase before uppercase on ties
//! - `natural_cmp`: like `locale_cmp`, but runs of ASCII digits compare by
//!   numeric value, so "file2" < "file10"
//!
//! Both are total orders, safe to hand to `sort_by`.
//!
//! `natural_cmp` splits each string into digit and non-digit runs and
//! compares them pairwise:
//! - digit run vs digit run: numeric value, then fewer leading zeros first
//! - digit run vs text run: the digit run sorts first
//! - text run vs text run: lowercased code points, so punctuation is plain
//!   text (`_` is U+005F: after `0-9`, before `a-z`)
//! - a string that runs out of runs first sorts first
//!
//! Punctuation is not given ICU's "before digits" weight. A run boundary
//! decides before the punctuation is reached, so "video1" < "video_1",
//! which is the reverse of `localeCompare` in a browser.

use std::cmp::Ordering;

/// Case-insensitive comparison with a deterministic case tiebreak
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(fold(b))
        .then_with(|| case_cmp(a, b))
        .then_with(|| a.cmp(b))
}

/// Numeric-aware comparison ("natural order")
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);

    loop {
        let ord = match (left.next(), right.next()) {
            (None, None) => break,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Chunk::Digits(x)), Some(Chunk::Digits(y))) => numeric_cmp(x, y),
            (Some(Chunk::Digits(_)), Some(Chunk::Text(_))) => Ordering::Less,
            (Some(Chunk::Text(_)), Some(Chunk::Digits(_))) => Ordering::Greater,
            (Some(Chunk::Text(x)), Some(Chunk::Text(y))) => fold(x).cmp(fold(y)),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    // Equal up to case and leading zeros
    locale_cmp(a, b)
}

fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn case_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(char::is_uppercase)
        .cmp(b.chars().map(char::is_uppercase))
}

/// Compare two digit runs by value without parsing (runs may be arbitrarily long)
fn numeric_cmp(x: &str, y: &str) -> Ordering {
    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

/// Splits a string into alternating digit / non-digit runs
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());

        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if digits { Chunk::Digits(run) } else { Chunk::Text(run) })
    }
}
