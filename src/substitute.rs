use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::config::{Strategy, TableKind};
use crate::table;

struct Index {
    map: HashMap<&'static str, &'static str>,
    // Longest pattern, in chars.
    max_chars: usize,
}

impl Index {
    fn build(entries: &'static [(&'static str, &'static str)]) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        let mut max_chars = 1;
        for (pattern, replacement) in entries {
            map.entry(*pattern).or_insert(*replacement);
            max_chars = max_chars.max(pattern.chars().count());
        }
        Index { map, max_chars }
    }
}

lazy_static! {
    static ref FULL_INDEX: Index = Index::build(table::FULL);
    static ref COMPACT_INDEX: Index = Index::build(table::COMPACT);
}

fn index_for(kind: TableKind) -> &'static Index {
    match kind {
        TableKind::Full => &FULL_INDEX,
        TableKind::Compact => &COMPACT_INDEX,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Substituter {
    pub table: TableKind,
    pub strategy: Strategy,
}

impl Substituter {
    pub fn new(table: TableKind, strategy: Strategy) -> Self {
        Substituter { table, strategy }
    }

    pub fn apply(&self, text: &str) -> String {
        match self.strategy {
            Strategy::Sequential => sequential(table::entries(self.table), text),
            Strategy::LongestMatch => longest_match(index_for(self.table), text),
        }
    }
}

fn sequential(entries: &[(&str, &str)], text: &str) -> String {
    let mut out = text.to_string();
    for (pattern, replacement) in entries {
        if out.contains(pattern) {
            out = out.replace(pattern, replacement);
        }
    }
    out
}

fn longest_match(index: &Index, text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut rest = text;

    'scan: while let Some(first) = rest.chars().next() {
        if first.is_ascii() {
            // No pattern starts with an ASCII char; copy the run in one go.
            let run = rest.find(|c: char| !c.is_ascii()).unwrap_or(rest.len());
            out.push_str(&rest[..run]);
            rest = &rest[run..];
            continue;
        }

        // Byte offsets of the next `max_chars` char boundaries.
        let ends: Vec<usize> = rest
            .char_indices()
            .skip(1)
            .map(|(i, _)| i)
            .chain(std::iter::once(rest.len()))
            .take(index.max_chars)
            .collect();

        for &end in ends.iter().rev() {
            if let Some(replacement) = index.map.get(&rest[..end]) {
                out.push_str(replacement);
                rest = &rest[end..];
                continue 'scan;
            }
        }

        out.push(first);
        rest = &rest[first.len_utf8()..];
    }

    out
}

/// Apply the full table with sequential passes.
pub fn substitute(text: &str) -> String {
    Substituter::default().apply(text)
}
