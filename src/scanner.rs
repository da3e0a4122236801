use std::collections::HashSet;
use std::ops::Range;

use memchr::memmem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Literal(&'a str),
    Variable {
        /// Text between the delimiters, trimmed of surrounding whitespace.
        name: &'a str,
    },
}

/// One `{{...}}` occurrence in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReference<'a> {
    pub name: &'a str,
    /// Byte offset of the opening `{{`.
    pub start: usize,
    /// Byte length of the full `{{...}}` span.
    pub len: usize,
}

#[derive(Debug)]
pub struct Scanner<'a> {
    source: &'a str,
    byte_idx: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, byte_idx: 0 }
    }

    pub fn scan_next(&mut self) -> Option<(Token<'a>, Range<usize>)> {
        if self.byte_idx >= self.source.len() {
            return None;
        }

        let start = self.byte_idx;
        let bytes = self.source.as_bytes();

        if let Some(p) = memmem::find(&bytes[start..], b"{{") {
            let open = start + p;

            // The matching close is the next `}}` after the opener. No
            // nesting, no escaping. A `{{` with no close is ordinary text,
            // and so is everything after it (no later `}}` exists either).
            if let Some(q) = memmem::find(&bytes[open + 2..], b"}}") {
                let close = open + 2 + q;

                // Accumulated text before the opener goes out as a Literal
                // first; the next call picks the variable back up.
                if open > start {
                    self.byte_idx = open;
                    return Some((Token::Literal(&self.source[start..open]), start..open));
                }

                let end = close + 2;
                self.byte_idx = end;
                let name = self.source[open + 2..close].trim();
                return Some((Token::Variable { name }, open..end));
            }
        }

        self.byte_idx = self.source.len();
        let text = &self.source[start..];
        Some((Token::Literal(text), start..self.source.len()))
    }
}

/// Every variable occurrence in order. Repeated names produce repeated
/// entries; deduplication happens in [`unique_names`].
pub fn extract_variables(template: &str) -> Vec<VariableReference<'_>> {
    let mut scanner = Scanner::new(template);
    let mut refs = Vec::new();

    while let Some((token, range)) = scanner.scan_next() {
        if let Token::Variable { name } = token {
            refs.push(VariableReference {
                name,
                start: range.start,
                len: range.len(),
            });
        }
    }

    refs
}

/// Distinct variable names in first-appearance order.
pub fn unique_names(template: &str) -> Vec<&str> {
    let mut scanner = Scanner::new(template);
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    while let Some((token, _)) = scanner.scan_next() {
        if let Token::Variable { name } = token {
            if seen.insert(name) {
                names.push(name);
            }
        }
    }

    names
}
