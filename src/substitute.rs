use std::borrow::Cow;

use crate::context::ValueProvider;
use crate::scanner::{Scanner, Token};

/// Replace every resolvable `{{name}}` occurrence with its value.
///
/// One left-to-right pass over the token stream: spans never overlap, so the
/// result is independent of any per-name ordering, and substituted values
/// are never re-scanned. Names that resolve to nothing (or to the empty
/// string) keep their placeholder text unchanged; names in the provider
/// with no occurrence in the template are ignored.
///
/// Returns `Cow::Borrowed` when nothing substituted (zero-copy), or
/// `Cow::Owned` when the string was modified.
pub fn substitute<'a, P: ValueProvider + ?Sized>(template: &'a str, values: &P) -> Cow<'a, str> {
    let mut scanner = Scanner::new(template);
    let mut result: Option<String> = None;

    while let Some((token, range)) = scanner.scan_next() {
        match token {
            Token::Literal(text) => {
                if let Some(res) = &mut result {
                    res.push_str(text);
                }
            }
            Token::Variable { name } => {
                match values.resolved(name) {
                    Some(value) => {
                        // First substitution: switch to owned, seeded with
                        // everything before this span.
                        let res = result.get_or_insert_with(|| {
                            let mut s = String::with_capacity(template.len() + 16);
                            s.push_str(&template[..range.start]);
                            s
                        });
                        res.push_str(value);
                    }
                    None => {
                        if let Some(res) = &mut result {
                            res.push_str(&template[range]);
                        }
                    }
                }
            }
        }
    }

    match result {
        Some(s) => Cow::Owned(s),
        None => Cow::Borrowed(template),
    }
}
