use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::context::ValueProvider;
use crate::scanner::{Scanner, Token};

/// One run of preview text. Variable sites are tagged `substituted` whether
/// or not a value resolved, so the UI can highlight every placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Segment<'a> {
    pub text: Cow<'a, str>,
    pub substituted: bool,
}

/// Render a template into ordered segments for highlighted display.
///
/// Literal runs borrow from the template. A resolved variable contributes
/// its value; an unresolved one contributes its raw `{{...}}` span, original
/// whitespace included. Concatenating every segment's text in order yields
/// exactly what [`substitute`](crate::substitute) returns for the same
/// provider.
pub fn render_preview<'a, P: ValueProvider + ?Sized>(
    template: &'a str,
    values: &P,
) -> Vec<Segment<'a>> {
    let mut scanner = Scanner::new(template);
    let mut segments = Vec::new();

    while let Some((token, range)) = scanner.scan_next() {
        match token {
            Token::Literal(text) => segments.push(Segment {
                text: Cow::Borrowed(text),
                substituted: false,
            }),
            Token::Variable { name } => {
                let text = match values.resolved(name) {
                    Some(value) => Cow::Owned(value.to_string()),
                    None => Cow::Borrowed(&template[range]),
                };
                segments.push(Segment {
                    text,
                    substituted: true,
                });
            }
        }
    }

    segments
}
