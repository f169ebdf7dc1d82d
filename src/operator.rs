//! Operator scanner (§4.5).

use tracing::trace;

use crate::classes::{is_operator_char, INCOMPLETE_OPS};
use crate::compose::dot;
use crate::error::TokenizeError;
use crate::reverse::{advance, head, Accumulator, Rest};
use crate::token::{Collaborators, LexToken};
use crate::ContextTag;

/// Walks a run of `OPERATORS` characters and validates the result via the
/// Expression tokenizer and Operator categorizer collaborators.
pub(crate) fn scan_operator(rest: Rest<'_>, call_op: bool, collabs: &dyn Collaborators) -> ContextTag {
    let mut cursor = rest;
    let mut acc = Accumulator::new();
    while let Some(c) = head(cursor) {
        if !is_operator_char(c) {
            break;
        }
        cursor = advance(cursor);
        acc.push(c);
    }
    let forward = acc.into_forward();

    if INCOMPLETE_OPS.contains(&forward.as_str()) {
        return if call_op {
            trace!(op = %forward, "incomplete operator rejected in call position");
            ContextTag::None
        } else {
            ContextTag::Operator(forward)
        };
    }

    if let Some(tail) = forward.strip_prefix('.') {
        if INCOMPLETE_OPS.contains(&tail) {
            return if call_op {
                trace!(op = %forward, "dotted incomplete operator rejected in call position");
                ContextTag::None
            } else {
                dot(cursor, tail.to_string(), collabs)
            };
        }
    }

    let tokens = collabs.expressions().tokenize(&forward);
    let cat = collabs.categorizer();
    match tokens.as_slice() {
        [LexToken::Atom(text)] => ContextTag::UnquotedAtom(text.clone()),
        [LexToken::Dot, LexToken::Op(text)] if cat.is_unary(text) || cat.is_binary(text) => {
            dot(cursor, text.clone(), collabs)
        }
        [LexToken::Op(text)] if cat.is_unary(text) || cat.is_binary(text) => {
            ContextTag::Operator(text.clone())
        }
        _ => {
            let err = TokenizeError::NotRecognized(forward);
            trace!(error = %err, "discarding into None");
            ContextTag::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::DefaultCollaborators;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn plain_operator() {
        let line = chars("+");
        assert_eq!(
            scan_operator(&line, false, &DefaultCollaborators),
            ContextTag::Operator("+".to_string())
        );
    }

    #[test]
    fn incomplete_operator_outside_call_position() {
        let line = chars("^^");
        assert_eq!(
            scan_operator(&line, false, &DefaultCollaborators),
            ContextTag::Operator("^^".to_string())
        );
        assert_eq!(
            scan_operator(&line, true, &DefaultCollaborators),
            ContextTag::None
        );
    }
}
