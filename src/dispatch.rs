//! Prefix dispatcher (§4.3) and the recursive classification core shared
//! between the public entry point and the dot/nested-alias composers.

use tracing::instrument;

use crate::classes::is_starter;
use crate::compose::{arity_wrapper, call_wrapper, dot};
use crate::ident::ident_to_context;
use crate::reverse::{advance, ends_with_excluding, head, second, strip_trailing_spaces, Rest};
use crate::token::Collaborators;
use crate::ContextTag;

/// Strips trailing spaces and applies the prefix dispatcher. This is the
/// function the composers recurse into with `call_op = true`, and the one
/// the public entry point calls once, at the top, with `call_op = false`.
#[instrument(level = "trace", skip(collabs))]
pub(crate) fn classify_core(rest: Rest<'_>, call_op: bool, collabs: &dyn Collaborators) -> ContextTag {
    let (rest, spaces) = strip_trailing_spaces(rest);
    dispatch(rest, spaces, call_op, collabs)
}

fn dispatch(rest: Rest<'_>, spaces: usize, call_op: bool, collabs: &dyn Collaborators) -> ContextTag {
    // Rule 1.
    if rest.is_empty() {
        return ContextTag::Expr;
    }

    // Rules 2-4.
    if ends_with_excluding(rest, "=>", ':')
        || ends_with_excluding(rest, "->", ':')
        || ends_with_excluding(rest, "<<", '<')
    {
        return ContextTag::Expr;
    }

    let h = head(rest).expect("checked non-empty above");

    // Rules 5-6.
    if h == ':' {
        if rest.len() == 1 {
            return ContextTag::UnquotedAtom(String::new());
        }
        if second(rest) != Some(':') {
            return ContextTag::Expr;
        }
        // Falls through: "::" is resolved by the identifier scanner.
    }

    // Rules 7-8.
    if h == '.' {
        if rest.len() == 1 {
            return ContextTag::None;
        }
        let next = second(rest);
        if next != Some('.') && next != Some(':') {
            return dot(advance(rest), String::new(), collabs);
        }
        // Falls through: ".." / ".:" is resolved by the operator/identifier
        // scanners.
    }

    // Rule 9.
    if h == '(' {
        return call_wrapper(advance(rest), collabs);
    }

    // Rule 10.
    if h == '/' {
        return arity_wrapper(advance(rest), collabs);
    }

    // Rule 11.
    if is_starter(h) {
        return ContextTag::Expr;
    }

    // Rule 12.
    if spaces > 0 {
        return call_wrapper(rest, collabs);
    }

    // Rule 13.
    ident_to_context(rest, call_op, collabs)
}
