//! Identifier scanner (§4.4) and the identifier-result → context mapping
//! (§4.6).

use tracing::trace;

use crate::classes::{is_non_ident, is_operator_char};
use crate::compose::{dot, nested_alias};
use crate::error::TokenizeError;
use crate::operator::scan_operator;
use crate::reverse::{advance, ends_with, head, Accumulator, Rest};
use crate::token::{Collaborators, IdentifierKind, IdentifierToken};
use crate::ContextTag;

/// Outcome of §4.4's walk, before the §4.6 table is applied.
enum Scan<'a> {
    MaybeOperator,
    None,
    ModuleAttribute(String),
    Found {
        kind: IdentifierKind,
        ascii_only: bool,
        remaining: Rest<'a>,
        acc: String,
        /// The trailing character consumed in step 1 was specifically
        /// `?`; this always forces `None` regardless of what the rest of
        /// the run would otherwise classify as (§4.6 "accumulator starts
        /// with `?`" row — resolved, see `DESIGN.md`, as "the very first
        /// character the scan consumed", not a string-prefix check on the
        /// final forward text, which a trailing `?` never satisfies).
        rejected_leading_question: bool,
    },
}

fn scan(rest: Rest<'_>, collabs: &dyn Collaborators) -> Scan<'_> {
    let mut cursor = rest;
    let mut acc = Accumulator::new();
    let mut rejected_leading_question = false;

    // Step 1.
    if let Some(c) = head(cursor) {
        if c == '?' || c == '!' {
            rejected_leading_question = c == '?';
            acc.push(c);
            cursor = advance(cursor);
        }
    }

    // Steps 2-4.
    match head(cursor) {
        Some(c) if is_operator_char(c) => return Scan::MaybeOperator,
        Some(c) if is_non_ident(c) => return Scan::None,
        None => return Scan::MaybeOperator,
        _ => {}
    }

    // Step 5.
    loop {
        match head(cursor) {
            Some(c) if is_non_ident(c) => break,
            Some(c) => {
                cursor = advance(cursor);
                acc.push(c);
            }
            None => break,
        }
    }
    let forward = acc.into_forward();

    // Step 6: the module-attribute path only applies when `@` ended up as
    // the leftmost consumed character, i.e. the whole run is `@`-prefixed.
    // An `@` consumed partway through (`x@hello`) falls through to step 7,
    // where the `has_at` extra rejects it.
    if forward.starts_with('@') {
        let name = &forward[1..];
        if name.is_empty() {
            return Scan::ModuleAttribute(String::new());
        }
        return match collabs.identifiers().tokenize(name) {
            IdentifierToken::Valid { .. } => Scan::ModuleAttribute(name.to_string()),
            IdentifierToken::Invalid => {
                trace!(name = %name, "module attribute body did not tokenize");
                Scan::None
            }
        };
    }

    // Step 7.
    match collabs.identifiers().tokenize(&forward) {
        IdentifierToken::Valid {
            kind,
            ascii_only,
            extras,
        } => {
            if extras.has_at && head(cursor) != Some(':') {
                trace!(acc = %forward, "stray @ outside module scope");
                return Scan::None;
            }
            Scan::Found {
                kind,
                ascii_only,
                remaining: cursor,
                acc: forward,
                rejected_leading_question,
            }
        }
        IdentifierToken::Invalid => {
            let err = TokenizeError::InvalidIdentifier(forward);
            trace!(error = %err, "discarding into None");
            Scan::None
        }
    }
}

/// §4.6: consumes the identifier scan and produces the final context tag.
pub(crate) fn ident_to_context(
    rest: Rest<'_>,
    call_op: bool,
    collabs: &dyn Collaborators,
) -> ContextTag {
    match scan(rest, collabs) {
        Scan::MaybeOperator => scan_operator(rest, call_op, collabs),
        Scan::None => ContextTag::None,
        Scan::ModuleAttribute(name) => ContextTag::ModuleAttribute(name),
        Scan::Found {
            kind,
            ascii_only,
            remaining,
            acc,
            rejected_leading_question,
        } => {
            if rejected_leading_question {
                return ContextTag::None;
            }

            if ends_with(remaining, "::") {
                return if kind == IdentifierKind::Alias && !ascii_only {
                    ContextTag::None
                } else {
                    match kind {
                        IdentifierKind::Alias => ContextTag::Alias(acc),
                        IdentifierKind::Identifier => ContextTag::LocalOrVar(acc),
                        IdentifierKind::Atom => ContextTag::None,
                    }
                };
            }

            if head(remaining) == Some(':') {
                return ContextTag::UnquotedAtom(acc);
            }

            if kind == IdentifierKind::Atom {
                return ContextTag::None;
            }

            if kind == IdentifierKind::Alias && !ascii_only {
                return ContextTag::None;
            }

            if ends_with(remaining, "..") {
                return match kind {
                    IdentifierKind::Alias => ContextTag::Alias(acc),
                    IdentifierKind::Identifier => ContextTag::LocalOrVar(acc),
                    IdentifierKind::Atom => unreachable!("excluded above"),
                };
            }

            if kind == IdentifierKind::Alias && head(remaining) == Some('.') {
                return nested_alias(advance(remaining), acc, collabs);
            }

            if kind == IdentifierKind::Identifier && head(remaining) == Some('.') {
                return dot(advance(remaining), acc, collabs);
            }

            if kind == IdentifierKind::Alias {
                return ContextTag::Alias(acc);
            }

            if call_op && crate::classes::TEXTUAL_OPS.contains(&acc.as_str()) {
                return ContextTag::Operator(acc);
            }
            ContextTag::LocalOrVar(acc)
        }
    }
}
