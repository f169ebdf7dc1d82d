#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::similar_names
)]
//! Cursor-context classification for incomplete source fragments of a
//! dynamic, expression-oriented language in the ML/Erlang family.
//!
//! Given the characters to the left of a cursor, [`classify`] answers
//! "what syntactic construct is the cursor currently inside" — an atom, a
//! nested alias path, a module attribute, a dotted member reference, an
//! operator — without building a full AST. See `DESIGN.md` for how this
//! reverse-scanning pipeline is put together.

pub mod error;
pub mod token;

mod classes;
mod compose;
mod dispatch;
mod ident;
mod line;
mod operator;
mod reverse;

use serde::{Deserialize, Serialize};

pub use token::{Collaborators, DefaultCollaborators};

/// The cursor-context classification result (§3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContextTag {
    /// Any expression may start here.
    Expr,
    /// No sensible completion.
    None,
    /// `:foo` prefix.
    UnquotedAtom(String),
    /// Capitalized namespace path, possibly dotted.
    Alias(String),
    /// `@name` prefix.
    ModuleAttribute(String),
    /// Lowercase identifier (variable or local call).
    LocalOrVar(String),
    /// Lowercase identifier followed by `/`.
    LocalArity(String),
    /// Lowercase identifier followed by `(` or space.
    LocalCall(String),
    /// Validated operator token.
    Operator(String),
    /// Operator followed by `/`.
    OperatorArity(String),
    /// Operator followed by `(` or space.
    OperatorCall(String),
    /// Member reference, `inside.tail`.
    Dot(InsideDot, String),
    /// Member reference followed by `/`.
    DotArity(InsideDot, String),
    /// Member reference followed by `(` or space.
    DotCall(InsideDot, String),
}

/// The left-hand side of a [`ContextTag::Dot`]/[`ContextTag::DotArity`]/
/// [`ContextTag::DotCall`]. Recursive: `a.b.c` is
/// `Dot(Dot(Var("a"), "b"), "c")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsideDot {
    Var(String),
    Alias(String),
    ModuleAttribute(String),
    UnquotedAtom(String),
    Dot(Box<InsideDot>, String),
}

/// Options accepted by [`classify`]. Currently carries only a collaborator
/// override; additional fields may be added without breaking callers that
/// construct this via [`ClassifyOptions::default`] or `..Default::default()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClassifyOptions<'a> {
    /// Overrides the default identifier/expression/operator collaborators
    /// (§4.9). `None` uses [`DefaultCollaborators`].
    pub collaborators: Option<&'a dyn Collaborators>,
}

/// Classifies what syntactic construct the cursor is inside, given the
/// text to its left.
///
/// Only the last line of `fragment` is consulted (§4.1); multi-line state
/// such as open strings, sigils, or heredocs is out of scope (§1
/// Non-goals).
#[tracing::instrument(level = "trace", skip(fragment, options))]
pub fn classify(fragment: impl AsRef<str>, options: ClassifyOptions<'_>) -> ContextTag {
    let text = fragment.as_ref();
    tracing::trace!(fragment = %text);
    let last = line::last_line(text);
    let chars: Vec<char> = last.chars().collect();

    const DEFAULT: DefaultCollaborators = DefaultCollaborators;
    let collabs: &dyn Collaborators = options.collaborators.unwrap_or(&DEFAULT);
    dispatch::classify_core(&chars, false, collabs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_newline_is_expr() {
        assert_eq!(classify("foo\n", ClassifyOptions::default()), ContextTag::Expr);
    }

    #[test]
    fn multiline_only_consults_the_last_line() {
        let a = classify("defmodule Foo do\n  hello", ClassifyOptions::default());
        let b = classify("  hello", ClassifyOptions::default());
        assert_eq!(a, b);
    }

    #[test]
    fn empty_fragment_is_expr() {
        assert_eq!(classify("", ClassifyOptions::default()), ContextTag::Expr);
    }

    #[test]
    fn dotted_alias() {
        assert_eq!(
            classify("Hello.Wor", ClassifyOptions::default()),
            ContextTag::Alias("Hello.Wor".to_string())
        );
    }

    #[test]
    fn module_attribute() {
        assert_eq!(
            classify("@hello", ClassifyOptions::default()),
            ContextTag::ModuleAttribute("hello".to_string())
        );
        assert_eq!(
            classify("@", ClassifyOptions::default()),
            ContextTag::ModuleAttribute(String::new())
        );
    }
}
