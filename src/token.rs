//! The three pluggable collaborators (§4.9/§6) plus a default,
//! host-language-agnostic implementation of each.
//!
//! A classifier embedded in a real language server can supply its own
//! implementations (backed by the host's actual tokenizer); a standalone
//! consumer gets a reasonable default for this language family out of the
//! box.

use logos::Logos;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::classes::OPERATOR_CHARS;

/// `kind` of a validated identifier run (§4.4/§6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum IdentifierKind {
    /// Lowercase-leading: a variable or local call.
    Identifier,
    /// Uppercase-leading: an alias/namespace segment.
    Alias,
    /// A quoted or reserved literal shape. Not reachable from this
    /// scanner's own call sites (see [`DefaultTokenizer`]), kept so the
    /// enum can represent what a custom tokenizer may report.
    Atom,
}

/// Extra facts about an identifier run beyond its `kind`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierExtras {
    /// Whether an `@` character appeared anywhere in the tokenized run.
    pub has_at: bool,
}

/// Result of tokenizing a candidate identifier (§4.4 step 7, §6
/// collaborator 1). The classifier only ever consults the case where the
/// whole input was consumed (the "not a valid identifier" sentinel is
/// `Invalid`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentifierToken {
    Valid {
        kind: IdentifierKind,
        ascii_only: bool,
        extras: IdentifierExtras,
    },
    Invalid,
}

/// Collaborator 1 (§6): validates a complete identifier-shaped run.
pub trait IdentifierTokenizer: std::fmt::Debug {
    fn tokenize(&self, input: &str) -> IdentifierToken;
}

/// One lexical token as produced by collaborator 2 (§6/§4.5 step 4). The
/// classifier inspects only three shapes built from these: a lone `Atom`,
/// `Dot` followed by an `Op`, or a lone `Op`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LexToken {
    Atom(String),
    Dot,
    Op(String),
}

/// Collaborator 2 (§6): tokenizes a forward character sequence (typically
/// an operator-character run) into a short list of [`LexToken`]s.
pub trait ExpressionTokenizer: std::fmt::Debug {
    fn tokenize(&self, input: &str) -> Vec<LexToken>;
}

/// Collaborator 3 (§6): answers whether an operator symbol is a
/// recognized unary or binary operator.
pub trait OperatorCategorizer: std::fmt::Debug {
    fn is_unary(&self, op: &str) -> bool;
    fn is_binary(&self, op: &str) -> bool;
}

/// Bundles the three collaborators behind one object so [`crate::ClassifyOptions`]
/// can carry a single override.
pub trait Collaborators: std::fmt::Debug {
    fn identifiers(&self) -> &dyn IdentifierTokenizer;
    fn expressions(&self) -> &dyn ExpressionTokenizer;
    fn categorizer(&self) -> &dyn OperatorCategorizer;
}

/// The zero-configuration set of collaborators (§4.9).
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultCollaborators;

impl Collaborators for DefaultCollaborators {
    fn identifiers(&self) -> &dyn IdentifierTokenizer {
        &DefaultTokenizer
    }

    fn expressions(&self) -> &dyn ExpressionTokenizer {
        &DefaultTokenizer
    }

    fn categorizer(&self) -> &dyn OperatorCategorizer {
        &DefaultTokenizer
    }
}

/// The default implementation of all three collaborators, in the spirit
/// of a single small hand-rolled tokenizer (grounded on `rhai/src/token.rs`'s
/// keyword/operator tables) adapted to this language family's
/// identifier/alias/atom distinction instead of Rhai's own syntax.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTokenizer;

impl IdentifierTokenizer for DefaultTokenizer {
    fn tokenize(&self, input: &str) -> IdentifierToken {
        let mut chars = input.chars();
        let Some(first) = chars.next() else {
            return IdentifierToken::Invalid;
        };
        if first != '_' && !first.is_alphabetic() {
            return IdentifierToken::Invalid;
        }
        let kind = if first.is_ascii_uppercase() {
            IdentifierKind::Alias
        } else {
            IdentifierKind::Identifier
        };
        let ascii_only = input.chars().all(|c| c.is_ascii());
        let has_at = input.contains('@');
        IdentifierToken::Valid {
            kind,
            ascii_only,
            extras: IdentifierExtras { has_at },
        }
    }
}

#[derive(Logos, Debug, Clone, PartialEq, Eq)]
enum RawToken {
    #[regex(r":([A-Za-z_][A-Za-z0-9_]*[?!]?|[\\<>+*/=|&~^%!-]+)", priority = 10)]
    Atom,
    #[token(".")]
    Dot,
    #[regex(r"[\\<>+*/=|&~^%!-]+")]
    Op,
    #[error]
    Error,
}

impl ExpressionTokenizer for DefaultTokenizer {
    fn tokenize(&self, input: &str) -> Vec<LexToken> {
        let mut lexer = RawToken::lexer(input);
        let mut out = Vec::new();
        while let Some(tok) = lexer.next() {
            let slice = lexer.slice();
            let lex = match tok {
                RawToken::Atom => LexToken::Atom(slice.trim_start_matches(':').to_string()),
                RawToken::Dot => LexToken::Dot,
                RawToken::Op => LexToken::Op(slice.to_string()),
                RawToken::Error => return Vec::new(),
            };
            out.push(lex);
        }
        out
    }
}

/// Symbols this language family defines as prefix (unary) operators.
const UNARY_OPS: &[&str] = &["+", "-", "!", "^", "~~~"];

/// Symbols this language family defines as infix (binary) operators. Kept
/// in terms of the same [`OPERATOR_CHARS`] alphabet as §3 so the table and
/// the character classes never drift apart.
const BINARY_OPS: &[&str] = &[
    "+", "-", "*", "/", "==", "!=", "===", "!==", "<", ">", "<=", ">=", "&&", "||", "<>", "++",
    "--", "..", "::", "|>", "<-", "->", "=>", "=", "|", "\\\\", "^^^", "<<<", ">>>",
];

impl OperatorCategorizer for DefaultTokenizer {
    fn is_unary(&self, op: &str) -> bool {
        UNARY_OPS.contains(&op)
    }

    fn is_binary(&self, op: &str) -> bool {
        BINARY_OPS.contains(&op)
    }
}
