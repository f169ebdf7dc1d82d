//! Character class tables (§3 of the design doc): small, bytewise-ASCII
//! membership checks consulted by every scanner in the pipeline.

pub(crate) const OPERATOR_CHARS: &[char] = &[
    '\\', '<', '>', '+', '-', '*', '/', ':', '=', '|', '&', '~', '^', '%', '.', '!',
];
pub(crate) const STARTER_CHARS: &[char] = &[',', '(', '[', '{', ';'];
pub(crate) const NON_STARTER_CHARS: &[char] = &[')', ']', '}', '"', '\''];
pub(crate) const SPACE_CHARS: &[char] = &['\t', ' '];
pub(crate) const TRAILING_ID_CHARS: &[char] = &['?', '!'];

/// Operator prefixes that are not themselves valid operators but are
/// prefixes of valid ones (e.g. `^^^` is real, `^^` alone is not).
pub(crate) const INCOMPLETE_OPS: &[&str] = &["^^", "~~", "~"];

/// Identifier-shaped words reclassified as operators in call position.
pub(crate) const TEXTUAL_OPS: &[&str] = &["when", "not", "and", "or"];

pub(crate) fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(&c)
}

pub(crate) fn is_starter(c: char) -> bool {
    STARTER_CHARS.contains(&c)
}

pub(crate) fn is_non_starter(c: char) -> bool {
    NON_STARTER_CHARS.contains(&c)
}

pub(crate) fn is_space(c: char) -> bool {
    SPACE_CHARS.contains(&c)
}

pub(crate) fn is_trailing_id(c: char) -> bool {
    TRAILING_ID_CHARS.contains(&c)
}

/// The union consulted by the identifier scanner's walk: any character in
/// here ends a run of identifier characters.
pub(crate) fn is_non_ident(c: char) -> bool {
    is_trailing_id(c) || is_operator_char(c) || is_starter(c) || is_non_starter(c) || is_space(c)
}
