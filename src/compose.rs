//! Dot, nested-alias, arity and call composers (§4.7/§4.8).

use crate::dispatch::classify_core;
use crate::ident::ident_to_context;
use crate::reverse::Rest;
use crate::token::Collaborators;
use crate::{ContextTag, InsideDot};

/// §4.7: `Foo.Bar` continuing an alias path.
pub(crate) fn nested_alias(rest: Rest<'_>, acc: String, collabs: &dyn Collaborators) -> ContextTag {
    match classify_core(rest, true, collabs) {
        ContextTag::Alias(prev) => ContextTag::Alias(format!("{prev}.{acc}")),
        _ => ContextTag::None,
    }
}

/// §4.7: member reference `lhs.acc`, recursing on `lhs` to build the
/// left-associative `InsideDot` chain.
pub(crate) fn dot(rest: Rest<'_>, acc: String, collabs: &dyn Collaborators) -> ContextTag {
    match classify_core(rest, true, collabs) {
        ContextTag::LocalOrVar(prev) => ContextTag::Dot(InsideDot::Var(prev), acc),
        ContextTag::UnquotedAtom(prev) => ContextTag::Dot(InsideDot::UnquotedAtom(prev), acc),
        ContextTag::Alias(prev) => ContextTag::Dot(InsideDot::Alias(prev), acc),
        ContextTag::ModuleAttribute(prev) => ContextTag::Dot(InsideDot::ModuleAttribute(prev), acc),
        ContextTag::Dot(inside, prev_tail) => {
            ContextTag::Dot(InsideDot::Dot(Box::new(inside), prev_tail), acc)
        }
        _ => ContextTag::None,
    }
}

/// §4.8: re-tags an identifier scan result for the `/`-triggered arity
/// position.
pub(crate) fn arity_wrapper(rest: Rest<'_>, collabs: &dyn Collaborators) -> ContextTag {
    match ident_to_context(rest, true, collabs) {
        ContextTag::LocalOrVar(x) => ContextTag::LocalArity(x),
        ContextTag::Operator(x) => ContextTag::OperatorArity(x),
        ContextTag::Dot(d, x) => ContextTag::DotArity(d, x),
        _ => ContextTag::None,
    }
}

/// §4.8: re-tags an identifier scan result for the `(`- or
/// space-triggered call position.
pub(crate) fn call_wrapper(rest: Rest<'_>, collabs: &dyn Collaborators) -> ContextTag {
    match ident_to_context(rest, true, collabs) {
        ContextTag::LocalOrVar(x) => ContextTag::LocalCall(x),
        ContextTag::Operator(x) => ContextTag::OperatorCall(x),
        ContextTag::Dot(d, x) => ContextTag::DotCall(d, x),
        _ => ContextTag::None,
    }
}
