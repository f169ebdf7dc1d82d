//! The internal "not recognized" signal at the collaborator seam (§7).
//!
//! Never propagated to [`crate::classify`] callers — scanner code matches
//! on it purely to decide the `ContextTag::None` fallback, the same way
//! `rhai-hir`'s diagnostics distinguish error *kinds* without ever
//! unwinding the analysis that produced them.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum TokenizeError {
    #[error("`{0}` does not tokenize as a valid identifier")]
    InvalidIdentifier(String),

    #[error("`{0}` does not tokenize as a recognized operator or atom")]
    NotRecognized(String),
}
