//! Core chain-node type and aliases.

use std::fmt;

use errkit_ecode::Code;

use crate::stack::Stack;

/// Boxed foreign error, the form a wrapped predecessor is stored in.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias for operations that fail with a chain node.
pub type Result<T> = std::result::Result<T, Error>;

/// One link in an error chain.
///
/// A link owns at most one predecessor, its own descriptive text (which
/// may be empty when the link exists only to carry a code), a [`Code`]
/// defaulting to [`errkit_ecode::NIL`], and an optional stack snapshot
/// from the site that built it. Apart from [`set_code`](Error::set_code),
/// which requires exclusive access, a link never changes after
/// construction. Wrapping takes ownership of the predecessor, so a chain
/// is always a simple acyclic list.
pub struct Error {
    pub(crate) source: Option<BoxError>,
    pub(crate) stack: Option<Stack>,
    pub(crate) text: String,
    pub(crate) code: Code,
}

/// Root cause of a chain, as returned by [`cause`](crate::cause) and
/// [`Error::cause`].
///
/// The rootmost chain link synthesizes a plain error from its own text;
/// the first foreign link is the cause itself, borrowed from the chain
/// that owns it and not traversed further.
#[derive(Debug)]
pub enum RootCause<'a> {
    /// A foreign error at the bottom of the chain, or an input that had
    /// neither the cause nor the unwrap capability.
    Foreign(&'a (dyn std::error::Error + 'static)),
    /// A plain error built from the rootmost link's own text.
    Synthesized(PlainError),
}

impl RootCause<'_> {
    /// Borrows the cause as a plain `std::error::Error`.
    pub fn as_dyn(&self) -> &(dyn std::error::Error + 'static) {
        match self {
            RootCause::Foreign(err) => *err,
            RootCause::Synthesized(err) => err,
        }
    }
}

impl fmt::Display for RootCause<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_dyn(), f)
    }
}

impl std::error::Error for RootCause<'_> {}

/// Plain text-only error synthesized for the rootmost chain link.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct PlainError(pub(crate) String);
