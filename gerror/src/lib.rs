//! Chained errors with attached codes and captured stacks.
//!
//! An [`Error`] is one link in a singly-linked chain: it owns at most one
//! predecessor (another [`Error`] or any foreign [`std::error::Error`]),
//! carries its own descriptive text, an [`errkit_ecode::Code`], and a
//! bounded stack snapshot taken where the link was built. Provides:
//!
//! - wrapping that inherits codes attached deeper in the chain, so
//!   annotating an error never silently erases its classification
//! - frame capture at construction with symbol resolution deferred to
//!   render time
//! - narrow capability traits so other error types can participate in
//!   traversal
//! - four rendering modes: plain chain (`Display`), terse
//!   ([`Error::terse`]), chain plus stack (`Debug`), and stack only
//!   ([`Error::stack_string`])
//!
//! Inspection is total: foreign, capability-free errors degrade to the
//! weakest defined behavior (opaque leaf, code [`errkit_ecode::NIL`],
//! display-text stack) instead of failing.

mod capability;
mod constructors;
mod display;
mod extensions;
mod inspect;
pub mod logging;
mod macros;
mod stack;
mod types;

pub use capability::{Causer, Chains, Coded, Currenter, Equals, Stacked};
pub use extensions::{OptionExt, ResultExt};
pub use inspect::{
    cause, code, current, equal, has_error, has_stack, is, stack, unwrap_next, wrap_opt,
};
pub use types::{BoxError, Error, PlainError, Result, RootCause};
