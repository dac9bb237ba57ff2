//! Structured error codes for error chains.
//!
//! A [`Code`] is plain immutable data: a numeric identifier, a display
//! message, and an opaque details payload. Codes classify errors; the
//! chaining and inspection machinery lives in the companion
//! `errkit_gerror` crate, which treats this crate purely as attached
//! metadata.

mod builtin;
mod code;

pub use builtin::{METHOD_NO_PERMISSION, NIL, NOTHING_FOUND, OK, REQUEST_ERR, SERVER_ERR};
pub use code::Code;
