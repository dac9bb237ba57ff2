//! Narrow capability traits for chain participation.
//!
//! The display baseline is `std::error::Error` itself and the unwrap
//! capability is std `source()`; the traits below cover the rest. The
//! inspection functions in this crate recognize [`Error`] by checked
//! downcast at each traversal step; these traits are the seam for
//! generic code over other error types that opt in.

use errkit_ecode::Code;

use crate::types::{Error, RootCause};

/// Exposes an attached code.
pub trait Coded {
    /// Effective code for this error.
    fn code(&self) -> Code;
}

/// Exposes a rendered stack snapshot.
pub trait Stacked {
    /// Ordered frame listing, most recent call first.
    fn stack(&self) -> String;
}

/// Exposes the chain's root cause.
pub trait Causer {
    /// Walks to the root of the chain.
    fn cause(&self) -> RootCause<'_>;
}

/// Exposes a detached view of the outermost level.
pub trait Currenter {
    /// This level only, with the predecessor cleared.
    fn current(&self) -> Error;
}

/// Same-level equality against an arbitrary error.
pub trait Equals {
    /// Effective-code plus terse-text comparison.
    fn equal(&self, target: &(dyn std::error::Error + 'static)) -> bool;
}

/// Chain-membership test.
pub trait Chains {
    /// True when `target` appears in this error's chain.
    fn is(&self, target: &(dyn std::error::Error + 'static)) -> bool;
}

impl Coded for Error {
    fn code(&self) -> Code {
        Error::code(self)
    }
}

impl Stacked for Error {
    fn stack(&self) -> String {
        self.stack_string()
    }
}

impl Causer for Error {
    fn cause(&self) -> RootCause<'_> {
        Error::cause(self)
    }
}

impl Currenter for Error {
    fn current(&self) -> Error {
        Error::current(self)
    }
}

impl Equals for Error {
    fn equal(&self, target: &(dyn std::error::Error + 'static)) -> bool {
        Error::equal(self, target)
    }
}

impl Chains for Error {
    fn is(&self, target: &(dyn std::error::Error + 'static)) -> bool {
        Error::is(self, target)
    }
}
