//! Formatting construction macros.
//!
//! Rust spells variadic constructors as macros; these expand inline at
//! the call site, so the captured stack starts at the caller's frame
//! exactly as with the plain constructors.

/// Builds a root link from a format string, like [`Error::new`] with
/// formatting.
///
/// [`Error::new`]: crate::Error::new
#[macro_export]
macro_rules! newf {
    ($($arg:tt)*) => {
        $crate::Error::new(::std::format!($($arg)*))
    };
}

/// Skip-aware [`newf!`]: the first argument counts extra frames to hide
/// beyond the default, for helpers that build errors on a caller's
/// behalf.
#[macro_export]
macro_rules! new_skipf {
    ($skip:expr, $($arg:tt)*) => {
        $crate::Error::new_skip($skip, ::std::format!($($arg)*))
    };
}

/// Wraps an existing error with formatted annotation text, like
/// [`Error::wrap`].
///
/// [`Error::wrap`]: crate::Error::wrap
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)*) => {
        $crate::Error::wrap($err, ::std::format!($($arg)*))
    };
}
