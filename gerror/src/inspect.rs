//! Chain inspection over arbitrary `std::error::Error` values.
//!
//! Every function here is total: a foreign error missing a capability
//! gets the weakest defined behavior instead of a failure, and absent
//! errors are spelled as `Option` at the signature level.

use errkit_ecode::{Code, NIL};

use crate::types::{BoxError, Error, RootCause};

type DynError = dyn std::error::Error + 'static;

/// Wraps an optional error, propagating `None`: wrapping "no error"
/// yields "no error".
pub fn wrap_opt<E>(err: Option<E>, text: impl Into<String>) -> Option<Error>
where
    E: Into<BoxError>,
{
    err.map(|e| Error::wrap(e, text))
}

/// Root cause of `err`.
///
/// Fallback order: the cause capability, then one level of std
/// `source()` followed by re-examination, then `err` itself.
pub fn cause(err: &DynError) -> RootCause<'_> {
    if let Some(link) = err.downcast_ref::<Error>() {
        return link.cause();
    }
    if let Some(next) = err.source() {
        return cause(next);
    }
    RootCause::Foreign(err)
}

/// Detached view of `err`'s outermost level, when it exposes one.
///
/// A foreign error is its own current level; `None` signals exactly
/// that, so nothing is lost by the missing capability. Callers who want
/// a foreign error to stand in for its own detached view should fall
/// back to the input on `None`, e.g.
/// `current(err).map_or_else(|| err.to_string(), |e| e.to_string())`.
pub fn current(err: &DynError) -> Option<Error> {
    err.downcast_ref::<Error>().map(Error::current)
}

/// Immediate predecessor via the std `source()` capability.
pub fn unwrap_next(err: &DynError) -> Option<&DynError> {
    err.source()
}

/// Rendered stack for `err`, falling back to its display text when the
/// stack capability is absent.
pub fn stack(err: &DynError) -> String {
    match err.downcast_ref::<Error>() {
        Some(link) => link.stack_string(),
        None => err.to_string(),
    }
}

/// Whether `err` exposes the stack capability at all, regardless of how
/// many frames were actually captured.
pub fn has_stack(err: &DynError) -> bool {
    err.downcast_ref::<Error>().is_some()
}

/// Effective code of `err`; [`NIL`] for errors without the code
/// capability.
pub fn code(err: &DynError) -> Code {
    match err.downcast_ref::<Error>() {
        Some(link) => link.code(),
        None => NIL,
    }
}

/// Same-level equality.
///
/// Identity short-circuits; otherwise the comparison is delegated to
/// whichever operand exposes the equality capability, `a` first. With
/// neither capable the result is `false`.
pub fn equal(a: &DynError, b: &DynError) -> bool {
    if same_object(a, b) {
        return true;
    }
    if let Some(link) = a.downcast_ref::<Error>() {
        return link.equal(b);
    }
    if let Some(link) = b.downcast_ref::<Error>() {
        return link.equal(a);
    }
    false
}

/// True when `target` appears in `err`'s chain. An `err` without the
/// membership capability never matches.
pub fn is(err: &DynError, target: &DynError) -> bool {
    match err.downcast_ref::<Error>() {
        Some(link) => link.is(target),
        None => false,
    }
}

/// Alias for [`is`].
pub fn has_error(err: &DynError, target: &DynError) -> bool {
    is(err, target)
}

/// Terse rendering of an arbitrary error: a chain link's own text (or
/// full display when that is empty), a foreign error's display text.
pub(crate) fn terse_of(err: &DynError) -> String {
    match err.downcast_ref::<Error>() {
        Some(link) => link.terse(),
        None => err.to_string(),
    }
}

/// Reference identity on the data pointer, ignoring vtables.
pub(crate) fn same_object(a: &DynError, b: &DynError) -> bool {
    std::ptr::eq(a as *const DynError as *const (), b as *const DynError as *const ())
}
