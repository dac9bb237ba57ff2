//! `Result` and `Option` adapters that lift failures into chain links.

use errkit_ecode::Code;

use crate::types::Error;

/// Chain-building helpers for `Result`.
pub trait ResultExt<T> {
    /// Wraps the error side with `text`, capturing a stack at this call
    /// and inheriting the wrapped error's effective code.
    fn wrap_err(self, text: impl Into<String>) -> Result<T, Error>;

    /// Like [`wrap_err`](ResultExt::wrap_err) with lazily built text,
    /// for annotations that are costly to format.
    fn wrap_with<F, S>(self, text: F) -> Result<T, Error>
    where
        F: FnOnce() -> S,
        S: Into<String>;

    /// Wraps with `text` and attaches `code` at the new level, shadowing
    /// any code beneath it.
    fn with_code(self, code: Code, text: impl Into<String>) -> Result<T, Error>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn wrap_err(self, text: impl Into<String>) -> Result<T, Error> {
        self.map_err(|err| Error::wrap(err, text))
    }

    fn wrap_with<F, S>(self, text: F) -> Result<T, Error>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|err| Error::wrap(err, text()))
    }

    fn with_code(self, code: Code, text: impl Into<String>) -> Result<T, Error> {
        self.map_err(|err| Error::wrap(err, text).with_code(code))
    }
}

/// Chain-building helpers for `Option`.
pub trait OptionExt<T> {
    /// Replaces `None` with a fresh root link carrying `text`.
    fn ok_or_err(self, text: impl Into<String>) -> Result<T, Error>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_err(self, text: impl Into<String>) -> Result<T, Error> {
        self.ok_or_else(|| Error::new(text))
    }
}
