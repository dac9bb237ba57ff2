use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

/// An immutable application error code.
///
/// A code is a `(numeric, message, details)` triple. The numeric part is
/// application-defined and this crate enforces no uniqueness; the details
/// payload is opaque and never interpreted here. Codes are pure values
/// with no identity: copy them freely.
#[derive(Debug, Clone, PartialEq)]
pub struct Code {
    numeric: i32,
    message: Cow<'static, str>,
    details: Option<Value>,
}

impl Code {
    /// Builds a fresh code from its parts.
    pub fn new(numeric: i32, message: impl Into<Cow<'static, str>>, details: Option<Value>) -> Self {
        Self {
            numeric,
            message: message.into(),
            details,
        }
    }

    /// Copies `base`'s numeric and message, replacing only the details.
    ///
    /// Shared predefined codes stay read-only; per-occurrence context is
    /// attached to a copy, never to the shared value.
    pub fn with_details(base: &Code, details: Option<Value>) -> Self {
        Self {
            numeric: base.numeric,
            message: base.message.clone(),
            details,
        }
    }

    pub(crate) const fn from_static(numeric: i32, message: &'static str) -> Self {
        Self {
            numeric,
            message: Cow::Borrowed(message),
            details: None,
        }
    }

    /// Numeric identifier.
    pub fn code(&self) -> i32 {
        self.numeric
    }

    /// Human-readable message; may be empty.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Opaque details payload, if any was attached.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// True when this is the distinguished "no code assigned" value.
    pub fn is_nil(&self) -> bool {
        *self == crate::NIL
    }
}

impl fmt::Display for Code {
    /// `"<numeric>:<message>"`, or `"<numeric>"` alone when the message is
    /// empty. Details never render inline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.numeric)
        } else {
            write!(f, "{}:{}", self.numeric, self.message)
        }
    }
}
