//! Rendering and serialization surfaces for chain links.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::types::Error;

impl fmt::Display for Error {
    /// Full-chain rendering: this level's text (or its own code's message
    /// when the text is empty), then `": "` and the predecessor's full
    /// rendering. The whole chain prints root-to-tip on one line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let own = if self.text.is_empty() {
            self.code.message()
        } else {
            &self.text
        };
        f.write_str(own)?;
        if let Some(src) = &self.source {
            if !own.is_empty() {
                f.write_str(": ")?;
            }
            write!(f, "{src}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    /// Full chain plus the stack listing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")?;
        let stack = self.stack_string();
        if !stack.is_empty() {
            write!(f, "\n{stack}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

impl Serialize for Error {
    /// Lossy interchange hook: the full display string only. Chain, code,
    /// and stack structure are deliberately not preserved.
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
