//! Link construction and level-local operations.

use errkit_ecode::{Code, NIL};

use crate::stack::Stack;
use crate::types::{BoxError, Error, PlainError, RootCause};

impl Error {
    /// Builds a fresh root link with `text` and a stack captured at the
    /// call site, tuned so this constructor does not appear in it.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            source: None,
            stack: Some(Stack::capture(0)),
            text: text.into(),
            code: NIL,
        }
    }

    /// Like [`Error::new`], skipping `skip` extra frames so helper layers
    /// above the true origin stay out of the snapshot.
    #[must_use]
    pub fn new_skip(skip: usize, text: impl Into<String>) -> Self {
        Self {
            source: None,
            stack: Some(Stack::capture(skip)),
            text: text.into(),
            code: NIL,
        }
    }

    /// Wraps `err` with a new annotation.
    ///
    /// The new link owns `err`, captures a fresh stack at the wrap site,
    /// and inherits `err`'s effective code, so wrapping never discards a
    /// code attached deeper in the chain.
    #[must_use]
    pub fn wrap(err: impl Into<BoxError>, text: impl Into<String>) -> Self {
        Self::wrap_skip(0, err, text)
    }

    /// Skip-aware [`Error::wrap`] for helpers that build links on a
    /// caller's behalf.
    #[must_use]
    pub fn wrap_skip(skip: usize, err: impl Into<BoxError>, text: impl Into<String>) -> Self {
        let err = err.into();
        let code = crate::inspect::code(err.as_ref());
        Self {
            source: Some(err),
            stack: Some(Stack::capture(skip)),
            text: text.into(),
            code,
        }
    }

    /// This link's own descriptive text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Effective code: this link's own code when set, else the effective
    /// code of the predecessor, else [`NIL`].
    #[must_use]
    pub fn code(&self) -> Code {
        if !self.code.is_nil() {
            return self.code.clone();
        }
        match &self.source {
            Some(src) => crate::inspect::code(src.as_ref()),
            None => NIL,
        }
    }

    /// Replaces this link's code, shadowing any code beneath it.
    ///
    /// The one sanctioned post-construction mutation; exclusive access is
    /// required, so a shared link cannot be overridden concurrently.
    pub fn set_code(&mut self, code: Code) {
        self.code = code;
    }

    /// Attaches a code at construction time, builder-style.
    #[must_use]
    pub fn with_code(mut self, code: Code) -> Self {
        self.code = code;
        self
    }

    /// Detached view of this level only: same text, stack, and code, with
    /// the predecessor cleared. Never mutates `self`.
    #[must_use]
    pub fn current(&self) -> Self {
        Self {
            source: None,
            stack: self.stack.clone(),
            text: self.text.clone(),
            code: self.code.clone(),
        }
    }

    /// Immediate predecessor, if any.
    pub fn unwrap_next(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }

    /// Root cause of this chain.
    ///
    /// Chain links are traversed; the first foreign link is the cause and
    /// is not traversed further; a rootmost chain link yields a plain
    /// error built from its own text.
    #[must_use]
    pub fn cause(&self) -> RootCause<'_> {
        let mut link = self;
        loop {
            match &link.source {
                Some(src) => {
                    let src: &(dyn std::error::Error + 'static) = src.as_ref();
                    match src.downcast_ref::<Error>() {
                        Some(inner) => link = inner,
                        None => return RootCause::Foreign(src),
                    }
                }
                None => return RootCause::Synthesized(PlainError(link.text.clone())),
            }
        }
    }

    /// Same-level equality against an arbitrary error.
    ///
    /// Identity short-circuits; otherwise the effective codes must be
    /// equal by value and this link's raw text must equal `target`'s
    /// terse rendering. The text side is deliberately asymmetric: when
    /// `target` has empty text its code message stands in.
    #[must_use]
    pub fn equal(&self, target: &(dyn std::error::Error + 'static)) -> bool {
        if crate::inspect::same_object(self, target) {
            return true;
        }
        if self.code() != crate::inspect::code(target) {
            return false;
        }
        self.text == crate::inspect::terse_of(target)
    }

    /// True when `target` appears in this chain.
    ///
    /// Checks this level and the immediate predecessor directly, then
    /// delegates to the predecessor's own membership capability; a
    /// capability-free foreign link truncates the walk.
    #[must_use]
    pub fn is(&self, target: &(dyn std::error::Error + 'static)) -> bool {
        if self.equal(target) {
            return true;
        }
        let Some(next) = self.unwrap_next() else {
            return false;
        };
        if crate::inspect::equal(next, target) {
            return true;
        }
        match next.downcast_ref::<Error>() {
            Some(link) => link.is(target),
            None => false,
        }
    }

    /// Rendered stack snapshot, most recent frame first. Empty when
    /// capture was skipped.
    #[must_use]
    pub fn stack_string(&self) -> String {
        self.stack.as_ref().map(Stack::render).unwrap_or_default()
    }

    /// Terse rendering: this link's own text, or the full display when
    /// the text is empty.
    #[must_use]
    pub fn terse(&self) -> String {
        if self.text.is_empty() {
            self.to_string()
        } else {
            self.text.clone()
        }
    }
}
