//! Bounded stack snapshots.
//!
//! Raw frame addresses are captured eagerly at link construction;
//! symbols resolve only when the snapshot is rendered, so building an
//! error stays cheap even when it is never printed. The capture
//! plumbing is pruned at render time by symbol rather than by a fixed
//! frame count: optimized builds inline the plumbing into varying
//! numbers of physical frames, and a count tuned for one profile eats
//! caller frames in the other.

use std::ffi::c_void;
use std::fmt::Write as _;

/// Upper bound on rendered frames per snapshot.
const MAX_STACK_DEPTH: usize = 64;

/// Extra raw frames captured beyond the depth bound, so the plumbing
/// pruned at render time does not count against it.
const CAPTURE_SLACK: usize = 16;

/// The innermost reported frame is always the unwinder entry or
/// [`Stack::capture`] itself, which `#[inline(never)]` pins to a real
/// frame; only that one frame can be dropped unconditionally.
const FIXED_SKIP: usize = 1;

/// An immutable snapshot of return addresses.
#[derive(Clone)]
pub(crate) struct Stack {
    frames: Vec<usize>,
    skip: usize,
}

impl Stack {
    /// Captures frames from the calling thread. `extra` counts caller
    /// frames to hide beyond this crate's own plumbing; the plumbing
    /// itself is identified and dropped when rendering.
    #[inline(never)]
    pub(crate) fn capture(extra: usize) -> Self {
        let limit = MAX_STACK_DEPTH
            .saturating_add(extra)
            .saturating_add(CAPTURE_SLACK);
        let mut frames = Vec::new();
        backtrace::trace(|frame| {
            frames.push(frame.ip() as usize);
            frames.len() < limit
        });
        Self {
            frames,
            skip: extra,
        }
    }

    /// Resolves every frame to a source location and renders the
    /// listing, most recent call first. The leading run of capture
    /// plumbing is dropped by symbol, then `skip` caller frames, so the
    /// listing starts at the construction site regardless of build
    /// profile. Frames that cannot be resolved fall back to their raw
    /// address.
    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        let mut in_prologue = true;
        let mut to_skip = self.skip;
        let mut printed = 0;
        for ip in self.frames.iter().skip(FIXED_SKIP) {
            let frame = resolve_frame(*ip);
            if in_prologue {
                if frame.name.as_deref().is_some_and(is_plumbing) {
                    continue;
                }
                in_prologue = false;
            }
            if to_skip > 0 {
                to_skip -= 1;
                continue;
            }
            printed += 1;
            match (&frame.name, &frame.location) {
                (Some(name), Some(location)) => {
                    let _ = writeln!(out, "{printed}. {name}\n    {location}");
                }
                (Some(name), None) => {
                    let _ = writeln!(out, "{printed}. {name}");
                }
                _ => {
                    let _ = writeln!(out, "{printed}. {ip:#x}");
                }
            }
            if printed == MAX_STACK_DEPTH {
                break;
            }
        }
        out
    }
}

struct ResolvedFrame {
    name: Option<String>,
    location: Option<String>,
}

fn resolve_frame(ip: usize) -> ResolvedFrame {
    let mut name = None;
    let mut location = None;
    backtrace::resolve(ip as *mut c_void, |symbol| {
        if name.is_none() {
            name = symbol.name().map(|n| n.to_string());
        }
        if location.is_none() {
            if let (Some(file), Some(line)) = (symbol.filename(), symbol.lineno()) {
                location = Some(format!("{}:{line}", file.display()));
            }
        }
    });
    ResolvedFrame { name, location }
}

/// Frames belonging to the capture machinery or the adapter layers this
/// crate routes construction through. Checked only on the leading run of
/// a snapshot, so deeper user frames that merely pass through `Result`
/// combinators stay visible.
fn is_plumbing(name: &str) -> bool {
    name.contains("errkit_gerror::")
        || name.contains("backtrace::")
        || name.contains("core::result::Result")
        || name.contains("core::option::Option")
}
