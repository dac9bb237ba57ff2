//! Shared, process-wide read-only codes.
//!
//! These are plain constants. Attach per-occurrence details with
//! [`Code::with_details`] instead of mutating a shared value.

use crate::Code;

/// The distinguished "no code assigned" value.
pub const NIL: Code = Code::from_static(-1, "");

/// Success.
pub const OK: Code = Code::from_static(200, "OK");

/// Caller lacks permission for the method.
pub const METHOD_NO_PERMISSION: Code = Code::from_static(4, "Method has no permission");

/// Malformed or invalid request.
pub const REQUEST_ERR: Code = Code::from_static(400, "Invalid Request");

/// Requested entity does not exist.
pub const NOTHING_FOUND: Code = Code::from_static(404, "Nothing Found");

/// Unhandled internal failure.
pub const SERVER_ERR: Code = Code::from_static(500, "Internal Server Error");
