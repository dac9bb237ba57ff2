//! Construction, wrapping, and chain rendering.

use std::io;

use errkit_ecode::NOTHING_FOUND;
use errkit_gerror::{unwrap_next, wrap_opt, Error, RootCause};

#[test]
fn test_chain_display_root_to_tip() {
    let err = Error::wrap(Error::wrap(Error::new("root cause"), "layer1"), "layer2");
    assert_eq!(err.to_string(), "layer2: layer1: root cause");
}

#[test]
fn test_wrap_none_yields_none() {
    assert!(wrap_opt(None::<io::Error>, "ignored").is_none());
}

#[test]
fn test_wrap_some_yields_wrapped() {
    let err = wrap_opt(Some(io::Error::other("boom")), "reading")
        .expect("wrapping a present error must yield a link");
    assert_eq!(err.to_string(), "reading: boom");
}

#[test]
fn test_unwrap_preserves_identity_one_level_up() {
    let wrapped = Error::wrap(io::Error::other("disk gone"), "loading index");
    let next = unwrap_next(&wrapped).expect("wrapped link must expose its predecessor");
    assert_eq!(next.to_string(), "disk gone");
    assert!(unwrap_next(next).is_none());
}

#[test]
fn test_empty_text_falls_back_to_code_message() {
    let coded = Error::new("").with_code(NOTHING_FOUND);
    let err = Error::wrap(coded, "lookup failed");
    assert_eq!(err.to_string(), "lookup failed: Nothing Found");
}

#[test]
fn test_empty_annotation_adds_no_separator() {
    let err = Error::wrap(io::Error::other("missing file"), "");
    assert_eq!(err.to_string(), "missing file");
}

#[test]
fn test_current_detaches_one_level() {
    let err = Error::wrap(Error::new("root"), "top").with_code(NOTHING_FOUND);
    let level = err.current();
    assert!(level.unwrap_next().is_none());
    assert_eq!(level.text(), err.text());
    assert_eq!(level.code(), NOTHING_FOUND);
    // The original chain is untouched.
    assert_eq!(err.to_string(), "top: root");
}

#[test]
fn test_current_of_foreign_error_is_absent() {
    let io_err = io::Error::other("raw");
    assert!(errkit_gerror::current(&io_err).is_none());
}

#[test]
fn test_cause_synthesizes_plain_error_for_chain_root() {
    let err = Error::wrap(Error::wrap(Error::new("root cause"), "mid"), "top");
    match err.cause() {
        RootCause::Synthesized(plain) => assert_eq!(plain.to_string(), "root cause"),
        RootCause::Foreign(_) => panic!("an all-chain error must synthesize its root"),
    }
}

#[test]
fn test_cause_stops_at_first_foreign_link() {
    let err = Error::wrap(Error::wrap(io::Error::other("disk gone"), "mid"), "top");
    match err.cause() {
        RootCause::Foreign(leaf) => {
            assert_eq!(leaf.to_string(), "disk gone");
            assert!(leaf.downcast_ref::<io::Error>().is_some());
        }
        RootCause::Synthesized(_) => panic!("a foreign leaf is the cause itself"),
    }
}

#[test]
fn test_cause_of_capability_free_error_is_itself() {
    let io_err = io::Error::other("raw");
    let cause = errkit_gerror::cause(&io_err);
    assert_eq!(cause.to_string(), "raw");
    assert!(matches!(cause, RootCause::Foreign(_)));
}

#[derive(Debug, thiserror::Error)]
#[error("layered")]
struct Layered {
    #[source]
    inner: io::Error,
}

#[test]
fn test_cause_recurses_through_std_source() {
    let layered = Layered {
        inner: io::Error::other("the bottom"),
    };
    let cause = errkit_gerror::cause(&layered);
    assert_eq!(cause.to_string(), "the bottom");
}

#[test]
fn test_newf_and_wrapf_format_inline() {
    let root = errkit_gerror::newf!("record {} missing", 7);
    assert_eq!(root.text(), "record 7 missing");
    let wrapped = errkit_gerror::wrapf!(root, "loading batch {}", 3);
    assert_eq!(wrapped.to_string(), "loading batch 3: record 7 missing");
    let skipped = errkit_gerror::new_skipf!(1, "from helper {}", "x");
    assert_eq!(skipped.text(), "from helper x");
}
