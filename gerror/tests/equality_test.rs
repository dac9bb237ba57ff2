//! Same-level equality and chain membership.

use std::io;

use errkit_ecode::{NOTHING_FOUND, SERVER_ERR};
use errkit_gerror::{equal, has_error, is, Error};

#[test]
fn test_equal_is_reflexive_via_identity() {
    let err = Error::new("anything").with_code(SERVER_ERR);
    assert!(equal(&err, &err));

    let io_err = io::Error::other("opaque");
    assert!(equal(&io_err, &io_err));
}

#[test]
fn test_equal_compares_code_and_text() {
    let a = Error::new("boom").with_code(NOTHING_FOUND);
    let b = Error::new("boom").with_code(NOTHING_FOUND);
    assert!(equal(&a, &b));

    let other_text = Error::new("bang").with_code(NOTHING_FOUND);
    assert!(!equal(&a, &other_text));

    let other_code = Error::new("boom").with_code(SERVER_ERR);
    assert!(!equal(&a, &other_code));
}

#[test]
fn test_equal_text_rule_is_asymmetric() {
    // `b` has no text of its own, so its terse rendering substitutes the
    // code message. Comparing a's raw text against that matches one way
    // only.
    let a = Error::new("Nothing Found").with_code(NOTHING_FOUND);
    let b = Error::new("").with_code(NOTHING_FOUND);
    assert!(a.equal(&b));
    assert!(!b.equal(&a));
}

#[test]
fn test_equal_retries_with_operands_swapped() {
    let io_err = io::Error::other("disk gone");
    let link = Error::new("disk gone");
    // The foreign side has no equality capability; the chain side does.
    assert!(equal(&io_err, &link));
    assert!(equal(&link, &io_err));
}

#[test]
fn test_equal_of_two_capability_free_errors_is_false() {
    let a = io::Error::other("same text");
    let b = io::Error::other("same text");
    assert!(!equal(&a, &b));
}

#[test]
fn test_is_finds_self_and_direct_predecessor() {
    let chain = Error::wrap(Error::wrap(Error::new("root"), "mid"), "top");
    assert!(is(&chain, &Error::new("top")));
    assert!(is(&chain, &Error::new("mid")));
    assert!(has_error(&chain, &Error::new("top")));
}

#[test]
fn test_is_recurses_through_chain_links() {
    let chain = Error::wrap(Error::wrap(Error::new("root"), "mid"), "top");
    assert!(is(&chain, &Error::new("root")));
}

#[test]
fn test_is_rejects_unrelated_errors() {
    let chain = Error::wrap(Error::new("root"), "top");
    assert!(!is(&chain, &Error::new("elsewhere")));
    assert!(!is(&chain, &Error::new("root").with_code(NOTHING_FOUND)));
}

#[derive(Debug, thiserror::Error)]
#[error("mid")]
struct ForeignMid {
    #[source]
    inner: errkit_gerror::Error,
}

#[test]
fn test_foreign_link_without_capability_truncates_membership() {
    // "deep" is reachable through the foreign link's std source, but the
    // foreign type re-exposes no membership capability, so the walk stops.
    let chain = Error::wrap(
        ForeignMid {
            inner: Error::new("deep"),
        },
        "top",
    );
    assert!(!is(&chain, &Error::new("deep")));
}

#[test]
fn test_foreign_error_never_hosts_membership() {
    let io_err = io::Error::other("opaque");
    assert!(!is(&io_err, &Error::new("opaque")));
}
