//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use lantern_foundation::{BlockingDeque, Error, ErrorContext, ErrorKind, Interrupted};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_kinds_display_their_detail() {
    let cases = [
        (Error::io("disk full"), "i/o error: disk full"),
        (Error::serialization("bad marker"), "serialization error: bad marker"),
        (Error::save_not_found("slot"), "no save named 'slot'"),
        (Error::invalid_save_name("a b"), "invalid save name 'a b'"),
        (Error::invalid_world("dangling exit"), "invalid world: dangling exit"),
        (Error::internal("oops"), "internal error: oops"),
    ];
    for (err, expected) in cases {
        assert_eq!(err.to_string(), expected);
    }
}

#[test]
fn context_does_not_change_display() {
    let err = Error::save_not_found("slot").with_context(
        ErrorContext::new()
            .with_operation("load")
            .with_path("saves/slot.sav"),
    );
    assert_eq!(err.to_string(), "no save named 'slot'");

    let context = err.context.expect("context was attached");
    assert_eq!(context.to_string(), "during load of saves/slot.sav");
}

// =============================================================================
// Conversions
// =============================================================================

#[test]
fn interrupted_converts_to_error() {
    let err: Error = Interrupted(()).into();
    assert!(err.is_interrupted());
    assert!(matches!(err.kind, ErrorKind::Interrupted));
}

#[test]
fn zero_capacity_channel_is_an_error() {
    let err = BlockingDeque::<u8>::new(0).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidCapacity(0)));
    assert!(err.to_string().contains("capacity must be positive"));
}
