use cyoa_api::limits::{enforce_max_message_size, LimitError, MAX_MESSAGE_BYTES};

#[test]
fn allows_exact_max_size() {
    assert!(enforce_max_message_size(MAX_MESSAGE_BYTES).is_ok());
}

#[test]
fn rejects_over_max_size() {
    let err = enforce_max_message_size(MAX_MESSAGE_BYTES + 1).expect_err("should error for oversized message");
    assert_eq!(err, LimitError::TooLarge { max: MAX_MESSAGE_BYTES, actual: MAX_MESSAGE_BYTES + 1 });
    assert!(err.to_string().contains("message too large"));
}
