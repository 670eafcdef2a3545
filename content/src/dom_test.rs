use super::*;

#[test]
fn loading_document_defers_start() {
    assert!(is_loading("loading"));
}

#[test]
fn parsed_document_starts_immediately() {
    assert!(!is_loading("interactive"));
    assert!(!is_loading("complete"));
}
