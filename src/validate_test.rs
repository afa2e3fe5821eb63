use super::*;

#[test]
fn require_rejects_missing_and_blank() {
    assert!(require("title", None, "title is required").is_err());
    assert!(require("title", Some("   "), "title is required").is_err());
    assert!(require("title", Some("Flu season"), "title is required").is_ok());
}

#[test]
fn require_error_carries_field_and_message() {
    let err = require("title", None, "title is required").unwrap_err();
    assert_eq!(err.field, "title");
    assert_eq!(err.to_string(), "title: title is required");
}

#[test]
fn max_length_counts_characters_not_bytes() {
    assert!(max_length("name", Some("서울대학교병원"), 7, "too long").is_ok());
    assert!(max_length("name", Some("서울대학교병원!"), 7, "too long").is_err());
    assert!(max_length("name", None, 1, "too long").is_ok());
}

#[test]
fn numeric_accepts_digits_only() {
    assert!(numeric("id", Some("42"), "bad id").is_ok());
    assert!(numeric("id", Some("4a"), "bad id").is_err());
    assert!(numeric("id", Some(""), "bad id").is_err());
    assert!(numeric("id", None, "bad id").is_ok());
}

#[test]
fn phone_accepts_dashed_digits() {
    assert!(phone("tel", Some("02-1234-5678"), "bad tel").is_ok());
    assert!(phone("tel", Some("0212345678"), "bad tel").is_ok());
    assert!(phone("tel", Some("02--1234"), "bad tel").is_err());
    assert!(phone("tel", Some("02-12a4"), "bad tel").is_err());
    assert!(phone("tel", Some("-1234"), "bad tel").is_err());
}
