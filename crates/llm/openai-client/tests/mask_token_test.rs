//! Unit tests for [`openai_client::mask_token`].
//!
//! Completion keys are logged as first 7 chars + `***` + last 4 chars; short keys are fully masked.

use openai_client::mask_token;

/// **Test: Keys of length ≤ 11 are fully masked.**
#[test]
fn mask_token_short_returns_all_star() {
    assert_eq!(mask_token(""), "***");
    assert_eq!(mask_token("abc"), "***");
    assert_eq!(mask_token("0123456789a"), "***");
}

/// **Test: Longer keys show head and tail only.**
#[test]
fn mask_token_long_shows_head_and_tail() {
    assert_eq!(mask_token("0123456789ab"), "0123456***89ab");
    let key = "mistral-key-abcdefghijklmnopqrstuvwxyz";
    let masked = mask_token(key);
    assert_eq!(masked, "mistral***wxyz");
    assert_eq!(masked.len(), 7 + 3 + 4);
}

/// **Test: A key whose cut points fall inside a multi-byte char is fully masked instead of panicking.**
#[test]
fn mask_token_non_ascii_does_not_panic() {
    assert_eq!(mask_token("ключ-ключ-ключ"), "***");
}
