use super::*;

#[test]
fn banana_keeps_first_occurrences() {
    assert_eq!(normalize_letters("BANANA").as_str(), "BAN");
}

#[test]
fn lowercase_and_symbols_are_normalized() {
    assert_eq!(normalize_letters("hello, World 42").as_str(), "HELOWRD");
    assert_eq!(normalize_letters("AAA").as_str(), "A");
}

#[test]
fn normalization_is_idempotent() {
    for phrase in ["BANANA", "The quick brown fox", "zz yy xx", "Mississippi"] {
        let once = normalize_letters(phrase);
        let twice = normalize_letters(once.as_str());
        assert_eq!(once, twice);
    }
}

#[test]
fn sequence_is_empty_iff_no_letters() {
    assert!(normalize_letters("123!!").is_empty());
    assert!(normalize_letters("").is_empty());
    assert!(normalize_letters("ÀÉÎ").is_empty());
    assert!(!normalize_letters("1a").is_empty());
}

#[test]
fn require_non_empty_maps_to_empty_input_error() {
    let err = normalize_letters("...").require_non_empty().unwrap_err();
    assert!(err.is_empty_input());
    assert_eq!(
        normalize_letters("ok").require_non_empty().unwrap().as_str(),
        "OK"
    );
}

#[test]
fn full_alphabet_caps_at_twenty_six() {
    let s = normalize_letters("the quick brown fox jumps over the lazy dog");
    assert_eq!(s.len(), 26);
}
