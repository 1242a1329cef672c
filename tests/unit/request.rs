use super::*;

#[test]
fn missing_size_uses_the_default() {
    let opts = SigilOpts::default();
    assert_eq!(SigilRequest::new("moon").validate(&opts).unwrap(), 400);
    assert_eq!(
        SigilRequest::new("moon").with_size(64).validate(&opts).unwrap(),
        64
    );
}

#[test]
fn size_outside_range_is_rejected() {
    let opts = SigilOpts::default();
    for size in [0, 2049] {
        let err = SigilRequest::new("moon").with_size(size).validate(&opts).unwrap_err();
        assert!(matches!(err, SigilError::Validation(_)), "{size}");
    }
    assert!(SigilRequest::new("moon").with_size(2048).validate(&opts).is_ok());
}

#[test]
fn phrase_length_is_counted_in_characters() {
    let opts = SigilOpts {
        max_phrase_chars: 3,
        ..SigilOpts::default()
    };
    assert!(SigilRequest::new("ééé").validate(&opts).is_ok());
    assert!(SigilRequest::new("abcd").validate(&opts).is_err());
    assert!(SigilRequest::new("   ").validate(&opts).is_err());
}

#[test]
fn letterless_phrase_passes_policy() {
    // the generator reports it as unusable input instead
    assert!(SigilRequest::new("123!!").validate(&SigilOpts::default()).is_ok());
}

#[test]
fn request_json_shape() {
    let req: SigilRequest = serde_json::from_str(r#"{"phrase":"LOVE"}"#).unwrap();
    assert_eq!(req, SigilRequest::new("LOVE"));
    let req: SigilRequest = serde_json::from_str(r#"{"phrase":"LOVE","size":32}"#).unwrap();
    assert_eq!(req.size, Some(32));
    assert_eq!(
        serde_json::to_string(&SigilRequest::new("x")).unwrap(),
        r#"{"phrase":"x"}"#
    );
}
