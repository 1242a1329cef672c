use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SigilError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SigilError::render("x").to_string().contains("render error:"));
    assert!(SigilError::encode("x").to_string().contains("encode error:"));
}

#[test]
fn empty_input_message_is_user_facing() {
    let err = SigilError::EmptyOrUnusableInput;
    assert!(err.is_empty_input());
    assert_eq!(
        err.to_string(),
        "phrase must contain at least one letter A-Z"
    );
    assert!(!SigilError::validation("size").is_empty_input());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SigilError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn result_alias_propagates_with_question_mark() {
    fn inner() -> SigilResult<u32> {
        Err(SigilError::validation("size"))
    }
    fn outer() -> SigilResult<u32> {
        let v = inner()?;
        Ok(v + 1)
    }
    assert!(matches!(outer(), Err(SigilError::Validation(_))));
}
