use snbt::{Error, TagType, Value, parse_value};

#[test]
fn byte_array() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(parse_value("[B;1b,2b,3b]")?, Value::ByteArray(vec![1, 2, 3]));
    Ok(())
}

#[test]
fn int_and_long_arrays() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(parse_value("[I; 1, -2 ,3 ]")?, Value::IntArray(vec![1, -2, 3]));
    assert_eq!(parse_value("[L;1L,2l]")?, Value::LongArray(vec![1, 2]));
    Ok(())
}

#[test]
fn empty_arrays_keep_their_width() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(parse_value("[B;]")?, Value::ByteArray(vec![]));
    assert_eq!(parse_value("[I; ]")?, Value::IntArray(vec![]));
    assert_eq!(parse_value("[L;]")?.tag_type(), TagType::LongArray);
    Ok(())
}

#[test]
fn unsuffixed_element_in_byte_array_is_rejected() {
    let err = parse_value("[B;1,2]").unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch { expected: TagType::Byte, found: TagType::Int }
    ));
}

#[test]
fn element_width_must_match_exactly() {
    let err = parse_value("[L;1L,2]").unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch { expected: TagType::Long, found: TagType::Int }
    ));
    let err = parse_value("[I;1b]").unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { found: TagType::Byte, .. }));
    let err = parse_value("[I;\"1\"]").unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { found: TagType::String, .. }));
}

#[test]
fn unknown_array_type() {
    assert!(matches!(parse_value("[b;1b]"), Err(Error::UnknownArrayType('b'))));
    assert!(matches!(parse_value("[S;1s]"), Err(Error::UnknownArrayType('S'))));
}

#[test]
fn arrays_nest_inside_compounds() -> Result<(), Box<dyn std::error::Error>> {
    let v = parse_value("{uuid:[I;1,2,3,4],flags:[B;]}")?;
    let c = v.as_compound().ok_or("not a compound")?;
    assert_eq!(c.get("uuid"), Some(&Value::IntArray(vec![1, 2, 3, 4])));
    assert_eq!(c.get("flags"), Some(&Value::ByteArray(vec![])));
    Ok(())
}

#[test]
fn overflowing_array_element() {
    let err = parse_value("[B;127b,128b]").unwrap_err();
    assert!(matches!(err, Error::NumericOverflow { target: TagType::Byte, .. }));
}

#[test]
fn non_literal_elements_are_type_mismatches() {
    for src in ["[I;[1]]", "[B;{a:1b}]", "[L;,1L]"] {
        let err = parse_value(src).unwrap_err();
        assert!(
            matches!(err, Error::TypeMismatch { found: TagType::String, .. }),
            "{src}: {err:?}"
        );
    }
}

#[test]
fn trailing_comma_in_array() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(parse_value("[I;1,]")?, Value::IntArray(vec![1]));
    Ok(())
}
