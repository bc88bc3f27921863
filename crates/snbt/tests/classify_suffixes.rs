use snbt::{Value, parse_value};

#[test]
fn literal_suffixes_pick_the_scalar_type() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(parse_value("5b")?, Value::Byte(5));
    assert_eq!(parse_value("5s")?, Value::Short(5));
    assert_eq!(parse_value("5")?, Value::Int(5));
    assert_eq!(parse_value("5l")?, Value::Long(5));
    assert_eq!(parse_value("5.0f")?, Value::Float(5.0));
    assert_eq!(parse_value("5.0d")?, Value::Double(5.0));
    assert_eq!(parse_value("hello")?, Value::String("hello".into()));
    Ok(())
}

#[test]
fn uppercase_suffixes_and_signs() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(parse_value("-12B")?, Value::Byte(-12));
    assert_eq!(parse_value("+300S")?, Value::Short(300));
    assert_eq!(parse_value("-9000000000L")?, Value::Long(-9_000_000_000));
    assert_eq!(parse_value(".25F")?, Value::Float(0.25));
    assert_eq!(parse_value("-1.5D")?, Value::Double(-1.5));
    assert_eq!(parse_value("7d")?, Value::Double(7.0));
    Ok(())
}

#[test]
fn quoted_numbers_stay_strings() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(parse_value("\"5b\"")?, Value::String("5b".into()));
    assert_eq!(parse_value("'12'")?, Value::String("12".into()));
    Ok(())
}

#[test]
fn numeric_lookalikes_fall_back_to_strings() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(parse_value("1.5b")?, Value::String("1.5b".into()));
    assert_eq!(parse_value("5.d")?, Value::String("5.d".into()));
    assert_eq!(parse_value("minecraft.stone")?, Value::String("minecraft.stone".into()));
    Ok(())
}

#[test]
fn surrounding_whitespace_is_trimmed() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(parse_value("  \n 42 \t")?, Value::Int(42));
    Ok(())
}
