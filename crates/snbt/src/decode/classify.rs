//! Scalar type inference for unquoted literals

use crate::error::{Error, Result};
use crate::tag::TagType;
use crate::value::Value;

/// Lexical shape of an unquoted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
}

impl Literal {
    pub fn tag_type(self) -> TagType {
        match self {
            Literal::Byte => TagType::Byte,
            Literal::Short => TagType::Short,
            Literal::Int => TagType::Int,
            Literal::Long => TagType::Long,
            Literal::Float => TagType::Float,
            Literal::Double => TagType::Double,
            Literal::String => TagType::String,
        }
    }
}

fn strip_sign(s: &str) -> &str {
    s.strip_prefix(['+', '-']).unwrap_or(s)
}

/// `[+-]?[0-9]+`
fn is_integer(s: &str) -> bool {
    let digits = strip_sign(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `[+-]?[0-9]*\.?[0-9]+`
fn is_decimal(s: &str) -> bool {
    let body = strip_sign(s);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, f),
        None => ("", body),
    };
    !frac_part.is_empty()
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.bytes().all(|b| b.is_ascii_digit())
}

/// Split a token into its body and trailing type suffix, if any.
fn split_suffix(token: &str) -> Option<(&str, char)> {
    let last = token.chars().next_back()?;
    if matches!(last, 'B' | 'b' | 'S' | 's' | 'L' | 'l' | 'F' | 'f' | 'D' | 'd') {
        Some((&token[..token.len() - 1], last.to_ascii_lowercase()))
    } else {
        None
    }
}

/// Decide which scalar type an unquoted token denotes.
///
/// Order matters: a bare digit run is an int before anything else is tried,
/// and doubles are checked ahead of the integer-suffixed kinds.
pub fn classify(token: &str) -> Literal {
    if is_integer(token) {
        return Literal::Int;
    }
    let Some((body, suffix)) = split_suffix(token) else {
        return Literal::String;
    };
    match suffix {
        'd' if is_decimal(body) => Literal::Double,
        'b' if is_integer(body) => Literal::Byte,
        's' if is_integer(body) => Literal::Short,
        'l' if is_integer(body) => Literal::Long,
        'f' if is_decimal(body) => Literal::Float,
        _ => Literal::String,
    }
}

fn overflow(token: &str, target: TagType) -> Error {
    Error::NumericOverflow {
        literal: token.to_string(),
        target,
    }
}

/// Convert a classified numeric token into its value.
///
/// Returns `None` for [`Literal::String`]; the caller owns string storage.
pub fn parse_numeric(token: &str, kind: Literal) -> Result<Option<Value>> {
    let body = match kind {
        Literal::Int => token,
        Literal::String => return Ok(None),
        _ => &token[..token.len() - 1],
    };
    let target = kind.tag_type();
    let value = match kind {
        Literal::Byte => Value::Byte(body.parse().map_err(|_| overflow(token, target))?),
        Literal::Short => Value::Short(body.parse().map_err(|_| overflow(token, target))?),
        Literal::Int => Value::Int(body.parse().map_err(|_| overflow(token, target))?),
        Literal::Long => Value::Long(body.parse().map_err(|_| overflow(token, target))?),
        Literal::Float => Value::Float(body.parse().map_err(|_| overflow(token, target))?),
        Literal::Double => Value::Double(body.parse().map_err(|_| overflow(token, target))?),
        Literal::String => return Ok(None),
    };
    Ok(Some(value))
}
