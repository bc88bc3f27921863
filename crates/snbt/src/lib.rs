#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod tag;
pub mod value;
pub mod decode;

#[cfg(feature = "serde")]
pub mod de;
#[cfg(feature = "json")]
pub mod json;

pub use crate::error::{Error, Result};
pub use crate::options::Options;
pub use crate::tag::TagType;
pub use crate::value::{Compound, List, Value};

#[cfg(feature = "serde")]
pub use crate::de::from_str;

use std::io::Read;

use crate::decode::parser;

/// Parse any SNBT construct: compound, list, typed array or literal.
pub fn parse_value(s: &str) -> Result<Value> {
    parse_value_with(s, &Options::default())
}

pub fn parse_value_with(s: &str, options: &Options) -> Result<Value> {
    parser::parse_to_value(s, options)
}

/// Parse text that must start with `{`.
pub fn parse_compound(s: &str) -> Result<Compound> {
    parse_compound_with(s, &Options::default())
}

pub fn parse_compound_with(s: &str, options: &Options) -> Result<Compound> {
    parser::parse_to_compound(s, options)
}

/// Parse text that must start with `[` and is read as a generic list.
pub fn parse_list(s: &str) -> Result<List> {
    parse_list_with(s, &Options::default())
}

pub fn parse_list_with(s: &str, options: &Options) -> Result<List> {
    parser::parse_to_list(s, options)
}

pub fn decode_from_reader<R: Read>(mut reader: R, options: &Options) -> Result<Value> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    parse_value_with(&s, options)
}
