//! Decoding pipeline: cursor, string scanner, literal classifier and readers

pub mod classify;
pub mod cursor;
pub mod parser;
pub mod scanner;
