use crate::decode::classify::{Literal, classify, parse_numeric};
use crate::decode::cursor::{Cursor, StrCursor};
use crate::decode::scanner::{Interner, Token, scan};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::tag::TagType;
use crate::value::{Compound, List, Value};

const COMPOUND_START: char = '{';
const COMPOUND_END: char = '}';
const ENTRY_VALUE_INDICATOR: char = ':';
const ENTRY_SEPARATOR: char = ',';
const ARRAY_START: char = '[';
const ARRAY_END: char = ']';
const ARRAY_TYPE_INDICATOR: char = ';';

/// Deepest nesting of compounds and lists a parser will descend into.
pub const MAX_DEPTH: usize = 512;

/// Recursive-descent reader over a [`Cursor`].
///
/// One parser handles one input; it holds no state beyond its cursor, the
/// options and the string pool for this call.
pub struct Parser<C: Cursor> {
    cursor: C,
    options: Options,
    interner: Interner,
    depth: usize,
}

impl<'a> Parser<StrCursor<'a>> {
    pub fn from_input(input: &'a str) -> Self {
        Self::with_options(StrCursor::new(input), Options::default())
    }
}

impl<C: Cursor> Parser<C> {
    pub fn with_options(cursor: C, options: Options) -> Self {
        Self {
            cursor,
            options,
            interner: Interner::new(),
            depth: 0,
        }
    }

    pub fn into_cursor(self) -> C {
        self.cursor
    }

    /// Read any value, dispatching on the next character.
    pub fn parse_value(&mut self) -> Result<Value> {
        match self.cursor.peek()? {
            COMPOUND_START => Ok(Value::Compound(self.parse_compound()?)),
            ARRAY_START => self.parse_array_or_list(),
            _ => self.parse_literal(),
        }
    }

    pub fn parse_compound(&mut self) -> Result<Compound> {
        self.descend()?;
        let compound = self.read_compound();
        self.depth -= 1;
        compound
    }

    fn read_compound(&mut self) -> Result<Compound> {
        self.expect(COMPOUND_START, "'{' to open a compound")?;
        let mut compound = Compound::new();
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.peek()? == COMPOUND_END {
                self.cursor.advance()?;
                break;
            }

            let key = self.scan_required("tag name")?;
            let key = self.interner.maybe_intern(key.text, self.options.intern_names);

            self.cursor.skip_whitespace();
            self.expect(ENTRY_VALUE_INDICATOR, "':' after tag name")?;
            self.cursor.skip_whitespace();

            let value = self.parse_value()?;
            compound.insert(key, value);

            if !self.separator_or_end(COMPOUND_END, "',' or '}' in compound")? {
                break;
            }
        }
        Ok(compound)
    }

    /// Read a generic list; typed-array headers are not recognised here.
    pub fn parse_list(&mut self) -> Result<List> {
        self.descend()?;
        let list = self.read_list();
        self.depth -= 1;
        list
    }

    fn read_list(&mut self) -> Result<List> {
        self.expect(ARRAY_START, "'[' to open a list")?;
        let mut list = List::new();
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.peek()? == ARRAY_END {
                self.cursor.advance()?;
                break;
            }

            let entry = self.parse_value()?;
            list.push(entry);

            if !self.separator_or_end(ARRAY_END, "',' or ']' in list")? {
                break;
            }
        }
        Ok(list)
    }

    fn parse_array_or_list(&mut self) -> Result<Value> {
        self.cursor.mark();
        self.expect(ARRAY_START, "'[' to open a list or array")?;
        let second = self.cursor.next_char();
        let third = self.cursor.next_char();

        let element = match (second, third) {
            (Some('B'), Some(ARRAY_TYPE_INDICATOR)) => TagType::Byte,
            (Some('I'), Some(ARRAY_TYPE_INDICATOR)) => TagType::Int,
            (Some('L'), Some(ARRAY_TYPE_INDICATOR)) => TagType::Long,
            (Some(other), Some(ARRAY_TYPE_INDICATOR)) => return Err(Error::UnknownArrayType(other)),
            _ => {
                self.cursor.reset_to_mark()?;
                return Ok(Value::List(self.parse_list()?));
            }
        };
        self.parse_array(element)
    }

    /// Read the body of a typed array whose `[X;` header was consumed.
    fn parse_array(&mut self, element: TagType) -> Result<Value> {
        let mut values = ArrayBuf::new(element);
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.peek()? == ARRAY_END {
                self.cursor.advance()?;
                break;
            }

            // A token that stops at once is an empty string here, so
            // nested structures and stray separators fail as mismatches.
            let token = scan(&mut self.cursor)?;
            values.push(self.literal_from(token)?)?;

            if !self.separator_or_end(ARRAY_END, "',' or ']' in array")? {
                break;
            }
        }
        Ok(values.into_value())
    }

    /// Read a scalar. Quoted text is always a string.
    fn parse_literal(&mut self) -> Result<Value> {
        let token = self.scan_required("value")?;
        self.literal_from(token)
    }

    fn literal_from(&mut self, token: Token) -> Result<Value> {
        let Token { text, quoted } = token;
        let kind = if quoted { Literal::String } else { classify(&text) };
        if let Some(number) = parse_numeric(&text, kind)? {
            return Ok(number);
        }
        Ok(Value::String(
            self.interner.maybe_intern(text, self.options.intern_values),
        ))
    }

    /// Scan a string, rejecting an unquoted run that consumed nothing.
    fn scan_required(&mut self, what: &'static str) -> Result<Token> {
        let token = scan(&mut self.cursor)?;
        if !token.quoted && token.text.is_empty() {
            return Err(Error::malformed(what, self.cursor.peek()?));
        }
        Ok(token)
    }

    fn descend(&mut self) -> Result<()> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::DepthLimitExceeded(MAX_DEPTH));
        }
        self.depth += 1;
        Ok(())
    }

    fn expect(&mut self, wanted: char, what: &'static str) -> Result<()> {
        let c = self.cursor.advance()?;
        if c != wanted {
            return Err(Error::malformed(what, c));
        }
        Ok(())
    }

    /// After an element: `true` on a separator, `false` on the terminator.
    fn separator_or_end(&mut self, end: char, what: &'static str) -> Result<bool> {
        self.cursor.skip_whitespace();
        match self.cursor.advance()? {
            ENTRY_SEPARATOR => Ok(true),
            c if c == end => Ok(false),
            c => Err(Error::malformed(what, c)),
        }
    }
}

/// Accumulator for one typed array; elements must match exactly.
enum ArrayBuf {
    Byte(Vec<i8>),
    Int(Vec<i32>),
    Long(Vec<i64>),
}

impl ArrayBuf {
    fn new(element: TagType) -> Self {
        match element {
            TagType::Byte => ArrayBuf::Byte(Vec::new()),
            TagType::Long => ArrayBuf::Long(Vec::new()),
            _ => ArrayBuf::Int(Vec::new()),
        }
    }

    fn element_type(&self) -> TagType {
        match self {
            ArrayBuf::Byte(_) => TagType::Byte,
            ArrayBuf::Int(_) => TagType::Int,
            ArrayBuf::Long(_) => TagType::Long,
        }
    }

    fn push(&mut self, value: Value) -> Result<()> {
        match (self, value) {
            (ArrayBuf::Byte(v), Value::Byte(b)) => v.push(b),
            (ArrayBuf::Int(v), Value::Int(i)) => v.push(i),
            (ArrayBuf::Long(v), Value::Long(l)) => v.push(l),
            (buf, other) => {
                return Err(Error::TypeMismatch {
                    expected: buf.element_type(),
                    found: other.tag_type(),
                });
            }
        }
        Ok(())
    }

    fn into_value(self) -> Value {
        match self {
            ArrayBuf::Byte(v) => Value::ByteArray(v),
            ArrayBuf::Int(v) => Value::IntArray(v),
            ArrayBuf::Long(v) => Value::LongArray(v),
        }
    }
}

pub fn parse_to_value(input: &str, options: &Options) -> Result<Value> {
    Parser::with_options(StrCursor::new(input.trim()), *options).parse_value()
}

pub fn parse_to_compound(input: &str, options: &Options) -> Result<Compound> {
    Parser::with_options(StrCursor::new(input.trim()), *options).parse_compound()
}

pub fn parse_to_list(input: &str, options: &Options) -> Result<List> {
    Parser::with_options(StrCursor::new(input.trim()), *options).parse_list()
}
