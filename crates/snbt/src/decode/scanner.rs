use std::collections::HashSet;
use std::sync::Arc;

use crate::decode::cursor::Cursor;
use crate::error::Result;

const ESCAPE: char = '\\';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub quoted: bool,
}

#[inline]
pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Characters allowed in unquoted strings and tag names.
#[inline]
pub fn is_unquoted_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '_' | '.')
}

/// Read a quoted or unquoted string at the cursor.
///
/// Quoted text is returned verbatim: a backslash only stops the following
/// delimiter from closing the string and is kept in the output. Unquoted
/// text stops at the first character outside the unquoted alphabet, which
/// is left unread.
pub fn scan<C: Cursor>(cursor: &mut C) -> Result<Token> {
    let first = cursor.peek()?;
    let mut text = String::new();
    if is_quote(first) {
        cursor.advance()?;
        let mut escaped = false;
        loop {
            let c = cursor.advance()?;
            if c == first && !escaped {
                break;
            }
            text.push(c);
            escaped = c == ESCAPE;
        }
        return Ok(Token { text, quoted: true });
    }
    while let Some(c) = cursor.peek_char() {
        if !is_unquoted_char(c) {
            break;
        }
        text.push(c);
        cursor.next_char();
    }
    let trimmed = text.trim();
    if trimmed.len() != text.len() {
        text = trimmed.to_string();
    }
    Ok(Token {
        text,
        quoted: false,
    })
}

/// Per-parse string pool; equal strings handed out share one allocation.
#[derive(Debug, Default)]
pub struct Interner {
    pool: HashSet<Arc<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, s: String) -> Arc<str> {
        if let Some(existing) = self.pool.get(s.as_str()) {
            return Arc::clone(existing);
        }
        let shared: Arc<str> = Arc::from(s);
        self.pool.insert(Arc::clone(&shared));
        shared
    }

    /// Intern when `enabled`, otherwise just move `s` into fresh storage.
    pub fn maybe_intern(&mut self, s: String, enabled: bool) -> Arc<str> {
        if enabled { self.intern(s) } else { Arc::from(s) }
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::cursor::StrCursor;
    use crate::error::Error;

    #[test]
    fn unquoted_stops_before_delimiter() {
        let mut c = StrCursor::new("abc_1.5-x:rest");
        let t = scan(&mut c).unwrap();
        assert_eq!(t, Token { text: "abc_1.5-x".into(), quoted: false });
        assert_eq!(c.rest(), ":rest");
    }

    #[test]
    fn quoted_keeps_backslash() {
        let mut c = StrCursor::new(r#""a\"b" tail"#);
        let t = scan(&mut c).unwrap();
        assert_eq!(t.text, r#"a\"b"#);
        assert!(t.quoted);
        assert_eq!(c.rest(), " tail");
    }

    #[test]
    fn single_quotes_allow_double_inside() {
        let mut c = StrCursor::new(r#"' "hi" '"#);
        let t = scan(&mut c).unwrap();
        assert_eq!(t.text, r#" "hi" "#);
    }

    #[test]
    fn unterminated_quote_is_end_of_input() {
        let mut c = StrCursor::new("\"abc");
        assert!(matches!(scan(&mut c), Err(Error::EndOfInput)));
    }

    #[test]
    fn interner_shares_storage() {
        let mut pool = Interner::new();
        let a = pool.intern("name".to_string());
        let b = pool.intern("name".to_string());
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(pool.len(), 1);
        let c = pool.maybe_intern("name".to_string(), false);
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(a, c);
    }
}
