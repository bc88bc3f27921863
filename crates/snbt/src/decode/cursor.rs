//! Character sources with bounded rewind

use std::collections::VecDeque;

use crate::error::{Error, Result};

/// How far past a mark the parser ever reads before rewinding.
pub const LOOKAHEAD: usize = 3;

/// Character source consumed by every reader in the parser.
///
/// Implementors supply raw `Option`-returning primitives; the provided
/// methods turn exhaustion into [`Error::EndOfInput`].
pub trait Cursor {
    /// Next character without consuming it.
    fn peek_char(&mut self) -> Option<char>;

    /// Consume and return the next character.
    fn next_char(&mut self) -> Option<char>;

    /// Remember the current position.
    fn mark(&mut self);

    /// Rewind to the last mark.
    fn reset_to_mark(&mut self) -> Result<()>;

    fn peek(&mut self) -> Result<char> {
        self.peek_char().ok_or(Error::EndOfInput)
    }

    fn advance(&mut self) -> Result<char> {
        self.next_char().ok_or(Error::EndOfInput)
    }

    /// Consume zero or more whitespace characters.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_whitespace() {
                break;
            }
            self.next_char();
        }
    }
}

/// Cursor over an in-memory string slice.
#[derive(Debug, Clone)]
pub struct StrCursor<'a> {
    src: &'a str,
    pos: usize,
    mark: usize,
}

impl<'a> StrCursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            mark: 0,
        }
    }

    /// Unread remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }
}

impl Cursor for StrCursor<'_> {
    #[inline]
    fn peek_char(&mut self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    fn next_char(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn mark(&mut self) {
        self.mark = self.pos;
    }

    fn reset_to_mark(&mut self) -> Result<()> {
        self.pos = self.mark;
        Ok(())
    }
}

/// Cursor over any character iterator, buffering at most [`LOOKAHEAD`]
/// characters after a mark so they can be replayed.
#[derive(Debug)]
pub struct CharsCursor<I: Iterator<Item = char>> {
    inner: I,
    pending: VecDeque<char>,
    recorded: Option<Vec<char>>,
}

impl<I: Iterator<Item = char>> CharsCursor<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            pending: VecDeque::with_capacity(LOOKAHEAD),
            recorded: None,
        }
    }
}

impl<I: Iterator<Item = char>> Cursor for CharsCursor<I> {
    fn peek_char(&mut self) -> Option<char> {
        if self.pending.is_empty() {
            let c = self.inner.next()?;
            self.pending.push_back(c);
        }
        self.pending.front().copied()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = match self.pending.pop_front() {
            Some(c) => c,
            None => self.inner.next()?,
        };
        if let Some(rec) = self.recorded.as_mut() {
            if rec.len() < LOOKAHEAD {
                rec.push(c);
            } else {
                // Read past the limit; the mark is no longer usable.
                self.recorded = None;
            }
        }
        Some(c)
    }

    fn mark(&mut self) {
        self.recorded = Some(Vec::with_capacity(LOOKAHEAD));
    }

    fn reset_to_mark(&mut self) -> Result<()> {
        let rec = self.recorded.take().ok_or(Error::LookaheadExceeded(LOOKAHEAD))?;
        for c in rec.into_iter().rev() {
            self.pending.push_front(c);
        }
        self.recorded = Some(Vec::with_capacity(LOOKAHEAD));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_cursor_rewinds_to_mark() {
        let mut c = StrCursor::new("[B;1b]");
        c.mark();
        assert_eq!(c.advance().unwrap(), '[');
        assert_eq!(c.advance().unwrap(), 'B');
        assert_eq!(c.advance().unwrap(), ';');
        c.reset_to_mark().unwrap();
        assert_eq!(c.peek().unwrap(), '[');
        assert_eq!(c.rest(), "[B;1b]");
    }

    #[test]
    fn chars_cursor_replays_lookahead() {
        let mut c = CharsCursor::new("[1,2]".chars());
        c.mark();
        for expected in ['[', '1', ','] {
            assert_eq!(c.advance().unwrap(), expected);
        }
        c.reset_to_mark().unwrap();
        let all: String = core::iter::from_fn(|| c.next_char()).collect();
        assert_eq!(all, "[1,2]");
    }

    #[test]
    fn chars_cursor_peek_then_mark() {
        let mut c = CharsCursor::new("ab".chars());
        assert_eq!(c.peek().unwrap(), 'a');
        c.mark();
        assert_eq!(c.advance().unwrap(), 'a');
        c.reset_to_mark().unwrap();
        assert_eq!(c.advance().unwrap(), 'a');
        assert_eq!(c.advance().unwrap(), 'b');
        assert!(matches!(c.advance(), Err(Error::EndOfInput)));
    }

    #[test]
    fn chars_cursor_mark_expires_past_lookahead() {
        let mut c = CharsCursor::new("abcdef".chars());
        c.mark();
        for _ in 0..=LOOKAHEAD {
            c.advance().unwrap();
        }
        assert!(matches!(c.reset_to_mark(), Err(Error::LookaheadExceeded(3))));
    }

    #[test]
    fn skip_whitespace_allows_none() {
        let mut c = StrCursor::new("x");
        c.skip_whitespace();
        assert_eq!(c.peek().unwrap(), 'x');
        let mut c = StrCursor::new(" \t\n ");
        c.skip_whitespace();
        assert!(matches!(c.peek(), Err(Error::EndOfInput)));
    }
}
