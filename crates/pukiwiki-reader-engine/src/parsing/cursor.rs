use crate::error::ParseError;

/// A cursor for character-by-character parsing over the whole source text.
///
/// Positions are byte indices into `s`, always on a char boundary. An optional
/// `limit` restricts scanning to a prefix of the text so that a slice can be
/// sub-parsed without copying it.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The full text being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    i: usize,
    /// Exclusive upper bound on scanning, if narrower than `s`.
    limit: Option<usize>,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self {
            s,
            i: 0,
            limit: None,
        }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Moves the cursor back (or forward) to a position previously returned by [`Cursor::pos`].
    pub fn set_pos(&mut self, i: usize) {
        self.i = i;
    }

    /// Restricts scanning to `s[..limit]`, or lifts the restriction with `None`.
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    fn end(&self) -> usize {
        self.limit.map_or(self.s.len(), |l| l.min(self.s.len()))
    }

    fn rest(&self) -> &'a str {
        let end = self.end();
        if self.i >= end { "" } else { &self.s[self.i..end] }
    }

    /// Returns true if at the end of the scannable text.
    pub fn eof(&self) -> bool {
        self.i >= self.end()
    }

    /// Returns the character under the cursor, or `None` past the end.
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns true if the character under the cursor is `c`.
    pub fn is_at(&self, c: char) -> bool {
        self.current() == Some(c)
    }

    /// Looks `offset` characters ahead without consuming; `peek(0)` is [`Cursor::current`].
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.rest().chars().nth(offset)
    }

    /// Returns the character just before the cursor.
    pub fn previous(&self) -> Option<char> {
        self.s[..self.i].chars().next_back()
    }

    /// Returns true at the very start of the text or right after a newline.
    pub fn at_line_start(&self) -> bool {
        self.i == 0 || self.previous() == Some('\n')
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Returns the text from the cursor up to, not including, the next newline.
    pub fn line_remainder(&self) -> &'a str {
        let rest = self.rest();
        rest.find('\n').map_or(rest, |n| &rest[..n])
    }

    /// Advances by one character, returning the consumed character.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` characters, stopping early at the end.
    pub fn skip(&mut self, n: usize) -> &mut Self {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
        self
    }

    /// Skips spaces and tabs, never crossing a newline.
    pub fn skip_whitespace(&mut self) -> &mut Self {
        while self
            .current()
            .is_some_and(|c| c != '\n' && c.is_whitespace())
        {
            self.advance();
        }
        self
    }

    /// Consumes `lit` character by character.
    ///
    /// Fails with [`ParseError::TokenExpected`] at the first mismatch; characters
    /// matched before the mismatch stay consumed.
    pub fn take_literal(&mut self, lit: &str) -> Result<&mut Self, ParseError> {
        for expected in lit.chars() {
            if self.current() != Some(expected) {
                return Err(self.expected(&[lit]));
            }
            self.advance();
        }
        Ok(self)
    }

    /// Consumes the maximal run of characters satisfying `pred`.
    ///
    /// Returns `None` when the character under the cursor does not satisfy
    /// `pred`, which is distinct from an empty match.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> Option<&'a str> {
        let start = self.i;
        if !self.current().is_some_and(&pred) {
            return None;
        }
        while self.current().is_some_and(&pred) {
            self.advance();
        }
        Some(&self.s[start..self.i])
    }

    /// Consumes characters until the consumed text ends with one of `delimiters`.
    ///
    /// The delimiter is stripped from the returned text. With `consume_delimiter`
    /// false the cursor is left on the first character of the delimiter.
    /// Running out of input first is a [`ParseError::TokenExpected`].
    pub fn take_until_any(
        &mut self,
        delimiters: &[&str],
        consume_delimiter: bool,
    ) -> Result<&'a str, ParseError> {
        let start = self.i;
        while self.advance().is_some() {
            let taken = &self.s[start..self.i];
            if let Some(delimiter) = delimiters.iter().find(|d| taken.ends_with(**d)) {
                if !consume_delimiter {
                    self.i -= delimiter.len();
                }
                return Ok(&taken[..taken.len() - delimiter.len()]);
            }
        }
        Err(self.expected(delimiters))
    }

    /// Tests whether any of `delimiters` starts at the cursor without consuming.
    ///
    /// When the text ends part-way through a candidate, `fail_on_end` turns
    /// that into an error instead of a non-match.
    pub fn matches_ahead(&self, delimiters: &[&str], fail_on_end: bool) -> Result<bool, ParseError> {
        'candidates: for delimiter in delimiters {
            for (offset, wanted) in delimiter.chars().enumerate() {
                match self.peek(offset) {
                    Some(c) if c == wanted => {}
                    Some(_) => continue 'candidates,
                    None if fail_on_end => return Err(self.expected(delimiters)),
                    None => continue 'candidates,
                }
            }
            return Ok(true);
        }
        Ok(false)
    }

    /// 1-based line number of the cursor.
    pub fn line(&self) -> usize {
        self.s[..self.i].matches('\n').count() + 1
    }

    /// 1-based column (in characters) of the cursor.
    pub fn column(&self) -> usize {
        let line_start = self.s[..self.i].rfind('\n').map_or(0, |n| n + 1);
        self.s[line_start..self.i].chars().count() + 1
    }

    /// Builds a "token expected" error for the cursor's current position.
    pub fn expected(&self, expected: &[&str]) -> ParseError {
        let found = self.current().map(String::from).unwrap_or_default();
        ParseError::TokenExpected {
            found: token_kind(&found),
            expected: expected.iter().map(|e| token_kind(e)).collect(),
            line: self.line(),
            column: self.column(),
        }
    }
}

fn token_kind(s: &str) -> String {
    match s {
        "" => "EOF".to_string(),
        " " => "SPACE".to_string(),
        "\t" => "TAB".to_string(),
        "\n" => "NEWLINE".to_string(),
        other => other.to_string(),
    }
}
