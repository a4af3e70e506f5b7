//! Token cursor over the text of an area file.
//!
//! Area files are a stream of whitespace-separated tokens: numbers, bit
//! flags written as letters, bare words, and strings terminated by `~`.
//! Reads never fail. A missing token reads as zero or empty and leaves the
//! cursor where it was.

use super::tables::flag_bit;

pub(crate) struct AreaReader<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> AreaReader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// 1-based line of the cursor.
    pub fn line(&self) -> usize {
        self.text[..self.pos].matches('\n').count() + 1
    }

    /// Consume the next non-whitespace character.
    pub fn letter(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.bump()
    }

    /// The next non-whitespace character, without consuming it.
    pub fn peek_letter(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.peek()
    }

    /// A signed decimal number. `1|4` reads as the sum of its parts.
    pub fn number(&mut self) -> i64 {
        self.skip_whitespace();
        let rest = self.rest();
        let sign = usize::from(rest.starts_with(['-', '+']));
        let digits = rest[sign..].bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return 0;
        }
        let token = &rest[..sign + digits];
        self.pos += token.len();
        let value: i64 = token.parse().unwrap_or(0);
        if self.peek() == Some('|') {
            self.bump();
            value + self.number()
        } else {
            value
        }
    }

    /// A bit flag value: letters (`ABd`), a number, or both, optionally
    /// joined to further values by `|`.
    pub fn flag(&mut self) -> i64 {
        self.skip_whitespace();
        let negative = self.peek() == Some('-');
        if negative {
            self.bump();
        }

        let mut bits = 0;
        while let Some(c) = self.peek().filter(char::is_ascii_alphabetic) {
            bits |= flag_bit(c);
            self.bump();
        }
        let digits = self.rest().bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 {
            bits += self.rest()[..digits].parse::<i64>().unwrap_or(0);
            self.pos += digits;
        }
        if self.peek() == Some('|') {
            self.bump();
            bits += self.flag();
        }

        if negative {
            -bits
        } else {
            bits
        }
    }

    /// A string terminated by `~`, with carriage returns removed.
    pub fn string(&mut self) -> String {
        self.skip_whitespace();
        let rest = self.rest();
        let (body, consumed) = match rest.find('~') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        self.pos += consumed;
        body.replace('\r', "")
    }

    /// A bare word, or a word wrapped in single or double quotes.
    pub fn word(&mut self) -> String {
        self.skip_whitespace();
        match self.peek() {
            Some(quote @ ('\'' | '"')) => {
                self.bump();
                self.until(quote)
            }
            _ => {
                let rest = self.rest();
                let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
                self.pos += len;
                rest[..len].to_string()
            }
        }
    }

    /// Text between two `quote` characters, if the next token starts with one.
    pub fn quoted(&mut self, quote: char) -> Option<String> {
        if self.peek_letter() != Some(quote) {
            return None;
        }
        self.bump();
        Some(self.until(quote))
    }

    fn until(&mut self, end: char) -> String {
        let rest = self.rest();
        match rest.find(end) {
            Some(len) => {
                self.pos += len + end.len_utf8();
                rest[..len].to_string()
            }
            None => {
                self.pos = self.text.len();
                rest.to_string()
            }
        }
    }

    /// Skip the remainder of the current line.
    pub fn to_eol(&mut self) {
        match self.rest().find('\n') {
            Some(len) => self.pos += len + 1,
            None => self.pos = self.text.len(),
        }
    }

    /// Move to the next line that starts with `#` followed by one of `words`.
    /// Without one, move to the end of the text.
    pub fn skip_to_marker(&mut self, words: &[&str]) {
        let mut offset = self.pos;
        for line in self.rest().split_inclusive('\n') {
            let trimmed = line.trim_start();
            if let Some(marker) = trimmed.strip_prefix('#') {
                let word = marker.split_whitespace().next().unwrap_or("");
                if words.contains(&word) {
                    self.pos = offset + (line.len() - trimmed.len());
                    return;
                }
            }
            offset += line.len();
        }
        self.pos = self.text.len();
    }
}
