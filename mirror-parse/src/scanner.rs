//! Character scanner shared by the locator and the segmenter.
//!
//! The scanner is a forward-only cursor over source text that knows how to
//! skip the constructs that would otherwise confuse structural scanning:
//! string and template literals (including escapes), line and block comments,
//! and nested brackets. It never backtracks, so every public operation
//! terminates on every input.

/// Marker for input whose brackets never balance out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unbalanced;

pub(crate) fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_' || c == b'$'
}

pub(crate) fn is_ident_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_' || c == b'$'
}

pub(crate) struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.src.as_bytes().get(self.pos + offset).copied()
    }

    pub fn bump(&mut self) {
        if self.pos < self.src.len() {
            self.pos += 1;
        }
    }

    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.src[start..end]
    }

    /// Skip whitespace and comments. Returns the cleaned text of a `/** */`
    /// doc block when one is the final piece of trivia before the next token;
    /// plain comments reset any doc seen earlier in the same trivia run.
    pub fn skip_trivia(&mut self) -> Option<String> {
        let mut doc = None;
        loop {
            match self.peek() {
                Some(c) if c.is_ascii_whitespace() => self.bump(),
                Some(b'/') if self.peek_at(1) == Some(b'/') => {
                    doc = None;
                    self.skip_line_comment();
                }
                Some(b'/') if self.peek_at(1) == Some(b'*') => {
                    let start = self.pos;
                    self.skip_block_comment();
                    let text = self.slice(start, self.pos);
                    doc = if text.starts_with("/**") {
                        Some(clean_doc_block(text))
                    } else {
                        None
                    };
                }
                _ => return doc,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == b'\n' {
                return;
            }
            self.bump();
        }
    }

    fn skip_block_comment(&mut self) {
        self.bump();
        self.bump();
        while !self.eof() {
            if self.peek() == Some(b'*') && self.peek_at(1) == Some(b'/') {
                self.bump();
                self.bump();
                return;
            }
            self.bump();
        }
    }

    /// Skip a string or template literal; assumes the cursor is at the
    /// opening quote. Escape sequences are honored; template interpolation is
    /// treated as literal text up to the closing backtick.
    pub fn skip_string(&mut self) {
        let Some(quote) = self.peek() else { return };
        self.bump();
        while let Some(c) = self.peek() {
            if c == b'\\' {
                self.bump();
                self.bump();
            } else if c == quote {
                self.bump();
                return;
            } else {
                self.bump();
            }
        }
    }

    pub fn at_identifier(&self) -> bool {
        self.peek().is_some_and(is_ident_start)
    }

    /// Read an identifier at the cursor, or `None` if not at one.
    pub fn read_identifier(&mut self) -> Option<&'a str> {
        if !self.at_identifier() {
            return None;
        }
        let start = self.pos;
        while self.peek().is_some_and(is_ident_continue) {
            self.bump();
        }
        Some(self.slice(start, self.pos))
    }

    /// Consume expression text, tracking bracket depth and skipping strings
    /// and comments, until one of `stops` appears at depth zero. The stop
    /// byte is returned without being consumed.
    ///
    /// A depth-zero closing bracket that is not a requested stop, or end of
    /// input, means the expression never balanced out.
    pub fn scan_expression(&mut self, stops: &[u8]) -> Result<u8, Unbalanced> {
        let mut depth: usize = 0;
        loop {
            let Some(c) = self.peek() else {
                return Err(Unbalanced);
            };
            if depth == 0 && stops.contains(&c) {
                return Ok(c);
            }
            match c {
                b'\'' | b'"' | b'`' => self.skip_string(),
                b'/' if self.peek_at(1) == Some(b'/') => self.skip_line_comment(),
                b'/' if self.peek_at(1) == Some(b'*') => self.skip_block_comment(),
                b'{' | b'(' | b'[' => {
                    depth += 1;
                    self.bump();
                }
                b'}' | b')' | b']' => {
                    if depth == 0 {
                        return Err(Unbalanced);
                    }
                    depth -= 1;
                    self.bump();
                }
                _ => self.bump(),
            }
        }
    }

    /// Consume a balanced `{ ... }` block; assumes the cursor is at the
    /// opening brace. Returns the block text including both braces.
    pub fn read_braced_block(&mut self) -> Result<&'a str, Unbalanced> {
        debug_assert_eq!(self.peek(), Some(b'{'));
        let start = self.pos;
        self.bump();
        self.scan_expression(&[b'}'])?;
        self.bump();
        Ok(self.slice(start, self.pos))
    }
}

/// Strip `/** ... */` delimiters and per-line `*` gutters from a doc block.
pub(crate) fn clean_doc_block(text: &str) -> String {
    let inner = text
        .trim_start_matches("/**")
        .trim_end_matches("*/")
        .trim();
    inner
        .lines()
        .map(|line| line.trim().trim_start_matches('*').trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
