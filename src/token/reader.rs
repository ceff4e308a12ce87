use super::Token;
use crate::error::FactoryError;
use crate::io::CharSource;

/// Pull tokenizer over a char source.
pub struct TokenReader {
    src: CharSource,
    peeked: Option<char>,
    pos: u64,
    max_string_bytes: usize,
}

impl std::fmt::Debug for TokenReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenReader")
            .field("peeked", &self.peeked)
            .field("pos", &self.pos)
            .field("max_string_bytes", &self.max_string_bytes)
            .finish_non_exhaustive()
    }
}

impl TokenReader {
    pub(crate) fn new(src: CharSource, max_string_bytes: usize) -> Self {
        Self {
            src,
            peeked: None,
            pos: 0,
            max_string_bytes,
        }
    }

    /// Chars consumed so far; reported in syntax errors.
    pub fn pos(&self) -> u64 {
        self.pos
    }

    /// Next token, or `None` at clean end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, FactoryError> {
        let c = loop {
            match self.bump()? {
                Some(c) if c == ' ' || c == '\t' || c == '\n' || c == '\r' => continue,
                Some(c) => break c,
                None => return Ok(None),
            }
        };

        let tok = match c {
            '{' => Token::ObjectStart,
            '}' => Token::ObjectEnd,
            '[' => Token::ArrayStart,
            ']' => Token::ArrayEnd,
            ',' => Token::Comma,
            ':' => Token::Colon,
            '"' => self.read_string()?,
            '-' | '0'..='9' => self.read_number(c)?,
            'a'..='z' => self.read_keyword(c)?,
            _ => return Err(self.err("unexpected character")),
        };
        Ok(Some(tok))
    }

    fn err(&self, msg: &'static str) -> FactoryError {
        FactoryError::syntax(self.pos, msg)
    }

    fn bump(&mut self) -> Result<Option<char>, FactoryError> {
        let next = match self.peeked.take() {
            Some(c) => Some(c),
            None => self.src.next_char()?,
        };
        if next.is_some() {
            self.pos += 1;
        }
        Ok(next)
    }

    fn peek(&mut self) -> Result<Option<char>, FactoryError> {
        if self.peeked.is_none() {
            self.peeked = self.src.next_char()?;
        }
        Ok(self.peeked)
    }

    fn read_string(&mut self) -> Result<Token, FactoryError> {
        let mut s = String::new();
        loop {
            let c = match self.bump()? {
                Some(c) => c,
                None => return Err(self.err("unterminated string")),
            };
            match c {
                '"' => return Ok(Token::Str(s)),
                '\\' => s.push(self.read_escape()?),
                c if (c as u32) < 0x20 => {
                    return Err(self.err("raw control character in string"));
                }
                c => s.push(c),
            }
            if s.len() > self.max_string_bytes {
                return Err(self.err("string token exceeds configured limit"));
            }
        }
    }

    fn read_escape(&mut self) -> Result<char, FactoryError> {
        let c = match self.bump()? {
            Some(c) => c,
            None => return Err(self.err("unterminated escape")),
        };
        Ok(match c {
            '"' => '"',
            '\\' => '\\',
            '/' => '/',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => self.read_unicode_escape()?,
            _ => return Err(self.err("unknown escape")),
        })
    }

    fn read_unicode_escape(&mut self) -> Result<char, FactoryError> {
        let hi = self.read_hex4()?;
        let code = match hi {
            0xd800..=0xdbff => {
                // Surrogate pair: the low half must follow immediately.
                if self.bump()? != Some('\\') || self.bump()? != Some('u') {
                    return Err(self.err("unpaired surrogate escape"));
                }
                let lo = self.read_hex4()?;
                if !(0xdc00..=0xdfff).contains(&lo) {
                    return Err(self.err("invalid low surrogate escape"));
                }
                0x10000 + ((hi - 0xd800) << 10) + (lo - 0xdc00)
            }
            0xdc00..=0xdfff => return Err(self.err("unpaired surrogate escape")),
            c => c,
        };
        char::from_u32(code).ok_or_else(|| self.err("invalid unicode escape"))
    }

    fn read_hex4(&mut self) -> Result<u32, FactoryError> {
        let mut v = 0u32;
        for _ in 0..4 {
            let d = match self.bump()? {
                Some(c) => c.to_digit(16),
                None => None,
            };
            match d {
                Some(d) => v = (v << 4) | d,
                None => return Err(self.err("bad hex digit in unicode escape")),
            }
        }
        Ok(v)
    }

    fn read_number(&mut self, first: char) -> Result<Token, FactoryError> {
        let mut text = String::new();
        text.push(first);
        let mut float = false;
        while let Some(c) = self.peek()? {
            match c {
                '0'..='9' => {}
                '.' | 'e' | 'E' => float = true,
                '+' | '-' => {
                    // Only valid inside an exponent; the parse below rejects
                    // anything else.
                    if !float {
                        break;
                    }
                }
                _ => break,
            }
            text.push(c);
            self.bump()?;
        }
        if float {
            match text.parse::<f64>() {
                Ok(f) if f.is_finite() => Ok(Token::Float(f)),
                _ => Err(self.err("malformed number")),
            }
        } else {
            match text.parse::<i64>() {
                Ok(i) => Ok(Token::Int(i)),
                // Out of i64 range; keep the value as a float.
                Err(_) => match text.parse::<f64>() {
                    Ok(f) if f.is_finite() => Ok(Token::Float(f)),
                    _ => Err(self.err("malformed number")),
                },
            }
        }
    }

    fn read_keyword(&mut self, first: char) -> Result<Token, FactoryError> {
        let mut word = String::new();
        word.push(first);
        while let Some(c) = self.peek()? {
            if !c.is_ascii_alphabetic() {
                break;
            }
            word.push(c);
            self.bump()?;
        }
        match word.as_str() {
            "true" => Ok(Token::Bool(true)),
            "false" => Ok(Token::Bool(false)),
            "null" => Ok(Token::Null),
            _ => Err(self.err("unknown keyword")),
        }
    }
}
