use super::Token;
use crate::error::FactoryError;
use crate::io::CharTarget;
use std::io;

/// Token-level generator. Emits the minimal text for each token; a single
/// space is inserted only between two adjacent bare words/numbers, where the
/// boundary would otherwise be lost.
pub struct TokenWriter {
    out: CharTarget,
    sep_pending: bool,
}

impl TokenWriter {
    pub(crate) fn new(out: CharTarget) -> Self {
        Self {
            out,
            sep_pending: false,
        }
    }

    pub fn write_token(&mut self, tok: &Token) -> Result<(), FactoryError> {
        let bare = matches!(
            tok,
            Token::Int(_) | Token::Float(_) | Token::Bool(_) | Token::Null
        );
        if bare && self.sep_pending {
            self.out.write_char(' ')?;
        }
        match tok {
            Token::ObjectStart => self.out.write_char('{')?,
            Token::ObjectEnd => self.out.write_char('}')?,
            Token::ArrayStart => self.out.write_char('[')?,
            Token::ArrayEnd => self.out.write_char(']')?,
            Token::Comma => self.out.write_char(',')?,
            Token::Colon => self.out.write_char(':')?,
            Token::Str(s) => self.write_quoted(s)?,
            Token::Int(i) => self.out.write_str(&i.to_string())?,
            Token::Float(f) => self.write_float(*f)?,
            Token::Bool(true) => self.out.write_str("true")?,
            Token::Bool(false) => self.out.write_str("false")?,
            Token::Null => self.out.write_str("null")?,
        }
        self.sep_pending = bare;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), FactoryError> {
        self.out.flush()?;
        Ok(())
    }

    /// Flush and release the (possibly decorated) target.
    pub fn finish(mut self) -> Result<CharTarget, FactoryError> {
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_quoted(&mut self, s: &str) -> Result<(), FactoryError> {
        self.out.write_char('"')?;
        let mut plain = 0..0usize;
        for (i, c) in s.char_indices() {
            let esc: Option<&str> = match c {
                '"' => Some("\\\""),
                '\\' => Some("\\\\"),
                '\n' => Some("\\n"),
                '\r' => Some("\\r"),
                '\t' => Some("\\t"),
                '\u{8}' => Some("\\b"),
                '\u{c}' => Some("\\f"),
                c if (c as u32) < 0x20 => None, // escaped numerically below
                _ => {
                    plain.end = i + c.len_utf8();
                    continue;
                }
            };
            if plain.start < plain.end {
                self.out.write_str(&s[plain.clone()])?;
            }
            match esc {
                Some(e) => self.out.write_str(e)?,
                None => self.out.write_str(&format!("\\u{:04x}", c as u32))?,
            }
            plain = (i + c.len_utf8())..(i + c.len_utf8());
        }
        if plain.start < plain.end {
            self.out.write_str(&s[plain])?;
        }
        self.out.write_char('"')?;
        Ok(())
    }

    fn write_float(&mut self, f: f64) -> Result<(), FactoryError> {
        if !f.is_finite() {
            return Err(FactoryError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "non-finite number is not representable",
            )));
        }
        // Keep integral floats recognizable as floats on re-read.
        if f.fract() == 0.0 && f.abs() < 1e15 {
            self.out.write_str(&format!("{f:.1}"))?;
        } else {
            self.out.write_str(&f.to_string())?;
        }
        Ok(())
    }
}
