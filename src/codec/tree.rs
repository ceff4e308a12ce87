//! Default `ObjectCodec`: recursive descent over the lexical tokens.

use super::{ObjectCodec, Value};
use crate::error::FactoryError;
use crate::token::{Token, TokenReader, TokenWriter};

const MAX_DEPTH: u32 = 128;

#[derive(Clone, Copy, Debug, Default)]
pub struct TreeCodec;

impl TreeCodec {
    pub fn new() -> Self {
        Self
    }

    fn parse(
        &self,
        first: Token,
        r: &mut TokenReader,
        depth: u32,
    ) -> Result<Value, FactoryError> {
        if depth > MAX_DEPTH {
            return Err(FactoryError::syntax(r.pos(), "nesting too deep"));
        }
        match first {
            Token::Null => Ok(Value::Null),
            Token::Bool(b) => Ok(Value::Bool(b)),
            Token::Int(i) => Ok(Value::Int(i)),
            Token::Float(f) => Ok(Value::Float(f)),
            Token::Str(s) => Ok(Value::Str(s)),
            Token::ArrayStart => self.parse_array(r, depth),
            Token::ObjectStart => self.parse_object(r, depth),
            _ => Err(FactoryError::syntax(r.pos(), "unexpected token")),
        }
    }

    fn parse_array(&self, r: &mut TokenReader, depth: u32) -> Result<Value, FactoryError> {
        let mut items = Vec::new();
        loop {
            let tok = self.pull(r)?;
            if items.is_empty() && tok == Token::ArrayEnd {
                return Ok(Value::Array(items));
            }
            items.push(self.parse(tok, r, depth + 1)?);
            match self.pull(r)? {
                Token::Comma => continue,
                Token::ArrayEnd => return Ok(Value::Array(items)),
                _ => return Err(FactoryError::syntax(r.pos(), "expected ',' or ']'")),
            }
        }
    }

    fn parse_object(&self, r: &mut TokenReader, depth: u32) -> Result<Value, FactoryError> {
        let mut members = Vec::new();
        loop {
            let key = match self.pull(r)? {
                Token::ObjectEnd if members.is_empty() => return Ok(Value::Object(members)),
                Token::Str(s) => s,
                _ => return Err(FactoryError::syntax(r.pos(), "expected member name")),
            };
            if self.pull(r)? != Token::Colon {
                return Err(FactoryError::syntax(r.pos(), "expected ':'"));
            }
            let first = self.pull(r)?;
            let value = self.parse(first, r, depth + 1)?;
            members.push((key, value));
            match self.pull(r)? {
                Token::Comma => continue,
                Token::ObjectEnd => return Ok(Value::Object(members)),
                _ => return Err(FactoryError::syntax(r.pos(), "expected ',' or '}'")),
            }
        }
    }

    fn pull(&self, r: &mut TokenReader) -> Result<Token, FactoryError> {
        r.next_token()?
            .ok_or_else(|| FactoryError::syntax(r.pos(), "unexpected end of input"))
    }

    fn emit(&self, w: &mut TokenWriter, value: &Value) -> Result<(), FactoryError> {
        match value {
            Value::Null => w.write_token(&Token::Null),
            Value::Bool(b) => w.write_token(&Token::Bool(*b)),
            Value::Int(i) => w.write_token(&Token::Int(*i)),
            Value::Float(f) => w.write_token(&Token::Float(*f)),
            Value::Str(s) => w.write_token(&Token::Str(s.clone())),
            Value::Array(items) => {
                w.write_token(&Token::ArrayStart)?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        w.write_token(&Token::Comma)?;
                    }
                    self.emit(w, item)?;
                }
                w.write_token(&Token::ArrayEnd)
            }
            Value::Object(members) => {
                w.write_token(&Token::ObjectStart)?;
                for (i, (key, item)) in members.iter().enumerate() {
                    if i > 0 {
                        w.write_token(&Token::Comma)?;
                    }
                    w.write_token(&Token::Str(key.clone()))?;
                    w.write_token(&Token::Colon)?;
                    self.emit(w, item)?;
                }
                w.write_token(&Token::ObjectEnd)
            }
        }
    }
}

impl ObjectCodec for TreeCodec {
    fn read_value(&self, r: &mut TokenReader) -> Result<Value, FactoryError> {
        let first = self.pull(r)?;
        self.parse(first, r, 0)
    }

    fn write_value(&self, w: &mut TokenWriter, value: &Value) -> Result<(), FactoryError> {
        self.emit(w, value)
    }
}
