//! Lexical reader/writer for the structured text format. Tokenizers built by
//! the factory always consume a [`crate::io::CharSource`]; they never learn
//! whether the underlying stream was decorated.

mod reader;
mod writer;

pub use reader::TokenReader;
pub use writer::TokenWriter;

/// One lexical token. Structure tokens and separators are kept distinct so a
/// token-level copy (reader into writer) reproduces the document shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    ObjectStart,
    ObjectEnd,
    ArrayStart,
    ArrayEnd,
    Comma,
    Colon,
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}
