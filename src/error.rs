use std::io;

#[derive(thiserror::Error, Debug)]
pub enum FactoryError {
    #[error("io: {0}")]
    Io(#[from] io::Error),

    /// Error returned by the user-provided object codec implementation.
    #[error("codec: {0}")]
    Codec(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Malformed input text (bad escape, stray character, number overflow, ...).
    /// `pos` is the char offset at which the tokenizer gave up.
    #[error("syntax error at char {pos}: {msg}")]
    Syntax { pos: u64, msg: &'static str },
}

impl FactoryError {
    pub(crate) fn syntax(pos: u64, msg: &'static str) -> Self {
        FactoryError::Syntax { pos, msg }
    }
}
