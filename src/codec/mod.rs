//! Object-level mapping between in-memory values and token streams.
//!
//! The factory merely stores the association (set/get, never validated);
//! higher layers fetch it and drive the token readers/writers with it.

mod tree;

pub use tree::TreeCodec;

use crate::error::FactoryError;
use crate::token::{TokenReader, TokenWriter};

/// In-memory value tree. Object members keep their input order.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

/// The codec seam: turns token streams into values and back. Implement this
/// to plug a different object model into the factory.
pub trait ObjectCodec: Send + Sync + 'static {
    /// Read one complete value from the token stream.
    fn read_value(&self, r: &mut TokenReader) -> Result<Value, FactoryError>;

    /// Write one complete value to the token stream.
    fn write_value(&self, w: &mut TokenWriter, value: &Value) -> Result<(), FactoryError>;
}
