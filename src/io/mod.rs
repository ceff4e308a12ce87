//! Stream representations the factory (and its decorators) work over.
//!
//! Byte streams use the std `Read`/`Write` traits; char streams and
//! pre-decoded data input use the crate-local traits below so they can be
//! decorated through the same boxed, owned shape as byte streams.

mod chars;
mod counting;
mod data_input;

pub use chars::{CharRead, CharWrite, StringSource, Utf8Reader, Utf8Writer};
pub use counting::{CountingReader, CountingWriter};
pub use data_input::{BytesDataInput, DataInput};
pub(crate) use data_input::DataInputRead;

use std::io::{Read, Write};

/// Raw byte input, as handed to the factory and to input decorators.
pub type ByteSource = Box<dyn Read + Send>;
/// Raw byte output.
pub type ByteTarget = Box<dyn Write + Send>;
/// Decoded character input.
pub type CharSource = Box<dyn CharRead>;
/// Character output.
pub type CharTarget = Box<dyn CharWrite>;
/// Pre-decoded, byte-at-a-time structured input.
pub type DataSource = Box<dyn DataInput>;
