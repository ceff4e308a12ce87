use std::io::{self, Read};

use super::DataSource;

/// Pre-decoded, byte-at-a-time structured input. Unlike `Read` there is no
/// caller-visible buffering contract; the producer has already materialized
/// the bytes (slice, mmap, message payload) and hands them out one at a time.
pub trait DataInput: Send {
    /// Next byte, or `None` at end of input.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

/// `DataInput` over an owned byte buffer.
pub struct BytesDataInput {
    data: Vec<u8>,
    pos: usize,
}

impl BytesDataInput {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            pos: 0,
        }
    }
}

impl DataInput for BytesDataInput {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        match self.data.get(self.pos) {
            Some(&b) => {
                self.pos += 1;
                Ok(Some(b))
            }
            None => Ok(None),
        }
    }
}

/// Adapter so the UTF-8 decoding path can run over a (possibly decorated)
/// data source.
pub(crate) struct DataInputRead {
    src: DataSource,
}

impl DataInputRead {
    pub(crate) fn new(src: DataSource) -> Self {
        Self { src }
    }
}

impl Read for DataInputRead {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut n = 0;
        while n < buf.len() {
            match self.src.read_byte()? {
                Some(b) => {
                    buf[n] = b;
                    n += 1;
                }
                None => break,
            }
        }
        Ok(n)
    }
}
