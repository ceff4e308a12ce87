//! Built-in zstd decorators: the transparent (de)compression case the
//! decoration hook exists for. Byte representations only; char and data
//! sources pass through via the trait defaults.

use super::{InputDecorator, OutputDecorator};
use crate::context::IoContext;
use crate::io::{ByteSource, ByteTarget};
use std::io::{self, BufReader};

/// Wraps byte sources in a streaming zstd decoder, so the tokenizer reads
/// plaintext out of compressed input without knowing.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZstdInputDecorator;

impl InputDecorator for ZstdInputDecorator {
    fn decorate_byte_source(&self, ctxt: &IoContext, src: ByteSource) -> io::Result<ByteSource> {
        let br = BufReader::with_capacity(ctxt.read_buffer(), src);
        let dec = zstd::stream::read::Decoder::with_buffer(br)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("zstd: {e}")))?;
        Ok(Box::new(dec))
    }
}

/// Wraps byte targets in a streaming zstd encoder. The encoder finishes the
/// frame when the target is dropped.
#[derive(Clone, Copy, Debug)]
pub struct ZstdOutputDecorator {
    level: i32,
}

impl ZstdOutputDecorator {
    pub fn new(level: i32) -> Self {
        Self { level }
    }
}

impl OutputDecorator for ZstdOutputDecorator {
    fn decorate_byte_target(&self, _ctxt: &IoContext, out: ByteTarget) -> io::Result<ByteTarget> {
        let enc = zstd::stream::write::Encoder::new(out, self.level)?;
        Ok(Box::new(enc.auto_finish()))
    }
}
