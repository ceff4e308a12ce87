//! Pre-tokenization stream decoration.
//!
//! The factory owns one [`Decorations`] value. Right before a tokenizer or
//! generator is constructed, the factory runs the raw source/target through
//! the matching `decorate_*` operation exactly once; whatever comes back is
//! what the tokenizer/generator sees. With nothing configured every operation
//! is an identity move-through, so decoration stays fully optional and
//! side-effect-free.

mod compress;

pub use compress::{ZstdInputDecorator, ZstdOutputDecorator};

use crate::codec::ObjectCodec;
use crate::context::IoContext;
use crate::io::{ByteSource, ByteTarget, CharSource, CharTarget, DataSource};
use std::io;
use std::sync::Arc;

/// Caller-supplied capability that may replace a raw input with a wrapping
/// one (transparent decompression, instrumentation, different buffering).
///
/// Every method defaults to handing the source back untouched, which is also
/// how an implementation declines to decorate a particular representation or
/// a particular call (e.g. keyed off a field of `ctxt`). Streams are owned
/// boxed values, so "decline" and "replace" are both expressed through the
/// return value; the original is never touched behind the caller's back.
///
/// A single configured decorator must be prepared for whichever
/// representation the factory actually constructs from; supplying one that
/// only overrides `decorate_byte_source` is fine as long as the factory is
/// only ever fed byte sources.
///
/// Errors are genuine I/O failures only (a decorator that eagerly reads a
/// header, say) and propagate to the factory caller verbatim.
pub trait InputDecorator: Send + Sync {
    fn decorate_byte_source(
        &self,
        ctxt: &IoContext,
        src: ByteSource,
    ) -> io::Result<ByteSource> {
        let _ = ctxt;
        Ok(src)
    }

    fn decorate_char_source(
        &self,
        ctxt: &IoContext,
        src: CharSource,
    ) -> io::Result<CharSource> {
        let _ = ctxt;
        Ok(src)
    }

    fn decorate_data_source(
        &self,
        ctxt: &IoContext,
        src: DataSource,
    ) -> io::Result<DataSource> {
        let _ = ctxt;
        Ok(src)
    }
}

/// Output-side counterpart of [`InputDecorator`], over the two target
/// representations.
pub trait OutputDecorator: Send + Sync {
    fn decorate_byte_target(
        &self,
        ctxt: &IoContext,
        out: ByteTarget,
    ) -> io::Result<ByteTarget> {
        let _ = ctxt;
        Ok(out)
    }

    fn decorate_char_target(
        &self,
        ctxt: &IoContext,
        out: CharTarget,
    ) -> io::Result<CharTarget> {
        let _ = ctxt;
        Ok(out)
    }
}

/// Holds at most one input decorator, at most one output decorator, and the
/// codec association. Last `set` wins; there is no chaining. Cloning shares
/// the configured values (everything is behind an `Arc`).
///
/// No internal synchronization: configure first, then treat as read-only.
/// Racing `set_*` against `decorate_*` on a shared instance must be
/// synchronized by the owner.
#[derive(Clone, Default)]
pub struct Decorations {
    codec: Option<Arc<dyn ObjectCodec>>,
    input: Option<Arc<dyn InputDecorator>>,
    output: Option<Arc<dyn OutputDecorator>>,
}

impl Decorations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the codec association; `None` clears it. Stored as-is, never
    /// validated.
    pub fn set_codec(&mut self, codec: Option<Arc<dyn ObjectCodec>>) -> &mut Self {
        self.codec = codec;
        self
    }

    pub fn codec(&self) -> Option<Arc<dyn ObjectCodec>> {
        self.codec.clone()
    }

    /// Replace the input decorator; `None` clears it and restores identity
    /// behavior for all input representations.
    pub fn set_input_decorator(&mut self, d: Option<Arc<dyn InputDecorator>>) -> &mut Self {
        self.input = d;
        self
    }

    pub fn input_decorator(&self) -> Option<Arc<dyn InputDecorator>> {
        self.input.clone()
    }

    /// Replace the output decorator; `None` clears it.
    pub fn set_output_decorator(&mut self, d: Option<Arc<dyn OutputDecorator>>) -> &mut Self {
        self.output = d;
        self
    }

    pub fn output_decorator(&self) -> Option<Arc<dyn OutputDecorator>> {
        self.output.clone()
    }

    pub fn decorate_byte_source(
        &self,
        ctxt: &IoContext,
        src: ByteSource,
    ) -> io::Result<ByteSource> {
        match &self.input {
            Some(d) => d.decorate_byte_source(ctxt, src),
            None => Ok(src),
        }
    }

    pub fn decorate_char_source(
        &self,
        ctxt: &IoContext,
        src: CharSource,
    ) -> io::Result<CharSource> {
        match &self.input {
            Some(d) => d.decorate_char_source(ctxt, src),
            None => Ok(src),
        }
    }

    pub fn decorate_data_source(
        &self,
        ctxt: &IoContext,
        src: DataSource,
    ) -> io::Result<DataSource> {
        match &self.input {
            Some(d) => d.decorate_data_source(ctxt, src),
            None => Ok(src),
        }
    }

    pub fn decorate_byte_target(
        &self,
        ctxt: &IoContext,
        out: ByteTarget,
    ) -> io::Result<ByteTarget> {
        match &self.output {
            Some(d) => d.decorate_byte_target(ctxt, out),
            None => Ok(out),
        }
    }

    pub fn decorate_char_target(
        &self,
        ctxt: &IoContext,
        out: CharTarget,
    ) -> io::Result<CharTarget> {
        match &self.output {
            Some(d) => d.decorate_char_target(ctxt, out),
            None => Ok(out),
        }
    }
}
