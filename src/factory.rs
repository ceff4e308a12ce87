use crate::codec::ObjectCodec;
use crate::config::FactoryConfig;
use crate::context::IoContext;
use crate::decor::{Decorations, InputDecorator, OutputDecorator};
use crate::error::FactoryError;
use crate::io::{
    ByteSource, ByteTarget, CharSource, CharTarget, DataInputRead, DataSource, StringSource,
    Utf8Reader, Utf8Writer,
};
use crate::token::{TokenReader, TokenWriter};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

/// Constructs token readers and writers over any supported stream
/// representation. Each constructor builds a fresh [`IoContext`], runs the
/// raw stream through the matching decoration operation exactly once, and
/// hands whatever comes back to the tokenizer/generator.
///
/// Configure first, then treat the factory as read-only; it carries no
/// internal synchronization.
#[derive(Default)]
pub struct TokenStreamFactory {
    cfg: FactoryConfig,
    decor: Decorations,
}

impl TokenStreamFactory {
    pub fn new(cfg: FactoryConfig) -> Self {
        Self {
            cfg,
            decor: Decorations::new(),
        }
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.cfg
    }

    /// Copy this factory: config, codec association and both decorators all
    /// carry over, so the copy constructs identically-decorated streams.
    /// Clear the decorators on the copy if per-instance decoration is wanted.
    pub fn copy(&self) -> Self {
        Self {
            cfg: self.cfg.clone(),
            decor: self.decor.clone(),
        }
    }

    pub fn set_codec(&mut self, codec: Option<Arc<dyn ObjectCodec>>) -> &mut Self {
        self.decor.set_codec(codec);
        self
    }

    pub fn codec(&self) -> Option<Arc<dyn ObjectCodec>> {
        self.decor.codec()
    }

    pub fn set_input_decorator(&mut self, d: Option<Arc<dyn InputDecorator>>) -> &mut Self {
        self.decor.set_input_decorator(d);
        self
    }

    pub fn input_decorator(&self) -> Option<Arc<dyn InputDecorator>> {
        self.decor.input_decorator()
    }

    pub fn set_output_decorator(&mut self, d: Option<Arc<dyn OutputDecorator>>) -> &mut Self {
        self.decor.set_output_decorator(d);
        self
    }

    pub fn output_decorator(&self) -> Option<Arc<dyn OutputDecorator>> {
        self.decor.output_decorator()
    }

    /* ---------------------------- readers ---------------------------- */

    /// Token reader over a raw byte source supplied by the caller.
    pub fn reader_from_bytes(&self, src: ByteSource) -> Result<TokenReader, FactoryError> {
        self.build_byte_reader(src, false)
    }

    /// Token reader over an already-decoded char source.
    pub fn reader_from_chars(&self, src: CharSource) -> Result<TokenReader, FactoryError> {
        let ctxt = self.context(false);
        let src = self.decor.decorate_char_source(&ctxt, src)?;
        Ok(TokenReader::new(src, self.cfg.max_string_bytes))
    }

    /// Token reader over pre-decoded structured input.
    pub fn reader_from_data(&self, src: DataSource) -> Result<TokenReader, FactoryError> {
        let ctxt = self.context(false);
        let src = self.decor.decorate_data_source(&ctxt, src)?;
        let chars = Utf8Reader::with_capacity(self.cfg.read_buffer, DataInputRead::new(src));
        Ok(TokenReader::new(Box::new(chars), self.cfg.max_string_bytes))
    }

    /// Token reader over a file the factory opens (and therefore manages).
    pub fn reader_from_path(&self, path: impl AsRef<Path>) -> Result<TokenReader, FactoryError> {
        let file = File::open(path)?;
        self.build_byte_reader(Box::new(file), true)
    }

    /// Token reader over an owned string. Routed through the char-source
    /// decoration path; no byte decoding is involved.
    pub fn reader_from_string(
        &self,
        text: impl Into<String>,
    ) -> Result<TokenReader, FactoryError> {
        self.reader_from_chars(Box::new(StringSource::new(text)))
    }

    /* ---------------------------- writers ---------------------------- */

    /// Token writer over a raw byte target supplied by the caller.
    pub fn writer_to_bytes(&self, out: ByteTarget) -> Result<TokenWriter, FactoryError> {
        self.build_byte_writer(out, false)
    }

    /// Token writer over a char target.
    pub fn writer_to_chars(&self, out: CharTarget) -> Result<TokenWriter, FactoryError> {
        let ctxt = self.context(false);
        let out = self.decor.decorate_char_target(&ctxt, out)?;
        Ok(TokenWriter::new(out))
    }

    /// Token writer over a file the factory creates (and therefore manages).
    pub fn writer_to_path(&self, path: impl AsRef<Path>) -> Result<TokenWriter, FactoryError> {
        let file = File::create(path)?;
        self.build_byte_writer(Box::new(file), true)
    }

    /* ---------------------------- internal ---------------------------- */

    fn context(&self, managed: bool) -> IoContext {
        IoContext::new(self.cfg.read_buffer, self.cfg.write_buffer, managed)
    }

    fn build_byte_reader(
        &self,
        src: ByteSource,
        managed: bool,
    ) -> Result<TokenReader, FactoryError> {
        let ctxt = self.context(managed);
        let src = self.decor.decorate_byte_source(&ctxt, src)?;
        let chars = Utf8Reader::with_capacity(self.cfg.read_buffer, src);
        Ok(TokenReader::new(Box::new(chars), self.cfg.max_string_bytes))
    }

    fn build_byte_writer(
        &self,
        out: ByteTarget,
        managed: bool,
    ) -> Result<TokenWriter, FactoryError> {
        let ctxt = self.context(managed);
        let out = self.decor.decorate_byte_target(&ctxt, out)?;
        let chars = Utf8Writer::with_capacity(self.cfg.write_buffer, out);
        Ok(TokenWriter::new(Box::new(chars)))
    }
}
