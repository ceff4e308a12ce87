// src/config.rs

/// Factory configuration parameters.
/// Build with `FactoryConfig::builder().foo(...).build()`.
#[derive(Clone, Debug)]
pub struct FactoryConfig {
    /// Buffer size (bytes) used when the factory wraps a raw byte source
    /// (file reads, UTF-8 decoding). Also advertised to decorators via the
    /// per-construction `IoContext`.
    pub read_buffer: usize,

    /// Buffer size (bytes) used when the factory wraps a raw byte target.
    pub write_buffer: usize,

    /// Upper bound on a single string token's decoded length (bytes).
    /// Guards the tokenizer against unterminated strings in huge inputs.
    pub max_string_bytes: usize,
}

impl FactoryConfig {
    /// Start building a config with sane defaults.
    ///
    /// Defaults:
    /// - read_buffer      = 64 KiB
    /// - write_buffer     = 64 KiB
    /// - max_string_bytes = 16 MiB
    pub fn builder() -> FactoryConfigBuilder {
        FactoryConfigBuilder {
            read_buffer: 64 * 1024,
            write_buffer: 64 * 1024,
            max_string_bytes: 16 * 1024 * 1024,
        }
    }
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Fluent builder for `FactoryConfig`.
#[derive(Clone, Debug)]
pub struct FactoryConfigBuilder {
    read_buffer: usize,
    write_buffer: usize,
    max_string_bytes: usize,
}

impl FactoryConfigBuilder {
    pub fn read_buffer(mut self, bufsize: usize) -> Self {
        self.read_buffer = bufsize;
        self
    }
    pub fn write_buffer(mut self, bufsize: usize) -> Self {
        self.write_buffer = bufsize;
        self
    }
    pub fn max_string_bytes(mut self, bytes: usize) -> Self {
        self.max_string_bytes = bytes;
        self
    }

    pub fn build(self) -> FactoryConfig {
        FactoryConfig {
            read_buffer: self.read_buffer,
            write_buffer: self.write_buffer,
            max_string_bytes: self.max_string_bytes,
        }
    }
}
