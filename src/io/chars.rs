use std::io::{self, BufWriter, Read, Write};

/// Decoded character input. The tokenizer consumes one of these regardless of
/// whether the underlying input was bytes, a string, or pre-decoded data.
pub trait CharRead: Send {
    /// Next decoded char, or `None` at end of input.
    fn next_char(&mut self) -> io::Result<Option<char>>;
}

/// Character output consumed by the generator.
pub trait CharWrite: Send {
    fn write_str(&mut self, s: &str) -> io::Result<()>;

    fn write_char(&mut self, c: char) -> io::Result<()> {
        let mut buf = [0u8; 4];
        self.write_str(c.encode_utf8(&mut buf))
    }

    fn flush(&mut self) -> io::Result<()>;
}

/// Incremental UTF-8 decoder over any byte source.
pub struct Utf8Reader<R: Read> {
    inner: R,
    buf: Vec<u8>,
    start: usize,
    end: usize,
    eof: bool,
}

impl<R: Read> Utf8Reader<R> {
    pub fn with_capacity(capacity: usize, inner: R) -> Self {
        Self {
            inner,
            buf: vec![0u8; capacity.max(16)],
            start: 0,
            end: 0,
            eof: false,
        }
    }

    /// Compact and refill until at least one full sequence (<= 4 bytes) is
    /// buffered or the source is exhausted.
    fn fill(&mut self) -> io::Result<()> {
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }
        while !self.eof && self.end < 4 {
            let n = self.inner.read(&mut self.buf[self.end..])?;
            if n == 0 {
                self.eof = true;
            } else {
                self.end += n;
            }
        }
        Ok(())
    }
}

impl<R: Read + Send> CharRead for Utf8Reader<R> {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        if self.end - self.start < 4 && !self.eof {
            self.fill()?;
        }
        if self.start == self.end {
            return Ok(None);
        }
        let lead = self.buf[self.start];
        let len = match lead {
            0x00..=0x7f => 1,
            0xc0..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf7 => 4,
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "invalid utf-8 lead byte",
                ));
            }
        };
        if self.end - self.start < len {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "truncated utf-8 sequence",
            ));
        }
        let seq = &self.buf[self.start..self.start + len];
        let c = std::str::from_utf8(seq)
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "invalid utf-8 sequence"))?;
        self.start += len;
        Ok(Some(c))
    }
}

/// UTF-8 encoder over any byte target, buffered.
pub struct Utf8Writer<W: Write> {
    inner: BufWriter<W>,
}

impl<W: Write> Utf8Writer<W> {
    pub fn with_capacity(capacity: usize, inner: W) -> Self {
        Self {
            inner: BufWriter::with_capacity(capacity, inner),
        }
    }
}

impl<W: Write + Send> CharWrite for Utf8Writer<W> {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.inner.write_all(s.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Char source over an owned string (the `reader_from_string` path).
pub struct StringSource {
    text: String,
    pos: usize,
}

impl StringSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: 0,
        }
    }
}

impl CharRead for StringSource {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        match self.text[self.pos..].chars().next() {
            Some(c) => {
                self.pos += c.len_utf8();
                Ok(Some(c))
            }
            None => Ok(None),
        }
    }
}

/// Appending to a `String` is a valid char target (handy for tests and for
/// rendering in memory).
impl CharWrite for String {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.push_str(s);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
