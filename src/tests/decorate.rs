#[cfg(test)]
mod tests {
    use crate::decor::{Decorations, InputDecorator, OutputDecorator};
    use crate::io::{
        ByteSource, ByteTarget, CharSource, CharTarget, CharWrite, CountingReader, CountingWriter,
        DataSource, StringSource,
    };
    use crate::{FactoryError, IoContext, ObjectCodec, Token, TokenStreamFactory, TreeCodec};
    use std::io::{self, Cursor, Read};
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex};

    fn ctxt() -> IoContext {
        IoContext::new(4096, 4096, false)
    }

    fn byte_addr(s: &ByteSource) -> usize {
        (&**s as *const (dyn Read + Send)).cast::<()>() as usize
    }

    /// Decorator with no overrides: every method declines via the defaults.
    struct Decline;
    impl InputDecorator for Decline {}
    impl OutputDecorator for Decline {}

    #[test]
    fn unset_decorator_is_identity_for_every_representation() {
        let d = Decorations::new();
        let c = ctxt();

        let src: ByteSource = Box::new(Cursor::new(b"0123456789".to_vec()));
        let before = byte_addr(&src);
        let src = d.decorate_byte_source(&c, src).unwrap();
        assert_eq!(byte_addr(&src), before);

        let chars: CharSource = Box::new(StringSource::new("[]"));
        let mut chars = d.decorate_char_source(&c, chars).unwrap();
        assert_eq!(chars.next_char().unwrap(), Some('['));

        let data: DataSource = Box::new(crate::io::BytesDataInput::new(vec![b'x']));
        let mut data = d.decorate_data_source(&c, data).unwrap();
        assert_eq!(data.read_byte().unwrap(), Some(b'x'));

        let out: ByteTarget = Box::new(Vec::<u8>::new());
        let _ = d.decorate_byte_target(&c, out).unwrap();

        let out: CharTarget = Box::new(String::new());
        let _ = d.decorate_char_target(&c, out).unwrap();
    }

    #[test]
    fn declining_decorator_hands_the_stream_back() {
        let mut d = Decorations::new();
        d.set_input_decorator(Some(Arc::new(Decline)));
        d.set_output_decorator(Some(Arc::new(Decline)));
        let c = ctxt();

        let src: ByteSource = Box::new(Cursor::new(b"abc".to_vec()));
        let before = byte_addr(&src);
        let src = d.decorate_byte_source(&c, src).unwrap();
        assert_eq!(byte_addr(&src), before);
    }

    /// Wraps byte sources in a `CountingReader` and parks the counter handle
    /// where the test can reach it.
    struct CountingDecorator {
        slot: Mutex<Option<Arc<AtomicU64>>>,
    }

    impl InputDecorator for CountingDecorator {
        fn decorate_byte_source(&self, _c: &IoContext, src: ByteSource) -> io::Result<ByteSource> {
            let r = CountingReader::new(src);
            *self.slot.lock().unwrap() = Some(r.counter());
            Ok(Box::new(r))
        }
    }

    #[test]
    fn wrapping_decorator_replaces_the_stream() {
        let deco = Arc::new(CountingDecorator {
            slot: Mutex::new(None),
        });
        let mut d = Decorations::new();
        d.set_input_decorator(Some(deco.clone()));

        let src: ByteSource = Box::new(Cursor::new(b"0123456789".to_vec()));
        let before = byte_addr(&src);
        let mut src = d.decorate_byte_source(&ctxt(), src).unwrap();
        assert_ne!(byte_addr(&src), before);

        let mut buf = Vec::new();
        src.read_to_end(&mut buf).unwrap();
        assert_eq!(buf, b"0123456789");

        let counter = deco.slot.lock().unwrap().clone().unwrap();
        assert_eq!(counter.load(Ordering::Relaxed), 10);
    }

    /// Decorates only factory-managed streams; declines the rest.
    struct ManagedOnly;
    impl InputDecorator for ManagedOnly {
        fn decorate_byte_source(&self, c: &IoContext, src: ByteSource) -> io::Result<ByteSource> {
            if !c.is_resource_managed() {
                return Ok(src);
            }
            Ok(Box::new(CountingReader::new(src)))
        }
    }

    #[test]
    fn decorator_can_key_off_the_context() {
        let mut d = Decorations::new();
        d.set_input_decorator(Some(Arc::new(ManagedOnly)));

        let src: ByteSource = Box::new(Cursor::new(b"x".to_vec()));
        let before = byte_addr(&src);
        let unmanaged = IoContext::new(4096, 4096, false);
        let src = d.decorate_byte_source(&unmanaged, src).unwrap();
        assert_eq!(byte_addr(&src), before);

        let managed = IoContext::new(4096, 4096, true);
        let before = byte_addr(&src);
        let src = d.decorate_byte_source(&managed, src).unwrap();
        assert_ne!(byte_addr(&src), before);
    }

    struct Failing;
    impl InputDecorator for Failing {
        fn decorate_byte_source(
            &self,
            _c: &IoContext,
            _src: ByteSource,
        ) -> io::Result<ByteSource> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "nope"))
        }
    }

    #[test]
    fn decorator_failure_propagates_from_the_factory() {
        let mut f = TokenStreamFactory::default();
        f.set_input_decorator(Some(Arc::new(Failing)));
        let err = f
            .reader_from_bytes(Box::new(Cursor::new(b"1".to_vec())))
            .unwrap_err();
        match err {
            FactoryError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn clearing_a_decorator_restores_identity() {
        let mut d = Decorations::new();
        d.set_input_decorator(Some(Arc::new(CountingDecorator {
            slot: Mutex::new(None),
        })));
        d.set_input_decorator(None);

        let src: ByteSource = Box::new(Cursor::new(b"x".to_vec()));
        let before = byte_addr(&src);
        let src = d.decorate_byte_source(&ctxt(), src).unwrap();
        assert_eq!(byte_addr(&src), before);
    }

    #[test]
    fn codec_association_is_stored_verbatim() {
        let mut d = Decorations::new();
        assert!(d.codec().is_none());

        let a: Arc<dyn ObjectCodec> = Arc::new(TreeCodec::new());
        let b: Arc<dyn ObjectCodec> = Arc::new(TreeCodec::new());
        d.set_codec(Some(a.clone()));
        assert!(Arc::ptr_eq(&d.codec().unwrap(), &a));

        // Overwrite, never merge.
        d.set_codec(Some(b.clone()));
        assert!(Arc::ptr_eq(&d.codec().unwrap(), &b));

        d.set_codec(None);
        assert!(d.codec().is_none());
    }

    /// Counts `write_str` calls on the way through.
    struct TapTarget {
        inner: CharTarget,
        calls: Arc<AtomicU64>,
    }
    impl CharWrite for TapTarget {
        fn write_str(&mut self, s: &str) -> io::Result<()> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            self.inner.write_str(s)
        }
        fn flush(&mut self) -> io::Result<()> {
            self.inner.flush()
        }
    }

    struct TapOutput {
        calls: Arc<AtomicU64>,
    }
    impl OutputDecorator for TapOutput {
        fn decorate_char_target(&self, _c: &IoContext, out: CharTarget) -> io::Result<CharTarget> {
            Ok(Box::new(TapTarget {
                inner: out,
                calls: self.calls.clone(),
            }))
        }
    }

    /// Wraps byte targets in a `CountingWriter`, parking the counter handle.
    struct CountingOutput {
        slot: Mutex<Option<Arc<AtomicU64>>>,
    }
    impl OutputDecorator for CountingOutput {
        fn decorate_byte_target(&self, _c: &IoContext, out: ByteTarget) -> io::Result<ByteTarget> {
            let w = CountingWriter::new(out);
            *self.slot.lock().unwrap() = Some(w.counter());
            Ok(Box::new(w))
        }
    }

    #[test]
    fn byte_target_decoration_sees_generated_bytes() {
        let deco = Arc::new(CountingOutput {
            slot: Mutex::new(None),
        });
        let mut f = TokenStreamFactory::default();
        f.set_output_decorator(Some(deco.clone()));

        let mut w = f.writer_to_bytes(Box::new(Vec::<u8>::new())).unwrap();
        w.write_token(&Token::Null).unwrap();
        w.finish().unwrap();

        let counter = deco.slot.lock().unwrap().clone().unwrap();
        assert_eq!(counter.load(Ordering::Relaxed), 4); // "null"
    }

    #[test]
    fn output_decoration_wraps_char_targets() {
        let calls = Arc::new(AtomicU64::new(0));
        let mut d = Decorations::new();
        d.set_output_decorator(Some(Arc::new(TapOutput {
            calls: calls.clone(),
        })));

        let out: CharTarget = Box::new(String::new());
        let mut out = d.decorate_char_target(&ctxt(), out).unwrap();
        out.write_str("hello").unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }
}
