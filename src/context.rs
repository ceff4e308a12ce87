/// Ambient per-construction state handed to decorators.
///
/// The factory builds one of these for every reader/writer it constructs and
/// lends it to the decorator for the duration of a single `decorate_*` call.
/// Decorators must not hold on to it past that call; the factory may reuse or
/// drop it afterwards.
#[derive(Clone, Debug)]
pub struct IoContext {
    read_buffer: usize,
    write_buffer: usize,
    managed: bool,
}

impl IoContext {
    pub fn new(read_buffer: usize, write_buffer: usize, managed: bool) -> Self {
        Self {
            read_buffer,
            write_buffer,
            managed,
        }
    }

    /// Buffer size (bytes) a decorator should use when it wraps a byte source.
    pub fn read_buffer(&self) -> usize {
        self.read_buffer
    }

    /// Buffer size (bytes) a decorator should use when it wraps a byte target.
    pub fn write_buffer(&self) -> usize {
        self.write_buffer
    }

    /// True when the factory itself opened the underlying resource (e.g. the
    /// path-based constructors) and will own its lifecycle; false when the
    /// stream was supplied by the caller.
    pub fn is_resource_managed(&self) -> bool {
        self.managed
    }
}
