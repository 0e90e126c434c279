//! This contains helpers used in our tests.

use ::std::io::Error as IoError;
use ::std::io::ErrorKind;
use ::std::io::Read;
use ::std::io::Result as IoResult;
use ::std::io::Write;

/// A sink that records what is written, and can be set to fail.
#[derive(Debug, Default)]
pub struct FailingWriter {
    pub written: Vec<u8>,
    writes_allowed: Option<usize>,
    fail_on_flush: bool,
}

impl FailingWriter {
    /// A writer that never fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allows this many calls to `write`, and fails on every call after.
    pub fn failing_after(writes_allowed: usize) -> Self {
        Self {
            writes_allowed: Some(writes_allowed),
            ..Self::default()
        }
    }

    pub fn failing_on_flush() -> Self {
        Self {
            fail_on_flush: true,
            ..Self::default()
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
        match self.writes_allowed.as_mut() {
            Some(0) => return Err(IoError::new(ErrorKind::BrokenPipe, "sink is closed")),
            Some(writes_allowed) => *writes_allowed -= 1,
            None => {}
        }

        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        if self.fail_on_flush {
            return Err(IoError::new(ErrorKind::BrokenPipe, "sink failed to flush"));
        }

        Ok(())
    }
}

/// A source that fails on the first read.
#[derive(Debug, Clone, Copy)]
pub struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> IoResult<usize> {
        Err(IoError::new(ErrorKind::ConnectionReset, "source went away"))
    }
}
