use ::std::io::Result as IoResult;
use ::std::io::Write;

/// Writes the body of the part that was just opened.
///
/// The part ends when this is dropped, and the next part is opened
/// (or the writer is closed).
#[derive(Debug)]
pub struct PartSink<'a, W> {
    sink: &'a mut W,
}

impl<'a, W> PartSink<'a, W>
where
    W: Write,
{
    pub(crate) fn new(sink: &'a mut W) -> Self {
        Self { sink }
    }
}

impl<W> Write for PartSink<'_, W>
where
    W: Write,
{
    fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
        self.sink.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> IoResult<()> {
        self.sink.write_all(buf)
    }

    fn flush(&mut self) -> IoResult<()> {
        self.sink.flush()
    }
}
