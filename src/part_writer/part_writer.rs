use ::std::io::Result as IoResult;
use ::std::io::Write;

use crate::FormError;
use crate::Result;
use crate::internals::text_field_headers;
use crate::part_writer::PartHeaders;
use crate::part_writer::PartSink;
use crate::part_writer::form_data_content_type;
use crate::part_writer::generate_boundary;
use crate::part_writer::validate_boundary;

/// Writes boundary delimited parts to the sink it wraps.
///
/// The wire layout of each part is:
///
/// ```text
/// --<boundary>\r\n
/// Name: value\r\n
/// \r\n
/// <body>
/// ```
///
/// With parts after the first being preceded by a `\r\n`.
#[derive(Debug)]
pub struct PartWriter<W> {
    sink: W,
    boundary: String,
    has_parts: bool,
}

impl<W> PartWriter<W>
where
    W: Write,
{
    /// Wraps the sink, using a new random boundary.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            boundary: generate_boundary(),
            has_parts: false,
        }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Replaces the random boundary with the one given.
    ///
    /// This must be called before any part is opened.
    pub fn set_boundary(&mut self, boundary: &str) -> Result<()> {
        if self.has_parts {
            return Err(FormError::BoundaryAfterWrite);
        }

        validate_boundary(boundary)?;
        self.boundary = boundary.to_string();

        Ok(())
    }

    /// The value for the `Content-Type` header of the request carrying this form.
    pub fn content_type_header(&self) -> String {
        form_data_content_type(&self.boundary)
    }

    /// Writes the boundary line and headers for a new part,
    /// and returns a sink for writing its body.
    pub fn open_part(&mut self, headers: &PartHeaders) -> IoResult<PartSink<'_, W>> {
        let mut buffer = Vec::new();
        if self.has_parts {
            buffer.extend_from_slice(b"\r\n");
        }
        buffer.extend_from_slice(b"--");
        buffer.extend_from_slice(self.boundary.as_bytes());
        buffer.extend_from_slice(b"\r\n");
        headers.write_to(&mut buffer)?;
        buffer.extend_from_slice(b"\r\n");

        self.sink.write_all(&buffer)?;
        self.has_parts = true;
        ::tracing::trace!(boundary = %self.boundary, "opened part");

        Ok(PartSink::new(&mut self.sink))
    }

    /// Writes a part holding just `value`, under the field name given.
    pub fn write_field(&mut self, field_name: &str, value: &str) -> IoResult<()> {
        let headers = text_field_headers(field_name);
        let mut part = self.open_part(&headers)?;
        part.write_all(value.as_bytes())
    }

    /// Writes the closing boundary, flushes, and returns the sink.
    pub fn close(mut self) -> IoResult<W> {
        if self.has_parts {
            self.sink.write_all(b"\r\n")?;
        }
        self.sink.write_all(b"--")?;
        self.sink.write_all(self.boundary.as_bytes())?;
        self.sink.write_all(b"--\r\n")?;
        self.sink.flush()?;
        ::tracing::trace!(boundary = %self.boundary, "wrote closing boundary");

        Ok(self.sink)
    }
}
