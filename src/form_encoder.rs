use ::bytes::Bytes;
use ::mime::Mime;
use ::serde::Serialize;
use ::std::fmt::Debug;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;
use ::std::io::Read;
use ::std::io::Write;

use crate::FieldValue;
use crate::FormEncoderConfig;
use crate::FormError;
use crate::Result;
use crate::content_sniffer::ContentSniffer;
use crate::content_sniffer::MagicBytesSniffer;
use crate::internals::EncoderState;
use crate::internals::file_field_headers;
use crate::internals::text_field_headers;
use crate::part_writer::PartWriter;

///
/// Builds a `multipart/form-data` body, writing each field to the sink as it is added.
///
/// Writes are chained, and never fail on the spot.
/// Instead the first error is kept, every write after it does nothing,
/// and the error is returned from [`FormEncoder::close()`].
///
/// ```rust
/// use ::multipart_writer::FormEncoder;
///
/// let mut body = Vec::new();
/// let encoder = FormEncoder::new(&mut body);
/// let content_type = encoder.content_type_header();
///
/// encoder
///     .write_string("name", "Joe")
///     .write_int("age", 42)
///     .write_bool("admin", false)
///     .write_file("avatar", "avatar.txt", "not an image".as_bytes())
///     .close()
///     .unwrap();
///
/// assert!(content_type.starts_with("multipart/form-data; boundary="));
/// ```
///
pub struct FormEncoder<W> {
    part_writer: PartWriter<W>,
    detect_content_type: bool,
    sniffer: Box<dyn ContentSniffer>,
    state: EncoderState,
}

impl<W> FormEncoder<W>
where
    W: Write,
{
    /// Creates a new encoder writing into the sink given,
    /// using a random boundary, and with content type detection turned on.
    pub fn new(sink: W) -> Self {
        Self {
            part_writer: PartWriter::new(sink),
            detect_content_type: true,
            sniffer: Box::new(MagicBytesSniffer),
            state: EncoderState::default(),
        }
    }

    /// Creates a new encoder using the config given.
    ///
    /// This only fails if the config holds an invalid boundary.
    pub fn new_with_config(sink: W, config: FormEncoderConfig) -> Result<Self> {
        let mut encoder = Self::new(sink);
        encoder.set_detect_content_type(config.detect_content_type);
        if let Some(boundary) = config.boundary.as_deref() {
            encoder.set_boundary(boundary)?;
        }

        Ok(encoder)
    }

    /// Turns guessing the `Content-Type` of file parts on or off.
    ///
    /// When off, file parts use `application/octet-stream`.
    pub fn set_detect_content_type(&mut self, detect_content_type: bool) {
        self.detect_content_type = detect_content_type;
    }

    /// A chainable form of [`FormEncoder::set_detect_content_type()`].
    pub fn detect_content_type(mut self, detect_content_type: bool) -> Self {
        self.set_detect_content_type(detect_content_type);
        self
    }

    /// Replaces how file contents are turned into a `Content-Type`.
    pub fn with_sniffer<S>(mut self, sniffer: S) -> Self
    where
        S: ContentSniffer + 'static,
    {
        self.sniffer = Box::new(sniffer);
        self
    }

    /// Replaces the random boundary.
    ///
    /// This fails if the boundary is invalid, or if any part has already been written.
    pub fn set_boundary(&mut self, boundary: &str) -> Result<()> {
        self.part_writer.set_boundary(boundary)
    }

    pub fn boundary(&self) -> &str {
        self.part_writer.boundary()
    }

    /// The value for the `Content-Type` header of the request sending this form.
    /// i.e. `multipart/form-data; boundary=...`.
    pub fn content_type_header(&self) -> String {
        self.part_writer.content_type_header()
    }

    /// Returns true once a write has failed.
    pub fn is_latched(&self) -> bool {
        self.state.is_latched()
    }

    /// The first error raised, if any.
    pub fn error(&self) -> Option<&FormError> {
        self.state.error()
    }

    /// Writes the string as the whole body of a part.
    pub fn write_string(self, field_name: &str, value: &str) -> Self {
        self.write_if_accepting(|encoder| {
            require_field_name(field_name)?;
            encoder.part_writer.write_field(field_name, value)?;

            Ok(())
        })
    }

    /// Writes the string, if it is not empty.
    pub fn write_optional_string(self, field_name: &str, value: &str) -> Self {
        self.write_string_if(field_name, value, || !value.is_empty())
    }

    /// Writes the string, if the predicate returns true.
    pub fn write_string_if<P>(self, field_name: &str, value: &str, predicate: P) -> Self
    where
        P: FnOnce() -> bool,
    {
        if predicate() {
            self.write_string(field_name, value)
        } else {
            self
        }
    }

    /// Creates a part, and writes the value into it using its text form.
    ///
    /// A value of `None` is an error.
    pub fn write_value(self, field_name: &str, value: Option<FieldValue>) -> Self {
        self.write_if_accepting(|encoder| {
            require_field_name(field_name)?;
            let value = value.ok_or(FormError::InvalidArgument("empty field value"))?;

            let headers = text_field_headers(field_name);
            let mut part = encoder.part_writer.open_part(&headers)?;
            write!(part, "{value}")?;

            Ok(())
        })
    }

    /// Writes the value if the predicate returns true.
    ///
    /// When it returns false nothing is checked, and nothing is written.
    pub fn write_value_if<P>(
        self,
        field_name: &str,
        value: Option<FieldValue>,
        predicate: P,
    ) -> Self
    where
        P: FnOnce() -> bool,
    {
        if predicate() {
            self.write_value(field_name, value)
        } else {
            self
        }
    }

    /// Creates a part, and writes the value into it using its text form.
    pub fn write_text<V>(self, field_name: &str, value: V) -> Self
    where
        V: Into<FieldValue>,
    {
        self.write_value(field_name, Some(value.into()))
    }

    /// Writes the value if the predicate returns true.
    pub fn write_text_if<V, P>(self, field_name: &str, value: V, predicate: P) -> Self
    where
        V: Into<FieldValue>,
        P: FnOnce() -> bool,
    {
        self.write_value_if(field_name, Some(value.into()), predicate)
    }

    pub fn write_int(self, field_name: &str, value: i64) -> Self {
        self.write_text(field_name, value)
    }

    /// Writes the int if it is not zero.
    pub fn write_optional_int(self, field_name: &str, value: i64) -> Self {
        self.write_text_unless_default(field_name, value.into())
    }

    pub fn write_bool(self, field_name: &str, value: bool) -> Self {
        self.write_text(field_name, value)
    }

    /// Writes the bool if it is true.
    pub fn write_optional_bool(self, field_name: &str, value: bool) -> Self {
        self.write_text_unless_default(field_name, value.into())
    }

    pub fn write_float32(self, field_name: &str, value: f32) -> Self {
        self.write_text(field_name, value)
    }

    /// Writes the float if it is not zero.
    pub fn write_optional_float32(self, field_name: &str, value: f32) -> Self {
        self.write_text_unless_default(field_name, value.into())
    }

    pub fn write_float64(self, field_name: &str, value: f64) -> Self {
        self.write_text(field_name, value)
    }

    /// Writes the float if it is not zero.
    pub fn write_optional_float64(self, field_name: &str, value: f64) -> Self {
        self.write_text_unless_default(field_name, value.into())
    }

    fn write_text_unless_default(self, field_name: &str, value: FieldValue) -> Self {
        let is_set = !value.is_default();
        self.write_value_if(field_name, Some(value), || is_set)
    }

    /// Creates a part, and writes the value into it as JSON.
    ///
    /// Characters such as `<`, `>`, and `&` are written as is.
    /// The document is followed by a newline.
    pub fn write_json<T>(self, field_name: &str, value: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        self.write_if_accepting(|encoder| {
            require_field_name(field_name)?;
            encoder.write_json_part(field_name, value)
        })
    }

    /// Writes the value as JSON, or does nothing if it is `None`.
    ///
    /// An empty field name is still an error when the value is `None`.
    pub fn write_optional_json<T>(self, field_name: &str, value: Option<&T>) -> Self
    where
        T: Serialize + ?Sized,
    {
        self.write_if_accepting(|encoder| {
            require_field_name(field_name)?;

            match value {
                Some(value) => encoder.write_json_part(field_name, value),
                None => Ok(()),
            }
        })
    }

    /// Reads all of `reader`, and writes it as a file part.
    ///
    /// The `Content-Type` is guessed from the contents,
    /// or is `application/octet-stream` when detection is turned off.
    pub fn write_file<R>(self, field_name: &str, file_name: &str, reader: R) -> Self
    where
        R: Read,
    {
        self.write_file_source(field_name, file_name, Some(reader))
    }

    /// As [`FormEncoder::write_file()`], where a source of `None` is an error.
    pub fn write_file_source<R>(
        self,
        field_name: &str,
        file_name: &str,
        source: Option<R>,
    ) -> Self
    where
        R: Read,
    {
        self.write_if_accepting(|encoder| {
            require_field_name(field_name)?;
            require_file_name(file_name)?;
            let mut reader = source.ok_or(FormError::InvalidArgument("empty file reader"))?;

            // Read in full, as the type must be known before the headers are written.
            let mut contents = Vec::new();
            reader.read_to_end(&mut contents)?;

            encoder.write_file_part(field_name, file_name, &contents)
        })
    }

    /// Writes the bytes given as a file part.
    pub fn write_file_bytes<B>(self, field_name: &str, file_name: &str, contents: B) -> Self
    where
        B: Into<Bytes>,
    {
        let contents = contents.into();
        self.write_if_accepting(|encoder| {
            require_field_name(field_name)?;
            require_file_name(file_name)?;

            encoder.write_file_part(field_name, file_name, &contents)
        })
    }

    /// Writes the closing boundary, and returns the first error raised by any write.
    ///
    /// The closing boundary is always written.
    /// If an earlier write failed, that error is returned and any error from closing is dropped.
    pub fn close(self) -> Result<()> {
        self.finish().map(|_| ())
    }

    /// As [`FormEncoder::close()`], returning the sink on success.
    pub fn finish(self) -> Result<W> {
        let Self {
            part_writer, state, ..
        } = self;

        let closed = part_writer.close();
        if let Some(error) = state.into_error() {
            return Err(error);
        }

        Ok(closed?)
    }

    fn write_if_accepting<F>(mut self, write: F) -> Self
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        if self.state.is_latched() {
            ::tracing::debug!("skipping write, form encoder has already failed");
            return self;
        }

        if let Err(error) = write(&mut self) {
            self.state.latch(error);
        }

        self
    }

    fn write_json_part<T>(&mut self, field_name: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        // Encoded up front, so a failure leaves no half written part.
        let mut json = ::serde_json::to_vec(value)?;
        json.push(b'\n');

        let headers = text_field_headers(field_name);
        let mut part = self.part_writer.open_part(&headers)?;
        part.write_all(&json)?;

        Ok(())
    }

    fn write_file_part(
        &mut self,
        field_name: &str,
        file_name: &str,
        contents: &[u8],
    ) -> Result<()> {
        let content_type = self.file_content_type(contents);
        let headers = file_field_headers(field_name, file_name, &content_type);

        let mut part = self.part_writer.open_part(&headers)?;
        part.write_all(contents)?;

        Ok(())
    }

    fn file_content_type(&self, contents: &[u8]) -> Mime {
        if !self.detect_content_type {
            return mime::APPLICATION_OCTET_STREAM;
        }

        match self.sniffer.sniff(contents) {
            Some(content_type) => content_type,
            None => {
                ::tracing::debug!("content type detection failed, using application/octet-stream");
                mime::APPLICATION_OCTET_STREAM
            }
        }
    }
}

impl<W> Debug for FormEncoder<W>
where
    W: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("FormEncoder")
            .field("part_writer", &self.part_writer)
            .field("detect_content_type", &self.detect_content_type)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn require_field_name(field_name: &str) -> Result<()> {
    if field_name.is_empty() {
        return Err(FormError::InvalidArgument("empty field name"));
    }

    Ok(())
}

fn require_file_name(file_name: &str) -> Result<()> {
    if file_name.is_empty() {
        return Err(FormError::InvalidArgument("empty file name"));
    }

    Ok(())
}

#[cfg(test)]
fn new_test_encoder(body: &mut Vec<u8>) -> FormEncoder<&mut Vec<u8>> {
    let mut encoder = FormEncoder::new(body);
    encoder.set_boundary("xyz").unwrap();
    encoder
}





#[cfg(test)]
mod test_write_string {
    use super::*;
    use ::pretty_assertions::assert_eq;

    #[test]
    fn it_should_write_string_as_body() {
        let mut body = Vec::new();

        new_test_encoder(&mut body)
            .write_string("string", "text")
            .close()
            .unwrap();

        assert_eq!(
            String::from_utf8(body).unwrap(),
            "--xyz\r\n\
            Content-Disposition: form-data; name=\"string\"\r\n\
            \r\n\
            text\r\n\
            --xyz--\r\n"
        );
    }

    #[test]
    fn it_should_write_empty_strings() {
        let mut body = Vec::new();

        new_test_encoder(&mut body)
            .write_string("string", "")
            .close()
            .unwrap();

        let output = String::from_utf8(body).unwrap();
        assert!(output.contains("name=\"string\"\r\n\r\n\r\n--xyz--"));
    }

    #[test]
    fn it_should_write_when_predicate_is_true() {
        let mut body = Vec::new();

        new_test_encoder(&mut body)
            .write_string_if("a", "1", || true)
            .write_string_if("b", "2", || false)
            .close()
            .unwrap();

        let output = String::from_utf8(body).unwrap();
        assert!(output.contains("name=\"a\""));
        assert!(!output.contains("name=\"b\""));
    }
}


#[cfg(test)]
mod test_write_file {
    use super::*;
    use crate::testing::FailingReader;
    use ::pretty_assertions::assert_eq;

    #[test]
    fn it_should_write_file_with_detected_content_type() {
        let mut body = Vec::new();

        new_test_encoder(&mut body)
            .write_file("file", "file.txt", "TEST DEEZ NUTS".as_bytes())
            .close()
            .unwrap();

        assert_eq!(
            String::from_utf8(body).unwrap(),
            "--xyz\r\n\
            Content-Disposition: form-data; name=\"file\"; filename=\"file.txt\"\r\n\
            Content-Type: text/plain; charset=utf-8\r\n\
            \r\n\
            TEST DEEZ NUTS\r\n\
            --xyz--\r\n"
        );
    }

    #[test]
    fn it_should_use_octet_stream_when_detection_is_off() {
        let mut body = Vec::new();

        new_test_encoder(&mut body)
            .detect_content_type(false)
            .write_file("file", "file.txt", "TEST DEEZ NUTS".as_bytes())
            .close()
            .unwrap();

        let output = String::from_utf8(body).unwrap();
        assert!(output.contains("Content-Type: application/octet-stream\r\n"));
    }

    #[test]
    fn it_should_fall_back_when_sniffing_fails() {
        let mut body = Vec::new();

        let result = new_test_encoder(&mut body)
            .with_sniffer(|_: &[u8]| -> Option<Mime> { None })
            .write_file("file", "file.txt", "TEST DEEZ NUTS".as_bytes())
            .close();

        assert!(result.is_ok());
        let output = String::from_utf8(body).unwrap();
        assert!(output.contains("Content-Type: application/octet-stream\r\n"));
        assert!(output.contains("\r\n\r\nTEST DEEZ NUTS\r\n"));
    }

    #[test]
    fn it_should_use_content_type_from_custom_sniffer() {
        let mut body = Vec::new();

        new_test_encoder(&mut body)
            .with_sniffer(|_: &[u8]| Some(mime::IMAGE_PNG))
            .write_file_bytes("file", "file.png", b"abc".as_slice())
            .close()
            .unwrap();

        let output = String::from_utf8(body).unwrap();
        assert!(output.contains("Content-Type: image/png\r\n"));
    }

    #[test]
    fn it_should_escape_file_names() {
        let mut body = Vec::new();

        new_test_encoder(&mut body)
            .write_file_bytes("file", r#"my "file".txt"#, b"abc".as_slice())
            .close()
            .unwrap();

        let output = String::from_utf8(body).unwrap();
        assert!(output.contains(r#"name="file"; filename="my \"file\".txt""#));
    }

    #[test]
    fn it_should_error_on_empty_file_name() {
        let mut body = Vec::new();

        let result = new_test_encoder(&mut body)
            .write_file("file", "", "abc".as_bytes())
            .close();

        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid argument, empty file name"
        );
    }

    #[test]
    fn it_should_error_on_missing_source() {
        let mut body = Vec::new();

        let result = new_test_encoder(&mut body)
            .write_file_source::<&[u8]>("file", "file.txt", None)
            .close();

        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid argument, empty file reader"
        );
    }

    #[test]
    fn it_should_latch_read_errors_without_writing() {
        let mut body = Vec::new();

        let result = new_test_encoder(&mut body)
            .write_file("file", "file.txt", FailingReader)
            .close();

        assert!(result.unwrap_err().is_io());
        assert_eq!(body, b"--xyz--\r\n");
    }
}
