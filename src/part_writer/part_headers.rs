use ::std::collections::BTreeMap;
use ::std::io::Error as IoError;
use ::std::io::ErrorKind;
use ::std::io::Result as IoResult;

/// The MIME headers written at the start of a part.
///
/// Headers are written in order of their name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartHeaders {
    headers: BTreeMap<&'static str, String>,
}

impl PartHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header, replacing any previous value under the same name.
    pub fn set(&mut self, name: &'static str, value: String) {
        self.headers.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.headers
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    /// Appends `Name: value\r\n` for each header.
    ///
    /// A value with a line break would end the header block early,
    /// and so is rejected.
    pub(crate) fn write_to(&self, buffer: &mut Vec<u8>) -> IoResult<()> {
        for (name, value) in self.iter() {
            if value.contains(['\r', '\n']) {
                return Err(IoError::new(
                    ErrorKind::InvalidInput,
                    format!("header '{name}' contains a line break"),
                ));
            }

            buffer.extend_from_slice(name.as_bytes());
            buffer.extend_from_slice(b": ");
            buffer.extend_from_slice(value.as_bytes());
            buffer.extend_from_slice(b"\r\n");
        }

        Ok(())
    }
}
