use ::thiserror::Error;

/// The errors that can occur while building a form.
///
/// Only the first error raised by a [`FormEncoder`](crate::FormEncoder) is kept,
/// and it is returned when the encoder is closed.
#[derive(Debug, Error)]
pub enum FormError {
    /// A precondition on a write was not met,
    /// such as an empty field name, or a missing value.
    #[error("Invalid argument, {0}")]
    InvalidArgument(&'static str),

    /// Failure opening a part, writing to the sink, reading a file source,
    /// or closing the form.
    #[error("IO Error")]
    Io(#[from] ::std::io::Error),

    /// A value could not be serialised to JSON.
    #[error("JSON encoding Error")]
    Encoding(#[from] ::serde_json::Error),

    /// The boundary given contains characters, or has a length, that cannot be used.
    #[error("Invalid boundary '{0}'")]
    InvalidBoundary(String),

    /// The boundary can only be changed before any part has been written.
    #[error("Cannot change the boundary after parts have been written")]
    BoundaryAfterWrite,
}

/// A `Result` alias where the `Err` case is [`FormError`].
pub type Result<T> = ::std::result::Result<T, FormError>;

impl FormError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    pub fn is_encoding(&self) -> bool {
        matches!(self, Self::Encoding(_))
    }
}

#[cfg(test)]
mod test_display {
    use super::*;

    #[test]
    fn it_should_include_reason_for_invalid_argument() {
        let error = FormError::InvalidArgument("empty field name");

        assert_eq!(error.to_string(), "Invalid argument, empty field name");
    }

    #[test]
    fn it_should_include_boundary_when_invalid() {
        let error = FormError::InvalidBoundary("a b ".to_string());

        assert_eq!(error.to_string(), "Invalid boundary 'a b '");
    }
}
