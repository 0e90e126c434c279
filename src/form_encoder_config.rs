use crate::FormEncoderConfigBuilder;

/// The setup for a [`FormEncoder`](crate::FormEncoder).
#[derive(Debug, Clone, PartialEq)]
pub struct FormEncoderConfig {
    /// Set for file parts to have their `Content-Type` guessed from their contents.
    /// When off, `application/octet-stream` is always used.
    ///
    /// **Defaults** to true.
    pub detect_content_type: bool,

    /// Set the boundary to place between parts.
    ///
    /// **Defaults** to a _random_ boundary.
    pub boundary: Option<String>,
}

impl FormEncoderConfig {
    /// Creates a default `FormEncoderConfig`.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn builder() -> FormEncoderConfigBuilder {
        FormEncoderConfigBuilder::default()
    }
}

impl Default for FormEncoderConfig {
    fn default() -> Self {
        Self {
            detect_content_type: true,
            boundary: None,
        }
    }
}
