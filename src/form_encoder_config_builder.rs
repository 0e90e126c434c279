use crate::FormEncoderConfig;

/// This is for easing the building of [`FormEncoderConfig`](crate::FormEncoderConfig).
///
/// For full documentation see there.
///
/// ```rust
/// use ::multipart_writer::FormEncoder;
/// use ::multipart_writer::FormEncoderConfig;
///
/// let config = FormEncoderConfig::builder()
///     .do_not_detect_content_type()
///     .boundary("my-form-boundary")
///     .build();
///
/// let mut body = Vec::new();
/// let encoder = FormEncoder::new_with_config(&mut body, config).unwrap();
///
/// assert_eq!(encoder.boundary(), "my-form-boundary");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormEncoderConfigBuilder {
    config: FormEncoderConfig,
}

impl FormEncoderConfigBuilder {
    pub fn detect_content_type(mut self) -> Self {
        self.config.detect_content_type = true;
        self
    }

    pub fn do_not_detect_content_type(mut self) -> Self {
        self.config.detect_content_type = false;
        self
    }

    pub fn boundary(mut self, boundary: &str) -> Self {
        self.config.boundary = Some(boundary.to_string());
        self
    }

    pub fn random_boundary(mut self) -> Self {
        self.config.boundary = None;
        self
    }

    pub fn build(self) -> FormEncoderConfig {
        self.config
    }
}
