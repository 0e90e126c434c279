use ::mime::Mime;

use crate::internals::escape_quotes;
use crate::part_writer::PartHeaders;

pub const CONTENT_DISPOSITION: &str = "Content-Disposition";
pub const CONTENT_TYPE: &str = "Content-Type";

/// Headers for a part holding a plain value.
pub fn text_field_headers(field_name: &str) -> PartHeaders {
    let mut headers = PartHeaders::new();
    headers.set(
        CONTENT_DISPOSITION,
        format!(r#"form-data; name="{}""#, escape_quotes(field_name)),
    );

    headers
}

/// Headers for a part holding an uploaded file.
pub fn file_field_headers(field_name: &str, file_name: &str, content_type: &Mime) -> PartHeaders {
    let mut headers = PartHeaders::new();
    headers.set(
        CONTENT_DISPOSITION,
        format!(
            r#"form-data; name="{}"; filename="{}""#,
            escape_quotes(field_name),
            escape_quotes(file_name)
        ),
    );
    headers.set(CONTENT_TYPE, content_type.to_string());

    headers
}
