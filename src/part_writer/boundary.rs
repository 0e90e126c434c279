use ::uuid::Uuid;

use crate::FormError;
use crate::Result;

/// The maximum length of a boundary, as set by RFC 2046.
pub const MAX_BOUNDARY_LEN: usize = 70;

const RANDOM_BOUNDARY_LEN: usize = 60;

/// Creates a new random boundary, made of 60 lowercase hex characters.
pub fn generate_boundary() -> String {
    let mut boundary = format!(
        "{}{}",
        Uuid::new_v4().simple(),
        Uuid::new_v4().simple()
    );
    boundary.truncate(RANDOM_BOUNDARY_LEN);

    boundary
}

/// Checks the boundary can be used as a multipart delimiter.
///
/// It must be 1 to 70 characters long,
/// made of letters, digits, and `'()+_,-./:=? `,
/// and it cannot end with a space.
pub fn validate_boundary(boundary: &str) -> Result<()> {
    if boundary.is_empty() || boundary.len() > MAX_BOUNDARY_LEN {
        return Err(FormError::InvalidBoundary(boundary.to_string()));
    }

    if boundary.ends_with(' ') {
        return Err(FormError::InvalidBoundary(boundary.to_string()));
    }

    let is_valid = boundary.bytes().all(|b| {
        b.is_ascii_alphanumeric()
            || matches!(
                b,
                b'\'' | b'(' | b')' | b'+' | b'_' | b',' | b'-' | b'.' | b'/' | b':' | b'=' | b'?'
                    | b' '
            )
    });
    if !is_valid {
        return Err(FormError::InvalidBoundary(boundary.to_string()));
    }

    Ok(())
}

/// Builds the value for the `Content-Type` header of the request holding the form.
///
/// The boundary is quoted when it holds characters that are special inside a header parameter.
pub fn form_data_content_type(boundary: &str) -> String {
    if boundary.contains(|c: char| "()<>@,;:\\\"/[]?= ".contains(c)) {
        format!("multipart/form-data; boundary=\"{boundary}\"")
    } else {
        format!("multipart/form-data; boundary={boundary}")
    }
}
