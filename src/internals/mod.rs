mod encoder_state;
pub use self::encoder_state::*;

mod escape_quotes;
pub use self::escape_quotes::*;

mod field_headers;
pub use self::field_headers::*;
