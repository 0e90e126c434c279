//!
//! The framing layer beneath [`FormEncoder`](crate::FormEncoder).
//!
//! [`PartWriter`] writes the boundary lines and headers for each part,
//! hands back a [`PartSink`] for the body, and writes the closing boundary when closed.
//! It performs no validation of field names or values; that is left to the encoder.
//!

mod boundary;
pub use self::boundary::*;

mod part_headers;
pub use self::part_headers::*;

mod part_sink;
pub use self::part_sink::*;

mod part_writer;
pub use self::part_writer::*;
