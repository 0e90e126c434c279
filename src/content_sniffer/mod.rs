//!
//! Content type detection for file parts.
//!
//! When a file is written to a [`FormEncoder`](crate::FormEncoder)
//! with detection turned on, its bytes are passed to a [`ContentSniffer`],
//! and the result is used as the part's `Content-Type`.
//!
//! The default is the [`MagicBytesSniffer`].
//! Any function taking a `&[u8]` and returning an `Option<Mime>` can be used in its place.
//!
//! ```rust
//! use ::multipart_writer::FormEncoder;
//!
//! let mut body = Vec::new();
//! let result = FormEncoder::new(&mut body)
//!     .with_sniffer(|_: &[u8]| Some(mime::IMAGE_PNG))
//!     .write_file_bytes("avatar", "avatar.png", b"not really a png".as_slice())
//!     .close();
//!
//! assert!(result.is_ok());
//! ```
//!

mod content_sniffer;
pub use self::content_sniffer::*;

mod magic_bytes_sniffer;
pub use self::magic_bytes_sniffer::*;
