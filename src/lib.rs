//!
//! Multipart Writer is a library for building `multipart/form-data` request bodies:
//!
//!  * You create a [`FormEncoder`] over any [`std::io::Write`] sink,
//!  * chain writes of text, numbers, JSON, and files onto it,
//!  * then call [`FormEncoder::close()`] to finish the body, and learn if anything went wrong.
//!
//! Each field is written to the sink as it is added.
//! Only files are held in memory,
//! so their content type can be worked out before their headers are written.
//!
//! ## Getting Started
//!
//! ```rust
//! use ::multipart_writer::FormEncoder;
//! use ::serde_json::json;
//!
//! let mut body = Vec::new();
//! let encoder = FormEncoder::new(&mut body);
//!
//! // Send this as the `Content-Type` of the request.
//! let content_type = encoder.content_type_header();
//!
//! let result = encoder
//!     .write_string("name", "Terrance Pencilworth")
//!     .write_int("age", 42)
//!     .write_optional_float64("height", 0.0)
//!     .write_json("tags", &json!(["admin", "<staff>"]))
//!     .write_file("avatar", "avatar.txt", "TEST DEEZ NUTS".as_bytes())
//!     .close();
//!
//! assert!(result.is_ok());
//! ```
//!
//! ## Errors
//!
//! Writes never fail on the spot, so a chain of writes needs no error handling between each call.
//! Instead the first error is kept, and every write after it is skipped.
//! That error is then returned by [`FormEncoder::close()`].
//!
//! ```rust
//! use ::multipart_writer::FormEncoder;
//! use ::multipart_writer::FormError;
//!
//! let mut body = Vec::new();
//! let result = FormEncoder::new(&mut body)
//!     .write_string("name", "Joe")
//!     .write_int("", 42)
//!     .write_bool("is_skipped", true)
//!     .close();
//!
//! assert!(matches!(result, Err(FormError::InvalidArgument("empty field name"))));
//! ```
//!
//! ## Content Type Detection
//!
//! File parts have their `Content-Type` guessed from their contents.
//! This can be turned off, after which `application/octet-stream` is always used.
//!
//! ```rust
//! use ::multipart_writer::FormEncoder;
//! use ::multipart_writer::FormEncoderConfig;
//!
//! let config = FormEncoderConfig::builder()
//!     .do_not_detect_content_type()
//!     .build();
//!
//! let mut body = Vec::new();
//! let result = FormEncoder::new_with_config(&mut body, config)
//!     .unwrap()
//!     .write_file("avatar", "avatar.png", "not really a png".as_bytes())
//!     .close();
//!
//! assert!(result.is_ok());
//! ```
//!

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub(crate) mod internals;

pub mod content_sniffer;
pub mod part_writer;

mod field_value;
pub use self::field_value::*;

mod form_encoder;
pub use self::form_encoder::*;

mod form_encoder_config;
pub use self::form_encoder_config::*;

mod form_encoder_config_builder;
pub use self::form_encoder_config_builder::*;

mod form_error;
pub use self::form_error::*;

pub use ::mime;

#[cfg(test)]
mod testing;
