use ::infer::MatcherType;
use ::mime::Mime;
use ::serde::de::IgnoredAny;

use crate::content_sniffer::ContentSniffer;

/// How much of a file is looked at when guessing its type.
pub const SNIFF_LEN: usize = 3072;

const HTML_PREFIXES: &[&[u8]] = &[
    b"<!DOCTYPE HTML",
    b"<HTML",
    b"<HEAD",
    b"<BODY",
    b"<SCRIPT",
    b"<!--",
];

/// Guesses content types from file signatures using [`infer`],
/// falling back to checking if the bytes look like markup, JSON, or text.
///
/// Only the first 3072 bytes are looked at.
/// This always returns a type, with `application/octet-stream` when nothing else matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagicBytesSniffer;

impl ContentSniffer for MagicBytesSniffer {
    fn sniff(&self, contents: &[u8]) -> Option<Mime> {
        Some(detect_content_type(contents))
    }
}

/// Guesses the content type of the bytes given.
pub fn detect_content_type(contents: &[u8]) -> Mime {
    let window = &contents[..contents.len().min(SNIFF_LEN)];
    let is_text = !is_binary(window) && is_utf8(window);

    if let Some(content_type) = sniff_signature(window, is_text) {
        return content_type;
    }

    let trimmed = trim_leading_whitespace(window);
    if is_html(trimmed) {
        return mime::TEXT_HTML_UTF_8;
    }
    if starts_with_ignore_case(trimmed, b"<?XML") {
        return mime_or_octet_stream("text/xml; charset=utf-8");
    }

    if is_binary(window) {
        return mime::APPLICATION_OCTET_STREAM;
    }

    if is_json(window, trimmed) {
        return mime::APPLICATION_JSON;
    }

    if is_text {
        mime::TEXT_PLAIN_UTF_8
    } else {
        mime::TEXT_PLAIN
    }
}

/// Markup is left to the checks after this.
/// Text that happens to start with a binary signature, such as `ID3`, stays text.
fn sniff_signature(window: &[u8], is_text: bool) -> Option<Mime> {
    let kind = ::infer::get(window)?;
    if matches!(kind.matcher_type(), MatcherType::Text) || is_text {
        return None;
    }

    Some(mime_or_octet_stream(kind.mime_type()))
}

fn mime_or_octet_stream(raw_content_type: &str) -> Mime {
    raw_content_type
        .parse()
        .unwrap_or(mime::APPLICATION_OCTET_STREAM)
}

fn trim_leading_whitespace(window: &[u8]) -> &[u8] {
    let start = window
        .iter()
        .position(|&b| !matches!(b, b'\t' | b'\n' | b'\x0C' | b'\r' | b' '))
        .unwrap_or(window.len());

    &window[start..]
}

fn starts_with_ignore_case(window: &[u8], prefix: &[u8]) -> bool {
    window.len() >= prefix.len() && window[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Html tags must be followed by a space or `>` to count.
fn is_html(trimmed: &[u8]) -> bool {
    HTML_PREFIXES.iter().any(|prefix| {
        if !starts_with_ignore_case(trimmed, prefix) {
            return false;
        }

        if prefix.starts_with(b"<!--") {
            return true;
        }

        matches!(trimmed.get(prefix.len()).copied(), Some(b' ' | b'>'))
    })
}

fn is_binary(window: &[u8]) -> bool {
    window
        .iter()
        .any(|&b| matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F))
}

/// Documents longer than the window are cut off, and so never count as JSON.
fn is_json(window: &[u8], trimmed: &[u8]) -> bool {
    if !matches!(trimmed.first().copied(), Some(b'{' | b'[')) {
        return false;
    }

    ::serde_json::from_slice::<IgnoredAny>(window).is_ok()
}

fn is_utf8(window: &[u8]) -> bool {
    match ::std::str::from_utf8(window) {
        Ok(_) => true,
        // A character split by the sniffing window still counts.
        Err(error) => error.error_len().is_none() && window.len() == SNIFF_LEN,
    }
}
