/// Escapes a field or file name for use inside a quoted `Content-Disposition` parameter.
///
/// Backslashes are escaped first, and then quotes.
/// Running them in this order means the backslash added before a quote is never escaped again.
pub fn escape_quotes(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}
