use ::mime::Mime;

/// Guesses the content type of a file from its bytes.
pub trait ContentSniffer: Send + Sync {
    /// Returns the best guess for the bytes given.
    ///
    /// Returning `None` means no guess could be made,
    /// and `application/octet-stream` will be used instead.
    fn sniff(&self, contents: &[u8]) -> Option<Mime>;
}

impl<F> ContentSniffer for F
where
    F: Fn(&[u8]) -> Option<Mime> + Send + Sync,
{
    fn sniff(&self, contents: &[u8]) -> Option<Mime> {
        (self)(contents)
    }
}
