use crate::FormError;

/// Tracks if a `FormEncoder` can still accept writes.
///
/// This moves from `Accepting` to `Latched` once, on the first error,
/// and never moves back.
#[derive(Debug, Default)]
pub enum EncoderState {
    #[default]
    Accepting,
    Latched(FormError),
}

impl EncoderState {
    pub fn is_latched(&self) -> bool {
        matches!(self, Self::Latched(_))
    }

    pub fn error(&self) -> Option<&FormError> {
        match self {
            Self::Accepting => None,
            Self::Latched(error) => Some(error),
        }
    }

    /// Stores the error, if no error has been stored yet.
    /// Later errors are dropped.
    pub fn latch(&mut self, error: FormError) {
        if let Self::Accepting = self {
            ::tracing::debug!(%error, "form encoder latched error");
            *self = Self::Latched(error);
        }
    }

    pub fn into_error(self) -> Option<FormError> {
        match self {
            Self::Accepting => None,
            Self::Latched(error) => Some(error),
        }
    }
}
