// Crate-level error type for domain and charset conversion.

use crate::punycode::PunycodeError;

/// Error returned by the domain wrapper and the charset boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The codec rejected a label. Carries the first failing label only.
    #[error("label {label:?}: {source}")]
    Label {
        label: String,
        #[source]
        source: PunycodeError,
    },
    /// The charset label is unknown or cannot be used in both directions.
    #[error("unsupported charset: {0}")]
    UnsupportedCharset(String),
    /// The input bytes are not valid in the declared charset.
    #[error("input is not valid {charset}")]
    MalformedInput { charset: &'static str },
    /// The decoded text contains characters the charset cannot represent.
    #[error("output cannot be represented in {charset}")]
    Unmappable { charset: &'static str },
}

impl Error {
    pub(crate) fn label(label: &str, source: PunycodeError) -> Self {
        Self::Label {
            label: label.to_owned(),
            source,
        }
    }

    /// The codec failure behind a [`Error::Label`], if any.
    pub fn punycode(&self) -> Option<PunycodeError> {
        match self {
            Self::Label { source, .. } => Some(*source),
            _ => None,
        }
    }
}
