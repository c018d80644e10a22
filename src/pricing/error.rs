use thiserror::Error;

/// Coarse failure class shown to the cashier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupErrorKind {
    /// Connectivity, timeout or a non-2xx answer.
    NetworkFailure,
    /// The body was not a JSON array of products.
    DecodeFailure,
}

/// Errors surfaced by a single price lookup.
///
/// Messages are captured as text so a failed lookup can be cloned into UI
/// state and replayed by test doubles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no se pudo conectar con el servidor de precios: {message}")]
    Network { message: String },

    #[error("el servidor de precios no respondió en {seconds}s")]
    Timeout { seconds: u64 },

    #[error("el servidor de precios respondió HTTP {status}")]
    Status { status: u16 },

    #[error("respuesta inválida del servidor de precios: {message}")]
    Decode { message: String },
}

impl LookupError {
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::Network { .. }
            | LookupError::Timeout { .. }
            | LookupError::Status { .. } => LookupErrorKind::NetworkFailure,
            LookupError::Decode { .. } => LookupErrorKind::DecodeFailure,
        }
    }
}
