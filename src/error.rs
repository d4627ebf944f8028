use {
    crate::constants::*,
    std::{
        error::Error,
        fmt::{Display, Formatter, Result as FmtResult},
    },
};

/// Error returned when a request cannot be signed, or surfaced by the
/// transport collaborator around a signing call.
///
/// The signing pipeline itself has essentially no failure modes given
/// well-formed inputs; most of these variants exist so integrators share a
/// single error type at the call boundary. Signing-stage errors are local
/// and immediate: signing is deterministic, so retrying cannot change its
/// outcome. Only transport failures are eligible for retry, and that policy
/// lives outside this crate.
#[derive(Debug)]
#[non_exhaustive]
pub enum SigningError {
    /// A header name or value contains bytes that cannot be canonicalized
    /// deterministically (e.g. embedded control characters). The signer
    /// fails fast rather than hashing a best-effort transformation, since a
    /// silently-altered hash produces a signature that cannot be reproduced
    /// by re-verification.
    InvalidEncoding(/* message */ String),

    /// The access key or secret key is absent or empty. Raised by
    /// [`Credential::new`](crate::Credential::new) before any signing
    /// occurs.
    MissingCredential(/* message */ String),

    /// A non-success HTTP status returned by the transport collaborator,
    /// carrying the response body. Never raised by the signing core.
    Transport {
        /// The HTTP status code of the response.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// The region code is not present in the caller's endpoint table. This
    /// is a transport-layer concern; never raised by the signing core.
    UnsupportedRegion(/* message */ String),
}

impl SigningError {
    /// A stable machine-readable code for the error.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidEncoding(_) => ERR_CODE_INVALID_ENCODING,
            Self::MissingCredential(_) => ERR_CODE_MISSING_CREDENTIAL,
            Self::Transport {
                ..
            } => ERR_CODE_TRANSPORT_ERROR,
            Self::UnsupportedRegion(_) => ERR_CODE_UNSUPPORTED_REGION,
        }
    }
}

impl Display for SigningError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::InvalidEncoding(msg) => f.write_str(msg),
            Self::MissingCredential(msg) => f.write_str(msg),
            Self::Transport {
                status,
                body,
            } => write!(f, "Transport error (HTTP status {}): {}", status, body),
            Self::UnsupportedRegion(msg) => f.write_str(msg),
        }
    }
}

impl Error for SigningError {}
