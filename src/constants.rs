//! Common constants used throughout the crate.
//!
//! These are consolidated here so the entire crate agrees on the literal
//! values the SigV4 algorithm depends on. If a value is spelled incorrectly,
//! at least it can be fixed in one spot.
//!
//! Tests that check error messages should not use these constants; they
//! should use hard-coded strings so the tests also catch misspellings.
//!
//! Please keep this file organized alphabetically.

use {lazy_static::lazy_static, std::collections::HashMap};

/// Prefix applied to the secret key before the first HMAC in the key
/// derivation chain.
pub(crate) const AWS4: &str = "AWS4";

/// Display name of the SigV4 signing algorithm over SHA-256.
pub(crate) const AWS4_HMAC_SHA256: &str = "AWS4-HMAC-SHA256";

/// String included at the end of the AWS SigV4 credential scope.
pub(crate) const AWS4_REQUEST: &str = "aws4_request";

/// Key into [`SIGNING_ALGORITHMS`] for the SHA-256 digest.
pub(crate) const DIGEST_SHA256: &str = "sha256";

/// Error code: InvalidEncoding
pub(crate) const ERR_CODE_INVALID_ENCODING: &str = "InvalidEncoding";

/// Error code: MissingCredential
pub(crate) const ERR_CODE_MISSING_CREDENTIAL: &str = "MissingCredential";

/// Error code: TransportError
pub(crate) const ERR_CODE_TRANSPORT_ERROR: &str = "TransportError";

/// Error code: UnsupportedRegion
pub(crate) const ERR_CODE_UNSUPPORTED_REGION: &str = "UnsupportedRegion";

/// Compact ISO 8601 format used in the string to sign.
pub(crate) const ISO8601_COMPACT_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Short date format used in the credential scope and key derivation.
pub(crate) const ISO8601_DATE_FORMAT: &str = "%Y%m%d";

/// SHA-256 of an empty byte sequence.
pub(crate) const SHA256_EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// The length of a SHA-256 digest in bytes.
pub(crate) const SHA256_OUTPUT_LEN: usize = 32;

/// The region to use for testing.
#[cfg(test)]
pub(crate) const TEST_REGION: &str = "us-east-1";

/// The service to use for testing.
#[cfg(test)]
pub(crate) const TEST_SERVICE: &str = "service";

lazy_static! {
    /// Digest algorithms mapped to their SigV4 protocol display names.
    /// Exactly one entry is active today; the table shape anticipates
    /// additional algorithms.
    pub(crate) static ref SIGNING_ALGORITHMS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert(DIGEST_SHA256, AWS4_HMAC_SHA256);
        m
    };
}

/// Look up the protocol display name for a digest algorithm key.
pub fn signing_algorithm(digest: &str) -> Option<&'static str> {
    SIGNING_ALGORITHMS.get(digest).copied()
}

/// The display name of the digest algorithm this crate signs with.
#[inline]
pub(crate) fn active_algorithm() -> &'static str {
    SIGNING_ALGORITHMS[DIGEST_SHA256]
}
