use {
    crate::{
        chronoutil::format_date_stamp,
        constants::{AWS4, AWS4_REQUEST, SHA256_OUTPUT_LEN},
        crypto::hmac_sha256,
    },
    chrono::NaiveDate,
    std::fmt::{Debug, Display, Formatter, Result as FmtResult},
};

/// The `kSigning` key: the scoped signing key produced by the four-step
/// HMAC-SHA256 derivation chain.
///
/// Derivation is cheap (four HMAC operations), so keys are derived fresh
/// for every signing call and dropped when the call returns; they are never
/// cached or reused across (date, region, service) scopes. The raw bytes
/// are sensitive-key-derived material and are never printed: `Debug` and
/// `Display` emit only the type name.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KSigningKey {
    /// The raw key.
    key: [u8; SHA256_OUTPUT_LEN],
}

/// `kDate = HMAC-SHA256("AWS4" + secretKey, "YYYYMMDD")`.
pub(crate) fn k_date(secret_key: &str, date: NaiveDate) -> [u8; SHA256_OUTPUT_LEN] {
    let mut prefixed_key = Vec::with_capacity(AWS4.len() + secret_key.len());
    prefixed_key.extend_from_slice(AWS4.as_bytes());
    prefixed_key.extend_from_slice(secret_key.as_bytes());
    hmac_sha256(&prefixed_key, format_date_stamp(date).as_bytes())
}

/// `kRegion = HMAC-SHA256(kDate, region)`.
pub(crate) fn k_region(k_date: &[u8; SHA256_OUTPUT_LEN], region: &str) -> [u8; SHA256_OUTPUT_LEN] {
    hmac_sha256(k_date, region.as_bytes())
}

/// `kService = HMAC-SHA256(kRegion, service)`.
pub(crate) fn k_service(k_region: &[u8; SHA256_OUTPUT_LEN], service: &str) -> [u8; SHA256_OUTPUT_LEN] {
    hmac_sha256(k_region, service.as_bytes())
}

impl KSigningKey {
    /// Derive the signing key for a (date, region, service) scope from the
    /// raw secret key.
    ///
    /// Each step's output is the next step's key, as raw bytes:
    ///
    /// ```text
    /// kDate    = HMAC-SHA256("AWS4" + secretKey, dateStamp)
    /// kRegion  = HMAC-SHA256(kDate, region)
    /// kService = HMAC-SHA256(kRegion, service)
    /// kSigning = HMAC-SHA256(kService, "aws4_request")
    /// ```
    ///
    /// The `"AWS4"` prefix and the `"aws4_request"` terminator are exact
    /// and load-bearing; any deviation invalidates every signature.
    pub fn derive(secret_key: &str, date: NaiveDate, region: &str, service: &str) -> Self {
        let k_date = k_date(secret_key, date);
        let k_region = k_region(&k_date, region);
        let k_service = k_service(&k_region, service);
        Self {
            key: hmac_sha256(&k_service, AWS4_REQUEST.as_bytes()),
        }
    }

    /// Compute the final signature: the lowercase-hex HMAC-SHA256 of the
    /// string to sign under this key.
    pub fn sign(&self, string_to_sign: &str) -> String {
        hex::encode(hmac_sha256(&self.key, string_to_sign.as_bytes()))
    }
}

impl AsRef<[u8; SHA256_OUTPUT_LEN]> for KSigningKey {
    fn as_ref(&self) -> &[u8; SHA256_OUTPUT_LEN] {
        &self.key
    }
}

impl Debug for KSigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("KSigningKey")
    }
}

impl Display for KSigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("KSigningKey")
    }
}
