//! Canonicalization functionality for signature generation.
//!
//! This includes URI path and header canonicalization, as well as the
//! ability to create an AWS SigV4 canonical request from a
//! [`SignableRequest`].
//!
//! Every function here is a pure transform over its inputs: identical
//! inputs always yield identical output, which is what makes the final
//! signature reproducible by the verifying side.

use {
    crate::{constants::SHA256_EMPTY, crypto::sha256_hex, error::SigningError, request::SignableRequest},
    lazy_static::lazy_static,
    log::trace,
    percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC},
    regex::Regex,
};

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/glossary/latest/reference/glos-chap.html#uriencode):
/// URI encode every byte except the unreserved characters `A`-`Z`, `a`-`z`,
/// `0`-`9`, `-`, `.`, `_`, and `~`.
static AWS_URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

lazy_static! {
    /// Multiple space pattern for condensing header values.
    static ref MULTISPACE: Regex = Regex::new("  +").unwrap();
}

/// Canonicalize a URI path by percent-encoding each `/`-separated segment
/// **twice** in succession and rejoining with `/`.
///
/// Empty segments (consecutive slashes) encode to empty strings and are
/// preserved positionally. This function never fails.
///
/// Note: double-encoding every segment deviates from the single encoding
/// most SigV4 implementations apply outside of S3. It is intentional here
/// and must not be "fixed": changing it changes every produced signature.
pub fn canonicalize_uri_path(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            let encoded = utf8_percent_encode(segment, &AWS_URI_ENCODE_SET).to_string();
            utf8_percent_encode(&encoded, &AWS_URI_ENCODE_SET).to_string()
        })
        .collect::<Vec<String>>()
        .join("/")
}

/// Canonicalize headers for signing.
///
/// Header names are sorted by ascending byte order exactly as supplied
/// (case-sensitive; the caller is expected to provide lowercase names as
/// AWS requires). The sort is stable, so duplicate names keep their
/// relative input order. Each value has runs of spaces collapsed to a
/// single space and leading/trailing spaces trimmed.
///
/// Returns the canonical header block (one `name:value\n` line per header,
/// plus one extra trailing newline) and the `;`-joined signed-headers list.
///
/// Returns [`SigningError::InvalidEncoding`] if a name or value contains a
/// control character: a newline smuggled into a value would silently alter
/// the shape of the canonical request.
pub fn canonicalize_headers(headers: &[(String, String)]) -> Result<(String, String), SigningError> {
    let mut sorted: Vec<&(String, String)> = headers.iter().collect();
    sorted.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    let mut canonical = String::new();
    let mut names = Vec::with_capacity(sorted.len());

    for (name, value) in sorted {
        if name.chars().any(|c| c.is_ascii_control()) {
            return Err(SigningError::InvalidEncoding(format!(
                "Header name contains a control character: {:?}",
                name
            )));
        }
        if value.chars().any(|c| c.is_ascii_control()) {
            return Err(SigningError::InvalidEncoding(format!(
                "Header value for '{}' contains a control character",
                name
            )));
        }

        let folded = MULTISPACE.replace_all(value, " ");
        canonical.push_str(name);
        canonical.push(':');
        canonical.push_str(folded.trim_matches(' '));
        canonical.push('\n');
        names.push(name.as_str());
    }

    canonical.push('\n');
    Ok((canonical, names.join(";")))
}

/// A canonicalized request for AWS SigV4.
///
/// This is mainly used internally for generating the canonical request for
/// signing, but is exposed for testing and debugging purposes.
#[derive(Clone, Debug)]
pub struct CanonicalRequest {
    /// The HTTP method for the request (e.g. "GET", "POST").
    method: String,

    /// The canonicalized (double-encoded) URI path.
    canonical_path: String,

    /// The query string, taken verbatim from the caller. The caller is
    /// responsible for percent-encoding and sorting it; it is not re-parsed
    /// here.
    canonical_query: String,

    /// The canonical header block, newline-terminated.
    canonical_headers: String,

    /// The `;`-joined signed-headers list, in the same order as the
    /// canonical header block.
    signed_headers: String,

    /// The SHA-256 hash of the body, lowercase hex.
    payload_sha256: String,
}

impl CanonicalRequest {
    /// Canonicalize a [`SignableRequest`].
    pub fn from_signable(req: &SignableRequest) -> Result<Self, SigningError> {
        let (canonical_headers, signed_headers) = canonicalize_headers(req.headers())?;

        // An empty body hashes to the digest of the empty byte sequence,
        // which is a known constant.
        let payload_sha256 = if req.body().is_empty() {
            SHA256_EMPTY.to_string()
        } else {
            sha256_hex(req.body())
        };

        Ok(Self {
            method: req.method().to_string(),
            canonical_path: canonicalize_uri_path(req.path()),
            canonical_query: req.query_string().to_string(),
            canonical_headers,
            signed_headers,
            payload_sha256,
        })
    }

    /// Retrieve the canonicalized URI path.
    #[inline]
    pub fn canonical_path(&self) -> &str {
        &self.canonical_path
    }

    /// Retrieve the `;`-joined signed-headers list.
    #[inline]
    pub fn signed_headers(&self) -> &str {
        &self.signed_headers
    }

    /// Retrieve the lowercase-hex SHA-256 hash of the body.
    #[inline]
    pub fn payload_sha256(&self) -> &str {
        &self.payload_sha256
    }

    /// Assemble the [canonical request string](https://docs.aws.amazon.com/general/latest/gr/sigv4-create-canonical-request.html).
    ///
    /// Each line is newline-separated; the canonical header block carries
    /// its own extra trailing newline, and the hashed payload has no
    /// trailing newline.
    pub fn to_canonical_string(&self) -> String {
        let result = format!(
            "{}\n{}\n{}\n{}{}\n{}",
            self.method,
            self.canonical_path,
            self.canonical_query,
            self.canonical_headers,
            self.signed_headers,
            self.payload_sha256
        );

        trace!("Canonical request:\n{}", result);

        result
    }

    /// The lowercase-hex SHA-256 hash of the canonical request string.
    pub fn sha256_hex(&self) -> String {
        sha256_hex(self.to_canonical_string().as_bytes())
    }
}
