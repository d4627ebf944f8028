//! AWS API request signing.
//!
//! This crate implements the client side of the AWS
//! [SigV4](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
//! signing algorithm: it canonicalizes an HTTP request, derives a scoped
//! signing key from a secret credential, and produces the value of the
//! request's `Authorization` header.
//!
//! The HTTP transport is an external collaborator. This crate never sends
//! anything; it turns a [`SignableRequest`] and a [`Credential`] into a
//! header string, and the caller is responsible for transmitting the
//! request with exactly the headers it passed in here.
//!
//! ```
//! use aws_sigv4_sign::{sign_request, Credential, SignableRequest};
//! use chrono::{TimeZone, Utc};
//! use http::method::Method;
//!
//! let request = SignableRequest::builder()
//!     .method(Method::GET)
//!     .path("/")
//!     .header("host", "example.amazonaws.com")
//!     .header("x-amz-date", "20150830T123600Z")
//!     .build()
//!     .unwrap();
//! let credential = Credential::new(
//!     "AKIDEXAMPLE",
//!     "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
//!     Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap(),
//!     "us-east-1",
//!     "service",
//! )
//! .unwrap();
//!
//! let authorization = sign_request(&request, &credential).unwrap();
//! assert!(authorization.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"));
//! ```
//!
//! Signing is deterministic and side-effect free, so it is safe to invoke
//! concurrently from any number of threads for independent requests.

mod canonical;
mod chronoutil;
mod constants;
mod credential;
mod crypto;
mod error;
mod request;
mod signer;
mod signing_key;

pub use crate::{
    canonical::{canonicalize_headers, canonicalize_uri_path, CanonicalRequest},
    chronoutil::{format_compact_timestamp, format_date_stamp},
    constants::signing_algorithm,
    credential::Credential,
    error::SigningError,
    request::{SignableRequest, SignableRequestBuilder, SignableRequestBuilderError},
    signer::{sign_request, string_to_sign},
    signing_key::KSigningKey,
};
