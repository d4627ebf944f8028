use {
    crate::{
        chronoutil::format_date_stamp,
        constants::AWS4_REQUEST,
        error::SigningError,
    },
    chrono::{DateTime, Utc},
    std::fmt::{Debug, Formatter, Result as FmtResult},
};

/// An AWS credential bound to the scope of a single request: access key,
/// secret key, and the (timestamp, region, service) triple the derived
/// signing key is valid for.
///
/// The secret key is sensitive: the [`Debug`] implementation elides it, and
/// keys derived from it are discarded at the end of each signing call.
#[derive(Clone)]
pub struct Credential {
    /// The public access key identifier.
    access_key: String,

    /// The secret key. Never logged.
    secret_key: String,

    /// The UTC timestamp of the request.
    timestamp: DateTime<Utc>,

    /// The region code, lowercase (e.g. `us-east-1`).
    region: String,

    /// The service code (e.g. `ses`).
    service: String,
}

impl Credential {
    /// Create a credential for one signing call.
    ///
    /// Returns [`SigningError::MissingCredential`] if the access key or
    /// secret key is empty; this is checked here, before any signing
    /// occurs, rather than deep in the pipeline.
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        timestamp: DateTime<Utc>,
        region: impl Into<String>,
        service: impl Into<String>,
    ) -> Result<Self, SigningError> {
        let access_key = access_key.into();
        let secret_key = secret_key.into();

        if access_key.is_empty() {
            return Err(SigningError::MissingCredential("Access key must not be empty".to_string()));
        }
        if secret_key.is_empty() {
            return Err(SigningError::MissingCredential("Secret key must not be empty".to_string()));
        }

        Ok(Self {
            access_key,
            secret_key,
            timestamp,
            region: region.into(),
            service: service.into(),
        })
    }

    /// Retrieve the access key identifier.
    #[inline]
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Retrieve the secret key.
    #[inline]
    pub(crate) fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Retrieve the UTC timestamp of the request.
    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Retrieve the region code.
    #[inline]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Retrieve the service code.
    #[inline]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// The credential scope for this credential, in the form
    /// `YYYYMMDD/region/service/aws4_request`. A signature replayed outside
    /// its scope is invalid by construction.
    pub fn scope(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            format_date_stamp(self.timestamp.date_naive()),
            self.region,
            self.service,
            AWS4_REQUEST
        )
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Credential")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<elided>")
            .field("timestamp", &self.timestamp)
            .field("region", &self.region)
            .field("service", &self.service)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::Credential,
        crate::constants::{TEST_REGION, TEST_SERVICE},
        chrono::{TimeZone, Utc},
    };

    #[test]
    fn test_scope() {
        let timestamp = Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap();
        let cred = Credential::new("AKIDEXAMPLE", "secret", timestamp, TEST_REGION, TEST_SERVICE).unwrap();
        assert_eq!(cred.scope(), "20150830/us-east-1/service/aws4_request");
    }

    #[test]
    fn test_empty_keys_rejected() {
        let timestamp = Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap();

        let e = Credential::new("", "secret", timestamp, TEST_REGION, TEST_SERVICE).unwrap_err();
        assert_eq!(e.error_code(), "MissingCredential");
        assert_eq!(e.to_string(), "Access key must not be empty");

        let e = Credential::new("AKIDEXAMPLE", "", timestamp, TEST_REGION, TEST_SERVICE).unwrap_err();
        assert_eq!(e.error_code(), "MissingCredential");
        assert_eq!(e.to_string(), "Secret key must not be empty");
    }

    #[test]
    fn test_debug_elides_secret() {
        let timestamp = Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap();
        let cred =
            Credential::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY", timestamp, TEST_REGION, TEST_SERVICE)
                .unwrap();
        let formatted = format!("{:?}", cred);
        assert!(formatted.contains("AKIDEXAMPLE"));
        assert!(!formatted.contains("wJalrXUtnFEMI"));
    }
}
