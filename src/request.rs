use {bytes::Bytes, derive_builder::Builder, http::method::Method};

/// An HTTP request in the form consumed by the signing pipeline.
///
/// The caller is responsible for having already injected every header that
/// must be signed -- in particular `host` and `x-amz-date` -- and for
/// percent-encoding the query string. Every header passed here must be
/// transmitted with the request exactly as given: any post-signing header
/// mutation invalidates the signature server-side.
///
/// SignableRequest structs are immutable. Use [`SignableRequestBuilder`] to
/// programmatically construct a request.
#[derive(Builder, Clone, Debug)]
#[non_exhaustive]
pub struct SignableRequest {
    /// The HTTP method for the request (e.g. `GET`, `POST`).
    method: Method,

    /// The URI path as sent on the request line, before canonical encoding.
    #[builder(setter(into))]
    path: String,

    /// The query string, without the leading `?`. This must already be
    /// percent-encoded and sorted by the caller; it is used verbatim in the
    /// canonical request.
    #[builder(setter(into), default)]
    query_string: String,

    /// Header name/value pairs in transmission order. Names are used
    /// exactly as supplied (case-sensitive) and duplicates are not merged.
    #[builder(default)]
    headers: Vec<(String, String)>,

    /// The raw request body.
    #[builder(setter(into), default)]
    body: Bytes,
}

impl SignableRequest {
    /// Create a [SignableRequestBuilder] to construct a [SignableRequest].
    #[inline]
    pub fn builder() -> SignableRequestBuilder {
        SignableRequestBuilder::default()
    }

    /// Retrieve the HTTP method for the request.
    #[inline]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Retrieve the URI path for the request.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Retrieve the caller-encoded query string.
    #[inline]
    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    /// Retrieve the header name/value pairs in transmission order.
    #[inline]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Retrieve the raw request body.
    #[inline]
    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

impl SignableRequestBuilder {
    /// Append a single header, preserving the order of prior appends.
    pub fn header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.get_or_insert_with(Vec::new).push((name.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use {super::SignableRequest, http::method::Method};

    #[test]
    fn test_builder_defaults() {
        let req = SignableRequest::builder().method(Method::GET).path("/").build().unwrap();
        assert_eq!(req.method(), &Method::GET);
        assert_eq!(req.path(), "/");
        assert_eq!(req.query_string(), "");
        assert!(req.headers().is_empty());
        assert!(req.body().is_empty());
    }

    #[test]
    fn test_builder_header_order_preserved() {
        let req = SignableRequest::builder()
            .method(Method::PUT)
            .path("/object")
            .header("host", "example.amazonaws.com")
            .header("x-amz-date", "20150830T123600Z")
            .header("my-header", "a")
            .body(&b"hello"[..])
            .build()
            .unwrap();

        let names: Vec<&str> = req.headers().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["host", "x-amz-date", "my-header"]);
        assert_eq!(req.body().as_ref(), b"hello");
    }

    #[test]
    fn test_builder_requires_method_and_path() {
        assert!(SignableRequest::builder().path("/").build().is_err());
        assert!(SignableRequest::builder().method(Method::GET).build().is_err());
    }
}
