//! Per-request options

use crate::constants::{CORRELATION_ID_HEADER, REQUEST_ID_HEADER};

/// Optional correlation headers sent verbatim with a request
///
/// `request_id` identifies one request/response pair, `correlation_id` a
/// series of requests forming one transaction. Both are usually UUIDv4s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub request_id: Option<String>,
    pub correlation_id: Option<String>,
}

impl RequestOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Header name/value pairs for the options that are set.
    pub fn headers(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (REQUEST_ID_HEADER, self.request_id.as_deref()),
            (CORRELATION_ID_HEADER, self.correlation_id.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_headers_by_default() {
        assert_eq!(RequestOptions::new().headers().count(), 0);
    }

    #[test]
    fn headers_pass_through_verbatim() {
        let options = RequestOptions::new().request_id("req-1").correlation_id("corr-9");
        let headers: Vec<_> = options.headers().collect();
        assert_eq!(headers, vec![("x_request_id", "req-1"), ("x_correlation_id", "corr-9")]);
    }
}
