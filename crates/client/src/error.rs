use pitwall_core::error::XmlError;

/// Errors from the stats API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The stats API returned a non-2xx status code.
    #[error("Stats API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Start of the response body, for debugging.
        body: String,
    },

    /// The response body was not well-formed XML.
    #[error(transparent)]
    Xml(#[from] XmlError),

    /// The document parsed but lacks the element the query depends on.
    #[error("response has no <{0}> element")]
    MissingElement(&'static str),
}
