/// Errors produced while parsing a stats API XML response.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// The tokenizer rejected the input (bad markup, bad escape, bad encoding).
    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("mismatched tag: expected </{expected}>, found </{found}>")]
    MismatchedTag { expected: String, found: String },

    #[error("no element found")]
    NoRoot,

    #[error("junk after document element")]
    TrailingContent,

    #[error("unclosed element <{0}>")]
    Unclosed(String),
}

impl From<quick_xml::Error> for XmlError {
    fn from(err: quick_xml::Error) -> Self {
        XmlError::Syntax(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for XmlError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        XmlError::Syntax(err.to_string())
    }
}

impl From<std::str::Utf8Error> for XmlError {
    fn from(err: std::str::Utf8Error) -> Self {
        XmlError::Syntax(err.to_string())
    }
}
