use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("failed to load {url}")]
    Load { url: String },
    #[error("malformed {endpoint} response: {reason}")]
    Malformed {
        endpoint: &'static str,
        reason: String,
    },
    #[error("catalog error {code}: {message}")]
    Api { code: i64, message: String },
    #[error("http error: {0}")]
    Http(String),
    #[error("{0} is not available")]
    Unavailable(&'static str),
}

impl CatalogError {
    pub fn malformed(endpoint: &'static str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            endpoint,
            reason: reason.into(),
        }
    }
}
