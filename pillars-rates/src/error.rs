use thiserror::Error;

/// Failure modes of a rate lookup. These surface directly to the caller;
/// there is no local recovery.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("metal price API credential is not configured")]
    MissingCredential,
    #[error("rate request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("rate provider returned status {status}")]
    Upstream { status: u16 },
    #[error("rate payload unusable: {0}")]
    MalformedPayload(String),
}
