use thiserror::Error;

/// Errors returned by [`JiraApiFetcher`](crate::JiraApiFetcher).
///
/// None of these are retried; a failure part-way through pagination drops
/// the pages collected so far.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Rejected before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Caller-supplied extra parameters were not a JSON object.
    #[error(transparent)]
    MalformedInput(serde_json::Error),

    /// The server answered with something other than 200 OK.
    #[error("{message} (Status Code: {status_code})")]
    Api { message: String, status_code: u16 },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 200 body lacked the fields needed to continue.
    #[error("{context}: {source}")]
    UnexpectedResponse {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub(crate) fn api(prefix: &str, body: &str, status_code: u16) -> Self {
        Self::Api {
            message: format!("{prefix}: {body}"),
            status_code,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}
