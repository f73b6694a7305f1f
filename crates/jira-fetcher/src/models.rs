use crate::error::FetchError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A page of a cursor-paginated listing such as `statuses/search`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ValuesPage {
    pub(crate) is_last: bool,
    pub(crate) values: Vec<Value>,
}

/// A page of `search` results.
#[derive(Debug, Deserialize)]
pub(crate) struct IssuesPage {
    pub(crate) total: u64,
    pub(crate) issues: Vec<Value>,
}

pub(crate) fn decode<T: DeserializeOwned>(
    body: &str,
    context: &'static str,
) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|source| FetchError::UnexpectedResponse { context, source })
}
