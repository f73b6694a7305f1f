use crate::error::FetchError;
use jira_core::model::JiraConnection;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::{StatusCode, Url};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Status and unparsed body of a completed GET.
pub(crate) struct RawResponse {
    pub(crate) status: StatusCode,
    pub(crate) body: String,
}

impl RawResponse {
    pub(crate) fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }
}

/// Sends one authenticated GET. Any status is returned as-is; only transport
/// failures are errors here.
pub(crate) fn send_get(
    client: &Client,
    connection: &JiraConnection,
    url: Url,
    params: &[(String, String)],
) -> Result<RawResponse, FetchError> {
    let mut builder = client
        .get(url)
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .basic_auth(connection.username(), Some(connection.token()));
    if !params.is_empty() {
        builder = builder.query(params);
    }
    let response = builder.send()?;
    let status = response.status();
    let body = response.text()?;
    Ok(RawResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_200_counts_as_success() {
        let ok = RawResponse {
            status: StatusCode::OK,
            body: String::new(),
        };
        let created = RawResponse {
            status: StatusCode::CREATED,
            body: String::new(),
        };
        assert!(ok.is_ok());
        assert!(!created.is_ok());
    }
}
