use crate::error::FetchError;
use crate::http::send_get;
use crate::models::{IssuesPage, ValuesPage, decode};
use crate::request::{
    build_issue_search_params, build_paginated_params, parse_extra_params, resolve_url,
    split_fields,
};
use jira_core::model::JiraConnection;
use reqwest::blocking::Client;
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, info};

pub const DEFAULT_FETCH_SIZE: u32 = 50;

/// Runs GET requests against the instance described by a [`JiraConnection`].
///
/// Every operation blocks until its last page has arrived. The connection is
/// only ever read, so one fetcher can serve several threads.
pub struct JiraApiFetcher<'a> {
    connection: &'a JiraConnection,
    client: Client,
}

impl<'a> JiraApiFetcher<'a> {
    pub fn new(connection: &'a JiraConnection) -> Self {
        Self::with_client(connection, Client::new())
    }

    pub fn with_client(connection: &'a JiraConnection, client: Client) -> Self {
        Self { connection, client }
    }

    pub fn connection(&self) -> &JiraConnection {
        self.connection
    }

    /// Fetches `endpoint` once and returns the JSON body as the server sent it.
    pub fn fetch_array(&self, endpoint: &str) -> Result<Value, FetchError> {
        let url = self.url(endpoint)?;
        debug!(url = %url, "fetching array");

        let response = send_get(&self.client, self.connection, url, &[])?;
        if !response.is_ok() {
            return Err(FetchError::api(
                "Failed to fetch data as array",
                &response.body,
                response.status.as_u16(),
            ));
        }
        decode(&response.body, "decode array response")
    }

    /// Collects every `values` entry of an `isLast`-terminated listing.
    ///
    /// `params_json` must be a JSON object; its keys are sent with every page
    /// and override `startAt`/`maxResults`. A page with no values that is not
    /// the last page is requested again at the same offset.
    pub fn fetch_paginated(
        &self,
        endpoint: &str,
        fetch_size: u32,
        params_json: Option<&str>,
    ) -> Result<Vec<Value>, FetchError> {
        let url = self.url(endpoint)?;
        check_fetch_size(fetch_size)?;
        let extra = params_json.map(parse_extra_params).transpose()?;

        let mut start_at: u64 = 0;
        let mut data = Vec::new();
        loop {
            let params = build_paginated_params(start_at, fetch_size, extra.as_ref());
            debug!(url = %url, start_at, fetch_size, "fetching page");
            let response = send_get(&self.client, self.connection, url.clone(), &params)?;
            if !response.is_ok() {
                return Err(FetchError::api(
                    "Failed to fetch paginated values",
                    &response.body,
                    response.status.as_u16(),
                ));
            }

            let page: ValuesPage = decode(&response.body, "decode paginated response")?;
            start_at += page.values.len() as u64;
            data.extend(page.values);
            if page.is_last {
                break;
            }
        }

        info!(url = %url, count = data.len(), "fetched paginated values");
        Ok(data)
    }

    /// Runs an issue search, paging until `startAt` reaches the reported total.
    ///
    /// `fields` is a comma separated list of issue fields to return; `jql`
    /// is passed through untouched.
    pub fn fetch_issues(
        &self,
        endpoint: &str,
        fetch_size: u32,
        fields: Option<&str>,
        jql: Option<&str>,
    ) -> Result<Vec<Value>, FetchError> {
        let url = self.url(endpoint)?;
        check_fetch_size(fetch_size)?;
        let fields = fields.and_then(split_fields);

        let mut start_at: u64 = 0;
        // Placeholder so the first request always goes out.
        let mut total = u64::from(fetch_size);
        let mut issues = Vec::new();
        while start_at < total {
            let params = build_issue_search_params(fetch_size, fields.as_deref(), jql, start_at);
            debug!(url = %url, start_at, fetch_size, "fetching issues page");
            let response = send_get(&self.client, self.connection, url.clone(), &params)?;
            if !response.is_ok() {
                return Err(FetchError::api(
                    "Failed to fetch issues",
                    &response.body,
                    response.status.as_u16(),
                ));
            }

            let page: IssuesPage = decode(&response.body, "decode issues response")?;
            total = page.total;
            start_at += page.issues.len() as u64;
            issues.extend(page.issues);
        }

        info!(url = %url, count = issues.len(), total, "fetched issues");
        Ok(issues)
    }

    fn url(&self, endpoint: &str) -> Result<Url, FetchError> {
        resolve_url(self.connection.base_url(), Some(endpoint))
    }
}

fn check_fetch_size(fetch_size: u32) -> Result<(), FetchError> {
    if fetch_size < 1 {
        return Err(FetchError::InvalidArgument(
            "fetch_size must be >= 1".to_string(),
        ));
    }
    Ok(())
}
