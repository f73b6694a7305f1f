use crate::error::FetchError;
use reqwest::Url;
use serde_json::{Map, Value};

/// Query string pairs in send order. Repeated keys encode list values.
pub type QueryPairs = Vec<(String, String)>;

pub(crate) const START_AT: &str = "startAt";
pub(crate) const MAX_RESULTS: &str = "maxResults";

/// Joins `endpoint` onto `base_url` using standard URL resolution.
///
/// An absolute endpoint replaces the base entirely; a relative one resolves
/// against the base path, so `https://jira/rest/` + `api/2/search` gives
/// `https://jira/rest/api/2/search` while `https://jira/rest` + `api` gives
/// `https://jira/api`.
pub fn resolve_url(base_url: &str, endpoint: Option<&str>) -> Result<Url, FetchError> {
    let endpoint = match endpoint {
        Some(endpoint) if !endpoint.is_empty() => endpoint,
        _ => {
            return Err(FetchError::InvalidArgument(
                "endpoint must not be empty".to_string(),
            ));
        }
    };
    let base = Url::parse(base_url)
        .map_err(|err| FetchError::InvalidArgument(format!("invalid base url {base_url}: {err}")))?;
    base.join(endpoint)
        .map_err(|err| FetchError::InvalidArgument(format!("invalid endpoint {endpoint}: {err}")))
}

pub fn build_issue_search_params(
    fetch_size: u32,
    fields: Option<&[String]>,
    jql: Option<&str>,
    start_at: u64,
) -> QueryPairs {
    let mut params = vec![
        (START_AT.to_string(), start_at.to_string()),
        (MAX_RESULTS.to_string(), fetch_size.to_string()),
    ];
    if let Some(jql) = jql {
        params.push(("jql".to_string(), jql.to_string()));
    }
    if let Some(fields) = fields {
        params.extend(fields.iter().map(|field| ("fields".to_string(), field.clone())));
    }
    params
}

/// Parses caller-supplied extra parameters. Anything but a JSON object fails.
pub fn parse_extra_params(text: &str) -> Result<Map<String, Value>, FetchError> {
    serde_json::from_str(text).map_err(FetchError::MalformedInput)
}

/// Base `startAt`/`maxResults` with `extra` merged on top; extra keys win.
pub fn build_paginated_params(
    start_at: u64,
    fetch_size: u32,
    extra: Option<&Map<String, Value>>,
) -> QueryPairs {
    let mut merged = Map::new();
    merged.insert(START_AT.to_string(), Value::from(start_at));
    merged.insert(MAX_RESULTS.to_string(), Value::from(fetch_size));
    if let Some(extra) = extra {
        for (key, value) in extra {
            merged.insert(key.clone(), value.clone());
        }
    }
    encode_params(&merged)
}

/// Splits a comma separated field list. An empty list means "no fields".
pub fn split_fields(csv: &str) -> Option<Vec<String>> {
    if csv.is_empty() {
        return None;
    }
    Some(csv.split(',').map(ToString::to_string).collect())
}

fn encode_params(params: &Map<String, Value>) -> QueryPairs {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                pairs.extend(
                    items
                        .iter()
                        .filter_map(scalar_text)
                        .map(|text| (key.clone(), text)),
                );
            }
            other => {
                if let Some(text) = scalar_text(other) {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }
    pairs
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        nested => Some(nested.to_string()),
    }
}
