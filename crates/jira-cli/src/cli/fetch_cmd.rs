use super::*;
pub(super) fn handle_issues(
    fetcher: &JiraApiFetcher<'_>,
    environment: &JiraEnvironment,
    args: IssuesArgs,
) -> anyhow::Result<Value> {
    let jql = args
        .jql
        .or_else(|| environment.jira_project.as_deref().map(recent_issues_jql));
    let issues = fetcher
        .fetch_issues(
            &args.endpoint,
            args.fetch_size,
            Some(args.fields.as_str()),
            jql.as_deref(),
        )
        .with_context(|| format!("fetch issues from {}", args.endpoint))?;
    Ok(Value::Array(issues))
}

pub(super) fn handle_array(fetcher: &JiraApiFetcher<'_>, args: ArrayArgs) -> anyhow::Result<Value> {
    fetcher
        .fetch_array(&args.endpoint)
        .with_context(|| format!("fetch {}", args.endpoint))
}

pub(super) fn handle_paginated(
    fetcher: &JiraApiFetcher<'_>,
    args: PaginatedArgs,
) -> anyhow::Result<Value> {
    let values = fetcher
        .fetch_paginated(&args.endpoint, args.fetch_size, args.params.as_deref())
        .with_context(|| format!("fetch paginated values from {}", args.endpoint))?;
    Ok(Value::Array(values))
}

pub(super) fn recent_issues_jql(project: &str) -> String {
    format!(r#"project = "{project}" AND created >= -5d ORDER BY created DESC"#)
}
