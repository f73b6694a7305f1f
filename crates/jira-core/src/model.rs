use std::fmt;

/// Base URL and Basic auth credentials for a Jira instance.
///
/// Fields are private so a connection cannot change once handed to a fetcher.
#[derive(Clone, Eq, PartialEq)]
pub struct JiraConnection {
    base_url: String,
    username: String,
    token: String,
}

impl JiraConnection {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            token: token.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for JiraConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "JiraConnection(base_url={}, username={})",
            self.base_url, self.username
        )
    }
}

// Keeps the token out of `{:?}` output and tracing fields.
impl fmt::Debug for JiraConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JiraConnection")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}
