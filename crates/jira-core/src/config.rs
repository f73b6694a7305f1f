use crate::model::JiraConnection;
use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_PROFILE: &str = "dev";

const ENV_FILE_NAME: &str = "http-client.private.env.json";

/// One named profile of a private environment file.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraEnvironment {
    pub jira_server: String,
    pub user: String,
    pub token: String,
    #[serde(default)]
    pub jira_project: Option<String>,
}

impl JiraEnvironment {
    pub fn connection(&self) -> JiraConnection {
        JiraConnection::new(&self.jira_server, &self.user, &self.token)
    }

    fn validate(&self, profile: &str) -> anyhow::Result<()> {
        if self.jira_server.trim().is_empty() {
            anyhow::bail!("profile {profile} has an empty jiraServer");
        }
        if self.user.trim().is_empty() {
            anyhow::bail!("profile {profile} has an empty user");
        }
        if self.token.is_empty() {
            anyhow::bail!("profile {profile} has an empty token");
        }
        Ok(())
    }
}

/// Profiles keyed by name, e.g. `{"dev": {...}, "prod": {...}}`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentFile {
    profiles: BTreeMap<String, JiraEnvironment>,
}

impl EnvironmentFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("read environment file {}", path.display()))?;
        let file: Self = serde_json::from_str(&data).context("parse environment file")?;
        debug!(path = %path.display(), profiles = file.profiles.len(), "loaded environment file");
        Ok(file)
    }

    pub fn profile(&self, name: &str) -> anyhow::Result<&JiraEnvironment> {
        let environment = self
            .profiles
            .get(name)
            .with_context(|| format!("profile {name} not found in environment file"))?;
        environment.validate(name)?;
        Ok(environment)
    }

    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}

pub fn default_env_path() -> anyhow::Result<PathBuf> {
    let project = ProjectDirs::from("com", "jira-api-fetcher", "jira-api-fetcher")
        .context("resolve project dirs")?;
    Ok(project.config_dir().join(ENV_FILE_NAME))
}
