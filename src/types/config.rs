use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvalConfig {
    #[serde(default)]
    pub git: GitConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitConfig {
    #[serde(default = "default_git_binary")]
    pub binary: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            binary: default_git_binary(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_git_binary() -> String {
    "git".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatSetting {
    #[default]
    Text,
    Json,
    Md,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormatSetting,
}

/// Resolved settings for VCS queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitSettings {
    pub binary: String,
    pub timeout: Duration,
}

impl Default for GitSettings {
    fn default() -> Self {
        GitConfig::default().settings()
    }
}

impl GitConfig {
    pub fn settings(&self) -> GitSettings {
        GitSettings {
            binary: self.binary.clone(),
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
        }
    }
}
