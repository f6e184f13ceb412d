use std::env;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub github_token: String,
    pub notion_token: String,
    pub stories_db_id: String,
}

/// Values supplied on the command line, taking precedence over the
/// environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub github_token: Option<String>,
    pub notion_token: Option<String>,
    pub stories_db_id: Option<String>,
}

impl AppConfig {
    /// Loads the three required parameters, checking the workflow-input form
    /// (`INPUT_<NAME>`) first and the plain environment variable second.
    /// All three must be non-empty; a missing one is a startup failure.
    pub fn load(overrides: ConfigOverrides) -> AppResult<Self> {
        Ok(Self {
            github_token: required(overrides.github_token, "github-token", "GITHUB_TOKEN")?,
            notion_token: required(overrides.notion_token, "notion-token", "NOTION_TOKEN")?,
            stories_db_id: required(overrides.stories_db_id, "stories-db-id", "STORIES_DB_ID")?,
        })
    }
}

fn required(override_value: Option<String>, input: &str, env_var: &str) -> AppResult<String> {
    let input_var = format!("INPUT_{}", input.to_uppercase().replace('-', "_"));
    let value = override_value
        .or_else(|| env::var(&input_var).ok())
        .or_else(|| env::var(env_var).ok())
        .unwrap_or_default();

    if value.trim().is_empty() {
        return Err(AppError::Configuration(format!(
            "required input `{input}` is empty (set {input_var} or {env_var})"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_without_touching_env() {
        let config = AppConfig::load(ConfigOverrides {
            github_token: Some("gh".to_string()),
            notion_token: Some("nt".to_string()),
            stories_db_id: Some("db".to_string()),
        })
        .unwrap();
        assert_eq!(config.github_token, "gh");
        assert_eq!(config.notion_token, "nt");
        assert_eq!(config.stories_db_id, "db");
    }

    #[test]
    fn blank_override_is_still_missing() {
        let result = AppConfig::load(ConfigOverrides {
            github_token: Some("gh".to_string()),
            notion_token: Some("  ".to_string()),
            stories_db_id: Some("db".to_string()),
        });
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }
}
