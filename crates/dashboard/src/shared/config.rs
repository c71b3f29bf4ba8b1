use serde::Deserialize;

use contracts::shared::list_pipeline::StatScope;

use crate::error::PageError;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub pages: PagesConfig,
}

/// Per-page defaults: which sequence the headline cards aggregate over,
/// and the size of ranked lists.
#[derive(Debug, Deserialize, Clone)]
pub struct PagesConfig {
    /// Headline scope of the activity feed ("all" | "filtered")
    pub activity_feed_scope: String,
    /// Summary scope of the transaction register ("all" | "filtered")
    pub transaction_register_scope: String,
    /// Headline scope of the student roster ("all" | "filtered")
    pub student_roster_scope: String,
    /// Summary scope of the member directory ("all" | "filtered")
    pub member_directory_scope: String,
    /// Size of the loyalty "top earners" list
    pub loyalty_top_n: usize,
}

impl PagesConfig {
    /// Resolve a configured scope string, rejecting unknown codes
    pub fn scope(&self, code: &str) -> Result<StatScope, PageError> {
        StatScope::from_code(code).ok_or_else(|| PageError::InvalidScope(code.to_string()))
    }
}

/// Default configuration embedded in the binary.
///
/// The scope split mirrors the pages themselves: the activity feed and
/// the student roster show global headline cards over a filtered list,
/// while the register and the directory summarize the visible subset.
const DEFAULT_CONFIG: &str = r#"
[pages]
activity_feed_scope = "all"
transaction_register_scope = "filtered"
student_roster_scope = "all"
member_directory_scope = "filtered"
loyalty_top_n = 5
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                validate(&config)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    validate(&config)?;
    Ok(config)
}

/// Reject configs whose scope strings are not valid codes
fn validate(config: &Config) -> anyhow::Result<()> {
    let pages = &config.pages;
    for code in [
        &pages.activity_feed_scope,
        &pages.transaction_register_scope,
        &pages.student_roster_scope,
        &pages.member_directory_scope,
    ] {
        pages.scope(code)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert!(validate(&config).is_ok());
        assert_eq!(config.pages.activity_feed_scope, "all");
        assert_eq!(config.pages.transaction_register_scope, "filtered");
        assert_eq!(config.pages.loyalty_top_n, 5);
    }

    #[test]
    fn test_scope_resolution() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(
            config.pages.scope("all").unwrap(),
            StatScope::All
        );
        assert!(config.pages.scope("everything").is_err());
    }

    #[test]
    fn test_invalid_scope_is_rejected() {
        let bad = r#"
[pages]
activity_feed_scope = "global"
transaction_register_scope = "filtered"
student_roster_scope = "all"
member_directory_scope = "filtered"
loyalty_top_n = 5
"#;
        let config: Config = toml::from_str(bad).unwrap();
        assert!(validate(&config).is_err());
    }
}
