use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_yaml::Deserializer;

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// The news page scraped by `clippings news`.
    pub news_url: String,

    /// Applied to every outbound request so a dead host cannot hang the run.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Reddit API credentials, only required by `clippings reddit`.
    pub reddit_client_id: Option<String>,
    pub reddit_client_secret: Option<String>,
    pub reddit_user_agent: Option<String>,
}

/// The credential triple the reddit pipeline needs, with all three fields
/// guaranteed present.
#[derive(Debug, Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

pub struct EnsureOutcome {
    pub path: PathBuf,
    pub created: bool,
}

impl Config {
    pub fn ensure_user_config() -> Result<EnsureOutcome> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("clippings");

        if let Some(path) = xdg_dirs.find_config_file("config.yaml") {
            return Ok(EnsureOutcome {
                path,
                created: false,
            });
        } else {
            let config_path = xdg_dirs
                .place_config_file("config.yaml")
                .context("cannot create configuration directory")?;
            let mut config_file = File::create(&config_path)?;

            write!(
                &mut config_file,
                r#"# clippings config (YAML)

# The page scraped by `clippings news`.
news_url: "https://example.com/news"

# Per-request timeout in seconds (optional, default 30).
request_timeout_secs: 30

# Reddit API credentials, required only by `clippings reddit`.
# Create an app at https://www.reddit.com/prefs/apps to obtain these.
reddit_client_id: "<your app client id>"
reddit_client_secret: "<your app client secret>"
reddit_user_agent: "<a unique identifier for your app>"

"#
            )?;

            return Ok(EnsureOutcome {
                path: config_path,
                created: true,
            });
        }
    }

    pub fn get_user_config() -> Result<Config> {
        let xdg_dirs =
            xdg::BaseDirectories::with_prefix("clippings").find_config_file("config.yaml");

        if let Some(existing_config) = &xdg_dirs {
            let raw = fs::read_to_string(existing_config).with_context(|| {
                format!("Failed to read {}", existing_config.display())
            })?;
            let deserialized = Deserializer::from_str(&raw);
            let final_config: Config =
                serde_path_to_error::deserialize(deserialized).map_err(|e| {
                    anyhow!(
                        "Invalid YAML in {} at `{}`: {}",
                        existing_config.display(),
                        e.path(),
                        e.inner()
                    )
                })?;
            Ok(final_config)
        } else {
            Err(anyhow!(
                "Could not read configuration file in config::get_user_config"
            ))
        }
    }

    /// Promotes the optional credential fields to a full triple, failing
    /// with a message naming whichever key is missing.
    pub fn reddit_credentials(&self) -> Result<RedditCredentials> {
        let client_id = self
            .reddit_client_id
            .clone()
            .ok_or_else(|| anyhow!("reddit_client_id is missing from the config file"))?;
        let client_secret = self
            .reddit_client_secret
            .clone()
            .ok_or_else(|| anyhow!("reddit_client_secret is missing from the config file"))?;
        let user_agent = self
            .reddit_user_agent
            .clone()
            .ok_or_else(|| anyhow!("reddit_user_agent is missing from the config file"))?;

        Ok(RedditCredentials {
            client_id,
            client_secret,
            user_agent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config(with_reddit: bool) -> Config {
        Config {
            news_url: "https://example.com/news".to_string(),
            request_timeout_secs: 30,
            reddit_client_id: with_reddit.then(|| "id".to_string()),
            reddit_client_secret: with_reddit.then(|| "secret".to_string()),
            reddit_user_agent: with_reddit.then(|| "agent".to_string()),
        }
    }

    #[test]
    fn test_reddit_credentials_present() {
        let creds = sample_config(true).reddit_credentials().unwrap();
        assert_eq!(creds.client_id, "id");
        assert_eq!(creds.client_secret, "secret");
        assert_eq!(creds.user_agent, "agent");
    }

    #[test]
    fn test_reddit_credentials_missing() {
        let err = sample_config(false).reddit_credentials().unwrap_err();
        assert!(err.to_string().contains("reddit_client_id"));
    }

    #[test]
    fn test_timeout_defaults_when_omitted() {
        let raw = r#"
news_url: "https://example.com/news"
"#;
        let cfg: Config = serde_yaml::from_str(raw).unwrap();
        assert_eq!(cfg.request_timeout_secs, 30);
        assert!(cfg.reddit_client_id.is_none());
    }
}
