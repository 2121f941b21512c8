use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::locale::Language;
use crate::report::DEFAULT_IMAGE;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct Config {
    pub version: u32,
    pub languages: Vec<String>,
    pub image: String,
    pub output_dir: PathBuf,
    /// Commit author e-mail to forge account.
    pub authors: BTreeMap<String, AuthorConfig>,
    pub repositories: Vec<RepositoryConfig>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct AuthorConfig {
    pub login: String,
    pub profile_url: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct RepositoryConfig {
    pub full_name: String,
    pub web_url: String,
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            languages: Language::ALL.iter().map(|l| l.code().to_string()).collect(),
            image: DEFAULT_IMAGE.to_string(),
            output_dir: PathBuf::from("."),
            authors: BTreeMap::new(),
            repositories: Vec::new(),
        }
    }
}

pub fn get_default_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "repodigest")
        .context("Failed to determine project directories")?;
    Ok(proj_dirs.config_dir().join("repodigest.toml"))
}

impl Config {
    /// Reads the config file; a missing file yields the defaults.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => get_default_config_path()?,
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    // CLI args override config file
    pub fn with_overrides(mut self, output_dir: Option<PathBuf>, languages: &[String]) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        if !languages.is_empty() {
            self.languages = languages.to_vec();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.languages, vec!["en", "sc", "it"]);
        assert_eq!(config.image, DEFAULT_IMAGE);
        assert!(config.repositories.is_empty());
    }

    #[test]
    fn test_config_load_missing_returns_default_without_writing() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("missing.toml");

        let config = Config::load(Some(&config_path))?;

        assert_eq!(config, Config::default());
        assert!(!config_path.exists());
        Ok(())
    }

    #[test]
    fn test_config_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("partial.toml");
        fs::write(
            &config_path,
            r#"
languages = ["sc"]

[authors."jane@example.org"]
login = "jane"
profile_url = "https://github.com/jane"

[[repositories]]
full_name = "org/site"
web_url = "https://github.com/org/site"
path = "/src/site"
"#,
        )?;

        let config = Config::load(Some(&config_path))?;
        assert_eq!(config.languages, vec!["sc"]);
        assert_eq!(config.image, DEFAULT_IMAGE);
        assert_eq!(config.authors["jane@example.org"].login, "jane");
        assert_eq!(config.repositories[0].path, PathBuf::from("/src/site"));
        Ok(())
    }

    #[test]
    fn test_cli_override() {
        let config = Config::default()
            .with_overrides(Some(PathBuf::from("/site")), &["it".to_string()]);
        assert_eq!(config.output_dir, PathBuf::from("/site"));
        assert_eq!(config.languages, vec!["it"]);

        let untouched = Config::default().with_overrides(None, &[]);
        assert_eq!(untouched, Config::default());
    }

    #[test]
    fn test_get_default_config_path() -> Result<()> {
        let path = get_default_config_path()?;
        assert!(path.ends_with("repodigest.toml"));
        Ok(())
    }
}
