//! Simple CLI configuration loader for the refibe site
//!
//! Implements single-source priority loading:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./refibe.json or ./.refibe/config.json
//! 3. Git repository root: <repo_root>/.refibe/config.json
//! 4. XDG config: $XDG_CONFIG_HOME/refibe/config.json or ~/.config/refibe/config.json
//! 5. Environment variables (REFIBE_CONTACT_EMAIL, REFIBE_DEV_CHECKS)
//!
//! Unset values fall back to the built-in defaults, so running without any
//! configuration at all is fine.

use anyhow::{anyhow, Context, Result};
use refibe_core::SiteConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Raw configuration file format (simple single-file schema)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    /// Address behind the contact CTAs
    #[serde(default)]
    pub contact_email: Option<String>,
    /// Run the structural smoke checks on route changes
    #[serde(default)]
    pub dev_checks: Option<bool>,
}

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<SiteConfig> {
        // Step 1: Find and load the base configuration
        let raw = if let Some(override_path) = &self.config_override {
            // Use explicit config override
            self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            // Search in priority order
            self.search_and_load().await?
        };

        // Step 2: Resolve to the final config and validate
        let config = resolve(raw);
        config
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        Ok(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<RawConfig> {
        // 1. Current working directory
        if let Some(config) = self.try_load_cwd().await? {
            return Ok(config);
        }

        // 2. Git repository root
        if let Some(config) = self.try_load_git_root().await? {
            return Ok(config);
        }

        // 3. XDG config directory
        if let Some(config) = self.try_load_xdg().await? {
            return Ok(config);
        }

        // 4. Environment variables only
        Ok(load_env())
    }

    /// Try loading from current working directory
    async fn try_load_cwd(&self) -> Result<Option<RawConfig>> {
        let cwd = std::env::current_dir()?;

        // Try ./refibe.json first
        let refibe_json = cwd.join("refibe.json");
        if refibe_json.exists() {
            return Ok(Some(self.load_file(&refibe_json).await?));
        }

        // Try ./.refibe/config.json
        let refibe_dir_config = cwd.join(".refibe").join("config.json");
        if refibe_dir_config.exists() {
            return Ok(Some(self.load_file(&refibe_dir_config).await?));
        }

        Ok(None)
    }

    /// Try loading from git repository root
    async fn try_load_git_root(&self) -> Result<Option<RawConfig>> {
        if let Some(git_root) = self.find_git_root()? {
            let config_path = git_root.join(".refibe").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Try loading from XDG config directory
    async fn try_load_xdg(&self) -> Result<Option<RawConfig>> {
        if let Some(config_dir) = self.get_xdg_config_dir() {
            let config_path = config_dir.join("refibe").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<RawConfig> {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let path = PathBuf::from(expanded);

        if path.is_file() {
            self.load_file(&path).await
        } else if path.is_dir() {
            // Try config.json in the directory
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Find git repository root
    fn find_git_root(&self) -> Result<Option<PathBuf>> {
        let mut current = std::env::current_dir()?;

        loop {
            if current.join(".git").exists() {
                return Ok(Some(current));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    /// Get XDG config directory
    fn get_xdg_config_dir(&self) -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            Some(PathBuf::from(xdg_config))
        } else {
            dirs::config_dir()
        }
    }
}

/// Read the environment-variable configuration
fn load_env() -> RawConfig {
    RawConfig {
        contact_email: std::env::var("REFIBE_CONTACT_EMAIL").ok(),
        dev_checks: std::env::var("REFIBE_DEV_CHECKS")
            .ok()
            .map(|value| matches!(value.as_str(), "1" | "true" | "yes")),
    }
}

/// Merge a raw configuration over the built-in defaults
fn resolve(raw: RawConfig) -> SiteConfig {
    let mut config = SiteConfig::default();
    if let Some(contact_email) = raw.contact_email {
        config.contact_email = contact_email;
    }
    if let Some(dev_checks) = raw.dev_checks {
        config.dev_checks = dev_checks;
    }
    config
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refibe_core::config::DEFAULT_CONTACT_EMAIL;

    #[test]
    fn empty_raw_resolves_to_defaults() {
        let config = resolve(RawConfig::default());
        assert_eq!(config.contact_email, DEFAULT_CONTACT_EMAIL);
        assert!(config.dev_checks);
    }

    #[test]
    fn raw_values_override_defaults() {
        let config = resolve(RawConfig {
            contact_email: Some("hello@refibe.in".to_string()),
            dev_checks: Some(false),
        });
        assert_eq!(config.contact_email, "hello@refibe.in");
        assert!(!config.dev_checks);
    }

    #[tokio::test]
    async fn loads_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("refibe.json");
        tokio::fs::write(&path, r#"{ "contact_email": "ops@refibe.in" }"#)
            .await
            .unwrap();

        let loader = CliConfigLoader::new().with_config_override(path);
        let config = loader.load().await.unwrap();
        assert_eq!(config.contact_email, "ops@refibe.in");
        // Unset fields keep their defaults
        assert!(config.dev_checks);
    }

    #[tokio::test]
    async fn directory_override_reads_config_json() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("config.json"), r#"{ "dev_checks": false }"#)
            .await
            .unwrap();

        let loader = CliConfigLoader::new().with_config_override(dir.path().to_path_buf());
        let config = loader.load().await.unwrap();
        assert!(!config.dev_checks);
    }

    #[tokio::test]
    async fn invalid_contact_address_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("refibe.json");
        tokio::fs::write(&path, r#"{ "contact_email": "not-an-address" }"#)
            .await
            .unwrap();

        let loader = CliConfigLoader::new().with_config_override(path);
        assert!(loader.load().await.is_err());
    }

    #[tokio::test]
    async fn missing_override_path_is_an_error() {
        let loader =
            CliConfigLoader::new().with_config_override(PathBuf::from("/definitely/not/here.json"));
        assert!(loader.load().await.is_err());
    }
}
