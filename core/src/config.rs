//! Resolved runtime configuration
//!
//! The small set of operational knobs the site runs with. File discovery
//! and environment merging live in the CLI loader; this is the resolved
//! result every surface consumes.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Address used when no configuration overrides it.
pub const DEFAULT_CONTACT_EMAIL: &str = "contact@refibe.in";

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Address behind every contact CTA.
    pub contact_email: String,
    /// Run the structural smoke checks on each route change.
    pub dev_checks: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            dev_checks: true,
        }
    }
}

impl SiteConfig {
    /// Validate the resolved values.
    pub fn validate(&self) -> Result<()> {
        if self.contact_email.is_empty() || !self.contact_email.contains('@') {
            return Err(ConfigError::InvalidValue {
                field: "contact_email".to_string(),
                value: self.contact_email.clone(),
            }
            .into());
        }
        Ok(())
    }

    /// `mailto:` form of the contact address.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.contact_email, DEFAULT_CONTACT_EMAIL);
        assert!(config.dev_checks);
    }

    #[test]
    fn bare_word_is_not_an_address() {
        let config = SiteConfig {
            contact_email: "nobody".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn mailto_prefixes_the_address() {
        let config = SiteConfig::default();
        assert_eq!(config.mailto(), "mailto:contact@refibe.in");
    }
}
