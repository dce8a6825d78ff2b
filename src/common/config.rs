//! Chain configuration

use serde::Deserialize;
use std::path::Path;

use super::{Error, Result};

/// Settings shared by every case in a chain
///
/// In serverless mode, function names are composed as
/// `{service}-{stage}-{function}` the way serverless deployments name
/// their functions; otherwise names are used verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    /// Service (repository) name prefixed onto function names
    #[serde(default)]
    pub service: String,

    /// Deployment stage
    #[serde(default = "default_stage")]
    pub stage: String,

    /// Compose serverless function names
    #[serde(default = "default_serverless")]
    pub serverless: bool,

    /// Suppress per-case console output
    #[serde(default)]
    pub quiet: bool,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            service: String::new(),
            stage: default_stage(),
            serverless: default_serverless(),
            quiet: false,
        }
    }
}

fn default_stage() -> String {
    "dev".to_string()
}

fn default_serverless() -> bool {
    true
}

impl ChainConfig {
    /// Create a configuration for a service with default settings
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            ..Self::default()
        }
    }

    /// Set the deployment stage
    pub fn stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = stage.into();
        self
    }

    /// Enable or disable serverless name composition
    pub fn serverless(mut self, serverless: bool) -> Self {
        self.serverless = serverless;
        self
    }

    /// Enable or disable console output suppression
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Fully-qualified name of a function in the configured deployment
    pub(crate) fn qualified_name(&self, function_name: &str) -> String {
        if self.serverless {
            format!("{}-{}-{}", self.service, self.stage, function_name)
        } else {
            function_name.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name_serverless() {
        let config = ChainConfig::new("orders").stage("staging");
        assert_eq!(config.qualified_name("create"), "orders-staging-create");
    }

    #[test]
    fn test_qualified_name_verbatim() {
        let config = ChainConfig::new("orders").serverless(false);
        assert_eq!(config.qualified_name("create"), "create");
    }

    #[test]
    fn test_defaults() {
        let config = ChainConfig::default();
        assert_eq!(config.stage, "dev");
        assert!(config.serverless);
        assert!(!config.quiet);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ChainConfig = toml::from_str("service = \"orders\"").unwrap();
        assert_eq!(config.service, "orders");
        assert_eq!(config.stage, "dev");
        assert!(config.serverless);
    }
}
