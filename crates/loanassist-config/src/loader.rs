//! Configuration loader.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path)?;
        let expanded = Self::expand_env_vars(&content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.loanassist`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_expand_path() {
        let expanded = ConfigLoader::expand_path("~/.loanassist");
        assert!(!expanded.starts_with('~'));
    }

    #[test]
    fn test_load_basic_config() {
        let content = r#"
            [server]
            host = "0.0.0.0"
            port = 3000
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_load_full_config() {
        let content = r#"
            [server]
            host = "localhost"
            port = 9000

            [embedding]
            model = "BAAI/bge-small-en-v1.5"
            dimension = 384

            [index]
            name = "loan-ai-index"
            dimension = 384

            [fusion]
            max_results = 5
            on_arm_failure = "degrade"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.embedding.model, "BAAI/bge-small-en-v1.5");
        assert_eq!(config.fusion.max_results, 5);
        assert_eq!(config.fusion.on_arm_failure, "degrade");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]").unwrap();
        writeln!(file, "port = 5000").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_str("invalid = [unclosed");
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: This test runs in isolation and sets a unique test-only env var
        unsafe {
            std::env::set_var("LOANASSIST_TEST_KEY", "pc-test-key");
        }
        let content = r#"
            [index]
            api_key = "${LOANASSIST_TEST_KEY}"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.index.api_key, "pc-test-key");
    }

    #[test]
    fn test_expand_env_vars_missing() {
        let content = r#"
            [index]
            api_key = "${LOANASSIST_UNSET_VAR}"
        "#;
        let result = ConfigLoader::load_str(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }
}
