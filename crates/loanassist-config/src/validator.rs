//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_embedding(config, &mut result);
        Self::validate_index(config, &mut result);
        Self::validate_fusion(config, &mut result);

        Ok(result)
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }
    }

    fn validate_embedding(config: &Config, result: &mut ValidationResult) {
        if config.embedding.dimension == 0 {
            result.add_error(ValidationError::new(
                "embedding.dimension",
                "dimension must be greater than 0",
            ));
        }

        if config.embedding.api_key.is_empty() {
            result.add_warning(ValidationWarning::new(
                "embedding.api_key",
                "API key is not set, may need to be set via environment variable",
            ));
        }

        if !config.embedding.base_url.starts_with("http://")
            && !config.embedding.base_url.starts_with("https://")
        {
            result.add_error(ValidationError::new(
                "embedding.base_url",
                "base_url must start with http:// or https://",
            ));
        }
    }

    fn validate_index(config: &Config, result: &mut ValidationResult) {
        if config.index.name.is_empty() {
            result.add_error(ValidationError::new("index.name", "Index name cannot be empty"));
        }

        if config.index.top_k == 0 {
            result.add_error(ValidationError::new(
                "index.top_k",
                "top_k must be greater than 0",
            ));
        }

        if config.index.api_key.is_empty() {
            result.add_warning(ValidationWarning::new(
                "index.api_key",
                "API key is not set, may need to be set via environment variable",
            ));
        }

        // An index provisioned for one model's dimensionality while a
        // different model embeds queries fails every request.
        if config.index.dimension != config.embedding.dimension {
            result.add_error(ValidationError::new(
                "index.dimension",
                format!(
                    "index dimension {} does not match embedding dimension {}",
                    config.index.dimension, config.embedding.dimension
                ),
            ));
        }

        if config.index.metric != "cosine" {
            result.add_warning(ValidationWarning::new(
                "index.metric",
                "scores are only comparable across arms for the cosine metric",
            ));
        }
    }

    fn validate_fusion(config: &Config, result: &mut ValidationResult) {
        if config.fusion.max_results == 0 {
            result.add_error(ValidationError::new(
                "fusion.max_results",
                "max_results must be greater than 0",
            ));
        }

        if config.fusion.arm_timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "fusion.arm_timeout_seconds",
                "arm_timeout_seconds must be greater than 0",
            ));
        }

        let valid_policies = ["fail", "degrade"];
        if !valid_policies.contains(&config.fusion.on_arm_failure.as_str()) {
            result.add_error(ValidationError::new(
                "fusion.on_arm_failure",
                format!(
                    "unknown policy '{}', expected one of: {}",
                    config.fusion.on_arm_failure,
                    valid_policies.join(", ")
                ),
            ));
        }

        if config.index.top_k < config.fusion.max_results {
            result.add_warning(ValidationWarning::new(
                "index.top_k",
                "top_k is below fusion.max_results; the vector arm cannot fill the result cap",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
