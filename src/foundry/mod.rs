pub mod edit_client;

use crate::{
    config::Config,
    error::{Result, StudioError},
};

pub use edit_client::{ImageEditClient, DEFAULT_MODEL};

/// Client for the Azure AI Foundry image endpoint. Resolves the endpoint
/// and credential once at startup; missing values are fatal here, before
/// the server ever accepts a submission.
#[derive(Debug, Clone)]
pub struct FoundryClient {
    edit_client: ImageEditClient,
}

impl FoundryClient {
    pub fn new(config: Config) -> Result<Self> {
        let endpoint = config.foundry.endpoint.clone().ok_or_else(|| {
            StudioError::ConfigError("AZURE_ENDPOINT is not set, check your .env file".into())
        })?;
        let api_key = config.foundry.api_key.clone().ok_or_else(|| {
            StudioError::ConfigError("API_KEY is not set, check your .env file".into())
        })?;
        let model_id = config
            .foundry
            .model_id
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            edit_client: ImageEditClient::new(endpoint, api_key, model_id, config.output),
        })
    }

    pub fn images(&self) -> &ImageEditClient {
        &self.edit_client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FoundryConfig;

    #[test]
    fn test_missing_endpoint_is_config_error() {
        let config = Config::new().with_foundry(FoundryConfig::new().with_credentials("key"));
        let err = FoundryClient::new(config).unwrap_err();
        assert!(matches!(err, StudioError::ConfigError(_)));
        assert!(err.to_string().contains("AZURE_ENDPOINT"));
    }

    #[test]
    fn test_missing_credential_is_config_error() {
        let config = Config::new()
            .with_foundry(FoundryConfig::new().with_endpoint("https://example.test/edits"));
        let err = FoundryClient::new(config).unwrap_err();
        assert!(matches!(err, StudioError::ConfigError(_)));
        assert!(err.to_string().contains("API_KEY"));
    }

    #[test]
    fn test_complete_config_builds_client() {
        let config = Config::new().with_foundry(
            FoundryConfig::new()
                .with_endpoint("https://example.test/edits")
                .with_credentials("key"),
        );
        assert!(FoundryClient::new(config).is_ok());
    }
}
