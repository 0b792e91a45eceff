use std::env;

/// Connection settings for the Azure AI Foundry image endpoint.
#[derive(Debug, Clone)]
pub struct FoundryConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub model_id: Option<String>,
}

impl Default for FoundryConfig {
    fn default() -> Self {
        FoundryConfig {
            endpoint: None,
            api_key: None,
            model_id: None,
        }
    }
}

impl FoundryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let endpoint = env::var("AZURE_ENDPOINT").ok();
        let api_key = env::var("API_KEY").ok();
        let model_id = env::var("IMAGE_MODEL").ok();

        FoundryConfig {
            endpoint,
            api_key,
            model_id,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_credentials(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }
}

/// How wide a generated image is shown on the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailPolicy {
    /// Always render at this pixel width.
    FixedWidth(u32),
    /// Render at half the decoded image's width.
    HalfWidth,
}

impl Default for ThumbnailPolicy {
    fn default() -> Self {
        ThumbnailPolicy::HalfWidth
    }
}

impl ThumbnailPolicy {
    pub fn display_width(&self, original_width: u32) -> u32 {
        match self {
            ThumbnailPolicy::FixedWidth(px) => *px,
            ThumbnailPolicy::HalfWidth => (original_width / 2).max(1),
        }
    }
}

/// Output shaping: how many images to ask for and how to size them on screen.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Value for the form's `n` field. `None` omits the field entirely and
    /// the upstream returns a single image.
    pub num_images: Option<u32>,
    pub thumbnail: ThumbnailPolicy,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            num_images: None,
            thumbnail: ThumbnailPolicy::default(),
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let num_images = env::var("IMAGE_COUNT").ok().and_then(|s| s.parse().ok());
        let thumbnail = env::var("THUMBNAIL_WIDTH")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(ThumbnailPolicy::FixedWidth)
            .unwrap_or_default();

        OutputConfig {
            num_images,
            thumbnail,
        }
    }

    pub fn with_num_images(mut self, n: u32) -> Self {
        self.num_images = Some(n);
        self
    }

    pub fn with_thumbnail(mut self, policy: ThumbnailPolicy) -> Self {
        self.thumbnail = policy;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: Option<u16>,
    pub foundry: FoundryConfig,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: None,
            foundry: FoundryConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());

        Config {
            port,
            foundry: FoundryConfig::from_env(),
            output: OutputConfig::from_env(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_foundry(mut self, config: FoundryConfig) -> Self {
        self.foundry = config;
        self
    }

    pub fn with_output(mut self, config: OutputConfig) -> Self {
        self.output = config;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_half_width() {
        assert_eq!(ThumbnailPolicy::HalfWidth.display_width(1024), 512);
        assert_eq!(ThumbnailPolicy::HalfWidth.display_width(101), 50);
        // never collapses to zero
        assert_eq!(ThumbnailPolicy::HalfWidth.display_width(1), 1);
    }

    #[test]
    fn test_thumbnail_fixed_width_ignores_original() {
        let policy = ThumbnailPolicy::FixedWidth(100);
        assert_eq!(policy.display_width(1024), 100);
        assert_eq!(policy.display_width(64), 100);
    }

    #[test]
    fn test_builder_chain() {
        let config = Config::new()
            .with_port(9090)
            .with_foundry(
                FoundryConfig::new()
                    .with_endpoint("https://example.test/images/edits")
                    .with_credentials("secret")
                    .with_model("gpt-image-1"),
            )
            .with_output(
                OutputConfig::new()
                    .with_num_images(3)
                    .with_thumbnail(ThumbnailPolicy::FixedWidth(100)),
            );

        assert_eq!(config.port, Some(9090));
        assert_eq!(
            config.foundry.endpoint.as_deref(),
            Some("https://example.test/images/edits")
        );
        assert_eq!(config.output.num_images, Some(3));
        assert_eq!(config.output.thumbnail, ThumbnailPolicy::FixedWidth(100));
    }
}
