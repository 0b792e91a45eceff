//! ImgStudio - a small web studio for image-to-image generation.
//!
//! Upload one or more reference images, describe the change, and the studio
//! sends one multipart request to an Azure AI Foundry `gpt-image-1` endpoint
//! and renders whatever comes back.
//!
//! ```no_run
//! use imgstudio::{Config, FoundryClient, ImageEditRequest, UploadedImage};
//!
//! #[tokio::main]
//! async fn main() -> imgstudio::Result<()> {
//!     let client = FoundryClient::new(Config::from_env())?;
//!     let request = ImageEditRequest::new("make it a watercolor")
//!         .with_image(UploadedImage::new("cat.png", "png", std::fs::read("cat.png").unwrap()));
//!     let result = client.images().edit(request).await?;
//!     println!("{} image(s) generated", result.images.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod foundry;
pub mod logger;
pub mod models;
pub mod server;

pub use config::{Config, FoundryConfig, OutputConfig, ThumbnailPolicy};
pub use error::{Result, StudioError};
pub use foundry::{FoundryClient, ImageEditClient};
pub use models::{
    is_submittable, EditedImage, ImageEditRequest, ImageEditResult, UploadedImage,
};
