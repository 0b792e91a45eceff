use serde::Deserialize;

use crate::error::{Result, StudioError};

/// One uploaded reference image. Lives for a single submission cycle.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub filename: String,
    /// Media subtype, e.g. "png" or "jpeg".
    pub subtype: String,
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    pub fn new(filename: impl Into<String>, subtype: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            subtype: subtype.into(),
            bytes,
        }
    }

    /// Builds an upload from what the browser sent, deriving the subtype
    /// from the declared content type, then the filename extension, then
    /// falling back to "png".
    pub fn from_upload(
        filename: impl Into<String>,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Self {
        let filename = filename.into();
        let subtype = content_type
            .and_then(|ct| ct.rsplit('/').next())
            .map(|s| s.to_string())
            .or_else(|| {
                filename
                    .rsplit('.')
                    .next()
                    .filter(|ext| *ext != filename)
                    .map(|ext| match ext.to_lowercase().as_str() {
                        "jpg" => "jpeg".to_string(),
                        other => other.to_string(),
                    })
            })
            .unwrap_or_else(|| "png".to_string());

        Self::new(filename, subtype, bytes)
    }

    pub fn content_type(&self) -> String {
        format!("image/{}", self.subtype)
    }
}

/// True iff the submission has at least one image and a non-blank
/// instruction. Nothing goes over the wire when this is false.
pub fn is_submittable(images: &[UploadedImage], instruction: &str) -> bool {
    !images.is_empty() && !instruction.trim().is_empty()
}

/// One image-to-image generation request. Built fresh per submission and
/// never persisted.
#[derive(Debug, Clone)]
pub struct ImageEditRequest {
    pub prompt: String,
    pub images: Vec<UploadedImage>,
    pub model_id: Option<String>,
    pub num_images: Option<u32>,
}

impl ImageEditRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            images: Vec::new(),
            model_id: None,
            num_images: None,
        }
    }

    pub fn with_image(mut self, image: UploadedImage) -> Self {
        self.images.push(image);
        self
    }

    pub fn with_images(mut self, images: Vec<UploadedImage>) -> Self {
        self.images = images;
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_num_images(mut self, n: u32) -> Self {
        self.num_images = Some(n);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.images.is_empty() {
            return Err(StudioError::ValidationError(
                "Please upload at least one image.".into(),
            ));
        }
        if self.prompt.trim().is_empty() {
            return Err(StudioError::ValidationError(
                "Please provide an instruction.".into(),
            ));
        }
        Ok(())
    }
}

/// One decoded result image with its measured dimensions and the width it
/// should be displayed at.
#[derive(Debug, Clone)]
pub struct EditedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub display_width: u32,
}

#[derive(Debug, Clone)]
pub struct ImageEditResult {
    pub images: Vec<EditedImage>,
    pub model: String,
}

/// Wire shape of a successful upstream response:
/// `{ "data": [ { "b64_json": "..." }, ... ] }`.
#[derive(Debug, Deserialize)]
pub struct EditResponse {
    pub data: Vec<EditData>,
}

#[derive(Debug, Deserialize)]
pub struct EditData {
    pub b64_json: String,
}
