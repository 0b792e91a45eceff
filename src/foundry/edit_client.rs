use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::multipart::{Form, Part};

use crate::{
    config::{OutputConfig, ThumbnailPolicy},
    error::{Result, StudioError},
    logger::Timer,
    models::{EditResponse, EditedImage, ImageEditRequest, ImageEditResult},
};

pub const DEFAULT_MODEL: &str = "gpt-image-1";

/// Performs the one multipart POST per submission: every uploaded image as a
/// repeated `image[]` part plus `model`, `prompt` and an optional `n`, sent
/// with the static `api-key` header. No retry, no timeout override.
#[derive(Debug, Clone)]
pub struct ImageEditClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model_id: String,
    output: OutputConfig,
}

impl ImageEditClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model_id: impl Into<String>,
        output: OutputConfig,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model_id: model_id.into(),
            output,
        }
    }

    pub async fn edit(&self, request: ImageEditRequest) -> Result<ImageEditResult> {
        request.validate()?;

        let model_id = request
            .model_id
            .as_deref()
            .unwrap_or(&self.model_id)
            .to_string();
        let num_images = request.num_images.or(self.output.num_images);

        let mut form = Form::new()
            .text("model", model_id.clone())
            .text("prompt", request.prompt.clone());

        for image in &request.images {
            let part = Part::bytes(image.bytes.clone())
                .file_name(image.filename.clone())
                .mime_str(&image.content_type())
                .map_err(|e| {
                    StudioError::ValidationError(format!(
                        "Unsupported content type for {}: {}",
                        image.filename, e
                    ))
                })?;
            form = form.part("image[]", part);
        }

        if let Some(n) = num_images {
            form = form.text("n", n.to_string());
        }

        log::info!(
            "Generating with model {} from {} reference image(s)",
            model_id,
            request.images.len()
        );
        let timer = Timer::new("image edit");

        let response = self
            .http
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() != 200 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Upstream returned {}: {}", status, body);
            return Err(StudioError::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        timer.stop();

        let parsed: EditResponse = serde_json::from_str(&body)
            .map_err(|e| StudioError::MalformedResponse(e.to_string()))?;
        let images = map_response(parsed, &self.output.thumbnail)?;

        log::info!("Decoded {} generated image(s)", images.len());

        Ok(ImageEditResult {
            images,
            model: model_id,
        })
    }
}

/// Decodes every `b64_json` entry, preserving response order.
fn map_response(response: EditResponse, thumbnail: &ThumbnailPolicy) -> Result<Vec<EditedImage>> {
    response
        .data
        .into_iter()
        .map(|entry| decode_image(&entry.b64_json, thumbnail))
        .collect()
}

fn decode_image(b64: &str, thumbnail: &ThumbnailPolicy) -> Result<EditedImage> {
    let bytes = STANDARD
        .decode(b64)
        .map_err(|e| StudioError::MalformedResponse(format!("invalid base64 payload: {}", e)))?;
    let (width, height) = read_dimensions(&bytes)?;

    Ok(EditedImage {
        display_width: thumbnail.display_width(width),
        bytes,
        width,
        height,
    })
}

fn read_dimensions(bytes: &[u8]) -> Result<(u32, u32)> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| StudioError::MalformedResponse(format!("unreadable image data: {}", e)))?;
    Ok((img.width(), img.height()))
}
