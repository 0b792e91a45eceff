pub mod pages;

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    response::Html,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{
    foundry::FoundryClient,
    models::{is_submittable, ImageEditRequest, UploadedImage},
};

/// Multi-image uploads blow past axum's 2MB default.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<FoundryClient>,
}

pub fn router(client: Arc<FoundryClient>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/generate", post(generate_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(AppState { client })
}

async fn index_handler() -> Html<String> {
    Html(pages::index_page())
}

/// POST /generate - one submission cycle.
///
/// Pipeline:
/// 1. Collect uploaded images and the instruction from the multipart form
/// 2. Reject unsubmittable input before any upstream call
/// 3. Run the edit request against the Foundry endpoint
/// 4. Render results, or the error verbatim; nothing is retried
async fn generate_handler(State(state): State<AppState>, mut multipart: Multipart) -> Html<String> {
    let mut images: Vec<UploadedImage> = Vec::new();
    let mut instruction = String::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Html(pages::error_page(&format!("Upload failed: {}", e))),
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let filename = field.file_name().unwrap_or("upload.png").to_string();
                let content_type = field.content_type().map(|ct| ct.to_string());
                match field.bytes().await {
                    // Browsers submit an empty part when no file was picked
                    Ok(bytes) if bytes.is_empty() => {}
                    Ok(bytes) => images.push(UploadedImage::from_upload(
                        filename,
                        content_type.as_deref(),
                        bytes.to_vec(),
                    )),
                    Err(e) => return Html(pages::error_page(&format!("Upload failed: {}", e))),
                }
            }
            "instruction" => {
                instruction = field.text().await.unwrap_or_default();
            }
            _ => {}
        }
    }

    if !is_submittable(&images, &instruction) {
        log::warn!("Submission rejected: missing image or blank instruction");
        return Html(pages::warning_page(
            "Please upload at least one image and provide an instruction.",
        ));
    }

    log::debug!(
        "Submission received: {} image(s), instruction length {}",
        images.len(),
        instruction.len()
    );

    let request = ImageEditRequest::new(instruction.clone()).with_images(images.clone());

    match state.client.images().edit(request).await {
        Ok(result) => Html(pages::result_page(&images, &instruction, &result)),
        Err(e) => {
            log::error!("Generation failed: {}", e);
            Html(pages::error_page(&format!("Error generating image: {}", e)))
        }
    }
}
