//! HTML rendering for the studio pages. Plain string assembly, no template
//! engine: three pages and a handful of fragments.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::models::{EditedImage, ImageEditResult, UploadedImage};

/// Fixed presentation width for uploaded-image thumbnails.
const UPLOAD_THUMB_WIDTH: u32 = 100;

const PAGE_STYLE: &str = r#"
    body { font-family: sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
    h1 { font-size: 1.4rem; }
    textarea { width: 100%; min-height: 5rem; }
    button { margin-top: 0.75rem; padding: 0.5rem 1.5rem; }
    .thumbs { display: flex; flex-wrap: wrap; gap: 1rem; }
    figure { margin: 0; }
    figcaption { font-size: 0.8rem; color: #555; }
    .warning { color: #8a6d00; background: #fff4d1; padding: 0.75rem; }
    .error { color: #8a1f11; background: #fdd; padding: 0.75rem; }
"#;

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
         <style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        PAGE_STYLE,
        body
    )
}

fn upload_form() -> String {
    "<h1>Image-to-Image Generation with GPT-Image-1</h1>\n\
     <form action=\"/generate\" method=\"post\" enctype=\"multipart/form-data\">\n\
     <p><label>Upload one or more images<br>\
     <input type=\"file\" name=\"image\" accept=\"image/png,image/jpeg\" multiple></label></p>\n\
     <p><label>Describe the image you want to generate<br>\
     <textarea name=\"instruction\"></textarea></label></p>\n\
     <button type=\"submit\">Generate Image</button>\n\
     </form>"
        .to_string()
}

pub fn index_page() -> String {
    page("Image-to-Image Generation with GPT-Image-1", &upload_form())
}

pub fn warning_page(message: &str) -> String {
    let body = format!(
        "{}\n<p class=\"warning\">{}</p>",
        upload_form(),
        escape_html(message)
    );
    page("Image-to-Image Generation with GPT-Image-1", &body)
}

pub fn error_page(message: &str) -> String {
    let body = format!(
        "{}\n<p class=\"error\">{}</p>",
        upload_form(),
        escape_html(message)
    );
    page("Image-to-Image Generation with GPT-Image-1", &body)
}

pub fn result_page(
    uploads: &[UploadedImage],
    instruction: &str,
    result: &ImageEditResult,
) -> String {
    let mut body = upload_form();

    body.push_str("\n<h2>Uploaded images</h2>\n<div class=\"thumbs\">\n");
    for upload in uploads {
        body.push_str(&upload_figure(upload));
    }
    body.push_str("</div>\n");

    body.push_str(&format!(
        "<h2>Generated with {}</h2>\n<p><em>{}</em></p>\n<div class=\"thumbs\">\n",
        escape_html(&result.model),
        escape_html(instruction)
    ));
    for (i, image) in result.images.iter().enumerate() {
        body.push_str(&result_figure(image, i, result.images.len()));
    }
    body.push_str("</div>\n");

    page("Image-to-Image Generation with GPT-Image-1", &body)
}

fn upload_figure(upload: &UploadedImage) -> String {
    format!(
        "<figure><img src=\"{}\" width=\"{}\" alt=\"{}\">\
         <figcaption>{}</figcaption></figure>\n",
        data_url(&upload.content_type(), &upload.bytes),
        UPLOAD_THUMB_WIDTH,
        escape_html(&upload.filename),
        escape_html(&upload.filename)
    )
}

fn result_figure(image: &EditedImage, index: usize, total: usize) -> String {
    let caption = if total > 1 {
        format!("Generated Image {}", index + 1)
    } else {
        "Generated Image".to_string()
    };
    format!(
        "<figure><img src=\"{}\" width=\"{}\" alt=\"{}\">\
         <figcaption>{} ({}x{})</figcaption></figure>\n",
        data_url("image/png", &image.bytes),
        image.display_width,
        caption,
        caption,
        image.width,
        image.height
    )
}

fn data_url(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", content_type, STANDARD.encode(bytes))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<img src="x" onerror='y'> & more"#),
            "&lt;img src=&quot;x&quot; onerror=&#39;y&#39;&gt; &amp; more"
        );
    }

    #[test]
    fn test_data_url_prefix() {
        let url = data_url("image/png", &[1, 2, 3]);
        assert!(url.starts_with("data:image/png;base64,"));
        assert!(url.ends_with(&STANDARD.encode([1u8, 2, 3])));
    }

    #[test]
    fn test_warning_page_escapes_message() {
        let html = warning_page("<script>alert(1)</script>");
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_result_page_sizes_images_per_policy() {
        let result = ImageEditResult {
            model: "gpt-image-1".into(),
            images: vec![EditedImage {
                bytes: vec![1, 2, 3],
                width: 512,
                height: 512,
                display_width: 256,
            }],
        };
        let html = result_page(&[], "a prompt", &result);
        assert!(html.contains("width=\"256\""));
        assert!(html.contains("Generated Image"));
    }

    #[test]
    fn test_result_page_numbers_multiple_images() {
        let img = EditedImage {
            bytes: vec![1],
            width: 10,
            height: 10,
            display_width: 5,
        };
        let result = ImageEditResult {
            model: "gpt-image-1".into(),
            images: vec![img.clone(), img.clone(), img],
        };
        let html = result_page(&[], "a prompt", &result);
        assert!(html.contains("Generated Image 1"));
        assert!(html.contains("Generated Image 3"));
    }
}
