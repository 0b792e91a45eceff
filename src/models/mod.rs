pub mod image;

pub use image::{
    is_submittable, EditData, EditResponse, EditedImage, ImageEditRequest, ImageEditResult,
    UploadedImage,
};
