mod upload_image;

pub use upload_image::{raw_image, upload_image_handler, UploadQuery};
