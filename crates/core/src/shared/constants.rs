/// SeetaFace frontal-face cascade data file.
pub const CASCADE_MODEL_FILENAME: &str = "seeta_fd_frontal_v1.0.bin";

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
