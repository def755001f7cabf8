//! Environment variable names and defaults

pub const BOT_TOKEN: &str = "BOT_TOKEN";
pub const CLOUDINARY_API_KEY: &str = "CLOUDINARY_API_KEY";
pub const CLOUDINARY_API_SECRET: &str = "CLOUDINARY_API_SECRET";
pub const CLOUDINARY_CLOUD_NAME: &str = "CLOUDINARY_CLOUD_NAME";

/// Credentials the pipeline refuses to run without, in reporting order.
pub const REQUIRED_CREDENTIALS: [&str; 4] = [
    BOT_TOKEN,
    CLOUDINARY_API_KEY,
    CLOUDINARY_API_SECRET,
    CLOUDINARY_CLOUD_NAME,
];

pub const BRIDGE_HTTP_TIMEOUT_SECS: &str = "BRIDGE_HTTP_TIMEOUT_SECS";
pub const CLOUDINARY_UPLOAD_PREFIX: &str = "CLOUDINARY_UPLOAD_PREFIX";
pub const CLOUDINARY_UPLOAD_FOLDER: &str = "CLOUDINARY_UPLOAD_FOLDER";

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_UPLOAD_PREFIX: &str = "https://api.cloudinary.com";
