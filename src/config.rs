/// Application configuration
///
/// All values are compiled in. There is no config file and nothing is read
/// from the environment; `main` builds a `Config::default()` and hands it to
/// the application.

/// Public Picsum listing endpoint (first page, default page size)
pub const DEFAULT_ENDPOINT: &str = "https://picsum.photos/v2/list";

/// Longest edge of decoded tile images, in pixels
const DEFAULT_THUMBNAIL_SIZE: u32 = 512;

/// Upper bound on a single downloaded image body
const DEFAULT_MAX_IMAGE_BYTES: u64 = 32 * 1024 * 1024;

/// Fallback when the core count cannot be queried
const FALLBACK_IMAGE_LOADS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL of the photo listing
    pub endpoint: String,
    /// Title of the main window
    pub window_title: String,
    /// Longest edge of tile thumbnails
    pub thumbnail_size: u32,
    /// Downloads larger than this fail for that photo only
    pub max_image_bytes: u64,
    /// Image downloads/decodes allowed to run at once (at least 1)
    pub max_concurrent_image_loads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            window_title: "Professional Image Gallery".to_string(),
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
            max_concurrent_image_loads: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(FALLBACK_IMAGE_LOADS),
        }
    }
}
