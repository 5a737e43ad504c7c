/// Remote photo source
///
/// This module handles:
/// - Fetching the photo list from the Picsum API
/// - Downloading each photo's full-size image
/// - Decoding downloads into tile thumbnails and full-size handles

pub mod client;
pub mod thumbnail;

pub use client::{load_image, load_photo_list, PicsumClient};
pub use thumbnail::LoadedImage;
