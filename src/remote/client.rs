/// Picsum HTTP client
///
/// Requests are made with ureq's blocking API and moved onto tokio's
/// blocking pool, so the async wrappers can be handed straight to
/// `iced::Task::perform` without stalling the UI thread.
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task;
use ureq::Agent;

use super::thumbnail::{self, LoadedImage};
use crate::config::Config;
use crate::error::Result;
use crate::state::data::PhotoRecord;

/// Handle to the photo API; cheap to clone into background tasks
#[derive(Clone)]
pub struct PicsumClient {
    agent: Agent,
    endpoint: String,
    thumbnail_size: u32,
    max_image_bytes: u64,
    /// Shared across clones; bounds concurrent image downloads and decodes
    image_permits: Arc<Semaphore>,
}

impl PicsumClient {
    pub fn new(config: &Config) -> Self {
        Self {
            agent: Agent::new_with_defaults(),
            endpoint: config.endpoint.clone(),
            thumbnail_size: config.thumbnail_size,
            max_image_bytes: config.max_image_bytes,
            image_permits: Arc::new(Semaphore::new(config.max_concurrent_image_loads.max(1))),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET the listing endpoint and decode it.
    /// No query parameters or extra headers are sent.
    pub fn fetch_photo_list(&self) -> Result<Vec<PhotoRecord>> {
        let mut response = self.agent.get(&self.endpoint).call()?;
        let body = response.body_mut().read_to_string()?;
        parse_photo_list(&body)
    }

    /// Download one image body, bounded by `max_image_bytes`
    pub fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        let mut response = self.agent.get(url).call()?;
        let bytes = response
            .body_mut()
            .with_config()
            .limit(self.max_image_bytes)
            .read_to_vec()?;
        Ok(bytes)
    }
}

impl std::fmt::Debug for PicsumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PicsumClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Decode the listing payload (a JSON array of photo objects)
pub fn parse_photo_list(body: &str) -> Result<Vec<PhotoRecord>> {
    Ok(serde_json::from_str(body)?)
}

/// Fetch the photo list without blocking the caller
pub async fn load_photo_list(client: PicsumClient) -> Result<Vec<PhotoRecord>> {
    task::spawn_blocking(move || client.fetch_photo_list()).await?
}

/// Download an image and decode it into tile and full-size handles.
/// At most `max_concurrent_image_loads` of these run at once per client.
pub async fn load_image(client: PicsumClient, url: String) -> Result<LoadedImage> {
    let permits = client.image_permits.clone();
    run_limited(&permits, move || {
        let bytes = client.fetch_image(&url)?;
        thumbnail::decode(bytes, client.thumbnail_size)
    })
    .await
}

/// Run blocking work on the blocking pool while holding one permit
async fn run_limited<T, F>(permits: &Arc<Semaphore>, work: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    let permit = permits.clone().acquire_owned().await?;
    task::spawn_blocking(move || {
        let result = work();
        drop(permit);
        result
    })
    .await?
}
