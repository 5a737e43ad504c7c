/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the network layer and the UI layer.
use serde::Deserialize;

/// Represents a single photo from the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhotoRecord {
    /// Picsum photo ID (numeric, but sent as a string)
    pub id: String,
    /// Photographer name, used for searching
    pub author: String,
    /// Original width in pixels
    pub width: u32,
    /// Original height in pixels
    pub height: u32,
    /// Photo page on the source site (not used by the UI)
    #[serde(default)]
    pub url: String,
    /// Direct link to the full-size image
    pub download_url: String,
}

/// Progress of the one-shot photo list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// List received
    Loaded,
    /// Request failed; the gallery stays empty
    Failed,
}
