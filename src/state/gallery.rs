use super::data::{LoadStatus, PhotoRecord};
use crate::error::Error;

/// The Gallery owns the loaded photo list and everything derived from it:
/// the author search term, the visible subset and the photo opened in the
/// modal viewer.
///
/// The visible subset is stored as indices into `photos` and is only ever
/// rebuilt by `refilter`, so it always equals `filter(photos, search)`.
#[derive(Debug, Default)]
pub struct Gallery {
    photos: Vec<PhotoRecord>,
    search: String,
    visible: Vec<usize>,
    selected: Option<PhotoRecord>,
    status: LoadStatus,
}

/// What the modal viewer is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal<'a> {
    Closed,
    Open(&'a PhotoRecord),
}

/// Where a press landed while the modal is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    /// The dimmed area around the panel
    Backdrop,
    /// The explicit "Close" button
    CloseButton,
    /// Anywhere on the panel itself, including the enlarged image
    Panel,
}

/// Case-insensitive substring match on the author name.
/// An empty term matches every record.
pub fn matches(photo: &PhotoRecord, term: &str) -> bool {
    matches_lowercase(photo, &term.to_lowercase())
}

/// `matches` for a term that is already lowercase
fn matches_lowercase(photo: &PhotoRecord, term: &str) -> bool {
    term.is_empty() || photo.author.to_lowercase().contains(term)
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the list fetch as started.
    ///
    /// Returns `true` only the first time; callers issue the request only
    /// then, which keeps the gallery to a single outbound list request.
    pub fn begin_load(&mut self) -> bool {
        if self.status != LoadStatus::Idle {
            return false;
        }
        self.status = LoadStatus::Loading;
        true
    }

    /// Apply the outcome of the list fetch
    pub fn finish_load(&mut self, result: Result<Vec<PhotoRecord>, Error>) {
        match result {
            Ok(photos) => {
                log::info!("Loaded {} photos", photos.len());
                self.photos = photos;
                self.status = LoadStatus::Loaded;
            }
            Err(err) => {
                log::error!("Error fetching images: {err}");
                self.photos.clear();
                self.status = LoadStatus::Failed;
            }
        }
        self.refilter();
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// The full list in fetch order
    pub fn photos(&self) -> &[PhotoRecord] {
        &self.photos
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Update the author search term and recompute the visible subset
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.refilter();
    }

    /// Photos matching the current search, in fetch order
    pub fn visible(&self) -> impl Iterator<Item = &PhotoRecord> + '_ {
        self.visible.iter().map(move |&index| &self.photos[index])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn find(&self, id: &str) -> Option<&PhotoRecord> {
        self.photos.iter().find(|photo| photo.id == id)
    }

    /// Open the modal on the photo with the given ID.
    ///
    /// Unknown IDs are ignored and `false` is returned.
    pub fn select(&mut self, id: &str) -> bool {
        match self.find(id).cloned() {
            Some(photo) => {
                log::debug!("Opening photo {} by {}", photo.id, photo.author);
                self.selected = Some(photo);
                true
            }
            None => {
                log::warn!("Ignoring selection of unknown photo {id}");
                false
            }
        }
    }

    /// Handle a press inside the open modal.
    ///
    /// The backdrop and the close button dismiss it; presses on the panel
    /// never do.
    pub fn modal_click(&mut self, click: ModalClick) {
        match click {
            ModalClick::Backdrop | ModalClick::CloseButton => {
                if let Some(photo) = self.selected.take() {
                    log::debug!("Closing photo {}", photo.id);
                }
            }
            ModalClick::Panel => {}
        }
    }

    pub fn selected(&self) -> Option<&PhotoRecord> {
        self.selected.as_ref()
    }

    pub fn modal(&self) -> Modal<'_> {
        match self.selected() {
            Some(photo) => Modal::Open(photo),
            None => Modal::Closed,
        }
    }

    fn refilter(&mut self) {
        let term = self.search.to_lowercase();
        self.visible = self
            .photos
            .iter()
            .enumerate()
            .filter(|(_, photo)| matches_lowercase(photo, &term))
            .map(|(index, _)| index)
            .collect();
    }
}
