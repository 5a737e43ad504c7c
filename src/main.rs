use env_logger::{Builder, Env};
use iced::widget::{column, container, stack, text, text_input};
use iced::{Element, Length, Task, Theme};

mod config;
mod error;
mod remote;
mod state;
mod ui;

use config::Config;
use error::Error;
use remote::{LoadedImage, PicsumClient};
use state::data::{LoadStatus, PhotoRecord};
use state::gallery::{Gallery, Modal, ModalClick};
use ui::{ImageSlot, ImageSlots};

const ENV_LOG: &str = "GALLERY_LOG";
const ENV_LOG_STYLE: &str = "GALLERY_LOG_STYLE";

/// Main application state
struct PhotoGallery {
    config: Config,
    client: PicsumClient,
    /// Photo list, search term and selection
    gallery: Gallery,
    /// Decoded images per photo ID
    images: ImageSlots,
    /// Tile currently under the cursor
    hovered: Option<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// The photo list request finished
    PhotosLoaded(Result<Vec<PhotoRecord>, Error>),
    /// One photo's image finished downloading and decoding
    ImageLoaded(String, Result<LoadedImage, Error>),
    /// User edited the author search field
    SearchChanged(String),
    /// Cursor entered a tile
    TileHovered(String),
    /// Cursor left a tile
    TileLeft(String),
    /// User clicked a tile
    TileClicked(String),
    /// User pressed somewhere on the open modal
    ModalClicked(ModalClick),
}

impl PhotoGallery {
    /// Create the application and start the one photo list request
    fn new(config: Config) -> (Self, Task<Message>) {
        let client = PicsumClient::new(&config);
        let mut gallery = Gallery::new();

        let task = if gallery.begin_load() {
            log::info!("Fetching photo list from {}", client.endpoint());
            Task::perform(remote::load_photo_list(client.clone()), Message::PhotosLoaded)
        } else {
            Task::none()
        };

        (
            PhotoGallery {
                config,
                client,
                gallery,
                images: ImageSlots::new(),
                hovered: None,
            },
            task,
        )
    }

    fn title(&self) -> String {
        self.config.window_title.clone()
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PhotosLoaded(result) => {
                self.gallery.finish_load(result);
                if self.gallery.status() != LoadStatus::Loaded {
                    return Task::none();
                }

                // Start downloading every photo; tiles fill in as they arrive
                Task::batch(self.gallery.photos().iter().map(|photo| {
                    let id = photo.id.clone();
                    Task::perform(
                        remote::load_image(self.client.clone(), photo.download_url.clone()),
                        move |result| Message::ImageLoaded(id.clone(), result),
                    )
                }))
            }
            Message::ImageLoaded(id, result) => {
                if self.gallery.find(&id).is_none() {
                    return Task::none();
                }
                let slot = match result {
                    Ok(loaded) => {
                        log::debug!(
                            "Decoded photo {id} ({}x{} thumbnail)",
                            loaded.thumbnail_width,
                            loaded.thumbnail_height
                        );
                        ImageSlot::Ready(loaded)
                    }
                    Err(err) => {
                        log::warn!("Failed to load image for photo {id}: {err}");
                        ImageSlot::Failed
                    }
                };
                self.images.insert(id, slot);
                Task::none()
            }
            Message::SearchChanged(term) => {
                self.gallery.set_search(term);
                // A tile filtered out under the cursor never reports its exit
                let hovered_hidden = self
                    .hovered
                    .as_deref()
                    .is_some_and(|id| !self.gallery.visible().any(|photo| photo.id == id));
                if hovered_hidden {
                    self.hovered = None;
                }
                log::debug!(
                    "{} photos match {:?}",
                    self.gallery.visible_count(),
                    self.gallery.search()
                );
                Task::none()
            }
            Message::TileHovered(id) => {
                self.hovered = Some(id);
                Task::none()
            }
            Message::TileLeft(id) => {
                if self.hovered.as_deref() == Some(id.as_str()) {
                    self.hovered = None;
                }
                Task::none()
            }
            Message::TileClicked(id) => {
                self.gallery.select(&id);
                Task::none()
            }
            Message::ModalClicked(click) => {
                self.gallery.modal_click(click);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = container(text(&self.config.window_title).size(28))
            .width(Length::Fill)
            .padding(16)
            .style(ui::banner);

        let search = text_input("Search by author...", self.gallery.search())
            .on_input(Message::SearchChanged)
            .padding(12)
            .size(18);

        let body = column![
            search,
            ui::grid::view(&self.gallery, &self.images, self.hovered.as_deref()),
        ]
        .spacing(24)
        .padding([32, 16])
        .height(Length::Fill);

        let footer = container(text("© 2024 Professional Image Gallery. All rights reserved."))
            .center_x(Length::Fill)
            .padding(16)
            .style(ui::banner);

        let page = column![header, body, footer];

        match self.gallery.modal() {
            Modal::Open(photo) => stack![page, ui::modal::view(photo, self.images.get(&photo.id))].into(),
            Modal::Closed => page.into(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    // Setup logging from the env variables, with defaults.
    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    let config = Config::default();

    iced::application(
        |gallery: &PhotoGallery| gallery.title(),
        PhotoGallery::update,
        PhotoGallery::view,
    )
    .theme(PhotoGallery::theme)
    .centered()
    .run_with(move || PhotoGallery::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image::Handle;

    fn photo(id: &str, author: &str) -> PhotoRecord {
        PhotoRecord {
            id: id.to_string(),
            author: author.to_string(),
            width: 10,
            height: 10,
            url: String::new(),
            download_url: format!("u{id}"),
        }
    }

    fn pixel() -> LoadedImage {
        LoadedImage {
            thumbnail: Handle::from_rgba(1, 1, vec![0u8, 0, 0, 255]),
            full: Handle::from_rgba(1, 1, vec![0u8, 0, 0, 255]),
            thumbnail_width: 1,
            thumbnail_height: 1,
        }
    }

    fn app() -> PhotoGallery {
        let (app, _) = PhotoGallery::new(Config {
            endpoint: "not a url".to_string(),
            ..Config::default()
        });
        app
    }

    fn loaded_app() -> PhotoGallery {
        let mut app = app();
        let _ = app.update(Message::PhotosLoaded(Ok(vec![
            photo("1", "Alice"),
            photo("2", "bob"),
        ])));
        app
    }

    fn visible_ids(app: &PhotoGallery) -> Vec<String> {
        app.gallery.visible().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_startup_requests_the_list() {
        let app = app();
        assert_eq!(app.gallery.status(), LoadStatus::Loading);
        assert!(app.gallery.photos().is_empty());
        assert_eq!(app.title(), "Professional Image Gallery");
    }

    #[test]
    fn test_loaded_list_is_fully_visible() {
        let app = loaded_app();
        assert_eq!(app.gallery.status(), LoadStatus::Loaded);
        assert_eq!(visible_ids(&app), vec!["1", "2"]);
    }

    #[test]
    fn test_failed_fetch_leaves_empty_grid() {
        let mut app = app();
        let _ = app.update(Message::PhotosLoaded(Err(Error::Request(
            "network unreachable".to_string(),
        ))));

        assert_eq!(app.gallery.status(), LoadStatus::Failed);
        assert!(app.gallery.photos().is_empty());
        assert_eq!(app.gallery.visible_count(), 0);
        assert!(app.gallery.selected().is_none());
    }

    #[test]
    fn test_search_scenario() {
        let mut app = loaded_app();

        let _ = app.update(Message::SearchChanged("AL".to_string()));
        assert_eq!(visible_ids(&app), vec!["1"]);

        let _ = app.update(Message::SearchChanged(String::new()));
        assert_eq!(visible_ids(&app), vec!["1", "2"]);
    }

    #[test]
    fn test_tile_click_opens_and_backdrop_closes() {
        let mut app = loaded_app();

        let _ = app.update(Message::TileClicked("2".to_string()));
        assert_eq!(app.gallery.modal(), Modal::Open(&photo("2", "bob")));

        let _ = app.update(Message::ModalClicked(ModalClick::Panel));
        assert!(app.gallery.selected().is_some());

        let _ = app.update(Message::ModalClicked(ModalClick::Backdrop));
        assert_eq!(app.gallery.modal(), Modal::Closed);
    }

    #[test]
    fn test_close_button_closes() {
        let mut app = loaded_app();
        let _ = app.update(Message::TileClicked("1".to_string()));

        let _ = app.update(Message::ModalClicked(ModalClick::CloseButton));
        assert!(app.gallery.selected().is_none());
    }

    #[test]
    fn test_hover_tracks_the_current_tile() {
        let mut app = loaded_app();

        let _ = app.update(Message::TileHovered("1".to_string()));
        assert_eq!(app.hovered.as_deref(), Some("1"));

        // A late exit from the previous tile must not clear the new one
        let _ = app.update(Message::TileHovered("2".to_string()));
        let _ = app.update(Message::TileLeft("1".to_string()));
        assert_eq!(app.hovered.as_deref(), Some("2"));

        let _ = app.update(Message::TileLeft("2".to_string()));
        assert!(app.hovered.is_none());
    }

    #[test]
    fn test_filtering_out_hovered_tile_clears_hover() {
        let mut app = loaded_app();
        let _ = app.update(Message::TileHovered("2".to_string()));

        let _ = app.update(Message::SearchChanged("bo".to_string()));
        assert_eq!(app.hovered.as_deref(), Some("2"));

        let _ = app.update(Message::SearchChanged("ali".to_string()));
        assert!(app.hovered.is_none());

        let _ = app.update(Message::SearchChanged(String::new()));
        assert!(app.hovered.is_none());
    }

    #[test]
    fn test_image_failure_only_affects_its_tile() {
        let mut app = loaded_app();

        let _ = app.update(Message::ImageLoaded("1".to_string(), Ok(pixel())));
        let _ = app.update(Message::ImageLoaded(
            "2".to_string(),
            Err(Error::Image("truncated".to_string())),
        ));

        assert!(matches!(app.images.get("1"), Some(ImageSlot::Ready(_))));
        assert!(matches!(app.images.get("2"), Some(ImageSlot::Failed)));
    }

    #[test]
    fn test_image_for_unknown_photo_is_dropped() {
        let mut app = loaded_app();

        let _ = app.update(Message::ImageLoaded("42".to_string(), Ok(pixel())));
        assert!(app.images.is_empty());
    }
}
