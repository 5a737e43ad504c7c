/// View layer
///
/// - `grid.rs` - responsive tile grid with hover labels
/// - `modal.rs` - full-size viewer drawn over the grid
use std::collections::HashMap;

use iced::widget::container;
use iced::{Color, Font, Theme};

use crate::remote::LoadedImage;

pub mod grid;
pub mod modal;

/// Download state of one photo's image, keyed by photo ID.
/// A missing entry means the download is still running.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    Ready(LoadedImage),
    Failed,
}

pub type ImageSlots = HashMap<String, ImageSlot>;

pub const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

/// Header and footer bars
pub fn banner(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.palette().primary.into()),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}
