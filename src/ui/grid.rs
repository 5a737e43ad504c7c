use iced::widget::{center, container, mouse_area, responsive, scrollable, stack, text};
use iced::widget::{Column, Image, Row, Space};
use iced::{alignment, Color, ContentFit, Element, Length, Size, Theme};

use super::{ImageSlot, ImageSlots, BOLD};
use crate::state::data::PhotoRecord;
use crate::state::gallery::Gallery;
use crate::Message;

/// Fixed tile height; images are cropped to fill it
pub const TILE_HEIGHT: f32 = 256.0;

/// Gap between tiles, both directions
const GAP: f32 = 32.0;

/// Number of grid columns for a given content width.
/// Breakpoints at 640, 768 and 1024 px give 1 to 4 columns.
pub fn columns_for_width(width: f32) -> usize {
    if width >= 1024.0 {
        4
    } else if width >= 768.0 {
        3
    } else if width >= 640.0 {
        2
    } else {
        1
    }
}

/// Split items into grid rows of `columns` cells.
///
/// Each row comes with the number of empty cells needed to pad it to full
/// width; only the last row can have padding.
pub fn layout_rows<T>(items: &[T], columns: usize) -> Vec<(&[T], usize)> {
    let columns = columns.max(1);
    items
        .chunks(columns)
        .map(|row| (row, columns - row.len()))
        .collect()
}

/// Render the visible photos as a scrollable grid of tiles
pub fn view<'a>(
    gallery: &'a Gallery,
    images: &'a ImageSlots,
    hovered: Option<&'a str>,
) -> Element<'a, Message> {
    responsive(move |size: Size| {
        let columns = columns_for_width(size.width);
        let photos: Vec<&'a PhotoRecord> = gallery.visible().collect();

        let grid = layout_rows(&photos, columns).into_iter().fold(
            Column::new().spacing(GAP),
            |grid, (cells, padding)| {
                let mut tiles = Row::new().spacing(GAP);
                for &photo in cells {
                    let is_hovered = hovered == Some(photo.id.as_str());
                    tiles = tiles.push(tile(photo, images.get(&photo.id), is_hovered));
                }
                // Keep the last row's tiles the same width as the others
                for _ in 0..padding {
                    tiles = tiles.push(Space::with_width(Length::Fill));
                }
                grid.push(tiles)
            },
        );

        scrollable(grid).height(Length::Fill).into()
    })
    .into()
}

fn tile<'a>(photo: &'a PhotoRecord, slot: Option<&'a ImageSlot>, hovered: bool) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match slot {
        Some(ImageSlot::Ready(loaded)) => Image::new(loaded.thumbnail.clone())
            .width(Length::Fill)
            .height(Length::Fixed(TILE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ImageSlot::Failed) => placeholder("Unavailable"),
        None => placeholder("Loading…"),
    };

    let mut layers = stack![picture];
    if hovered {
        layers = layers.push(author_label(&photo.author));
    }

    mouse_area(
        container(layers)
            .width(Length::Fill)
            .height(Length::Fixed(TILE_HEIGHT))
            .clip(true),
    )
    .on_press(Message::TileClicked(photo.id.clone()))
    .on_enter(Message::TileHovered(photo.id.clone()))
    .on_exit(Message::TileLeft(photo.id.clone()))
    .into()
}

fn author_label(author: &str) -> Element<'_, Message> {
    container(text(author).size(18).font(BOLD).color(Color::WHITE))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Bottom)
        .padding(16)
        .style(|_theme: &Theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.55).into()),
            ..container::Style::default()
        })
        .into()
}

fn placeholder(label: &str) -> Element<'_, Message> {
    center(text(label).size(16))
        .width(Length::Fill)
        .height(Length::Fixed(TILE_HEIGHT))
        .style(container::rounded_box)
        .into()
}
