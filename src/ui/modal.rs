use iced::widget::{button, center, column, container, mouse_area, opaque, text, Image};
use iced::{Color, Element, Length, Theme};

use super::{ImageSlot, BOLD};
use crate::state::data::PhotoRecord;
use crate::state::gallery::ModalClick;
use crate::Message;

const PANEL_MAX_WIDTH: f32 = 896.0;
const IMAGE_MAX_HEIGHT: f32 = 640.0;

/// Full-size viewer for the selected photo, meant to be stacked on top of
/// the page.
///
/// The panel sits in its own `mouse_area` behind `opaque`, so presses on it
/// (the image included) are reported as `ModalClick::Panel` and never reach
/// the backdrop's handler.
pub fn view<'a>(photo: &'a PhotoRecord, slot: Option<&'a ImageSlot>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match slot {
        Some(ImageSlot::Ready(loaded)) => container(Image::new(loaded.full.clone()).width(Length::Fill))
            .max_height(IMAGE_MAX_HEIGHT)
            .into(),
        Some(ImageSlot::Failed) => placeholder("Image unavailable"),
        None => placeholder("Loading…"),
    };

    let details = column![
        text(&photo.author).size(28).font(BOLD),
        text(format!("ID: {}", photo.id)),
        button("Close")
            .on_press(Message::ModalClicked(ModalClick::CloseButton))
            .padding([8, 16]),
    ]
    .spacing(8)
    .padding(16);

    let panel = container(column![picture, details])
        .max_width(PANEL_MAX_WIDTH)
        .style(container::rounded_box);
    let panel = mouse_area(panel).on_press(Message::ModalClicked(ModalClick::Panel));

    let backdrop = center(opaque(panel)).padding(16).style(backdrop_style);

    opaque(mouse_area(backdrop).on_press(Message::ModalClicked(ModalClick::Backdrop)))
}

fn placeholder(label: &str) -> Element<'_, Message> {
    center(text(label).size(20))
        .width(Length::Fill)
        .height(Length::Fixed(IMAGE_MAX_HEIGHT / 2.0))
        .into()
}

fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color { a: 0.75, ..Color::BLACK }.into()),
        ..container::Style::default()
    }
}
