//! Modal overlay building utilities

use iced::widget::{center, container, mouse_area, opaque, stack, Space};
use iced::{Color, Element, Length};

use super::super::message::Message;

/// Build a semi-transparent backdrop behind a modal
///
/// When `close_message` is `Some`, clicking the backdrop dismisses the modal;
/// `None` suppresses backdrop dismissal (used while a submission is
/// outstanding).
fn build_backdrop(close_message: Option<Message>) -> Element<'static, Message> {
    let fill = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.6).into()),
            ..Default::default()
        });

    match close_message {
        Some(message) => mouse_area(fill).on_press(message).into(),
        None => fill.into(),
    }
}

/// Wrap content in a modal overlay with backdrop
///
/// Stacks the base application content, a dark backdrop, and the centered
/// modal content.
pub fn with_modal_overlay<'a>(
    base: Element<'a, Message>,
    modal_content: Element<'a, Message>,
    close_message: Option<Message>,
) -> Element<'a, Message> {
    let backdrop = build_backdrop(close_message);

    let modal = center(opaque(modal_content))
        .width(Length::Fill)
        .height(Length::Fill);

    stack![base, backdrop, modal].into()
}
