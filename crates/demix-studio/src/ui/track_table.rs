//! Source track table
//!
//! The embedding surface for the dynamic mix modal: one row per track with a
//! "Dynamic Mix" action, plus a status line reporting the last created mix.

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Element, Length};

use super::app::DemixApp;
use super::message::Message;

/// Render the track table view
pub fn view(app: &DemixApp) -> Element<'_, Message> {
    let title = text("Tracks").size(24);
    let refresh_btn = button(text("Refresh"))
        .on_press(Message::RefreshTracks)
        .style(button::secondary);

    let header = row![title, Space::new().width(Length::Fill), refresh_btn]
        .align_y(Alignment::Center)
        .width(Length::Fill);

    let body: Element<Message> = if app.loading_tracks {
        text("Loading tracks...").size(14).into()
    } else if let Some(ref error) = app.tracks_error {
        column![
            text("Failed to load tracks").size(14),
            text(error)
                .size(12)
                .color(iced::Color::from_rgb(0.9, 0.3, 0.3)),
        ]
        .spacing(5)
        .into()
    } else if app.tracks.is_empty() {
        text("No tracks on the server yet.").size(14).into()
    } else {
        let rows: Vec<Element<Message>> = app
            .tracks
            .iter()
            .enumerate()
            .map(|(index, track)| view_track_row(index, track))
            .collect();
        scrollable(column(rows).spacing(6))
            .height(Length::Fill)
            .into()
    };

    let status: Element<Message> = match app.last_created {
        Some(ref created) => text(format!(
            "Created dynamic mix {} for track {}",
            created.id, created.source_track
        ))
        .size(12)
        .color(iced::Color::from_rgb(0.2, 0.8, 0.2))
        .into(),
        None => Space::new().height(0).into(),
    };

    container(
        column![header, body, status]
            .spacing(15)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .padding(20)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn view_track_row<'a>(
    index: usize,
    track: &'a demix_core::api::TrackRef,
) -> Element<'a, Message> {
    let name = text(track.display_name()).size(14);
    let mix_btn = button(text("Dynamic Mix").size(13))
        .on_press(Message::OpenMixModal(index))
        .style(button::primary);

    container(
        row![name, Space::new().width(Length::Fill), mix_btn]
            .spacing(10)
            .align_y(Alignment::Center),
    )
    .padding(8)
    .width(Length::Fill)
    .style(|theme: &iced::Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.background.weak.color)),
            border: iced::Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })
    .into()
}
