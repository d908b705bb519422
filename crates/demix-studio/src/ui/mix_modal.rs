//! Dynamic mix modal UI
//!
//! Renders the parameter form, inline validation alerts, and the action row.
//! All gating (disabled buttons, suppressed close) derives from the modal
//! state; this module never mutates anything.

use iced::widget::{button, checkbox, column, container, pick_list, row, text, text_input, Space};
use iced::{Alignment, Element, Length};

use demix_core::params::{EM_ITERATION_CHOICES, RANDOM_SHIFT_CHOICES};
use demix_core::{Bitrate, SeparatorModel, ValidationNote};

use super::message::{Message, MixModalMessage};
use super::state::MixModalState;

/// Render the dynamic mix modal content
pub fn view(state: &MixModalState) -> Element<'_, Message> {
    let Some(ref target) = state.target else {
        return Space::new().into();
    };

    let submitting = state.is_submitting();
    let status = state.status();

    let title = text("Create Dynamic Mix").size(24);
    let close_btn_base = button(text("×").size(20)).style(button::secondary);
    let close_btn = if submitting {
        close_btn_base
    } else {
        close_btn_base.on_press(Message::MixModal(MixModalMessage::HideRequested))
    };

    let header = row![title, Space::new().width(Length::Fill), close_btn]
        .align_y(Alignment::Center)
        .width(Length::Fill);

    let track_line = text(target.display_name()).size(14);

    // Parameter controls; model applicability gates which rows appear
    let mut form = column![view_model_row(state)].spacing(10);
    if state.params.model.uses_random_shifts() {
        form = form.push(view_random_shifts_row(state));
    }
    if state.params.model.uses_softmask() {
        form = form.push(view_em_iterations_row(state));
        form = form.push(view_softmask_row(state));
        if state.params.softmask {
            form = form.push(view_alpha_row(state));
        }
    }
    form = form.push(view_bitrate_row(state));

    // Inline alerts: advisory first, blocking below, then server errors
    let mut alerts = column![].spacing(8);
    if status.has(ValidationNote::SlowCpuModel) {
        alerts = alerts.push(warning_alert(ValidationNote::SlowCpuModel.message()));
    }
    if status.has(ValidationNote::InvalidSoftmaskAlpha) {
        alerts = alerts.push(danger_alert(ValidationNote::InvalidSoftmaskAlpha.message()));
    }
    if !state.errors.is_empty() {
        let lines: Vec<Element<Message>> = state
            .errors
            .iter()
            .map(|e| text(e).size(13).into())
            .collect();
        alerts = alerts.push(danger_container(column(lines).spacing(4).into()));
    }

    // Action buttons
    let cancel_btn_base = button(text("Cancel")).style(button::secondary);
    let cancel_btn = if submitting {
        cancel_btn_base
    } else {
        cancel_btn_base.on_press(Message::MixModal(MixModalMessage::HideRequested))
    };

    let submit_label = if submitting { "Creating..." } else { "Create Mix" };
    let submit_btn_base = button(text(submit_label));
    let submit_btn = if state.can_submit() {
        submit_btn_base
            .on_press(Message::MixModal(MixModalMessage::Submit))
            .style(button::primary)
    } else {
        submit_btn_base.style(button::secondary)
    };

    let actions = row![Space::new().width(Length::Fill), cancel_btn, submit_btn]
        .spacing(10)
        .width(Length::Fill);

    let body = column![header, track_line, form, alerts, actions]
        .spacing(15)
        .width(Length::Fixed(460.0));

    container(body)
        .padding(30)
        .style(container::rounded_box)
        .into()
}

fn view_model_row(state: &MixModalState) -> Element<'_, Message> {
    let options: Vec<String> = SeparatorModel::all()
        .iter()
        .map(|m| m.display_name().to_string())
        .collect();
    let selected = Some(state.params.model.display_name().to_string());

    let options_for_closure = options.clone();
    let picker = pick_list(options, selected, move |choice| {
        let index = options_for_closure
            .iter()
            .position(|o| o == &choice)
            .unwrap_or(0);
        Message::MixModal(MixModalMessage::SetModel(SeparatorModel::all()[index]))
    })
    .width(Length::Fill);

    labeled_row("Model:", picker.into())
}

fn view_random_shifts_row(state: &MixModalState) -> Element<'_, Message> {
    let options: Vec<String> = RANDOM_SHIFT_CHOICES.iter().map(u32::to_string).collect();
    let selected = Some(state.params.random_shifts.to_string());

    let picker = pick_list(options, selected, |choice: String| {
        let shifts = choice.parse().unwrap_or(0);
        Message::MixModal(MixModalMessage::SetRandomShifts(shifts))
    })
    .width(Length::Fixed(100.0));

    labeled_row("Random shifts:", picker.into())
}

fn view_em_iterations_row(state: &MixModalState) -> Element<'_, Message> {
    let options: Vec<String> = EM_ITERATION_CHOICES.iter().map(u32::to_string).collect();
    let selected = Some(state.params.em_iterations.to_string());

    let picker = pick_list(options, selected, |choice: String| {
        let iterations = choice.parse().unwrap_or(1);
        Message::MixModal(MixModalMessage::SetEmIterations(iterations))
    })
    .width(Length::Fixed(100.0));

    labeled_row("EM iterations:", picker.into())
}

fn view_softmask_row(state: &MixModalState) -> Element<'_, Message> {
    checkbox(state.params.softmask)
        .label("Use softmask")
        .on_toggle(|enabled| Message::MixModal(MixModalMessage::SetSoftmask(enabled)))
        .size(16)
        .into()
}

fn view_alpha_row(state: &MixModalState) -> Element<'_, Message> {
    let input = text_input("1.0", &state.alpha_input)
        .on_input(|t| Message::MixModal(MixModalMessage::SetAlphaInput(t)))
        .width(Length::Fixed(100.0));

    labeled_row("Softmask alpha:", input.into())
}

fn view_bitrate_row(state: &MixModalState) -> Element<'_, Message> {
    let options: Vec<String> = Bitrate::all()
        .iter()
        .map(|b| b.display_name().to_string())
        .collect();
    let selected = Some(state.params.bitrate.display_name().to_string());

    let options_for_closure = options.clone();
    let picker = pick_list(options, selected, move |choice| {
        let index = options_for_closure
            .iter()
            .position(|o| o == &choice)
            .unwrap_or(0);
        Message::MixModal(MixModalMessage::SetBitrate(Bitrate::all()[index]))
    })
    .width(Length::Fixed(140.0));

    labeled_row("Output bitrate:", picker.into())
}

fn labeled_row<'a>(label: &'a str, control: Element<'a, Message>) -> Element<'a, Message> {
    row![
        text(label).size(14).width(Length::Fixed(130.0)),
        control
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}

/// Non-blocking advisory, amber text
fn warning_alert(message: &str) -> Element<'_, Message> {
    text(message)
        .size(13)
        .color(iced::Color::from_rgb(0.8, 0.6, 0.2))
        .into()
}

/// Blocking validation failure, red panel
fn danger_alert(message: &str) -> Element<'_, Message> {
    danger_container(text(message).size(13).into())
}

fn danger_container(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .padding(8)
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(iced::Background::Color(iced::Color::from_rgba(
                0.9, 0.2, 0.2, 0.15,
            ))),
            text_color: Some(iced::Color::from_rgb(0.9, 0.3, 0.3)),
            border: iced::Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
