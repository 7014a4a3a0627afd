// SPDX-License-Identifier: MPL-2.0
//! Toast cards and the overlay that places them.
//!
//! Each toast is drawn as a card with a type-colored accent border, an
//! optional heading, the body text, an optional close control and an optional
//! timer-bar. The overlay puts every card on its own full-window layer,
//! aligned to the card's corner and pushed away from the edge by the offset
//! the stack assigned.

use crate::toast::{Edge, Side, Toast};
use crate::toaster::{Message, Toaster};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::icons;
use iced::font::Weight;
use iced::widget::{
    button, container, mouse_area, svg, text, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment, Color, Element, Font, Length, Padding, Theme};

/// Renders a single toast card.
pub fn card<'a>(toast: &'a Toast, width: f32) -> Element<'a, Message> {
    let Some(element) = toast.element() else {
        return Space::new().into();
    };
    let id = toast.id();
    let alpha = toast.opacity();
    let accent = element.kind.color();

    let mut lines = Column::new().spacing(spacing::XXS);
    if !element.heading.trim().is_empty() {
        lines = lines.push(
            Text::new(element.heading.as_str())
                .size(typography::BODY_LG)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .style(move |theme: &Theme| faded_text(theme, alpha)),
        );
    }
    lines = lines.push(
        Text::new(element.body.as_str())
            .size(typography::BODY)
            .style(move |theme: &Theme| faded_text(theme, alpha)),
    );

    // Layout: [heading/body] [close]
    let mut header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Top)
        .push(Container::new(lines).width(Length::Fill));

    if element.close_control {
        let icon = icons::sized(icons::close(), sizing::ICON_SM).style(
            move |theme: &Theme, _status| svg::Style {
                color: Some(Color {
                    a: alpha,
                    ..theme.palette().text
                }),
            },
        );
        header = header.push(
            button(icon)
                .on_press(Message::Close(id))
                .padding(spacing::XXS)
                .style(dismiss_button_style),
        );
    }

    let mut content = Column::new().spacing(spacing::XS).push(header);
    if element.timer_bar {
        let track = width - 2.0 * spacing::SM;
        content = content.push(timer_bar(toast.remaining_fraction(), track, accent, alpha));
    }

    let card = Container::new(content)
        .width(Length::Fixed(width))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent, alpha));

    mouse_area(card)
        .on_enter(Message::PointerEntered(id))
        .on_exit(Message::PointerLeft(id))
        .into()
}

/// Countdown bar whose width tracks the remaining fraction.
fn timer_bar<'a>(fraction: f32, track: f32, accent: Color, alpha: f32) -> Element<'a, Message> {
    let filled = (track * fraction.clamp(0.0, 1.0)).max(0.0);
    container(
        Space::new()
            .width(Length::Fixed(filled))
            .height(Length::Fixed(sizing::TIMER_BAR_HEIGHT)),
    )
    .style(move |_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(Color {
            a: accent.a * alpha,
            ..accent
        })),
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

/// Renders every attached toast at its corner and offset.
pub fn overlay(toaster: &Toaster) -> Element<'_, Message> {
    let layout = toaster.layout();

    if toaster.is_empty() {
        // Return an empty container that takes no space
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let layers: Vec<Element<'_, Message>> = toaster
        .toasts()
        .map(|toast| {
            let position = toast.position();
            let along_edge = layout.margin + toast.offset();
            let (top, bottom) = match position.edge() {
                Edge::Top => (along_edge, 0.0),
                Edge::Bottom => (0.0, along_edge),
            };
            let (horizontal, left, right) = match position.side() {
                Side::Left => (alignment::Horizontal::Left, layout.margin, 0.0),
                Side::Right => (alignment::Horizontal::Right, 0.0, layout.margin),
            };
            let vertical = match position.edge() {
                Edge::Top => alignment::Vertical::Top,
                Edge::Bottom => alignment::Vertical::Bottom,
            };

            Container::new(card(toast, layout.width))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(horizontal)
                .align_y(vertical)
                .padding(Padding {
                    top,
                    right,
                    bottom,
                    left,
                })
                .into()
        })
        .collect();

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn faded_text(theme: &Theme, alpha: f32) -> text::Style {
    let color = theme.palette().text;
    text::Style {
        color: Some(Color {
            a: color.a * alpha,
            ..color
        }),
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;
    let text_color = theme.palette().text;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE * alpha,
            ..bg_color
        })),
        border: iced::Border {
            color: Color {
                a: accent_color.a * alpha,
                ..accent_color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: Color {
                a: opacity::OVERLAY_MEDIUM * alpha,
                ..shadow::MD.color
            },
            ..shadow::MD
        },
        text_color: Some(Color {
            a: text_color.a * alpha,
            ..text_color
        }),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_background = |a: f32| {
        Some(iced::Background::Color(Color {
            a,
            ..palette::GRAY_400
        }))
    };

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: hover_background(opacity::OVERLAY_SUBTLE),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: hover_background(opacity::OVERLAY_MEDIUM),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
