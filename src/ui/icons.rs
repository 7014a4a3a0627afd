// SPDX-License-Identifier: MPL-2.0
//! SVG icons used by the toast card.
//!
//! Handles are created once on first access and reused thereafter. Icons are
//! monochrome so the renderer can tint them with the current text color.

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

const CLOSE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><title>close</title><path d="M19,6.41L17.59,5L12,10.59L6.41,5L5,6.41L10.59,12L5,17.59L6.41,19L12,13.41L17.59,19L19,17.59L13.41,12L19,6.41Z" fill="currentColor" /></svg>"#;

/// Close icon: diagonal cross.
pub fn close<'a>() -> Svg<'a> {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    let handle = HANDLE.get_or_init(|| Handle::from_memory(CLOSE_SVG.as_bytes()));
    Svg::new(handle.clone())
}

/// Sizes an icon to a square of `size` pixels.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
