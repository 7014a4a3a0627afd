// SPDX-License-Identifier: MPL-2.0
//! Content-based height estimate for toast cards.
//!
//! The stack needs a height per toast before the renderer has laid anything
//! out, so the card height is derived from its content: padding, an optional
//! heading line, the wrapped body lines and the optional timer-bar. The row
//! holding the text is never shorter than the close button beside it. Text
//! wrapping assumes an average advance for ASCII glyphs and a full em for
//! everything else, so wide scripts over-estimate rather than overlap.

use super::options::ResolvedOptions;
use crate::ui::design_tokens::{sizing, spacing, typography};

/// Line height as a multiple of the font size.
const LINE_HEIGHT: f32 = 1.3;

/// Average ASCII glyph advance as a multiple of the font size.
const GLYPH_ADVANCE: f32 = 0.55;

/// Advance of non-ASCII glyphs (CJK, emoji, ...) as a multiple of the font size.
const WIDE_GLYPH_ADVANCE: f32 = 1.0;

/// Height of the close button: the icon plus its padding.
pub const CLOSE_BUTTON_HEIGHT: f32 = sizing::ICON_SM + spacing::XXS * 2.0;

/// Estimates the rendered height of a toast `width` pixels wide.
#[must_use]
pub fn estimate_height(options: &ResolvedOptions, width: f32) -> f32 {
    let mut text_width = width - 2.0 * spacing::SM;
    if options.dismissable {
        text_width -= CLOSE_BUTTON_HEIGHT + spacing::SM;
    }
    let text_width = text_width.max(typography::BODY);

    let mut text_height: f32 = 0.0;

    if let Some(heading) = options.heading.as_deref().filter(|h| !h.trim().is_empty()) {
        text_height += wrapped_lines(heading, typography::BODY_LG, text_width) as f32
            * typography::BODY_LG
            * LINE_HEIGHT;
        text_height += spacing::XXS;
    }

    text_height += wrapped_lines(&options.text, typography::BODY, text_width) as f32
        * typography::BODY
        * LINE_HEIGHT;

    let row_height = if options.dismissable {
        text_height.max(CLOSE_BUTTON_HEIGHT)
    } else {
        text_height
    };

    let mut height = 2.0 * spacing::SM + row_height;

    if options.show_timer {
        height += spacing::XS + sizing::TIMER_BAR_HEIGHT;
    }

    height.ceil()
}

/// Number of lines `text` occupies at `font_size` within `width`.
fn wrapped_lines(text: &str, font_size: f32, width: f32) -> usize {
    let width = width.max(font_size);
    text.lines()
        .map(|line| {
            let advance: f32 = line
                .chars()
                .map(|c| {
                    if c.is_ascii() {
                        GLYPH_ADVANCE
                    } else {
                        WIDE_GLYPH_ADVANCE
                    }
                })
                .sum();
            ((advance * font_size / width).ceil() as usize).max(1)
        })
        .sum::<usize>()
        .max(1)
}
