// SPDX-License-Identifier: MPL-2.0
//! Per-corner stacking of attached toasts.
//!
//! The newest toast sits against its corner's edge; every older toast is
//! pushed away from the edge by the heights of all newer toasts plus one
//! spacing gap per newer toast.

use crate::toast::{Position, Toast};

/// Offsets for a corner's toasts given their heights in display order
/// (oldest first). The returned offsets use the same order.
#[must_use]
pub fn offsets(heights: &[f32], spacing: f32) -> Vec<f32> {
    let mut offsets = vec![0.0; heights.len()];
    let mut cumulative = 0.0;
    for (offset, height) in offsets.iter_mut().zip(heights).rev() {
        *offset = cumulative;
        cumulative += height + spacing;
    }
    offsets
}

/// Reassigns the offsets of every attached toast at `position`.
///
/// `toasts` must be in display order (oldest first). Toasts at other
/// corners, and toasts no longer attached, are left untouched.
pub fn reposition(toasts: &mut [Toast], position: Position, spacing: f32) {
    let mut corner: Vec<&mut Toast> = toasts
        .iter_mut()
        .filter(|t| t.is_attached() && t.position() == position)
        .collect();
    let heights: Vec<f32> = corner.iter().map(|t| t.height()).collect();

    for (toast, offset) in corner.iter_mut().zip(offsets(&heights, spacing)) {
        toast.set_offset(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{ToastDefaults, ToastOptions};

    fn attached(text: &str, position: Position, height: f32) -> Toast {
        let options = ToastOptions::new(text).position(position);
        let mut toast = Toast::new(options.resolve(&ToastDefaults::default()));
        let element = toast.render().expect("render should succeed");
        toast.attach(element, height);
        toast
    }

    #[test]
    fn newest_toast_sits_at_the_edge() {
        assert_eq!(offsets(&[40.0, 50.0, 60.0], 10.0), vec![130.0, 70.0, 0.0]);
    }

    #[test]
    fn empty_stack_has_no_offsets() {
        assert!(offsets(&[], 10.0).is_empty());
    }

    #[test]
    fn offset_is_sum_of_newer_heights_and_spacing() {
        let heights = [12.0, 80.0, 33.0, 47.0, 60.0];
        let spacing = 10.0;
        let result = offsets(&heights, spacing);

        for (i, offset) in result.iter().enumerate() {
            let expected: f32 = heights[i + 1..].iter().map(|h| h + spacing).sum();
            assert_eq!(*offset, expected);
        }
    }

    #[test]
    fn zero_spacing_stacks_flush() {
        assert_eq!(offsets(&[20.0, 20.0], 0.0), vec![20.0, 0.0]);
    }

    #[test]
    fn reposition_stacks_only_the_given_corner() {
        let mut toasts = vec![
            attached("a", Position::BottomRight, 40.0),
            attached("b", Position::TopLeft, 30.0),
            attached("c", Position::BottomRight, 50.0),
            attached("d", Position::BottomRight, 60.0),
        ];
        toasts[1].set_offset(99.0);

        reposition(&mut toasts, Position::BottomRight, 10.0);

        let offsets: Vec<f32> = toasts.iter().map(Toast::offset).collect();
        assert_eq!(offsets, vec![130.0, 99.0, 70.0, 0.0]);
    }

    #[test]
    fn reposition_skips_detached_toasts() {
        let mut toasts = vec![
            attached("a", Position::TopRight, 40.0),
            attached("b", Position::TopRight, 50.0),
        ];
        toasts[1].detach();

        reposition(&mut toasts, Position::TopRight, 10.0);
        assert_eq!(toasts[0].offset(), 0.0);
    }
}
