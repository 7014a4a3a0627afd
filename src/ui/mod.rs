// SPDX-License-Identifier: MPL-2.0
//! Rendering of toasts and shared visual infrastructure.
//!
//! - [`toast_view`] - Toast cards and the corner overlay
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon handles

pub mod design_tokens;
pub mod icons;
pub mod theming;
pub mod toast_view;
