// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Option defaults applied when a `ToastOptions` field is unset
//! - **Layout**: Stacking, margins and toast width
//! - **Animation**: Fade-out transition length

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default time a toast stays on screen before fading out (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Whether toasts get a close control unless told otherwise.
pub const DEFAULT_DISMISSABLE: bool = true;

/// Whether toasts request a drag affordance unless told otherwise.
pub const DEFAULT_DRAGGABLE: bool = true;

/// Whether toasts render a countdown timer-bar unless told otherwise.
pub const DEFAULT_SHOW_TIMER: bool = false;

/// Whether hovering or focusing a toast pauses its countdown.
pub const DEFAULT_PAUSE_ON_HOVER: bool = true;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Vertical gap between stacked toasts (in pixels).
pub const DEFAULT_SPACING: f32 = 10.0;

/// Distance between the window edge and the nearest toast (in pixels).
pub const DEFAULT_MARGIN: f32 = 16.0;

/// Width of a toast card (in pixels).
pub const DEFAULT_TOAST_WIDTH: f32 = 320.0;

/// Minimum accepted toast width (in pixels).
pub const MIN_TOAST_WIDTH: f32 = 160.0;

/// Maximum accepted toast width (in pixels).
pub const MAX_TOAST_WIDTH: f32 = 640.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Length of the opacity fade played before a toast is detached (in milliseconds).
pub const DEFAULT_FADE_MS: u64 = 300;

/// Upper bound for the fade length (in milliseconds).
pub const MAX_FADE_MS: u64 = 5000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SPACING >= 0.0);
    assert!(DEFAULT_MARGIN >= 0.0);
    assert!(MIN_TOAST_WIDTH < MAX_TOAST_WIDTH);
    assert!(DEFAULT_TOAST_WIDTH >= MIN_TOAST_WIDTH && DEFAULT_TOAST_WIDTH <= MAX_TOAST_WIDTH);
    assert!(DEFAULT_FADE_MS <= MAX_FADE_MS);
};
