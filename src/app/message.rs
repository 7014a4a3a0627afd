// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo window.

use crate::toast::{Position, ToastType};
use crate::toaster;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    TypeSelected(ToastType),
    PositionSelected(Position),
    TimerToggled(bool),
    DismissableToggled(bool),
    /// The "show toast" button was pressed.
    ShowToast,
    Toast(toaster::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Flags {
    /// Initially selected corner.
    pub position: Option<Position>,
    /// Initially selected toast type.
    pub kind: Option<ToastType>,
    /// Duration of demo toasts in milliseconds.
    pub duration: Option<u64>,
    /// Whether demo toasts show a timer-bar.
    pub show_timer: bool,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PALM_TOAST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

pub const HELP: &str = "\
palm-toast: toast notification demo

USAGE:
  palm-toast [OPTIONS]

OPTIONS:
  --position <corner>   bottom-right | bottom-left | top-right | top-left
  --type <kind>         success | error | warning | info | default
  --duration <ms>       time each toast stays on screen (default 8000)
  --timer               draw a countdown bar in each toast
  --config-dir <dir>    directory holding settings.toml
  -h, --help            print this help
";

impl Flags {
    /// Parses flags, rejecting unknown arguments.
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self, pico_args::Error> {
        let flags = Self {
            position: args.opt_value_from_str("--position")?,
            kind: args.opt_value_from_str("--type")?,
            duration: args.opt_value_from_str("--duration")?,
            show_timer: args.contains("--timer"),
            config_dir: args.opt_value_from_str("--config-dir")?,
        };

        let rest = args.finish();
        if let Some(unexpected) = rest.into_iter().next() {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unexpected argument: {}", unexpected.to_string_lossy()),
            });
        }
        Ok(flags)
    }
}
