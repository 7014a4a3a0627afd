// SPDX-License-Identifier: MPL-2.0
//! Log subscriber setup for the demo binary.
//!
//! `RUST_LOG` is honored; without it the crate logs at `debug` and the
//! renderer stack only reports errors.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::from_default_env()
        .add_directive("palm_toast=debug".parse()?)
        .add_directive("iced=error".parse()?)
        .add_directive("wgpu_core=error".parse()?)
        .add_directive("wgpu_hal=error".parse()?);

    fmt().with_env_filter(filter).try_init()?;

    Ok(())
}
