// SPDX-License-Identifier: MPL-2.0
use palm_toast::config::{self, Config};
use palm_toast::toast::{Phase, Position, ToastOptions, ToastType};
use palm_toast::toaster::{Message, Toaster};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn configured_defaults_flow_into_shown_toasts() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.defaults.position = Position::TopLeft;
    initial.defaults.kind = ToastType::Success;
    initial.defaults.duration_ms = 1200;
    initial.layout.spacing = 4.0;
    config::save_to_path(&initial, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let mut toaster = Toaster::with_config(&loaded);
    let id = toaster.show("configured").expect("toast should show");

    let toast = toaster.get(id).unwrap();
    assert_eq!(toast.position(), Position::TopLeft);
    assert_eq!(toast.kind(), ToastType::Success);
    assert_eq!(toast.options().duration, ms(1200));
    assert_eq!(toaster.layout().spacing, 4.0);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn full_lifecycle_from_show_to_detach() {
    let t0 = Instant::now();
    let mut toaster = Toaster::new();
    let oldest = toaster.show(ToastOptions::new("oldest").duration(10_000)).unwrap();
    let middle = toaster.show(ToastOptions::new("middle").duration(200)).unwrap();
    let newest = toaster.show(ToastOptions::new("newest").duration(10_000)).unwrap();

    let spacing = toaster.layout().spacing;
    let height = |id| toaster.get(id).unwrap().height();
    let expected_oldest = height(middle) + height(newest) + 2.0 * spacing;
    assert_eq!(toaster.get(oldest).unwrap().offset(), expected_oldest);

    // Middle expires, fades and detaches; the oldest slides toward the edge.
    toaster.handle_message(&Message::Frame(t0), t0);
    toaster.handle_message(&Message::Frame(t0 + ms(200)), t0 + ms(200));
    assert_eq!(toaster.get(middle).unwrap().phase(), Phase::FadingOut);
    assert_eq!(toaster.get(oldest).unwrap().offset(), expected_oldest);

    let fade = toaster.layout().fade();
    toaster.handle_message(&Message::Frame(t0 + ms(210)), t0 + ms(210));
    toaster.handle_message(&Message::Frame(t0 + ms(210) + fade), t0 + ms(210) + fade);

    assert!(toaster.get(middle).is_none());
    let newest_height = toaster.get(newest).unwrap().height();
    assert_eq!(
        toaster.get(oldest).unwrap().offset(),
        newest_height + spacing
    );
}

#[test]
fn stale_frames_after_close_do_not_revive_a_toast() {
    let t0 = Instant::now();
    let mut toaster = Toaster::new();
    let id = toaster.show("closing").unwrap();
    toaster.on_frame(t0);

    assert!(toaster.remove(id));
    assert!(!toaster.get(id).unwrap().has_pending_frame());

    toaster.handle_message(&Message::PointerEntered(id), t0 + ms(5));
    toaster.handle_message(&Message::PointerLeft(id), t0 + ms(6));
    assert!(!toaster.get(id).unwrap().has_pending_frame());
}

#[test]
fn show_failure_leaves_no_toast_behind() {
    let mut toaster = Toaster::new();
    assert!(toaster.show(ToastOptions::new("")).is_none());
    assert!(toaster.is_empty());
    assert!(!toaster.is_animating());
}
