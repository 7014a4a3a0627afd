// SPDX-License-Identifier: MPL-2.0
//! Demo window: pick a type and a corner, press the button, get a toast.
//!
//! Each press shows `Hello World!` under a numbered heading. The toaster's
//! overlay is stacked above the controls and its frame subscription drives
//! every countdown and fade.

mod message;

pub use message::{Flags, Message, HELP};

use crate::config::{self, paths};
use crate::toast::{Position, ToastOptions, ToastType};
use crate::toaster::Toaster;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ThemeMode;
use iced::widget::{button, pick_list, toggler, Column, Container, Row, Stack, Text};
use iced::{alignment, window, Element, Length, Subscription, Task, Theme};
use std::time::Instant;

/// Duration of demo toasts unless overridden on the command line.
pub const DEMO_DURATION_MS: u64 = 8000;

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;

#[derive(Debug)]
pub struct App {
    toaster: Toaster,
    kind: ToastType,
    position: Position,
    duration: u64,
    show_timer: bool,
    dismissable: bool,
    count: u32,
    theme_mode: ThemeMode,
}

impl Default for App {
    fn default() -> Self {
        Self {
            toaster: Toaster::new(),
            kind: ToastType::default(),
            position: Position::default(),
            duration: DEMO_DURATION_MS,
            show_timer: false,
            dismissable: false,
            count: 0,
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();

        let mut app = App {
            toaster: Toaster::with_config(&config),
            kind: flags.kind.unwrap_or(config.defaults.kind),
            position: flags.position.unwrap_or(config.defaults.position),
            duration: flags.duration.unwrap_or(DEMO_DURATION_MS),
            show_timer: flags.show_timer || config.defaults.show_timer,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        if let Some(warning) = config_warning {
            app.toaster.show(
                ToastOptions::new(warning)
                    .heading("Settings")
                    .kind(ToastType::Warning)
                    .position(app.position),
            );
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("PalmToast")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.toaster.subscription().map(Message::Toast)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TypeSelected(kind) => self.kind = kind,
            Message::PositionSelected(position) => self.position = position,
            Message::TimerToggled(enabled) => self.show_timer = enabled,
            Message::DismissableToggled(enabled) => self.dismissable = enabled,
            Message::ShowToast => {
                self.count += 1;
                self.toaster.show(
                    ToastOptions::new("Hello World!")
                        .heading(format!("Toast Heading {}", self.count))
                        .position(self.position)
                        .kind(self.kind)
                        .duration(self.duration)
                        .dismissable(self.dismissable)
                        .show_timer(self.show_timer),
                );
            }
            Message::Toast(message) => self.toaster.handle_message(&message, Instant::now()),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let labelled = |label: &'static str, control: Element<'static, Message>| {
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(
                    Text::new(label)
                        .size(typography::BODY)
                        .width(Length::Fixed(sizing::PICKER_WIDTH)),
                )
                .push(control)
        };

        let kind_picker = pick_list(ToastType::ALL, Some(self.kind), Message::TypeSelected)
            .padding(spacing::XS)
            .width(Length::Fixed(sizing::PICKER_WIDTH));
        let position_picker =
            pick_list(Position::ALL, Some(self.position), Message::PositionSelected)
                .padding(spacing::XS)
                .width(Length::Fixed(sizing::PICKER_WIDTH));

        let controls = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new("PalmToast").size(typography::TITLE_MD))
            .push(labelled("Toast type", kind_picker.into()))
            .push(labelled("Position", position_picker.into()))
            .push(labelled(
                "Timer bar",
                toggler(self.show_timer)
                    .on_toggle(Message::TimerToggled)
                    .into(),
            ))
            .push(labelled(
                "Dismissable",
                toggler(self.dismissable)
                    .on_toggle(Message::DismissableToggled)
                    .into(),
            ))
            .push(
                button(Text::new("Show toast").size(typography::BODY))
                    .padding(spacing::XS)
                    .on_press(Message::ShowToast),
            );

        let page = Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::LG);

        Stack::new()
            .push(page)
            .push(self.toaster.view().map(Message::Toast))
            .into()
    }
}
