// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the session state machine, localization,
//! the resolved platform capabilities, and the notification manager, and
//! translates messages into side effects like dialog tasks or the export
//! pipeline. Policy decisions (busy serialization, one-shot permission
//! probe, splash timing) stay close to the main update loop so user-facing
//! behavior is easy to audit.

mod message;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::capability::{self, Capabilities, PermissionStatus};
use crate::config;
use crate::i18n::fluent::I18n;
use crate::session::Session;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// How long the startup splash stays on screen.
const SPLASH_DURATION: Duration = Duration::from_secs(5);

/// A picked photo decoded into a display handle.
#[derive(Debug, Clone)]
pub struct LoadedPhoto {
    pub path: PathBuf,
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Root Iced application state that bridges the session, localization, and
/// the resolved platform capabilities.
pub struct App {
    pub i18n: I18n,
    session: Session,
    photo: Option<LoadedPhoto>,
    capabilities: Capabilities,
    config: config::Config,
    theme_mode: ThemeMode,
    splash_visible: bool,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.session.mode())
            .field("has_photo", &self.photo.is_some())
            .field("splash_visible", &self.splash_visible)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            session: Session::new(),
            photo: None,
            capabilities: capability::resolve(),
            config: config::Config::default(),
            theme_mode: ThemeMode::System,
            splash_visible: true,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the startup tasks: the
    /// splash timer, the one-shot permission probe, and optionally the
    /// preload of a photo passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = match config::load() {
            Ok(config) => (config, false),
            Err(_) => (config::Config::default(), true),
        };
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme_mode: config.theme_mode,
            config,
            ..Self::default()
        };

        if config_warning {
            app.notifications.push(notifications::Notification::warning(
                "notification-config-load-warning",
            ));
        }

        // A valid --lang override becomes the configured language.
        persistence::persist_cli_language(&mut app.i18n, &mut app.config, flags.lang.as_deref());

        let mut tasks = vec![Task::perform(tokio::time::sleep(SPLASH_DURATION), |()| {
            Message::SplashElapsed
        })];

        // Probe library access exactly once per unknown state.
        if app.capabilities.permissions.status() == PermissionStatus::Unknown {
            let gate = app.capabilities.permissions.clone();
            tasks.push(Task::perform(
                async move { gate.request() },
                Message::PermissionChecked,
            ));
        }

        if let Some(path) = flags.file_path {
            let path = PathBuf::from(path);
            tasks.push(Task::perform(
                async move { update::load_photo(path) },
                Message::PhotoLoaded,
            ));
        }

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => {
                if self.theme_mode.is_dark() {
                    Theme::Dark
                } else {
                    Theme::Light
                }
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            session: &mut self.session,
            photo: &mut self.photo,
            notifications: &mut self.notifications,
            capabilities: &self.capabilities,
            config: &self.config,
        };

        match message {
            Message::SplashElapsed => {
                self.splash_visible = false;
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
            Message::PickImage => update::handle_pick_image(&mut ctx),
            Message::PickDialogResult(path) => update::handle_pick_dialog_result(&mut ctx, path),
            Message::PhotoLoaded(result) => update::handle_photo_loaded(&mut ctx, result),
            Message::UseThisPhoto => {
                self.session.use_current_photo();
                Task::none()
            }
            Message::Reset => {
                self.session.reset();
                Task::none()
            }
            Message::AddSticker => {
                self.session.open_picker();
                Task::none()
            }
            Message::Picker(picker_message) => {
                update::handle_picker_message(&mut ctx, picker_message)
            }
            Message::ExportImage => update::handle_export_image(&mut ctx),
            Message::ExportCompleted(result) => update::handle_export_completed(&mut ctx, result),
            Message::PermissionChecked(status) => {
                if status == PermissionStatus::Denied {
                    self.notifications.push(notifications::Notification::warning(
                        "notification-permission-denied",
                    ));
                }
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
            photo: self.photo.as_ref(),
            notifications: &self.notifications,
            splash_visible: self.splash_visible,
        })
    }
}
