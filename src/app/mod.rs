// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the gallery and its lightbox.
//!
//! The `App` struct owns the [`Navigator`] and applies the effects it returns:
//! starting image loads, swapping lightbox contents and hiding the overlay.
//! Raw input (keys, touches, backdrop presses) is routed through
//! [`crate::gallery::input`] so the open/closed gating lives in one place.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, ThemeMode};
use crate::error::DataLoadError;
use crate::gallery::{memory, BackdropTap, LoadTracker, Navigator, SwipeTracker};
use crate::i18n::fluent::I18n;
use crate::ui::{lightbox, loading};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    navigator: Navigator,
    /// Present exactly while the navigator is open.
    lightbox: Option<lightbox::State>,
    loads: LoadTracker,
    loading: loading::State,
    swipe: SwipeTracker,
    backdrop: BackdropTap,
    image_root: Option<PathBuf>,
    reveal_delay: Duration,
    tiles_per_row: usize,
    theme_mode: ThemeMode,
    /// i18n keys of startup problems shown above the gallery.
    notices: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("items", &self.navigator.items().len())
            .field("current_index", &self.navigator.current_index())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
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
            navigator: Navigator::default(),
            lightbox: None,
            loads: LoadTracker::default(),
            loading: loading::State::default(),
            swipe: SwipeTracker::default(),
            backdrop: BackdropTap::default(),
            image_root: None,
            reveal_delay: Duration::from_millis(config::DEFAULT_REVEAL_DELAY_MS),
            tiles_per_row: config::DEFAULT_TILES_PER_ROW as usize,
            theme_mode: ThemeMode::default(),
            notices: Vec::new(),
        }
    }
}

impl App {
    /// Loads configuration and memories. Never fails: unusable data falls
    /// back to placeholder memories.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        (Self::from_config(flags, &config, config_warning), Task::none())
    }

    fn from_config(flags: Flags, config: &config::Config, config_warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang.clone(), config);

        let memories_path = flags
            .memories_path
            .map(PathBuf::from)
            .or_else(|| config.gallery.memories_path.clone());
        let loaded = memory::load_or_fallback(memories_path.as_deref());

        // Relative references are resolved like a page would: next to the document.
        let image_root = flags
            .image_root
            .map(PathBuf::from)
            .or_else(|| config.gallery.image_root.clone())
            .or_else(|| {
                memories_path
                    .as_deref()
                    .and_then(|path| path.parent())
                    .map(|parent| parent.to_path_buf())
            });

        let mut notices = Vec::new();
        notices.extend(config_warning);
        match &loaded.recovered_from {
            // Nothing configured is the normal demo mode, not a problem.
            Some(DataLoadError::Missing) if memories_path.is_none() => {}
            Some(err) => notices.push(err.i18n_key().to_string()),
            None => {}
        }

        tracing::info!(
            memories = loaded.sequence.len(),
            fallback = loaded.recovered_from.is_some(),
            "gallery ready"
        );

        App {
            i18n,
            navigator: Navigator::load(loaded.sequence),
            image_root,
            reveal_delay: config.gallery.reveal_delay(),
            tiles_per_row: config.gallery.tiles_per_row(),
            theme_mode: config.general.theme_mode,
            notices,
            ..Self::default()
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.navigator.current_item() {
            Some(item) => format!("{} - {app_name}", item.title),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark | ThemeMode::System => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.loading.is_loading());
        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tiles(tiles_message) => update::handle_tiles_message(self, tiles_message),
            Message::Lightbox(lightbox_message) => {
                update::handle_lightbox_message(self, lightbox_message)
            }
            Message::KeyPressed(key) => update::handle_key(self, key),
            Message::FingerPressed { x } => {
                if self.navigator.is_open() {
                    self.swipe.press(x);
                }
                Task::none()
            }
            Message::FingerLifted { x } => update::handle_finger_lifted(self, x),
            Message::FingerLost => {
                self.swipe.cancel();
                self.backdrop.cancel();
                Task::none()
            }
            Message::ImageLoaded { ticket, result } => {
                update::handle_image_loaded(self, ticket, result);
                Task::none()
            }
            Message::Tick(_) => {
                if self.loading.handle(loading::Message::SpinnerTick)
                    == loading::Effect::LoadingTimedOut
                {
                    tracing::warn!(
                        index = ?self.navigator.current_index(),
                        "lightbox image is slow to load"
                    );
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            navigator: &self.navigator,
            lightbox: self.lightbox.as_ref(),
            loading: &self.loading,
            tiles_per_row: self.tiles_per_row,
            notices: &self.notices,
        })
    }
}
