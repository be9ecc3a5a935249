// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the date controls, the
//! gallery and the detail modal.
//!
//! The `App` struct wires the components together and translates their
//! events into side effects: APOD requests, thumbnail downloads, and modal
//! transitions. Every asynchronous result comes back as a [`Message`] and is
//! applied in `update`, so UI state is only ever touched from one place.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::apod::{ApiEndpoint, GalleryFetcher, ReqwestTransport, RequestTracker};
use crate::config::{self, Config};
use crate::domain::facts::FactPool;
use crate::i18n::fluent::I18n;
use crate::ui::{date_range, fact, gallery, modal};
use chrono::{Local, NaiveDate};
use iced::{window, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 520.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Resolved once at startup; `System` is not re-detected per frame.
    theme: Theme,
    date_range: date_range::State,
    fact: fact::State,
    gallery: gallery::State,
    modal: modal::State,
    fetcher: GalleryFetcher<ReqwestTransport>,
    requests: RequestTracker,
    /// i18n key of a startup warning shown above the controls.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("gallery_items", &self.gallery.items().len())
            .field("modal_open", &self.modal.is_open())
            .finish()
    }
}

/// Everything `App::new` needs, prepared before the event loop starts so
/// that setup failures surface as errors from [`run`].
#[derive(Debug, Clone)]
struct Bootstrap {
    flags: Flags,
    config: Config,
    config_warning: Option<String>,
    fetcher: GalleryFetcher<ReqwestTransport>,
}

impl Bootstrap {
    fn prepare(flags: Flags) -> crate::error::Result<Self> {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();

        let api_key = config.resolve_api_key(flags.api_key.as_deref());
        if api_key == config::DEMO_API_KEY {
            tracing::info!("no personal API key configured, using the rate-limited demo key");
        }
        let endpoint = ApiEndpoint::new(&config.api.base_url, api_key)?;
        let transport = ReqwestTransport::new(config.request_timeout())?;
        tracing::debug!(?endpoint, timeout = ?config.request_timeout(), "APOD client ready");

        Ok(Self {
            flags,
            config,
            config_warning,
            fetcher: GalleryFetcher::new(transport, endpoint),
        })
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> crate::error::Result<()> {
    let bootstrap = Bootstrap::prepare(flags)?;

    // iced requires a `Fn` boot function.
    let boot = move || App::new(bootstrap.clone(), Local::now().date_naive());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()?;
    Ok(())
}

impl App {
    /// Initializes the components for `today`: the date controls get their
    /// default window and a fact is drawn.
    fn new(bootstrap: Bootstrap, today: NaiveDate) -> (Self, Task<Message>) {
        let Bootstrap {
            flags,
            config,
            config_warning,
            fetcher,
        } = bootstrap;

        let i18n = I18n::new(flags.lang, &config);
        if let Some(key) = &config_warning {
            tracing::warn!(message = %i18n.tr(key), "configuration warning");
        }

        let app = App {
            i18n,
            theme: config.general.theme_mode.to_iced_theme(),
            date_range: date_range::configure(today),
            fact: fact::State::new(FactPool::builtin(), &mut rand::thread_rng()),
            gallery: gallery::State::default(),
            modal: modal::State::default(),
            fetcher,
            requests: RequestTracker::new(config.debounce()),
            config_warning,
        };
        tracing::info!(
            locale = %app.i18n.current_locale(),
            start = app.date_range.text(date_range::Endpoint::Start),
            end = app.date_range.text(date_range::Endpoint::End),
            "gallery ready"
        );

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_escape_subscription(self.modal.is_open()),
            subscription::create_tick_subscription(self.gallery.is_loading()),
        ])
    }
}
