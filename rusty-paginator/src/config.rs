//! Paginator configuration: button appearance, custom ID namespace and expiry timing.

use std::time::Duration;

use twilight_model::channel::message::{EmojiReactionType, component::ButtonStyle};

use crate::custom_id::Action;

/// Default namespace tag for paginator custom IDs.
pub const DEFAULT_CUSTOM_ID_PREFIX: &str = "paginator";
/// Default embed color for paginator pages.
pub const DEFAULT_EMBED_COLOR: u32 = 0x4c_50_c1;
/// Default denial shown to users pressing someone else's paginator.
pub const DEFAULT_NOT_OWNER_MESSAGE: &str =
    "You can't interact with this paginator because it's not yours.";
/// Default idle timeout for paginator sessions.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
/// Default interval between expiry sweeps.
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 30;

/// Appearance of one paginator button.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ButtonOptions {
    pub emoji: Option<EmojiReactionType>,
    pub label: Option<String>,
    pub style: ButtonStyle,
}

impl ButtonOptions {
    /// Button showing a unicode emoji.
    pub fn emoji(name: &str, style: ButtonStyle) -> Self {
        Self {
            emoji: Some(EmojiReactionType::Unicode {
                name: name.to_owned(),
            }),
            label: None,
            style,
        }
    }

    /// Button showing a text label.
    pub fn label(label: impl Into<String>, style: ButtonStyle) -> Self {
        Self {
            emoji: None,
            label: Some(label.into()),
            style,
        }
    }

    /// Add a text label next to the emoji.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Per-action button configuration. `None` omits the button from the row.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ButtonsConfig {
    pub first: Option<ButtonOptions>,
    pub back: Option<ButtonOptions>,
    pub stop: Option<ButtonOptions>,
    pub next: Option<ButtonOptions>,
    pub last: Option<ButtonOptions>,
}

impl ButtonsConfig {
    /// Configuration with every button omitted.
    pub const fn none() -> Self {
        Self {
            first: None,
            back: None,
            stop: None,
            next: None,
            last: None,
        }
    }

    pub fn get(&self, action: Action) -> Option<&ButtonOptions> {
        match action {
            Action::First => self.first.as_ref(),
            Action::Back => self.back.as_ref(),
            Action::Stop => self.stop.as_ref(),
            Action::Next => self.next.as_ref(),
            Action::Last => self.last.as_ref(),
        }
    }
}

impl Default for ButtonsConfig {
    fn default() -> Self {
        Self {
            first: Some(ButtonOptions::emoji("⏮", ButtonStyle::Primary)),
            back: Some(ButtonOptions::emoji("◀", ButtonStyle::Primary)),
            stop: Some(ButtonOptions::emoji("🗑", ButtonStyle::Danger)),
            next: Some(ButtonOptions::emoji("▶", ButtonStyle::Primary)),
            last: Some(ButtonOptions::emoji("⏩", ButtonStyle::Primary)),
        }
    }
}

/// Settings shared by every session of one [`PaginatorManager`](crate::PaginatorManager).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaginatorConfig {
    pub buttons: ButtonsConfig,
    /// First custom ID segment; interactions with another prefix are ignored.
    pub custom_id_prefix: String,
    pub embed_color: u32,
    /// Ephemeral reply sent when a non-owner presses a button.
    pub not_owner_message: String,
    /// Idle time after which a session is evicted.
    pub timeout: Duration,
    /// Interval between expiry sweeps.
    pub cleanup_interval: Duration,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            buttons: ButtonsConfig::default(),
            custom_id_prefix: DEFAULT_CUSTOM_ID_PREFIX.to_owned(),
            embed_color: DEFAULT_EMBED_COLOR,
            not_owner_message: DEFAULT_NOT_OWNER_MESSAGE.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_SECS),
        }
    }
}

impl PaginatorConfig {
    pub fn with_buttons(mut self, buttons: ButtonsConfig) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn with_custom_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.custom_id_prefix = prefix.into();
        self
    }

    pub fn with_embed_color(mut self, color: u32) -> Self {
        self.embed_color = color;
        self
    }

    pub fn with_not_owner_message(mut self, message: impl Into<String>) -> Self {
        self.not_owner_message = message.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cleanup_interval(mut self, interval: Duration) -> Self {
        self.cleanup_interval = interval;
        self
    }
}
