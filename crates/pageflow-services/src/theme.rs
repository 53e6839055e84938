//! Theme selection with pluggable persistence.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

/// Storage key under which the selected theme is persisted.
pub const THEME_STORAGE_KEY: &str = "ui-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    /// Follow the host's color-scheme preference.
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "system" => Some(Theme::System),
            _ => None,
        }
    }
}

/// Key-value persistence for the theme preference (the local-storage seam).
pub trait ThemePersistence {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&self, key: &str, value: &str);
}

/// Resolves the host's color-scheme preference for [`Theme::System`].
pub trait SystemThemeProbe {
    fn prefers_dark(&self) -> bool;
}

/// Owns the current theme and writes every change through to persistence.
pub struct ThemeProvider {
    storage: Rc<dyn ThemePersistence>,
    probe: Option<Rc<dyn SystemThemeProbe>>,
    storage_key: String,
    theme: Cell<Theme>,
}

impl ThemeProvider {
    pub fn new(
        storage: Rc<dyn ThemePersistence>,
        probe: Option<Rc<dyn SystemThemeProbe>>,
        default_theme: Theme,
    ) -> Self {
        Self::with_storage_key(storage, probe, default_theme, THEME_STORAGE_KEY)
    }

    pub fn with_storage_key(
        storage: Rc<dyn ThemePersistence>,
        probe: Option<Rc<dyn SystemThemeProbe>>,
        default_theme: Theme,
        storage_key: &str,
    ) -> Self {
        let theme = storage
            .load(storage_key)
            .and_then(|value| Theme::parse(&value))
            .unwrap_or(default_theme);
        Self {
            storage,
            probe,
            storage_key: storage_key.to_string(),
            theme: Cell::new(theme),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn set_theme(&self, theme: Theme) {
        debug!("theme set to {}", theme.as_str());
        self.storage.store(&self.storage_key, theme.as_str());
        self.theme.set(theme);
    }

    /// The header button behavior: dark becomes light, anything else
    /// becomes dark.
    pub fn toggle(&self) {
        let next = match self.theme.get() {
            Theme::Dark => Theme::Light,
            Theme::Light | Theme::System => Theme::Dark,
        };
        self.set_theme(next);
    }

    /// The concrete light/dark value the presentation layer should apply.
    /// `System` resolves through the probe, or light when none is wired.
    pub fn resolved(&self) -> Theme {
        match self.theme.get() {
            Theme::System => match &self.probe {
                Some(probe) if probe.prefers_dark() => Theme::Dark,
                _ => Theme::Light,
            },
            other => other,
        }
    }
}

/// Map-backed persistence for tests and headless hosts.
#[derive(Default)]
pub struct InMemoryPersistence {
    entries: RefCell<HashMap<String, String>>,
}

impl InMemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemePersistence for InMemoryPersistence {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
