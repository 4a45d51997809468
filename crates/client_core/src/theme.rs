//! Process-wide theme preference. One store per running page, explicitly
//! constructed and handed to the view tree; persistence goes through an
//! injected key-value store so the GUI can back it with eframe storage and
//! tests can back it with a map.

use std::collections::HashMap;

use shared::domain::{EffectiveTheme, ThemePreference};
use tracing::debug;

/// Storage key carried over from the original site.
pub const THEME_STORAGE_KEY: &str = "soulivo-theme";

/// Key-value persistence for user preferences. Implementations swallow
/// their own I/O failures: `get` answers `None` for missing-or-unreadable,
/// `set` is best effort. A broken store degrades the theme to
/// in-memory-only behavior and is never surfaced to the user.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

pub struct ThemeStore {
    preference: ThemePreference,
    system_scheme: EffectiveTheme,
    store: Box<dyn PreferenceStore + Send>,
}

impl ThemeStore {
    /// New visitors and unreadable storage both land on dark.
    pub const DEFAULT_PREFERENCE: ThemePreference = ThemePreference::Dark;

    pub fn new(store: Box<dyn PreferenceStore + Send>) -> Self {
        let preference = store
            .get(THEME_STORAGE_KEY)
            .and_then(|raw| ThemePreference::parse(&raw))
            .unwrap_or(Self::DEFAULT_PREFERENCE);
        Self {
            preference,
            // Until the embedder reports an OS scheme, resolve `system`
            // against the same default the rest of the page uses.
            system_scheme: EffectiveTheme::Dark,
            store,
        }
    }

    pub fn theme(&self) -> ThemePreference {
        self.preference
    }

    /// Updates the in-memory preference and persists it. Storage failures
    /// stay inside the injected store; the in-memory state always wins.
    pub fn set_theme(&mut self, preference: ThemePreference) {
        if self.preference == preference {
            return;
        }
        self.preference = preference;
        self.store.set(THEME_STORAGE_KEY, preference.as_str());
        debug!(preference = preference.as_str(), "theme preference changed");
    }

    /// Feed the latest OS color-scheme observation. The embedder owns the
    /// actual OS subscription (and releases it with the window); the store
    /// just tracks the most recent value so `system` resolves live.
    pub fn observe_system_scheme(&mut self, scheme: EffectiveTheme) {
        self.system_scheme = scheme;
    }

    pub fn effective(&self) -> EffectiveTheme {
        match self.preference {
            ThemePreference::Light => EffectiveTheme::Light,
            ThemePreference::Dark => EffectiveTheme::Dark,
            ThemePreference::System => self.system_scheme,
        }
    }
}
