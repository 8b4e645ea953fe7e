use log::debug;
use std::sync::RwLock;

use crate::errors::Result;
use crate::settings::{Settings, SettingsUpdate, Theme};

// Define the trait for SettingsService
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self) -> Result<Settings>;

    fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<()>;

    fn get_theme(&self) -> Result<Theme>;

    /// Flip between the light and dark theme, returning the new value.
    fn toggle_theme(&self) -> Result<Theme>;
}

/// In-memory settings store. Preferences live for the session only; nothing
/// is persisted between runs.
pub struct SettingsService {
    settings: RwLock<Settings>,
}

impl SettingsService {
    pub fn new(initial: Settings) -> Self {
        SettingsService {
            settings: RwLock::new(initial),
        }
    }
}

impl Default for SettingsService {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

// Implement the trait for SettingsService
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<Settings> {
        Ok(self.settings.read().unwrap().clone())
    }

    fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<()> {
        let mut guard = self.settings.write().unwrap();
        guard.theme = new_settings.theme;
        Ok(())
    }

    fn get_theme(&self) -> Result<Theme> {
        Ok(self.settings.read().unwrap().theme)
    }

    fn toggle_theme(&self) -> Result<Theme> {
        let mut guard = self.settings.write().unwrap();
        guard.theme = guard.theme.toggled();
        debug!("Theme switched to {:?}", guard.theme);
        Ok(guard.theme)
    }
}
