//! User preferences, persisted key-by-key and applied to the presentation
//! through CSS custom properties.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::warn;

use crate::storage::KeyValueStore;
use crate::types::{Density, ThemeMode};

pub const THEME_KEY: &str = "theme";
pub const FONT_SIZE_KEY: &str = "fontSize";
pub const DENSITY_KEY: &str = "density";
pub const NOTIFICATIONS_KEY: &str = "notifications";
pub const PRIVACY_KEY: &str = "privacy";
pub const TUTORIAL_SEEN_KEY: &str = "hasSeenTutorial";

pub const MIN_FONT_LEVEL: u8 = 1;
pub const MAX_FONT_LEVEL: u8 = 5;

/// Notification toggles offered in the settings view.
pub const NOTIFICATION_OPTIONS: [&str; 3] = [
    "Atualizações de agentes",
    "Resumo semanal",
    "Novidades da plataforma",
];

/// Privacy toggles offered in the settings view.
pub const PRIVACY_OPTIONS: [&str; 2] = ["Salvar histórico de conversas", "Compartilhar dados de uso"];

/// Base font size in px for a 1..=5 level: 14, 16, 18, 20, 22.
pub fn font_size_px(level: u8) -> u32 {
    let level = level.clamp(MIN_FONT_LEVEL, MAX_FONT_LEVEL) as u32;
    14 + (level - 1) * 2
}

#[derive(Clone)]
pub struct Preferences {
    store: Arc<dyn KeyValueStore>,
}

impl Preferences {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn theme(&self) -> ThemeMode {
        self.store
            .get(THEME_KEY)
            .and_then(|v| ThemeMode::parse(&v))
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: ThemeMode) {
        self.persist(THEME_KEY, theme.as_str());
    }

    pub fn font_size_level(&self) -> u8 {
        self.store
            .get(FONT_SIZE_KEY)
            .and_then(|v| v.parse::<u8>().ok())
            .map(|v| v.clamp(MIN_FONT_LEVEL, MAX_FONT_LEVEL))
            .unwrap_or(MIN_FONT_LEVEL)
    }

    pub fn set_font_size_level(&self, level: u8) {
        let level = level.clamp(MIN_FONT_LEVEL, MAX_FONT_LEVEL);
        self.persist(FONT_SIZE_KEY, &level.to_string());
    }

    pub fn density(&self) -> Density {
        self.store
            .get(DENSITY_KEY)
            .and_then(|v| Density::parse(&v))
            .unwrap_or_default()
    }

    pub fn set_density(&self, density: Density) {
        self.persist(DENSITY_KEY, density.as_str());
    }

    pub fn notification_flags(&self) -> BTreeMap<String, bool> {
        self.flag_map(NOTIFICATIONS_KEY)
    }

    pub fn set_notification_flag(&self, name: &str, enabled: bool) {
        self.set_flag(NOTIFICATIONS_KEY, name, enabled);
    }

    pub fn privacy_flags(&self) -> BTreeMap<String, bool> {
        self.flag_map(PRIVACY_KEY)
    }

    pub fn set_privacy_flag(&self, name: &str, enabled: bool) {
        self.set_flag(PRIVACY_KEY, name, enabled);
    }

    pub fn has_seen_tutorial(&self) -> bool {
        self.store
            .get(TUTORIAL_SEEN_KEY)
            .map(|v| v == "true")
            .unwrap_or(false)
    }

    pub fn set_tutorial_seen(&self) {
        self.persist(TUTORIAL_SEEN_KEY, "true");
    }

    fn flag_map(&self, key: &str) -> BTreeMap<String, bool> {
        self.store
            .get(key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn set_flag(&self, key: &str, name: &str, enabled: bool) {
        let mut flags = self.flag_map(key);
        flags.insert(name.to_string(), enabled);
        match serde_json::to_string(&flags) {
            Ok(raw) => self.persist(key, &raw),
            Err(err) => warn!(%err, key, "failed to encode preference flags"),
        }
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            warn!(%err, key, "failed to persist preference");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn prefs() -> Preferences {
        Preferences::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn font_size_levels_map_to_px() {
        assert_eq!(font_size_px(1), 14);
        assert_eq!(font_size_px(2), 16);
        assert_eq!(font_size_px(3), 18);
        assert_eq!(font_size_px(4), 20);
        assert_eq!(font_size_px(5), 22);
    }

    #[test]
    fn font_size_level_is_clamped() {
        let prefs = prefs();
        prefs.set_font_size_level(0);
        assert_eq!(prefs.font_size_level(), 1);
        prefs.set_font_size_level(9);
        assert_eq!(prefs.font_size_level(), 5);
        assert_eq!(font_size_px(0), 14);
        assert_eq!(font_size_px(200), 22);
    }

    #[test]
    fn theme_defaults_to_light_and_roundtrips() {
        let prefs = prefs();
        assert_eq!(prefs.theme(), ThemeMode::Light);
        prefs.set_theme(ThemeMode::System);
        assert_eq!(prefs.theme(), ThemeMode::System);
    }

    #[test]
    fn density_roundtrips_with_multiplier() {
        let prefs = prefs();
        assert_eq!(prefs.density(), Density::Normal);
        prefs.set_density(Density::Comfortable);
        assert_eq!(prefs.density(), Density::Comfortable);
        assert_eq!(Density::Compact.spacing_multiplier(), 0.8);
        assert_eq!(Density::Normal.spacing_multiplier(), 1.0);
        assert_eq!(Density::Comfortable.spacing_multiplier(), 1.2);
    }

    #[test]
    fn notification_flags_persist_independently() {
        let prefs = prefs();
        prefs.set_notification_flag("Resumo semanal", true);
        prefs.set_notification_flag("Novidades da plataforma", false);
        let flags = prefs.notification_flags();
        assert_eq!(flags.get("Resumo semanal"), Some(&true));
        assert_eq!(flags.get("Novidades da plataforma"), Some(&false));
        assert_eq!(flags.get("Atualizações de agentes"), None);
    }

    #[test]
    fn privacy_flags_do_not_leak_into_notifications() {
        let prefs = prefs();
        prefs.set_privacy_flag("Compartilhar dados de uso", false);
        assert!(prefs.notification_flags().is_empty());
        assert_eq!(
            prefs.privacy_flags().get("Compartilhar dados de uso"),
            Some(&false)
        );
    }

    #[test]
    fn tutorial_flag_is_sticky() {
        let prefs = prefs();
        assert!(!prefs.has_seen_tutorial());
        prefs.set_tutorial_seen();
        assert!(prefs.has_seen_tutorial());
    }
}
