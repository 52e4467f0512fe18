use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::greeting::UnknownVariant;

/// Storage key the front end uses for the settings blob.
pub const SETTINGS_KEY: &str = "accessibilitySettings";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessibilitySettings {
    pub reduced_motion: bool,
    pub high_contrast: bool,
    pub font_size: FontSize,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            high_contrast: false,
            font_size: FontSize::Medium,
        }
    }
}

impl AccessibilitySettings {
    /// CSS classes the page body carries for these settings.
    pub fn body_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::with_capacity(3);
        if self.reduced_motion {
            classes.push("reduce-motion");
        }
        if self.high_contrast {
            classes.push("high-contrast");
        }
        if let Some(class) = self.font_size.body_class() {
            classes.push(class);
        }
        classes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl FontSize {
    pub const ALL: [FontSize; 4] = [
        FontSize::Small,
        FontSize::Medium,
        FontSize::Large,
        FontSize::ExtraLarge,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
            FontSize::ExtraLarge => "extra-large",
        }
    }

    /// Medium is the stylesheet default and carries no class.
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            FontSize::Small => Some("font-size-small"),
            FontSize::Medium => None,
            FontSize::Large => Some("font-size-large"),
            FontSize::ExtraLarge => Some("font-size-extra-large"),
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontSize {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontSize::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("font size", s))
    }
}

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "settings io error: {err}"),
            SettingsError::Json(err) => write!(f, "settings json error: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(value: std::io::Error) -> Self {
        SettingsError::Io(value)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(value: serde_json::Error) -> Self {
        SettingsError::Json(value)
    }
}

/// String key-value storage with `localStorage` semantics.
pub trait SettingsStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), SettingsError>;
    fn remove_item(&self, key: &str) -> Result<(), SettingsError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), SettingsError> {
        self.items.write().remove(key);
        Ok(())
    }
}

/// A JSON object on disk holding every key. The whole file is rewritten on
/// each change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let items = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), keys = items.len(), "opened settings store");
        Ok(Self {
            path,
            items: RwLock::new(items),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, items: &BTreeMap<String, String>) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let bytes = serde_json::to_vec_pretty(items)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl SettingsStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut guard = self.items.write();
        guard.insert(key.to_string(), value.to_string());
        self.flush(&guard)
    }

    fn remove_item(&self, key: &str) -> Result<(), SettingsError> {
        let mut guard = self.items.write();
        if guard.remove(key).is_some() {
            self.flush(&guard)?;
        }
        Ok(())
    }
}

/// Reads settings from the store, applying each stored field over the
/// defaults on its own. Fields that fail to parse keep their default; a blob
/// that is not a JSON object is ignored.
pub fn load_settings(store: &dyn SettingsStore) -> AccessibilitySettings {
    let mut settings = AccessibilitySettings::default();
    let Some(raw) = store.get_item(SETTINGS_KEY) else {
        return settings;
    };
    let fields = match serde_json::from_str::<Map<String, Value>>(&raw) {
        Ok(fields) => fields,
        Err(err) => {
            warn!(error = %err, "could not load accessibility settings");
            return settings;
        }
    };
    for (key, value) in fields {
        match key.as_str() {
            "reducedMotion" => merge_field(&key, value, &mut settings.reduced_motion),
            "highContrast" => merge_field(&key, value, &mut settings.high_contrast),
            "fontSize" => merge_field(&key, value, &mut settings.font_size),
            _ => debug!(field = %key, "ignoring unknown settings field"),
        }
    }
    settings
}

fn merge_field<T: DeserializeOwned>(key: &str, value: Value, slot: &mut T) {
    match serde_json::from_value(value) {
        Ok(parsed) => *slot = parsed,
        Err(err) => warn!(field = key, error = %err, "skipping invalid settings field"),
    }
}

pub fn save_settings(
    store: &dyn SettingsStore,
    settings: &AccessibilitySettings,
) -> Result<(), SettingsError> {
    let blob = serde_json::to_string(settings)?;
    store.set_item(SETTINGS_KEY, &blob)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_front_end_field_names() {
        let settings = AccessibilitySettings {
            reduced_motion: true,
            high_contrast: false,
            font_size: FontSize::ExtraLarge,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(
            json,
            r#"{"reducedMotion":true,"highContrast":false,"fontSize":"extra-large"}"#
        );
    }

    #[test]
    fn partial_blob_merges_over_defaults() {
        let store = MemoryStore::new();
        store
            .set_item(SETTINGS_KEY, r#"{"highContrast":true}"#)
            .unwrap();
        let settings = load_settings(&store);
        assert!(settings.high_contrast);
        assert!(!settings.reduced_motion);
        assert_eq!(settings.font_size, FontSize::Medium);
    }

    #[test]
    fn invalid_field_keeps_the_valid_ones() {
        let store = MemoryStore::new();
        store
            .set_item(
                SETTINGS_KEY,
                r#"{"highContrast":true,"reducedMotion":true,"fontSize":"huge","theme":"dark"}"#,
            )
            .unwrap();
        let settings = load_settings(&store);
        assert!(settings.high_contrast);
        assert!(settings.reduced_motion);
        assert_eq!(settings.font_size, FontSize::Medium);
    }

    #[test]
    fn corrupt_blob_falls_back_to_defaults() {
        let store = MemoryStore::new();
        store.set_item(SETTINGS_KEY, "{not json").unwrap();
        assert_eq!(load_settings(&store), AccessibilitySettings::default());
    }

    #[test]
    fn body_classes_follow_settings() {
        let mut settings = AccessibilitySettings::default();
        assert!(settings.body_classes().is_empty());
        settings.reduced_motion = true;
        settings.font_size = FontSize::Large;
        assert_eq!(
            settings.body_classes(),
            vec!["reduce-motion", "font-size-large"]
        );
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        {
            let store = FileStore::open(&path).unwrap();
            let settings = AccessibilitySettings {
                reduced_motion: true,
                ..Default::default()
            };
            save_settings(&store, &settings).unwrap();
        }
        let reopened = FileStore::open(&path).unwrap();
        assert!(load_settings(&reopened).reduced_motion);

        reopened.remove_item(SETTINGS_KEY).unwrap();
        let again = FileStore::open(&path).unwrap();
        assert_eq!(again.get_item(SETTINGS_KEY), None);
    }

    #[test]
    fn font_size_parses_kebab_case() {
        assert_eq!("extra-large".parse(), Ok(FontSize::ExtraLarge));
        assert!("huge".parse::<FontSize>().is_err());
    }
}
