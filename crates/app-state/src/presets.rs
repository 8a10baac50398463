//! Named override presets
//!
//! Presets live in their own blob (`theme-presets`), separate from the main
//! theme-store blob, as a JSON array.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storage::{JsonStorageExt, StorageAdapter};
use theme_core::ThemeOverrides;
use tracing::{debug, warn};
use uuid::Uuid;

/// Storage key of the preset list
pub const PRESETS_KEY: &str = "theme-presets";

/// A named, saved override set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    /// Unique id
    pub id: String,
    /// Display name
    pub name: String,
    /// Saved overrides
    pub overrides: ThemeOverrides,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Style the overrides were captured against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_id: Option<String>,
}

impl Preset {
    /// Create a preset with a fresh id and the current time
    pub fn new(name: impl Into<String>, overrides: ThemeOverrides, style_id: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            overrides,
            created_at: Utc::now(),
            style_id,
        }
    }
}

/// CRUD over the preset blob
pub struct PresetStore {
    storage: Arc<dyn StorageAdapter>,
}

impl PresetStore {
    /// Create a preset store over a storage backend
    pub fn new(storage: Arc<dyn StorageAdapter>) -> Self {
        Self { storage }
    }

    /// All presets, oldest first
    ///
    /// A missing or malformed blob reads as an empty list.
    pub fn list(&self) -> Vec<Preset> {
        match self.storage.load_json::<Vec<Preset>>(PRESETS_KEY) {
            Ok(presets) => presets.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Failed to read presets, treating as empty");
                Vec::new()
            }
        }
    }

    /// Look up a preset by id
    pub fn get(&self, id: &str) -> Option<Preset> {
        self.list().into_iter().find(|preset| preset.id == id)
    }

    /// Save the given overrides as a new preset
    pub fn save_preset(
        &self,
        name: impl Into<String>,
        overrides: ThemeOverrides,
        style_id: Option<String>,
    ) -> Preset {
        let preset = Preset::new(name, overrides, style_id);
        let mut presets = self.list();
        presets.push(preset.clone());
        self.write(&presets);
        debug!(id = %preset.id, name = %preset.name, "Saved preset");
        preset
    }

    /// Rename a preset; false when the id is unknown
    pub fn rename(&self, id: &str, name: impl Into<String>) -> bool {
        let mut presets = self.list();
        let Some(preset) = presets.iter_mut().find(|preset| preset.id == id) else {
            return false;
        };
        preset.name = name.into();
        self.write(&presets);
        true
    }

    /// Delete a preset; false when the id is unknown
    pub fn delete(&self, id: &str) -> bool {
        let mut presets = self.list();
        let before = presets.len();
        presets.retain(|preset| preset.id != id);
        if presets.len() == before {
            return false;
        }
        self.write(&presets);
        debug!(id, "Deleted preset");
        true
    }

    fn write(&self, presets: &[Preset]) {
        if let Err(e) = self.storage.save_json(PRESETS_KEY, presets) {
            warn!(error = %e, "Failed to persist presets");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::MemoryStore;
    use theme_core::ColorKey;

    fn store() -> (Arc<MemoryStore>, PresetStore) {
        let backend = Arc::new(MemoryStore::new());
        let presets = PresetStore::new(backend.clone());
        (backend, presets)
    }

    #[test]
    fn test_empty_list() {
        let (_, presets) = store();
        assert!(presets.list().is_empty());
        assert!(presets.get("nope").is_none());
    }

    #[test]
    fn test_save_and_get() {
        let (_, presets) = store();
        let overrides = ThemeOverrides::new().with_color(ColorKey::Primary, "0 100% 50%");

        let saved = presets.save_preset("Red", overrides.clone(), Some("cupertino".to_string()));
        assert_eq!(saved.name, "Red");
        assert!(Uuid::parse_str(&saved.id).is_ok());

        let loaded = presets.get(&saved.id).unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(loaded.overrides, overrides);
        assert_eq!(presets.list().len(), 1);
    }

    #[test]
    fn test_rename_and_delete() {
        let (_, presets) = store();
        let a = presets.save_preset("A", ThemeOverrides::default(), None);
        let b = presets.save_preset("B", ThemeOverrides::default(), None);

        assert!(presets.rename(&a.id, "Renamed"));
        assert!(!presets.rename("missing", "X"));
        assert_eq!(presets.get(&a.id).unwrap().name, "Renamed");

        assert!(presets.delete(&a.id));
        assert!(!presets.delete(&a.id));
        let remaining: Vec<_> = presets.list().into_iter().map(|p| p.id).collect();
        assert_eq!(remaining, vec![b.id]);
    }

    #[test]
    fn test_blob_format() {
        let (backend, presets) = store();
        presets.save_preset("Plain", ThemeOverrides::default(), None);

        let raw = backend.load(PRESETS_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let entry = &json[0];
        assert_eq!(entry["name"], "Plain");
        assert_eq!(entry["overrides"], serde_json::json!({}));
        assert!(entry.get("createdAt").is_some());
        assert!(entry.get("styleId").is_none());
    }

    #[test]
    fn test_malformed_blob_reads_empty() {
        let (backend, presets) = store();
        backend.save(PRESETS_KEY, "{\"oops\":true}").unwrap();
        assert!(presets.list().is_empty());

        presets.save_preset("Fresh", ThemeOverrides::default(), None);
        assert_eq!(presets.list().len(), 1);
    }
}
