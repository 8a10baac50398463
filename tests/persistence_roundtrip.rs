//! Persistence Round-Trip Tests
//!
//! The theme store and presets rehydrated from each storage backend after a
//! simulated restart, plus recovery from damaged data.

use std::fs;
use std::sync::Arc;

use app_state::store::THEME_STORE_KEY;
use app_state::{EditorMode, PresetStore, SidebarViewMode, StoreConfig, ThemeStore};
use storage::{
    FileStore, FileStoreConfig, KvConfig, KvStore, MemoryStore, StorageAdapter, StorageError,
};
use tempfile::TempDir;
use theme_core::{ColorKey, ThemeOverrides};

fn populate(store: &mut ThemeStore) {
    store.select_style_by_id("midnight");
    store.set_color(ColorKey::Primary, "330 80% 55%");
    store.set_radius("1rem");
    store.set_shadow_strength(0.35);
    store.undo_overrides();
    store.add_snapshot();
    store.toggle_favorite("dracula");
    store.toggle_favorite("nord");
    store.set_editor_mode(EditorMode::Advanced);
    store.set_sidebar_view_mode(SidebarViewMode::Grid);
    store.set_sidebar_collapsed(true);
    store.set_preview_zoom(0.75);
    store.set_fullscreen(true);
    store.set_editor_open(true);
}

fn assert_rehydrated(original: &ThemeStore, loaded: &ThemeStore) {
    assert_eq!(loaded.to_persisted(), original.to_persisted());
    assert_eq!(loaded.effective_style(), original.effective_style());
    assert_eq!(loaded.history().index(), original.history().index());
    assert!(loaded.can_redo());
    assert!(!loaded.is_fullscreen());
    assert!(!loaded.is_editor_open());
}

/// Full state survives a restart on the file backend
#[test]
fn test_file_store_restart() {
    let dir = TempDir::new().unwrap();
    let config = FileStoreConfig::new(dir.path());

    let original = {
        let backend: Arc<dyn StorageAdapter> = Arc::new(FileStore::new(config.clone()).unwrap());
        let mut store = ThemeStore::new(backend, StoreConfig::default());
        populate(&mut store);
        store
    };

    let backend: Arc<dyn StorageAdapter> = Arc::new(FileStore::new(config).unwrap());
    let loaded = ThemeStore::load(backend, StoreConfig::default());
    assert_rehydrated(&original, &loaded);
    assert!(dir.path().join("theme-store.json").exists());
}

/// Full state survives a restart on the sled backend
#[test]
fn test_kv_store_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("studio.db").to_string_lossy().to_string();

    let original = {
        let kv = KvStore::new(KvConfig::new(&path).flush_every_ms(None)).unwrap();
        let mut store = ThemeStore::new(Arc::new(kv.clone()), StoreConfig::default());
        populate(&mut store);
        kv.flush().unwrap();
        store
    };
    // Release every handle to the database before reopening.
    let persisted = original.to_persisted();
    drop(original);

    let kv = KvStore::new(KvConfig::new(&path)).unwrap();
    let loaded = ThemeStore::load(Arc::new(kv), StoreConfig::default());
    assert_eq!(loaded.to_persisted(), persisted);
    assert_eq!(loaded.editor_mode(), EditorMode::Advanced);
    assert_eq!(loaded.favorite_style_ids(), &["dracula", "nord"]);
}

/// A tampered file is detected and the store starts from defaults
#[test]
fn test_tampered_file_falls_back() {
    let dir = TempDir::new().unwrap();
    let file_store = FileStore::new(FileStoreConfig::new(dir.path())).unwrap();
    let path = file_store.path_for(THEME_STORE_KEY).unwrap();

    {
        let mut store = ThemeStore::new(Arc::new(file_store.clone()), StoreConfig::default());
        populate(&mut store);
    }

    let contents = fs::read_to_string(&path).unwrap();
    fs::write(&path, contents.replace("midnight", "mIdnight")).unwrap();
    assert!(matches!(file_store.load(THEME_STORE_KEY), Err(StorageError::Corruption(_))));

    let loaded = ThemeStore::load(Arc::new(file_store), StoreConfig::default());
    assert_eq!(loaded.selected_style().id, "cupertino");
    assert!(loaded.theme_overrides().is_empty());
    assert!(loaded.favorite_style_ids().is_empty());
}

/// One malformed slice does not take the rest down with it
#[test]
fn test_partially_corrupt_blob() {
    let backend = Arc::new(MemoryStore::new());
    {
        let mut store = ThemeStore::new(backend.clone(), StoreConfig::default());
        populate(&mut store);
    }

    let raw = backend.load(THEME_STORE_KEY).unwrap().unwrap();
    let mut json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    json["history"] = serde_json::json!("not a list");
    json["sidebarViewMode"] = serde_json::json!(7);
    backend.save(THEME_STORE_KEY, &json.to_string()).unwrap();

    let loaded = ThemeStore::load(backend, StoreConfig::default());
    assert_eq!(loaded.selected_style().id, "midnight");
    assert_eq!(loaded.history().len(), 1);
    assert_eq!(loaded.sidebar_view_mode(), SidebarViewMode::List);
    assert_eq!(loaded.editor_mode(), EditorMode::Advanced);
    assert_eq!(loaded.favorite_style_ids(), &["dracula", "nord"]);
    assert_eq!(loaded.preview_zoom(), 0.75);
}

/// A stored custom style that is not in the catalog is kept as-is
#[test]
fn test_custom_style_survives() {
    let backend = Arc::new(MemoryStore::new());
    let mut custom = theme_core::find_style("nord").unwrap().clone();
    custom.id = "my-nord".to_string();
    custom.name = "My Nord".to_string();

    {
        let mut store = ThemeStore::new(backend.clone(), StoreConfig::default());
        store.set_selected_style(custom.clone());
    }

    let loaded = ThemeStore::load(backend, StoreConfig::default());
    assert_eq!(loaded.selected_style(), &custom);
}

/// Presets and the store blob live side by side without interfering
#[test]
fn test_presets_and_store_share_backend() {
    let dir = TempDir::new().unwrap();
    let backend: Arc<dyn StorageAdapter> =
        Arc::new(FileStore::new(FileStoreConfig::new(dir.path())).unwrap());

    let presets = PresetStore::new(backend.clone());
    let saved = presets.save_preset(
        "Warm",
        ThemeOverrides::new().with_color(ColorKey::Accent, "24 95% 58%"),
        Some("sunset".to_string()),
    );

    let mut store = ThemeStore::new(backend.clone(), StoreConfig::default());
    store.apply_preset(&saved);

    let reopened: Arc<dyn StorageAdapter> =
        Arc::new(FileStore::new(FileStoreConfig::new(dir.path())).unwrap());
    assert_eq!(PresetStore::new(reopened.clone()).list(), vec![saved.clone()]);
    let loaded = ThemeStore::load(reopened, StoreConfig::default());
    assert_eq!(loaded.theme_overrides(), &saved.overrides);
}
