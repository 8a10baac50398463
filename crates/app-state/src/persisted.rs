//! Persisted theme-store schema
//!
//! This is the single JSON blob stored under the `theme-store` key. Every
//! field carries a serde default so older blobs missing newer fields still
//! load. [`PersistedThemeState::from_json_lenient`] goes further and recovers
//! field by field when one slice is malformed.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use theme_core::{default_style, DesignStyle, ThemeOverrides};
use tracing::warn;

/// Smallest preview zoom factor
pub const MIN_PREVIEW_ZOOM: f32 = 0.25;

/// Largest preview zoom factor
pub const MAX_PREVIEW_ZOOM: f32 = 2.0;

/// Token editor detail level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    /// Colors, fonts and radius only
    #[default]
    Simple,
    /// Every token
    Advanced,
}

/// Gallery layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SidebarViewMode {
    /// One style per row
    #[default]
    List,
    /// Thumbnail grid
    Grid,
}

/// The persisted slice of the theme store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedThemeState {
    /// Selected base style
    #[serde(default = "default_selected_style")]
    pub selected_style: DesignStyle,

    /// Current overrides
    #[serde(default)]
    pub theme_overrides: ThemeOverrides,

    /// History entries
    #[serde(default = "default_history")]
    pub history: Vec<ThemeOverrides>,

    /// History cursor
    #[serde(default)]
    pub history_index: usize,

    /// Saved snapshots
    #[serde(default)]
    pub snapshots: Vec<ThemeOverrides>,

    /// Favorite style ids, in user order
    #[serde(default)]
    pub favorite_style_ids: Vec<String>,

    /// Sidebar collapsed
    #[serde(default)]
    pub is_sidebar_collapsed: bool,

    /// Editor detail level
    #[serde(default)]
    pub editor_mode: EditorMode,

    /// Gallery layout
    #[serde(default)]
    pub sidebar_view_mode: SidebarViewMode,

    /// Preview zoom factor
    #[serde(default = "default_preview_zoom")]
    pub preview_zoom: f32,
}

fn default_selected_style() -> DesignStyle {
    default_style().clone()
}

fn default_history() -> Vec<ThemeOverrides> {
    vec![ThemeOverrides::default()]
}

fn default_preview_zoom() -> f32 {
    1.0
}

impl Default for PersistedThemeState {
    fn default() -> Self {
        Self {
            selected_style: default_selected_style(),
            theme_overrides: ThemeOverrides::default(),
            history: default_history(),
            history_index: 0,
            snapshots: Vec::new(),
            favorite_style_ids: Vec::new(),
            is_sidebar_collapsed: false,
            editor_mode: EditorMode::default(),
            sidebar_view_mode: SidebarViewMode::default(),
            preview_zoom: default_preview_zoom(),
        }
    }
}

/// Take one field out of a blob object, falling back to `default` on error
fn field_or<T, F>(object: &mut serde_json::Map<String, Value>, key: &str, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match object.remove(key) {
        None | Some(Value::Null) => default(),
        Some(value) => match serde_json::from_value(value) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(field = key, error = %e, "Malformed persisted field, using default");
                default()
            }
        },
    }
}

impl PersistedThemeState {
    /// Parse a blob, recovering each field independently
    ///
    /// Unparseable JSON yields the full default. A malformed field falls back
    /// to its own default without affecting the others.
    pub fn from_json_lenient(raw: &str) -> Self {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Persisted theme state is not valid JSON, using defaults");
                return Self::default();
            }
        };

        let mut object = match value {
            Value::Object(object) => object,
            other => {
                warn!(kind = ?other, "Persisted theme state is not an object, using defaults");
                return Self::default();
            }
        };

        Self {
            selected_style: field_or(&mut object, "selectedStyle", default_selected_style),
            theme_overrides: field_or(&mut object, "themeOverrides", ThemeOverrides::default),
            history: field_or(&mut object, "history", default_history),
            history_index: field_or(&mut object, "historyIndex", || 0),
            snapshots: field_or(&mut object, "snapshots", Vec::new),
            favorite_style_ids: field_or(&mut object, "favoriteStyleIds", Vec::new),
            is_sidebar_collapsed: field_or(&mut object, "isSidebarCollapsed", || false),
            editor_mode: field_or(&mut object, "editorMode", EditorMode::default),
            sidebar_view_mode: field_or(&mut object, "sidebarViewMode", SidebarViewMode::default),
            preview_zoom: field_or(&mut object, "previewZoom", default_preview_zoom),
        }
    }
}

/// Clamp a zoom factor into the supported range
pub fn clamp_preview_zoom(zoom: f32) -> f32 {
    if zoom.is_nan() {
        return default_preview_zoom();
    }
    zoom.clamp(MIN_PREVIEW_ZOOM, MAX_PREVIEW_ZOOM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use theme_core::{find_style, ColorKey};

    #[test]
    fn test_default_state() {
        let state = PersistedThemeState::default();
        assert_eq!(state.selected_style.id, "cupertino");
        assert!(state.theme_overrides.is_empty());
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history_index, 0);
        assert_eq!(state.editor_mode, EditorMode::Simple);
        assert_eq!(state.sidebar_view_mode, SidebarViewMode::List);
        assert_eq!(state.preview_zoom, 1.0);
    }

    #[test]
    fn test_serialization_keys() {
        let state = PersistedThemeState {
            favorite_style_ids: vec!["nord".to_string()],
            editor_mode: EditorMode::Advanced,
            sidebar_view_mode: SidebarViewMode::Grid,
            ..Default::default()
        };
        let json = serde_json::to_value(&state).unwrap();

        for key in [
            "selectedStyle",
            "themeOverrides",
            "history",
            "historyIndex",
            "snapshots",
            "favoriteStyleIds",
            "isSidebarCollapsed",
            "editorMode",
            "sidebarViewMode",
            "previewZoom",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(json["editorMode"], "advanced");
        assert_eq!(json["sidebarViewMode"], "grid");
        assert_eq!(json["themeOverrides"], serde_json::json!({}));
    }

    #[test]
    fn test_round_trip() {
        let overrides = ThemeOverrides::new().with_color(ColorKey::Accent, "10 20% 30%");
        let state = PersistedThemeState {
            selected_style: find_style("nord").unwrap().clone(),
            theme_overrides: overrides.clone(),
            history: vec![ThemeOverrides::default(), overrides.clone()],
            history_index: 1,
            snapshots: vec![overrides],
            is_sidebar_collapsed: true,
            preview_zoom: 1.5,
            ..Default::default()
        };

        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(PersistedThemeState::from_json_lenient(&json), state);
        assert_eq!(serde_json::from_str::<PersistedThemeState>(&json).unwrap(), state);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let state = PersistedThemeState::from_json_lenient("{\"isSidebarCollapsed\":true}");
        assert!(state.is_sidebar_collapsed);
        assert_eq!(state.selected_style.id, "cupertino");
        assert_eq!(state.history, vec![ThemeOverrides::default()]);
    }

    #[test]
    fn test_malformed_field_falls_back_alone() {
        let raw = r#"{
            "themeOverrides": {"radius": 42},
            "favoriteStyleIds": ["nord", "dracula"],
            "editorMode": "expert",
            "previewZoom": 1.25
        }"#;
        let state = PersistedThemeState::from_json_lenient(raw);

        assert!(state.theme_overrides.is_empty());
        assert_eq!(state.editor_mode, EditorMode::Simple);
        assert_eq!(state.favorite_style_ids, vec!["nord".to_string(), "dracula".to_string()]);
        assert_eq!(state.preview_zoom, 1.25);
    }

    #[test]
    fn test_garbage_blob() {
        assert_eq!(PersistedThemeState::from_json_lenient("not json"), PersistedThemeState::default());
        assert_eq!(PersistedThemeState::from_json_lenient("[1,2]"), PersistedThemeState::default());
    }

    #[test]
    fn test_clamp_preview_zoom() {
        assert_eq!(clamp_preview_zoom(0.1), MIN_PREVIEW_ZOOM);
        assert_eq!(clamp_preview_zoom(3.0), MAX_PREVIEW_ZOOM);
        assert_eq!(clamp_preview_zoom(1.1), 1.1);
        assert_eq!(clamp_preview_zoom(f32::NAN), 1.0);
    }
}
