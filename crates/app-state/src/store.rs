//! Theme store: the single source of truth for theme editing state
//!
//! The store owns the selected base style, the user's override set, the
//! undo/redo history, snapshots, favorites, color locks and UI flags. All
//! transitions are synchronous and total; persistence failures are logged
//! and never surface to callers.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use app_state::store::{StoreConfig, ThemeStore};
//! use storage::MemoryStore;
//! use theme_core::ColorKey;
//!
//! let mut store = ThemeStore::new(Arc::new(MemoryStore::new()), StoreConfig::default());
//! store.select_style_by_id("cupertino");
//! store.set_color(ColorKey::Primary, "0 100% 50%");
//!
//! assert_eq!(store.effective_style().colors.primary, "0 100% 50%");
//! assert!(store.undo_overrides());
//! assert_eq!(store.effective_style().colors.primary, "211 100% 50%");
//! ```

use parking_lot::Mutex;
use rand::Rng;
use std::collections::BTreeSet;
use std::sync::Arc;
use storage::{JsonStorageExt, StorageAdapter};
use theme_core::color::{hex_to_hsl, Hsl};
use theme_core::generator::generate_theme_with;
use theme_core::{
    default_style, find_style, resolve, ColorKey, DesignStyle, FontOverrides, HarmonyStrategy,
    ResolvedTheme, ThemeOverrides, ThemePolarity,
};
use tracing::{debug, info, warn};

use crate::history::History;
use crate::persisted::{clamp_preview_zoom, EditorMode, PersistedThemeState, SidebarViewMode};
use crate::presets::Preset;

/// Storage key of the main theme-store blob
pub const THEME_STORE_KEY: &str = "theme-store";

// =============================================================================
// Configuration
// =============================================================================

/// Theme store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Key the persisted blob is stored under
    pub storage_key: String,
    /// Persist after every change to the persisted slice
    pub auto_persist: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { storage_key: THEME_STORE_KEY.to_string(), auto_persist: true }
    }
}

impl StoreConfig {
    /// Use a custom storage key
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Enable or disable automatic persistence
    pub fn auto_persist(mut self, enabled: bool) -> Self {
        self.auto_persist = enabled;
        self
    }
}

// =============================================================================
// Change Notification
// =============================================================================

/// What changed in a store transition
#[derive(Debug, Clone, PartialEq)]
pub enum StoreChange {
    /// A new base style was selected
    StyleSelected(String),
    /// Overrides changed through an edit (new history entry)
    OverridesChanged,
    /// Overrides changed without a history entry (live preview, not persisted)
    OverridesPreviewed,
    /// The history cursor moved
    HistoryMoved(usize),
    /// Overrides and history were reset
    Reset,
    /// The snapshot list changed
    SnapshotsChanged,
    /// The favorites list changed
    FavoritesChanged,
    /// The set of locked colors changed
    LocksChanged,
    /// A UI flag changed
    UiChanged,
}

impl StoreChange {
    /// Whether the change touches the persisted slice
    pub fn is_persisted(&self) -> bool {
        !matches!(self, StoreChange::LocksChanged | StoreChange::OverridesPreviewed)
    }
}

/// Handle returned by [`ThemeStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&StoreChange) + Send + Sync>;

// =============================================================================
// Store
// =============================================================================

/// Theme store shared across async tasks
pub type SharedThemeStore = Arc<Mutex<ThemeStore>>;

#[derive(Debug, Clone, Copy, PartialEq)]
struct UiFlags {
    is_sidebar_collapsed: bool,
    editor_mode: EditorMode,
    sidebar_view_mode: SidebarViewMode,
    preview_zoom: f32,
    is_fullscreen: bool,
    is_editor_open: bool,
    preview_polarity: Option<ThemePolarity>,
}

impl Default for UiFlags {
    fn default() -> Self {
        Self {
            is_sidebar_collapsed: false,
            editor_mode: EditorMode::default(),
            sidebar_view_mode: SidebarViewMode::default(),
            preview_zoom: 1.0,
            is_fullscreen: false,
            is_editor_open: false,
            preview_polarity: None,
        }
    }
}

/// Theme editing state container
pub struct ThemeStore {
    storage: Arc<dyn StorageAdapter>,
    config: StoreConfig,
    selected_style: DesignStyle,
    theme_overrides: ThemeOverrides,
    history: History,
    previewing: bool,
    snapshots: Vec<ThemeOverrides>,
    favorite_style_ids: Vec<String>,
    locked_colors: BTreeSet<ColorKey>,
    ui: UiFlags,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ThemeStore {
    /// Create a store in its default state
    ///
    /// Nothing is read from storage; the first change overwrites any
    /// existing blob.
    pub fn new(storage: Arc<dyn StorageAdapter>, config: StoreConfig) -> Self {
        Self {
            storage,
            config,
            selected_style: default_style().clone(),
            theme_overrides: ThemeOverrides::default(),
            history: History::new(),
            previewing: false,
            snapshots: Vec::new(),
            favorite_style_ids: Vec::new(),
            locked_colors: BTreeSet::new(),
            ui: UiFlags::default(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Rehydrate a store from its persisted blob
    ///
    /// Missing blobs give the default state. Storage errors and malformed
    /// fields are logged and replaced by their defaults.
    pub fn load(storage: Arc<dyn StorageAdapter>, config: StoreConfig) -> Self {
        let persisted = match storage.load(&config.storage_key) {
            Ok(Some(raw)) => PersistedThemeState::from_json_lenient(&raw),
            Ok(None) => PersistedThemeState::default(),
            Err(e) => {
                warn!(key = %config.storage_key, error = %e, "Failed to read theme store, using defaults");
                PersistedThemeState::default()
            }
        };

        let mut store = Self::new(storage, config);
        store.apply_persisted(persisted);
        info!(
            style = %store.selected_style.id,
            history = store.history.len(),
            snapshots = store.snapshots.len(),
            "Loaded theme store"
        );
        store
    }

    fn apply_persisted(&mut self, persisted: PersistedThemeState) {
        // Catalog styles are refreshed from the catalog; unknown ids keep the stored copy.
        self.selected_style = find_style(&persisted.selected_style.id)
            .cloned()
            .unwrap_or(persisted.selected_style);
        self.history = History::from_parts(persisted.history, persisted.history_index);
        self.theme_overrides = persisted.theme_overrides;
        self.previewing = self.theme_overrides != *self.history.current();
        self.snapshots = persisted.snapshots;
        self.favorite_style_ids = dedup_preserving_order(persisted.favorite_style_ids);
        self.ui.is_sidebar_collapsed = persisted.is_sidebar_collapsed;
        self.ui.editor_mode = persisted.editor_mode;
        self.ui.sidebar_view_mode = persisted.sidebar_view_mode;
        self.ui.preview_zoom = clamp_preview_zoom(persisted.preview_zoom);
    }

    /// Wrap the store for sharing across tasks
    pub fn into_shared(self) -> SharedThemeStore {
        Arc::new(Mutex::new(self))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The selected base style
    pub fn selected_style(&self) -> &DesignStyle {
        &self.selected_style
    }

    /// The current overrides
    pub fn theme_overrides(&self) -> &ThemeOverrides {
        &self.theme_overrides
    }

    /// The undo/redo history
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Saved snapshots, oldest first
    pub fn snapshots(&self) -> &[ThemeOverrides] {
        &self.snapshots
    }

    /// Favorite style ids, in user order
    pub fn favorite_style_ids(&self) -> &[String] {
        &self.favorite_style_ids
    }

    /// Favorite catalog styles, in user order
    pub fn favorite_styles(&self) -> Vec<&'static DesignStyle> {
        self.favorite_style_ids.iter().filter_map(|id| find_style(id)).collect()
    }

    /// Colors protected from randomization
    pub fn locked_colors(&self) -> &BTreeSet<ColorKey> {
        &self.locked_colors
    }

    /// Whether a color is locked
    pub fn is_color_locked(&self, key: ColorKey) -> bool {
        self.locked_colors.contains(&key)
    }

    /// Whether an uncommitted preview is active
    pub fn is_previewing(&self) -> bool {
        self.previewing
    }

    /// Whether undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The store configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The selected style with overrides applied
    pub fn effective_style(&self) -> ResolvedTheme {
        resolve(&self.selected_style, &self.theme_overrides)
    }

    /// The effective style adapted to the preview polarity, if one is set
    pub fn preview_style(&self) -> ResolvedTheme {
        let effective = self.effective_style();
        match self.ui.preview_polarity {
            Some(polarity) => effective.adapted_to(polarity),
            None => effective,
        }
    }

    // =========================================================================
    // Style Selection
    // =========================================================================

    /// Select a new base style
    ///
    /// Overrides, history and color locks are reset; snapshots are kept.
    pub fn set_selected_style(&mut self, style: DesignStyle) {
        debug!(style = %style.id, "Selecting style");
        let id = style.id.clone();
        self.selected_style = style;
        self.clear_overrides_state();
        self.emit(StoreChange::StyleSelected(id));
    }

    /// Select a catalog style by id; false and no change when unknown
    pub fn select_style_by_id(&mut self, id: &str) -> bool {
        match find_style(id) {
            Some(style) => {
                self.set_selected_style(style.clone());
                true
            }
            None => {
                debug!(id, "Ignoring unknown style id");
                false
            }
        }
    }

    fn clear_overrides_state(&mut self) {
        self.theme_overrides = ThemeOverrides::default();
        self.history.reset();
        self.previewing = false;
        self.locked_colors.clear();
    }

    // =========================================================================
    // Overrides
    // =========================================================================

    /// Replace the overrides and record a history entry
    ///
    /// Everything after the history cursor is discarded. Identical
    /// consecutive values are still recorded.
    pub fn set_theme_overrides(&mut self, next: ThemeOverrides) {
        self.history.push(next.clone());
        self.theme_overrides = next;
        self.previewing = false;
        debug!(index = self.history.index(), "Recorded overrides");
        self.emit(StoreChange::OverridesChanged);
    }

    /// Derive the next overrides from the current ones and record them
    pub fn update_theme_overrides<F>(&mut self, f: F)
    where
        F: FnOnce(&ThemeOverrides) -> ThemeOverrides,
    {
        let next = f(&self.theme_overrides);
        self.set_theme_overrides(next);
    }

    /// Override one color with an `"H S% L%"` value; false when malformed
    ///
    /// The stored value is the canonical form of the parsed triplet.
    pub fn set_color(&mut self, key: ColorKey, hsl: &str) -> bool {
        let canonical = match hsl.parse::<Hsl>() {
            Ok(parsed) => parsed.to_string(),
            Err(e) => {
                debug!(%key, error = %e, "Rejecting malformed color");
                return false;
            }
        };
        self.update_theme_overrides(|current| current.clone().with_color(key, canonical));
        true
    }

    /// Override one color with a `#rrggbb` value; false when malformed
    pub fn set_color_hex(&mut self, key: ColorKey, hex: &str) -> bool {
        match hex_to_hsl(hex) {
            Ok(hsl) => self.set_color(key, &hsl),
            Err(e) => {
                debug!(%key, error = %e, "Rejecting malformed hex color");
                false
            }
        }
    }

    /// Drop a color override so the base value shows through
    pub fn clear_color(&mut self, key: ColorKey) {
        self.update_theme_overrides(|current| {
            let mut next = current.clone();
            next.remove_color(key);
            next
        });
    }

    /// Override the corner radius
    pub fn set_radius(&mut self, radius: impl Into<String>) {
        let radius = radius.into();
        self.update_theme_overrides(|current| current.clone().with_radius(radius));
    }

    /// Override the shadow strength, clamped to 0.0..=1.0
    pub fn set_shadow_strength(&mut self, strength: f32) {
        let strength = if strength.is_nan() { 0.0 } else { strength.clamp(0.0, 1.0) };
        self.update_theme_overrides(|current| current.clone().with_shadow_strength(strength));
    }

    /// Replace the typography overrides; an empty value removes them
    pub fn set_fonts(&mut self, fonts: FontOverrides) {
        self.update_theme_overrides(|current| ThemeOverrides {
            fonts: if fonts.is_empty() { None } else { Some(fonts) },
            ..current.clone()
        });
    }

    /// Show overrides without recording history
    ///
    /// Meant for continuous controls (sliders, color pickers); call
    /// [`commit_preview`](Self::commit_preview) when the gesture ends.
    /// Previewed values are only persisted once committed.
    pub fn preview_theme_overrides(&mut self, next: ThemeOverrides) {
        self.theme_overrides = next;
        self.previewing = true;
        self.emit(StoreChange::OverridesPreviewed);
    }

    /// Record the previewed overrides as one history entry
    ///
    /// Returns false when no preview is pending.
    pub fn commit_preview(&mut self) -> bool {
        if !self.previewing {
            return false;
        }
        let next = self.theme_overrides.clone();
        self.set_theme_overrides(next);
        true
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Step back in history; false at the oldest entry
    pub fn undo_overrides(&mut self) -> bool {
        if !self.history.undo() {
            return false;
        }
        self.sync_from_history();
        true
    }

    /// Step forward in history; false at the newest entry
    pub fn redo_overrides(&mut self) -> bool {
        if !self.history.redo() {
            return false;
        }
        self.sync_from_history();
        true
    }

    /// Move to a history entry; out of range is ignored
    pub fn jump_to_history(&mut self, index: usize) -> bool {
        if !self.history.jump(index) {
            debug!(index, len = self.history.len(), "Ignoring out-of-range history jump");
            return false;
        }
        self.sync_from_history();
        true
    }

    fn sync_from_history(&mut self) {
        self.theme_overrides = self.history.current().clone();
        self.previewing = false;
        let index = self.history.index();
        debug!(index, "Moved history cursor");
        self.emit(StoreChange::HistoryMoved(index));
    }

    /// Clear overrides, history and color locks
    pub fn reset_overrides(&mut self) {
        self.clear_overrides_state();
        info!(style = %self.selected_style.id, "Reset overrides");
        self.emit(StoreChange::Reset);
    }

    // =========================================================================
    // Randomization
    // =========================================================================

    /// Replace the overrides with a generated theme, honoring color locks
    pub fn randomize_theme(&mut self, strategy: Option<HarmonyStrategy>) {
        self.randomize_theme_with(&mut rand::thread_rng(), strategy);
    }

    /// [`randomize_theme`](Self::randomize_theme) with an injected RNG
    ///
    /// Locked colors keep their current override, or stay inherited from
    /// the base style when they have none.
    pub fn randomize_theme_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        strategy: Option<HarmonyStrategy>,
    ) {
        let mut next = generate_theme_with(rng, strategy);
        for key in &self.locked_colors {
            match self.theme_overrides.color(*key) {
                Some(value) => next.set_color(*key, value),
                None => next.remove_color(*key),
            }
        }
        debug!(locked = self.locked_colors.len(), "Randomized theme");
        self.set_theme_overrides(next);
    }

    /// Toggle a color lock; returns whether the color is now locked
    pub fn toggle_color_lock(&mut self, key: ColorKey) -> bool {
        let locked = if self.locked_colors.remove(&key) {
            false
        } else {
            self.locked_colors.insert(key);
            true
        };
        self.emit(StoreChange::LocksChanged);
        locked
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Save the current overrides as a snapshot; returns its index
    pub fn add_snapshot(&mut self) -> usize {
        self.snapshots.push(self.theme_overrides.clone());
        self.emit(StoreChange::SnapshotsChanged);
        self.snapshots.len() - 1
    }

    /// Apply a snapshot as a new history entry; false when out of range
    pub fn restore_snapshot(&mut self, index: usize) -> bool {
        let Some(snapshot) = self.snapshots.get(index).cloned() else {
            return false;
        };
        self.set_theme_overrides(snapshot);
        true
    }

    /// Delete a snapshot; later snapshots shift down
    pub fn delete_snapshot(&mut self, index: usize) -> bool {
        if index >= self.snapshots.len() {
            return false;
        }
        self.snapshots.remove(index);
        self.emit(StoreChange::SnapshotsChanged);
        true
    }

    /// Display label of a snapshot ("Snapshot 1", ...)
    pub fn snapshot_label(&self, index: usize) -> Option<String> {
        (index < self.snapshots.len()).then(|| format!("Snapshot {}", index + 1))
    }

    // =========================================================================
    // Presets
    // =========================================================================

    /// Apply a preset's overrides as a new history entry
    pub fn apply_preset(&mut self, preset: &Preset) {
        debug!(preset = %preset.id, "Applying preset");
        self.set_theme_overrides(preset.overrides.clone());
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// Toggle a favorite; returns whether the style is now a favorite
    pub fn toggle_favorite(&mut self, style_id: &str) -> bool {
        let favorite = match self.favorite_style_ids.iter().position(|id| id == style_id) {
            Some(position) => {
                self.favorite_style_ids.remove(position);
                false
            }
            None => {
                self.favorite_style_ids.push(style_id.to_string());
                true
            }
        };
        self.emit(StoreChange::FavoritesChanged);
        favorite
    }

    /// Whether a style is a favorite
    pub fn is_favorite(&self, style_id: &str) -> bool {
        self.favorite_style_ids.iter().any(|id| id == style_id)
    }

    /// Reorder favorites
    ///
    /// Ids in `order` that are not favorites are ignored; favorites missing
    /// from `order` keep their relative order at the end.
    pub fn reorder_favorites<I, S>(&mut self, order: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut reordered: Vec<String> = Vec::with_capacity(self.favorite_style_ids.len());
        for id in order {
            let id = id.as_ref();
            if self.is_favorite(id) && !reordered.iter().any(|r| r == id) {
                reordered.push(id.to_string());
            }
        }
        for id in &self.favorite_style_ids {
            if !reordered.contains(id) {
                reordered.push(id.clone());
            }
        }
        self.favorite_style_ids = reordered;
        self.emit(StoreChange::FavoritesChanged);
    }

    // =========================================================================
    // UI Flags
    // =========================================================================

    /// Whether the sidebar is collapsed
    pub fn is_sidebar_collapsed(&self) -> bool {
        self.ui.is_sidebar_collapsed
    }

    /// Collapse or expand the sidebar
    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.ui.is_sidebar_collapsed = collapsed;
        self.emit(StoreChange::UiChanged);
    }

    /// Flip the sidebar state
    pub fn toggle_sidebar(&mut self) {
        self.set_sidebar_collapsed(!self.ui.is_sidebar_collapsed);
    }

    /// Editor detail level
    pub fn editor_mode(&self) -> EditorMode {
        self.ui.editor_mode
    }

    /// Set the editor detail level
    pub fn set_editor_mode(&mut self, mode: EditorMode) {
        self.ui.editor_mode = mode;
        self.emit(StoreChange::UiChanged);
    }

    /// Gallery layout
    pub fn sidebar_view_mode(&self) -> SidebarViewMode {
        self.ui.sidebar_view_mode
    }

    /// Set the gallery layout
    pub fn set_sidebar_view_mode(&mut self, mode: SidebarViewMode) {
        self.ui.sidebar_view_mode = mode;
        self.emit(StoreChange::UiChanged);
    }

    /// Preview zoom factor
    pub fn preview_zoom(&self) -> f32 {
        self.ui.preview_zoom
    }

    /// Set the preview zoom, clamped to the supported range
    pub fn set_preview_zoom(&mut self, zoom: f32) {
        self.ui.preview_zoom = clamp_preview_zoom(zoom);
        self.emit(StoreChange::UiChanged);
    }

    /// Whether the preview is fullscreen
    pub fn is_fullscreen(&self) -> bool {
        self.ui.is_fullscreen
    }

    /// Enter or leave fullscreen preview
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.ui.is_fullscreen = fullscreen;
        self.notify(&StoreChange::UiChanged);
    }

    /// Whether the token editor is open
    pub fn is_editor_open(&self) -> bool {
        self.ui.is_editor_open
    }

    /// Open or close the token editor
    pub fn set_editor_open(&mut self, open: bool) {
        self.ui.is_editor_open = open;
        self.notify(&StoreChange::UiChanged);
    }

    /// Forced preview polarity, if any
    pub fn preview_polarity(&self) -> Option<ThemePolarity> {
        self.ui.preview_polarity
    }

    /// Force the preview to a polarity, or `None` for the style's own
    pub fn set_preview_polarity(&mut self, polarity: Option<ThemePolarity>) {
        self.ui.preview_polarity = polarity;
        self.notify(&StoreChange::UiChanged);
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Register a change listener
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&StoreChange) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a change listener; false when the id is unknown
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&self, change: &StoreChange) {
        for (_, listener) in &self.listeners {
            listener(change);
        }
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn emit(&mut self, change: StoreChange) {
        if change.is_persisted() && self.config.auto_persist {
            if let Err(e) = self.save() {
                warn!(key = %self.config.storage_key, error = %e, "Failed to persist theme store");
            }
        }
        self.notify(&change);
    }

    /// The persisted slice of the current state
    pub fn to_persisted(&self) -> PersistedThemeState {
        PersistedThemeState {
            selected_style: self.selected_style.clone(),
            theme_overrides: self.theme_overrides.clone(),
            history: self.history.entries().to_vec(),
            history_index: self.history.index(),
            snapshots: self.snapshots.clone(),
            favorite_style_ids: self.favorite_style_ids.clone(),
            is_sidebar_collapsed: self.ui.is_sidebar_collapsed,
            editor_mode: self.ui.editor_mode,
            sidebar_view_mode: self.ui.sidebar_view_mode,
            preview_zoom: self.ui.preview_zoom,
        }
    }

    /// Write the persisted slice to storage now
    pub fn save(&self) -> storage::Result<()> {
        self.storage.save_json(&self.config.storage_key, &self.to_persisted())
    }
}

fn dedup_preserving_order(ids: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
