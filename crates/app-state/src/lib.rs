//! Theme editing state for Token Studio
//!
//! This crate provides the theme store (selected style, overrides,
//! undo/redo history, snapshots, favorites and UI flags), its persisted
//! schema, named presets and the async suggestion path.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod history;
pub mod persisted;
pub mod presets;
pub mod store;
pub mod suggest;

pub use history::History;
pub use persisted::{EditorMode, PersistedThemeState, SidebarViewMode};
pub use presets::{Preset, PresetStore};
pub use store::{SharedThemeStore, StoreChange, StoreConfig, SubscriptionId, ThemeStore};
pub use suggest::{apply_suggestion, KeywordSuggester, SuggestError, ThemeSuggester};
