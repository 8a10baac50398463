//! Linear undo/redo history of theme overrides
//!
//! History is a list of override values plus a cursor. Entry 0 is always the
//! empty override set and the cursor always points at a valid entry.
//!
//! ```text
//! edit:  [e0 .. ei] ++ [new]   cursor -> new tail (redo tail discarded)
//! undo:  cursor -> max(0, i - 1)
//! redo:  cursor -> min(len - 1, i + 1)
//! ```

use theme_core::ThemeOverrides;

/// Undo/redo history over [`ThemeOverrides`]
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: Vec<ThemeOverrides>,
    index: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// A fresh history: `[{}]` at index 0
    pub fn new() -> Self {
        Self { entries: vec![ThemeOverrides::default()], index: 0 }
    }

    /// Rebuild a history from persisted parts
    ///
    /// An empty list becomes `[{}]`, a non-empty first entry gets `{}`
    /// prepended, and the index is clamped into range.
    pub fn from_parts(mut entries: Vec<ThemeOverrides>, index: usize) -> Self {
        let mut index = index;
        match entries.first().map(ThemeOverrides::is_empty) {
            None => entries.push(ThemeOverrides::default()),
            Some(false) => {
                entries.insert(0, ThemeOverrides::default());
                index = index.saturating_add(1);
            }
            Some(true) => {}
        }
        let index = index.min(entries.len() - 1);
        Self { entries, index }
    }

    /// Record a new state, discarding anything after the cursor
    pub fn push(&mut self, overrides: ThemeOverrides) {
        self.entries.truncate(self.index + 1);
        self.entries.push(overrides);
        self.index = self.entries.len() - 1;
    }

    /// Step back; returns whether the cursor moved
    pub fn undo(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward; returns whether the cursor moved
    pub fn redo(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Move the cursor to `index` without truncating; out of range is ignored
    pub fn jump(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.index = index;
        true
    }

    /// Back to `[{}]` at index 0
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether undo would move the cursor
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Whether redo would move the cursor
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Entry under the cursor
    pub fn current(&self) -> &ThemeOverrides {
        &self.entries[self.index]
    }

    /// Cursor position
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of entries (always at least 1)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history holds at least the initial entry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[ThemeOverrides] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use theme_core::ColorKey;

    fn primary(value: &str) -> ThemeOverrides {
        ThemeOverrides::new().with_color(ColorKey::Primary, value)
    }

    #[test]
    fn test_new_history() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.index(), 0);
        assert!(history.current().is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_push_advances() {
        let mut history = History::new();
        history.push(primary("1 1% 1%"));
        history.push(primary("2 2% 2%"));

        assert_eq!(history.len(), 3);
        assert_eq!(history.index(), 2);
        assert_eq!(history.current(), &primary("2 2% 2%"));
    }

    #[test]
    fn test_undo_redo_boundaries() {
        let mut history = History::new();
        assert!(!history.undo());
        assert!(!history.redo());

        history.push(primary("1 1% 1%"));
        assert!(history.undo());
        assert!(history.current().is_empty());
        assert!(!history.undo());

        assert!(history.redo());
        assert_eq!(history.current(), &primary("1 1% 1%"));
        assert!(!history.redo());
    }

    #[test]
    fn test_push_truncates_redo_tail() {
        let mut history = History::new();
        history.push(primary("1 1% 1%"));
        history.push(primary("2 2% 2%"));
        history.undo();
        history.push(primary("3 3% 3%"));

        assert_eq!(history.len(), 3);
        assert_eq!(history.entries()[1], primary("1 1% 1%"));
        assert_eq!(history.entries()[2], primary("3 3% 3%"));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut history = History::new();
        history.push(primary("1 1% 1%"));
        history.push(primary("1 1% 1%"));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_jump() {
        let mut history = History::new();
        history.push(primary("1 1% 1%"));
        history.push(primary("2 2% 2%"));

        assert!(history.jump(1));
        assert_eq!(history.len(), 3);
        assert_eq!(history.current(), &primary("1 1% 1%"));
        assert!(!history.jump(3));
        assert_eq!(history.index(), 1);
    }

    #[test]
    fn test_reset() {
        let mut history = History::new();
        history.push(primary("1 1% 1%"));
        history.reset();
        assert_eq!(history, History::new());
    }

    #[test]
    fn test_from_parts_normalizes() {
        assert_eq!(History::from_parts(Vec::new(), 5), History::new());

        let history = History::from_parts(vec![ThemeOverrides::default(), primary("1 1% 1%")], 9);
        assert_eq!(history.index(), 1);

        let history = History::from_parts(vec![primary("1 1% 1%")], 0);
        assert_eq!(history.len(), 2);
        assert!(history.entries()[0].is_empty());
        assert_eq!(history.index(), 1);
    }
}
