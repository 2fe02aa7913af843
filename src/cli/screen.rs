//! Per-step screen models
//!
//! A screen owns the local state of one wizard step: the highlight and
//! filter of a selectable list, or the buffer and cursor of a text prompt.
//! Screens never advance the wizard themselves; the controller asks them
//! for a confirmed value on Enter.

use std::ops::Range;

use super::events::Key;

// ============================================================================
// List Screen
// ============================================================================

/// A labeled choice in a list screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableItem {
    label: String,
}

impl SelectableItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn matches(&self, filter_lower: &str) -> bool {
        self.label.to_lowercase().contains(filter_lower)
    }
}

/// Ordered, optionally filterable list with a clamped highlight
#[derive(Debug, Clone)]
pub struct ListScreen {
    items: Vec<SelectableItem>,
    filtering: bool,
    filter: String,
    /// Indices into `items` that match `filter`
    filtered: Vec<usize>,
    /// Index into `filtered`
    selected: usize,
}

impl ListScreen {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<SelectableItem> = labels.into_iter().map(SelectableItem::new).collect();
        let filtered = (0..items.len()).collect();
        Self {
            items,
            filtering: true,
            filter: String::new(),
            filtered,
            selected: 0,
        }
    }

    /// Turn substring filtering on or off. Typed characters are ignored when off.
    pub fn with_filtering(mut self, enabled: bool) -> Self {
        self.filtering = enabled;
        self
    }

    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            Key::Down => {
                if self.selected + 1 < self.filtered.len() {
                    self.selected += 1;
                }
            }
            Key::Char(c) if self.filtering => {
                self.filter.push(c);
                self.refilter();
            }
            Key::Backspace if self.filtering => {
                if self.filter.pop().is_some() {
                    self.refilter();
                }
            }
            _ => {}
        }
    }

    /// Replace the filter text outright
    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
        self.refilter();
    }

    fn refilter(&mut self) {
        let filter_lower = self.filter.to_lowercase();
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.matches(&filter_lower))
            .map(|(i, _)| i)
            .collect();
        self.selected = 0;
    }

    pub fn items(&self) -> &[SelectableItem] {
        &self.items
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    /// Highlight position within the filtered set
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn visible_items(&self) -> Vec<&SelectableItem> {
        self.filtered.iter().map(|&i| &self.items[i]).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.filtered.len()
    }

    /// The item Enter would confirm; `None` when the filter matches nothing
    pub fn highlighted(&self) -> Option<&SelectableItem> {
        self.filtered.get(self.selected).map(|&i| &self.items[i])
    }

    /// Range of filtered positions to draw in `height` rows, scrolled so the
    /// highlight stays visible
    pub fn window(&self, height: usize) -> Range<usize> {
        let height = height.max(1);
        let start = if self.selected >= height {
            self.selected - height + 1
        } else {
            0
        };
        let end = (start + height).min(self.filtered.len());
        start..end
    }
}

// ============================================================================
// Text Input Screen
// ============================================================================

/// Single-line text buffer with a character cursor
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    buffer: String,
    /// Cursor position in characters, `0..=char_count`
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `text` already typed and the cursor at its end
    pub fn with_value(text: &str) -> Self {
        Self {
            buffer: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.buffer.insert(at, c);
                self.cursor += 1;
            }
            Key::Backspace => {
                if self.cursor > 0 {
                    let at = self.byte_offset(self.cursor - 1);
                    self.buffer.remove(at);
                    self.cursor -= 1;
                }
            }
            Key::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            Key::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
            }
            Key::Home => self.cursor = 0,
            Key::End => self.cursor = self.char_count(),
            _ => {}
        }
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Buffer split at the cursor, for drawing the caret
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.buffer.split_at(self.byte_offset(self.cursor))
    }

    /// True when there is nothing to confirm
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

// ============================================================================
// Screen
// ============================================================================

/// The interactive unit shown for the active step
#[derive(Debug, Clone)]
pub enum Screen {
    List(ListScreen),
    Text(TextInput),
}

impl Screen {
    /// Local editing and navigation; never confirms
    pub fn handle_key(&mut self, key: Key) {
        match self {
            Screen::List(list) => list.handle_key(key),
            Screen::Text(input) => input.handle_key(key),
        }
    }

    /// Value Enter would commit, or `None` when confirmation is not allowed
    pub fn confirmed_value(&self) -> Option<String> {
        match self {
            Screen::List(list) => list.highlighted().map(|item| item.label().to_string()),
            Screen::Text(input) if input.is_empty() => None,
            Screen::Text(input) => Some(input.value().to_string()),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Screen::List(_))
    }
}
