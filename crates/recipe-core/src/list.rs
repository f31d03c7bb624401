//! Editable List
//!
//! Backing store for the ingredient, step and tag editors: an ordered list
//! of free-text rows that always shows at least one row.
//!
//! Guarded operations (`remove_at` on the last row, swaps that leave the
//! list bounds) are no-ops that return `false`; the editor only offers the
//! matching buttons when the operation is allowed.
//!
//! Row numbering is derived from the index on every read, so ordinals stay
//! contiguous from 1 after any mutation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct EditableList {
    items: Vec<String>,
}

/// Display state for one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub index: usize,
    /// 1-based position shown next to the row
    pub ordinal: usize,
    pub text: String,
    pub can_remove: bool,
    pub can_move_up: bool,
    pub can_move_down: bool,
}

impl ListRow {
    /// Input id/name, e.g. `ingredients[2]`
    pub fn input_id(&self, list_name: &str) -> String {
        format!("{}[{}]", list_name, self.index)
    }

    /// Label shown before the input, e.g. `3.`
    pub fn label(&self) -> String {
        format!("{}.", self.ordinal)
    }
}

/// One user action on a list editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEdit {
    Append,
    Set(usize, String),
    Remove(usize),
    MoveUp(usize),
    MoveDown(usize),
}

impl Default for EditableList {
    fn default() -> Self {
        Self::new()
    }
}

impl EditableList {
    /// A list with one empty row
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Wrap existing rows, adding an empty row if there are none
    pub fn from_vec(items: Vec<String>) -> Self {
        let mut list = Self { items };
        if list.items.is_empty() {
            list.append();
        }
        list
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }

    /// Add an empty row at the end
    pub fn append(&mut self) {
        self.items.push(String::new());
    }

    /// Replace a row's text; `false` when the index is out of range
    pub fn set(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = text.into();
                true
            }
            None => false,
        }
    }

    pub fn can_remove(&self) -> bool {
        self.items.len() > 1
    }

    pub fn can_move_up(&self, index: usize) -> bool {
        index > 0 && index < self.items.len()
    }

    pub fn can_move_down(&self, index: usize) -> bool {
        index + 1 < self.items.len()
    }

    /// Delete a row unless it is the only one
    pub fn remove_at(&mut self, index: usize) -> bool {
        if !self.can_remove() || index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }

    /// Exchange two adjacent rows
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        if hi != lo + 1 || hi >= self.items.len() {
            return false;
        }
        self.items.swap(lo, hi);
        true
    }

    pub fn move_up(&mut self, index: usize) -> bool {
        index > 0 && self.swap(index - 1, index)
    }

    pub fn move_down(&mut self, index: usize) -> bool {
        self.swap(index, index + 1)
    }

    /// Apply an editor action; `false` when it was a guarded no-op
    pub fn apply(&mut self, edit: ListEdit) -> bool {
        match edit {
            ListEdit::Append => {
                self.append();
                true
            }
            ListEdit::Set(index, text) => self.set(index, text),
            ListEdit::Remove(index) => self.remove_at(index),
            ListEdit::MoveUp(index) => self.move_up(index),
            ListEdit::MoveDown(index) => self.move_down(index),
        }
    }

    /// Display state for the row at `index`
    pub fn row(&self, index: usize) -> Option<ListRow> {
        let text = self.items.get(index)?;
        Some(ListRow {
            index,
            ordinal: index + 1,
            text: text.clone(),
            can_remove: self.can_remove(),
            can_move_up: self.can_move_up(index),
            can_move_down: self.can_move_down(index),
        })
    }

    /// Display rows in index order
    pub fn rows(&self) -> Vec<ListRow> {
        (0..self.items.len()).filter_map(|index| self.row(index)).collect()
    }
}

impl From<Vec<String>> for EditableList {
    fn from(items: Vec<String>) -> Self {
        Self::from_vec(items)
    }
}

impl From<EditableList> for Vec<String> {
    fn from(list: EditableList) -> Self {
        list.items
    }
}
