//! In-memory collection with its load state

use crate::services::Record;

/// Where a collection is in its fetch lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Last fetch failed; carries the error text for the UI
    Failed(String),
}

/// Records of one kind plus the outcome of the last fetch
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    state: LoadState,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            state: LoadState::Idle,
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, LoadState::Failed(_))
    }

    /// Error text of the last failed fetch
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub(crate) fn begin_load(&mut self) {
        self.state = LoadState::Loading;
    }

    pub(crate) fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.state = LoadState::Loaded;
    }

    pub(crate) fn fail(&mut self, message: String, retain_items: bool) {
        if !retain_items {
            self.items.clear();
        }
        self.state = LoadState::Failed(message);
    }

    /// Insert or replace by id, keeping list position for known ids
    pub(crate) fn upsert(&mut self, record: T) {
        match self.items.iter().position(|item| item.id() == record.id()) {
            Some(index) => self.items[index] = record,
            None => self.items.push(record),
        }
    }

    pub(crate) fn remove(&mut self, id: i64) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }
}
