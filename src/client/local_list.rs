use chrono::{DateTime, Utc};
use crate::domain::models::{category::Category, expense::Expense, goal::Goal, income::Income};

/// Records a client list can merge by identity.
pub trait Keyed {
    type Key: PartialEq + Clone;
    fn key(&self) -> Self::Key;
}

/// Records shown newest first.
pub trait Dated {
    fn date(&self) -> DateTime<Utc>;
}

impl Keyed for Expense {
    type Key = String;
    fn key(&self) -> String {
        self.id.clone()
    }
}

impl Keyed for Income {
    type Key = String;
    fn key(&self) -> String {
        self.id.clone()
    }
}

impl Keyed for Goal {
    type Key = String;
    fn key(&self) -> String {
        self.id.clone()
    }
}

impl Keyed for Category {
    type Key = i64;
    fn key(&self) -> i64 {
        self.id
    }
}

impl Dated for Expense {
    fn date(&self) -> DateTime<Utc> {
        self.spent_at
    }
}

impl Dated for Income {
    fn date(&self) -> DateTime<Utc> {
        self.received_at
    }
}

/// List state held by the client between refreshes.
///
/// Server responses are merged in locally instead of re-fetching. Nothing
/// coordinates this with other sessions; a refresh via [`LocalList::replace_all`]
/// is the only way to pick up their changes.
#[derive(Debug, Clone)]
pub struct LocalList<T> {
    items: Vec<T>,
}

impl<T> Default for LocalList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> LocalList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Replaces the record with the same key in place, or appends it.
    pub fn upsert(&mut self, item: T) {
        let key = item.key();
        match self.items.iter_mut().find(|existing| existing.key() == key) {
            Some(slot) => *slot = item,
            None => self.items.push(item),
        }
    }

    pub fn remove(&mut self, key: &T::Key) -> Option<T> {
        let idx = self.items.iter().position(|item| item.key() == *key)?;
        Some(self.items.remove(idx))
    }

    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.items.iter().find(|item| item.key() == *key)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Keyed + Dated> LocalList<T> {
    pub fn sort_by_date_desc(&mut self) {
        self.items.sort_by_key(|item| std::cmp::Reverse(item.date()));
    }

    /// Upsert followed by re-sorting, as the expense and income screens do.
    pub fn merge_dated(&mut self, item: T) {
        self.upsert(item);
        self.sort_by_date_desc();
    }
}
