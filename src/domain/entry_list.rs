//! Ordered list of repeatable form entries.
//!
//! Each entry is handed an opaque [`EntryId`] when it is appended, so a removal
//! control can detach exactly the entry it was wired to. Ids only live in
//! memory: the serialized form is a plain array in insertion order.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Handle to one entry of an [`EntryList`]. Never reused within a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

#[derive(Debug, Clone)]
pub struct EntryList<T> {
    entries: Vec<(EntryId, T)>,
    next_id: u64,
}

impl<T> Default for EntryList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> EntryList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end of the list.
    pub fn push(&mut self, entry: T) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, entry));
        id
    }

    /// Detach the entry with the given id.
    ///
    /// Returns `None` when the entry was already removed.
    pub fn remove(&mut self, id: EntryId) -> Option<T> {
        let index = self.entries.iter().position(|(eid, _)| *eid == id)?;
        Some(self.entries.remove(index).1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: EntryId) -> Option<&T> {
        self.entries
            .iter()
            .find(|(eid, _)| *eid == id)
            .map(|(_, entry)| entry)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut T> {
        self.entries
            .iter_mut()
            .find(|(eid, _)| *eid == id)
            .map(|(_, entry)| entry)
    }

    /// Id of the entry currently at `index` (0-based).
    pub fn id_at(&self, index: usize) -> Option<EntryId> {
        self.entries.get(index).map(|(id, _)| *id)
    }

    pub fn ids(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> FromIterator<T> for EntryList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for entry in iter {
            list.push(entry);
        }
        list
    }
}

/// Lists compare by content and order; ids are bookkeeping only.
impl<T: PartialEq> PartialEq for EntryList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Serialize> Serialize for EntryList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for EntryList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(|entries| entries.into_iter().collect())
    }
}
