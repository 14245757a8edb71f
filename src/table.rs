#[cfg(test)]
#[path = "./table_tests.rs"]
mod tests;

use crate::value::Value;

/// Tables with at least this many entries use the hash index for lookups;
/// smaller tables are scanned linearly.
const INDEXED_TABLE_THRESHOLD: usize = 6;

/// A table: a flat list of key-value pairs in insertion order.
///
/// Keys are unique within one table; [`parse`](crate::parse) enforces this
/// while building the tree. Lookups scan linearly for small tables and
/// switch to a hash index once the table grows past a fixed threshold.
#[derive(Clone, Default)]
pub struct Table {
    entries: Vec<(String, Value)>,
    /// Key → entry index. Empty until the table reaches the threshold.
    index: foldhash::HashMap<String, usize>,

    /// Explicitly declared by a `[header]` line. A second header for the
    /// same path is a redefinition error.
    pub(crate) defined: bool,
    /// Closed by inline `{...}` syntax; no header or dotted key may extend it.
    pub(crate) frozen: bool,
    /// Created implicitly by a dotted key; headers may not redefine it.
    pub(crate) dotted: bool,
}

impl Table {
    /// Creates an empty table.
    pub fn new() -> Self {
        Table::default()
    }

    pub(crate) fn new_defined() -> Self {
        Table {
            defined: true,
            ..Table::default()
        }
    }

    pub(crate) fn new_dotted() -> Self {
        Table {
            dotted: true,
            ..Table::default()
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a reference to the value for `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.find_index(name).map(|i| &self.entries[i].1)
    }

    /// Returns a mutable reference to the value for `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.find_index(name).map(|i| &mut self.entries[i].1)
    }

    /// Returns `true` if the table contains the key.
    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.find_index(name).is_some()
    }

    /// Inserts a key-value pair at the end. Does **not** check for
    /// duplicates; the parser checks before inserting.
    pub fn insert(&mut self, key: String, value: Value) {
        self.entries.push((key, value));
        let len = self.entries.len();
        if len == INDEXED_TABLE_THRESHOLD {
            // Just reached the threshold: index everything.
            for (i, (key, _)) in self.entries.iter().enumerate() {
                self.index.insert(key.clone(), i);
            }
        } else if len > INDEXED_TABLE_THRESHOLD {
            self.index.insert(self.entries[len - 1].0.clone(), len - 1);
        }
    }

    /// Returns a slice of all entries in insertion order.
    #[inline]
    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn find_index(&self, name: &str) -> Option<usize> {
        if self.entries.len() >= INDEXED_TABLE_THRESHOLD {
            self.index.get(name).copied()
        } else {
            self.entries.iter().position(|(k, _)| k == name)
        }
    }
}

impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        // Flags are parse-time state, not part of the value.
        self.entries == other.entries
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in &self.entries {
            map.entry(k, v);
        }
        map.finish()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a (String, Value);
    type IntoIter = std::slice::Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Table {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
