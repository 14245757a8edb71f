#[cfg(test)]
#[path = "./array_tests.rs"]
mod tests;

use crate::value::Value;

/// An ordered sequence of values.
///
/// Arrays come from two places with different rules: inline `[...]` syntax
/// produces a closed array that no later header may touch, while `[[path]]`
/// headers produce an array of tables that grows one table per header.
#[derive(Clone, Default)]
pub struct Array {
    items: Vec<Value>,
    /// Created by an array-of-tables header and still open for appends.
    pub(crate) aot: bool,
}

impl Array {
    /// Creates an empty, closed array (the inline `[...]` form).
    pub fn new() -> Self {
        Array::default()
    }

    pub(crate) fn of_tables() -> Self {
        Array {
            items: Vec::new(),
            aot: true,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the array has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Returns the first element.
    pub fn first(&self) -> Option<&Value> {
        self.items.first()
    }

    /// Returns the last element.
    pub fn last(&self) -> Option<&Value> {
        self.items.last()
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Value> {
        self.items.last_mut()
    }

    /// Appends an element.
    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    /// All elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        // The aot flag is parse-time state, not part of the value.
        self.items == other.items
    }
}

impl std::fmt::Debug for Array {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
