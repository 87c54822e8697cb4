use super::Value;
use indexmap::IndexMap;

/// Column name to value map for a single row being written.
///
/// Insertion order is preserved so that generated statements list columns in
/// declaration order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RowValues {
    entries: IndexMap<String, Value>,
}

impl RowValues {
    pub fn new() -> RowValues {
        RowValues::default()
    }

    /// Sets `column`, replacing any earlier entry with the same name.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.entries.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value> + '_ {
        self.entries.values()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RowValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RowValues::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}
