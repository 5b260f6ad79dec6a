//! Generic row type produced by the parser.
//!
//! A [`Record`] is an ordered field-name to value mapping. Lookups never
//! fail: absent fields come back as `None`, and the rendering layer
//! substitutes [`PLACEHOLDER`] through [`Record::field_or_placeholder`].

/// Rendered in place of any absent field value.
pub const PLACEHOLDER: &str = "N/A";

/// One data line, keyed by header name in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field value.
    ///
    /// A repeated key keeps its first position but takes the new value, so
    /// a duplicated header column resolves to the right-most cell.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Look up a field value by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a field value, falling back to [`PLACEHOLDER`].
    pub fn field_or_placeholder(&self, key: &str) -> &str {
        self.get(key).unwrap_or(PLACEHOLDER)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate `(name, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}
