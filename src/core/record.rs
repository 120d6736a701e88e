//! Ordered environment records.
//!
//! An [`EnvRecord`] is the in-memory form of one output file: an ordered
//! list of `KEY=VALUE` entries, rendered verbatim with no quoting or
//! escaping. Records hold live secret material and are zeroized on drop.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Ordered set of key/value entries destined for one env file.
#[derive(Debug, Default, Zeroize, ZeroizeOnDrop)]
pub struct EnvRecord {
    entries: Vec<(String, String)>,
}

impl EnvRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Keys must be unique within a record.
    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        debug_assert!(
            self.get(key).is_none(),
            "duplicate env key: {}",
            key
        );
        self.entries.push((key.to_string(), value.into()));
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as dotenv text: one `KEY=VALUE` line per entry, insertion
    /// order preserved, every line newline-terminated.
    pub fn render(&self) -> String {
        let mut output = String::new();

        for (key, value) in &self.entries {
            output.push_str(key);
            output.push('=');
            output.push_str(value);
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_preserves_insertion_order() {
        let mut record = EnvRecord::new();
        record.push("DEBUG", "true");
        record.push("DB_HOST", "db");
        record.push("DB_PORT", "5432");

        assert_eq!(record.render(), "DEBUG=true\nDB_HOST=db\nDB_PORT=5432\n");
    }

    #[test]
    fn test_render_does_not_quote_or_escape() {
        let mut record = EnvRecord::new();
        record.push("SECRET_KEY", "a b=c#d");

        assert_eq!(record.render(), "SECRET_KEY=a b=c#d\n");
    }

    #[test]
    fn test_get_and_keys() {
        let mut record = EnvRecord::new();
        record.push("API_URL", "http://api:8000");
        record.push("AUTH_SECRET", "s3cr3t");

        assert_eq!(record.get("API_URL"), Some("http://api:8000"));
        assert_eq!(record.get("MISSING"), None);
        assert_eq!(
            record.keys().collect::<Vec<_>>(),
            vec!["API_URL", "AUTH_SECRET"]
        );
    }

    #[test]
    fn test_empty_record_renders_empty() {
        let record = EnvRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.render(), "");
    }
}
