//! Client and proxy supplied timing signals.

use std::collections::HashMap;

/// Raw name/value pairs that may carry the time a request was generated.
///
/// Names are matched case-insensitively. When a name is supplied more than
/// once, the first value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signals {
    values: HashMap<String, String>,
}

impl Signals {
    /// An empty signal set; resolution falls back to the receive time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a signal unless one with the same name is already present.
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.values
            .entry(name.as_ref().to_ascii_lowercase())
            .or_insert_with(|| value.into());
    }

    /// The raw value of `name`, if supplied.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Number of distinct signal names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no signal was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Signals
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut signals = Self::new();
        for (name, value) in iter {
            signals.insert(name, value);
        }
        signals
    }
}

#[cfg(test)]
mod tests {
    use super::Signals;

    #[test]
    fn test_lookup_ignores_case() {
        let signals: Signals = [("X-Client-Time", "1735000000")].into_iter().collect();

        assert_eq!(signals.get("x-client-time"), Some("1735000000"));
        assert_eq!(signals.get("X-CLIENT-TIME"), Some("1735000000"));
    }

    #[test]
    fn test_first_value_wins_for_repeated_names() {
        let signals: Signals = [("x-timestamp", "first"), ("X-Timestamp", "second")]
            .into_iter()
            .collect();

        assert_eq!(signals.len(), 1);
        assert_eq!(signals.get("x-timestamp"), Some("first"));
    }

    #[test]
    fn test_missing_signal_is_none() {
        let signals = Signals::new();

        assert!(signals.is_empty());
        assert_eq!(signals.get("timestamp"), None);
    }
}
