//! Ordered configuration tables.
//!
//! Axis tables map short keys (`t`, `tr`, `default`, ...) to CSS tokens.
//! Insertion order is preserved: generated utilities come out in the order
//! the theme author wrote them, which keeps output deterministic across
//! runs and across machines.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// An ordered mapping from short key to CSS token.
///
/// Keys are unique; inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisTable {
    entries: Vec<(String, String)>,
}

impl AxisTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key/token pair, replacing any existing entry for the key.
    pub fn insert(&mut self, key: impl Into<String>, token: impl Into<String>) {
        let key = key.into();
        let token = token.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = token,
            None => self.entries.push((key, token)),
        }
    }

    /// Look up a token by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for AxisTable {
    fn from(pairs: [(&str, &str); N]) -> Self {
        let mut table = Self::new();
        for (key, token) in pairs {
            table.insert(key, token);
        }
        table
    }
}

impl<'de> Deserialize<'de> for AxisTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries: Vec<(String, String)> = ordered_entries(deserializer)?;
        let mut table = AxisTable::new();
        for (key, token) in entries {
            table.insert(key, token);
        }
        Ok(table)
    }
}

/// A colour value from the theme: a single colour or explicit gradient stops.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColourSpec {
    /// A single CSS colour token (`"#3490dc"`, `"red"`).
    Single(String),
    /// Two or more explicit colour stops.
    Stops(Vec<String>),
}

impl ColourSpec {
    /// The colour tokens as written in the theme, without normalization.
    pub fn raw_stops(&self) -> Vec<String> {
        match self {
            ColourSpec::Single(colour) => vec![colour.clone()],
            ColourSpec::Stops(stops) => stops.clone(),
        }
    }
}

/// An ordered mapping from colour name to [`ColourSpec`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColourTable {
    entries: Vec<(String, ColourSpec)>,
}

impl ColourTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name/spec pair, replacing any existing entry for the name.
    pub fn insert(&mut self, name: impl Into<String>, spec: ColourSpec) {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = spec,
            None => self.entries.push((name, spec)),
        }
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColourSpec)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for ColourTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = ordered_entries(deserializer)?;
        let mut table = ColourTable::new();
        for (name, spec) in entries {
            table.insert(name, spec);
        }
        Ok(table)
    }
}

/// Deserialize a map while keeping the entries in document order.
fn ordered_entries<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct OrderedVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a mapping")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry()? {
                entries.push((key, value));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(OrderedVisitor(PhantomData))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_table_preserves_order() {
        let yaml = "z: last\na: first\nm: middle";
        let table: AxisTable = serde_yaml::from_str(yaml).unwrap();

        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_axis_table_deserializes_string_tokens() {
        let yaml = "t: to top\nsm: 8px";
        let table: AxisTable = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("t"), Some("to top"));
        assert_eq!(table.get("sm"), Some("8px"));
    }

    #[test]
    fn test_axis_table_get() {
        let table = AxisTable::from([("t", "to top"), ("b", "to bottom")]);

        assert_eq!(table.get("t"), Some("to top"));
        assert_eq!(table.get("b"), Some("to bottom"));
        assert_eq!(table.get("x"), None);
    }

    #[test]
    fn test_axis_table_insert_replaces() {
        let mut table = AxisTable::from([("t", "to top")]);
        table.insert("t", "to top right");

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("t"), Some("to top right"));
    }

    #[test]
    fn test_colour_spec_single() {
        let spec: ColourSpec = serde_yaml::from_str("\"#fff\"").unwrap();
        assert_eq!(spec, ColourSpec::Single("#fff".to_string()));
        assert_eq!(spec.raw_stops(), vec!["#fff"]);
    }

    #[test]
    fn test_colour_spec_stops() {
        let spec: ColourSpec = serde_yaml::from_str("[red, blue]").unwrap();
        assert_eq!(
            spec,
            ColourSpec::Stops(vec!["red".to_string(), "blue".to_string()])
        );
    }

    #[test]
    fn test_colour_table_order_and_shapes() {
        let yaml = "ice: \"#afd\"\nfade: [red, transparent]";
        let table: ColourTable = serde_yaml::from_str(yaml).unwrap();

        let entries: Vec<(&str, &ColourSpec)> = table.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "ice");
        assert_eq!(entries[1].0, "fade");
    }
}
