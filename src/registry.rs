//! Generated utility collection.
//!
//! Every generated utility is a selector paired with a `background-image`
//! value. [`UtilityMap`] keeps them in insertion order so output follows
//! theme order; [`UtilitySink`] is the boundary the engine hands each
//! family's finished group to, one call per family.

/// An ordered selector -> background-image mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UtilityMap {
    entries: Vec<(String, String)>,
}

impl UtilityMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a utility. Later inserts win on selector collision, matching
    /// plain mapping-merge semantics; collisions themselves are a theme
    /// authoring problem surfaced by validation, not defended against here.
    pub fn insert(&mut self, selector: impl Into<String>, background_image: impl Into<String>) {
        let selector = selector.into();
        let background_image = background_image.into();
        match self.entries.iter_mut().find(|(s, _)| *s == selector) {
            Some(entry) => entry.1 = background_image,
            None => self.entries.push((selector, background_image)),
        }
    }

    /// Look up a background-image value by selector.
    pub fn get(&self, selector: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate utilities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, v)| (s.as_str(), v.as_str()))
    }

    /// Get the number of utilities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge another map into this one.
    pub fn merge(&mut self, other: UtilityMap) {
        for (selector, value) in other.entries {
            self.insert(selector, value);
        }
    }
}

/// One registered utility group: a family's mapping plus its variant list.
#[derive(Debug, Clone, Default)]
pub struct UtilityGroup {
    pub utilities: UtilityMap,
    pub variants: Vec<String>,
}

/// Sink for generated utility groups.
///
/// The engine calls this once per gradient family (plus once for `bg-none`
/// and once for the flat-axis group when configured). Variants are opaque
/// modifier names passed through for the host pipeline.
pub trait UtilitySink {
    fn add_utilities(&mut self, utilities: UtilityMap, variants: Vec<String>);
}

/// A sink that simply collects every registered group, in call order.
#[derive(Debug, Clone, Default)]
pub struct CollectedUtilities {
    groups: Vec<UtilityGroup>,
}

impl CollectedUtilities {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registered groups, in registration order.
    pub fn groups(&self) -> &[UtilityGroup] {
        &self.groups
    }

    /// All utilities from all groups merged into one mapping.
    pub fn merged(&self) -> UtilityMap {
        let mut merged = UtilityMap::new();
        for group in &self.groups {
            merged.merge(group.utilities.clone());
        }
        merged
    }

    /// Total utility count across groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.utilities.len()).sum()
    }

    /// Check if no utilities were registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UtilitySink for CollectedUtilities {
    fn add_utilities(&mut self, utilities: UtilityMap, variants: Vec<String>) {
        self.groups.push(UtilityGroup {
            utilities,
            variants,
        });
    }
}
