//! Schema model types.
//!
//! A [`Schema`] is the immutable, in-memory form of a YAML schema document:
//! a registry of reusable column templates plus an ordered list of tables.
//! Column and constraint definitions stay as flexible [`PropertyMap`]s until
//! the resolvers in [`crate::resolve`] consume them, so that unrecognized
//! properties can be reported by name.

pub mod loader;
pub mod value;

use std::collections::HashMap;

use serde_yaml::Value;

/// A loaded schema: column templates plus tables, in declared order.
///
/// Built once by [`loader::load_schema`] and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Reusable column property bags, looked up by name.
    pub templates: TemplateRegistry,

    /// Tables in the order they appear in the document.
    pub tables: Vec<Table>,
}

/// One table definition: named columns and optional table-level constraints.
#[derive(Debug, Clone)]
pub struct Table {
    pub name: String,

    /// Columns in declared order. Empty when the document had no `columns`
    /// mapping; the compiler rejects that case.
    pub columns: Vec<(String, PropertyMap)>,

    /// Constraints in declared order.
    pub constraints: Vec<PropertyMap>,
}

/// Named column templates.
///
/// A template is a default property bag a column can inherit from; templates
/// themselves are never emitted.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, PropertyMap>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, properties: PropertyMap) {
        self.templates.insert(name.into(), properties);
    }

    /// Look up a template by name.
    pub fn get(&self, name: &str) -> Option<&PropertyMap> {
        self.templates.get(name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// An insertion-ordered property mapping (`key → YAML value`).
///
/// Column, template, and constraint definitions are all property maps. The
/// resolvers read recognized keys and then diff the key set against the
/// recognized set; any leftover key is a validation failure, reported in
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyMap {
    entries: Vec<(String, Value)>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property, overwriting the value in place if the key exists.
    ///
    /// Overwriting keeps the original key position, so template properties
    /// overridden by a column keep their template-declared slot.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlay these properties on top of `defaults`.
    ///
    /// The result starts from `defaults` and overwrites with `self`; an
    /// explicit property always wins over the same-named default. Keys listed
    /// in `skip` (the `template` reference itself) are not carried over.
    pub fn overlaid_on(&self, defaults: &PropertyMap, skip: &[&str]) -> PropertyMap {
        let mut merged = defaults.clone();
        for (key, val) in &self.entries {
            if skip.contains(&key.as_str()) {
                continue;
            }
            merged.insert(key.clone(), val.clone());
        }
        merged
    }

    /// First key not present in `recognized`, in declaration order.
    pub fn first_unrecognized(&self, recognized: &[&str]) -> Option<&str> {
        self.keys().find(|k| !recognized.contains(k))
    }
}

impl FromIterator<(String, Value)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut map = PropertyMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
