//! Declaration attributes (annotations, decorators, marker metadata)
//!
//! Extraction hands over each declaration's raw attribute list. `AttributeIndex`
//! normalizes it into a set keyed by qualified attribute name: order is
//! irrelevant and duplicates are last-wins.

use super::names;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single attribute attached to a declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Qualified attribute name (`jakarta.persistence.Entity`)
    pub name: String,

    /// Named arguments (`value`, `mappedBy`, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub arguments: BTreeMap<String, Value>,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: BTreeMap::new(),
        }
    }

    pub fn with_argument(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    pub fn simple_name(&self) -> &str {
        names::simple_name(&self.name)
    }

    pub fn argument(&self, key: &str) -> Option<&Value> {
        self.arguments.get(key)
    }
}

/// Queryable attribute set of one declaration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Attribute>", into = "Vec<Attribute>")]
pub struct AttributeIndex {
    by_name: FxHashMap<String, Attribute>,
}

impl AttributeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from a raw attribute list (last duplicate wins)
    pub fn from_attributes(attributes: impl IntoIterator<Item = Attribute>) -> Self {
        let mut by_name = FxHashMap::default();
        for attribute in attributes {
            by_name.insert(attribute.name.clone(), attribute);
        }
        Self { by_name }
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.by_name.contains_key(qualified_name)
    }

    pub fn get(&self, qualified_name: &str) -> Option<&Attribute> {
        self.by_name.get(qualified_name)
    }

    /// First of `candidates` (in candidate order) that is present
    pub fn find_any<'a>(&'a self, candidates: &[String]) -> Option<&'a Attribute> {
        candidates.iter().find_map(|name| self.by_name.get(name))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Attribute names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Attributes sorted by name
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        let mut attributes: Vec<&Attribute> = self.by_name.values().collect();
        attributes.sort_by(|a, b| a.name.cmp(&b.name));
        attributes.into_iter()
    }
}

impl FromIterator<Attribute> for AttributeIndex {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        Self::from_attributes(iter)
    }
}

impl From<Vec<Attribute>> for AttributeIndex {
    fn from(attributes: Vec<Attribute>) -> Self {
        Self::from_attributes(attributes)
    }
}

impl From<AttributeIndex> for Vec<Attribute> {
    fn from(index: AttributeIndex) -> Self {
        let mut attributes: Vec<Attribute> = index.by_name.into_values().collect();
        attributes.sort_by(|a, b| a.name.cmp(&b.name));
        attributes
    }
}
