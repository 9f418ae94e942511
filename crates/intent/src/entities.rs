//! Entity extraction: pull structured values (country, store id, size, ...)
//! out of free text with the registry's extraction patterns.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::patterns::EntityPatternSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Country,
    Store,
    SuitType,
    BundleType,
    Size,
    Season,
    TimePeriod,
    Percentage,
    Amount,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Country => "country",
            EntityKind::Store => "store",
            EntityKind::SuitType => "suit_type",
            EntityKind::BundleType => "bundle_type",
            EntityKind::Size => "size",
            EntityKind::Season => "season",
            EntityKind::TimePeriod => "time_period",
            EntityKind::Percentage => "percentage",
            EntityKind::Amount => "amount",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One match is kept as a scalar, several as the ordered list of matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityValue {
    Single(String),
    Many(Vec<String>),
}

impl EntityValue {
    fn from_matches(mut matches: Vec<String>) -> Option<Self> {
        match matches.len() {
            0 => None,
            1 => matches.pop().map(EntityValue::Single),
            _ => Some(EntityValue::Many(matches)),
        }
    }

    /// First match in text order.
    pub fn first(&self) -> &str {
        match self {
            EntityValue::Single(s) => s,
            EntityValue::Many(v) => v.first().map(String::as_str).unwrap_or_default(),
        }
    }

    pub fn values(&self) -> Vec<&str> {
        match self {
            EntityValue::Single(s) => vec![s.as_str()],
            EntityValue::Many(v) => v.iter().map(String::as_str).collect(),
        }
    }
}

/// Extracted entities in registration order. Absent kinds have no key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entities(IndexMap<EntityKind, EntityValue>);

impl Entities {
    pub fn get(&self, kind: EntityKind) -> Option<&EntityValue> {
        self.0.get(&kind)
    }

    pub fn first(&self, kind: EntityKind) -> Option<&str> {
        self.get(kind).map(EntityValue::first)
    }

    pub fn contains(&self, kind: EntityKind) -> bool {
        self.0.contains_key(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityKind, &EntityValue)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    pub fn insert(&mut self, kind: EntityKind, value: EntityValue) {
        self.0.insert(kind, value);
    }
}

/// Scan lower-cased `text` for every entity kind in `patterns`.
///
/// Matches are non-overlapping and kept verbatim; when a pattern has a capture
/// group the group text is kept, otherwise the whole match.
pub fn extract(text: &str, patterns: &EntityPatternSet) -> Entities {
    let lowered = text.to_lowercase();
    let mut entities = Entities::default();

    for (kind, re) in patterns.iter() {
        let matches: Vec<String> = re
            .captures_iter(&lowered)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(0)))
            .map(|m| m.as_str().to_string())
            .collect();

        if let Some(value) = EntityValue::from_matches(matches) {
            entities.insert(kind, value);
        }
    }

    entities
}

/// Display name for a country alias (`türkiye` → `Turkey`).
pub fn canonical_country(raw: &str) -> Option<&'static str> {
    match raw.trim().to_lowercase().as_str() {
        "türkiye" | "turkey" => Some("Turkey"),
        "almanya" | "germany" => Some("Germany"),
        "rusya" | "russia" => Some("Russia"),
        "kazakistan" | "kazakhstan" => Some("Kazakhstan"),
        _ => None,
    }
}
