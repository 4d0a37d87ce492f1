// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity and catalog models as served by the activity service.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One signup-able activity. The name is the catalog key, not a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Human-readable schedule, e.g. "Fridays, 3:30 PM - 5:00 PM"
    #[serde(default)]
    pub schedule: String,
    /// Capacity
    pub max_participants: u32,
    /// Registered emails, in server order
    #[serde(default, deserialize_with = "lenient_participants")]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity for display. Negative when over-subscribed.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Accept any JSON for `participants`; only an array of strings yields entries.
fn lenient_participants<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    let participants = match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(email) => Some(email),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    Ok(participants)
}

/// The full set of activities from one `GET /activities`.
///
/// Keeps the order of the server's JSON object, which is the order cards and
/// selector options are rendered in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    entries: Vec<(String, Activity)>,
}

impl ActivityCatalog {
    /// Iterate `(name, activity)` pairs in server order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries
            .iter()
            .map(|(name, activity)| (name.as_str(), activity))
    }

    /// Activity names in server order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, activity)| activity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace an activity. A replaced activity keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.entries.iter_mut().find(|(candidate, _)| *candidate == name) {
            Some(entry) => entry.1 = activity,
            None => self.entries.push((name, activity)),
        }
    }
}

impl<N: Into<String>> FromIterator<(N, Activity)> for ActivityCatalog {
    fn from_iter<I: IntoIterator<Item = (N, Activity)>>(iter: I) -> Self {
        let mut catalog = ActivityCatalog::default();
        for (name, activity) in iter {
            catalog.insert(name, activity);
        }
        catalog
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ActivityCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut catalog = ActivityCatalog {
                    entries: Vec::with_capacity(map.size_hint().unwrap_or(0)),
                };
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    catalog.insert(name, activity);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}
