// src/data/serde_utils.rs

//! serde helpers for ranked `(key, count)` sequences that serialize as a
//! JSON object with entries in sequence order.
//!
//! A `HashMap` or `BTreeMap` would lose the rank order of a top-N table.

use crate::common::Count;

use std::fmt;

use ::serde::de::{
    MapAccess,
    Visitor,
};
use ::serde::ser::SerializeMap;
use ::serde::{
    Deserializer,
    Serializer,
};

/// Ranked `(key, count)` pairs, highest count first.
pub type RankedCounts = Vec<(String, Count)>;

pub fn serialize_ranked<S>(
    ranked: &RankedCounts,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(ranked.len()))?;
    for (key, count) in ranked.iter() {
        map.serialize_entry(key, count)?;
    }
    map.end()
}

pub fn deserialize_ranked<'de, D>(deserializer: D) -> Result<RankedCounts, D::Error>
where
    D: Deserializer<'de>,
{
    struct RankedVisitor;

    impl<'de> Visitor<'de> for RankedVisitor {
        type Value = RankedCounts;

        fn expecting(
            &self,
            formatter: &mut fmt::Formatter,
        ) -> fmt::Result {
            formatter.write_str("a JSON object of counts")
        }

        fn visit_map<A>(
            self,
            mut map: A,
        ) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut ranked = RankedCounts::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, count)) = map.next_entry::<String, Count>()? {
                ranked.push((key, count));
            }
            Ok(ranked)
        }
    }

    deserializer.deserialize_map(RankedVisitor)
}
