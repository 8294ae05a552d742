//! Serde adapter for Stokes-number limits that may be unbounded.
//!
//! JSON has no infinity, so an unbounded limit is written as `null` and
//! `null` reads back as `f64::INFINITY`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let finite = value.is_finite().then_some(*value);
    finite.serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}
