/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::PrivacyLevel;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::str::FromStr;

// Provider metadata is never inspected, so a value of the wrong type becomes None
// instead of failing the whole page.
pub fn from_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: DeserializeOwned,
{
    let v: Value = Deserialize::deserialize(deserializer)?;
    Ok(serde_json::from_value::<Option<T>>(v).ok().flatten())
}

// Parses unix timestamps
pub fn from_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let secs: Option<i64> = from_lenient(deserializer)?;
    Ok(secs.and_then(|v| DateTime::from_timestamp(v, 0)))
}

// Parses privacy type
pub fn from_privacy<'de, D>(deserializer: D) -> Result<Option<PrivacyLevel>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = from_lenient(deserializer)?;
    Ok(s.map(|s| PrivacyLevel::from_str(&s).unwrap_or(PrivacyLevel::Unknown)))
}

// Parses strings that may be null or "" and sets to None
pub fn from_empty_str_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = from_lenient(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}
