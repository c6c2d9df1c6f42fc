//! # SerDe Utilities

use serde::de::{Deserialize, Deserializer};

/// Try to deserialize an `Option<T>` but use a default value if it is `null`
pub fn deserialize_or_default<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let opt: Option<T> = Deserialize::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
