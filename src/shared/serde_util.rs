//! Custom serde helpers for the CoinPaprika wire format.

/// Deserializes any optional field without ever failing the enclosing record.
///
/// The coin detail payload carries many fields the SDK never reads. Upstream
/// occasionally sends them with unexpected shapes (a string where an object
/// was documented, an empty string for a date). A malformed value decodes as
/// `None` instead of rejecting the whole response.
pub mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(serde_json::from_value(value).ok())
    }
}

/// Deserializes a list that may be `null` or missing as an empty `Vec`.
pub mod null_as_empty {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
    }
}

/// Deserializes a string that may be `null` as an empty `String`.
pub mod null_as_empty_string {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }
}
