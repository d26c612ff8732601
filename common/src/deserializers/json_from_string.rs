use serde::{
    de::{DeserializeOwned, Error},
    Deserialize, Deserializer,
};

/// Deserializes a field holding escaped JSON text (such as a proxy response `body`) into `T`.
///
/// Serde cannot deserialize the escaped string straight into a struct, so the
/// string is read first and parsed afterwards.
pub fn deserialize_json_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = String::deserialize(deserializer)?;
    serde_json::from_str(&raw).map_err(D::Error::custom)
}
