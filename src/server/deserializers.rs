use serde::{Deserialize, Deserializer};
use serde_json::Value;

// clients send the category id either as a bare number or as its string
// form, and the questions table stores the string
pub fn deserialize_category_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(unexpected) => Err(serde::de::Error::custom(format!(
            "expected a category id, got {unexpected}"
        ))),
    }
}
