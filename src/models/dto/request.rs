use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::Validate;

/// Parses a request body, degrading a malformed payload to an empty object.
/// Endpoint-level validation decides what missing fields mean.
pub fn parse_lenient<T>(body: &[u8]) -> T
where
    T: DeserializeOwned + Default,
{
    serde_json::from_slice(body).unwrap_or_default()
}

#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

/// Game submission. Numeric fields accept numbers or numeric strings;
/// anything else (including negatives) lands on 0, matching the scoring
/// API's established coercion behavior.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SubmitScoreRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub player_name: String,

    #[serde(default, deserialize_with = "lenient_count")]
    pub score: i64,

    #[serde(default, deserialize_with = "lenient_count")]
    pub wrong: i64,

    #[serde(default, deserialize_with = "lenient_string")]
    pub difficulty: String,
}

fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_count(&value))
}

fn coerce_count(value: &Value) -> i64 {
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    };
    parsed.max(0)
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}
