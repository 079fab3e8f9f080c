use serde::{ Deserialize, Deserializer, Serialize };
use serde_json::Value;

pub const DEFAULT_INTENSITY: i64 = 3;

/// Free-text field. `null` reads as empty, scalars read as their JSON text.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn number_from(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

/// Accepts `4`, `4.0` or `"4"`. Anything else reads as absent.
fn lenient_intensity<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from(&value).map(|n| n.round() as i64))
}

fn lenient_temperature<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from(&value).map(|n| n as f32))
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub system_prompt: Option<String>,
    #[serde(default, deserialize_with = "lenient_temperature")]
    pub temperature: Option<f32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResult {
    pub response: String,
    pub model: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RespondRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub emotion: String,
    #[serde(default, rename = "advisorPerspective", deserialize_with = "lenient_opt_string")]
    pub advisor_perspective: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub recipient: Option<String>,
    #[serde(default, deserialize_with = "lenient_intensity")]
    pub intensity: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RespondResponse {
    pub response: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub emotion: String,
    #[serde(default, deserialize_with = "lenient_intensity")]
    pub intensity: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
