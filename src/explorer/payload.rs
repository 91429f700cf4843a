use crate::explorer::ExplorerError;
use crate::utils::maptypes::Coordinates;
use serde_json::Value;

const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Removes one leading "```json" fence and one trailing "```" fence, then
/// trims. Text without fences comes back trimmed and otherwise untouched.
pub fn strip_fences(text: &str) -> &str {
    let text = text.trim();
    let text = text
        .strip_prefix(FENCE_OPEN)
        .map(str::trim_start)
        .unwrap_or(text);
    let text = text.strip_suffix(FENCE_CLOSE).unwrap_or(text);
    text.trim()
}

/// Parses a model answer. `Ok(None)` means the model sent nothing but
/// whitespace; callers decide whether that is an error.
pub fn parse(raw: &str) -> Result<Option<Value>, ExplorerError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }

    let json_text = strip_fences(raw);
    serde_json::from_str(json_text).map(Some).map_err(|e| {
        tracing::error!(payload = json_text, error = %e, "model answer is not valid JSON");
        ExplorerError::MalformedJson(e)
    })
}

/// Reads `{"lat": <number>, "lng": <number>}`; anything else is `None`.
pub fn coordinates(value: &Value) -> Option<Coordinates> {
    let object = value.as_object()?;
    let lat = object.get("lat")?.as_f64()?;
    let lng = object.get("lng")?.as_f64()?;
    Coordinates::try_new(lat, lng)
}
