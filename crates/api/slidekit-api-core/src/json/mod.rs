use serde::de::DeserializeOwned;
use serde_json::{Map, Value as JsonValue};

use crate::ConfigError;

/// Convert a camelCase key (`lerpFactor`) to the snake_case form used by the
/// serde derives (`lerp_factor`). Keys that are already snake_case pass through.
pub fn camel_to_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.char_indices() {
        if ch.is_ascii_uppercase() {
            if i > 0 && !out.ends_with('_') {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Normalize a host configuration object into the canonical shape understood by
/// the config structs:
///
/// - `null` becomes an empty object (all defaults),
/// - object keys are rewritten from camelCase to snake_case (recursively),
/// - `null` fields are dropped so that `#[serde(default)]` applies to them.
pub fn normalize_config_json(value: JsonValue) -> Result<JsonValue, ConfigError> {
    match value {
        JsonValue::Null => Ok(JsonValue::Object(Map::new())),
        JsonValue::Object(map) => Ok(JsonValue::Object(normalize_object(map))),
        JsonValue::Bool(_) => Err(ConfigError::NotAnObject("bool")),
        JsonValue::Number(_) => Err(ConfigError::NotAnObject("number")),
        JsonValue::String(_) => Err(ConfigError::NotAnObject("string")),
        JsonValue::Array(_) => Err(ConfigError::NotAnObject("array")),
    }
}

fn normalize_object(map: Map<String, JsonValue>) -> Map<String, JsonValue> {
    let mut out = Map::with_capacity(map.len());
    for (key, value) in map {
        let value = match value {
            JsonValue::Null => continue,
            JsonValue::Object(inner) => JsonValue::Object(normalize_object(inner)),
            other => other,
        };
        out.insert(camel_to_snake(&key), value);
    }
    out
}

/// Normalize and deserialize an already-parsed JSON value into a config type.
pub fn config_from_value<T: DeserializeOwned>(value: JsonValue) -> Result<T, ConfigError> {
    let normalized = normalize_config_json(value)?;
    Ok(serde_json::from_value(normalized)?)
}

/// Parse a host configuration string into a config type.
pub fn parse_config_json<T: DeserializeOwned>(text: &str) -> Result<T, ConfigError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return config_from_value(JsonValue::Null);
    }
    let value: JsonValue = serde_json::from_str(trimmed)?;
    config_from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, Default, PartialEq)]
    #[serde(default)]
    struct Sample {
        lerp_factor: f32,
        preload_items: u32,
        infinite: bool,
    }

    #[test]
    fn camel_keys_become_snake() {
        assert_eq!(camel_to_snake("lerpFactor"), "lerp_factor");
        assert_eq!(camel_to_snake("slideWidth"), "slide_width");
        assert_eq!(camel_to_snake("gap"), "gap");
        assert_eq!(camel_to_snake("snap_strength"), "snap_strength");
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let s: Sample =
            config_from_value(json!({ "lerpFactor": 0.5, "preloadItems": null })).unwrap();
        assert_eq!(
            s,
            Sample {
                lerp_factor: 0.5,
                preload_items: 0,
                infinite: false
            }
        );
    }

    #[test]
    fn empty_text_is_all_defaults() {
        let s: Sample = parse_config_json("   ").unwrap();
        assert_eq!(s, Sample::default());
    }

    #[test]
    fn non_object_is_rejected() {
        let err = normalize_config_json(json!([1, 2])).unwrap_err();
        assert!(matches!(err, ConfigError::NotAnObject("array")));
        assert!(parse_config_json::<Sample>("{ nope").is_err());
    }
}
