use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// SEO fields as returned by the generation model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoPayload {
    pub content: Vec<String>,
    pub meta_description: String,
    pub keywords: String,
    pub description: Vec<String>,
}

/// Returns the interior of the first ```` ```json ```` block, or `raw` untouched
/// when there is none.
///
/// Only the first block is looked at. An unterminated block runs to the end of
/// the text. Output that is neither fenced nor plain JSON is left for the JSON
/// parser to reject.
pub fn extract_json_block(raw: &str) -> &str {
    match raw.split_once(JSON_FENCE) {
        Some((_, rest)) => {
            let inner = rest.split_once(FENCE).map_or(rest, |(inner, _)| inner);
            inner.trim()
        }
        None => raw,
    }
}

pub fn parse_seo_payload(raw: &str) -> Result<SeoPayload> {
    let json_str = extract_json_block(raw);
    let value: Value = serde_json::from_str(json_str).map_err(Error::JsonDecode)?;

    let object = value.as_object().ok_or_else(|| Error::UnexpectedShape {
        key: "<root>".to_string(),
        expected: "a JSON object",
    })?;

    Ok(SeoPayload {
        content: string_list(object, "content")?,
        description: string_list(object, "description")?,
        meta_description: string_field(object, "meta_description")?,
        keywords: string_field(object, "keywords")?,
    })
}

fn field<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    object.get(key).ok_or_else(|| Error::missing_key(key))
}

// Numbers and booleans are passed on in their JSON spelling.
fn string_field(object: &Map<String, Value>, key: &str) -> Result<String> {
    match field(object, key)? {
        Value::String(s) => Ok(s.clone()),
        scalar @ (Value::Number(_) | Value::Bool(_)) => Ok(scalar.to_string()),
        _ => Err(Error::UnexpectedShape {
            key: key.to_string(),
            expected: "a string, number or boolean",
        }),
    }
}

// A lone string is taken as a single variation.
fn string_list(object: &Map<String, Value>, key: &str) -> Result<Vec<String>> {
    let shape_error = || Error::UnexpectedShape {
        key: key.to_string(),
        expected: "a string or an array of strings",
    };

    match field(object, key)? {
        Value::String(s) => Ok(vec![s.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(shape_error))
            .collect(),
        _ => Err(shape_error()),
    }
}
