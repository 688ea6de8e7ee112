use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::{Operation, TEXT_KIND, TRUE_SENTINEL};
use crate::error::RenderError;

/// One record of the wire format, before normalization.
#[derive(Debug, Deserialize)]
struct RawOp {
    insert: Option<Value>,
    #[serde(default)]
    attributes: Option<BTreeMap<String, Value>>,
}

/// Decodes a JSON array of insert records into operations.
///
/// Nothing is rendered until the whole input decodes, so a decoding failure
/// never comes with partial output.
pub fn decode_operations(bytes: &[u8]) -> Result<Vec<Operation>, RenderError> {
    let raw: Vec<RawOp> = serde_json::from_slice(bytes)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, op)| op.into_operation(index))
        .collect()
}

impl RawOp {
    fn into_operation(self, index: usize) -> Result<Operation, RenderError> {
        let invalid = |reason: String| RenderError::InvalidOperation { index, reason };

        let (kind, payload) = match self.insert {
            Some(Value::String(text)) => (TEXT_KIND.to_string(), text),
            Some(Value::Object(embed)) => {
                if embed.len() != 1 {
                    return Err(invalid(format!(
                        "embed must have exactly one key, found {}",
                        embed.len()
                    )));
                }
                let Some((kind, value)) = embed.into_iter().next() else {
                    return Err(invalid("embed is empty".to_string()));
                };
                let payload = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (kind, payload)
            }
            Some(other) => {
                return Err(invalid(format!(
                    "insert must be a string or an object, found {other}"
                )));
            }
            None => return Err(invalid("record has no insert".to_string())),
        };

        let mut op = Operation::new(kind, payload);
        for (name, value) in self.attributes.unwrap_or_default() {
            match value {
                Value::String(s) => op = op.with_attr(name, s),
                Value::Bool(true) => op = op.with_attr(name, TRUE_SENTINEL),
                Value::Number(n) => op = op.with_attr(name, n.to_string()),
                Value::Bool(false) | Value::Null => {}
                Value::Array(_) | Value::Object(_) => {
                    return Err(invalid(format!(
                        "attribute {name:?} must be a string, number or boolean"
                    )));
                }
            }
        }
        Ok(op)
    }
}
