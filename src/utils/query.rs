//! Query-string encoding for list and filter parameters.
//!
//! Parameter structs derive [`Serialize`] and are flattened into `(name, value)`
//! pairs here rather than through `reqwest`'s form encoder, because Billingo
//! expects booleans in the format selected on the
//! [`Configuration`](crate::configuration::Configuration) and list values joined
//! with commas.

use serde::Serialize;
use serde_json::Value;

use crate::configuration::BooleanFormat;
use crate::error::{Error, Result};

/// Flattens `params` into query pairs.
///
/// Unset (`null`) values are skipped, strings are passed through verbatim and
/// arrays are joined with `,`. Anything other than a struct or map at the top
/// level is rejected.
pub fn encode<T: Serialize + ?Sized>(
    params: &T,
    boolean_format: BooleanFormat,
) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(params).map_err(Error::Serialization)?;

    let map = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map,
        other => {
            return Err(Error::InvalidArgument {
                parameter: "query",
                reason: format!("expected a map of parameters, got `{other}`"),
            });
        }
    };

    Ok(map
        .into_iter()
        .filter_map(|(name, value)| render(&value, boolean_format).map(|value| (name, value)))
        .collect())
}

fn render(value: &Value, boolean_format: BooleanFormat) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(boolean_format.render(*flag).to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| render(item, boolean_format))
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}
