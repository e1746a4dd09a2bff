use serde::{Deserialize, Serialize};

use super::impl_model;

/// Result of a tax number lookup.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaxNumber {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl_model!(TaxNumber, ["tax_number", "result"]);

/// Server clock, seconds since the Unix epoch.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerTime {
    #[serde(default)]
    pub epoch: i64,
}

impl_model!(ServerTime, ["epoch"]);

impl ServerTime {
    pub fn to_offset_date_time(self) -> crate::error::Result<time::OffsetDateTime> {
        time::OffsetDateTime::from_unix_timestamp(self.epoch).map_err(|e| {
            crate::error::Error::InvalidArgument {
                parameter: "epoch",
                reason: e.to_string(),
            }
        })
    }
}

/// A v3 identifier resolved from a legacy (v2) one.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Id {
    #[serde(default)]
    pub id: i64,
}

impl_model!(Id, ["id"]);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn server_time_converts_to_datetime() {
        let time: ServerTime = serde_json::from_value(json!({ "epoch": 1_700_000_000 })).unwrap();
        let datetime = time.to_offset_date_time().unwrap();
        assert_eq!(datetime.year(), 2023);
    }
}
