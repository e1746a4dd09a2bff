use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub mod bank_account;
pub mod country;
pub mod currency;
pub mod document;
pub mod document_block;
pub mod document_export;
pub mod document_insert;
pub mod organization;
pub mod partner;
pub mod payment;
pub mod product;
pub mod spending;
pub mod util;
pub mod vat;

/// The paginated envelope Billingo wraps list results in.
///
/// `total` is the number of matching records on the server, not the length of
/// `data`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_url: Option<String>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: None,
            per_page: None,
            current_page: None,
            last_page: None,
            prev_page_url: None,
            next_page_url: None,
        }
    }
}

impl<T> ListResponse<T> {
    /// Whether the server reported another page after this one.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.next_page_url.is_some()
    }
}

pub type PartnerList = ListResponse<partner::Partner>;
pub type ProductList = ListResponse<product::Product>;
pub type DocumentList = ListResponse<document::Document>;
pub type DocumentBlockList = ListResponse<document_block::DocumentBlock>;
pub type BankAccountList = ListResponse<bank_account::BankAccount>;
pub type SpendingList = ListResponse<spending::Spending>;

/// Loosely-typed access to a model through its wire field names.
///
/// Lookups and assignments are bounded by [`Model::FIELDS`]: a key outside the
/// schema is rejected with [`Error::UnknownField`] instead of being stored.
pub trait Model: Serialize + DeserializeOwned {
    /// Name used in error messages.
    const NAME: &'static str;
    /// Every wire field the model knows.
    const FIELDS: &'static [&'static str];

    /// Builds the model from a JSON object, rejecting keys outside the schema.
    fn from_map(map: Map<String, Value>) -> Result<Self> {
        if let Some(field) = map.keys().find(|key| !Self::FIELDS.contains(&key.as_str())) {
            return Err(Error::UnknownField {
                model: Self::NAME,
                field: field.clone(),
            });
        }
        serde_json::from_value(Value::Object(map)).map_err(Error::from)
    }

    /// The model as a JSON object. Unset fields are absent.
    fn to_map(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self).map_err(Error::Serialization)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }

    /// The current value of `field`, `None` when it is unset.
    fn get(&self, field: &str) -> Result<Option<Value>> {
        Self::check_field(field)?;
        Ok(self.to_map()?.remove(field))
    }

    fn contains(&self, field: &str) -> Result<bool> {
        Ok(self.get(field)?.is_some())
    }

    /// Assigns `value` to `field`. The value must have the field's wire type.
    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        Self::check_field(field)?;
        let mut map = self.to_map()?;
        map.insert(field.to_string(), value);
        *self = serde_json::from_value(Value::Object(map))?;
        Ok(())
    }

    fn unset(&mut self, field: &str) -> Result<()> {
        Self::check_field(field)?;
        let mut map = self.to_map()?;
        map.remove(field);
        *self = serde_json::from_value(Value::Object(map))?;
        Ok(())
    }

    fn check_field(field: &str) -> Result<()> {
        if Self::FIELDS.contains(&field) {
            Ok(())
        } else {
            Err(Error::UnknownField {
                model: Self::NAME,
                field: field.to_string(),
            })
        }
    }
}

/// Implements [`Model`] for a struct, listing its wire field names.
macro_rules! impl_model {
    ($model:ty, [$($field:literal),+ $(,)?]) => {
        impl $crate::entities::Model for $model {
            const NAME: &'static str = stringify!($model);
            const FIELDS: &'static [&'static str] = &[$($field),+];
        }
    };
}
pub(crate) use impl_model;
