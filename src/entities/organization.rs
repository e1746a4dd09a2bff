use serde::{Deserialize, Serialize};

use super::impl_model;
use super::partner::Address;

/// The organization the API key belongs to.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrganizationData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eu_tax_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_taxpayer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ev_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_settled: Option<bool>,
}

impl_model!(
    OrganizationData,
    [
        "name",
        "tax_code",
        "eu_tax_code",
        "address",
        "small_taxpayer",
        "ev_number",
        "cash_settled",
    ]
);
