use serde::{Deserialize, Serialize};

use super::country::Country;
use super::impl_model;

string_enum! {
    pub enum PartnerTaxType {
        /// The partner's tax status was never recorded.
        NotSet => "",
        Foreign => "FOREIGN",
        HasTaxNumber => "HAS_TAX_NUMBER",
        NoTaxNumber => "NO_TAX_NUMBER",
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<Country>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl_model!(Address, ["country_code", "post_code", "city", "address"]);

impl Address {
    #[must_use]
    pub fn new(
        country_code: Country,
        post_code: impl Into<String>,
        city: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            country_code: Some(country_code),
            post_code: Some(post_code.into()),
            city: Some(city.into()),
            address: Some(address.into()),
        }
    }
}

/// A customer or supplier.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Partner {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_ledger_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_type: Option<PartnerTaxType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_member_tax_number: Option<String>,
}

impl_model!(
    Partner,
    [
        "id",
        "name",
        "address",
        "emails",
        "taxcode",
        "iban",
        "swift",
        "account_number",
        "phone",
        "general_ledger_number",
        "tax_type",
        "group_member_tax_number",
    ]
);

impl Partner {
    /// Create a new partner with just a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.emails.push(email.into());
        self
    }

    #[must_use]
    pub fn with_taxcode(mut self, taxcode: impl Into<String>) -> Self {
        self.taxcode = Some(taxcode.into());
        self
    }

    #[must_use]
    pub fn with_tax_type(mut self, tax_type: PartnerTaxType) -> Self {
        self.tax_type = Some(tax_type);
        self
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn with_iban(mut self, iban: impl Into<String>) -> Self {
        self.iban = Some(iban.into());
        self
    }
}

/// Parameters for listing partners
#[derive(Debug, Serialize, Default, Clone)]
pub struct ListParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Page size, between 1 and 100 on the server side
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    /// Free-text search over name, tax code and emails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl ListParameters {
    #[must_use]
    pub fn builder() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::entities::Model;

    #[test]
    fn partner_round_trip_keeps_set_fields() {
        let partner = Partner::new("Acme Corporation")
            .with_address(Address::new(Country::Hu, "1234", "Budapest", "Sample Street 123"))
            .with_email("billing@acme.com")
            .with_taxcode("12345678-1-23")
            .with_tax_type(PartnerTaxType::HasTaxNumber);

        let value = serde_json::to_value(&partner).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Acme Corporation",
                "address": {
                    "country_code": "HU",
                    "post_code": "1234",
                    "city": "Budapest",
                    "address": "Sample Street 123"
                },
                "emails": ["billing@acme.com"],
                "taxcode": "12345678-1-23",
                "tax_type": "HAS_TAX_NUMBER"
            })
        );

        let back: Partner = serde_json::from_value(value).unwrap();
        assert_eq!(back, partner);
    }

    #[test]
    fn server_fields_outside_schema_are_ignored() {
        let partner: Partner = serde_json::from_value(json!({
            "id": 7,
            "name": "Acme",
            "custom_billing_settings": { "document_form": "electronic" },
            "tax_type": ""
        }))
        .unwrap();
        assert_eq!(partner.id, Some(7));
        assert_eq!(partner.tax_type, Some(PartnerTaxType::NotSet));
    }

    #[test]
    fn from_map_builds_partner() {
        let map = json!({ "name": "Test Company", "taxcode": "12345678-1-23" });
        let serde_json::Value::Object(map) = map else { unreachable!() };
        let partner = Partner::from_map(map).unwrap();
        assert_eq!(partner.name.as_deref(), Some("Test Company"));
        assert_eq!(partner.taxcode.as_deref(), Some("12345678-1-23"));
        assert!(partner.emails.is_empty());
    }

    #[test]
    fn tax_type_literals() {
        assert_eq!(PartnerTaxType::HasTaxNumber.as_str(), "HAS_TAX_NUMBER");
        assert_eq!(PartnerTaxType::NoTaxNumber.as_str(), "NO_TAX_NUMBER");
        assert!(PartnerTaxType::allowable_values().contains(&"HAS_TAX_NUMBER"));
    }

    #[test]
    fn list_parameters_builder() {
        let params = ListParameters::builder().with_page(2).with_query("acme");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "page": 2, "query": "acme" })
        );
    }
}
