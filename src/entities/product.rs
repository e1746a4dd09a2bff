use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::impl_model;
use super::vat::{Entitlement, Vat};

/// A reusable line item template.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<Vat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_unit_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_ledger_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_ledger_taxcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entitlement: Option<Entitlement>,
}

impl_model!(
    Product,
    [
        "id",
        "name",
        "comment",
        "currency",
        "vat",
        "net_unit_price",
        "unit",
        "general_ledger_number",
        "general_ledger_taxcode",
        "entitlement",
    ]
);

impl Product {
    /// The fields Billingo requires when creating a product.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        currency: Currency,
        vat: Vat,
        net_unit_price: Decimal,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            currency: Some(currency),
            vat: Some(vat),
            net_unit_price: Some(net_unit_price),
            unit: Some(unit.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn with_entitlement(mut self, entitlement: Entitlement) -> Self {
        self.entitlement = Some(entitlement);
        self
    }
}

/// Parameters for listing products
#[derive(Debug, Serialize, Default, Clone)]
pub struct ListParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
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
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    #[test]
    fn product_serializes_enums_as_literals() {
        let product = Product::new("Web Development", Currency::Huf, Vat::TwentySeven, dec!(15000), "hour");
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["currency"], json!("HUF"));
        assert_eq!(value["vat"], json!("27%"));
        assert_eq!(value["unit"], json!("hour"));
        assert!(value.get("id").is_none());
    }

    #[test]
    fn product_with_unknown_vat_cannot_be_sent() {
        let mut product = Product::new("Widget", Currency::Eur, Vat::Zero, dec!(10), "db");
        product.vat = Some(Vat::Unknown("42%".to_string()));
        assert!(serde_json::to_string(&product).is_err());
    }

    #[test]
    fn product_from_server() {
        let product: Product = serde_json::from_value(json!({
            "id": 99,
            "name": "Consulting",
            "currency": "EUR",
            "vat": "AAM",
            "net_unit_price": 120.5,
            "unit": "hour",
            "entitlement": "AAM"
        }))
        .unwrap();
        assert_eq!(product.id, Some(99));
        assert_eq!(product.net_unit_price, Some(dec!(120.5)));
        assert_eq!(product.vat, Some(Vat::Aam));
        assert_eq!(product.entitlement, Some(Entitlement::Aam));
    }
}
