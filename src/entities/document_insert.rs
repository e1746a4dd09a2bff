//! Request bodies for creating documents (invoices, proformas, drafts, advances).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use super::currency::Currency;
use super::document::DocumentLanguage;
use super::impl_model;
use super::payment::PaymentMethod;
use super::vat::{Entitlement, Vat};
use crate::utils::date_format::billingo_date_format_option;

string_enum! {
    pub enum DocumentInsertType {
        Invoice => "invoice",
        Proforma => "proforma",
        Draft => "draft",
        Advance => "advance",
    }
}

string_enum! {
    /// Whether an item's unit price includes VAT.
    pub enum UnitPriceType {
        Gross => "gross",
        Net => "net",
    }
}

string_enum! {
    pub enum DiscountType {
        Percent => "percent",
    }
}

string_enum! {
    /// Online payment provider linked from the document.
    pub enum OnlinePayment {
        NotSet => "",
        Barion => "Barion",
        SimplePay => "SimplePay",
        No => "no",
    }
}

string_enum! {
    /// Rounding applied to the cash total.
    pub enum RoundType {
        Five => "five",
        None => "none",
        One => "one",
        Ten => "ten",
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Discount {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
}

impl_model!(Discount, ["type", "value"]);

impl Discount {
    #[must_use]
    pub fn percent(value: Decimal) -> Self {
        Self {
            discount_type: Some(DiscountType::Percent),
            value: Some(value),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mediated_service: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub without_financial_fulfillment: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_payment: Option<OnlinePayment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_send_onlineszamla_by_user: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instant_payment: Option<bool>,
}

impl_model!(
    DocumentSettings,
    [
        "mediated_service",
        "without_financial_fulfillment",
        "online_payment",
        "round",
        "no_send_onlineszamla_by_user",
        "order_number",
        "place_id",
        "instant_payment",
    ]
);

/// One line on a new document.
///
/// Either reference a stored product through `product_id`, or describe the
/// item inline with `name`, `unit_price`, `unit_price_type`, `unit` and `vat`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentInsertItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price_type: Option<UnitPriceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<Vat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entitlement: Option<Entitlement>,
}

impl_model!(
    DocumentInsertItem,
    [
        "product_id",
        "name",
        "unit_price",
        "unit_price_type",
        "quantity",
        "unit",
        "vat",
        "comment",
        "entitlement",
    ]
);

impl DocumentInsertItem {
    /// An item described inline.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        unit_price: Decimal,
        unit_price_type: UnitPriceType,
        quantity: Decimal,
        unit: impl Into<String>,
        vat: Vat,
    ) -> Self {
        Self {
            name: Some(name.into()),
            unit_price: Some(unit_price),
            unit_price_type: Some(unit_price_type),
            quantity: Some(quantity),
            unit: Some(unit.into()),
            vat: Some(vat),
            ..Default::default()
        }
    }

    /// An item taken from a stored product.
    #[must_use]
    pub fn from_product(product_id: i64, quantity: Decimal) -> Self {
        Self {
            product_id: Some(product_id),
            quantity: Some(quantity),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentInsert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account_id: Option<i64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentInsertType>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "billingo_date_format_option"
    )]
    pub fulfillment_date: Option<Date>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "billingo_date_format_option"
    )]
    pub due_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<DocumentLanguage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electronic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<DocumentInsertItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<DocumentSettings>,
    /// Ids of advance invoices settled by this document.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advance_invoice: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instant_payment: Option<bool>,
}

impl_model!(
    DocumentInsert,
    [
        "vendor_id",
        "partner_id",
        "block_id",
        "bank_account_id",
        "type",
        "fulfillment_date",
        "due_date",
        "payment_method",
        "language",
        "currency",
        "conversion_rate",
        "electronic",
        "paid",
        "items",
        "comment",
        "settings",
        "advance_invoice",
        "discount",
        "instant_payment",
    ]
);

impl DocumentInsert {
    /// Create a new document for `partner_id`, numbered from `block_id`.
    #[must_use]
    pub fn new(partner_id: i64, block_id: i64, document_type: DocumentInsertType) -> Self {
        Self {
            partner_id: Some(partner_id),
            block_id: Some(block_id),
            document_type: Some(document_type),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_dates(mut self, fulfillment_date: Date, due_date: Date) -> Self {
        self.fulfillment_date = Some(fulfillment_date);
        self.due_date = Some(due_date);
        self
    }

    #[must_use]
    pub fn with_payment_method(mut self, payment_method: PaymentMethod) -> Self {
        self.payment_method = Some(payment_method);
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: DocumentLanguage) -> Self {
        self.language = Some(language);
        self
    }

    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    #[must_use]
    pub fn with_bank_account(mut self, bank_account_id: i64) -> Self {
        self.bank_account_id = Some(bank_account_id);
        self
    }

    #[must_use]
    pub fn with_electronic(mut self, electronic: bool) -> Self {
        self.electronic = Some(electronic);
        self
    }

    #[must_use]
    pub fn with_paid(mut self, paid: bool) -> Self {
        self.paid = Some(paid);
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: DocumentInsertItem) -> Self {
        self.items.push(item);
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn with_discount(mut self, discount: Discount) -> Self {
        self.discount = Some(discount);
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: DocumentSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;
    use time::macros::date;

    use super::*;

    fn invoice() -> DocumentInsert {
        DocumentInsert::new(123, 12345, DocumentInsertType::Invoice)
            .with_bank_account(67890)
            .with_dates(date!(2024 - 01 - 15), date!(2024 - 02 - 15))
            .with_payment_method(PaymentMethod::WireTransfer)
            .with_language(DocumentLanguage::Hu)
            .with_currency(Currency::Huf)
            .with_electronic(true)
            .with_paid(false)
            .with_item(
                DocumentInsertItem::new(
                    "Web Development",
                    dec!(50000),
                    UnitPriceType::Gross,
                    dec!(10),
                    "hour",
                    Vat::TwentySeven,
                )
                .with_comment("Development work for November 2024"),
            )
            .with_item(DocumentInsertItem::from_product(456, dec!(5)))
            .with_comment("Thank you for your business!")
    }

    #[test]
    fn invoice_wire_format() {
        let value = serde_json::to_value(invoice()).unwrap();
        assert_eq!(value["partner_id"], json!(123));
        assert_eq!(value["block_id"], json!(12345));
        assert_eq!(value["type"], json!("invoice"));
        assert_eq!(value["fulfillment_date"], json!("2024-01-15"));
        assert_eq!(value["due_date"], json!("2024-02-15"));
        assert_eq!(value["payment_method"], json!("wire_transfer"));
        assert_eq!(value["language"], json!("hu"));
        assert_eq!(value["currency"], json!("HUF"));
        assert_eq!(value["items"].as_array().unwrap().len(), 2);
        assert_eq!(value["items"][0]["unit_price_type"], json!("gross"));
        assert_eq!(value["items"][0]["vat"], json!("27%"));
        assert_eq!(value["items"][1], json!({ "product_id": 456, "quantity": 5.0 }));
        assert!(value.get("discount").is_none());
        assert!(value.get("advance_invoice").is_none());
    }

    #[test]
    fn invoice_round_trip() {
        let document = invoice().with_discount(Discount::percent(dec!(10)));
        let json = serde_json::to_string(&document).unwrap();
        let back: DocumentInsert = serde_json::from_str(&json).unwrap();
        assert_eq!(back, document);
    }

    #[test]
    fn unit_price_type_is_exactly_gross_and_net() {
        assert_eq!(UnitPriceType::allowable_values(), &["gross", "net"]);
    }

    #[test]
    fn document_insert_type_literals() {
        assert_eq!(
            DocumentInsertType::allowable_values(),
            &["invoice", "proforma", "draft", "advance"]
        );
    }

    #[test]
    fn online_payment_literals() {
        assert_eq!(OnlinePayment::Barion.as_str(), "Barion");
        assert_eq!(OnlinePayment::SimplePay.as_str(), "SimplePay");
        assert_eq!(OnlinePayment::No.as_str(), "no");
    }

    #[test]
    fn unknown_payment_method_fails_before_sending() {
        let mut document = invoice();
        document.payment_method = Some(PaymentMethod::Unknown("crypto".to_string()));
        assert!(serde_json::to_vec(&document).is_err());
    }
}
