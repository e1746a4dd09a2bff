use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use super::currency::Currency;
use super::impl_model;
use super::partner::Partner;
use crate::utils::date_format::billingo_date_format_option;

string_enum! {
    /// Expense category.
    pub enum Category {
        Advertisement => "advertisement",
        Development => "development",
        Education => "education",
        Overheads => "overheads",
        Service => "service",
        Stock => "stock",
        TangibleAssets => "tangible_assets",
        TravelExpenses => "travel_expenses",
        Other => "other",
    }
}

string_enum! {
    pub enum SpendingPaymentMethod {
        Bankcard => "bankcard",
        Cash => "cash",
        WireTransfer => "wire_transfer",
    }
}

string_enum! {
    /// Which date a spending list filters on.
    pub enum SpendingDate {
        DueDate => "due_date",
        FulfillmentDate => "fulfillment_date",
        InvoiceDate => "invoice_date",
        PaidAt => "paid_at",
    }
}

/// Body of `POST /spendings` and `PUT /spendings/{id}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SpendingSave {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "billingo_date_format_option"
    )]
    pub paid_at: Option<Date>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "billingo_date_format_option"
    )]
    pub fulfillment_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "billingo_date_format_option"
    )]
    pub invoice_date: Option<Date>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "billingo_date_format_option"
    )]
    pub due_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_gross: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_gross_huf: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_vat_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_vat_amount_huf: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<SpendingPaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl_model!(
    SpendingSave,
    [
        "partner_id",
        "category",
        "paid_at",
        "fulfillment_date",
        "invoice_number",
        "invoice_date",
        "due_date",
        "currency",
        "conversion_rate",
        "total_gross",
        "total_gross_huf",
        "total_vat_amount",
        "total_vat_amount_huf",
        "payment_method",
        "comment",
    ]
);

impl SpendingSave {
    #[must_use]
    pub fn new(
        invoice_number: impl Into<String>,
        currency: Currency,
        total_gross: Decimal,
        category: Category,
    ) -> Self {
        Self {
            invoice_number: Some(invoice_number.into()),
            currency: Some(currency),
            total_gross: Some(total_gross),
            category: Some(category),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_partner(mut self, partner_id: i64) -> Self {
        self.partner_id = Some(partner_id);
        self
    }

    #[must_use]
    pub fn with_payment_method(mut self, payment_method: SpendingPaymentMethod) -> Self {
        self.payment_method = Some(payment_method);
        self
    }

    #[must_use]
    pub fn with_dates(mut self, invoice_date: Date, fulfillment_date: Date, due_date: Date) -> Self {
        self.invoice_date = Some(invoice_date);
        self.fulfillment_date = Some(fulfillment_date);
        self.due_date = Some(due_date);
        self
    }

    #[must_use]
    pub fn with_paid_at(mut self, paid_at: Date) -> Self {
        self.paid_at = Some(paid_at);
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A recorded expense as returned by the API.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Spending {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "billingo_date_format_option"
    )]
    pub paid_at: Option<Date>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "billingo_date_format_option"
    )]
    pub fulfillment_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<Partner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_gross: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_gross_huf: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_vat_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_vat_amount_huf: Option<Decimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "billingo_date_format_option"
    )]
    pub invoice_date: Option<Date>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "billingo_date_format_option"
    )]
    pub due_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<SpendingPaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_created_by_nav: Option<bool>,
}

impl_model!(
    Spending,
    [
        "id",
        "organization_id",
        "category",
        "paid_at",
        "fulfillment_date",
        "partner",
        "invoice_number",
        "currency",
        "conversion_rate",
        "total_gross",
        "total_gross_huf",
        "total_vat_amount",
        "total_vat_amount_huf",
        "invoice_date",
        "due_date",
        "payment_method",
        "comment",
        "is_created_by_nav",
    ]
);

/// Parameters for listing spendings
#[derive(Debug, Serialize, Default, Clone)]
pub struct ListParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Free-text search
    #[serde(rename = "q", skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spending_date: Option<SpendingDate>,
    #[serde(skip_serializing_if = "Option::is_none", with = "billingo_date_format_option")]
    pub start_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none", with = "billingo_date_format_option")]
    pub end_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<SpendingPaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
}

impl ListParameters {
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Restrict to spendings whose `spending_date` falls between the two dates.
    #[must_use]
    pub fn with_date_range(mut self, spending_date: SpendingDate, start: Date, end: Date) -> Self {
        self.spending_date = Some(spending_date);
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn with_paid(mut self, paid: bool) -> Self {
        self.paid = Some(paid);
        self
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;
    use time::macros::date;

    use super::*;
    use crate::configuration::BooleanFormat;
    use crate::utils::query;

    #[test]
    fn spending_save_wire_format() {
        let spending = SpendingSave::new("VENDOR-2024-001", Currency::Huf, dec!(125000), Category::Stock)
            .with_partner(123)
            .with_payment_method(SpendingPaymentMethod::WireTransfer)
            .with_paid_at(date!(2024 - 01 - 15));

        assert_eq!(
            serde_json::to_value(&spending).unwrap(),
            json!({
                "partner_id": 123,
                "category": "stock",
                "paid_at": "2024-01-15",
                "invoice_number": "VENDOR-2024-001",
                "currency": "HUF",
                "total_gross": 125000.0,
                "payment_method": "wire_transfer"
            })
        );
    }

    #[test]
    fn category_literals() {
        for category in ["stock", "service", "overheads", "development"] {
            assert!(category.parse::<Category>().is_ok());
        }
    }

    #[test]
    fn list_parameters_render_paid_flag() {
        let params = ListParameters::default().with_query("office").with_paid(true);

        let pairs = query::encode(&params, BooleanFormat::Int).unwrap();
        assert!(pairs.contains(&("q".to_string(), "office".to_string())));
        assert!(pairs.contains(&("paid".to_string(), "1".to_string())));

        let pairs = query::encode(&params, BooleanFormat::String).unwrap();
        assert!(pairs.contains(&("paid".to_string(), "true".to_string())));
    }
}
