use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use super::currency::Currency;
use super::document_insert::{Discount, DocumentSettings};
use super::impl_model;
use super::partner::Partner;
use super::payment::{PaymentMethod, PaymentStatus};
use super::vat::{Entitlement, Vat};
use crate::utils::date_format::billingo_date_format_option;

string_enum! {
    /// The kind of an issued document.
    pub enum DocumentType {
        Advance => "advance",
        Cancellation => "cancellation",
        CertificateOfCompletion => "d_cert_of_completion",
        Draft => "draft",
        Dossier => "dossier",
        Invoice => "invoice",
        Modification => "modification",
        Offer => "offer",
        OrderForm => "order_form",
        Proforma => "proforma",
        Receipt => "receipt",
        ReceiptCancellation => "receipt_cancellation",
        Waybill => "waybill",
    }
}

string_enum! {
    pub enum DocumentLanguage {
        De => "de",
        En => "en",
        Fr => "fr",
        Hr => "hr",
        Hu => "hu",
        It => "it",
        Ro => "ro",
        Sk => "sk",
        Us => "us",
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_unit_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<Vat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entitlement: Option<Entitlement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl_model!(
    DocumentItem,
    [
        "product_id",
        "name",
        "net_unit_amount",
        "quantity",
        "unit",
        "net_amount",
        "gross_amount",
        "vat",
        "vat_amount",
        "entitlement",
        "comment",
    ]
);

/// Totals for a single VAT rate.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentVatRateSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_percentage: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_rate_net_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_rate_vat_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_rate_vat_amount_local: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_rate_gross_amount: Option<Decimal>,
}

impl_model!(
    DocumentVatRateSummary,
    [
        "vat_name",
        "vat_percentage",
        "vat_rate_net_amount",
        "vat_rate_vat_amount",
        "vat_rate_vat_amount_local",
        "vat_rate_gross_amount",
    ]
);

/// Document totals. `_local` amounts are in HUF.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_amount_local: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_amount_local: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_amount_local: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vat_rate_summary: Vec<DocumentVatRateSummary>,
}

impl_model!(
    DocumentSummary,
    [
        "net_amount",
        "net_amount_local",
        "gross_amount",
        "gross_amount_local",
        "vat_amount",
        "vat_amount_local",
        "vat_rate_summary",
    ]
);

/// An issued document as returned by the API.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_total: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
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
    pub fulfillment_date: Option<Date>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "billingo_date_format_option"
    )]
    pub due_date: Option<Date>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "billingo_date_format_option"
    )]
    pub paid_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<Partner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electronic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<DocumentLanguage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<DocumentItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<DocumentSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<DocumentSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_szamla_status: Option<String>,
}

impl_model!(
    Document,
    [
        "id",
        "invoice_number",
        "type",
        "cancelled",
        "block_id",
        "payment_status",
        "payment_method",
        "gross_total",
        "currency",
        "conversion_rate",
        "invoice_date",
        "fulfillment_date",
        "due_date",
        "paid_date",
        "partner",
        "electronic",
        "comment",
        "tags",
        "language",
        "items",
        "summary",
        "settings",
        "discount",
        "online_szamla_status",
    ]
);

/// Body of `POST /documents/{id}/send`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendDocument {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
}

impl_model!(SendDocument, ["emails"]);

impl SendDocument {
    #[must_use]
    pub fn to<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            emails: emails.into_iter().map(Into::into).collect(),
        }
    }
}

/// Body of `POST /documents/{id}/cancel`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentCancellation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
    /// Comma separated addresses notified about the cancellation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_recipients: Option<String>,
}

impl_model!(
    DocumentCancellation,
    ["cancellation_reason", "cancellation_recipients"]
);

impl DocumentCancellation {
    #[must_use]
    pub fn with_reason(reason: impl Into<String>) -> Self {
        Self {
            cancellation_reason: Some(reason.into()),
            cancellation_recipients: None,
        }
    }
}

/// Body of `POST /documents/{id}/create-from-proforma`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvoiceSettings {
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
}

impl_model!(InvoiceSettings, ["fulfillment_date", "due_date"]);

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentPublicUrl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
}

impl_model!(DocumentPublicUrl, ["public_url"]);

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OnlineSzamlaStatusMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_result_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_readable_message: Option<String>,
}

/// Submission status of a document at the tax authority (NAV Online Számla).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OnlineSzamlaStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<OnlineSzamlaStatusMessage>,
}

impl_model!(OnlineSzamlaStatus, ["transaction_id", "status", "messages"]);

/// Parameters for listing documents
#[derive(Debug, Serialize, Default, Clone)]
pub struct ListParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    /// Invoice date lower bound
    #[serde(skip_serializing_if = "Option::is_none", with = "billingo_date_format_option")]
    pub start_date: Option<Date>,
    /// Invoice date upper bound
    #[serde(skip_serializing_if = "Option::is_none", with = "billingo_date_format_option")]
    pub end_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_year: Option<i32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "billingo_date_format_option")]
    pub paid_start_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none", with = "billingo_date_format_option")]
    pub paid_end_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none", with = "billingo_date_format_option")]
    pub fulfillment_start_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none", with = "billingo_date_format_option")]
    pub fulfillment_end_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none", with = "billingo_date_format_option")]
    pub last_modified_date: Option<Date>,
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
    pub fn with_block(mut self, block_id: i64) -> Self {
        self.block_id = Some(block_id);
        self
    }

    #[must_use]
    pub fn with_partner(mut self, partner_id: i64) -> Self {
        self.partner_id = Some(partner_id);
        self
    }

    #[must_use]
    pub fn with_payment_status(mut self, payment_status: PaymentStatus) -> Self {
        self.payment_status = Some(payment_status);
        self
    }

    #[must_use]
    pub fn with_type(mut self, document_type: DocumentType) -> Self {
        self.document_type = Some(document_type);
        self
    }

    /// Filter by invoice date, both ends inclusive.
    #[must_use]
    pub fn with_invoice_dates(mut self, start_date: Date, end_date: Date) -> Self {
        self.start_date = Some(start_date);
        self.end_date = Some(end_date);
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}
