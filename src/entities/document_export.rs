use serde::{Deserialize, Serialize};
use time::Date;

use super::impl_model;
use super::payment::{PaymentMethod, PaymentStatus};
use crate::utils::date_format::billingo_date_format_option;

string_enum! {
    pub enum DocumentExportType {
        SimpleCsv => "simple_csv",
        SimpleExcel => "simple_excel",
        SimpleExcelItems => "simple_excel_items",
        NavXml => "nav_xml",
    }
}

string_enum! {
    pub enum DocumentExportSortBy {
        InvoiceRawNumber => "invoice_raw_number",
        FulfillmentDate => "fulfillment_date",
        InvoiceDate => "invoice_date",
    }
}

string_enum! {
    /// Which date `start_date` and `end_date` filter on.
    pub enum DocumentExportQueryType {
        FulfillmentDate => "fulfillment_date",
        InvoiceDate => "invoice_date",
    }
}

/// Body of `POST /document-export`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateDocumentExport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_type: Option<DocumentExportType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_type: Option<DocumentExportQueryType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<DocumentExportSortBy>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "billingo_date_format_option"
    )]
    pub start_date: Option<Date>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "billingo_date_format_option"
    )]
    pub end_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_block_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
}

impl_model!(
    CreateDocumentExport,
    [
        "export_type",
        "query_type",
        "sort_by",
        "start_date",
        "end_date",
        "document_block_id",
        "payment_method",
        "payment_status",
    ]
);

impl CreateDocumentExport {
    #[must_use]
    pub fn new(export_type: DocumentExportType, start_date: Date, end_date: Date) -> Self {
        Self {
            export_type: Some(export_type),
            start_date: Some(start_date),
            end_date: Some(end_date),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_sort_by(mut self, sort_by: DocumentExportSortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    #[must_use]
    pub fn with_query_type(mut self, query_type: DocumentExportQueryType) -> Self {
        self.query_type = Some(query_type);
        self
    }

    #[must_use]
    pub fn with_block(mut self, document_block_id: i64) -> Self {
        self.document_block_id = Some(document_block_id);
        self
    }
}

/// Handle of an export job, used to poll and download it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentExportId {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl_model!(DocumentExportId, ["id"]);

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentExportStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl_model!(DocumentExportStatus, ["state"]);

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::date;

    use super::*;

    #[test]
    fn export_request_wire_format() {
        let export = CreateDocumentExport::new(
            DocumentExportType::SimpleCsv,
            date!(2024 - 01 - 01),
            date!(2024 - 12 - 31),
        )
        .with_sort_by(DocumentExportSortBy::InvoiceDate)
        .with_query_type(DocumentExportQueryType::FulfillmentDate);

        assert_eq!(
            serde_json::to_value(&export).unwrap(),
            json!({
                "export_type": "simple_csv",
                "query_type": "fulfillment_date",
                "sort_by": "invoice_date",
                "start_date": "2024-01-01",
                "end_date": "2024-12-31"
            })
        );
    }

    #[test]
    fn export_enum_literals() {
        assert_eq!(
            DocumentExportType::allowable_values(),
            &["simple_csv", "simple_excel", "simple_excel_items", "nav_xml"]
        );
        assert_eq!(
            DocumentExportSortBy::allowable_values(),
            &["invoice_raw_number", "fulfillment_date", "invoice_date"]
        );
        assert_eq!(
            DocumentExportQueryType::allowable_values(),
            &["fulfillment_date", "invoice_date"]
        );
    }
}
