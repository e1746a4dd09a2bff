use std::path::PathBuf;

use crate::api::{require_id, require_non_empty};
use crate::client::Client;
use crate::configuration::Configuration;
use crate::endpoints::BillingoEndpoint;
use crate::entities::DocumentList;
use crate::entities::document::{
    Document, DocumentCancellation, DocumentPublicUrl, InvoiceSettings, ListParameters,
    OnlineSzamlaStatus, SendDocument,
};
use crate::entities::document_insert::DocumentInsert;
use crate::entities::payment::PaymentHistory;
use crate::error::Result;

const PDF: &str = "application/pdf";

/// API handler for Document endpoints
#[derive(Clone, Debug)]
pub struct DocumentApi {
    client: Client,
}

impl DocumentApi {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        self.client.configuration()
    }

    /// List documents matching the given filters
    #[instrument(skip(self))]
    pub async fn list_documents(&self, parameters: &ListParameters) -> Result<DocumentList> {
        self.client.get(BillingoEndpoint::Documents, parameters).await
    }

    /// Issue a new document
    #[instrument(skip(self, document))]
    pub async fn create_document(&self, document: &DocumentInsert) -> Result<Document> {
        self.client
            .post(BillingoEndpoint::Documents, Some(document))
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_document(&self, id: i64) -> Result<Document> {
        let id = require_id("id", id)?;
        self.client.get(BillingoEndpoint::Document(id), &()).await
    }

    /// Delete a draft. Issued documents can only be cancelled.
    #[instrument(skip(self))]
    pub async fn delete_document(&self, id: i64) -> Result<()> {
        let id = require_id("id", id)?;
        self.client
            .delete::<serde::de::IgnoredAny>(BillingoEndpoint::Document(id))
            .await?;
        Ok(())
    }

    /// Look up a document by the `vendor_id` it was created with
    #[instrument(skip(self))]
    pub async fn get_document_by_vendor_id(&self, vendor_id: &str) -> Result<Document> {
        let vendor_id = require_non_empty("vendor_id", vendor_id)?;
        self.client
            .get(BillingoEndpoint::DocumentByVendor(vendor_id), &())
            .await
    }

    /// Cancel an issued document. Returns the cancellation document.
    #[instrument(skip(self, cancellation))]
    pub async fn cancel_document(
        &self,
        id: i64,
        cancellation: Option<&DocumentCancellation>,
    ) -> Result<Document> {
        let id = require_id("id", id)?;
        self.client
            .post(BillingoEndpoint::DocumentCancel(id), cancellation)
            .await
    }

    #[instrument(skip(self))]
    pub async fn copy_document(&self, id: i64) -> Result<Document> {
        let id = require_id("id", id)?;
        self.client
            .post(BillingoEndpoint::DocumentCopy(id), None::<&()>)
            .await
    }

    /// Turn a proforma into an invoice
    #[instrument(skip(self, settings))]
    pub async fn create_document_from_proforma(
        &self,
        id: i64,
        settings: Option<&InvoiceSettings>,
    ) -> Result<Document> {
        let id = require_id("id", id)?;
        self.client
            .post(BillingoEndpoint::DocumentFromProforma(id), settings)
            .await
    }

    /// The document as PDF bytes
    #[instrument(skip(self))]
    pub async fn download_document(&self, id: i64) -> Result<Vec<u8>> {
        let id = require_id("id", id)?;
        self.client
            .download(BillingoEndpoint::DocumentDownload(id), PDF)
            .await
    }

    /// Download the PDF into the configured temp folder and return its path.
    #[instrument(skip(self))]
    pub async fn download_document_to_temp(&self, id: i64) -> Result<PathBuf> {
        let bytes = self.download_document(id).await?;
        let path = self
            .configuration()
            .temp_folder_path()
            .join(format!("billingo-document-{id}.pdf"));
        tokio::fs::write(&path, &bytes).await?;
        debug!(path = %path.display(), size = bytes.len(), "wrote document to temp folder");
        Ok(path)
    }

    /// Submission status at NAV Online Számla
    #[instrument(skip(self))]
    pub async fn get_online_szamla_status(&self, id: i64) -> Result<OnlineSzamlaStatus> {
        let id = require_id("id", id)?;
        self.client
            .get(BillingoEndpoint::DocumentOnlineSzamla(id), &())
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_payment(&self, id: i64) -> Result<Vec<PaymentHistory>> {
        let id = require_id("id", id)?;
        self.client
            .get(BillingoEndpoint::DocumentPayments(id), &())
            .await
    }

    /// Replace the payment history of a document
    #[instrument(skip(self, payments))]
    pub async fn update_payment(
        &self,
        id: i64,
        payments: &[PaymentHistory],
    ) -> Result<Vec<PaymentHistory>> {
        let id = require_id("id", id)?;
        self.client
            .put(BillingoEndpoint::DocumentPayments(id), payments)
            .await
    }

    /// Clear the payment history of a document
    #[instrument(skip(self))]
    pub async fn delete_payment(&self, id: i64) -> Result<Vec<PaymentHistory>> {
        let id = require_id("id", id)?;
        let payments: Option<Vec<PaymentHistory>> = self
            .client
            .delete(BillingoEndpoint::DocumentPayments(id))
            .await?;
        Ok(payments.unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn get_public_url(&self, id: i64) -> Result<DocumentPublicUrl> {
        let id = require_id("id", id)?;
        self.client
            .get(BillingoEndpoint::DocumentPublicUrl(id), &())
            .await
    }

    /// Email the document. Without a body it goes to the partner's addresses.
    #[instrument(skip(self, send))]
    pub async fn send_document(
        &self,
        id: i64,
        send: Option<&SendDocument>,
    ) -> Result<SendDocument> {
        let id = require_id("id", id)?;
        self.client
            .post(BillingoEndpoint::DocumentSend(id), send)
            .await
    }
}
