use crate::api::require_non_empty;
use crate::client::Client;
use crate::configuration::Configuration;
use crate::endpoints::BillingoEndpoint;
use crate::entities::document_export::{
    CreateDocumentExport, DocumentExportId, DocumentExportStatus,
};
use crate::error::Result;

/// API handler for Document export endpoints
///
/// Exports run asynchronously on the server: create one, poll it until it is
/// ready, then download the file.
#[derive(Clone, Debug)]
pub struct DocumentExportApi {
    client: Client,
}

impl DocumentExportApi {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        self.client.configuration()
    }

    #[instrument(skip(self, export))]
    pub async fn create_export(&self, export: &CreateDocumentExport) -> Result<DocumentExportId> {
        self.client
            .post(BillingoEndpoint::DocumentExports, Some(export))
            .await
    }

    #[instrument(skip(self))]
    pub async fn poll_export(&self, id: &str) -> Result<DocumentExportStatus> {
        let id = require_non_empty("id", id)?;
        self.client
            .get(BillingoEndpoint::DocumentExportPoll(id), &())
            .await
    }

    /// The finished export file as raw bytes
    #[instrument(skip(self))]
    pub async fn download_export(&self, id: &str) -> Result<Vec<u8>> {
        let id = require_non_empty("id", id)?;
        self.client
            .download(BillingoEndpoint::DocumentExportDownload(id), "application/octet-stream")
            .await
    }
}
