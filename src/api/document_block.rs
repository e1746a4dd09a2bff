use crate::client::Client;
use crate::configuration::Configuration;
use crate::endpoints::BillingoEndpoint;
use crate::entities::DocumentBlockList;
use crate::entities::document_block::ListParameters;
use crate::error::Result;

/// API handler for Document block endpoints
#[derive(Clone, Debug)]
pub struct DocumentBlockApi {
    client: Client,
}

impl DocumentBlockApi {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        self.client.configuration()
    }

    /// List the invoice pads documents can be issued from
    #[instrument(skip(self))]
    pub async fn list_document_blocks(
        &self,
        parameters: &ListParameters,
    ) -> Result<DocumentBlockList> {
        self.client
            .get(BillingoEndpoint::DocumentBlocks, parameters)
            .await
    }
}
