use crate::client::Client;
use crate::configuration::Configuration;
use crate::endpoints::BillingoEndpoint;
use crate::entities::organization::OrganizationData;
use crate::error::Result;

/// API handler for the Organization endpoint
#[derive(Clone, Debug)]
pub struct OrganizationApi {
    client: Client,
}

impl OrganizationApi {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        self.client.configuration()
    }

    #[instrument(skip(self))]
    pub async fn get_organization_data(&self) -> Result<OrganizationData> {
        self.client.get(BillingoEndpoint::Organization, &()).await
    }
}
