use crate::api::require_id;
use crate::client::Client;
use crate::configuration::Configuration;
use crate::endpoints::BillingoEndpoint;
use crate::entities::ProductList;
use crate::entities::product::{ListParameters, Product};
use crate::error::Result;

/// API handler for Product endpoints
#[derive(Clone, Debug)]
pub struct ProductApi {
    client: Client,
}

impl ProductApi {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        self.client.configuration()
    }

    /// List products, one page at a time
    #[instrument(skip(self))]
    pub async fn list_products(&self, parameters: &ListParameters) -> Result<ProductList> {
        self.client.get(BillingoEndpoint::Products, parameters).await
    }

    /// Create a product
    #[instrument(skip(self, product))]
    pub async fn create_product(&self, product: &Product) -> Result<Product> {
        self.client
            .post(BillingoEndpoint::Products, Some(product))
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> Result<Product> {
        let id = require_id("id", id)?;
        self.client.get(BillingoEndpoint::Product(id), &()).await
    }

    /// Replace a product
    #[instrument(skip(self, product))]
    pub async fn update_product(&self, id: i64, product: &Product) -> Result<Product> {
        let id = require_id("id", id)?;
        self.client.put(BillingoEndpoint::Product(id), product).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> Result<()> {
        let id = require_id("id", id)?;
        self.client
            .delete::<serde::de::IgnoredAny>(BillingoEndpoint::Product(id))
            .await?;
        Ok(())
    }
}
