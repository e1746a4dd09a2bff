//! # billingo-rs
//!
//! A typed async client for the [Billingo](https://www.billingo.hu) v3 invoicing API.
//!
//! ```no_run
//! # async fn run() -> billingo_rs::Result<()> {
//! use billingo_rs::{Billingo, ClientOptions, Partner};
//!
//! let billingo = Billingo::new(ClientOptions::new("my-api-key"))?;
//! let partner = billingo.partner().create_partner(&Partner::new("Acme Kft.")).await?;
//! println!("created partner {:?}", partner.id);
//! # Ok(())
//! # }
//! ```
//!
//! Every resource API is reachable from [`Billingo`]; they can also be built
//! directly from a [`Client`] when several configurations are needed side by side.
//!
//! ## Sentry Integration
//!
//! API errors carry a span trace captured where the error was created. With
//! the `sentry` feature enabled errors also convert into Sentry breadcrumbs:
//!
//! ```toml
//! [dependencies]
//! billingo-rs = { version = "0.1", features = ["sentry"] }
//! ```
//!
//! Span traces are only recorded when the subscriber has an `ErrorLayer`:
//!
//! ```ignore
//! use tracing_subscriber::prelude::*;
//! use tracing_error::ErrorLayer;
//!
//! tracing_subscriber::registry()
//!     .with(tracing_subscriber::fmt::layer())
//!     .with(ErrorLayer::default())
//!     .with(sentry::integrations::tracing::layer())
//!     .init();
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
extern crate tracing;

#[macro_use]
pub mod utils;

pub mod api;
pub mod billingo;
pub mod client;
pub mod configuration;
pub mod endpoints;
pub mod entities;
pub mod error;
pub mod header_selector;

#[cfg(feature = "sentry")]
pub mod sentry_integration;

pub use api::{
    BankAccountApi, CurrencyApi, DocumentApi, DocumentBlockApi, DocumentExportApi,
    OrganizationApi, PartnerApi, ProductApi, SpendingApi, UtilApi,
};
pub use billingo::{Billingo, ClientOptions};
pub use client::Client;
pub use configuration::{BooleanFormat, Configuration};
pub use endpoints::BillingoEndpoint;
pub use entities::*;
pub use error::{ApiErrorBody, Error, Result, ValidationError};
pub use header_selector::HeaderSelector;

// Re-export SpanTrace for users who want to access it
pub use tracing_error::SpanTrace;

// Re-export the most used models for convenience
pub use entities::bank_account::BankAccount;
pub use entities::country::Country;
pub use entities::currency::Currency;
pub use entities::document::{Document, DocumentLanguage, DocumentType};
pub use entities::document_insert::{DocumentInsert, DocumentInsertItem, DocumentInsertType};
pub use entities::partner::{Address, Partner};
pub use entities::payment::{PaymentHistory, PaymentMethod, PaymentStatus};
pub use entities::product::Product;
pub use entities::vat::Vat;
