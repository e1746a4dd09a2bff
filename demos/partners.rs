#[macro_use]
extern crate tracing;

use anyhow::Result;
use billingo_rs::partner::{ListParameters, PartnerTaxType};
use billingo_rs::{Address, Billingo, Country, Partner};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Reads BILLINGO_API_KEY and friends from the environment
    let billingo = Billingo::from_env()?;

    let partner = Partner::new("Példa Kft.")
        .with_address(Address::new(Country::Hu, "1111", "Budapest", "Fő utca 1."))
        .with_email("szamlazas@pelda.hu")
        .with_taxcode("12345678-2-42")
        .with_tax_type(PartnerTaxType::HasTaxNumber);
    let created = billingo.partner().create_partner(&partner).await?;
    info!("created partner {:?}", created.id);

    // Walk every page of partners matching "Példa"
    let mut parameters = ListParameters::builder().with_per_page(50).with_query("Példa");
    let mut page = 1;
    loop {
        parameters = parameters.with_page(page);
        let partners = billingo.partner().list_partners(&parameters).await?;
        for partner in &partners.data {
            info!("{:?}: {:?}", partner.id, partner.name);
        }
        if !partners.has_next_page() {
            break;
        }
        page += 1;
    }

    if let Some(id) = created.id {
        billingo.partner().delete_partner(id).await?;
        info!("deleted partner {id}");
    }

    Ok(())
}
