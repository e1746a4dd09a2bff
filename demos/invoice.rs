#[macro_use]
extern crate tracing;

use anyhow::Result;
use rust_decimal_macros::dec;
use time::{Duration, OffsetDateTime};

use billingo_rs::document::SendDocument;
use billingo_rs::document_block::ListParameters as BlockListParameters;
use billingo_rs::document_insert::UnitPriceType;
use billingo_rs::{
    Billingo, Currency, DocumentInsert, DocumentInsertItem, DocumentInsertType, DocumentLanguage,
    Partner, PaymentMethod, Vat,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let billingo = Billingo::from_env()?;

    let blocks = billingo
        .document_block()
        .list_document_blocks(&BlockListParameters::default())
        .await?;
    let Some(block_id) = blocks.data.first().and_then(|b| b.id) else {
        anyhow::bail!("the organization has no document blocks");
    };

    let partner = billingo
        .partner()
        .create_partner(&Partner::new("Demo Vevő Bt.").with_email("demo@example.com"))
        .await?;
    let Some(partner_id) = partner.id else {
        anyhow::bail!("partner was created without an id");
    };

    let today = OffsetDateTime::now_utc().date();
    let invoice = DocumentInsert::new(partner_id, block_id, DocumentInsertType::Invoice)
        .with_dates(today, today + Duration::days(8))
        .with_payment_method(PaymentMethod::WireTransfer)
        .with_language(DocumentLanguage::Hu)
        .with_currency(Currency::Huf)
        .with_electronic(true)
        .with_item(DocumentInsertItem::new(
            "Tanácsadás",
            dec!(15000),
            UnitPriceType::Net,
            dec!(2),
            "óra",
            Vat::TwentySeven,
        ));

    let document = billingo.document().create_document(&invoice).await?;
    info!(
        "issued {:?} for {:?} {:?}",
        document.invoice_number, document.gross_total, document.currency
    );

    if let Some(id) = document.id {
        let path = billingo.document().download_document_to_temp(id).await?;
        info!("saved PDF to {}", path.display());

        billingo
            .document()
            .send_document(id, Some(&SendDocument::to(["demo@example.com"])))
            .await?;
        info!("sent document {id}");
    }

    Ok(())
}
