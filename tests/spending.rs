
use anyhow::Result;
use rust_decimal_macros::dec;
use serde_json::json;
use time::macros::date;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use billingo_rs::spending::{
    Category, ListParameters, SpendingDate, SpendingPaymentMethod, SpendingSave,
};
use billingo_rs::{BooleanFormat, Configuration, Currency, SpendingApi};
use test_utils::{api_path, do_setup, mock_client};

#[tokio::test]
async fn create_spending() -> Result<()> {
    do_setup();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/spendings")))
        .and(body_partial_json(json!({
            "invoice_number": "SZLA-2024-18",
            "currency": "HUF",
            "category": "service",
            "partner_id": 5,
            "payment_method": "wire_transfer",
            "invoice_date": "2024-02-01",
            "fulfillment_date": "2024-02-01",
            "due_date": "2024-02-15"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 77,
            "organization_id": 1,
            "category": "service",
            "invoice_number": "SZLA-2024-18",
            "currency": "HUF",
            "total_gross": 50800,
            "partner": {"id": 5, "name": "Supplier Kft."},
            "invoice_date": "2024-02-01",
            "due_date": "2024-02-15",
            "paid_at": null,
            "is_created_by_nav": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let billingo = mock_client(&server);
    let spending = SpendingSave::new("SZLA-2024-18", Currency::Huf, dec!(50800), Category::Service)
        .with_partner(5)
        .with_payment_method(SpendingPaymentMethod::WireTransfer)
        .with_dates(date!(2024 - 02 - 01), date!(2024 - 02 - 01), date!(2024 - 02 - 15));

    let created = billingo.spending().create_spending(&spending).await?;
    assert_eq!(created.id, Some(77));
    assert_eq!(created.total_gross, Some(dec!(50800)));
    assert_eq!(created.paid_at, None);
    assert_eq!(
        created.partner.and_then(|p| p.name).as_deref(),
        Some("Supplier Kft.")
    );
    Ok(())
}

#[tokio::test]
async fn list_spendings_renders_booleans_as_integers_by_default() -> Result<()> {
    do_setup();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/spendings")))
        .and(query_param("q", "rent"))
        .and(query_param("paid", "1"))
        .and(query_param("spending_date", "invoice_date"))
        .and(query_param("start_date", "2024-01-01"))
        .and(query_param("end_date", "2024-03-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "total": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let billingo = mock_client(&server);
    let parameters = ListParameters::default()
        .with_query("rent")
        .with_paid(true)
        .with_date_range(
            SpendingDate::InvoiceDate,
            date!(2024 - 01 - 01),
            date!(2024 - 03 - 31),
        );
    let spendings = billingo.spending().list_spendings(&parameters).await?;
    assert!(spendings.data.is_empty());
    assert_eq!(spendings.total, Some(0));
    Ok(())
}

#[tokio::test]
async fn list_spendings_with_string_booleans() -> Result<()> {
    do_setup();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/spendings")))
        .and(query_param("paid", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let mut configuration = Configuration::new();
    configuration
        .set_api_key("X-API-KEY", "test-key")
        .set_host(format!("{}/v3", server.uri()))
        .set_boolean_format_for_query_string(BooleanFormat::String);
    let api = SpendingApi::new(billingo_rs::Client::from_configuration(configuration)?);

    let spendings = api
        .list_spendings(&ListParameters::default().with_paid(false))
        .await?;
    assert!(spendings.total.is_none());
    Ok(())
}

#[tokio::test]
async fn get_update_delete_spending() -> Result<()> {
    do_setup();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/spendings/77")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 77, "category": "stock"})))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(api_path("/spendings/77")))
        .and(body_partial_json(json!({"comment": "paid in cash", "paid_at": "2024-02-10"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 77, "comment": "paid in cash"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("/spendings/77")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let billingo = mock_client(&server);
    let api = billingo.spending();

    let spending = api.get_spending(77).await?;
    assert_eq!(spending.category, Some(Category::Stock));

    let update = SpendingSave::new("SZLA-2024-18", Currency::Huf, dec!(50800), Category::Stock)
        .with_paid_at(date!(2024 - 02 - 10))
        .with_comment("paid in cash");
    let updated = api.update_spending(77, &update).await?;
    assert_eq!(updated.comment.as_deref(), Some("paid in cash"));

    api.delete_spending(77).await?;
    Ok(())
}
