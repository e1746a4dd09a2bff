#[macro_use]
extern crate tracing;


use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use billingo_rs::partner::{ListParameters, PartnerTaxType};
use billingo_rs::{Address, Country, Error, Partner};
use test_utils::{api_path, do_setup, mock_client};

#[tokio::test]
async fn create_partner_returns_created_model() -> Result<()> {
    do_setup();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/partners")))
        .and(header("X-API-KEY", "test-key"))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json"))
        .and(body_json(json!({"name": "Acme"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 42, "name": "Acme"})))
        .expect(1)
        .mount(&server)
        .await;

    let billingo = mock_client(&server);
    let partner = billingo.partner().create_partner(&Partner::new("Acme")).await?;

    assert_eq!(partner.id, Some(42));
    assert_eq!(partner.name.as_deref(), Some("Acme"));
    Ok(())
}

#[tokio::test]
async fn get_partner_not_found_is_api_error() -> Result<()> {
    do_setup();
    let server = MockServer::start().await;
    let body = r#"{"error":{"message":"Partner not found"}}"#;
    Mock::given(method("GET"))
        .and(path(api_path("/partners/7")))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(body)
                .insert_header("x-request-id", "abc123"),
        )
        .mount(&server)
        .await;

    let billingo = mock_client(&server);
    let err = billingo.partner().get_partner(7).await.unwrap_err();
    debug!("got error: {err}");

    assert_eq!(err.status_code(), Some(StatusCode::NOT_FOUND));
    assert!(err.is_not_found());
    assert_eq!(err.response_body(), Some(body));
    assert_eq!(
        err.response_headers()
            .and_then(|h| h.get("x-request-id"))
            .and_then(|v| v.to_str().ok()),
        Some("abc123")
    );
    assert_eq!(err.api_error_body().unwrap().message(), "Partner not found");
    Ok(())
}

#[tokio::test]
async fn validation_error_body_is_exposed() -> Result<()> {
    do_setup();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/partners")))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "The given data was invalid.",
            "errors": [{"field": "name", "message": "The name field is required."}]
        })))
        .mount(&server)
        .await;

    let billingo = mock_client(&server);
    let err = billingo
        .partner()
        .create_partner(&Partner::default())
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(StatusCode::UNPROCESSABLE_ENTITY));
    let body = err.api_error_body().unwrap();
    assert_eq!(body.validation_errors().len(), 1);
    assert_eq!(body.validation_errors()[0].field, "name");
    Ok(())
}

#[tokio::test]
async fn negative_id_is_rejected_without_request() -> Result<()> {
    do_setup();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let billingo = mock_client(&server);
    let err = billingo.partner().get_partner(-1).await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { parameter: "id", .. }));
    assert!(err.status_code().is_none());

    let err = billingo
        .partner()
        .update_partner(-5, &Partner::new("Acme"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    let err = billingo.partner().delete_partner(-5).await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    Ok(())
}

#[tokio::test]
async fn list_partners_sends_query_parameters() -> Result<()> {
    do_setup();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/partners")))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "5"))
        .and(query_param("query", "acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": 1, "name": "Acme Kft.", "emails": ["info@acme.hu"], "tax_type": "HAS_TAX_NUMBER"},
                {"id": 2, "name": "Acme Zrt.", "tax_type": "SOMETHING_NEW"}
            ],
            "total": 12,
            "per_page": 5,
            "current_page": 2,
            "last_page": 3,
            "prev_page_url": "https://api.billingo.hu/v3/partners?page=1",
            "next_page_url": "https://api.billingo.hu/v3/partners?page=3"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let billingo = mock_client(&server);
    let parameters = ListParameters::builder()
        .with_page(2)
        .with_per_page(5)
        .with_query("acme");
    let partners = billingo.partner().list_partners(&parameters).await?;

    assert_eq!(partners.data.len(), 2);
    assert_eq!(partners.total, Some(12));
    assert!(partners.has_next_page());
    assert_eq!(partners.data[0].emails, vec!["info@acme.hu".to_string()]);
    assert_eq!(partners.data[0].tax_type, Some(PartnerTaxType::HasTaxNumber));
    assert_eq!(
        partners.data[1].tax_type,
        Some(PartnerTaxType::Unknown("SOMETHING_NEW".to_string()))
    );
    Ok(())
}

#[tokio::test]
async fn update_and_delete_partner() -> Result<()> {
    do_setup();
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(api_path("/partners/42")))
        .and(body_json(json!({
            "name": "Acme",
            "address": {
                "country_code": "HU",
                "post_code": "1111",
                "city": "Budapest",
                "address": "Fő utca 1."
            },
            "emails": ["billing@acme.hu"],
            "taxcode": "12345678-1-42"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "name": "Acme",
            "taxcode": "12345678-1-42",
            "unexpected_field": true
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("/partners/42")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let billingo = mock_client(&server);
    let partner = Partner::new("Acme")
        .with_address(Address::new(Country::Hu, "1111", "Budapest", "Fő utca 1."))
        .with_email("billing@acme.hu")
        .with_taxcode("12345678-1-42");

    let updated = billingo.partner().update_partner(42, &partner).await?;
    assert_eq!(updated.id, Some(42));
    assert_eq!(updated.taxcode.as_deref(), Some("12345678-1-42"));

    billingo.partner().delete_partner(42).await?;
    Ok(())
}

#[tokio::test]
async fn unknown_enum_value_fails_before_sending() -> Result<()> {
    do_setup();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let billingo = mock_client(&server);
    let partner = Partner::new("Acme").with_tax_type(PartnerTaxType::Unknown("BOGUS".into()));
    let err = billingo.partner().create_partner(&partner).await.unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
    Ok(())
}
