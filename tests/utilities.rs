
use std::time::Duration;

use anyhow::Result;
use serde_json::json;
use time::macros::date;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use billingo_rs::{Billingo, ClientOptions, Country, Currency, Error};
use test_utils::{api_path, do_setup, mock_client};

#[tokio::test]
async fn conversion_rate() -> Result<()> {
    do_setup();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/currencies")))
        .and(query_param("from", "EUR"))
        .and(query_param("to", "HUF"))
        .and(query_param("date", "2024-05-02"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "from_currency": "EUR",
            "to_currency": "HUF",
            "conversation_rate": 393.45,
            "date": "2024-05-02"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let billingo = mock_client(&server);
    let rate = billingo
        .currency()
        .get_conversion_rate(Currency::Eur, Currency::Huf, Some(date!(2024 - 05 - 02)))
        .await?;

    assert_eq!(rate.from_currency, Some(Currency::Eur));
    assert_eq!(rate.conversion_rate, Some(393.45));
    assert_eq!(rate.date, Some(date!(2024 - 05 - 02)));
    Ok(())
}

#[tokio::test]
async fn organization_data() -> Result<()> {
    do_setup();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/organization")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Example Kft.",
            "tax_code": "12345678-2-42",
            "address": {"country_code": "HU", "post_code": "1111", "city": "Budapest", "address": "Fő utca 1."},
            "small_taxpayer": false,
            "cash_settled": true
        })))
        .mount(&server)
        .await;

    let billingo = mock_client(&server);
    let organization = billingo.organization().get_organization_data().await?;

    assert_eq!(organization.name.as_deref(), Some("Example Kft."));
    assert_eq!(organization.cash_settled, Some(true));
    assert_eq!(
        organization.address.and_then(|a| a.country_code),
        Some(Country::Hu)
    );
    Ok(())
}

#[tokio::test]
async fn util_endpoints() -> Result<()> {
    do_setup();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/utils/check-tax-number/12345678-2-42")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tax_number": "12345678-2-42",
            "result": "valid"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/utils/time")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"epoch": 1_700_000_000})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/utils/convert-legacy-id/9876")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 123})))
        .mount(&server)
        .await;

    let billingo = mock_client(&server);
    let util = billingo.util();

    let tax_number = util.check_tax_number("12345678-2-42").await?;
    assert_eq!(tax_number.result.as_deref(), Some("valid"));

    let time = util.get_server_time().await?;
    assert_eq!(time.to_offset_date_time()?.year(), 2023);

    let id = util.get_id(9876).await?;
    assert_eq!(id.id, 123);

    assert!(matches!(
        util.check_tax_number("").await,
        Err(Error::InvalidArgument { parameter: "tax_number", .. })
    ));
    assert!(matches!(
        util.get_id(-3).await,
        Err(Error::InvalidArgument { parameter: "legacy_id", .. })
    ));
    Ok(())
}

#[tokio::test]
async fn connection_refused_is_transport_error() -> Result<()> {
    do_setup();
    // Bind and drop a listener so the port is known to be closed.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        listener.local_addr()?.port()
    };

    let billingo = Billingo::new(
        ClientOptions::new("test-key")
            .with_host(format!("http://127.0.0.1:{port}/v3"))
            .with_connect_timeout(Duration::from_secs(2)),
    )?;
    let err = billingo.organization().get_organization_data().await.unwrap_err();

    assert!(matches!(err, Error::Request(_)));
    assert!(err.status_code().is_none());
    assert!(err.response_body().is_none());
    Ok(())
}

#[tokio::test]
async fn slow_response_times_out() -> Result<()> {
    do_setup();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/utils/time")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"epoch": 0}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let billingo = Billingo::new(
        ClientOptions::new("test-key")
            .with_host(format!("{}/v3", server.uri()))
            .with_timeout(Duration::from_millis(200)),
    )?;
    let err = billingo.util().get_server_time().await.unwrap_err();

    match err {
        Error::Request(source) => assert!(source.is_timeout()),
        other => panic!("expected a transport error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn invalid_host_is_rejected() -> Result<()> {
    do_setup();
    let billingo = Billingo::new(ClientOptions::new("test-key").with_host("not a url"))?;
    let err = billingo.util().get_server_time().await.unwrap_err();
    assert!(matches!(err, Error::InvalidEndpoint));
    Ok(())
}
