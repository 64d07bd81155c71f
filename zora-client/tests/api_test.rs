//! HTTP-level tests for the Zora API client against a mock server.

use zora_client::{Signal, ZoraClient, ZoraError};

const COIN_BODY: &str = r#"{
    "zora20Token": {
        "name": "Test Coin",
        "symbol": "TST",
        "description": "A coin for tests",
        "address": "0x1111111111111111111111111111111111111111",
        "totalSupply": "1000000",
        "marketCap": "50000",
        "marketCapDelta24h": "1500",
        "volume24h": "600",
        "totalVolume": "123.5",
        "creatorAddress": "0x2222222222222222222222222222222222222222",
        "createdAt": "2024-01-01T00:00:00Z",
        "uniqueHolders": 250
    }
}"#;

#[tokio::test]
async fn get_coin_parses_details() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/coin")
        .match_query(mockito::Matcher::UrlEncoded(
            "address".into(),
            "0x1111111111111111111111111111111111111111".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(COIN_BODY)
        .create_async()
        .await;

    let client = ZoraClient::with_base_url(server.url());
    let coin = client
        .get_coin("0x1111111111111111111111111111111111111111")
        .await
        .unwrap();

    assert_eq!(coin.name.as_deref(), Some("Test Coin"));
    assert_eq!(coin.symbol.as_deref(), Some("TST"));
    assert_eq!(coin.price(), 123.5);
    assert_eq!(coin.holders(), 250);
    mock.assert_async().await;
}

#[tokio::test]
async fn current_price_uses_total_volume() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/coin")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(COIN_BODY)
        .create_async()
        .await;

    let client = ZoraClient::with_base_url(server.url());
    let price = client
        .current_price("0x1111111111111111111111111111111111111111")
        .await
        .unwrap();
    assert_eq!(price, 123.5);
}

#[tokio::test]
async fn non_numeric_total_volume_is_a_lookup_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/coin")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"zora20Token": {"name": "Test Coin", "totalVolume": "not-a-number"}}"#)
        .create_async()
        .await;

    let client = ZoraClient::with_base_url(server.url());
    let err = client
        .current_price("0x1111111111111111111111111111111111111111")
        .await
        .unwrap_err();
    assert!(matches!(err, ZoraError::BadResponse(_)));
}

#[tokio::test]
async fn missing_total_volume_is_a_lookup_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/coin")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"zora20Token": {"name": "Test Coin"}}"#)
        .create_async()
        .await;

    let client = ZoraClient::with_base_url(server.url());
    let err = client
        .current_price("0x1111111111111111111111111111111111111111")
        .await
        .unwrap_err();
    assert!(matches!(err, ZoraError::BadResponse(_)));
}

#[tokio::test]
async fn missing_coin_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/coin")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"zora20Token": null}"#)
        .create_async()
        .await;

    let client = ZoraClient::with_base_url(server.url());
    let err = client
        .get_coin("0x3333333333333333333333333333333333333333")
        .await
        .unwrap_err();
    assert!(matches!(err, ZoraError::CoinNotFound(_)));
}

#[tokio::test]
async fn server_error_is_bad_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/coin")
        .match_query(mockito::Matcher::Any)
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let client = ZoraClient::with_base_url(server.url());
    let err = client
        .get_coin("0x1111111111111111111111111111111111111111")
        .await
        .unwrap_err();
    assert!(matches!(err, ZoraError::BadResponse(_)));
}

#[tokio::test]
async fn explore_returns_nodes_in_order() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/explore")
        .match_query(mockito::Matcher::UrlEncoded(
            "listType".into(),
            "TOP_GAINERS".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"exploreList": {"edges": [
                {"node": {"name": "First", "marketCapDelta24h": "1500", "volume24h": "600", "uniqueHolders": 200}},
                {"node": {"name": "Second", "marketCapDelta24h": "-5", "volume24h": "10", "uniqueHolders": 3}}
            ]}}"#,
        )
        .create_async()
        .await;

    let client = ZoraClient::with_base_url(server.url());
    let signals = client.trading_signals(10).await.unwrap();

    assert_eq!(signals.len(), 2);
    assert_eq!(signals[0].0.name.as_deref(), Some("First"));
    assert_eq!(signals[0].1, Signal::Buy);
    assert_eq!(signals[1].1, Signal::Sell);
}

#[tokio::test]
async fn empty_explore_list_is_ok() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/explore")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"exploreList": null}"#)
        .create_async()
        .await;

    let client = ZoraClient::with_base_url(server.url());
    let coins = client
        .explore(zora_client::ListKind::New, 10)
        .await
        .unwrap();
    assert!(coins.is_empty());
}
