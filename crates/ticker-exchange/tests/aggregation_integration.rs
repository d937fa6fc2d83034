//! Integration tests for currency aggregation against a mock HTTP server.

use std::sync::Arc;

use ticker_exchange::{
    CurrencyAggregator, ExchangeError, HitBtcClient, HitBtcConfig, SubscriptionNotifier,
    SubscriptionParams,
};

fn client_for(server: &mockito::ServerGuard) -> HitBtcClient {
    let config = HitBtcConfig::default().with_rest_base_url(server.url());
    HitBtcClient::new(config).expect("failed to build test client")
}

const ETH_TICKER_BODY: &str = r#"{"ask":"0.054","bid":"0.053","last":"0.0535","open":"0.052","low":"0.051","high":"0.055","volume":"1020.4","volume_quote":"55.1","timestamp":"2024-05-01T00:00:00Z"}"#;
const BTC_TICKER_BODY: &str = r#"{"ask":"50010","bid":"49990","last":"50000","open":"49000","low":"48500","high":"50500","volume":"320.7","volume_quote":"16000000","timestamp":"2024-05-01T00:00:00Z"}"#;

#[tokio::test]
async fn resolve_merges_ticker_and_currency() {
    let mut server = mockito::Server::new_async().await;
    let ticker_mock = server
        .mock("GET", "/public/ticker/ETHBTC")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ETH_TICKER_BODY)
        .create_async()
        .await;
    let currency_mock = server
        .mock("GET", "/public/currency/ETH")
        .with_status(200)
        .with_body(r#"{"full_name":"Ethereum","payin_enabled":true}"#)
        .create_async()
        .await;

    let aggregator = CurrencyAggregator::new(Arc::new(client_for(&server)));
    let record = aggregator.resolve("ETHBTC").await.expect("resolve should succeed");

    assert_eq!(record.id, "ETH");
    assert_eq!(record.full_name, "Ethereum");
    assert_eq!(record.ask, "0.054");
    assert_eq!(record.bid, "0.053");
    assert_eq!(record.last, "0.0535");
    assert_eq!(record.fee_currency, "BTC");

    ticker_mock.assert_async().await;
    currency_mock.assert_async().await;
}

#[tokio::test]
async fn resolve_malformed_ticker_yields_empty_price_fields() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/public/ticker/ETHBTC")
        .with_status(200)
        .with_body("<html>503 Service Unavailable</html>")
        .create_async()
        .await;
    server
        .mock("GET", "/public/currency/ETH")
        .with_status(200)
        .with_body(r#"{"full_name":"Ethereum"}"#)
        .create_async()
        .await;

    let aggregator = CurrencyAggregator::new(Arc::new(client_for(&server)));
    let record = aggregator.resolve("ETHBTC").await.expect("malformed body is not an error");

    // Prices degrade to empty strings, the record itself is still built
    assert_eq!(record.ask, "");
    assert_eq!(record.last, "");
    assert_eq!(record.full_name, "Ethereum");
    assert_eq!(record.fee_currency, "BTC");
}

#[tokio::test]
async fn resolve_unsupported_symbol_hits_remote_then_rejects() {
    let mut server = mockito::Server::new_async().await;
    let ticker_mock = server
        .mock("GET", "/public/ticker/XRPUSDT")
        .with_status(200)
        .with_body(r#"{"ask":"0.52"}"#)
        .create_async()
        .await;
    let currency_mock = server
        .mock("GET", "/public/currency/XRP")
        .with_status(200)
        .with_body(r#"{"full_name":"Ripple"}"#)
        .create_async()
        .await;

    let aggregator = CurrencyAggregator::new(Arc::new(client_for(&server)));
    let result = aggregator.resolve("XRPUSDT").await;

    assert!(matches!(result, Err(ExchangeError::SymbolNotFound(_))));
    // Membership is checked after the remote round-trips
    ticker_mock.assert_async().await;
    currency_mock.assert_async().await;
}

#[tokio::test]
async fn resolve_unreachable_exchange_returns_error_result() {
    let config = HitBtcConfig::default().with_rest_base_url("http://127.0.0.1:9");
    let client = HitBtcClient::new(config).unwrap();
    let aggregator = CurrencyAggregator::new(Arc::new(client));

    let result = aggregator.resolve("ETHBTC").await;
    assert!(matches!(result, Err(ExchangeError::NetworkError(_))));
}

#[tokio::test]
async fn list_all_returns_records_in_declared_order() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/public/ticker/BTCUSDT")
        .with_status(200)
        .with_body(BTC_TICKER_BODY)
        .create_async()
        .await;
    server
        .mock("GET", "/public/currency/BTC")
        .with_status(200)
        .with_body(r#"{"full_name":"Bitcoin"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/public/ticker/ETHBTC")
        .with_status(200)
        .with_body(ETH_TICKER_BODY)
        .create_async()
        .await;
    server
        .mock("GET", "/public/currency/ETH")
        .with_status(200)
        .with_body(r#"{"full_name":"Ethereum"}"#)
        .create_async()
        .await;

    let aggregator = CurrencyAggregator::new(Arc::new(client_for(&server)));
    let records = aggregator.list_all().await.expect("list_all should succeed");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "BTC");
    assert_eq!(records[0].fee_currency, "USD");
    assert_eq!(records[1].id, "ETH");
    assert_eq!(records[1].fee_currency, "BTC");
}

#[tokio::test]
async fn list_all_short_circuits_on_remote_failure() {
    let config = HitBtcConfig::default().with_rest_base_url("http://127.0.0.1:9");
    let client = HitBtcClient::new(config).unwrap();
    let aggregator = CurrencyAggregator::new(Arc::new(client));

    let result = aggregator.list_all().await;
    assert!(matches!(result, Err(ExchangeError::NetworkError(_))));
}

#[tokio::test]
async fn subscription_failure_does_not_affect_resolve() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/public/ticker/ETHBTC")
        .with_status(200)
        .with_body(ETH_TICKER_BODY)
        .create_async()
        .await;
    server
        .mock("GET", "/public/currency/ETH")
        .with_status(200)
        .with_body(r#"{"full_name":"Ethereum"}"#)
        .create_async()
        .await;

    // Dial failure on an unreachable WebSocket endpoint is absorbed internally
    let notifier = SubscriptionNotifier::new(
        "ws://127.0.0.1:9",
        SubscriptionParams {
            symbols: vec!["ETHBTC".to_string(), "BTCUSDT".to_string()],
        },
    );
    notifier.notify().await;

    let aggregator = CurrencyAggregator::new(Arc::new(client_for(&server)));
    let record = aggregator.resolve("ETHBTC").await.expect("resolve unaffected by notifier");
    assert_eq!(record.id, "ETH");
}
