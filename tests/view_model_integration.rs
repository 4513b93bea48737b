//! End-to-end tests: navigation → view model → use case → HTTP → wiremock.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cryptocurrency_sdk::prelude::*;

async fn server_with_coins() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/coins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "btc-bitcoin", "name": "Bitcoin", "symbol": "BTC", "rank": 1, "is_active": true},
            {"id": "eth-ethereum", "name": "Ethereum", "symbol": "ETH", "rank": 2, "is_active": true}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/coins/eth-ethereum"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "eth-ethereum", "name": "Ethereum", "symbol": "ETH", "rank": 2,
            "is_active": true, "description": "Smart contracts.",
            "tags": [{"id": "smart-contracts", "name": "Smart Contracts"}],
            "team": [{"id": "vitalik-buterin", "name": "Vitalik Buterin", "position": "Author"}]
        })))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_list_then_detail_navigation() {
    let server = server_with_coins().await;
    let client = PaprikaClient::builder().base_url(&server.uri()).build().unwrap();

    let list = CoinListViewModel::new(client.get_coins());
    let mut list_rx = list.subscribe();
    list_rx.wait_for(|s| s.is_terminal()).await.unwrap();
    let coins = list.coins();
    assert_eq!(coins.len(), 2);

    // Tapping a row navigates with the coin id in the route.
    let route = Screen::detail_route(coins[1].id.as_str());
    let (screen, args) = NavArgs::from_route(&route).unwrap();
    assert_eq!(screen, Screen::CoinDetail);

    let detail = CoinDetailViewModel::new(client.get_coin_detail(), &args);
    let mut detail_rx = detail.subscribe();
    detail_rx.wait_for(|s| s.is_terminal()).await.unwrap();

    let d = detail.detail().unwrap();
    assert_eq!(d.title(), "2. Ethereum (ETH)");
    assert_eq!(d.tags, ["Smart Contracts"]);
    assert_eq!(d.team[0].position, "Author");
}

#[tokio::test]
async fn test_detail_route_without_id_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = PaprikaClient::builder().base_url(&server.uri()).build().unwrap();

    let (_, args) = NavArgs::from_route("coin_detail_screen").unwrap();
    let detail = CoinDetailViewModel::new(client.get_coin_detail(), &args);
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }

    let state = detail.state();
    assert!(state.is_idle());
    assert!(!state.is_loading());
    assert_eq!(state.error(), "");
    assert!(state.data().is_none());
    // MockServer verifies `expect(0)` on drop.
}

#[tokio::test]
async fn test_screens_hold_independent_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/coins"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/coins/btc-bitcoin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "btc-bitcoin", "name": "Bitcoin", "symbol": "BTC", "rank": 1, "is_active": true
        })))
        .mount(&server)
        .await;
    let client = PaprikaClient::builder().base_url(&server.uri()).build().unwrap();

    let list = CoinListViewModel::new(client.get_coins());
    let detail = CoinDetailViewModel::new(
        client.get_coin_detail(),
        &NavArgs::new().with(PARAM_COIN_ID, "btc-bitcoin"),
    );

    list.subscribe().wait_for(|s| s.is_terminal()).await.unwrap();
    detail.subscribe().wait_for(|s| s.is_terminal()).await.unwrap();

    assert_eq!(list.state().error(), LIST_FALLBACK_MESSAGE);
    assert!(list.coins().is_empty());
    assert_eq!(detail.state().error(), "");
    assert_eq!(detail.detail().unwrap().name, "Bitcoin");
}
