//! Client and flow tests against a mock appraisal service.

use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use janice_appraisal::actions::{
    appraise_items, handle_interaction, npc_buy, recall, InteractionOutcome,
};
use janice_appraisal::client::JaniceClient;
use janice_appraisal::display::Control;
use janice_appraisal::error::JaniceErrorCode;
use janice_appraisal::types::PricePercentage;
use janice_appraisal::JaniceService;

const API_KEY: &str = "test-key";

fn markets_body() -> serde_json::Value {
    json!([
        {"id": 2, "name": "Jita 4-4"},
        {"id": 6, "name": "NPC"},
        {"id": 115, "name": "Amarr"}
    ])
}

fn appraisal_body(code: &str, market_id: u32, market_name: &str, buy: f64) -> serde_json::Value {
    json!({
        "code": code,
        "market": {"id": market_id, "name": market_name},
        "totalVolume": 12.5,
        "totalPackagedVolume": 2.5,
        "effectivePrices": {
            "totalSellPrice": buy + 100.0,
            "totalBuyPrice": buy,
            "totalSplitPrice": buy + 50.0
        },
        "items": [
            {"itemType": {"name": "Tritanium"}, "amount": 100},
            {"itemType": {"name": "PLEX"}, "amount": 1}
        ]
    })
}

async fn mount_markets(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(markets_body()))
        .mount(server)
        .await;
}

async fn start_service(server: &MockServer) -> JaniceService {
    JaniceService::start_with_base_url(Some(&server.uri()), API_KEY)
        .await
        .expect("service start")
}

#[tokio::test]
async fn test_appraise_flow_uses_both_fetched_results() {
    let server = MockServer::start().await;
    mount_markets(&server).await;

    Mock::given(method("POST"))
        .and(path("/appraisal"))
        .and(header("X-ApiKey", API_KEY))
        .and(query_param("market", "2"))
        .and(query_param("persist", "true"))
        .and(query_param("compactize", "true"))
        .and(query_param("pricePercentage", "1"))
        .and(body_string("Tritanium\t100\nPLEX\t1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(appraisal_body("FULL01", 2, "Jita 4-4", 1000.0)),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/appraisal"))
        .and(query_param("pricePercentage", "0.9"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(appraisal_body("NINE90", 2, "Jita 4-4", 905.0)),
        )
        .mount(&server)
        .await;

    let service = start_service(&server).await;
    let result = appraise_items(&service, "Tritanium 100\nPLEX", None)
        .await
        .expect("appraisal");

    // the 90% figure is the separately fetched buy value, not 1000 * 0.9
    assert_eq!(result.totals.buy_90.unwrap(), Decimal::from(905));
    assert_eq!(result.code, "FULL01");
    assert_eq!(result.ninety_code.as_deref(), Some("NINE90"));
    assert_eq!(result.market_name, "Jita 4-4");
    assert_eq!(result.item_breakdown, "Tritanium: 100\nPLEX: 1");

    // a market selector over the live/well-known intersection, current hub marked
    let Some(Control::MarketSelect { custom_id, options }) = result.controls.first() else {
        panic!("expected a market select control");
    };
    assert!(custom_id.starts_with("market_select|appr-"));
    assert_eq!(options.len(), 3);
    assert!(options.iter().find(|o| o.id == 2).unwrap().selected);
}

#[tokio::test]
async fn test_partial_pair_failure_is_not_silently_degraded() {
    let server = MockServer::start().await;
    mount_markets(&server).await;

    Mock::given(method("POST"))
        .and(path("/appraisal"))
        .and(query_param("pricePercentage", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(appraisal_body("FULL01", 2, "Jita 4-4", 1000.0)),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/appraisal"))
        .and(query_param("pricePercentage", "0.9"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let service = start_service(&server).await;
    let err = appraise_items(&service, "Tritanium 100", None)
        .await
        .unwrap_err();
    assert_eq!(err.code, JaniceErrorCode::PartialPair);
}

#[tokio::test]
async fn test_transport_guards() {
    let server = MockServer::start().await;
    let client = JaniceClient::new(Some(&server.uri()), API_KEY).unwrap();

    Mock::given(method("POST"))
        .and(path("/appraisal"))
        .and(query_param("market", "2"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;
    let err = client
        .appraise("PLEX\t1", PricePercentage::Full, 2)
        .await
        .unwrap_err();
    assert_eq!(err.code, JaniceErrorCode::Transport);
    // the status and the raw body both surface in the message
    assert!(err.to_string().contains("403"), "{err}");
    assert!(err.to_string().contains("forbidden"), "{err}");

    Mock::given(method("POST"))
        .and(path("/appraisal"))
        .and(query_param("market", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&server)
        .await;
    let err = client
        .appraise("PLEX\t1", PricePercentage::Full, 3)
        .await
        .unwrap_err();
    assert_eq!(err.code, JaniceErrorCode::EmptyResponse);

    Mock::given(method("POST"))
        .and(path("/appraisal"))
        .and(query_param("market", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;
    let err = client
        .appraise("PLEX\t1", PricePercentage::Full, 4)
        .await
        .unwrap_err();
    assert_eq!(err.code, JaniceErrorCode::UnexpectedContent);
}

#[tokio::test]
async fn test_response_without_items_is_no_items() {
    let server = MockServer::start().await;
    let client = JaniceClient::new(Some(&server.uri()), API_KEY).unwrap();

    Mock::given(method("POST"))
        .and(path("/appraisal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": "AbCdEf", "items": []})))
        .mount(&server)
        .await;

    let err = client
        .appraise("PLEX\t1", PricePercentage::Full, 2)
        .await
        .unwrap_err();
    assert_eq!(err.code, JaniceErrorCode::NoItems);
}

#[tokio::test]
async fn test_npc_buy_is_single_query_with_local_ninety() {
    let server = MockServer::start().await;
    mount_markets(&server).await;

    Mock::given(method("POST"))
        .and(path("/appraisal"))
        .and(query_param("market", "6"))
        .and(query_param("pricePercentage", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(appraisal_body("NPCBUY", 6, "NPC", 1000.0)))
        .expect(1)
        .mount(&server)
        .await;

    let service = start_service(&server).await;
    let result = npc_buy(&service, "Tritanium 100\nPLEX", true)
        .await
        .expect("npc buy");

    assert!(result.totals.sell.is_none());
    assert_eq!(result.totals.buy, Decimal::from(1000));
    assert_eq!(result.totals.buy_90.unwrap(), Decimal::from(900));
}

#[tokio::test]
async fn test_recall_then_market_switch_expands_the_code() {
    let server = MockServer::start().await;
    mount_markets(&server).await;

    Mock::given(method("GET"))
        .and(path("/appraisal/AbC123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "AbC123",
            "market": {"id": 2, "name": "Jita 4-4"},
            "effectivePrices": {"totalBuyPrice": 500.0},
            "items": [{"itemType": {"name": "PLEX"}, "amount": 5}]
        })))
        .mount(&server)
        .await;

    // the switch replays the reconstructed payload at the chosen market
    for pct in ["1", "0.9"] {
        Mock::given(method("POST"))
            .and(path("/appraisal"))
            .and(query_param("market", "115"))
            .and(query_param("pricePercentage", pct))
            .and(body_string("PLEX\t5"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(appraisal_body("AMARR1", 115, "Amarr", 450.0)),
            )
            .mount(&server)
            .await;
    }

    let service = start_service(&server).await;
    let recalled = recall(&service, "AbC123").await.expect("recall");
    assert_eq!(recalled.code, "AbC123");
    // recalled results compute the 90% figure locally
    assert_eq!(recalled.totals.buy_90.unwrap(), Decimal::from(450));

    let Some(Control::MarketSelect { custom_id, .. }) = recalled.controls.first() else {
        panic!("recalled result should carry a market selector");
    };

    let outcome = handle_interaction(&service, custom_id, &["115".to_string()])
        .await
        .expect("market switch");
    let InteractionOutcome::Appraisal(result) = outcome else {
        panic!("expected a re-queried appraisal");
    };
    assert_eq!(result.market_name, "Amarr");
    assert_eq!(result.code, "AMARR1");
}

#[tokio::test]
async fn test_stale_token_is_user_visible_not_a_crash() {
    let server = MockServer::start().await;
    mount_markets(&server).await;
    let service = start_service(&server).await;

    let err = handle_interaction(&service, "market_select|appr-9999", &["2".to_string()])
        .await
        .unwrap_err();
    assert_eq!(err.code, JaniceErrorCode::TokenNotFound);
    assert!(err.to_string().contains("cache"));
}

#[tokio::test]
async fn test_recall_rejects_malformed_codes_before_any_request() {
    let server = MockServer::start().await;
    mount_markets(&server).await;
    let service = start_service(&server).await;

    // no GET /appraisal/{code} mock is mounted; a request would not
    // produce this error code
    for bad in ["AbC/12", "AbC 12", "AbCdEfG", "AbC1"] {
        let err = recall(&service, bad).await.unwrap_err();
        assert_eq!(err.code, JaniceErrorCode::EmptyInput, "{bad}");
        assert!(err.to_string().contains("6 letters or digits"), "{bad}");
    }
}

#[tokio::test]
async fn test_copy_control_redisplays_literal_value() {
    let server = MockServer::start().await;
    mount_markets(&server).await;
    let service = start_service(&server).await;

    let outcome = handle_interaction(&service, "copy|buy90|904.50", &[])
        .await
        .expect("copy");
    let InteractionOutcome::CopiedValue { value, .. } = outcome else {
        panic!("expected a copied value");
    };
    assert_eq!(value, "904.50");
}

#[tokio::test]
async fn test_live_market_list_intersection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "name": "Jita 4-4"},
            {"id": 999, "name": "Some Citadel"}
        ])))
        .mount(&server)
        .await;

    let service = start_service(&server).await;
    let offerable = service.markets().offerable();
    assert_eq!(offerable, vec![(2, "Jita 4-4".to_string())]);
}
