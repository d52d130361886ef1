// Contract tests for POST /pricing/quote

#[path = "../helpers/mod.rs"]
#[macro_use]
mod helpers;

use actix_web::test;
use helpers::create_test_state;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_quote_returns_breakdown() {
    let state = create_test_state().await;
    let app = init_test_app!(state);

    let req = test::TestRequest::post()
        .uri("/pricing/quote")
        .set_json(json!({
            "weight": "10",
            "quantity": 4,
            "making_charge": "250",
            "rate": "108",
            "metal_type": "SILVER"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["metal_type"], "SILVER");
    assert_eq!(body["total_weight"], "40");
    assert_eq!(body["wastage"], "4");
    assert_eq!(body["final_weight"], "44");
    assert_eq!(body["metal_cost"], "4752");
    assert_eq!(body["total_price"], "5002");
    assert_eq!(body["wastage_rate"], "0.1");
}

#[actix_web::test]
async fn test_quote_defaults_quantity_and_charge() {
    let state = create_test_state().await;
    let app = init_test_app!(state);

    let req = test::TestRequest::post()
        .uri("/pricing/quote")
        .set_json(json!({ "weight": "100", "rate": "1" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["quantity"], 1);
    assert_eq!(body["final_weight"], "110");
    assert_eq!(body["total_price"], "110");
}

#[actix_web::test]
async fn test_quote_rejects_zero_weight() {
    let state = create_test_state().await;
    let app = init_test_app!(state);

    let req = test::TestRequest::post()
        .uri("/pricing/quote")
        .set_json(json!({ "weight": "0", "rate": "108" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Weight must be positive"));
}

#[actix_web::test]
async fn test_quote_rejects_oversized_input() {
    let state = create_test_state().await;
    let app = init_test_app!(state);

    let req = test::TestRequest::post()
        .uri("/pricing/quote")
        .set_json(json!({ "weight": "1000000000000000", "rate": "1000000000000000" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("too large"));
}

#[actix_web::test]
async fn test_quote_rejects_non_numeric_input() {
    let state = create_test_state().await;
    let app = init_test_app!(state);

    let req = test::TestRequest::post()
        .uri("/pricing/quote")
        .set_json(json!({ "weight": "ten grams", "rate": "108" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_responses_carry_request_id() {
    let state = create_test_state().await;
    let app = init_test_app!(state);

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("X-Request-ID", "counter-1"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "counter-1");
}
