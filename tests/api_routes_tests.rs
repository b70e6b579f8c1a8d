//! HTTP tests through the full router
//!
//! Requests go through `create_router` with `tower::ServiceExt::oneshot`, so
//! routing, body decoding, status mapping and JSON shapes are all exercised.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use rstest::rstest;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use storefront_checkout::api::{AppState, create_router};
use storefront_checkout::shipping::{RateTable, ShippingRate};
use storefront_checkout::simple_types::Amount;
use tower::ServiceExt;

async fn post_json(state: AppState, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = create_router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap())
}

fn decimal(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().unwrap()).unwrap()
}

// =============================================================================
// POST /shipping/quote
// =============================================================================

mod shipping_quote_tests {
    use super::*;

    #[rstest]
    #[case(json!({"city": "Casablanca", "subtotal": "350.00"}), Some("zone1"), 25, false)]
    #[case(json!({"city": "MOHAMMÉDIA", "subtotal": "400"}), Some("zone1"), 0, true)]
    #[case(json!({"city": "Rabat", "subtotal": "599.99"}), Some("zone2"), 45, false)]
    #[case(json!({"city": "Rabat", "subtotal": "600"}), Some("zone2"), 0, true)]
    #[case(json!({"city": "", "subtotal": "10"}), None, 0, false)]
    #[case(json!({"city": null, "subtotal": "10"}), None, 0, false)]
    #[case(json!({"subtotal": "10"}), None, 0, false)]
    #[tokio::test]
    async fn test_quote(
        #[case] body: Value,
        #[case] zone: Option<&str>,
        #[case] fee: i64,
        #[case] free_shipping: bool,
    ) {
        let (status, json) = post_json(AppState::default(), "/shipping/quote", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["zone"].as_str(), zone);
        assert_eq!(decimal(&json["fee"]), Decimal::from(fee));
        assert_eq!(json["free_shipping"], free_shipping);
    }

    #[rstest]
    #[tokio::test]
    async fn test_quote_reports_remaining_for_free_shipping() {
        let body = json!({"city": "casablanca", "subtotal": "350.00"}).to_string();

        let (_, json) = post_json(AppState::default(), "/shipping/quote", body).await;

        assert_eq!(decimal(&json["remaining_for_free_shipping"]), Decimal::from(50));
    }

    #[rstest]
    #[tokio::test]
    async fn test_quote_uses_state_rate_table() {
        let amount = |value: i64| Amount::create(Decimal::from(value)).unwrap();
        let state = AppState::new(RateTable::new(
            ["Tangier"],
            ShippingRate::new(amount(10), amount(200)),
            ShippingRate::new(amount(70), amount(900)),
        ));
        let body = json!({"city": "tangier", "subtotal": "150"}).to_string();

        let (status, json) = post_json(state, "/shipping/quote", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["zone"], "zone1");
        assert_eq!(decimal(&json["fee"]), Decimal::from(10));
    }

    #[rstest]
    #[tokio::test]
    async fn test_negative_subtotal_is_a_validation_error() {
        let body = json!({"city": "Rabat", "subtotal": "-1"}).to_string();

        let (status, json) = post_json(AppState::default(), "/shipping/quote", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["errors"][0]["field_name"], "Subtotal");
    }

    #[rstest]
    #[case("not json")]
    #[case(r#"{"city": "Rabat"}"#)]
    #[case(r#"{"city": "Rabat", "subtotal": "abc"}"#)]
    #[tokio::test]
    async fn test_malformed_body(#[case] body: &str) {
        let (status, json) =
            post_json(AppState::default(), "/shipping/quote", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_BODY");
        assert!(json.get("errors").is_none());
    }
}

// =============================================================================
// POST /checkout/summary
// =============================================================================

mod checkout_summary_tests {
    use super::*;

    #[rstest]
    #[tokio::test]
    async fn test_summary() {
        let body = json!({
            "city": "Agadir",
            "lines": [
                {"product_name": "Leather bag", "unit_price": "250.00", "quantity": 1},
                {"product_name": "Scarf", "unit_price": "40", "quantity": 2}
            ]
        })
        .to_string();

        let (status, json) = post_json(AppState::default(), "/checkout/summary", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(decimal(&json["subtotal"]), Decimal::from(330));
        assert_eq!(json["shipping"]["zone"], "zone2");
        assert_eq!(decimal(&json["shipping"]["fee"]), Decimal::from(45));
        assert_eq!(decimal(&json["total"]), Decimal::from(375));
    }

    #[rstest]
    #[tokio::test]
    async fn test_empty_cart() {
        let body = json!({"city": "Agadir", "lines": []}).to_string();

        let (status, json) = post_json(AppState::default(), "/checkout/summary", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "EMPTY_CART");
    }

    #[rstest]
    #[tokio::test]
    async fn test_invalid_line() {
        let body = json!({
            "city": "Agadir",
            "lines": [{"product_name": "Scarf", "unit_price": "40", "quantity": 101}]
        })
        .to_string();

        let (status, json) = post_json(AppState::default(), "/checkout/summary", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["errors"][0]["field_name"], "Quantity");
    }
}

// =============================================================================
// POST /registrations/validate
// =============================================================================

mod registration_tests {
    use super::*;

    #[rstest]
    #[tokio::test]
    async fn test_accepted_registration() {
        let body = json!({
            "full_name": "Imane Berrada",
            "email": "Imane@Example.ma",
            "password": "kasbah2024",
            "password_confirmation": "kasbah2024",
            "city": "Mohammédia"
        })
        .to_string();

        let (status, json) = post_json(AppState::default(), "/registrations/validate", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["email"], "imane@example.ma");
        assert_eq!(json["city"], "Mohammédia");
        assert!(json["phone"].is_null());
        assert!(json.get("password").is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn test_rejected_registration_lists_every_field() {
        let body = json!({
            "full_name": " ",
            "email": "imane",
            "password": "kasbah2024",
            "password_confirmation": "kasbah"
        })
        .to_string();

        let (status, json) = post_json(AppState::default(), "/registrations/validate", body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["code"], "REGISTRATION_INVALID");
        let fields: Vec<&str> = json["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|error| error["field_name"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["FullName", "Email", "PasswordConfirmation"]);
        assert!(!json.to_string().contains("kasbah2024"));
    }
}
