#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use receipt_processor::api::server::create_app;
    use receipt_processor::InMemoryReceiptStore;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        create_app(Arc::new(InMemoryReceiptStore::new()))
    }

    fn target_receipt() -> Value {
        json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
                { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
                { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
                { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
                { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
            ],
            "total": "35.35"
        })
    }

    fn corner_market_receipt() -> Value {
        json!({
            "retailer": "M&M Corner Market",
            "purchaseDate": "2022-03-20",
            "purchaseTime": "14:33",
            "items": [
                { "shortDescription": "Gatorade", "price": "2.25" },
                { "shortDescription": "Gatorade", "price": "2.25" },
                { "shortDescription": "Gatorade", "price": "2.25" },
                { "shortDescription": "Gatorade", "price": "2.25" }
            ],
            "total": "9.00"
        })
    }

    fn post_receipt(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn get_points(id: &str) -> Request<Body> {
        Request::builder()
            .uri(format!("/receipts/{}/points", id))
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    async fn process(app: &Router, receipt: &Value) -> (StatusCode, Value) {
        send(app, post_receipt(receipt.to_string())).await
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn test_process_then_get_points() {
        let app = app();

        let (status, body) = process(&app, &target_receipt()).await;
        assert_eq!(status, StatusCode::OK);
        let id = body["id"].as_str().unwrap().to_string();

        let (status, body) = send(&app, get_points(&id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "points": 28 }));
    }

    #[tokio::test]
    async fn test_corner_market_scores_109() {
        let app = app();

        let (_, body) = process(&app, &corner_market_receipt()).await;
        let id = body["id"].as_str().unwrap().to_string();

        let (_, body) = send(&app, get_points(&id)).await;
        assert_eq!(body["points"], 109);
    }

    #[tokio::test]
    async fn test_ids_are_unique_per_submission() {
        let app = app();

        let (_, first) = process(&app, &target_receipt()).await;
        let (_, second) = process(&app, &target_receipt()).await;

        assert_ne!(first["id"], second["id"]);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let (status, body) = send(&app(), get_points("adb6b560-0eef-42bc-9d16-df48f30e89b2")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["description"], "No receipt found for that id");
    }

    #[tokio::test]
    async fn test_validation_failures_are_bad_requests() {
        let app = app();
        let cases = [
            ("retailer", json!(""), "empty_field"),
            ("purchaseDate", json!(""), "empty_field"),
            ("purchaseTime", json!(""), "empty_field"),
            ("purchaseDate", json!("2022-02-30"), "invalid_format"),
            ("purchaseTime", json!("25:00"), "invalid_format"),
            ("total", json!("abc"), "invalid_number"),
            ("items", json!([]), "too_few_items"),
        ];

        for (field, value, kind) in cases {
            let mut receipt = target_receipt();
            receipt[field] = value;

            let (status, body) = process(&app, &receipt).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{field} should be rejected");
            assert_eq!(body["error"], kind, "{field}");
            assert_eq!(body["description"], "The receipt is invalid");
        }
    }

    #[tokio::test]
    async fn test_missing_fields_are_empty_fields() {
        let mut receipt = target_receipt();
        receipt.as_object_mut().unwrap().remove("retailer");

        let (status, body) = process(&app(), &receipt).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "empty_field");
    }

    #[tokio::test]
    async fn test_bad_item_price_is_rejected() {
        let mut receipt = target_receipt();
        receipt["items"][0]["price"] = json!("6.499");

        let (status, body) = process(&app(), &receipt).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_number");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = app();

        let (status, body) = send(&app, post_receipt("{ not json".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");

        // Wrong JSON type for total
        let mut receipt = target_receipt();
        receipt["total"] = json!(35.35);
        let (status, body) = process(&app, &receipt).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_rejected_receipt_is_not_retrievable() {
        let app = app();
        let mut receipt = target_receipt();
        receipt["items"] = json!([]);

        let (_, body) = process(&app, &receipt).await;

        assert!(body.get("id").is_none());
    }
}
