//! Router tests for the lease calculator server
//!
//! Requests go through the full router (CORS and tracing layers included)
//! via `tower::ServiceExt::oneshot`.

#[cfg(test)]
mod router_tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::{create_router, AppState};

    fn app() -> Router {
        create_router(AppState::new("https://pay.test"))
    }

    async fn send(
        app: Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value), Box<dyn std::error::Error>> {
        let builder = Request::builder().uri(uri).method(method);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = app.oneshot(request).await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok((status, value))
    }

    #[tokio::test]
    async fn test_health() -> Result<(), Box<dyn std::error::Error>> {
        let (status, body) = send(app(), Method::GET, "/health", None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "lease-api");
        Ok(())
    }

    #[tokio::test]
    async fn test_list_modes() -> Result<(), Box<dyn std::error::Error>> {
        let (status, body) = send(app(), Method::GET, "/api/modes", None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 8);
        assert_eq!(body["modes"][3]["mode"], "income-ratio");
        assert_eq!(
            body["modes"][3]["required_fields"],
            json!(["monthlyRent", "monthlyIncome|annualIncome"])
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_calculate_rent() -> Result<(), Box<dyn std::error::Error>> {
        let request = json!({
            "mode": "rent",
            "monthlyRent": "$1,500",
            "leaseTermMonths": 12
        });

        let (status, body) = send(app(), Method::POST, "/api/calculate", Some(request)).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["mode"], "rent");
        assert_eq!(body["result"]["annualRent"], json!(18000.0));
        assert_eq!(body["result"]["totalLeaseTerm"], json!(18000.0));
        Ok(())
    }

    #[tokio::test]
    async fn test_calculate_break_even() -> Result<(), Box<dyn std::error::Error>> {
        let request = json!({
            "mode": "break-even",
            "breakEvenAnalysis": {
                "currentRent": "2000",
                "newRent": "1800",
                "movingCosts": "500",
                "currentDeposit": "2000",
                "newDeposit": "1800"
            }
        });

        let (status, body) = send(app(), Method::POST, "/api/calculate", Some(request)).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["monthlySavings"], json!(200.0));
        assert_eq!(body["result"]["totalMovingCosts"], json!(300.0));
        assert_eq!(body["result"]["breakEvenMonths"], json!(1.5));
        assert_eq!(body["result"]["isWorthIt"], true);
        Ok(())
    }

    #[tokio::test]
    async fn test_calculate_missing_field() -> Result<(), Box<dyn std::error::Error>> {
        let request = json!({ "mode": "deposit", "monthlyRent": "1000" });

        let (status, body) = send(app(), Method::POST, "/api/calculate", Some(request)).await?;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "MISSING_REQUIRED_FIELD");
        assert_eq!(body["field"], "securityDeposit");
        Ok(())
    }

    #[tokio::test]
    async fn test_calculate_zero_income() -> Result<(), Box<dyn std::error::Error>> {
        let request = json!({
            "mode": "income-ratio",
            "monthlyRent": "1500",
            "monthlyIncome": "0"
        });

        let (status, body) = send(app(), Method::POST, "/api/calculate", Some(request)).await?;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "DEGENERATE_DIVISION");
        Ok(())
    }

    #[tokio::test]
    async fn test_calculate_unknown_mode() -> Result<(), Box<dyn std::error::Error>> {
        let request = json!({ "mode": "mortgage", "monthlyRent": "1500" });

        let (status, _) = send(app(), Method::POST, "/api/calculate", Some(request)).await?;
        assert!(status.is_client_error());
        Ok(())
    }

    #[tokio::test]
    async fn test_checkout() -> Result<(), Box<dyn std::error::Error>> {
        let request = json!({
            "variant_id": "lease-report",
            "customer_email": "renter@example.com"
        });

        let (status, body) = send(app(), Method::POST, "/checkout", Some(request)).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["variant_id"], "lease-report");

        let session_id = body["session_id"].as_str().unwrap_or_default();
        assert!(!session_id.is_empty());
        assert_eq!(
            body["checkout_url"],
            format!("https://pay.test/checkout/{}", session_id)
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_rejects_bad_email() -> Result<(), Box<dyn std::error::Error>> {
        let request = json!({ "variant_id": "lease-report", "customer_email": "nobody" });

        let (status, body) = send(app(), Method::POST, "/checkout", Some(request)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_REQUEST");
        Ok(())
    }

    #[tokio::test]
    async fn test_analyze() -> Result<(), Box<dyn std::error::Error>> {
        let request = json!({ "address": "123 Main St", "monthlyRent": 1800 });

        let (status, body) = send(app(), Method::POST, "/api/analyze", Some(request)).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["message"].as_str().is_some());
        Ok(())
    }
}

#[cfg(test)]
mod property_tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use proptest::prelude::*;
    use serde_json::json;
    use shared_types::CalculationMode;
    use tower::ServiceExt;

    use crate::{create_router, AppState};

    fn status_for(body: serde_json::Value, uri: &str) -> StatusCode {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        runtime.block_on(async {
            let app = create_router(AppState::new("https://pay.test"));
            let request = Request::builder()
                .uri(uri)
                .method(Method::POST)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap();
            app.oneshot(request).await.unwrap().status()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Property: arbitrary form text is either calculated or rejected as
        /// unprocessable, never a server error
        #[test]
        fn calculate_never_fails_internally(
            mode in prop::sample::select(CalculationMode::ALL.to_vec()),
            rent in "\\PC{0,12}",
            other in "\\PC{0,12}",
        ) {
            let body = json!({
                "mode": mode.as_str(),
                "monthlyRent": rent,
                "leaseTermMonths": other,
                "securityDeposit": other,
                "monthlyIncome": other,
                "moveInDate": other,
            });

            let status = status_for(body, "/api/calculate");
            prop_assert!(
                status == StatusCode::OK || status == StatusCode::UNPROCESSABLE_ENTITY,
                "unexpected status {}",
                status
            );
        }

        /// Property: emails without '@' never get a checkout session
        #[test]
        fn checkout_requires_at_sign(email in "[a-z0-9.]{0,20}") {
            let body = json!({ "variant_id": "lease-report", "customer_email": email });
            prop_assert_eq!(status_for(body, "/checkout"), StatusCode::BAD_REQUEST);
        }
    }
}
