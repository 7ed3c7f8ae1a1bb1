//! API handlers for the lease calculator server
//!
//! Provides REST endpoints for:
//! - Lease calculations
//! - Mode listing
//! - Mock checkout and analysis

use axum::{extract::State, Json};
use lease_calculator::LeaseCalculator;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use shared_types::{CalculationInput, CalculationMode, CalculationResult};

use crate::error::ServerError;
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "lease-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mode list response
#[derive(Serialize)]
pub struct ModeListResponse {
    pub success: bool,
    pub modes: Vec<ModeInfo>,
    pub count: usize,
}

/// Mode metadata
#[derive(Serialize)]
pub struct ModeInfo {
    pub mode: CalculationMode,
    pub title: &'static str,
    pub required_fields: &'static [&'static str],
}

/// Handler: GET /api/modes
pub async fn handle_list_modes() -> Json<ModeListResponse> {
    let modes: Vec<ModeInfo> = LeaseCalculator::new()
        .supported_modes()
        .iter()
        .map(|&mode| ModeInfo {
            mode,
            title: mode.title(),
            required_fields: mode.required_fields(),
        })
        .collect();

    let count = modes.len();

    Json(ModeListResponse {
        success: true,
        modes,
        count,
    })
}

/// Calculation response
#[derive(Serialize)]
pub struct CalculateResponse {
    pub success: bool,
    pub mode: CalculationMode,
    pub result: CalculationResult,
}

/// Handler: POST /api/calculate
pub async fn handle_calculate(
    Json(input): Json<CalculationInput>,
) -> Result<Json<CalculateResponse>, ServerError> {
    let mode = input.mode();
    info!("Calculate request: mode={}", mode);

    let result = LeaseCalculator::new().calculate(&input)?;

    Ok(Json(CalculateResponse {
        success: true,
        mode,
        result,
    }))
}

/// Checkout request body
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub variant_id: String,
    #[serde(default)]
    pub customer_email: String,
}

/// Checkout response
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub success: bool,
    pub checkout_url: String,
    pub session_id: String,
    pub variant_id: String,
    pub customer_email: String,
}

/// Handler: POST /checkout
///
/// Stand-in for a payment provider: issues a session id and checkout link
/// without contacting anyone.
pub async fn handle_checkout(
    State(state): State<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, ServerError> {
    let variant_id = req.variant_id.trim();
    if variant_id.is_empty() {
        return Err(ServerError::InvalidRequest("variant_id is required".into()));
    }

    let customer_email = req.customer_email.trim();
    if !customer_email.contains('@') {
        return Err(ServerError::InvalidRequest(format!(
            "Invalid customer_email: '{}'",
            customer_email
        )));
    }

    let session_id = Uuid::new_v4().to_string();
    info!("Checkout session {} for variant {}", session_id, variant_id);

    Ok(Json(CheckoutResponse {
        success: true,
        checkout_url: format!("{}/checkout/{}", state.checkout_base_url, session_id),
        session_id,
        variant_id: variant_id.to_string(),
        customer_email: customer_email.to_string(),
    }))
}

/// Analysis response
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub message: String,
}

/// Handler: POST /api/analyze
pub async fn handle_analyze(Json(payload): Json<serde_json::Value>) -> Json<AnalyzeResponse> {
    let fields = payload.as_object().map_or(0, |object| object.len());
    debug!("Analyze payload: {}", payload);
    info!("Analyze request with {} fields", fields);

    Json(AnalyzeResponse {
        success: true,
        message: format!("Analysis request received ({} fields)", fields),
    })
}
