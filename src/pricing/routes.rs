//! HTTP routes for the pricing engine.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::AppState;

use super::calculators::{calculate_price, price_package};
use super::requests::{CalculatePriceRequest, PackageQuoteRequest, VoucherCheckRequest};
use super::responses::{
    CatalogResponse, PackageQuoteResponse, PricingResponse, VoucherCheckResponse,
};

/// Pricing routes, mounted under `/api`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(catalog))
        .route("/pricing/calculate", post(calculate))
        .route("/pricing/packages", get(packages))
        .route("/pricing/package", post(package_quote))
        .route("/vouchers/check", post(check_voucher))
}

/// Form options: brands, storage tiers, event discount
async fn catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse::from(state.catalog.as_ref()))
}

/// Price a custom configuration
async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<CalculatePriceRequest>,
) -> Result<Json<PricingResponse>> {
    let config = request.into_configuration()?;
    let result = calculate_price(&state.catalog, &config);
    Ok(Json(PricingResponse::from(&result)))
}

/// Every package with the event discount applied
async fn packages(State(state): State<AppState>) -> Json<Vec<PackageQuoteResponse>> {
    let quotes = state
        .catalog
        .packages
        .iter()
        .map(|package| PackageQuoteResponse::from(&price_package(&state.catalog, package, None)))
        .collect();
    Json(quotes)
}

/// One package with an optional voucher
async fn package_quote(
    State(state): State<AppState>,
    Json(request): Json<PackageQuoteRequest>,
) -> Result<Json<PackageQuoteResponse>> {
    let package = state
        .catalog
        .find_package(&request.package)
        .ok_or_else(|| AppError::NotFound(format!("Package '{}'", request.package)))?;

    let quote = price_package(&state.catalog, package, request.voucher_code.as_deref());
    Ok(Json(PackageQuoteResponse::from(&quote)))
}

/// Whether a voucher code would be applied
async fn check_voucher(
    State(state): State<AppState>,
    Json(request): Json<VoucherCheckRequest>,
) -> Json<VoucherCheckResponse> {
    let valid = state.catalog.resolve_voucher(Some(&request.code)).is_some();
    Json(VoucherCheckResponse {
        code: request.code,
        valid,
    })
}
