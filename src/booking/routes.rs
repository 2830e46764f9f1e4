//! HTTP route for the booking handoff.

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use tracing::info;

use crate::error::{AppError, Result};
use crate::pricing::{calculate_price, price_package, requests::CalculatePriceRequest};
use crate::AppState;

use super::message::{handoff, BookingHandoff};
use super::{BookingItem, BookingRecord, CustomerDetails};

/// Booking form submission. Exactly one of `package` or `simulation` is set.
#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    pub full_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub simulation: Option<CalculatePriceRequest>,
    #[serde(default)]
    pub voucher_code: Option<String>,
}

impl BookingRequest {
    fn customer(&self) -> Result<CustomerDetails> {
        let fields = [
            ("full_name", &self.full_name),
            ("address", &self.address),
            ("phone", &self.phone),
            ("email", &self.email),
        ];
        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(AppError::BadRequest(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }

        Ok(CustomerDetails {
            full_name: self.full_name.trim().to_string(),
            address: self.address.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
        })
    }
}

/// Booking routes, mounted under `/api`
pub fn router() -> Router<AppState> {
    Router::new().route("/booking/whatsapp", post(whatsapp))
}

/// Price the booked item server-side and return the WhatsApp handoff
async fn whatsapp(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> Result<Json<BookingHandoff>> {
    let customer = request.customer()?;
    let voucher_code = request.voucher_code.filter(|c| !c.is_empty());

    let item = match (request.package, request.simulation) {
        (Some(name), None) => {
            let package = state
                .catalog
                .find_package(&name)
                .ok_or_else(|| AppError::NotFound(format!("Package '{}'", name)))?;
            let quote = price_package(&state.catalog, package, voucher_code.as_deref());
            BookingItem::Package {
                name,
                final_price: Some(quote.final_price()),
            }
        }
        (None, Some(simulation)) => {
            let mut configuration = simulation.into_configuration()?;
            configuration.voucher_code = voucher_code.clone();
            let result = calculate_price(&state.catalog, &configuration);
            BookingItem::Simulation {
                configuration,
                result,
            }
        }
        _ => {
            return Err(AppError::BadRequest(
                "exactly one of package or simulation is required".to_string(),
            ))
        }
    };

    let booking = BookingRecord {
        customer,
        item,
        voucher_code,
    };
    let outcome = handoff(&state.catalog, &booking);

    info!(contact = %outcome.contact, "Booking handed off");
    Ok(Json(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BookingRequest {
        serde_json::from_str(
            r#"{
                "full_name": "Siti",
                "address": "Jl. Sudirman 1",
                "phone": "0812",
                "email": "siti@example.com",
                "package": "Basic Home"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_customer_trims_fields() {
        let mut req = request();
        req.full_name = "  Siti  ".to_string();
        assert_eq!(req.customer().unwrap().full_name, "Siti");
    }

    #[test]
    fn test_customer_reports_missing_fields() {
        let mut req = request();
        req.phone = "   ".to_string();
        req.email = String::new();
        let err = req.customer().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid request: missing required fields: phone, email"
        );
    }
}
