//! Request DTOs for pricing API endpoints.

use serde::Deserialize;

use crate::catalog::{Brand, StorageTier};
use crate::error::AppError;

use super::models::PricingConfiguration;

/// Largest camera count per kind the configuration form accepts
pub const MAX_CAMERAS_PER_KIND: u32 = 20;

/// Longest cable run, in meters, the configuration form accepts
pub const MAX_CABLE_LENGTH: u32 = 500;

/// Request to price a custom configuration
#[derive(Debug, Deserialize)]
pub struct CalculatePriceRequest {
    #[serde(default)]
    pub indoor_cameras: u32,
    #[serde(default)]
    pub outdoor_cameras: u32,
    pub cable_length: u32,
    pub brand: Brand,
    pub hdd_size: StorageTier,
    #[serde(default)]
    pub voucher_code: Option<String>,
}

impl CalculatePriceRequest {
    /// Check form limits and build the engine input.
    pub fn into_configuration(self) -> Result<PricingConfiguration, AppError> {
        let mut errors = Vec::new();
        if self.indoor_cameras > MAX_CAMERAS_PER_KIND {
            errors.push(format!("indoor_cameras must be at most {}", MAX_CAMERAS_PER_KIND));
        }
        if self.outdoor_cameras > MAX_CAMERAS_PER_KIND {
            errors.push(format!("outdoor_cameras must be at most {}", MAX_CAMERAS_PER_KIND));
        }
        if !(1..=MAX_CABLE_LENGTH).contains(&self.cable_length) {
            errors.push(format!("cable_length must be between 1 and {}", MAX_CABLE_LENGTH));
        }
        if !errors.is_empty() {
            return Err(AppError::BadRequest(errors.join("; ")));
        }

        Ok(PricingConfiguration {
            indoor_cameras: self.indoor_cameras,
            outdoor_cameras: self.outdoor_cameras,
            cable_length: self.cable_length,
            brand: self.brand,
            storage: self.hdd_size,
            voucher_code: self.voucher_code,
        })
    }
}

/// Request to quote one package
#[derive(Debug, Deserialize)]
pub struct PackageQuoteRequest {
    pub package: String,
    #[serde(default)]
    pub voucher_code: Option<String>,
}

/// Request to check a voucher code
#[derive(Debug, Deserialize)]
pub struct VoucherCheckRequest {
    pub code: String,
}
