//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::{
    Brand, BrandInfo, CameraPlacement, ComponentCatalog, DvrTier, EventDiscount, StorageTier,
};
use crate::currency::format_currency;

use super::models::{PackageQuote, PricingResult};

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: &'static str,
    pub formatted: String,
}

impl MoneyResponse {
    pub fn idr(amount: Decimal) -> Self {
        Self {
            amount,
            currency: "IDR",
            formatted: format_currency(amount),
        }
    }
}

/// One line of the price breakdown
#[derive(Debug, Serialize)]
pub struct BreakdownLineResponse {
    pub key: &'static str,
    pub label: String,
    pub amount: MoneyResponse,
}

/// Event discount as shown next to prices
#[derive(Debug, Serialize)]
pub struct EventDiscountResponse {
    pub active: bool,
    #[serde(with = "rust_decimal::serde::str")]
    pub discount_percent: Decimal,
    pub description: String,
}

impl From<&EventDiscount> for EventDiscountResponse {
    fn from(event: &EventDiscount) -> Self {
        Self {
            active: event.active,
            discount_percent: event.discount_percent,
            description: event.description.clone(),
        }
    }
}

/// Response for a custom configuration
#[derive(Debug, Serialize)]
pub struct PricingResponse {
    pub breakdown: Vec<BreakdownLineResponse>,
    pub subtotal: MoneyResponse,
    pub event_discount: MoneyResponse,
    pub after_event_discount: MoneyResponse,
    pub voucher_discount: MoneyResponse,
    pub total: MoneyResponse,
    pub dvr_ports: u64,
    pub dvr_tier: DvrTier,
    pub voucher_valid: bool,
}

impl From<&PricingResult> for PricingResponse {
    fn from(result: &PricingResult) -> Self {
        let breakdown = result
            .breakdown
            .items()
            .into_iter()
            .map(|(key, amount)| BreakdownLineResponse {
                key,
                label: line_label(key, result.dvr_tier),
                amount: MoneyResponse::idr(amount),
            })
            .collect();

        Self {
            breakdown,
            subtotal: MoneyResponse::idr(result.subtotal),
            event_discount: MoneyResponse::idr(result.event_discount),
            after_event_discount: MoneyResponse::idr(result.after_event_discount),
            voucher_discount: MoneyResponse::idr(result.voucher_discount),
            total: MoneyResponse::idr(result.total),
            dvr_ports: result.dvr_ports,
            dvr_tier: result.dvr_tier,
            voucher_valid: result.voucher_valid,
        }
    }
}

/// Customer-facing label of a breakdown line
pub(crate) fn line_label(key: &str, dvr_tier: DvrTier) -> String {
    match key {
        "cameras" => "Cameras".to_string(),
        "accessories" => "Accessories (3 per camera)".to_string(),
        "storage" => "HDD Storage".to_string(),
        "cable" => "Cable Installation".to_string(),
        "housing" => "Duradus".to_string(),
        "power_supply" => "Power Supply".to_string(),
        "installation" => "Installation Fee".to_string(),
        "dvr" => format!("DVR ({}-port)", dvr_tier.ports()),
        other => other.to_string(),
    }
}

/// Response for a package quote
#[derive(Debug, Serialize)]
pub struct PackageQuoteResponse {
    pub name: String,
    pub description: String,
    pub cameras: u32,
    #[serde(rename = "type")]
    pub placement: CameraPlacement,
    pub brand: Brand,
    pub hdd: StorageTier,
    pub cable: u32,
    pub base_price: MoneyResponse,
    pub event_discount: MoneyResponse,
    pub voucher_discount: MoneyResponse,
    pub final_price: MoneyResponse,
    pub voucher_valid: bool,
    pub discounted: bool,
}

impl From<&PackageQuote> for PackageQuoteResponse {
    fn from(quote: &PackageQuote) -> Self {
        let package = &quote.package;
        Self {
            name: package.name.clone(),
            description: package.description.clone(),
            cameras: package.cameras,
            placement: package.placement,
            brand: package.brand,
            hdd: package.hdd,
            cable: package.cable,
            base_price: MoneyResponse::idr(package.base_price),
            event_discount: MoneyResponse::idr(quote.discounts.event_discount),
            voucher_discount: MoneyResponse::idr(quote.discounts.voucher_discount),
            final_price: MoneyResponse::idr(quote.final_price()),
            voucher_valid: quote.discounts.voucher_valid,
            discounted: quote.is_discounted(),
        }
    }
}

/// Storage option offered in the configuration form
#[derive(Debug, Serialize)]
pub struct StorageOptionResponse {
    pub tier: StorageTier,
    pub label: &'static str,
    pub price: MoneyResponse,
}

/// Options needed to render the configuration form
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub brands: Vec<BrandInfo>,
    pub storage: Vec<StorageOptionResponse>,
    pub event_discount: EventDiscountResponse,
}

impl From<&ComponentCatalog> for CatalogResponse {
    fn from(catalog: &ComponentCatalog) -> Self {
        let storage = StorageTier::ALL
            .iter()
            .map(|tier| StorageOptionResponse {
                tier: *tier,
                label: tier.label(),
                price: MoneyResponse::idr(catalog.component_prices.hdd.get(*tier)),
            })
            .collect();

        Self {
            brands: catalog.cctv_brands.clone(),
            storage,
            event_discount: EventDiscountResponse::from(&catalog.event_discount),
        }
    }
}

/// Response for a voucher check
#[derive(Debug, Serialize)]
pub struct VoucherCheckResponse {
    pub code: String,
    pub valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_catalog;
    use crate::pricing::{calculate_price, models::PricingConfiguration};
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_response_serializes_amount_as_string() {
        let json = serde_json::to_value(MoneyResponse::idr(dec!(1250000))).unwrap();
        assert_eq!(json["amount"], "1250000");
        assert_eq!(json["currency"], "IDR");
        assert_eq!(json["formatted"], "Rp\u{a0}1.250.000");
    }

    #[test]
    fn test_pricing_response_lines() {
        let catalog = test_catalog();
        let config = PricingConfiguration {
            indoor_cameras: 4,
            outdoor_cameras: 1,
            cable_length: 30,
            brand: Brand::Hilook,
            storage: StorageTier::Tb2,
            voucher_code: None,
        };
        let response = PricingResponse::from(&calculate_price(&catalog, &config));

        assert_eq!(response.breakdown.len(), 8);
        assert_eq!(response.breakdown[1].label, "Accessories (3 per camera)");
        assert_eq!(response.breakdown[7].label, "DVR (8-port)");
        assert_eq!(response.dvr_ports, 8);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["dvr_tier"], "8_port");
    }

    #[test]
    fn test_catalog_response_lists_storage_tiers() {
        let response = CatalogResponse::from(&test_catalog());
        assert_eq!(response.storage.len(), 4);
        assert_eq!(response.storage[1].label, "1TB");
        assert_eq!(response.storage[1].price.amount, dec!(800000));
        assert!(!response.event_discount.active);
    }
}
