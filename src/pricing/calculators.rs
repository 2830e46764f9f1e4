//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no shared state besides the
//! read-only catalog. Unknown or disabled voucher codes never fail a
//! calculation; they simply contribute no discount.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::catalog::{ComponentCatalog, DvrTier, Package};

use super::models::{
    DiscountOutcome, PackageQuote, PriceBreakdown, PricingConfiguration, PricingResult,
};

/// Accessories (connectors, brackets, clips) fitted per camera
pub const ACCESSORIES_PER_CAMERA: u32 = 3;

/// Cameras served by one power-supply unit and by one DVR port group
pub const CAMERAS_PER_GROUP: u64 = 4;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use cctv_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Number of 4-camera groups, partial groups rounded up.
pub fn camera_groups(total_cameras: u64) -> u64 {
    total_cameras.div_ceil(CAMERAS_PER_GROUP)
}

/// DVR ports needed: the smallest multiple of 4 that fits every camera.
pub fn required_dvr_ports(total_cameras: u64) -> u64 {
    camera_groups(total_cameras) * CAMERAS_PER_GROUP
}

fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    amount * percent / dec!(100)
}

/// Apply the event discount, then a voucher discount, to `base`.
///
/// The voucher percent is taken from the already event-discounted amount, so
/// the two discounts compound. Shared by custom configurations and packages.
pub fn apply_discounts(
    catalog: &ComponentCatalog,
    base: Decimal,
    voucher_code: Option<&str>,
) -> DiscountOutcome {
    let event = &catalog.event_discount;
    let event_discount = if event.active {
        percent_of(base, event.discount_percent)
    } else {
        Decimal::ZERO
    };
    let after_event_discount = base - event_discount;

    let (voucher_discount, voucher_valid) = match catalog.resolve_voucher(voucher_code) {
        Some(voucher) => (percent_of(after_event_discount, voucher.discount_percent), true),
        None => {
            if let Some(code) = voucher_code.filter(|c| !c.is_empty()) {
                debug!(code, "Voucher not applied");
            }
            (Decimal::ZERO, false)
        }
    };

    DiscountOutcome {
        base,
        event_active: event.active,
        event_discount,
        after_event_discount,
        voucher_discount,
        total: after_event_discount - voucher_discount,
        voucher_valid,
    }
}

/// Price a custom camera configuration component by component.
pub fn calculate_price(
    catalog: &ComponentCatalog,
    config: &PricingConfiguration,
) -> PricingResult {
    let prices = &catalog.component_prices;
    let total_cameras = config.total_cameras();
    let cameras = Decimal::from(total_cameras);

    let dvr_ports = required_dvr_ports(total_cameras);
    let dvr_tier = DvrTier::for_ports(dvr_ports);

    let breakdown = PriceBreakdown {
        cameras: prices.cameras.indoor.get(config.brand) * Decimal::from(config.indoor_cameras)
            + prices.cameras.outdoor.get(config.brand) * Decimal::from(config.outdoor_cameras),
        accessories: prices.accessories * cameras * Decimal::from(ACCESSORIES_PER_CAMERA),
        storage: prices.hdd.get(config.storage),
        cable: prices.cable_per_meter * Decimal::from(config.cable_length),
        housing: prices.duradus * cameras,
        power_supply: prices.power_supply_per_4_cameras
            * Decimal::from(camera_groups(total_cameras)),
        installation: prices.installation_fee_per_camera * cameras,
        dvr: prices.dvr.get(dvr_tier),
    };

    let subtotal = breakdown.sum();
    let discounts = apply_discounts(catalog, subtotal, config.voucher_code.as_deref());

    debug!(
        total_cameras,
        dvr_ports,
        subtotal = %subtotal,
        total = %discounts.total,
        voucher_valid = discounts.voucher_valid,
        "Calculated configuration price"
    );

    PricingResult {
        breakdown,
        subtotal,
        event_discount: discounts.event_discount,
        after_event_discount: discounts.after_event_discount,
        voucher_discount: discounts.voucher_discount,
        total: discounts.total,
        dvr_ports,
        dvr_tier,
        voucher_valid: discounts.voucher_valid,
    }
}

/// Price a predefined package: its base price with the same discounts.
pub fn price_package(
    catalog: &ComponentCatalog,
    package: &Package,
    voucher_code: Option<&str>,
) -> PackageQuote {
    PackageQuote {
        package: package.clone(),
        discounts: apply_discounts(catalog, package.base_price, voucher_code),
    }
}
