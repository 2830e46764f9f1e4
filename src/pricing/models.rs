//! Pricing inputs and results.
//!
//! All values are plain data: a result is computed fresh from a configuration
//! and the catalog, and never updated in place.

use rust_decimal::Decimal;

use crate::catalog::{Brand, DvrTier, Package, StorageTier};

/// A customer's custom camera setup
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfiguration {
    pub indoor_cameras: u32,
    pub outdoor_cameras: u32,
    /// Meters, at least 1
    pub cable_length: u32,
    pub brand: Brand,
    pub storage: StorageTier,
    pub voucher_code: Option<String>,
}

impl PricingConfiguration {
    /// Widened so that any pair of `u32` counts sums without overflow
    pub fn total_cameras(&self) -> u64 {
        u64::from(self.indoor_cameras) + u64::from(self.outdoor_cameras)
    }
}

/// Itemized cost of a custom configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    pub cameras: Decimal,
    pub accessories: Decimal,
    pub storage: Decimal,
    pub cable: Decimal,
    pub housing: Decimal,
    pub power_supply: Decimal,
    pub installation: Decimal,
    pub dvr: Decimal,
}

impl PriceBreakdown {
    /// Line items in display order
    pub fn items(&self) -> [(&'static str, Decimal); 8] {
        [
            ("cameras", self.cameras),
            ("accessories", self.accessories),
            ("storage", self.storage),
            ("cable", self.cable),
            ("housing", self.housing),
            ("power_supply", self.power_supply),
            ("installation", self.installation),
            ("dvr", self.dvr),
        ]
    }

    pub fn sum(&self) -> Decimal {
        self.items().iter().map(|(_, amount)| *amount).sum()
    }
}

/// Event and voucher discounts applied to a base amount
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountOutcome {
    pub base: Decimal,
    /// Whether the site-wide event discount was in effect, even at 0%
    pub event_active: bool,
    pub event_discount: Decimal,
    pub after_event_discount: Decimal,
    pub voucher_discount: Decimal,
    pub total: Decimal,
    pub voucher_valid: bool,
}

/// Full price of a custom configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PricingResult {
    pub breakdown: PriceBreakdown,
    pub subtotal: Decimal,
    pub event_discount: Decimal,
    pub after_event_discount: Decimal,
    pub voucher_discount: Decimal,
    pub total: Decimal,
    /// Smallest multiple of 4 that fits every camera (0 for no cameras)
    pub dvr_ports: u64,
    /// DVR actually charged
    pub dvr_tier: DvrTier,
    pub voucher_valid: bool,
}

/// Price of a predefined package after discounts
#[derive(Debug, Clone, PartialEq)]
pub struct PackageQuote {
    pub package: Package,
    pub discounts: DiscountOutcome,
}

impl PackageQuote {
    pub fn final_price(&self) -> Decimal {
        self.discounts.total
    }

    /// True when a promotion applies, so the base price is shown struck through
    pub fn is_discounted(&self) -> bool {
        self.discounts.event_active || self.discounts.voucher_valid
    }
}
