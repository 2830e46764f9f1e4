//! Catalog data model.
//!
//! The catalog mirrors the site's data document: component unit prices, the
//! voucher table, the event discount and the fixed packages. Closed enums are
//! used for every key the configuration form offers, so an unknown brand or
//! tier is rejected when the document is loaded rather than at pricing time.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Camera brand offered in the configuration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    Hilook,
    Dahua,
}

impl Brand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Hilook => "hilook",
            Brand::Dahua => "dahua",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HDD storage tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageTier {
    #[serde(rename = "500gb")]
    Gb500,
    #[serde(rename = "1tb")]
    Tb1,
    #[serde(rename = "2tb")]
    Tb2,
    #[serde(rename = "4tb")]
    Tb4,
}

impl StorageTier {
    pub const ALL: [StorageTier; 4] = [
        StorageTier::Gb500,
        StorageTier::Tb1,
        StorageTier::Tb2,
        StorageTier::Tb4,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageTier::Gb500 => "500gb",
            StorageTier::Tb1 => "1tb",
            StorageTier::Tb2 => "2tb",
            StorageTier::Tb4 => "4tb",
        }
    }

    /// Label shown to customers, e.g. "1TB"
    pub fn label(&self) -> &'static str {
        match self {
            StorageTier::Gb500 => "500GB",
            StorageTier::Tb1 => "1TB",
            StorageTier::Tb2 => "2TB",
            StorageTier::Tb4 => "4TB",
        }
    }
}

impl fmt::Display for StorageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// DVR size, in camera ports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DvrTier {
    #[serde(rename = "4_port")]
    Port4,
    #[serde(rename = "8_port")]
    Port8,
    #[serde(rename = "16_port")]
    Port16,
    #[serde(rename = "32_port")]
    Port32,
}

impl DvrTier {
    /// Step function from required ports to the DVR that is charged.
    ///
    /// Zero ports still maps to the 4-port unit.
    pub fn for_ports(ports: u64) -> Self {
        match ports {
            0..=4 => DvrTier::Port4,
            5..=8 => DvrTier::Port8,
            9..=16 => DvrTier::Port16,
            _ => DvrTier::Port32,
        }
    }

    pub fn ports(&self) -> u32 {
        match self {
            DvrTier::Port4 => 4,
            DvrTier::Port8 => 8,
            DvrTier::Port16 => 16,
            DvrTier::Port32 => 32,
        }
    }
}

/// Camera mounting type of a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraPlacement {
    Indoor,
    Outdoor,
    Mixed,
}

/// Per-brand unit price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandPrices {
    pub hilook: Decimal,
    pub dahua: Decimal,
}

impl BrandPrices {
    pub fn get(&self, brand: Brand) -> Decimal {
        match brand {
            Brand::Hilook => self.hilook,
            Brand::Dahua => self.dahua,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraPrices {
    pub indoor: BrandPrices,
    pub outdoor: BrandPrices,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoragePrices {
    #[serde(rename = "500gb")]
    pub gb500: Decimal,
    #[serde(rename = "1tb")]
    pub tb1: Decimal,
    #[serde(rename = "2tb")]
    pub tb2: Decimal,
    #[serde(rename = "4tb")]
    pub tb4: Decimal,
}

impl StoragePrices {
    pub fn get(&self, tier: StorageTier) -> Decimal {
        match tier {
            StorageTier::Gb500 => self.gb500,
            StorageTier::Tb1 => self.tb1,
            StorageTier::Tb2 => self.tb2,
            StorageTier::Tb4 => self.tb4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DvrPrices {
    #[serde(rename = "4_port")]
    pub port4: Decimal,
    #[serde(rename = "8_port")]
    pub port8: Decimal,
    #[serde(rename = "16_port")]
    pub port16: Decimal,
    #[serde(rename = "32_port")]
    pub port32: Decimal,
}

impl DvrPrices {
    pub fn get(&self, tier: DvrTier) -> Decimal {
        match tier {
            DvrTier::Port4 => self.port4,
            DvrTier::Port8 => self.port8,
            DvrTier::Port16 => self.port16,
            DvrTier::Port32 => self.port32,
        }
    }
}

/// Component unit prices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentPrices {
    pub cameras: CameraPrices,
    pub accessories: Decimal,
    pub hdd: StoragePrices,
    pub cable_per_meter: Decimal,
    pub duradus: Decimal,
    pub power_supply_per_4_cameras: Decimal,
    pub installation_fee_per_camera: Decimal,
    pub dvr: DvrPrices,
}

/// Voucher table entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voucher {
    pub valid: bool,
    pub discount_percent: Decimal,
    pub whatsapp_number: String,
}

/// Site-wide promotional discount
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDiscount {
    pub active: bool,
    pub discount_percent: Decimal,
    pub description: String,
}

/// Predefined configuration sold at a fixed base price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub description: String,
    pub cameras: u32,
    #[serde(rename = "type")]
    pub placement: CameraPlacement,
    pub brand: Brand,
    pub hdd: StorageTier,
    pub cable: u32,
    pub base_price: Decimal,
}

/// Brand entry for the configuration form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandInfo {
    pub name: String,
    pub description: String,
}

/// The full catalog. Loaded once at startup and shared read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentCatalog {
    pub component_prices: ComponentPrices,
    #[serde(default)]
    pub voucher_codes: BTreeMap<String, Voucher>,
    pub event_discount: EventDiscount,
    pub default_whatsapp_number: String,
    #[serde(default)]
    pub packages: Vec<Package>,
    #[serde(default)]
    pub cctv_brands: Vec<BrandInfo>,
}

impl ComponentCatalog {
    /// Look up a voucher that may be applied.
    ///
    /// Returns `None` for an empty, unknown or disabled code.
    pub fn resolve_voucher(&self, code: Option<&str>) -> Option<&Voucher> {
        let code = code.filter(|c| !c.is_empty())?;
        self.voucher_codes.get(code).filter(|v| v.valid)
    }

    /// Contact that receives a booking made with the given voucher
    pub fn contact_for(&self, voucher_code: Option<&str>) -> &str {
        match self.resolve_voucher(voucher_code) {
            Some(voucher) => &voucher.whatsapp_number,
            None => &self.default_whatsapp_number,
        }
    }

    /// Find a package by exact name
    pub fn find_package(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.name == name)
    }
}
