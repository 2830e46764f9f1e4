//! Component catalog: unit prices, vouchers, event discount and packages.
//!
//! The catalog is read from a JSON document once at startup and shared
//! read-only (`Arc<ComponentCatalog>`) by every request.

pub mod loader;
pub mod models;

pub use loader::{load_catalog, parse_catalog, CatalogError};
pub use models::{
    Brand, BrandInfo, CameraPlacement, ComponentCatalog, DvrTier, EventDiscount, Package,
    StorageTier, Voucher,
};

/// Catalog used by unit tests across the crate.
#[cfg(test)]
pub(crate) fn test_catalog() -> ComponentCatalog {
    use crate::catalog::models::*;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    let mut voucher_codes = BTreeMap::new();
    voucher_codes.insert(
        "HEMAT10".to_string(),
        Voucher {
            valid: true,
            discount_percent: dec!(10),
            whatsapp_number: "+6281111111111".to_string(),
        },
    );
    voucher_codes.insert(
        "EXPIRED20".to_string(),
        Voucher {
            valid: false,
            discount_percent: dec!(20),
            whatsapp_number: "+6282222222222".to_string(),
        },
    );

    ComponentCatalog {
        component_prices: ComponentPrices {
            cameras: CameraPrices {
                indoor: BrandPrices {
                    hilook: dec!(500000),
                    dahua: dec!(650000),
                },
                outdoor: BrandPrices {
                    hilook: dec!(600000),
                    dahua: dec!(750000),
                },
            },
            accessories: dec!(20000),
            hdd: StoragePrices {
                gb500: dec!(500000),
                tb1: dec!(800000),
                tb2: dec!(1200000),
                tb4: dec!(2000000),
            },
            cable_per_meter: dec!(15000),
            duradus: dec!(50000),
            power_supply_per_4_cameras: dec!(300000),
            installation_fee_per_camera: dec!(100000),
            dvr: DvrPrices {
                port4: dec!(900000),
                port8: dec!(1200000),
                port16: dec!(2000000),
                port32: dec!(3500000),
            },
        },
        voucher_codes,
        event_discount: EventDiscount {
            active: false,
            discount_percent: dec!(15),
            description: "Grand Opening Sale".to_string(),
        },
        default_whatsapp_number: "+6281234567890".to_string(),
        packages: vec![
            Package {
                name: "Basic Home".to_string(),
                description: "Two indoor cameras for apartments and small homes".to_string(),
                cameras: 2,
                placement: CameraPlacement::Indoor,
                brand: Brand::Hilook,
                hdd: StorageTier::Gb500,
                cable: 20,
                base_price: dec!(5000000),
            },
            Package {
                name: "Business".to_string(),
                description: "Four mixed cameras for shops and offices".to_string(),
                cameras: 4,
                placement: CameraPlacement::Mixed,
                brand: Brand::Hilook,
                hdd: StorageTier::Tb1,
                cable: 50,
                base_price: dec!(9500000),
            },
        ],
        cctv_brands: vec![BrandInfo {
            name: "Hilook".to_string(),
            description: "Affordable and reliable".to_string(),
        }],
    }
}
