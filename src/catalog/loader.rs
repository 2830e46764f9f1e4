//! Catalog loading and validation.

use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;

use super::models::{ComponentCatalog, DvrTier, StorageTier};

/// Catalog loading error
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Negative price for {item}: {amount}")]
    NegativePrice { item: String, amount: Decimal },

    #[error("Discount for {item} out of range [0, 100]: {percent}")]
    DiscountOutOfRange { item: String, percent: Decimal },
}

/// Read and validate the catalog document at `path`.
pub fn load_catalog(path: &Path) -> Result<ComponentCatalog, CatalogError> {
    let raw = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&raw)?;

    info!(
        path = %path.display(),
        vouchers = catalog.voucher_codes.len(),
        packages = catalog.packages.len(),
        event_discount_active = catalog.event_discount.active,
        "Catalog loaded"
    );

    Ok(catalog)
}

/// Parse and validate a catalog JSON document.
pub fn parse_catalog(raw: &str) -> Result<ComponentCatalog, CatalogError> {
    let catalog: ComponentCatalog = serde_json::from_str(raw)?;
    validate(&catalog)?;
    Ok(catalog)
}

/// Check that every price is non-negative and every percent lies in [0, 100].
pub fn validate(catalog: &ComponentCatalog) -> Result<(), CatalogError> {
    let prices = &catalog.component_prices;

    let mut items: Vec<(String, Decimal)> = vec![
        ("cameras.indoor.hilook".into(), prices.cameras.indoor.hilook),
        ("cameras.indoor.dahua".into(), prices.cameras.indoor.dahua),
        ("cameras.outdoor.hilook".into(), prices.cameras.outdoor.hilook),
        ("cameras.outdoor.dahua".into(), prices.cameras.outdoor.dahua),
        ("accessories".into(), prices.accessories),
        ("cable_per_meter".into(), prices.cable_per_meter),
        ("duradus".into(), prices.duradus),
        ("power_supply_per_4_cameras".into(), prices.power_supply_per_4_cameras),
        ("installation_fee_per_camera".into(), prices.installation_fee_per_camera),
    ];
    items.extend(
        StorageTier::ALL
            .iter()
            .map(|tier| (format!("hdd.{}", tier), prices.hdd.get(*tier))),
    );
    items.extend(
        [DvrTier::Port4, DvrTier::Port8, DvrTier::Port16, DvrTier::Port32]
            .iter()
            .map(|tier| (format!("dvr.{}_port", tier.ports()), prices.dvr.get(*tier))),
    );
    items.extend(
        catalog
            .packages
            .iter()
            .map(|p| (format!("package '{}'", p.name), p.base_price)),
    );

    if let Some((item, amount)) = items.into_iter().find(|(_, amount)| *amount < Decimal::ZERO) {
        return Err(CatalogError::NegativePrice { item, amount });
    }

    check_percent("event_discount", catalog.event_discount.discount_percent)?;
    for (code, voucher) in &catalog.voucher_codes {
        check_percent(&format!("voucher '{}'", code), voucher.discount_percent)?;
    }

    Ok(())
}

fn check_percent(item: &str, percent: Decimal) -> Result<(), CatalogError> {
    if percent < Decimal::ZERO || percent > dec!(100) {
        return Err(CatalogError::DiscountOutOfRange {
            item: item.to_string(),
            percent,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_catalog;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_bundled_catalog() {
        let catalog = parse_catalog(include_str!("../../data/catalog.json")).unwrap();
        assert!(!catalog.packages.is_empty());
        assert!(!catalog.default_whatsapp_number.is_empty());
        assert!(catalog.voucher_codes.values().any(|v| v.valid));
    }

    #[test]
    fn test_validate_accepts_fixture() {
        assert!(validate(&test_catalog()).is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut catalog = test_catalog();
        catalog.component_prices.hdd.tb2 = dec!(-1);

        match validate(&catalog) {
            Err(CatalogError::NegativePrice { item, amount }) => {
                assert_eq!(item, "hdd.2tb");
                assert_eq!(amount, dec!(-1));
            }
            other => panic!("expected NegativePrice, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_package_price() {
        let mut catalog = test_catalog();
        catalog.packages[0].base_price = dec!(-100);
        assert!(matches!(
            validate(&catalog),
            Err(CatalogError::NegativePrice { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_percent() {
        let mut catalog = test_catalog();
        catalog.event_discount.discount_percent = dec!(101);
        assert!(matches!(
            validate(&catalog),
            Err(CatalogError::DiscountOutOfRange { .. })
        ));

        let mut catalog = test_catalog();
        catalog
            .voucher_codes
            .get_mut("HEMAT10")
            .unwrap()
            .discount_percent = dec!(-5);
        let err = validate(&catalog).unwrap_err();
        assert!(err.to_string().contains("HEMAT10"));
    }

    #[test]
    fn test_percent_bounds_are_inclusive() {
        assert!(check_percent("x", dec!(0)).is_ok());
        assert!(check_percent("x", dec!(100)).is_ok());
    }

    #[test]
    fn test_parse_rejects_unknown_tier_key() {
        let raw = include_str!("../../data/catalog.json").replace("\"4_port\"", "\"6_port\"");
        assert!(matches!(parse_catalog(&raw), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_catalog(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
