//! Pricing engine module for CCTV installations.
//!
//! Computes itemized prices for custom camera configurations and discounted
//! prices for fixed packages. The website calls it via HTTP/JSON on every
//! configuration change.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{apply_discounts, calculate_price, price_package, round_money};
pub use models::{DiscountOutcome, PackageQuote, PriceBreakdown, PricingConfiguration, PricingResult};
pub use routes::router;
