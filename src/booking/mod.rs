//! Booking handoff.
//!
//! A completed booking is summarized as a plain-text message and handed to the
//! sales team through a WhatsApp link. The destination number comes from the
//! voucher when one is applied, otherwise from the catalog default.

pub mod message;
pub mod routes;

use rust_decimal::Decimal;

use crate::pricing::{PricingConfiguration, PricingResult};

pub use message::{compose_message, handoff, whatsapp_link, BookingHandoff};
pub use routes::router;

/// Contact details entered in the booking form
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDetails {
    pub full_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// What is being booked
#[derive(Debug, Clone, PartialEq)]
pub enum BookingItem {
    /// A predefined package; `final_price` is `None` when no quote is available
    Package {
        name: String,
        final_price: Option<Decimal>,
    },
    /// A custom configuration and its computed price
    Simulation {
        configuration: PricingConfiguration,
        result: PricingResult,
    },
}

/// Everything the sales team receives for one booking
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    pub customer: CustomerDetails,
    pub item: BookingItem,
    pub voucher_code: Option<String>,
}
