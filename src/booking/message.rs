//! Booking message composition and WhatsApp link building.

use serde::Serialize;

use crate::catalog::ComponentCatalog;
use crate::currency::format_currency;
use crate::pricing::responses::line_label;

use super::{BookingItem, BookingRecord};

const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Contact, message and link for one booking
#[derive(Debug, Clone, Serialize)]
pub struct BookingHandoff {
    pub contact: String,
    pub message: String,
    pub url: String,
}

/// Human-readable booking summary.
pub fn compose_message(booking: &BookingRecord) -> String {
    let customer = &booking.customer;
    let mut message = String::from("*BOOKING CCTV INSTALLATION*\n\n");

    message.push_str("*Customer Information:*\n");
    message.push_str(&format!("Name: {}\n", customer.full_name));
    message.push_str(&format!("Address: {}\n", customer.address));
    message.push_str(&format!("Phone: {}\n", customer.phone));
    message.push_str(&format!("Email: {}\n\n", customer.email));

    match &booking.item {
        BookingItem::Package { name, final_price } => {
            let price = final_price
                .map(format_currency)
                .unwrap_or_else(|| "Contact for pricing".to_string());
            message.push_str("*Package Selected:*\n");
            message.push_str(&format!("Package: {}\n", name));
            message.push_str(&format!("Price: {}\n\n", price));
        }
        BookingItem::Simulation {
            configuration,
            result,
        } => {
            message.push_str("*Custom Configuration:*\n");
            message.push_str(&format!("Indoor Cameras: {}\n", configuration.indoor_cameras));
            message.push_str(&format!("Outdoor Cameras: {}\n", configuration.outdoor_cameras));
            message.push_str(&format!("Cable Length: {}m\n", configuration.cable_length));
            message.push_str(&format!("Brand: {}\n", configuration.brand));
            message.push_str(&format!("HDD Size: {}\n", configuration.storage.label()));
            message.push_str(&format!("DVR: {}-port\n", result.dvr_tier.ports()));
            message.push_str(&format!("Required DVR Ports: {}\n\n", result.dvr_ports));

            message.push_str("*Price Breakdown:*\n");
            for (key, amount) in result.breakdown.items() {
                message.push_str(&format!(
                    "{}: {}\n",
                    line_label(key, result.dvr_tier),
                    format_currency(amount)
                ));
            }
            message.push_str(&format!("Subtotal: {}\n", format_currency(result.subtotal)));
            message.push_str(&format!(
                "Event Discount: -{}\n",
                format_currency(result.event_discount)
            ));
            message.push_str(&format!(
                "After Event Discount: {}\n",
                format_currency(result.after_event_discount)
            ));
            message.push_str(&format!(
                "Voucher Discount: -{}\n",
                format_currency(result.voucher_discount)
            ));
            message.push_str(&format!(
                "Voucher Valid: {}\n",
                if result.voucher_valid { "Yes" } else { "No" }
            ));
            message.push_str(&format!("Total Price: {}\n\n", format_currency(result.total)));
        }
    }

    if let Some(code) = booking.voucher_code.as_deref().filter(|c| !c.is_empty()) {
        message.push_str(&format!("*Voucher Code:* {}\n\n", code));
    }

    message.push_str("Please confirm this booking and provide installation schedule.");
    message
}

/// `wa.me` link that opens a chat with `contact` prefilled with `message`.
pub fn whatsapp_link(contact: &str, message: &str) -> String {
    let number: String = contact.chars().filter(char::is_ascii_digit).collect();
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE_URL,
        number,
        urlencoding::encode(message)
    )
}

/// Resolve the destination contact and build the message and link.
pub fn handoff(catalog: &ComponentCatalog, booking: &BookingRecord) -> BookingHandoff {
    let contact = catalog.contact_for(booking.voucher_code.as_deref()).to_string();
    let message = compose_message(booking);
    let url = whatsapp_link(&contact, &message);

    BookingHandoff {
        contact,
        message,
        url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::CustomerDetails;
    use crate::catalog::{test_catalog, Brand, StorageTier};
    use crate::pricing::{calculate_price, PricingConfiguration};
    use rust_decimal_macros::dec;

    fn customer() -> CustomerDetails {
        CustomerDetails {
            full_name: "Budi Santoso".to_string(),
            address: "Jl. Merdeka 10, Bandung".to_string(),
            phone: "+62 812 3456 7890".to_string(),
            email: "budi@example.com".to_string(),
        }
    }

    fn package_booking(voucher: Option<&str>) -> BookingRecord {
        BookingRecord {
            customer: customer(),
            item: BookingItem::Package {
                name: "Basic Home".to_string(),
                final_price: Some(dec!(4500000)),
            },
            voucher_code: voucher.map(str::to_string),
        }
    }

    #[test]
    fn test_package_message_contains_every_field() {
        let message = compose_message(&package_booking(Some("HEMAT10")));

        assert!(message.starts_with("*BOOKING CCTV INSTALLATION*"));
        assert!(message.contains("Name: Budi Santoso\n"));
        assert!(message.contains("Address: Jl. Merdeka 10, Bandung\n"));
        assert!(message.contains("Phone: +62 812 3456 7890\n"));
        assert!(message.contains("Email: budi@example.com\n"));
        assert!(message.contains("Package: Basic Home\n"));
        assert!(message.contains("Price: Rp\u{a0}4.500.000\n"));
        assert!(message.contains("*Voucher Code:* HEMAT10"));
        assert!(message.ends_with("provide installation schedule."));
    }

    #[test]
    fn test_package_without_price() {
        let mut booking = package_booking(None);
        booking.item = BookingItem::Package {
            name: "Basic Home".to_string(),
            final_price: None,
        };
        let message = compose_message(&booking);
        assert!(message.contains("Price: Contact for pricing"));
        assert!(!message.contains("Voucher Code"));
    }

    #[test]
    fn test_simulation_message() {
        let catalog = test_catalog();
        let configuration = PricingConfiguration {
            indoor_cameras: 3,
            outdoor_cameras: 2,
            cable_length: 35,
            brand: Brand::Dahua,
            storage: StorageTier::Tb2,
            voucher_code: Some("HEMAT10".to_string()),
        };
        let result = calculate_price(&catalog, &configuration);
        let booking = BookingRecord {
            customer: customer(),
            item: BookingItem::Simulation {
                configuration,
                result,
            },
            voucher_code: Some("HEMAT10".to_string()),
        };

        let message = compose_message(&booking);
        let expected = [
            "*Custom Configuration:*\n",
            "Indoor Cameras: 3\n",
            "Outdoor Cameras: 2\n",
            "Cable Length: 35m\n",
            "Brand: dahua\n",
            "HDD Size: 2TB\n",
            "DVR: 8-port\n",
            "Required DVR Ports: 8\n",
            "*Price Breakdown:*\n",
            "Cameras: Rp\u{a0}3.450.000\n",
            "Accessories (3 per camera): Rp\u{a0}300.000\n",
            "HDD Storage: Rp\u{a0}1.200.000\n",
            "Cable Installation: Rp\u{a0}525.000\n",
            "Duradus: Rp\u{a0}250.000\n",
            "Power Supply: Rp\u{a0}600.000\n",
            "Installation Fee: Rp\u{a0}500.000\n",
            "DVR (8-port): Rp\u{a0}1.200.000\n",
            "Subtotal: Rp\u{a0}8.025.000\n",
            "Event Discount: -Rp\u{a0}0\n",
            "After Event Discount: Rp\u{a0}8.025.000\n",
            "Voucher Discount: -Rp\u{a0}802.500\n",
            "Voucher Valid: Yes\n",
            "Total Price: Rp\u{a0}7.222.500\n",
            "*Voucher Code:* HEMAT10",
        ];
        for line in expected {
            assert!(message.contains(line), "missing {:?} in:\n{}", line, message);
        }
    }

    #[test]
    fn test_simulation_message_reports_rejected_voucher() {
        let catalog = test_catalog();
        let configuration = PricingConfiguration {
            indoor_cameras: 1,
            outdoor_cameras: 0,
            cable_length: 10,
            brand: Brand::Hilook,
            storage: StorageTier::Gb500,
            voucher_code: Some("EXPIRED20".to_string()),
        };
        let result = calculate_price(&catalog, &configuration);
        let booking = BookingRecord {
            customer: customer(),
            item: BookingItem::Simulation {
                configuration,
                result,
            },
            voucher_code: Some("EXPIRED20".to_string()),
        };

        let message = compose_message(&booking);
        assert!(message.contains("Voucher Discount: -Rp\u{a0}0\n"));
        assert!(message.contains("Voucher Valid: No\n"));
        assert!(message.contains("*Voucher Code:* EXPIRED20"));
    }

    #[test]
    fn test_whatsapp_link_strips_plus_and_encodes() {
        let url = whatsapp_link("+62 812-3456", "Hi *there*\nNew line");
        assert!(url.starts_with("https://wa.me/628123456?text="));
        assert!(url.contains("Hi%20%2Athere%2A%0ANew%20line"));
    }

    #[test]
    fn test_handoff_uses_voucher_contact_when_valid() {
        let catalog = test_catalog();

        let valid = handoff(&catalog, &package_booking(Some("HEMAT10")));
        assert_eq!(valid.contact, "+6281111111111");
        assert!(valid.url.starts_with("https://wa.me/6281111111111?text="));

        let disabled = handoff(&catalog, &package_booking(Some("EXPIRED20")));
        assert_eq!(disabled.contact, "+6281234567890");

        let none = handoff(&catalog, &package_booking(None));
        assert_eq!(none.contact, "+6281234567890");
        assert_eq!(none.message, compose_message(&package_booking(None)));
    }
}
