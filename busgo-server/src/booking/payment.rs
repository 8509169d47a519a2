//! Payment form checks and simulated processing.
//!
//! No money moves. A complete form is accepted after a fixed delay; an
//! incomplete one is sent back with the typed values kept.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use tracing::info;

use crate::domain::{BusId, Rupees};

use super::TripQuery;

/// Flat fee shown as part of the amount on the payment summary.
pub const SERVICE_FEE: Rupees = Rupees(50);

/// The payment tab the visitor is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaymentMethod {
    #[default]
    Upi,
    Card,
    Wallet,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "upi",
            PaymentMethod::Card => "card",
            PaymentMethod::Wallet => "wallet",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upi" => Ok(PaymentMethod::Upi),
            "card" => Ok(PaymentMethod::Card),
            "wallet" => Ok(PaymentMethod::Wallet),
            other => Err(format!("unknown payment method: {other}")),
        }
    }
}

/// UPI flow: pay from the app, or receive a collect request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpiMode {
    #[default]
    Pay,
    Collect,
}

impl FromStr for UpiMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pay" => Ok(UpiMode::Pay),
            "collect" => Ok(UpiMode::Collect),
            other => Err(format!("unknown UPI mode: {other}")),
        }
    }
}

/// Wallets offered on the wallet tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletProvider {
    Paytm,
    PhonePe,
    GooglePay,
    AmazonPay,
}

impl WalletProvider {
    pub const ALL: [WalletProvider; 4] = [
        WalletProvider::Paytm,
        WalletProvider::PhonePe,
        WalletProvider::GooglePay,
        WalletProvider::AmazonPay,
    ];

    /// Form value for this wallet.
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletProvider::Paytm => "paytm",
            WalletProvider::PhonePe => "phonepe",
            WalletProvider::GooglePay => "googlepay",
            WalletProvider::AmazonPay => "amazonpay",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WalletProvider::Paytm => "Paytm",
            WalletProvider::PhonePe => "PhonePe",
            WalletProvider::GooglePay => "Google Pay",
            WalletProvider::AmazonPay => "Amazon Pay",
        }
    }
}

impl FromStr for WalletProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WalletProvider::ALL
            .into_iter()
            .find(|w| w.as_str() == s.trim())
            .ok_or_else(|| format!("unknown wallet: {s}"))
    }
}

impl fmt::Display for WalletProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw payment form contents as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentForm {
    pub method: PaymentMethod,
    pub upi_id: String,
    pub upi_mode: UpiMode,
    pub card_number: String,
    pub card_name: String,
    pub card_expiry: String,
    pub card_cvv: String,
    pub wallet: Option<WalletProvider>,
}

/// The fields a form is still missing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("payment form incomplete: missing {}", .missing.join(", "))]
pub struct IncompletePayment {
    pub missing: Vec<&'static str>,
}

/// A complete payment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentDetails {
    Upi { upi_id: String, mode: UpiMode },
    Card { last_four: String, name: String },
    Wallet(WalletProvider),
}

impl PaymentDetails {
    /// Short description safe to log, e.g. "card ending 3456".
    pub fn summary(&self) -> String {
        match self {
            PaymentDetails::Upi { mode, .. } => match mode {
                UpiMode::Pay => "UPI pay".to_string(),
                UpiMode::Collect => "UPI collect".to_string(),
            },
            PaymentDetails::Card { last_four, .. } => format!("card ending {last_four}"),
            PaymentDetails::Wallet(w) => format!("{w} wallet"),
        }
    }
}

impl PaymentForm {
    /// Longest CVV the card form accepts.
    pub const MAX_CVV_LEN: usize = 3;

    /// Check the fields of the selected method for presence.
    pub fn validate(&self) -> Result<PaymentDetails, IncompletePayment> {
        let mut missing = Vec::new();
        let present = |s: &str| !s.trim().is_empty();

        match self.method {
            PaymentMethod::Upi => {
                if !present(&self.upi_id) {
                    missing.push("UPI ID");
                }
                if missing.is_empty() {
                    return Ok(PaymentDetails::Upi {
                        upi_id: self.upi_id.trim().to_string(),
                        mode: self.upi_mode,
                    });
                }
            }
            PaymentMethod::Card => {
                if !present(&self.card_number) {
                    missing.push("card number");
                }
                if !present(&self.card_name) {
                    missing.push("name on card");
                }
                if !present(&self.card_expiry) {
                    missing.push("expiry date");
                }
                let cvv = self.card_cvv.trim();
                if cvv.is_empty() || cvv.chars().count() > Self::MAX_CVV_LEN {
                    missing.push("CVV");
                }
                if missing.is_empty() {
                    let digits: Vec<char> = self
                        .card_number
                        .chars()
                        .filter(|c| !c.is_whitespace())
                        .collect();
                    let last_four = digits[digits.len().saturating_sub(4)..]
                        .iter()
                        .collect();
                    return Ok(PaymentDetails::Card {
                        last_four,
                        name: self.card_name.trim().to_string(),
                    });
                }
            }
            PaymentMethod::Wallet => match self.wallet {
                Some(w) => return Ok(PaymentDetails::Wallet(w)),
                None => missing.push("wallet"),
            },
        }

        Err(IncompletePayment { missing })
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Base fare, service fee and total as shown on the payment summary.
///
/// The total is the trip amount; the fee is carved out of it, so the base
/// fare is `amount - fee`, floored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FareBreakdown {
    pub base_fare: Rupees,
    pub service_fee: Rupees,
    pub total: Rupees,
}

impl FareBreakdown {
    pub fn for_amount(amount: Rupees) -> Self {
        Self {
            base_fare: amount.saturating_sub(SERVICE_FEE),
            service_fee: SERVICE_FEE,
            total: amount,
        }
    }
}

/// Simulated payment processor.
#[derive(Debug, Clone)]
pub struct PaymentProcessor {
    delay: Duration,
}

impl PaymentProcessor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// "Process" a payment: wait for the configured delay, then succeed.
    pub async fn process(&self, bus: &BusId, trip: &TripQuery, details: &PaymentDetails) {
        info!(
            bus = %bus,
            amount = trip.amount.value(),
            seats = trip.seats.len(),
            method = %details.summary(),
            "processing payment"
        );
        tokio::time::sleep(self.delay).await;
        info!(bus = %bus, "payment accepted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upi_form(id: &str) -> PaymentForm {
        PaymentForm {
            method: PaymentMethod::Upi,
            upi_id: id.into(),
            ..PaymentForm::default()
        }
    }

    fn card_form(number: &str, name: &str, expiry: &str, cvv: &str) -> PaymentForm {
        PaymentForm {
            method: PaymentMethod::Card,
            card_number: number.into(),
            card_name: name.into(),
            card_expiry: expiry.into(),
            card_cvv: cvv.into(),
            ..PaymentForm::default()
        }
    }

    #[test]
    fn upi_requires_id() {
        assert!(!upi_form("").is_complete());
        assert!(!upi_form("   ").is_complete());

        let details = upi_form("asha@okbank").validate().unwrap();
        assert_eq!(
            details,
            PaymentDetails::Upi {
                upi_id: "asha@okbank".into(),
                mode: UpiMode::Pay,
            }
        );
    }

    #[test]
    fn card_requires_every_field() {
        let err = card_form("", "Asha", "", "123").validate().unwrap_err();
        assert_eq!(err.missing, ["card number", "expiry date"]);
        assert_eq!(
            err.to_string(),
            "payment form incomplete: missing card number, expiry date"
        );
    }

    #[test]
    fn card_cvv_at_most_three_chars() {
        assert!(card_form("4111 1111 1111 1111", "Asha", "12/27", "123").is_complete());
        assert!(!card_form("4111 1111 1111 1111", "Asha", "12/27", "1234").is_complete());
        assert!(!card_form("4111 1111 1111 1111", "Asha", "12/27", "").is_complete());
    }

    #[test]
    fn card_details_keep_last_four() {
        let details = card_form("1234 5678 9012 3456", " Asha Rao ", "01/30", "999")
            .validate()
            .unwrap();
        assert_eq!(
            details,
            PaymentDetails::Card {
                last_four: "3456".into(),
                name: "Asha Rao".into(),
            }
        );
        assert_eq!(details.summary(), "card ending 3456");
    }

    #[test]
    fn short_card_number_keeps_what_there_is() {
        let details = card_form("12", "A", "01/30", "1").validate().unwrap();
        assert!(matches!(details, PaymentDetails::Card { last_four, .. } if last_four == "12"));
    }

    #[test]
    fn wallet_requires_choice() {
        let form = PaymentForm {
            method: PaymentMethod::Wallet,
            ..PaymentForm::default()
        };
        assert_eq!(form.validate().unwrap_err().missing, ["wallet"]);

        let form = PaymentForm {
            wallet: Some(WalletProvider::PhonePe),
            ..form
        };
        assert_eq!(
            form.validate().unwrap(),
            PaymentDetails::Wallet(WalletProvider::PhonePe)
        );
    }

    #[test]
    fn only_selected_method_is_checked() {
        let form = PaymentForm {
            method: PaymentMethod::Upi,
            upi_id: "asha@upi".into(),
            card_cvv: "too long".into(),
            ..PaymentForm::default()
        };
        assert!(form.is_complete());
    }

    #[test]
    fn parse_method_mode_wallet() {
        assert_eq!("Card".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert!("cash".parse::<PaymentMethod>().is_err());
        assert_eq!("collect".parse::<UpiMode>().unwrap(), UpiMode::Collect);
        assert_eq!(
            "googlepay".parse::<WalletProvider>().unwrap(),
            WalletProvider::GooglePay
        );
        assert!("venmo".parse::<WalletProvider>().is_err());
    }

    #[test]
    fn fare_breakdown() {
        let fare = FareBreakdown::for_amount(Rupees(1200));
        assert_eq!(fare.base_fare, Rupees(1150));
        assert_eq!(fare.service_fee, Rupees(50));
        assert_eq!(fare.total, Rupees(1200));

        let fare = FareBreakdown::for_amount(Rupees(20));
        assert_eq!(fare.base_fare, Rupees::ZERO);
    }

    #[tokio::test]
    async fn processor_completes_after_delay() {
        let processor = PaymentProcessor::new(Duration::from_millis(5));
        let trip = TripQuery::parse("Mumbai", "Pune", "2024-06-01", "L1", "650").unwrap();
        let bus = BusId::parse("bus1").unwrap();

        let started = std::time::Instant::now();
        processor
            .process(&bus, &trip, &upi_form("a@upi").validate().unwrap())
            .await;
        assert!(started.elapsed() >= Duration::from_millis(5));
    }
}
