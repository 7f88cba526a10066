use crate::utils::error::Result;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency tag printed in front of every amount.
pub const CURRENCY: &str = "RM";

/// Formats an amount as `RM` followed by exactly two decimal places,
/// rounding half away from zero.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{:.2}", CURRENCY, rounded)
}

/// Sauce names joined with ", ", empty when no sauce was added.
pub fn sauce_line(sauces: &[String]) -> String {
    sauces.join(", ")
}

pub fn total_line(total: Decimal) -> String {
    format!("Total Price: {}", format_amount(total))
}

/// Unknown menu numbers fall back to `Small`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FriesSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl FriesSize {
    pub const ALL: [FriesSize; 3] = [FriesSize::Small, FriesSize::Medium, FriesSize::Large];

    /// Menu numbers: 1 Small, 2 Medium, 3 Large.
    pub fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            1 => Some(FriesSize::Small),
            2 => Some(FriesSize::Medium),
            3 => Some(FriesSize::Large),
            _ => None,
        }
    }

    pub fn base_price(self) -> Decimal {
        match self {
            FriesSize::Small => Decimal::new(300, 2),
            FriesSize::Medium => Decimal::new(400, 2),
            FriesSize::Large => Decimal::new(500, 2),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FriesSize::Small => "Small",
            FriesSize::Medium => "Medium",
            FriesSize::Large => "Large",
        }
    }
}

impl fmt::Display for FriesSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Plain fries as they leave the fryer. The base price is fixed by the size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriesProduct {
    pub(crate) size: FriesSize,
    base_price: Decimal,
    pub(crate) packet_count: u32,
}

impl FriesProduct {
    pub fn new(size: FriesSize) -> Self {
        Self {
            size,
            base_price: size.base_price(),
            packet_count: 0,
        }
    }

    pub fn base_price(&self) -> Decimal {
        self.base_price
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sauce {
    Ketchup,
    Chili,
}

impl Sauce {
    pub fn surcharge(self) -> Decimal {
        match self {
            Sauce::Ketchup => Decimal::new(50, 2),
            Sauce::Chili => Decimal::new(70, 2),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Sauce::Ketchup => "Ketchup",
            Sauce::Chili => "Chili",
        }
    }
}

/// What the customer picked from the sauce menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SauceChoice {
    #[default]
    None,
    Ketchup,
    Chili,
    /// Ketchup first, Chili wrapped around it.
    Both,
}

impl SauceChoice {
    /// Menu numbers: 1 none, 2 Ketchup, 3 Chili, 4 both.
    pub fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            1 => Some(SauceChoice::None),
            2 => Some(SauceChoice::Ketchup),
            3 => Some(SauceChoice::Chili),
            4 => Some(SauceChoice::Both),
            _ => None,
        }
    }

    /// Sauces in the order they are wrapped, innermost first.
    pub fn sauces(self) -> &'static [Sauce] {
        match self {
            SauceChoice::None => &[],
            SauceChoice::Ketchup => &[Sauce::Ketchup],
            SauceChoice::Chili => &[Sauce::Chili],
            SauceChoice::Both => &[Sauce::Ketchup, Sauce::Chili],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    CreditCard,
    OnlineBanking,
}

impl PaymentMethod {
    /// Menu numbers: 1 credit card, 2 online banking.
    pub fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            1 => Some(PaymentMethod::CreditCard),
            2 => Some(PaymentMethod::OnlineBanking),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::OnlineBanking => "Online Banking",
        }
    }

    /// Prompt shown before reading the credential for this method.
    pub fn credential_prompt(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Enter Credit Card Number:",
            PaymentMethod::OnlineBanking => "Enter Bank Account Number:",
        }
    }
}

/// Outcome of a single simulated payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub method: PaymentMethod,
    pub credential: String,
    pub amount: Decimal,
    pub confirmation: String,
}

/// Everything the kiosk reports back for one completed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub size: FriesSize,
    pub packet_count: u32,
    pub preparation: String,
    pub sauces: Vec<String>,
    pub total: Decimal,
    pub payment: PaymentRecord,
}

impl OrderReceipt {
    pub fn sauce_line(&self) -> String {
        sauce_line(&self.sauces)
    }

    pub fn total_line(&self) -> String {
        total_line(self.total)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
