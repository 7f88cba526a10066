use crate::domain::model::{FriesProduct, FriesSize};
use rust_decimal::Decimal;

/// A priced, preparable serving of fries, with or without sauces.
pub trait FriesItem {
    fn price(&self) -> Decimal;
    /// Sauce names in the order they were added.
    fn sauce_names(&self) -> Vec<&'static str>;
    fn prepare(&self) -> String;
    fn set_packet_count(&mut self, packets: u32);
    fn packet_count(&self) -> u32;
    fn size(&self) -> FriesSize;
}

pub trait FriesFactory {
    fn create_fries(&self) -> FriesProduct;
}

pub trait PaymentStrategy {
    /// Settles `amount` and returns the confirmation line.
    fn pay(&self, amount: Decimal, credential: &str) -> String;
}
