use crate::core::{FriesFactory, FriesItem, FriesProduct, FriesSize};
use rust_decimal::Decimal;

/// A size is its own creator: it knows which base price to stamp on the product.
impl FriesFactory for FriesSize {
    fn create_fries(&self) -> FriesProduct {
        tracing::debug!("Creating {} fries", self);
        FriesProduct::new(*self)
    }
}

pub fn create_product(size: FriesSize) -> FriesProduct {
    size.create_fries()
}

impl FriesItem for FriesProduct {
    fn price(&self) -> Decimal {
        self.base_price()
    }

    fn sauce_names(&self) -> Vec<&'static str> {
        Vec::new()
    }

    fn prepare(&self) -> String {
        let notice = format!("Preparing {} Fries...", self.size);
        tracing::debug!("{}", notice);
        notice
    }

    fn set_packet_count(&mut self, packets: u32) {
        tracing::debug!("Packet count set to {}", packets);
        self.packet_count = packets;
    }

    fn packet_count(&self) -> u32 {
        self.packet_count
    }

    fn size(&self) -> FriesSize {
        self.size
    }
}
