use crate::core::{FriesItem, FriesSize, Sauce, SauceChoice};
use rust_decimal::Decimal;

/// Fries with one more sauce on top. Owns everything underneath it.
pub struct SaucedFries {
    inner: Box<dyn FriesItem>,
    sauce: Sauce,
}

impl SaucedFries {
    pub fn new(inner: Box<dyn FriesItem>, sauce: Sauce) -> Self {
        tracing::debug!("Adding {} (+{})", sauce.name(), sauce.surcharge());
        Self { inner, sauce }
    }

    pub fn sauce(&self) -> Sauce {
        self.sauce
    }
}

impl FriesItem for SaucedFries {
    fn price(&self) -> Decimal {
        self.inner.price() + self.sauce.surcharge()
    }

    fn sauce_names(&self) -> Vec<&'static str> {
        let mut names = self.inner.sauce_names();
        names.push(self.sauce.name());
        names
    }

    fn prepare(&self) -> String {
        self.inner.prepare()
    }

    fn set_packet_count(&mut self, packets: u32) {
        self.inner.set_packet_count(packets);
    }

    fn packet_count(&self) -> u32 {
        self.inner.packet_count()
    }

    fn size(&self) -> FriesSize {
        self.inner.size()
    }
}

impl SauceChoice {
    /// Wraps `item` with the sauces for this choice. `Both` puts Chili around Ketchup.
    pub fn apply(self, item: Box<dyn FriesItem>) -> Box<dyn FriesItem> {
        self.sauces()
            .iter()
            .fold(item, |inner, sauce| -> Box<dyn FriesItem> {
                Box::new(SaucedFries::new(inner, *sauce))
            })
    }
}
