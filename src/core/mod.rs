pub mod factory;
pub mod order;
pub mod payment;
pub mod sauce;

pub use crate::domain::model::{
    FriesProduct, FriesSize, OrderReceipt, PaymentMethod, PaymentRecord, Sauce, SauceChoice,
};
pub use crate::domain::ports::{FriesFactory, FriesItem, PaymentStrategy};
pub use crate::utils::error::Result;
