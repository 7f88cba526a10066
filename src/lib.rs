pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::kiosk::Kiosk;
pub use crate::core::order::{OrderEngine, OrderRequest};
pub use crate::core::payment::PaymentContext;
pub use domain::model::{FriesSize, OrderReceipt, PaymentMethod, SauceChoice};
pub use utils::error::{FriesError, Result};
