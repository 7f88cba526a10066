use crate::core::factory::create_product;
use crate::core::payment::PaymentContext;
use crate::core::{FriesItem, FriesSize, OrderReceipt, SauceChoice};
use crate::domain::model::{sauce_line, total_line};
use rust_decimal::Decimal;

/// Packets handed out per order; the counter never asks for more.
pub const DEFAULT_PACKET_COUNT: u32 = 1;

/// Selections for one order, already resolved to their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub size: FriesSize,
    pub sauces: SauceChoice,
    pub payment: PaymentContext,
    pub packet_count: u32,
}

impl OrderRequest {
    pub fn new(size: FriesSize, sauces: SauceChoice, payment: PaymentContext) -> Self {
        Self {
            size,
            sauces,
            payment,
            packet_count: DEFAULT_PACKET_COUNT,
        }
    }
}

/// Fries are in the fryer; sauces have not been chosen yet.
pub struct PreparedOrder {
    fries: Box<dyn FriesItem>,
    preparation: String,
}

impl PreparedOrder {
    pub fn start(size: FriesSize, packet_count: u32) -> Self {
        tracing::info!("Starting order for {} fries", size);

        let mut product = create_product(size);
        let preparation = product.prepare();
        product.set_packet_count(packet_count);

        Self {
            fries: Box::new(product),
            preparation,
        }
    }

    pub fn preparation(&self) -> &str {
        &self.preparation
    }

    pub fn packet_count(&self) -> u32 {
        self.fries.packet_count()
    }

    pub fn add_sauces(self, sauces: SauceChoice) -> PricedOrder {
        let fries = sauces.apply(self.fries);
        let total = fries.price();
        let sauce_names: Vec<String> = fries.sauce_names().into_iter().map(String::from).collect();
        tracing::debug!("Priced at {} with [{}]", total, sauce_names.join(", "));

        PricedOrder {
            fries,
            preparation: self.preparation,
            sauces: sauce_names,
            total,
        }
    }
}

/// Sauces are on and the total is fixed; waiting for payment.
pub struct PricedOrder {
    fries: Box<dyn FriesItem>,
    preparation: String,
    sauces: Vec<String>,
    total: Decimal,
}

impl PricedOrder {
    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn sauces(&self) -> &[String] {
        &self.sauces
    }

    pub fn sauce_line(&self) -> String {
        sauce_line(&self.sauces)
    }

    pub fn total_line(&self) -> String {
        total_line(self.total)
    }

    /// Charges the order total through `payment`.
    pub fn settle(self, payment: &PaymentContext) -> OrderReceipt {
        let payment = payment.process_payment(self.total);
        tracing::info!("Order settled via {}", payment.method.label());

        OrderReceipt {
            size: self.fries.size(),
            packet_count: self.fries.packet_count(),
            preparation: self.preparation,
            sauces: self.sauces,
            total: self.total,
            payment,
        }
    }
}

/// Runs a fully specified order in one go.
pub struct OrderEngine {
    request: OrderRequest,
}

impl OrderEngine {
    pub fn new(request: OrderRequest) -> Self {
        Self { request }
    }

    pub fn run(self) -> OrderReceipt {
        let request = self.request;
        PreparedOrder::start(request.size, request.packet_count)
            .add_sauces(request.sauces)
            .settle(&request.payment)
    }
}
