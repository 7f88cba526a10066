use crate::core::{PaymentMethod, PaymentRecord, PaymentStrategy};
use crate::domain::model::format_amount;
use rust_decimal::Decimal;

/// Credential used when the customer picks an unknown payment method.
pub const DEFAULT_CARD_NUMBER: &str = "0000-0000-0000-0000";

impl PaymentStrategy for PaymentMethod {
    fn pay(&self, amount: Decimal, credential: &str) -> String {
        let confirmation = format!(
            "Paying {} using {}: {}",
            format_amount(amount),
            self.label(),
            credential
        );
        tracing::info!(method = ?self, amount = %amount, "Payment processed");
        confirmation
    }
}

/// The payment method picked at the counter, together with the credential
/// the customer typed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentContext {
    method: PaymentMethod,
    credential: String,
}

impl PaymentContext {
    pub fn new(method: PaymentMethod, credential: impl Into<String>) -> Self {
        Self {
            method,
            credential: credential.into(),
        }
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }

    /// Settles `amount` with the held strategy. The caller passes the order total.
    pub fn process_payment(&self, amount: Decimal) -> PaymentRecord {
        let confirmation = self.method.pay(amount, &self.credential);
        PaymentRecord {
            method: self.method,
            credential: self.credential.clone(),
            amount,
            confirmation,
        }
    }
}

impl Default for PaymentContext {
    fn default() -> Self {
        Self::new(PaymentMethod::CreditCard, DEFAULT_CARD_NUMBER)
    }
}
