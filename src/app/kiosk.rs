use crate::core::order::{PreparedOrder, DEFAULT_PACKET_COUNT};
use crate::core::payment::PaymentContext;
use crate::core::{FriesSize, OrderReceipt, PaymentMethod, SauceChoice};
use crate::utils::error::{FriesError, Result};
use std::io::{BufRead, Write};

pub const WELCOME: &str = "Welcome to French King Fries!";

const SIZE_MENU: &[&str] = &["Select Fries Size:", "1. Small", "2. Medium", "3. Large"];

const SAUCE_MENU: &[&str] = &[
    "Select Sauce Options:",
    "1. No Sauce",
    "2. Ketchup",
    "3. Chili",
    "4. Both Sauces",
];

const PAYMENT_MENU: &[&str] = &[
    "Select Payment Method:",
    "1. Credit Card",
    "2. Online Banking",
];

/// Counter-side driver: shows the menus, reads the customer's answers from
/// `input` and writes the transcript to `output`.
pub struct Kiosk<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Kiosk<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Takes one order from greeting to payment confirmation.
    pub fn run(&mut self) -> Result<OrderReceipt> {
        writeln!(self.output, "{}", WELCOME)?;

        let size = self.select_size()?;
        let prepared = PreparedOrder::start(size, DEFAULT_PACKET_COUNT);
        writeln!(self.output, "{}", prepared.preparation())?;
        writeln!(self.output, "Size set to: {}", prepared.packet_count())?;

        let sauces = self.select_sauces()?;
        let priced = prepared.add_sauces(sauces);
        writeln!(self.output)?;
        writeln!(self.output, "Sauce(s): {}", priced.sauce_line())?;
        writeln!(self.output, "{}", priced.total_line())?;

        let payment = self.select_payment()?;
        let receipt = priced.settle(&payment);
        writeln!(self.output, "{}", receipt.payment.confirmation)?;
        self.output.flush()?;

        Ok(receipt)
    }

    fn select_size(&mut self) -> Result<FriesSize> {
        self.show_menu(SIZE_MENU)?;
        let selection = self.read_selection("fries size")?;

        match selection.and_then(FriesSize::from_selection) {
            Some(size) => Ok(size),
            None => {
                tracing::warn!("Unknown size selection {:?}, using Small", selection);
                writeln!(self.output, "Invalid size. Defaulting to Small.")?;
                Ok(FriesSize::default())
            }
        }
    }

    fn select_sauces(&mut self) -> Result<SauceChoice> {
        writeln!(self.output)?;
        self.show_menu(SAUCE_MENU)?;
        let selection = self.read_selection("sauce option")?;

        // Anything off the menu means no sauce, without a warning.
        Ok(selection
            .and_then(SauceChoice::from_selection)
            .unwrap_or_default())
    }

    fn select_payment(&mut self) -> Result<PaymentContext> {
        writeln!(self.output)?;
        self.show_menu(PAYMENT_MENU)?;
        let selection = self.read_selection("payment method")?;

        match selection.and_then(PaymentMethod::from_selection) {
            Some(method) => {
                writeln!(self.output, "{}", method.credential_prompt())?;
                let credential = self.read_line(method.credential_prompt())?;
                Ok(PaymentContext::new(method, credential))
            }
            None => {
                tracing::warn!("Unknown payment selection {:?}, using default card", selection);
                writeln!(
                    self.output,
                    "Invalid payment method. Using Credit Card as default."
                )?;
                Ok(PaymentContext::default())
            }
        }
    }

    fn show_menu(&mut self, lines: &[&str]) -> Result<()> {
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// `None` when the answer is not a whole number.
    fn read_selection(&mut self, prompt: &str) -> Result<Option<i64>> {
        let line = self.read_line(prompt)?;
        let selection = line.parse::<i64>().ok();
        tracing::debug!("Read {} selection {:?}", prompt, selection);
        Ok(selection)
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(FriesError::InputClosed {
                prompt: prompt.to_string(),
            });
        }
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn kiosk(input: &str) -> Kiosk<Cursor<Vec<u8>>, Vec<u8>> {
        Kiosk::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_non_numeric_selection_is_unrecognized() {
        let mut kiosk = kiosk("large\n");
        assert_eq!(kiosk.read_selection("fries size").unwrap(), None);
    }

    #[test]
    fn test_selection_tolerates_whitespace() {
        let mut kiosk = kiosk("  3 \r\n");
        assert_eq!(kiosk.read_selection("fries size").unwrap(), Some(3));
    }

    #[test]
    fn test_read_line_at_end_of_input_fails() {
        let mut kiosk = kiosk("");
        let err = kiosk.read_line("fries size").unwrap_err();
        assert!(matches!(err, FriesError::InputClosed { ref prompt } if prompt == "fries size"));
    }

    #[test]
    fn test_unknown_size_warns_and_defaults() {
        let mut kiosk = kiosk("7\n");
        assert_eq!(kiosk.select_size().unwrap(), FriesSize::Small);

        let output = String::from_utf8(kiosk.into_output()).unwrap();
        assert!(output.contains("Invalid size. Defaulting to Small."));
    }

    #[test]
    fn test_unknown_sauce_is_silently_none() {
        let mut kiosk = kiosk("9\n");
        assert_eq!(kiosk.select_sauces().unwrap(), SauceChoice::None);

        let output = String::from_utf8(kiosk.into_output()).unwrap();
        assert!(!output.contains("Invalid"));
    }

    #[test]
    fn test_unknown_payment_skips_credential_prompt() {
        let mut kiosk = kiosk("0\n");
        assert_eq!(kiosk.select_payment().unwrap(), PaymentContext::default());

        let output = String::from_utf8(kiosk.into_output()).unwrap();
        assert!(output.contains("Invalid payment method. Using Credit Card as default."));
        assert!(!output.contains("Enter Credit Card Number:"));
    }

    #[test]
    fn test_online_banking_reads_account() {
        let mut kiosk = kiosk("2\n  5512-7788 \n");
        let payment = kiosk.select_payment().unwrap();

        assert_eq!(payment.method(), PaymentMethod::OnlineBanking);
        assert_eq!(payment.credential(), "5512-7788");

        let output = String::from_utf8(kiosk.into_output()).unwrap();
        assert!(output.contains("Enter Bank Account Number:"));
    }
}
