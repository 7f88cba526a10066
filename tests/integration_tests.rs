use fries_stand::core::payment::DEFAULT_CARD_NUMBER;
use fries_stand::{FriesError, FriesSize, Kiosk, OrderReceipt, PaymentMethod};
use rust_decimal::Decimal;
use std::io::Cursor;
use std::str::FromStr;

fn take_order(input: &str) -> (OrderReceipt, String) {
    let mut kiosk = Kiosk::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let receipt = kiosk.run().unwrap();
    let transcript = String::from_utf8(kiosk.into_output()).unwrap();
    (receipt, transcript)
}

fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

#[test]
fn test_large_no_sauce_credit_card() {
    let (receipt, transcript) = take_order("3\n1\n1\n1234\n");

    assert_eq!(receipt.size, FriesSize::Large);
    assert_eq!(receipt.total, dec("5.00"));
    assert_eq!(receipt.sauce_line(), "");
    assert_eq!(receipt.payment.method, PaymentMethod::CreditCard);
    assert!(receipt.payment.confirmation.contains("1234"));
    assert!(receipt.payment.confirmation.contains("5.00"));

    assert!(transcript.contains("Preparing Large Fries..."));
    assert!(transcript.contains("Sauce(s): \n"));
    assert!(transcript.contains("Total Price: RM5.00"));
    assert!(transcript.contains("Paying RM5.00 using Credit Card: 1234"));
}

#[test]
fn test_small_with_both_sauces() {
    let (receipt, transcript) = take_order("1\n4\n2\nACC-42\n");

    assert_eq!(receipt.total, dec("4.20"));
    assert_eq!(receipt.sauces, vec!["Ketchup", "Chili"]);
    assert!(transcript.contains("Sauce(s): Ketchup, Chili"));
    assert!(transcript.contains("Total Price: RM4.20"));
    assert!(transcript.contains("Paying RM4.20 using Online Banking: ACC-42"));
}

#[test]
fn test_medium_with_chili_only() {
    let (receipt, transcript) = take_order("2\n3\n1\n4111\n");

    assert_eq!(receipt.total, dec("4.70"));
    assert_eq!(receipt.sauce_line(), "Chili");
    assert!(transcript.contains("Sauce(s): Chili\n"));
}

#[test]
fn test_invalid_size_behaves_like_small() {
    let (invalid, transcript) = take_order("99\n1\n1\n1234\n");
    let (small, _) = take_order("1\n1\n1\n1234\n");

    assert_eq!(invalid, small);
    assert_eq!(invalid.total, dec("3.00"));
    assert!(transcript.contains("Invalid size. Defaulting to Small."));
    assert!(transcript.contains("Preparing Small Fries..."));
}

#[test]
fn test_invalid_payment_uses_placeholder_card() {
    let (receipt, transcript) = take_order("2\n2\n0\n");

    assert_eq!(receipt.payment.method, PaymentMethod::CreditCard);
    assert_eq!(receipt.payment.credential, DEFAULT_CARD_NUMBER);
    assert_eq!(receipt.payment.amount, dec("4.50"));
    assert!(transcript.contains("Invalid payment method. Using Credit Card as default."));
    assert!(transcript.contains("Paying RM4.50 using Credit Card: 0000-0000-0000-0000"));
}

#[test]
fn test_transcript_follows_counter_order() {
    let (_, transcript) = take_order("1\n2\n1\n1234\n");

    let positions: Vec<usize> = [
        "Welcome to French King Fries!",
        "Select Fries Size:",
        "Preparing Small Fries...",
        "Size set to: 1",
        "Select Sauce Options:",
        "Sauce(s): Ketchup",
        "Total Price: RM3.50",
        "Select Payment Method:",
        "Enter Credit Card Number:",
        "Paying RM3.50 using Credit Card: 1234",
    ]
    .iter()
    .map(|line| transcript.find(line).unwrap())
    .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_input_ending_early_aborts_order() {
    let mut kiosk = Kiosk::new(Cursor::new(b"2\n".to_vec()), Vec::new());
    let err = kiosk.run().unwrap_err();

    assert!(matches!(err, FriesError::InputClosed { .. }));
}

#[test]
fn test_receipt_serializes_amounts_as_strings() {
    let (receipt, _) = take_order("1\n4\n1\n1234\n");
    let json: serde_json::Value = serde_json::from_str(&receipt.to_json().unwrap()).unwrap();

    assert_eq!(json["total"], "4.20");
    assert_eq!(json["size"], "Small");
    assert_eq!(json["sauces"], serde_json::json!(["Ketchup", "Chili"]));
    assert_eq!(json["payment"]["method"], "CreditCard");
}

#[test]
fn test_every_size_prices_from_base() {
    for (selection, size) in (1..).zip(FriesSize::ALL) {
        let (receipt, _) = take_order(&format!("{}\n1\n1\n1\n", selection));
        assert_eq!(receipt.size, size);
        assert_eq!(receipt.total, size.base_price());
    }
}

#[test]
fn test_transcript_lines_match_receipt() {
    for input in ["1\n1\n1\n1\n", "2\n3\n2\nX\n", "3\n4\n0\n"] {
        let (receipt, transcript) = take_order(input);
        assert!(transcript.contains(&format!("Sauce(s): {}\n", receipt.sauce_line())));
        assert!(transcript.contains(&format!("{}\n", receipt.total_line())));
    }
}
