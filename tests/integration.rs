//! Integration tests for the promptpay-qr library.
//!
//! These exercise the full path from staged builder to finished payload,
//! pinned against the payload vectors published for the scheme.

use promptpay_qr::{
    checksum::crc16, CreditTransferId, PaymentMethod, PromptPayBuilder, PromptPayError, UsageMode,
};
use rust_decimal_macros::dec;

#[test]
fn test_static_credit_transfer_with_amount_vector() {
    let instruction = PromptPayBuilder::new()
        .static_qr()
        .credit_transfer()
        .mobile_number("0000000000")
        .unwrap()
        .amount(dec!(100))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        instruction.payload(),
        "00020101021129370016A00000067701011101130066000000000\
         53037645406100.005802TH6304D19E"
    );
}

#[test]
fn test_static_credit_transfer_without_amount_vector() {
    let instruction = PromptPayBuilder::new()
        .static_qr()
        .credit_transfer()
        .mobile_number("0000000000")
        .unwrap()
        .build()
        .unwrap();

    let payload = instruction.payload();
    assert_eq!(
        payload,
        "00020101021129370016A0000006770101110113006600000000053037645802TH630456EA"
    );
    assert!(!payload.contains("5406"));
}

#[test]
fn test_static_bill_payment_vector() {
    let instruction = PromptPayBuilder::new()
        .static_qr()
        .bill_payment()
        .biller_id("0000000000001")
        .unwrap()
        .ref1("1234")
        .unwrap()
        .ref2("2345")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        instruction.payload(),
        "00020101021130530016A0000006770101120113000000000000102041234030423455303764\
         5802TH6304E5DA"
    );
}

#[test]
fn test_bot_profile_vector() {
    let instruction = PromptPayBuilder::new()
        .bot_text()
        .bill_payment()
        .biller_id("000000000009132")
        .unwrap()
        .ref1("321312312")
        .unwrap()
        .ref2("432542353245")
        .unwrap()
        .amount(dec!(11.00))
        .unwrap()
        .build()
        .unwrap();

    let payload = instruction.payload();
    let lines: Vec<&str> = payload.lines().collect();
    assert_eq!(
        lines,
        vec!["|000000000009132", "321312312", "432542353245", "1100"]
    );
}

#[test]
fn test_dynamic_qr_point_of_initiation() {
    let instruction = PromptPayBuilder::new()
        .dynamic_qr()
        .credit_transfer()
        .national_id("1234567890123")
        .unwrap()
        .build()
        .unwrap();

    assert!(instruction.payload().starts_with("000201010212"));
}

#[test]
fn test_amount_absent_omits_tag_entirely() {
    for build in [
        PromptPayBuilder::new()
            .static_qr()
            .credit_transfer()
            .e_wallet_id("123456789012345")
            .unwrap()
            .build(),
        PromptPayBuilder::new()
            .static_qr()
            .credit_transfer()
            .bank_account("00123456789012")
            .unwrap()
            .build(),
    ] {
        let payload = build.unwrap().payload();
        assert!(!payload.contains("5406"), "payload: {payload}");
        assert!(!payload.contains("5404"), "payload: {payload}");
    }
}

#[test]
fn test_checksum_recomputes_from_prefix() {
    let instruction = PromptPayBuilder::new()
        .dynamic_qr()
        .bill_payment()
        .biller_id("099400015800000")
        .unwrap()
        .ref1("INV001")
        .unwrap()
        .ref3("TERM9")
        .unwrap()
        .amount(dec!(250.75))
        .unwrap()
        .build()
        .unwrap();

    let payload = instruction.payload();
    let (prefix, crc) = payload.split_at(payload.len() - 4);
    assert!(prefix.ends_with("6304"));
    assert_eq!(crc16(prefix.as_bytes()), crc);
    // Deterministic: a second encode yields the identical string.
    assert_eq!(instruction.payload(), payload);
}

#[test]
fn test_ref2_presence_changes_only_merchant_template() {
    let build = |with_ref2: bool| {
        let ready = PromptPayBuilder::new()
            .static_qr()
            .bill_payment()
            .biller_id("0000000000001")
            .unwrap()
            .ref1("1234")
            .unwrap();
        let ready = if with_ref2 {
            ready.ref2("2345").unwrap()
        } else {
            ready
        };
        ready.build().unwrap().payload()
    };

    let with_ref2 = build(true);
    let without_ref2 = build(false);

    // Both carry the same field tail after the merchant template; only
    // the template body and the checksum differ.
    assert!(with_ref2.contains("03042345"));
    assert!(!without_ref2.contains("03042345"));
    let tail = "53037645802TH6304";
    assert!(with_ref2.contains(tail));
    assert!(without_ref2.contains(tail));
}

#[test]
fn test_ref3_lands_in_additional_data_template() {
    let payload = PromptPayBuilder::new()
        .static_qr()
        .bill_payment()
        .biller_id("0000000000001")
        .unwrap()
        .ref1("1234")
        .unwrap()
        .ref3("TERMINAL1")
        .unwrap()
        .build()
        .unwrap()
        .payload();

    // Tag 62 wraps tag 07; the merchant template (tag 30) does not grow.
    assert!(payload.contains("62130709TERMINAL1"));
    assert!(payload.contains("30450016A000000677010112"));
}

#[test]
fn test_bot_profile_fails_for_every_credit_transfer_identifier() {
    let selectors: Vec<Box<dyn Fn() -> promptpay_qr::Result<_>>> = vec![
        Box::new(|| {
            PromptPayBuilder::new()
                .bot_text()
                .credit_transfer()
                .mobile_number("0812345678")
        }),
        Box::new(|| {
            PromptPayBuilder::new()
                .bot_text()
                .credit_transfer()
                .national_id("1234567890123")
        }),
        Box::new(|| {
            PromptPayBuilder::new()
                .bot_text()
                .credit_transfer()
                .e_wallet_id("123456789012345")
        }),
        Box::new(|| {
            PromptPayBuilder::new()
                .bot_text()
                .credit_transfer()
                .bank_account("1234567890")
        }),
    ];

    for selector in selectors {
        let result = selector().unwrap().build();
        assert!(matches!(
            result,
            Err(PromptPayError::BotProfileUnsupported)
        ));
    }
}

#[test]
fn test_over_precision_amount_fails_before_assembly() {
    let result = PromptPayBuilder::new()
        .static_qr()
        .credit_transfer()
        .mobile_number("0812345678")
        .unwrap()
        .amount(dec!(10.999));
    assert!(matches!(result, Err(PromptPayError::AmountPrecision)));

    let result = PromptPayBuilder::new()
        .static_qr()
        .bill_payment()
        .biller_id("0000000000001")
        .unwrap()
        .ref1("1234")
        .unwrap()
        .amount(dec!(-5));
    assert!(matches!(result, Err(PromptPayError::NegativeAmount)));
}

#[test]
fn test_custom_currency_and_country() {
    let payload = PromptPayBuilder::new()
        .currency_code("840")
        .unwrap()
        .country_code("us")
        .unwrap()
        .static_qr()
        .credit_transfer()
        .mobile_number("0812345678")
        .unwrap()
        .build()
        .unwrap()
        .payload();

    assert!(payload.contains("5303840"));
    assert!(payload.contains("5802US"));
}

#[test]
fn test_bot_profile_absent_amount_is_zero_line() {
    let payload = PromptPayBuilder::new()
        .bot_text()
        .bill_payment()
        .biller_id("0000000000001")
        .unwrap()
        .ref1("1234")
        .unwrap()
        .build()
        .unwrap()
        .payload();

    assert_eq!(payload.lines().count(), 4);
    assert_eq!(payload.lines().last(), Some("0"));
    assert!(!payload.contains("6304"));
}

#[test]
fn test_instruction_accessors_and_serialization() {
    let instruction = PromptPayBuilder::new()
        .static_qr()
        .credit_transfer()
        .mobile_number("0812345678")
        .unwrap()
        .amount(dec!(42.00))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(instruction.usage(), UsageMode::StaticQr);
    assert_eq!(instruction.amount(), Some(dec!(42.00)));
    assert!(matches!(
        instruction.method(),
        PaymentMethod::CreditTransfer {
            id: CreditTransferId::MobileNumber(number)
        } if number == "0812345678"
    ));

    let json = serde_json::to_string(&instruction).unwrap();
    assert!(json.contains("\"currency_code\":\"764\""));
    assert!(json.contains("\"static_qr\""));
}

#[test]
fn test_rendering_round_trip() {
    let instruction = PromptPayBuilder::new()
        .static_qr()
        .credit_transfer()
        .mobile_number("0812345678")
        .unwrap()
        .build()
        .unwrap();

    let bmp = instruction.qr_bmp(Some(3)).unwrap();
    assert_eq!(&bmp[..2], b"BM");

    let uri = instruction.qr_base64_uri(None).unwrap();
    assert!(uri.starts_with("data:image/bmp;base64,"));

    assert!(!instruction.qr_text().unwrap().is_empty());
}
