//! Payload assembly.
//!
//! Orders the top-level fields, builds the merchant-identifier template
//! through the TLV codec, and terminates the payload with the CRC-16
//! checksum field. The assembler trusts the builder's invariants and does
//! not re-validate; it is a pure function of the instruction.

use rust_decimal::Decimal;

use crate::checksum::crc16;
use crate::tlv::encode_field;
use crate::types::{
    CreditTransferId, PaymentInstruction, PaymentMethod, UsageMode, BILL_PAYMENT_ACQUIRER_ID,
    BILL_PAYMENT_FIELD_ID, CHECKSUM_TAG_PREFIX, CREDIT_TRANSFER_ACQUIRER_ID,
    CREDIT_TRANSFER_FIELD_ID, DEFAULT_TELEPHONE_PREFIX, DYNAMIC_QR_CODE,
    PAYLOAD_FORMAT_INDICATOR, STATIC_QR_CODE,
};

/// Encodes an instruction into its final text payload.
pub(crate) fn assemble(instruction: &PaymentInstruction) -> String {
    match (instruction.usage(), instruction.method()) {
        (
            UsageMode::BotText,
            PaymentMethod::BillPayment {
                biller_id,
                ref1,
                ref2,
                ..
            },
        ) => bot_text(biller_id, ref1, ref2.as_deref(), instruction.amount()),
        _ => tlv_payload(instruction),
    }
}

/// Formats an amount with exactly two fractional digits, as tag 54
/// requires.
pub(crate) fn format_amount(amount: Decimal) -> String {
    format!("{amount:.2}")
}

fn tlv_payload(instruction: &PaymentInstruction) -> String {
    let mut payload = String::new();
    payload.push_str(&encode_field(0, PAYLOAD_FORMAT_INDICATOR));
    let point_of_initiation = match instruction.usage() {
        UsageMode::DynamicQr => DYNAMIC_QR_CODE,
        _ => STATIC_QR_CODE,
    };
    payload.push_str(&encode_field(1, point_of_initiation));
    payload.push_str(&merchant_template(instruction.method()));
    payload.push_str(&encode_field(53, instruction.currency_code()));
    if let Some(amount) = instruction.amount() {
        payload.push_str(&encode_field(54, &format_amount(amount)));
    }
    payload.push_str(&encode_field(58, instruction.country_code()));
    if let PaymentMethod::BillPayment {
        ref3: Some(ref3), ..
    } = instruction.method()
    {
        payload.push_str(&encode_field(62, &encode_field(7, ref3)));
    }
    // The CRC covers the assembled text including the trailing tag+length
    // prefix of the checksum field itself.
    payload.push_str(CHECKSUM_TAG_PREFIX);
    let crc = crc16(payload.as_bytes());
    payload.push_str(&crc);
    payload
}

fn merchant_template(method: &PaymentMethod) -> String {
    match method {
        PaymentMethod::CreditTransfer { id } => {
            let mut value = encode_field(0, CREDIT_TRANSFER_ACQUIRER_ID);
            match id {
                CreditTransferId::MobileNumber(number) => {
                    // One leading zero is dropped and replaced by the
                    // international "00" + country calling code prefix.
                    let national = number.strip_prefix('0').unwrap_or(number);
                    let proxy = format!("00{DEFAULT_TELEPHONE_PREFIX}{national}");
                    value.push_str(&encode_field(1, &proxy));
                }
                CreditTransferId::NationalId(id) => value.push_str(&encode_field(2, id)),
                CreditTransferId::EWalletId(id) => value.push_str(&encode_field(3, id)),
                CreditTransferId::BankAccount(account) => {
                    value.push_str(&encode_field(4, account))
                }
            }
            encode_field(CREDIT_TRANSFER_FIELD_ID, &value)
        }
        PaymentMethod::BillPayment {
            biller_id,
            ref1,
            ref2,
            ..
        } => {
            let mut value = encode_field(0, BILL_PAYMENT_ACQUIRER_ID);
            value.push_str(&encode_field(1, biller_id));
            value.push_str(&encode_field(2, ref1));
            if let Some(ref2) = ref2 {
                value.push_str(&encode_field(3, ref2));
            }
            encode_field(BILL_PAYMENT_FIELD_ID, &value)
        }
    }
}

/// The central-bank bill-payment text profile: 4 newline-joined lines,
/// amount in minor units truncated toward zero, no TLV, no checksum.
fn bot_text(
    biller_id: &str,
    ref1: &str,
    ref2: Option<&str>,
    amount: Option<Decimal>,
) -> String {
    let minor_units = match amount {
        Some(amount) => (amount * Decimal::ONE_HUNDRED).trunc().normalize().to_string(),
        None => "0".to_string(),
    };
    format!("|{biller_id}\n{ref1}\n{}\n{minor_units}", ref2.unwrap_or(""))
}
