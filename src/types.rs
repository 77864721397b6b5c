//! Core type definitions for the PromptPay payload encoder.
//!
//! This module contains the data model for payment instructions — the
//! credit-transfer / bill-payment variant split, the usage modes, and the
//! immutable [`PaymentInstruction`] produced by the builder — along with
//! the scheme constants used during assembly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::assembler;

/// Fixed value of the payload-format-indicator field (tag 00).
pub const PAYLOAD_FORMAT_INDICATOR: &str = "01";

/// Point-of-initiation value for a reusable (static) QR.
pub const STATIC_QR_CODE: &str = "11";

/// Point-of-initiation value for a single-use (dynamic) QR.
pub const DYNAMIC_QR_CODE: &str = "12";

/// Default transaction currency: Thai Baht, ISO 4217 numeric 764.
pub const DEFAULT_CURRENCY_CODE: &str = "764";

/// Default country code: Thailand.
pub const DEFAULT_COUNTRY_CODE: &str = "TH";

/// Telephone country calling code prepended to mobile-number proxies.
pub const DEFAULT_TELEPHONE_PREFIX: &str = "66";

/// Top-level tag of the credit-transfer merchant-identifier template.
pub const CREDIT_TRANSFER_FIELD_ID: u8 = 29;

/// Acquirer ID inside the credit-transfer template (sub-tag 00).
pub const CREDIT_TRANSFER_ACQUIRER_ID: &str = "A000000677010111";

/// Top-level tag of the bill-payment merchant-identifier template.
pub const BILL_PAYMENT_FIELD_ID: u8 = 30;

/// Acquirer ID inside the bill-payment template (sub-tag 00).
pub const BILL_PAYMENT_ACQUIRER_ID: &str = "A000000677010112";

/// Literal tag+length prefix of the checksum field. The CRC is computed
/// over the payload text that already contains this prefix.
pub const CHECKSUM_TAG_PREFIX: &str = "6304";

/// How the encoded payload will be consumed.
///
/// `StaticQr` and `DynamicQr` select the point-of-initiation value and
/// route through the TLV assembler. `BotText` selects the central-bank
/// bill-payment text profile, a 4-line pipe-delimited block with no TLV
/// structure and no checksum; it is only defined for bill payments.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UsageMode {
    /// Reusable QR; point of initiation "11"
    StaticQr,
    /// Single-use QR; point of initiation "12"
    DynamicQr,
    /// Alternate bill-payment text profile (no TLV, no checksum)
    BotText,
}

/// The single proxy identifier of a credit-transfer instruction.
///
/// Exactly one identifier is carried per instruction; the builder's
/// staging makes supplying zero or more than one unrepresentable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CreditTransferId {
    /// Mobile number, up to 10 digits (sub-tag 01)
    MobileNumber(String),
    /// National ID or tax ID, up to 13 digits (sub-tag 02)
    NationalId(String),
    /// E-wallet ID, up to 15 digits (sub-tag 03)
    EWalletId(String),
    /// Bank account number, up to 43 digits (sub-tag 04)
    BankAccount(String),
}

/// The payment variant: who is being paid and through which template.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Person-to-person or person-to-merchant transfer addressed by a
    /// single proxy identifier (top-level tag 29)
    CreditTransfer {
        /// The proxy the transfer is addressed to
        id: CreditTransferId,
    },
    /// Bill payment addressed by biller ID and references (top-level
    /// tag 30)
    BillPayment {
        /// Biller ID, up to 15 digits; mandatory
        biller_id: String,
        /// Reference 1, up to 15 alphanumerics; mandatory
        ref1: String,
        /// Reference 2, up to 20 alphanumerics
        ref2: Option<String>,
        /// Terminal ID / Reference 3, up to 26 alphanumerics; carried in
        /// the additional-data template (tag 62), never in the merchant
        /// template
        ref3: Option<String>,
    },
}

/// An immutable, fully-validated payment instruction.
///
/// Produced once by [`PromptPayBuilder`](crate::builder::PromptPayBuilder)
/// and never modified afterwards; regenerating a payload means building a
/// new instruction. All fields were validated as they were supplied, so
/// [`payload`](Self::payload) cannot fail.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PaymentInstruction {
    method: PaymentMethod,
    usage: UsageMode,
    amount: Option<Decimal>,
    currency_code: String,
    country_code: String,
}

impl PaymentInstruction {
    pub(crate) fn new(
        method: PaymentMethod,
        usage: UsageMode,
        amount: Option<Decimal>,
        currency_code: String,
        country_code: String,
    ) -> Self {
        Self {
            method,
            usage,
            amount,
            currency_code,
            country_code,
        }
    }

    /// The payment variant and its identifier or references.
    pub fn method(&self) -> &PaymentMethod {
        &self.method
    }

    /// The usage mode the instruction was built for.
    pub fn usage(&self) -> UsageMode {
        self.usage
    }

    /// The transaction amount, or `None` when no amount was specified.
    /// `Some(0)` is a valid explicit amount distinct from `None`.
    pub fn amount(&self) -> Option<Decimal> {
        self.amount
    }

    /// ISO 4217 numeric currency code (tag 53).
    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    /// Two-letter country code (tag 58).
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Encodes this instruction into its single-line text payload.
    ///
    /// For `StaticQr`/`DynamicQr` this is the EMVCo TLV string terminated
    /// by the tag-63 checksum; for `BotText` it is the 4-line text block.
    /// The result is deterministic: the same instruction always encodes
    /// to the same string.
    ///
    /// # Examples
    ///
    /// ```
    /// use promptpay_qr::PromptPayBuilder;
    ///
    /// let instruction = PromptPayBuilder::new()
    ///     .static_qr()
    ///     .credit_transfer()
    ///     .mobile_number("0812345678")?
    ///     .build()?;
    /// let payload = instruction.payload();
    /// assert!(payload.starts_with("000201"));
    /// # Ok::<(), promptpay_qr::PromptPayError>(())
    /// ```
    pub fn payload(&self) -> String {
        assembler::assemble(self)
    }
}

impl fmt::Display for PaymentInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.payload())
    }
}
