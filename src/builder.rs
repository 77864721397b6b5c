//! Staged construction of payment instructions.
//!
//! The builder is a one-directional state machine expressed as typestate:
//! each step consumes the current stage and returns the next, so a caller
//! cannot reach `build()` before the mandatory fields of the selected
//! variant are present, cannot supply two identifiers to a credit
//! transfer, and cannot change the variant once it is selected.
//!
//! Stages:
//!
//! ```text
//! PromptPayBuilder ──(static_qr / dynamic_qr / bot_text)──▶ VariantSelector
//! VariantSelector ──(credit_transfer)──▶ CreditTransferBuilder
//!                 ──(bill_payment)────▶ BillPaymentBuilder
//! CreditTransferBuilder ──(one identifier)──▶ CreditTransferReady ──▶ build()
//! BillPaymentBuilder ──(biller_id)──▶ BillPaymentRef1 ──(ref1)──▶
//!     BillPaymentReady ──(ref2 / ref3 / amount)*──▶ build()
//! ```
//!
//! Every setter validates its value immediately; the first violation wins
//! and is returned as an error without touching later fields.
//!
//! # Examples
//!
//! ```
//! use promptpay_qr::PromptPayBuilder;
//! use rust_decimal::Decimal;
//!
//! let instruction = PromptPayBuilder::new()
//!     .dynamic_qr()
//!     .credit_transfer()
//!     .mobile_number("0812345678")?
//!     .amount(Decimal::new(10000, 2))? // 100.00
//!     .build()?;
//! assert!(instruction.payload().starts_with("000201010212"));
//! # Ok::<(), promptpay_qr::PromptPayError>(())
//! ```

use rust_decimal::Decimal;

use crate::assembler::format_amount;
use crate::errors::{PromptPayError, Result};
use crate::types::{
    CreditTransferId, PaymentInstruction, PaymentMethod, UsageMode, DEFAULT_COUNTRY_CODE,
    DEFAULT_CURRENCY_CODE,
};
use crate::validate;

/// Shared fields captured before the variant is selected.
#[derive(Debug, Clone)]
struct Base {
    usage: UsageMode,
    currency_code: String,
    country_code: String,
}

/// Entry stage: optional currency/country overrides, then usage-mode
/// selection.
#[derive(Debug, Clone)]
pub struct PromptPayBuilder {
    currency_code: String,
    country_code: String,
}

impl PromptPayBuilder {
    /// Starts a new builder with the scheme defaults: currency 764
    /// (Thai Baht) and country TH.
    pub fn new() -> Self {
        Self {
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }

    /// Overrides the transaction currency (3-digit ISO 4217 numeric
    /// code). Only structural shape is validated.
    pub fn currency_code(mut self, currency_code: &str) -> Result<Self> {
        validate::numeric("Currency Code", currency_code)?;
        validate::max_length("Currency Code", currency_code, 3)?;
        self.currency_code = currency_code.to_string();
        Ok(self)
    }

    /// Overrides the country code (2 letters, uppercased on input).
    pub fn country_code(mut self, country_code: &str) -> Result<Self> {
        validate::alphanumeric("Country Code", country_code)?;
        validate::max_length("Country Code", country_code, 2)?;
        self.country_code = country_code.to_uppercase();
        Ok(self)
    }

    /// Selects a reusable (static) QR payload.
    pub fn static_qr(self) -> VariantSelector {
        self.with_usage(UsageMode::StaticQr)
    }

    /// Selects a single-use (dynamic) QR payload.
    pub fn dynamic_qr(self) -> VariantSelector {
        self.with_usage(UsageMode::DynamicQr)
    }

    /// Selects the central-bank bill-payment text profile. Only valid for
    /// bill payments; building a credit transfer in this mode fails with
    /// [`PromptPayError::BotProfileUnsupported`].
    pub fn bot_text(self) -> VariantSelector {
        self.with_usage(UsageMode::BotText)
    }

    fn with_usage(self, usage: UsageMode) -> VariantSelector {
        VariantSelector {
            base: Base {
                usage,
                currency_code: self.currency_code,
                country_code: self.country_code,
            },
        }
    }
}

impl Default for PromptPayBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Stage after the usage mode is fixed: pick the payment variant. The
/// choice is final; there is no way back to an earlier stage.
#[derive(Debug, Clone)]
pub struct VariantSelector {
    base: Base,
}

impl VariantSelector {
    /// Selects the credit-transfer variant (merchant template tag 29).
    pub fn credit_transfer(self) -> CreditTransferBuilder {
        CreditTransferBuilder { base: self.base }
    }

    /// Selects the bill-payment variant (merchant template tag 30).
    pub fn bill_payment(self) -> BillPaymentBuilder {
        BillPaymentBuilder { base: self.base }
    }
}

/// Credit-transfer stage awaiting its single proxy identifier.
#[derive(Debug, Clone)]
pub struct CreditTransferBuilder {
    base: Base,
}

impl CreditTransferBuilder {
    /// Supplies a mobile-number proxy (up to 10 digits).
    pub fn mobile_number(self, mobile_number: &str) -> Result<CreditTransferReady> {
        validate::numeric("Mobile Number", mobile_number)?;
        validate::max_length("Mobile Number", mobile_number, 10)?;
        Ok(self.with_id(CreditTransferId::MobileNumber(mobile_number.to_string())))
    }

    /// Supplies a national-ID or tax-ID proxy (up to 13 digits).
    pub fn national_id(self, national_id: &str) -> Result<CreditTransferReady> {
        validate::numeric("National ID/Tax ID", national_id)?;
        validate::max_length("National ID/Tax ID", national_id, 13)?;
        Ok(self.with_id(CreditTransferId::NationalId(national_id.to_string())))
    }

    /// Supplies an e-wallet-ID proxy (up to 15 digits).
    pub fn e_wallet_id(self, e_wallet_id: &str) -> Result<CreditTransferReady> {
        validate::numeric("E-Wallet ID", e_wallet_id)?;
        validate::max_length("E-Wallet ID", e_wallet_id, 15)?;
        Ok(self.with_id(CreditTransferId::EWalletId(e_wallet_id.to_string())))
    }

    /// Supplies a bank-account proxy (up to 43 digits).
    pub fn bank_account(self, bank_account: &str) -> Result<CreditTransferReady> {
        validate::numeric("Bank Account", bank_account)?;
        validate::max_length("Bank Account", bank_account, 43)?;
        Ok(self.with_id(CreditTransferId::BankAccount(bank_account.to_string())))
    }

    fn with_id(self, id: CreditTransferId) -> CreditTransferReady {
        CreditTransferReady {
            base: self.base,
            id,
            amount: None,
        }
    }
}

/// Credit-transfer stage with its identifier set; optionally takes an
/// amount, then builds.
#[derive(Debug, Clone)]
pub struct CreditTransferReady {
    base: Base,
    id: CreditTransferId,
    amount: Option<Decimal>,
}

impl CreditTransferReady {
    /// Sets the transaction amount. Omitting this call omits the amount
    /// field from the payload entirely; an explicit zero is encoded.
    pub fn amount(mut self, amount: Decimal) -> Result<Self> {
        validate::amount(amount)?;
        self.amount = Some(amount);
        Ok(self)
    }

    /// Finalizes the instruction. Fails if the bill-payment text profile
    /// was selected, since that profile has no credit-transfer encoding.
    pub fn build(self) -> Result<PaymentInstruction> {
        if self.base.usage == UsageMode::BotText {
            return Err(PromptPayError::BotProfileUnsupported);
        }
        Ok(PaymentInstruction::new(
            PaymentMethod::CreditTransfer { id: self.id },
            self.base.usage,
            self.amount,
            self.base.currency_code,
            self.base.country_code,
        ))
    }
}

/// Bill-payment stage awaiting the mandatory biller ID.
#[derive(Debug, Clone)]
pub struct BillPaymentBuilder {
    base: Base,
}

impl BillPaymentBuilder {
    /// Supplies the biller ID (tax ID plus suffix, up to 15 digits).
    pub fn biller_id(self, biller_id: &str) -> Result<BillPaymentRef1> {
        validate::numeric("Biller ID", biller_id)?;
        validate::max_length("Biller ID", biller_id, 15)?;
        Ok(BillPaymentRef1 {
            base: self.base,
            biller_id: biller_id.to_string(),
        })
    }
}

/// Bill-payment stage awaiting the mandatory reference 1.
#[derive(Debug, Clone)]
pub struct BillPaymentRef1 {
    base: Base,
    biller_id: String,
}

impl BillPaymentRef1 {
    /// Supplies reference 1 (up to 15 alphanumerics).
    pub fn ref1(self, ref1: &str) -> Result<BillPaymentReady> {
        validate::alphanumeric("Reference 1", ref1)?;
        validate::max_length("Reference 1", ref1, 15)?;
        Ok(BillPaymentReady {
            base: self.base,
            biller_id: self.biller_id,
            ref1: ref1.to_string(),
            ref2: None,
            ref3: None,
            amount: None,
        })
    }
}

/// Bill-payment stage with all mandatory fields present; optional
/// details, then build.
#[derive(Debug, Clone)]
pub struct BillPaymentReady {
    base: Base,
    biller_id: String,
    ref1: String,
    ref2: Option<String>,
    ref3: Option<String>,
    amount: Option<Decimal>,
}

impl BillPaymentReady {
    /// Supplies reference 2 (up to 20 alphanumerics).
    pub fn ref2(mut self, ref2: &str) -> Result<Self> {
        validate::alphanumeric("Reference 2", ref2)?;
        validate::max_length("Reference 2", ref2, 20)?;
        self.ref2 = Some(ref2.to_string());
        Ok(self)
    }

    /// Supplies the terminal ID / reference 3 (up to 26 alphanumerics).
    /// Carried in the additional-data template, tag 62.
    pub fn ref3(mut self, ref3: &str) -> Result<Self> {
        validate::alphanumeric("Terminal ID/Reference 3", ref3)?;
        validate::max_length("Terminal ID/Reference 3", ref3, 26)?;
        self.ref3 = Some(ref3.to_string());
        Ok(self)
    }

    /// Sets the transaction amount. The formatted "0.00" form must also
    /// fit the bill-payment amount field of 13 characters.
    pub fn amount(mut self, amount: Decimal) -> Result<Self> {
        validate::amount(amount)?;
        validate::max_length("Amount", &format_amount(amount), 13)?;
        self.amount = Some(amount);
        Ok(self)
    }

    /// Finalizes the instruction.
    pub fn build(self) -> Result<PaymentInstruction> {
        Ok(PaymentInstruction::new(
            PaymentMethod::BillPayment {
                biller_id: self.biller_id,
                ref1: self.ref1,
                ref2: self.ref2,
                ref3: self.ref3,
            },
            self.base.usage,
            self.amount,
            self.base.currency_code,
            self.base.country_code,
        ))
    }
}
