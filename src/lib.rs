//! # promptpay-qr
//!
//! An encoder for EMVCo "Merchant Presented QR" payment payloads as
//! profiled by the Thai PromptPay interbank scheme, plus the
//! central-bank bill-payment text profile.
//!
//! A payment instruction — a proxy identifier (mobile number, national
//! ID, e-wallet ID, bank account) or a biller reference, with an optional
//! amount — is encoded into a single-line tag-length-value string
//! terminated by a CRC-16 checksum field. The string is what a scanning
//! application reads once rendered as a QR code.
//!
//! ## Features
//!
//! - **Credit transfer**: addressed by exactly one proxy identifier
//! - **Bill payment**: biller ID plus up to three references
//! - **Static and dynamic QR**: reusable vs. single-use point of initiation
//! - **Bot text profile**: the alternate non-TLV bill-payment format
//! - **Typestate builder**: missing mandatory fields are compile errors,
//!   malformed values fail fast at the call that supplies them
//! - **QR rendering**: terminal text, BMP bytes, or base64 data URI
//!
//! ## Quick Start
//!
//! ### Credit transfer
//!
//! ```rust
//! use promptpay_qr::PromptPayBuilder;
//! use rust_decimal::Decimal;
//!
//! let instruction = PromptPayBuilder::new()
//!     .static_qr()
//!     .credit_transfer()
//!     .mobile_number("0812345678")?
//!     .amount(Decimal::new(10050, 2))? // 100.50
//!     .build()?;
//!
//! let payload = instruction.payload();
//! assert!(payload.starts_with("000201010211"));
//! assert_eq!(&payload[payload.len() - 8..payload.len() - 4], "6304");
//! # Ok::<(), promptpay_qr::PromptPayError>(())
//! ```
//!
//! ### Bill payment
//!
//! ```rust
//! use promptpay_qr::PromptPayBuilder;
//!
//! let instruction = PromptPayBuilder::new()
//!     .dynamic_qr()
//!     .bill_payment()
//!     .biller_id("0000000000001")?
//!     .ref1("INV001")?
//!     .ref2("CUST42")?
//!     .build()?;
//!
//! assert!(instruction.payload().contains("A000000677010112"));
//! # Ok::<(), promptpay_qr::PromptPayError>(())
//! ```
//!
//! ## Payload layout
//!
//! The TLV profile emits fields in a fixed order: payload format
//! indicator (00), point of initiation (01), the merchant-identifier
//! template (29 for credit transfer, 30 for bill payment), currency (53),
//! amount (54, only when supplied), country (58), the additional-data
//! template (62, only when a terminal ID is supplied), and the checksum
//! (63). The checksum is computed over the payload text including the
//! trailing `6304` tag prefix, matching what scanning terminals verify.
//!
//! Construction is pure and synchronous: no I/O, no shared state. Each
//! builder is independently owned, so concurrent construction from
//! multiple threads needs no coordination.

mod assembler;

pub mod builder;
pub mod checksum;
pub mod errors;
pub mod render;
pub mod tlv;
pub mod types;
pub mod validate;

pub use builder::PromptPayBuilder;
pub use errors::{PromptPayError, Result};
pub use types::{CreditTransferId, PaymentInstruction, PaymentMethod, UsageMode};
