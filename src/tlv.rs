//! Tag-length-value field codec.
//!
//! Every field of the merchant-presented payload is a 2-digit tag, a
//! 2-digit length, and the raw value. Fields nest: a field's value may
//! itself be a concatenation of fully-encoded sub-fields (the merchant
//! identifier template and the additional-data template both work this
//! way).

/// Encodes a single TLV field: zero-padded 2-digit tag, zero-padded
/// 2-digit length of the value, then the value itself.
///
/// The length counts UTF-8 bytes. For the ASCII-only field set the scheme
/// validates this is identical to the character count; if non-ASCII values
/// are ever admitted the byte count is the authoritative unit.
///
/// Callers must pre-validate the value; no validation happens here.
///
/// # Examples
///
/// ```
/// use promptpay_qr::tlv::encode_field;
///
/// assert_eq!(encode_field(0, "01"), "000201");
/// assert_eq!(encode_field(58, "TH"), "5802TH");
///
/// // Nested: a sub-field embedded as another field's value.
/// let inner = encode_field(7, "TERMINAL1");
/// assert_eq!(encode_field(62, &inner), "62130709TERMINAL1");
/// ```
pub fn encode_field(tag: u8, value: &str) -> String {
    debug_assert!(tag < 100, "TLV tag must fit in 2 decimal digits");
    debug_assert!(value.len() <= 99, "TLV value must fit in a 2-digit length");
    format!("{:02}{:02}{}", tag, value.len(), value)
}
